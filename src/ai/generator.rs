use crate::ai::client::{GenAiClient, GenerateError};
use crate::models::{
    GenerationConfig, Section, MAX_QUESTION_COUNT, MIN_QUESTION_COUNT,
};

/// The prompt uses the section's title only, never its extracted content.
pub fn build_prompt(section: &Section, config: &GenerationConfig) -> String {
    format!(
        "Generate {} {} questions on {}.",
        config.question_count, config.difficulty, section.title
    )
}

/// The UI's controls clamp the count, but the request boundary does not
/// trust them.
pub fn validate_config(config: &GenerationConfig) -> Result<(), GenerateError> {
    if config.question_count < MIN_QUESTION_COUNT || config.question_count > MAX_QUESTION_COUNT {
        return Err(GenerateError::InvalidQuestionCount(config.question_count));
    }
    Ok(())
}

/// Raw response text to ordered question lines, split on newline boundaries
/// exactly as returned.
pub fn split_questions(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// One generation cycle against the text-generation service.
pub async fn generate_questions(
    client: &GenAiClient,
    model: &str,
    section: &Section,
    config: &GenerationConfig,
) -> Result<Vec<String>, GenerateError> {
    validate_config(config)?;
    let prompt = build_prompt(section, config);
    crate::logger::log(&format!("Requesting generation: {}", prompt));

    let text = client.generate_text(model, &prompt).await?;
    Ok(split_questions(&text))
}

/// An answer for a typed or photographed question.
pub async fn answer_question(
    client: &GenAiClient,
    model: &str,
    question: &str,
) -> Result<String, GenerateError> {
    let prompt = format!(
        "Provide a concise answer to the student's question: {}",
        question
    );
    client.generate_text(model, &prompt).await
}

/// Feedback for an uploaded exam, round-tripped through the same
/// collaborator instead of a fabricated timer result.
pub async fn evaluate_exam(
    client: &GenAiClient,
    model: &str,
    exam_title: &str,
) -> Result<String, GenerateError> {
    let prompt = format!(
        "Provide brief feedback for a student's uploaded exam titled {}.",
        exam_title
    );
    client.generate_text(model, &prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, SectionContent};

    fn section_titled(title: &str) -> Section {
        Section {
            id: "0".to_string(),
            title: title.to_string(),
            content: SectionContent::RawText("ignored by the prompt".to_string()),
        }
    }

    #[test]
    fn test_prompt_exact_shape() {
        let config = GenerationConfig {
            question_count: 5,
            difficulty: Difficulty::Hard,
        };
        let prompt = build_prompt(&section_titled("Chapter 2: Geometry"), &config);
        assert_eq!(prompt, "Generate 5 Hard questions on Chapter 2: Geometry.");
    }

    #[test]
    fn test_prompt_ignores_section_content() {
        let config = GenerationConfig {
            question_count: 10,
            difficulty: Difficulty::Medium,
        };
        let prompt = build_prompt(&section_titled("Page 3"), &config);
        assert_eq!(prompt, "Generate 10 Medium questions on Page 3.");
        assert!(!prompt.contains("ignored by the prompt"));
    }

    #[test]
    fn test_split_preserves_order() {
        assert_eq!(split_questions("Q1\nQ2\nQ3"), vec!["Q1", "Q2", "Q3"]);
    }

    #[test]
    fn test_split_single_line() {
        assert_eq!(split_questions("only one"), vec!["only one"]);
    }

    #[test]
    fn test_validate_rejects_out_of_range_counts() {
        for count in [0, 4, 51, 1000] {
            let config = GenerationConfig {
                question_count: count,
                difficulty: Difficulty::Easy,
            };
            assert!(matches!(
                validate_config(&config),
                Err(GenerateError::InvalidQuestionCount(c)) if c == count
            ));
        }
    }

    #[test]
    fn test_validate_accepts_bounds() {
        for count in [5, 50] {
            let config = GenerationConfig {
                question_count: count,
                difficulty: Difficulty::Easy,
            };
            assert!(validate_config(&config).is_ok());
        }
    }
}
