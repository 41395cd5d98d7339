use crate::ai::{answer_question, evaluate_exam, generate_questions, GenAiClient};
use crate::extract::{extract_sections, ExtractError};
use crate::logger;
use crate::models::{AiRequest, AiResponse};
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

/// Background worker owning the blocking side: document extraction and the
/// network calls. The UI thread stays synchronous; requests come in over one
/// channel and epoch/task-tagged responses go back over the other. The tokio
/// runtime and the HTTP client live for the worker's lifetime; a missing API
/// key is reported per request rather than killing the thread.
pub fn spawn_ai_worker(
    ai_tx: Sender<AiResponse>,
    ai_rx: Receiver<AiRequest>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("studymate::ai_worker".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log(&format!("Worker failed to build a tokio runtime: {}", e));
                    return;
                }
            };
            let client = GenAiClient::new();

            loop {
                match ai_rx.recv() {
                    Ok(AiRequest::ExtractDocument {
                        epoch,
                        path,
                        policy,
                    }) => {
                        logger::log(&format!("Worker extracting {}", path.display()));
                        let response = match extract_sections(&path, policy) {
                            Ok(outcome) => AiResponse::Extracted { epoch, outcome },
                            Err(e) => AiResponse::ExtractionFailed {
                                epoch,
                                unsupported: matches!(e, ExtractError::UnsupportedType(_)),
                                error: e.to_string(),
                            },
                        };
                        let _ = ai_tx.send(response);
                    }
                    Ok(AiRequest::GenerateQuestions {
                        epoch,
                        model,
                        section,
                        config,
                    }) => {
                        logger::log(&format!(
                            "Worker received generation request, epoch {}",
                            epoch
                        ));
                        let result = match &client {
                            Ok(client) => {
                                rt.block_on(generate_questions(client, &model, &section, &config))
                            }
                            Err(e) => {
                                let _ = ai_tx.send(AiResponse::GenerationFailed {
                                    epoch,
                                    error: e.to_string(),
                                });
                                continue;
                            }
                        };

                        match result {
                            Ok(questions) => {
                                logger::log(&format!(
                                    "Worker sending {} generated questions",
                                    questions.len()
                                ));
                                let _ = ai_tx.send(AiResponse::Questions { epoch, questions });
                            }
                            Err(e) => {
                                logger::log(&format!("Worker generation error: {}", e));
                                let _ = ai_tx.send(AiResponse::GenerationFailed {
                                    epoch,
                                    error: e.to_string(),
                                });
                            }
                        }
                    }
                    Ok(AiRequest::AnswerQuestion {
                        task_id,
                        model,
                        question,
                    }) => {
                        logger::log(&format!("Worker answering question, task {}", task_id));
                        let result = match &client {
                            Ok(client) => rt.block_on(answer_question(client, &model, &question)),
                            Err(e) => {
                                let _ = ai_tx.send(AiResponse::AnswerFailed {
                                    task_id,
                                    error: e.to_string(),
                                });
                                continue;
                            }
                        };

                        match result {
                            Ok(answer) => {
                                let _ = ai_tx.send(AiResponse::QuestionAnswered { task_id, answer });
                            }
                            Err(e) => {
                                logger::log(&format!("Worker answer error: {}", e));
                                let _ = ai_tx.send(AiResponse::AnswerFailed {
                                    task_id,
                                    error: e.to_string(),
                                });
                            }
                        }
                    }
                    Ok(AiRequest::EvaluateExam {
                        task_id,
                        model,
                        title,
                    }) => {
                        logger::log(&format!(
                            "Worker received exam evaluation, task {}",
                            task_id
                        ));
                        let result = match &client {
                            Ok(client) => rt.block_on(evaluate_exam(client, &model, &title)),
                            Err(e) => {
                                let _ = ai_tx.send(AiResponse::ExamFailed {
                                    task_id,
                                    error: e.to_string(),
                                });
                                continue;
                            }
                        };

                        match result {
                            Ok(feedback) => {
                                let _ = ai_tx.send(AiResponse::ExamEvaluated { task_id, feedback });
                            }
                            Err(e) => {
                                logger::log(&format!("Worker exam error: {}", e));
                                let _ = ai_tx.send(AiResponse::ExamFailed {
                                    task_id,
                                    error: e.to_string(),
                                });
                            }
                        }
                    }
                    Err(_) => {
                        // Channel disconnected, exit worker
                        logger::log("Worker channel disconnected, exiting");
                        break;
                    }
                }
            }
        })
        .expect("Failed to spawn AI worker thread")
}
