use crate::models::{Section, SectionContent};

/// Split one CSV line into fields. Handles quoted fields, commas inside
/// quotes, and `""` escapes inside quoted fields.
pub fn parse_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(current);
    fields
}

/// First row is the header; every following non-blank row becomes one
/// section. The row keeps its cells as ordered key-value pairs under the
/// header names. A row's `title` cell names the section when it is
/// non-empty, otherwise the section is named by its 1-indexed position.
pub fn extract_tabular_sections(content: &str) -> Vec<Section> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let header = match lines.next() {
        Some(line) => parse_row(line),
        None => return Vec::new(),
    };

    let mut sections = Vec::new();
    for line in lines {
        let values = parse_row(line);
        let fields: Vec<(String, String)> = header
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), values.get(i).cloned().unwrap_or_default()))
            .collect();

        let index = sections.len();
        let title = fields
            .iter()
            .find(|(name, _)| name == "title")
            .map(|(_, value)| value.clone())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| format!("Section {}", index + 1));

        sections.push(Section {
            id: index.to_string(),
            title,
            content: SectionContent::StructuredRow(fields),
        });
    }

    sections
}
