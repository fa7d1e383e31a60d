use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::path::Path;

/// Format one CSV record, quoting fields where required.
pub fn format_record(fields: &[&str]) -> String {
    let encoded: Vec<String> = fields
        .iter()
        .map(|field| {
            if needs_quoting(field) {
                format!("\"{}\"", field.replace('"', "\"\""))
            } else {
                (*field).to_string()
            }
        })
        .collect();
    encoded.join(",")
}

fn needs_quoting(field: &str) -> bool {
    field.contains([',', '"', '\r', '\n'])
}

/// Split one CSV record into fields, honoring double-quoted fields
/// and doubled quotes inside them.
pub fn parse_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }

    fields.push(field);
    fields
}

/// Read a CSV file with a header row into column-keyed records.
///
/// Records preserve header order; rows shorter than the header simply
/// omit the trailing keys, extra fields are ignored.
pub fn read_records(path: &Path) -> Result<Vec<IndexMap<String, String>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;

    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let headers = match lines.next() {
        Some(line) => parse_record(line),
        None => return Ok(Vec::new()),
    };

    let mut records = Vec::new();
    for line in lines {
        let fields = parse_record(line);
        let record: IndexMap<String, String> = headers.iter().cloned().zip(fields).collect();
        records.push(record);
    }

    Ok(records)
}
