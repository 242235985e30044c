//! CSV question import.
//!
//! Expected header: `text`, `type`, one or more `option_*` columns and
//! `correct` (or `correct_answer`). The `correct` cell lists option
//! letters (`A` is the first option column) separated by `,`, `;` or `|`.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::QuestionType,
        dto::request::{CreateOptionRequest, CreateQuestionRequest},
    },
};

#[derive(Debug)]
pub struct ParsedRow {
    /// 1-based index among data rows.
    pub row_number: usize,
    pub outcome: Result<CreateQuestionRequest, String>,
}

struct Columns {
    text: usize,
    question_type: usize,
    correct: usize,
    options: Vec<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> AppResult<Self> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.trim().to_lowercase().replace(' ', "_"))
            .collect();

        let find = |names: &[&str]| normalized.iter().position(|h| names.contains(&h.as_str()));

        let text = find(&["text", "question", "question_text"])
            .ok_or_else(|| missing_column("text"))?;
        let question_type = find(&["type", "question_type"])
            .ok_or_else(|| missing_column("type"))?;
        let correct = find(&["correct", "correct_answer", "correct_options", "answer"])
            .ok_or_else(|| missing_column("correct"))?;
        let options: Vec<usize> = normalized
            .iter()
            .enumerate()
            .filter(|(_, h)| h.starts_with("option"))
            .map(|(i, _)| i)
            .collect();

        if options.is_empty() {
            return Err(missing_column("option_a"));
        }

        Ok(Columns {
            text,
            question_type,
            correct,
            options,
        })
    }
}

fn missing_column(name: &str) -> AppError {
    AppError::ValidationFailed(format!("Spreadsheet is missing the '{}' column.", name))
}

/// Splits a CSV document into per-row question requests. Header problems fail
/// the whole file; anything wrong inside a row is reported on that row only.
pub fn parse_question_rows(quiz_id: &str, data: &[u8]) -> AppResult<Vec<ParsedRow>> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::ValidationFailed("File is required.".to_string()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(data);

    let columns = Columns::locate(reader.headers()?)?;

    let rows = reader
        .records()
        .enumerate()
        .map(|(index, record)| {
            let outcome = match record {
                Ok(record) => parse_row(quiz_id, &columns, &record),
                Err(e) => Err(format!("Unreadable row ({}).", e)),
            };
            ParsedRow {
                row_number: index + 1,
                outcome,
            }
        })
        .collect();

    Ok(rows)
}

fn parse_row(
    quiz_id: &str,
    columns: &Columns,
    record: &StringRecord,
) -> Result<CreateQuestionRequest, String> {
    let cell = |i: usize| record.get(i).unwrap_or("").trim();

    let text = cell(columns.text);
    if text.is_empty() {
        return Err("Question text is required.".to_string());
    }

    let question_type: QuestionType = cell(columns.question_type)
        .parse()
        .map_err(|e: AppError| e.message().to_string())?;

    let correct_letters = parse_correct_letters(cell(columns.correct))?;

    let mut options = Vec::new();
    for (position, &column) in columns.options.iter().enumerate() {
        let option_text = cell(column);
        let is_correct = correct_letters.contains(&position);
        if option_text.is_empty() {
            if is_correct {
                return Err(format!(
                    "Correct answer '{}' points at an empty option.",
                    option_letter(position)
                ));
            }
            continue;
        }
        options.push(CreateOptionRequest {
            text: option_text.to_string(),
            is_correct,
        });
    }

    if let Some(&out_of_range) = correct_letters.iter().find(|&&p| p >= columns.options.len()) {
        return Err(format!(
            "Correct answer '{}' does not match an option column.",
            option_letter(out_of_range)
        ));
    }

    Ok(CreateQuestionRequest {
        quiz_id: quiz_id.to_string(),
        text: text.to_string(),
        question_type,
        options,
    })
}

fn parse_correct_letters(value: &str) -> Result<Vec<usize>, String> {
    value
        .split(|c| matches!(c, ',' | ';' | '|'))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => {
                    Ok((c.to_ascii_uppercase() as u8 - b'A') as usize)
                }
                _ => Err(format!("Invalid correct answer '{}'; use option letters.", token)),
            }
        })
        .collect()
}

fn option_letter(position: usize) -> char {
    (b'A' + position as u8) as char
}
