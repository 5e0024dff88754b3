//! Turns free-form model replies into question records.

use crate::generator::{Completion, GeneratedQuestion};
use serde_json::{Map, Value};
use thiserror::Error;

const MAX_WRONG_OPTIONS: usize = 3;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON array of questions")]
    NotAnArray,

    #[error("expected a JSON object")]
    NotAnObject,

    #[error("reply contains no questions")]
    NoQuestions,

    #[error("question {index} has no usable `{field}`")]
    MissingField { index: usize, field: &'static str },
}

/// Removes markdown code fences. Anything outside the first fenced block is dropped.
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let Some(start) = text.find("```") else {
        return text.trim();
    };
    let after_open = &text[start + 3..];
    // Skip the language tag, e.g. ```json
    let body = match after_open.find('\n') {
        Some(newline) if after_open[..newline].trim().chars().all(char::is_alphanumeric) => {
            &after_open[newline + 1..]
        }
        _ => after_open,
    };
    match body.find("```") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}

fn parse_value(text: &str) -> Result<Value, ParseError> {
    Ok(serde_json::from_str(strip_code_fences(text))?)
}

pub fn parse_batch(text: &str) -> Result<Vec<GeneratedQuestion>, ParseError> {
    let Value::Array(items) = parse_value(text)? else {
        return Err(ParseError::NotAnArray);
    };
    if items.is_empty() {
        return Err(ParseError::NoQuestions);
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => parse_record(index, record),
            _ => Err(ParseError::NotAnObject),
        })
        .collect()
}

pub fn parse_single(text: &str) -> Result<GeneratedQuestion, ParseError> {
    match parse_value(text)? {
        Value::Object(record) => parse_record(0, &record),
        _ => Err(ParseError::NotAnObject),
    }
}

/// Reads answer, distractors and pattern for a question whose text is already known.
pub fn parse_completion(text: &str) -> Result<Completion, ParseError> {
    let Value::Object(record) = parse_value(text)? else {
        return Err(ParseError::NotAnObject);
    };
    let correct_answer = answer(0, &record)?;
    let wrong_options = wrong_options(&record, &correct_answer);
    Ok(Completion {
        correct_answer,
        wrong_options,
        pattern: record.get("pattern").and_then(as_text),
    })
}

fn parse_record(index: usize, record: &Map<String, Value>) -> Result<GeneratedQuestion, ParseError> {
    let question = record
        .get("question")
        .and_then(as_text)
        .ok_or(ParseError::MissingField {
            index,
            field: "question",
        })?;
    let correct_answer = answer(index, record)?;
    let wrong_options = wrong_options(record, &correct_answer);

    Ok(GeneratedQuestion {
        question,
        correct_answer,
        wrong_options,
        pattern: record.get("pattern").and_then(as_text),
    })
}

fn answer(index: usize, record: &Map<String, Value>) -> Result<String, ParseError> {
    if let Some(answer) = record.get("correct_answer").and_then(as_text) {
        return Ok(answer);
    }
    // Older prompt format: `answer` may carry a worked explanation after the result
    record
        .get("answer")
        .and_then(as_text)
        .and_then(|answer| {
            let cut = answer.split(['(', '\n']).next().unwrap_or_default().trim();
            (!cut.is_empty()).then(|| cut.to_owned())
        })
        .ok_or(ParseError::MissingField {
            index,
            field: "correct_answer",
        })
}

fn wrong_options(record: &Map<String, Value>, correct_answer: &str) -> Vec<String> {
    let Some(Value::Array(values)) = record.get("wrong_options") else {
        return Vec::new();
    };

    let mut options: Vec<String> = Vec::with_capacity(MAX_WRONG_OPTIONS);
    for option in values.iter().filter_map(as_text) {
        if option == correct_answer || options.contains(&option) {
            continue;
        }
        options.push(option);
        if options.len() == MAX_WRONG_OPTIONS {
            break;
        }
    }
    options
}

fn as_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.trim().to_owned(),
        Value::Number(number) => number.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}
