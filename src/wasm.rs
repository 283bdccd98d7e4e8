//! WASM entry point for browser-side analytics tooling.

use wasm_bindgen::prelude::*;

use crate::diagnostics::{CollectedDiagnostics, Message};
use crate::emit;
use crate::error::DagError;
use crate::parse::{self, ParseOptions};

/// Convert DAG text into a JSON trace.
/// Returns an object with either `document` (success) or `errors` (failure).
#[wasm_bindgen]
pub fn convert_dag(text: &str) -> JsValue {
    let result = convert_dag_inner(text);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn convert_dag_inner(text: &str) -> ConvertResult {
    let mut diag = CollectedDiagnostics::new();

    let workflow = match parse::parse_with(text, &ParseOptions::default(), &mut diag) {
        Ok(w) => w,
        Err(errors) => {
            return ConvertResult::Errors {
                errors: errors.into_iter().map(ErrorDto::from).collect(),
            };
        }
    };

    match emit::to_json(&workflow) {
        Ok(document) => ConvertResult::Success {
            document,
            diagnostics: diag.messages,
        },
        Err(e) => ConvertResult::Errors {
            errors: vec![ErrorDto {
                code: "E001".into(),
                line: None,
                message: format!("Failed to serialize workflow: {}", e),
            }],
        },
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize)]
struct ErrorDto {
    code: String,
    line: Option<usize>,
    message: String,
}

impl From<DagError> for ErrorDto {
    fn from(e: DagError) -> Self {
        ErrorDto {
            code: e.code().to_string(),
            line: Some(e.line()),
            message: e.to_string(),
        }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(tag = "status")]
enum ConvertResult {
    #[serde(rename = "success")]
    Success {
        document: String,
        diagnostics: Vec<Message>,
    },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
