use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::common::i18n::I18nStore;
use crate::middleware::i18n::Locale;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Imóvel {0} não encontrado")]
    PropertyNotFound(u32),

    #[error("Cenário {0} não encontrado")]
    ScenarioNotFound(u32),

    // Query string que não desserializa (tipo errado, enum desconhecido)
    #[error("Parâmetro inválido: {0}")]
    InvalidQuery(String),
}

// O erro que sai pela API, já traduzido
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<HashMap<String, Vec<String>>>,
}

impl AppError {
    pub fn to_api_error(&self, locale: &Locale, store: &I18nStore) -> ApiError {
        let lang = locale.0.as_str();
        match self {
            AppError::ValidationError(errors) => {
                let mut details = HashMap::new();
                collect_messages(errors, "", &mut details);
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    message: store.translate(lang, "validation_failed", &[]),
                    details: Some(details),
                }
            }
            AppError::PropertyNotFound(id) => ApiError::new(
                StatusCode::NOT_FOUND,
                store.translate(lang, "property_not_found", &[("id", id.to_string())]),
            ),
            AppError::ScenarioNotFound(id) => ApiError::new(
                StatusCode::NOT_FOUND,
                store.translate(lang, "scenario_not_found", &[("id", id.to_string())]),
            ),
            AppError::InvalidQuery(detail) => ApiError::new(
                StatusCode::BAD_REQUEST,
                store.translate(lang, "invalid_query", &[("detail", detail.clone())]),
            ),
        }
    }
}

// Achata erros aninhados ("companyPolicy.deskSharingRatio")
fn collect_messages(
    errors: &validator::ValidationErrors,
    prefix: &str,
    out: &mut HashMap<String, Vec<String>>,
) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            validator::ValidationErrorsKind::Field(field_errors) => {
                let messages = field_errors
                    .iter()
                    .map(|e| match &e.message {
                        Some(m) => m.to_string(),
                        None => e.code.to_string(),
                    })
                    .collect();
                out.insert(path, messages);
            }
            validator::ValidationErrorsKind::Struct(nested) => {
                collect_messages(nested, &path, out);
            }
            validator::ValidationErrorsKind::List(items) => {
                for (idx, nested) in items {
                    collect_messages(nested, &format!("{path}[{idx}]"), out);
                }
            }
        }
    }
}

impl ApiError {
    pub fn new(status: StatusCode, message: String) -> Self {
        Self { status, message, details: None }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.message, "details": details }),
            None => json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}
