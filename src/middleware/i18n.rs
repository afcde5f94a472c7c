// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::common::i18n::DEFAULT_LANG;

// Idiomas com mensagens cadastradas no I18nStore
const SUPPORTED_LANGS: &[&str] = &["en", "pt"];

// Extrator de idioma (Accept-Language)
#[derive(Debug, Clone)]
pub struct Locale(pub String);

impl Default for Locale {
    fn default() -> Self {
        Locale(DEFAULT_LANG.to_string())
    }
}

impl Locale {
    pub fn from_header(raw: &str) -> Self {
        // "pt-BR,pt;q=0.9" -> "pt-BR" -> "pt"
        accept_language::parse(raw)
            .iter()
            .map(|tag| tag.split('-').next().unwrap_or(tag).to_lowercase())
            .find(|lang| SUPPORTED_LANGS.contains(&lang.as_str()))
            .map(Locale)
            .unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let locale = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(Locale::from_header)
            .unwrap_or_default();

        Ok(locale)
    }
}
