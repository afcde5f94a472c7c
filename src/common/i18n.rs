// src/common/i18n.rs

use std::collections::HashMap;

pub const DEFAULT_LANG: &str = "en";

// (chave, en, pt)
const MESSAGES: &[(&str, &str, &str)] = &[
    (
        "validation_failed",
        "One or more fields are invalid.",
        "Um ou mais campos são inválidos.",
    ),
    (
        "property_not_found",
        "Property {id} was not found.",
        "Imóvel {id} não encontrado.",
    ),
    (
        "scenario_not_found",
        "Scenario {id} was not found.",
        "Cenário {id} não encontrado.",
    ),
    (
        "invalid_query",
        "Invalid parameter: {detail}",
        "Parâmetro inválido: {detail}",
    ),
];

/// Mensagens de erro por idioma. Idioma desconhecido cai no inglês.
#[derive(Debug, Clone)]
pub struct I18nStore {
    messages: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl Default for I18nStore {
    fn default() -> Self {
        let mut en = HashMap::new();
        let mut pt = HashMap::new();
        for (key, en_msg, pt_msg) in MESSAGES {
            en.insert(*key, *en_msg);
            pt.insert(*key, *pt_msg);
        }

        let mut messages = HashMap::new();
        messages.insert("en", en);
        messages.insert("pt", pt);
        Self { messages }
    }
}

impl I18nStore {
    pub fn translate(&self, lang: &str, key: &str, args: &[(&str, String)]) -> String {
        let template = self
            .messages
            .get(lang)
            .and_then(|m| m.get(key))
            .or_else(|| self.messages.get(DEFAULT_LANG).and_then(|m| m.get(key)))
            .copied()
            .unwrap_or(key);

        args.iter().fold(template.to_string(), |msg, (name, value)| {
            msg.replace(&format!("{{{name}}}"), value)
        })
    }
}
