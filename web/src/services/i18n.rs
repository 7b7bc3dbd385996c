//! Translation catalogs for rendered widgets.

use std::collections::HashMap;

use rust_embed::Embed;

#[derive(Embed)]
#[folder = "locales/"]
struct Locales;

pub const SUPPORTED_LANGUAGES: &[&str] = &["de", "en"];
const FALLBACK_LANGUAGE: &str = "en";

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("No translation catalog for language '{0}'")]
    UnknownLanguage(String),
    #[error("Invalid translation catalog '{language}': {source}")]
    Invalid {
        language: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Messages for one language with English as fallback.
#[derive(Debug, Clone)]
pub struct Catalog {
    language: String,
    messages: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Catalog {
    pub fn load(language: &str) -> Result<Self, I18nError> {
        let messages = read_catalog(language)?;
        let fallback = if language == FALLBACK_LANGUAGE {
            HashMap::new()
        } else {
            read_catalog(FALLBACK_LANGUAGE)?
        };
        Ok(Self {
            language: language.to_string(),
            messages,
            fallback,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Translate `key`; unknown keys come back unchanged.
    pub fn t(&self, key: &str) -> String {
        self.messages
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

fn read_catalog(language: &str) -> Result<HashMap<String, String>, I18nError> {
    let file = Locales::get(&format!("{language}.json"))
        .ok_or_else(|| I18nError::UnknownLanguage(language.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|source| I18nError::Invalid {
        language: language.to_string(),
        source,
    })
}
