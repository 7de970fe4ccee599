//! Message translation

use std::collections::HashMap;

/// Lookup table from source strings to their localized form
#[derive(Debug, Clone, Default)]
pub struct Translator {
    catalog: HashMap<String, String>,
}

impl Translator {
    pub fn new(catalog: HashMap<String, String>) -> Self {
        Self { catalog }
    }

    /// Translate a message, falling back to the source text
    pub fn translate(&self, message: &str) -> String {
        self.catalog
            .get(message)
            .cloned()
            .unwrap_or_else(|| message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_falls_back() {
        let translator = Translator::default();
        assert_eq!(
            translator.translate("Could not find the package."),
            "Could not find the package."
        );
    }

    #[test]
    fn test_catalog_entry_is_used() {
        let catalog = HashMap::from([(
            "Could not find the package.".to_string(),
            "Paket nicht gefunden.".to_string(),
        )]);
        let translator = Translator::new(catalog);
        assert_eq!(
            translator.translate("Could not find the package."),
            "Paket nicht gefunden."
        );
    }
}
