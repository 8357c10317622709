//! Message catalog for the client UI.
//!
//! Messages are bundled as a JSON object keyed by locale, each holding a flat
//! key to message map. Lookups try the active locale, then the fallback
//! locale, then return the key itself.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SharedError};

pub const DEFAULT_LOCALE: &str = "en";

pub type Messages = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nOptions {
    pub locale: String,
    pub fallback_locale: String,
}

impl Default for I18nOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            fallback_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocaleCatalog {
    active: String,
    fallback: String,
    messages: BTreeMap<String, Messages>,
}

impl LocaleCatalog {
    pub fn new(messages: BTreeMap<String, Messages>, options: I18nOptions) -> Result<Self> {
        if !messages.contains_key(&options.fallback_locale) {
            return Err(SharedError::MissingField(format!(
                "messages for fallback locale '{}'",
                options.fallback_locale
            )));
        }
        if !messages.contains_key(&options.locale) {
            warn!(
                "No messages for locale '{}', using '{}'",
                options.locale, options.fallback_locale
            );
        }
        debug!(
            "Loaded {} locale(s), active '{}'",
            messages.len(),
            options.locale
        );
        Ok(Self {
            active: options.locale,
            fallback: options.fallback_locale,
            messages,
        })
    }

    pub fn from_json(json: &str, options: I18nOptions) -> Result<Self> {
        let messages: BTreeMap<String, Messages> = serde_json::from_str(json)?;
        Self::new(messages, options)
    }

    pub fn active_locale(&self) -> &str {
        &self.active
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback
    }

    /// Locales with bundled messages, sorted.
    pub fn locales(&self) -> Vec<&str> {
        self.messages.keys().map(String::as_str).collect()
    }

    /// Switches the active locale. Unknown locales are accepted; their
    /// lookups fall through to the fallback locale.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        let locale = locale.into();
        if !self.messages.contains_key(&locale) {
            warn!("Switching to locale '{}' without messages", locale);
        }
        self.active = locale;
    }

    pub fn translate(&self, key: &str) -> String {
        self.translate_in(&self.active, key)
    }

    pub fn translate_in(&self, locale: &str, key: &str) -> String {
        self.lookup(locale, key)
            .or_else(|| self.lookup(&self.fallback, key))
            .unwrap_or(key)
            .to_string()
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.messages
            .get(locale)
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }
}

/// Replaces `{name}` placeholders with the matching argument. Placeholders
/// without an argument are left untouched.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    const LOCALES: &str = r#"{
        "en": {"nav.home": "Home", "nav.items": "Items", "greeting": "Hello, {name}!"},
        "ru": {"nav.home": "Главная"}
    }"#;

    #[fixture]
    fn catalog() -> LocaleCatalog {
        LocaleCatalog::from_json(LOCALES, I18nOptions::default()).unwrap()
    }

    #[rstest]
    fn test_default_options(catalog: LocaleCatalog) {
        assert_eq!(catalog.active_locale(), "en");
        assert_eq!(catalog.fallback_locale(), "en");
        assert_eq!(catalog.locales(), vec!["en", "ru"]);
    }

    #[rstest]
    fn test_translate_falls_back(mut catalog: LocaleCatalog) {
        catalog.set_locale("ru");
        assert_eq!(catalog.translate("nav.home"), "Главная");
        assert_eq!(catalog.translate("nav.items"), "Items");
        assert_eq!(catalog.translate("nav.unknown"), "nav.unknown");
    }

    #[rstest]
    fn test_unknown_locale_uses_fallback(mut catalog: LocaleCatalog) {
        catalog.set_locale("de");
        assert_eq!(catalog.active_locale(), "de");
        assert_eq!(catalog.translate("nav.home"), "Home");
        assert_eq!(catalog.translate_in("ru", "nav.home"), "Главная");
    }

    #[test]
    fn test_missing_fallback_locale_is_rejected() {
        let options = I18nOptions {
            locale: "ru".to_string(),
            fallback_locale: "fr".to_string(),
        };
        let err = LocaleCatalog::from_json(LOCALES, options).unwrap_err();
        assert!(matches!(err, SharedError::MissingField(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = LocaleCatalog::from_json(r#"{"en": ["a"]}"#, I18nOptions::default()).unwrap_err();
        assert!(matches!(err, SharedError::Conversion(_)));
    }

    #[rstest]
    #[case("Hello, {name}!", &[("name", "Ann")], "Hello, Ann!")]
    #[case("{a}{b}", &[("a", "1"), ("b", "2")], "12")]
    #[case("{missing} stays", &[], "{missing} stays")]
    #[case("unclosed {brace", &[("brace", "x")], "unclosed {brace")]
    #[case("no placeholders", &[("x", "y")], "no placeholders")]
    fn test_interpolate(#[case] template: &str, #[case] args: &[(&str, &str)], #[case] expected: &str) {
        assert_eq!(interpolate(template, args), expected);
    }

    #[rstest]
    fn test_translate_then_interpolate(catalog: LocaleCatalog) {
        let message = catalog.translate("greeting");
        assert_eq!(interpolate(&message, &[("name", "Ann")]), "Hello, Ann!");
    }
}
