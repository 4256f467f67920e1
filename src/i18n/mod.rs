//! Internationalization module
//!
//! Provides translations for Albanian (sq), English (en), German (de),
//! Italian (it) and French (fr). German is the fallback: a key missing
//! from the active language resolves to its German value, and a key
//! missing from both resolves to itself.
//!
//! [`I18n`] owns the language selection and broadcasts every change to
//! its subscribers. Render functions never touch it directly; they get a
//! [`Translator`] snapshot from the composition root.

mod de;
mod en;
mod fr;
mod it;
mod sq;

use crate::core::Language;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;

/// Language used when the active one lacks a key
pub const FALLBACK_LANGUAGE: &str = "de";

static LANGUAGES: [Language; 5] = [
    Language { code: "sq", name: "Shqip", flag: "\u{1F1E6}\u{1F1F1}" },
    Language { code: "en", name: "English", flag: "\u{1F1EC}\u{1F1E7}" },
    Language { code: "de", name: "Deutsch", flag: "\u{1F1E9}\u{1F1EA}" },
    Language { code: "it", name: "Italiano", flag: "\u{1F1EE}\u{1F1F9}" },
    Language { code: "fr", name: "Fran\u{00E7}ais", flag: "\u{1F1EB}\u{1F1F7}" },
];

/// Immutable translation tables, keyed by language code
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    tables: HashMap<String, HashMap<String, String>>,
}

impl Dictionary {
    /// Tables for every language the site ships
    pub fn builtin() -> Self {
        let mut tables = HashMap::new();
        tables.insert("sq".to_string(), sq::get_translations());
        tables.insert("en".to_string(), en::get_translations());
        tables.insert("de".to_string(), de::get_translations());
        tables.insert("it".to_string(), it::get_translations());
        tables.insert("fr".to_string(), fr::get_translations());
        Self { tables }
    }

    pub fn from_tables(tables: HashMap<String, HashMap<String, String>>) -> Self {
        Self { tables }
    }

    /// Resolve `key` for `lang`: active language, then fallback, then the key itself.
    /// Empty values count as missing.
    pub fn lookup<'a>(&'a self, lang: &str, key: &'a str) -> &'a str {
        self.entry(lang, key)
            .or_else(|| self.entry(FALLBACK_LANGUAGE, key))
            .unwrap_or(key)
    }

    fn entry(&self, lang: &str, key: &str) -> Option<&str> {
        self.tables
            .get(lang)?
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.tables.contains_key(lang)
    }

    /// Fallback keys that `lang` does not translate, sorted
    pub fn missing_keys(&self, lang: &str) -> Vec<String> {
        let Some(fallback) = self.tables.get(FALLBACK_LANGUAGE) else {
            return Vec::new();
        };
        let mut missing: Vec<String> = fallback
            .keys()
            .filter(|key| self.entry(lang, key).is_none())
            .cloned()
            .collect();
        missing.sort();
        missing
    }

    /// Every fallback key resolved for `lang`
    pub fn resolve_all(&self, lang: &str) -> HashMap<String, String> {
        self.tables
            .get(FALLBACK_LANGUAGE)
            .map(|fallback| {
                fallback
                    .keys()
                    .map(|key| (key.clone(), self.lookup(lang, key).to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Read-only translation context handed to render functions
#[derive(Debug, Clone)]
pub struct Translator {
    dictionary: Arc<Dictionary>,
    language: String,
}

impl Translator {
    pub fn new(dictionary: Arc<Dictionary>, language: &str) -> Self {
        Self {
            dictionary,
            language: language.to_string(),
        }
    }

    /// Translate a key in this context's language
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.dictionary.lookup(&self.language, key)
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

/// Internationalization manager
///
/// Holds the process-wide language selection. Changes go out over a
/// `watch` channel so every mounted consumer sees them in the same update.
pub struct I18n {
    dictionary: Arc<Dictionary>,
    language: watch::Sender<String>,
}

impl I18n {
    /// Create a new I18n instance with the built-in tables.
    /// `"auto"` picks the language from the system locale.
    pub fn new(lang: &str) -> Self {
        Self::with_dictionary(Dictionary::builtin(), lang)
    }

    pub fn with_dictionary(dictionary: Dictionary, lang: &str) -> Self {
        let lang = if lang == "auto" {
            detect_system_language()
        } else {
            lang.to_string()
        };

        log::info!("Language set to: {}", lang);

        let (language, _) = watch::channel(lang);
        Self {
            dictionary: Arc::new(dictionary),
            language,
        }
    }

    /// Set the current language
    ///
    /// Unknown codes are accepted as-is; every lookup then falls back to German.
    pub fn set_language(&self, lang: &str) {
        if !self.dictionary.has_language(lang) {
            log::debug!("No translations for '{}', falling back to {}", lang, FALLBACK_LANGUAGE);
        }
        self.language.send_replace(lang.to_string());
        log::info!("Language set to: {}", lang);
    }

    /// Get a translated string by key
    pub fn translate(&self, key: &str) -> String {
        self.dictionary
            .lookup(&self.language.borrow(), key)
            .to_string()
    }

    /// Get all translations for the current language, fallback applied
    pub fn get_all(&self) -> HashMap<String, String> {
        self.dictionary.resolve_all(&self.language.borrow())
    }

    /// Get the current language code
    pub fn current_language(&self) -> String {
        self.language.borrow().clone()
    }

    /// Snapshot of the current language for rendering
    pub fn context(&self) -> Translator {
        Translator::new(Arc::clone(&self.dictionary), &self.language.borrow())
    }

    /// Context for another language, leaving the selection untouched
    pub fn context_for(&self, lang: &str) -> Translator {
        Translator::new(Arc::clone(&self.dictionary), lang)
    }

    /// Receive every subsequent language change
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.language.subscribe()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Get available languages, in navigation order
    pub fn available_languages() -> &'static [Language] {
        &LANGUAGES
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(FALLBACK_LANGUAGE)
    }
}

/// Detect system language from the locale environment
fn detect_system_language() -> String {
    let lang_env = std::env::var("LANG")
        .or_else(|_| std::env::var("LC_ALL"))
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .unwrap_or_default();

    language_from_locale(&lang_env)
        .unwrap_or(FALLBACK_LANGUAGE)
        .to_string()
}

/// Extract a supported language code (e.g. "fr_FR.UTF-8" -> "fr")
fn language_from_locale(locale: &str) -> Option<&'static str> {
    let code = locale.split(&['_', '.', '-'][..]).next()?.to_ascii_lowercase();
    LANGUAGES
        .iter()
        .find(|language| language.code == code)
        .map(|language| language.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_language_is_german() {
        let i18n = I18n::default();
        assert_eq!(i18n.current_language(), "de");
        assert_eq!(i18n.translate("contactTitle"), "Kontakt");
    }

    #[test]
    fn test_unknown_language_falls_back_to_german() {
        let i18n = I18n::default();
        i18n.set_language("xx");
        assert_eq!(i18n.current_language(), "xx");
        assert_eq!(i18n.translate("contactTitle"), "Kontakt");
    }

    #[test]
    fn test_known_language_translates() {
        let i18n = I18n::default();
        i18n.set_language("en");
        assert_eq!(i18n.translate("contactTitle"), "Contact");
        i18n.set_language("it");
        assert_eq!(i18n.translate("contactTitle"), "Contatti");
    }

    #[test]
    fn test_missing_everywhere_returns_key() {
        let i18n = I18n::default();
        i18n.set_language("fr");
        assert_eq!(i18n.translate("noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_fallback_chain() {
        let mut tables = HashMap::new();
        tables.insert("de".to_string(), table(&[("title", "Titel"), ("only_de", "Nur Deutsch")]));
        tables.insert("en".to_string(), table(&[("title", "Title"), ("blank", "")]));
        let dictionary = Dictionary::from_tables(tables);

        assert_eq!(dictionary.lookup("en", "title"), "Title");
        assert_eq!(dictionary.lookup("en", "only_de"), "Nur Deutsch");
        assert_eq!(dictionary.lookup("en", "blank"), "blank");
        assert_eq!(dictionary.lookup("en", "absent"), "absent");
        assert_eq!(dictionary.missing_keys("en"), vec!["only_de".to_string()]);
    }

    #[test]
    fn test_every_fallback_key_non_empty_in_every_language() {
        let dictionary = Dictionary::builtin();
        let keys: Vec<String> = dictionary.resolve_all(FALLBACK_LANGUAGE).into_keys().collect();
        assert!(!keys.is_empty());

        let codes = ["sq", "en", "de", "it", "fr", "xx", ""];
        for code in codes {
            for key in &keys {
                assert!(!dictionary.lookup(code, key).is_empty(), "{} empty for {}", key, code);
            }
        }
    }

    #[test]
    fn test_dictionaries_are_complete() {
        let dictionary = Dictionary::builtin();
        for language in I18n::available_languages() {
            assert!(
                dictionary.missing_keys(language.code).is_empty(),
                "{} is missing {:?}",
                language.code,
                dictionary.missing_keys(language.code)
            );
        }
    }

    #[test]
    fn test_translate_is_pure() {
        let i18n = I18n::default();
        i18n.set_language("sq");
        let first = i18n.translate("servicesTitle");
        let second = i18n.translate("servicesTitle");
        assert_eq!(first, second);
        assert_eq!(i18n.current_language(), "sq");
    }

    #[test]
    fn test_context_snapshot() {
        let i18n = I18n::default();
        let before = i18n.context();
        i18n.set_language("en");
        let after = i18n.context();

        assert_eq!(before.language(), "de");
        assert_eq!(before.t("careers"), "Karriere");
        assert_eq!(after.t("careers"), "Careers");
    }

    #[test]
    fn test_subscribers_see_every_change() {
        let i18n = I18n::default();
        let mut nav = i18n.subscribe();
        let mut services = i18n.subscribe();

        i18n.set_language("fr");

        assert!(nav.has_changed().unwrap());
        assert!(services.has_changed().unwrap());
        assert_eq!(*nav.borrow_and_update(), "fr");
        assert_eq!(*services.borrow_and_update(), "fr");
        assert!(!nav.has_changed().unwrap());
    }

    #[test]
    fn test_get_all_applies_fallback() {
        let i18n = I18n::default();
        i18n.set_language("xx");
        let all = i18n.get_all();
        assert_eq!(all.get("contactTitle").map(String::as_str), Some("Kontakt"));
    }

    #[test]
    fn test_language_from_locale() {
        assert_eq!(language_from_locale("fr_FR.UTF-8"), Some("fr"));
        assert_eq!(language_from_locale("sq_AL"), Some("sq"));
        assert_eq!(language_from_locale("en-GB"), Some("en"));
        assert_eq!(language_from_locale("ja_JP.UTF-8"), None);
        assert_eq!(language_from_locale(""), None);
    }

    #[test]
    fn test_available_languages_order() {
        let codes: Vec<_> = I18n::available_languages().iter().map(|l| l.code).collect();
        assert_eq!(codes, ["sq", "en", "de", "it", "fr"]);
    }
}
