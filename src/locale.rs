//! Preference values managed by the store
//!
//! A preference is a small closed set of options with a fixed text form.
//! That text form is what lands in storage.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// A closed set of recognized options with a plain-text storage form
pub trait Preference: Copy + Eq + Default + Debug + 'static {
    /// Every recognized value, in display order. With an empty set nothing
    /// parses and `next` returns its input.
    const ALL: &'static [Self];

    /// Text written to storage
    fn as_str(&self) -> &'static str;

    /// Parse storage text. Anything outside the recognized set is `None`.
    fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    /// Next value in `ALL`, wrapping around
    fn next(&self) -> Self {
        if Self::ALL.is_empty() {
            return *self;
        }
        let pos = Self::ALL.iter().position(|v| v == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Amharic,
}

impl Locale {
    /// Label shown on the language switcher, in the language's own script
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Amharic => "አማርኛ",
        }
    }

    /// BCP-47 tag for the document `lang` attribute
    pub fn html_lang(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Amharic => "am",
        }
    }
}

impl Preference for Locale {
    const ALL: &'static [Self] = &[Locale::English, Locale::Amharic];

    fn as_str(&self) -> &'static str {
        match self {
            Locale::English => "english",
            Locale::Amharic => "amharic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::English);
    }

    #[test]
    fn test_parse_is_strict() {
        assert_eq!(Locale::parse("amharic"), Some(Locale::Amharic));
        assert_eq!(Locale::parse("english"), Some(Locale::English));
        // Stored text is written lowercase; anything else is foreign data
        assert_eq!(Locale::parse("Amharic"), None);
        assert_eq!(Locale::parse(" english"), None);
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("french"), None);
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(Locale::English.next(), Locale::Amharic);
        assert_eq!(Locale::Amharic.next(), Locale::English);
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct Unlisted;

    impl Preference for Unlisted {
        const ALL: &'static [Self] = &[];

        fn as_str(&self) -> &'static str {
            "unlisted"
        }
    }

    #[test]
    fn test_next_with_empty_set_stays_put() {
        assert_eq!(Unlisted.next(), Unlisted);
        assert_eq!(Unlisted::parse("unlisted"), None);
    }

    #[test]
    fn test_serde_names_match_storage_text() {
        for locale in Locale::ALL {
            let json = serde_json::to_string(locale).unwrap();
            assert_eq!(json, format!("\"{}\"", locale.as_str()));
        }
    }

    #[test]
    fn test_html_lang() {
        assert_eq!(Locale::English.html_lang(), "en");
        assert_eq!(Locale::Amharic.html_lang(), "am");
    }
}
