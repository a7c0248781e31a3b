//! Static table of selectable languages
//!
//! The language drop-down is populated from this table. It is fixed at
//! build time and never changes while the program runs; the first entry
//! is the default selection.

/// A selectable language/region pair
///
/// `code` is a BCP-47 locale tag (e.g. "en-US") and is what gets matched
/// against the `language` field of host voices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleOption {
    pub code: &'static str,
    pub name: &'static str,
}

/// All languages offered by the selector, in display order
pub const LOCALES: &[LocaleOption] = &[
    LocaleOption { code: "ko-KR", name: "Korean (South Korea)" },
    LocaleOption { code: "en-US", name: "English (United States)" },
    LocaleOption { code: "en-GB", name: "English (United Kingdom)" },
    LocaleOption { code: "en-AU", name: "English (Australia)" },
    LocaleOption { code: "en-CA", name: "English (Canada)" },
    LocaleOption { code: "en-IN", name: "English (India)" },
    LocaleOption { code: "zh-CN", name: "Chinese (Mainland China)" },
    LocaleOption { code: "zh-TW", name: "Chinese (Taiwan)" },
    LocaleOption { code: "zh-HK", name: "Chinese (Hong Kong)" },
    LocaleOption { code: "ja-JP", name: "Japanese (Japan)" },
    LocaleOption { code: "es-ES", name: "Spanish (Spain)" },
    LocaleOption { code: "es-MX", name: "Spanish (Mexico)" },
    LocaleOption { code: "es-US", name: "Spanish (United States)" },
    LocaleOption { code: "fr-FR", name: "French (France)" },
    LocaleOption { code: "fr-CA", name: "French (Canada)" },
    LocaleOption { code: "de-DE", name: "German (Germany)" },
    LocaleOption { code: "it-IT", name: "Italian (Italy)" },
    LocaleOption { code: "pt-BR", name: "Portuguese (Brazil)" },
    LocaleOption { code: "pt-PT", name: "Portuguese (Portugal)" },
    LocaleOption { code: "ru-RU", name: "Russian (Russia)" },
    LocaleOption { code: "ar-SA", name: "Arabic (Saudi Arabia)" },
    LocaleOption { code: "ar-EG", name: "Arabic (Egypt)" },
];

/// List all selectable languages in fixed display order
pub fn list_locales() -> &'static [LocaleOption] {
    LOCALES
}

/// The default selection (first table entry)
pub fn default_locale() -> &'static LocaleOption {
    &LOCALES[0]
}

/// Look up a locale by its exact BCP-47 code
pub fn find(code: &str) -> Option<&'static LocaleOption> {
    LOCALES.iter().find(|opt| opt.code == code)
}

/// Whether `code` is one of the listed locale codes
pub fn is_listed(code: &str) -> bool {
    find(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_not_empty() {
        assert!(!list_locales().is_empty());
    }

    #[test]
    fn test_default_is_first_entry() {
        assert_eq!(default_locale().code, list_locales()[0].code);
        assert_eq!(default_locale().code, "ko-KR");
    }

    #[test]
    fn test_codes_are_unique() {
        let locales = list_locales();
        for (i, a) in locales.iter().enumerate() {
            for b in &locales[i + 1..] {
                assert_ne!(a.code, b.code, "duplicate locale code {}", a.code);
            }
        }
    }

    #[test]
    fn test_find_is_exact() {
        assert!(find("en-US").is_some());
        assert!(find("en-us").is_none());
        assert!(find("en").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_is_listed() {
        assert!(is_listed("ja-JP"));
        assert!(!is_listed("xx-XX"));
    }
}
