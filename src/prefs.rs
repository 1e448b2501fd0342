use log::warn;
use web_sys::window;

const LANG_KEY: &str = "lang";
const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    Arabic,
    English,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }

    pub fn parse(raw: &str) -> Option<Language> {
        match raw {
            "ar" => Some(Language::Arabic),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    /// Reading direction attribute for the document root.
    pub fn dir(self) -> &'static str {
        match self {
            Language::Arabic => "rtl",
            Language::English => "ltr",
        }
    }

    pub fn toggled(self) -> Language {
        match self {
            Language::Arabic => Language::English,
            Language::English => Language::Arabic,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<ThemeMode> {
        match raw {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// The two persisted user preferences. Stored values and the in-memory state
/// are kept identical by `apply_language`/`apply_theme` (write-through).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Preferences {
    pub language: Language,
    pub theme: ThemeMode,
}

impl Preferences {
    /// Resolve raw storage values into preferences. Anything absent or
    /// unrecognized falls back to the default, never an error.
    pub fn resolve(lang: Option<&str>, theme: Option<&str>) -> Preferences {
        Preferences {
            language: lang.and_then(Language::parse).unwrap_or_default(),
            theme: theme.and_then(ThemeMode::parse).unwrap_or_default(),
        }
    }

    pub fn load() -> Preferences {
        let storage = storage();
        let lang = storage
            .as_ref()
            .and_then(|s| s.get_item(LANG_KEY).ok())
            .flatten();
        let theme = storage
            .as_ref()
            .and_then(|s| s.get_item(THEME_KEY).ok())
            .flatten();
        Preferences::resolve(lang.as_deref(), theme.as_deref())
    }
}

fn storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

fn persist(key: &str, value: &str) {
    match storage() {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                warn!("failed to persist {} preference, continuing in memory", key);
            }
        }
        None => warn!("local storage unavailable, {} preference kept in memory", key),
    }
}

/// Set the document direction and language tag, then write the value through
/// to storage.
pub fn apply_language(language: Language) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("dir", language.dir());
        let _ = root.set_attribute("lang", language.as_str());
    }
    persist(LANG_KEY, language.as_str());
}

/// Toggle the `dark` class on the document root, then write the value
/// through to storage.
pub fn apply_theme(theme: ThemeMode) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let classes = root.class_list();
        let _ = match theme {
            ThemeMode::Dark => classes.add_1("dark"),
            ThemeMode::Light => classes.remove_1("dark"),
        };
    }
    persist(THEME_KEY, theme.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_storage_resolves_to_defaults() {
        let prefs = Preferences::resolve(None, None);
        assert_eq!(prefs.language, Language::Arabic);
        assert_eq!(prefs.theme, ThemeMode::Dark);
    }

    #[test]
    fn stored_values_resolve() {
        let prefs = Preferences::resolve(Some("en"), Some("light"));
        assert_eq!(prefs.language, Language::English);
        assert_eq!(prefs.theme, ThemeMode::Light);
    }

    #[test]
    fn corrupt_values_fall_back_to_defaults() {
        let prefs = Preferences::resolve(Some("fr"), Some("solarized"));
        assert_eq!(prefs.language, Language::Arabic);
        assert_eq!(prefs.theme, ThemeMode::Dark);
    }

    #[test]
    fn language_toggle_is_an_involution() {
        assert_eq!(Language::Arabic.toggled(), Language::English);
        assert_eq!(Language::Arabic.toggled().toggled(), Language::Arabic);
        assert_eq!(Language::English.toggled().toggled(), Language::English);
    }

    #[test]
    fn theme_toggle_is_an_involution() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn direction_follows_language() {
        assert_eq!(Language::Arabic.dir(), "rtl");
        assert_eq!(Language::English.dir(), "ltr");
    }

    #[test]
    fn storage_strings_parse_back() {
        assert_eq!(Language::parse(Language::English.as_str()), Some(Language::English));
        assert_eq!(ThemeMode::parse(ThemeMode::Light.as_str()), Some(ThemeMode::Light));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear_prefs() {
        let storage = storage().expect("test browser has local storage");
        storage.remove_item(LANG_KEY).unwrap();
        storage.remove_item(THEME_KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn load_with_empty_storage_yields_defaults() {
        clear_prefs();
        let prefs = Preferences::load();
        assert_eq!(prefs.language, Language::Arabic);
        assert_eq!(prefs.theme, ThemeMode::Dark);
    }

    #[wasm_bindgen_test]
    fn language_round_trips_through_storage() {
        clear_prefs();
        apply_language(Language::English);
        assert_eq!(Preferences::load().language, Language::English);
        let stored = storage().unwrap().get_item(LANG_KEY).unwrap();
        assert_eq!(stored.as_deref(), Some("en"));
    }

    #[wasm_bindgen_test]
    fn theme_round_trips_through_storage() {
        clear_prefs();
        apply_theme(ThemeMode::Light);
        assert_eq!(Preferences::load().theme, ThemeMode::Light);
        let stored = storage().unwrap().get_item(THEME_KEY).unwrap();
        assert_eq!(stored.as_deref(), Some("light"));
    }

    #[wasm_bindgen_test]
    fn toggling_twice_returns_to_the_stored_original() {
        clear_prefs();
        let initial = Preferences::load();
        assert_eq!(initial.language, Language::Arabic);

        apply_language(initial.language.toggled());
        assert_eq!(Preferences::load().language, Language::English);

        apply_language(initial.language.toggled().toggled());
        assert_eq!(Preferences::load().language, Language::Arabic);
    }

    #[wasm_bindgen_test]
    fn language_side_effect_updates_document_root() {
        apply_language(Language::English);
        let root = window().unwrap().document().unwrap().document_element().unwrap();
        assert_eq!(root.get_attribute("dir").as_deref(), Some("ltr"));
        assert_eq!(root.get_attribute("lang").as_deref(), Some("en"));

        apply_language(Language::Arabic);
        assert_eq!(root.get_attribute("dir").as_deref(), Some("rtl"));
    }

    #[wasm_bindgen_test]
    fn theme_side_effect_toggles_dark_class() {
        let root = window().unwrap().document().unwrap().document_element().unwrap();
        apply_theme(ThemeMode::Dark);
        assert!(root.class_list().contains("dark"));
        apply_theme(ThemeMode::Light);
        assert!(!root.class_list().contains("dark"));
    }
}
