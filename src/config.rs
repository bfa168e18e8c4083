/// Name of the directory, relative to an extension's root, holding its translations.
pub const DEFAULT_TRANSLATIONS_DIR: &str = "translations";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub translations_dir: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            translations_dir: DEFAULT_TRANSLATIONS_DIR.to_string(),
        }
    }
}

impl LoaderConfig {
    pub fn from_env() -> Self {
        Self {
            translations_dir: std::env::var("TRANSLATIONS_DIR")
                .ok()
                .map(|v| v.trim().trim_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_TRANSLATIONS_DIR.to_string()),
        }
    }
}
