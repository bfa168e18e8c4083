use crate::filesystem::FileInfo;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A single translation file, ready to hand to a translator.
///
/// `domain` is whatever remains of the file name once the extension is
/// stripped (`en`, `en_GB`, `messages.fr`). It is forwarded verbatim; the
/// translator decides how to split it into domain and locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResource {
    /// File extension, used by the translator to pick a parser
    pub format: String,
    /// Absolute local path of the file
    pub path: PathBuf,
    pub domain: String,
}

impl TranslationResource {
    /// Builds the resource for a listed file, resolving its path under `prefix`.
    pub fn from_file_info(prefix: &Path, info: &FileInfo) -> Self {
        let format = info.extension();
        let domain = info.file_name_without(&format!(".{}", format));

        Self {
            format: format.to_string(),
            path: prefix.join(info.path()),
            domain: domain.to_string(),
        }
    }
}
