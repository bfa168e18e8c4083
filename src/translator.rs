//! The translator service as seen by the loader.

use crate::error::TranslatorError;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Anything that can accept translation files.
///
/// `add_resource` should load the file at `path` with the parser registered
/// for `format` and merge its messages into the catalogue named by `domain`.
/// How duplicates merge is up to the implementation.
pub trait Translator {
    fn add_resource(
        &mut self,
        format: &str,
        path: &Path,
        domain: &str,
    ) -> Result<(), TranslatorError>;
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn add_resource(
        &mut self,
        format: &str,
        path: &Path,
        domain: &str,
    ) -> Result<(), TranslatorError> {
        (**self).add_resource(format, path, domain)
    }
}

/// Shared translators live in the container as `Arc<Mutex<_>>`.
impl<T: Translator + ?Sized> Translator for Arc<Mutex<T>> {
    fn add_resource(
        &mut self,
        format: &str,
        path: &Path,
        domain: &str,
    ) -> Result<(), TranslatorError> {
        let mut inner = self
            .lock()
            .map_err(|_| TranslatorError::from("translator lock poisoned"))?;
        inner.add_resource(format, path, domain)
    }
}
