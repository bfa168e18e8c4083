//! Automatic registration of an extension's translation files.
//!
//! Each extension keeps its translations in a `translations/` directory, one
//! file per locale or domain/locale pair (`en.yml`, `en_GB.yml`,
//! `messages.fr.json`). A [`TranslationLoader`] finds those files the first
//! time the shared translator service is resolved and adds each one to it.
//!
//! # Architecture
//!
//! - `loader`: deferred discovery and registration
//! - `container`: named service registry with `extend` and `share`
//! - `filesystem`: filesystem collaborator and the local-disk adapter
//! - `resource`: the `(format, path, domain)` record handed to translators
//! - `translator`: the interface translators implement

pub mod config;
pub mod container;
pub mod error;
pub mod filesystem;
pub mod loader;
pub mod resource;
pub mod translator;

pub use config::LoaderConfig;
pub use container::Container;
pub use error::{Error, Result, TranslatorError};
pub use filesystem::{BaseDirectory, EntryKind, FileInfo, Filesystem, LocalFilesystem};
pub use loader::{TranslationLoader, TRANSLATOR_SERVICE};
pub use resource::TranslationResource;
pub use translator::Translator;
