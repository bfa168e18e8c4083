//! Lazy discovery and registration of an extension's translation files.
//!
//! An extension hands its [`BaseDirectory`] to a [`TranslationLoader`] and
//! calls [`TranslationLoader::register_deferred_loading`] while registering
//! its services. Nothing touches the disk until the translator service is
//! first resolved; at that point the extension's `translations/` directory is
//! walked once and every file in it is added to the translator.
//!
//! # Example
//!
//! ```rust,ignore
//! use extension_translations::{BaseDirectory, Container, TranslationLoader, TRANSLATOR_SERVICE};
//! use std::sync::{Arc, Mutex};
//!
//! let mut container = Container::new();
//! container.define(TRANSLATOR_SERVICE, |_| Ok(Arc::new(Mutex::new(MyTranslator::default()))));
//!
//! let loader = Arc::new(TranslationLoader::new(BaseDirectory::local("extensions/acme")));
//! loader.register_deferred_loading::<Arc<Mutex<MyTranslator>>>(&mut container)?;
//!
//! // translations/*.yml are registered here, once
//! let translator = container.resolve::<Arc<Mutex<MyTranslator>>>(TRANSLATOR_SERVICE)?;
//! ```

use crate::config::LoaderConfig;
use crate::container::Container;
use crate::error::{Error, Result};
use crate::filesystem::BaseDirectory;
use crate::resource::TranslationResource;
use crate::translator::Translator;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Container name of the translator service.
pub const TRANSLATOR_SERVICE: &str = "translator";

pub struct TranslationLoader {
    base_dir: BaseDirectory,
    config: LoaderConfig,
    /// `None` until a discovery finds the translations directory
    translations: Mutex<Option<Vec<TranslationResource>>>,
    registered: AtomicBool,
}

impl TranslationLoader {
    pub fn new(base_dir: BaseDirectory) -> Self {
        Self::with_config(base_dir, LoaderConfig::default())
    }

    pub fn with_config(base_dir: BaseDirectory, config: LoaderConfig) -> Self {
        Self {
            base_dir,
            config,
            translations: Mutex::new(None),
            registered: AtomicBool::new(false),
        }
    }

    /// Hooks this loader into the container's translator service.
    ///
    /// The service becomes shared, and its first resolution runs
    /// [`extend_translator`](Self::extend_translator). `T` must be the exact
    /// type the translator service was defined with.
    ///
    /// # Errors
    /// * [`Error::ServiceNotFound`] if no translator service is defined yet
    /// * [`Error::ServiceTypeMismatch`] if the service is not a `T`
    /// * [`Error::AlreadyRegistered`] on a second call for this loader
    pub fn register_deferred_loading<T>(self: &Arc<Self>, container: &mut Container) -> Result<()>
    where
        T: Translator + Clone + Send + Sync + 'static,
    {
        if !container.has(TRANSLATOR_SERVICE) {
            return Err(Error::ServiceNotFound(TRANSLATOR_SERVICE.to_string()));
        }

        if self.registered.swap(true, Ordering::SeqCst) {
            warn!(
                base_dir = self.base_dir.full_path(),
                "Deferred translation loading registered twice"
            );
            return Err(Error::AlreadyRegistered(self.translations_path()));
        }

        let loader = Arc::clone(self);
        let hooked = container
            .extend(TRANSLATOR_SERVICE, move |translator: T, _: &Container| {
                loader.extend_translator(translator)
            });
        let hooked = hooked.and_then(|()| container.share::<T>(TRANSLATOR_SERVICE));

        if hooked.is_err() {
            self.registered.store(false, Ordering::SeqCst);
        }
        hooked
    }

    /// Adds every discovered translation file to `translator` and hands it back.
    ///
    /// Discovery runs here if it has not succeeded yet. A missing
    /// translations directory leaves the translator untouched.
    pub fn extend_translator<T: Translator>(&self, mut translator: T) -> Result<T> {
        let Some(resources) = self.discover_now()? else {
            return Ok(translator);
        };

        for resource in &resources {
            translator
                .add_resource(&resource.format, &resource.path, &resource.domain)
                .map_err(Error::Translator)?;
        }

        info!(
            count = resources.len(),
            base_dir = self.base_dir.full_path(),
            "Registered translation resources"
        );
        Ok(translator)
    }

    /// Runs discovery unless it already found the directory, returning the
    /// resulting set. `None` means the translations directory does not exist.
    pub fn discover_now(&self) -> Result<Option<Vec<TranslationResource>>> {
        let mut translations = self
            .translations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if translations.is_none() {
            *translations = self.discover()?;
        }

        Ok(translations.clone())
    }

    /// Snapshot of the discovered set without triggering discovery.
    pub fn resources(&self) -> Option<Vec<TranslationResource>> {
        self.translations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn base_directory(&self) -> &BaseDirectory {
        &self.base_dir
    }

    fn translations_path(&self) -> String {
        self.base_dir.child(&self.config.translations_dir)
    }

    fn discover(&self) -> Result<Option<Vec<TranslationResource>>> {
        let filesystem = self.base_dir.filesystem();
        let dir = self.translations_path();

        if !filesystem.has(&dir)? {
            debug!(dir = %dir, "No translations directory");
            return Ok(None);
        }

        let prefix = filesystem.path_prefix();
        let resources: Vec<TranslationResource> = filesystem
            .list_contents(&dir, true)?
            .iter()
            .filter(|info| info.is_file())
            .map(|info| TranslationResource::from_file_info(prefix, info))
            .inspect(|resource| {
                debug!(
                    format = %resource.format,
                    domain = %resource.domain,
                    path = %resource.path.display(),
                    "Found translation resource"
                )
            })
            .collect();

        info!(count = resources.len(), dir = %dir, "Discovered translations");
        Ok(Some(resources))
    }
}

impl std::fmt::Debug for TranslationLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationLoader")
            .field("base_dir", &self.base_dir)
            .field("config", &self.config)
            .field("registered", &self.registered.load(Ordering::SeqCst))
            .finish()
    }
}
