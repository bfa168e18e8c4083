//! Named service registry with decoration and singleton sharing.
//!
//! Services are registered as factories. `extend` wraps a factory so every
//! future build of that service passes through a decorator, and `share` turns
//! a service into a singleton whose first successful build is reused.

use crate::error::{Error, Result};
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

type Factory<T> = Arc<dyn Fn(&Container) -> Result<T> + Send + Sync>;

struct Definition<T> {
    factory: Factory<T>,
    shared: bool,
    instance: Mutex<Option<T>>,
}

impl<T: Clone> Definition<T> {
    fn cached(&self) -> Option<T> {
        self.instance
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[derive(Default)]
pub struct Container {
    services: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the factory for `name`.
    pub fn define<T, F>(&mut self, name: &str, factory: F)
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(&Container) -> Result<T> + Send + Sync + 'static,
    {
        let definition = Definition {
            factory: Arc::new(factory) as Factory<T>,
            shared: false,
            instance: Mutex::new(None),
        };
        self.services.insert(name.to_string(), Box::new(definition));
    }

    /// Wraps the factory for `name` with `decorator`.
    ///
    /// Decorators stack: the most recent one runs last. Extending a shared
    /// service drops any instance already built so the decorator is applied.
    pub fn extend<T, F>(&mut self, name: &str, decorator: F) -> Result<()>
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(T, &Container) -> Result<T> + Send + Sync + 'static,
    {
        let definition = self.definition_mut::<T>(name)?;
        let inner = Arc::clone(&definition.factory);
        definition.factory = Arc::new(move |container: &Container| {
            let service = inner(container)?;
            decorator(service, container)
        });
        definition.instance = Mutex::new(None);
        Ok(())
    }

    /// Makes `name` a singleton.
    pub fn share<T>(&mut self, name: &str) -> Result<()>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.definition_mut::<T>(name)?.shared = true;
        Ok(())
    }

    /// Builds the service, or returns the cached instance of a shared one.
    pub fn resolve<T>(&self, name: &str) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let definition = self.definition::<T>(name)?;

        if definition.shared {
            if let Some(instance) = definition.cached() {
                return Ok(instance);
            }
        }

        // Built without holding the lock; factories may resolve other services
        let instance = (definition.factory)(self)?;

        if definition.shared {
            let mut slot = definition
                .instance
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            return Ok(slot.get_or_insert(instance).clone());
        }

        Ok(instance)
    }

    pub fn has(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    fn definition<T: 'static>(&self, name: &str) -> Result<&Definition<T>> {
        self.services
            .get(name)
            .ok_or_else(|| Error::ServiceNotFound(name.to_string()))?
            .downcast_ref::<Definition<T>>()
            .ok_or_else(|| Error::ServiceTypeMismatch(name.to_string()))
    }

    fn definition_mut<T: 'static>(&mut self, name: &str) -> Result<&mut Definition<T>> {
        self.services
            .get_mut(name)
            .ok_or_else(|| Error::ServiceNotFound(name.to_string()))?
            .downcast_mut::<Definition<T>>()
            .ok_or_else(|| Error::ServiceTypeMismatch(name.to_string()))
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("services", &self.services.keys().collect::<Vec<_>>())
            .finish()
    }
}
