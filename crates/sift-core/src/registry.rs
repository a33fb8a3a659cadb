//! Registry of live engines, keyed by opaque UUID identifiers.
//!
//! The registry is arena-style: insertion allocates a fresh identifier,
//! removal invalidates it, and lookups report "unknown engine" instead of
//! dereferencing anything. Identifiers are never reused while their engine
//! is live. All mutation is serialized by the runtime that owns this
//! registry, so the type itself needs no interior locking.

use std::collections::HashMap;

use uuid::Uuid;

use crate::engine::Engine;
use crate::errors::RegistryError;

pub struct EngineRegistry {
    engines: HashMap<String, Engine>,
    max_engines: u32,
}

impl EngineRegistry {
    pub fn new(max_engines: u32) -> Self {
        Self {
            engines: HashMap::new(),
            max_engines,
        }
    }

    /// Register a fully compiled engine under a fresh identifier.
    ///
    /// Callers compile first and insert second: a compile failure never
    /// reaches the registry, so no half-registered identifier can exist.
    pub fn insert(&mut self, engine: Engine) -> Result<String, RegistryError> {
        if self.engines.len() as u32 >= self.max_engines {
            return Err(RegistryError::CapacityExceeded {
                max: self.max_engines,
            });
        }
        let id = Uuid::new_v4().to_string();
        self.engines.insert(id.clone(), engine);
        tracing::info!(engine = %id, live = self.engines.len(), "engine registered");
        Ok(id)
    }

    pub fn get(&self, id: &str) -> Result<&Engine, RegistryError> {
        self.engines.get(id).ok_or_else(|| RegistryError::UnknownEngine {
            id: id.to_string(),
        })
    }

    /// Unregister and drop the engine named by `id`.
    pub fn remove(&mut self, id: &str) -> Result<(), RegistryError> {
        match self.engines.remove(id) {
            Some(_) => {
                tracing::info!(engine = %id, live = self.engines.len(), "engine destroyed");
                Ok(())
            }
            None => Err(RegistryError::UnknownEngine {
                id: id.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
