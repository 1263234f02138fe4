//! Runtime catalogue of concept models
//!
//! Adapters are resolved by the type checker, so nothing in this workspace
//! needs the catalogue to run. It exists for diagnostics and documentation:
//! a program can record which of its types model which concepts and later
//! ask about them by name, dump the table as JSON, or fail fast with a
//! descriptive error when an expected model is missing.
//!
//! Registration is still gated at compile time. [`ModelRegistry::register`]
//! only accepts `(K, T)` pairs where `K: ModeledBy<T>`, so the catalogue
//! cannot claim a model that does not exist.
//!
//! # Example
//!
//! ```rust
//! use polykit_core::{Concept, ModeledBy, ModelRegistry};
//!
//! trait Labelled {
//!     fn label(&self) -> String;
//! }
//!
//! struct LabelledConcept;
//!
//! impl Concept for LabelledConcept {
//!     const NAME: &'static str = "Labelled";
//!     const MINIMAL: &'static [&'static str] = &["label"];
//!     const DERIVED: &'static [&'static str] = &[];
//! }
//!
//! impl<T: Labelled + ?Sized> ModeledBy<T> for LabelledConcept {}
//!
//! impl Labelled for u8 {
//!     fn label(&self) -> String {
//!         format!("byte {self}")
//!     }
//! }
//!
//! # fn main() -> polykit_core::Result<()> {
//! let registry = ModelRegistry::builder()
//!     .register::<LabelledConcept, u8>()
//!     .build()?;
//!
//! assert!(registry.contains::<LabelledConcept, u8>());
//! assert!(registry.resolve::<LabelledConcept, u16>().is_err());
//! println!("{}", registry.to_json()?);
//! # Ok(())
//! # }
//! ```

use crate::concept::{Concept, ConceptInfo, ModeledBy};
use crate::{Error, Result};
use serde::Serialize;
use std::any::TypeId;
use std::collections::BTreeMap;
use tracing::{debug, instrument, trace};

/// One (concept, type) binding recorded in the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelEntry {
    /// Concept metadata
    pub concept: ConceptInfo,
    /// Fully qualified name of the modeling type
    pub type_name: &'static str,
    #[serde(skip)]
    type_id: TypeId,
}

impl ModelEntry {
    fn new<K: Concept, T: ?Sized + 'static>() -> Self {
        Self {
            concept: K::info(),
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Identity of the modeling type
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }
}

// Concept name first so iteration groups entries by name; the concept's own
// TypeId keeps distinct markers that share a name apart.
type Key = (&'static str, TypeId, TypeId);

fn key<K: Concept, T: ?Sized + 'static>() -> Key {
    (K::NAME, TypeId::of::<K>(), TypeId::of::<T>())
}

/// Catalogue of registered models, keyed by concept marker and type
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    entries: BTreeMap<Key, ModelEntry>,
}

impl ModelRegistry {
    /// Create an empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a chained registration
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Record that `T` models `K`
    ///
    /// Recording the same pair twice is rejected with
    /// [`Error::ConflictingAdapter`] rather than silently keeping either entry.
    #[instrument(skip(self), fields(concept = K::NAME, type_name = std::any::type_name::<T>()))]
    pub fn register<K, T>(&mut self) -> Result<&ModelEntry>
    where
        K: ModeledBy<T>,
        T: ?Sized + 'static,
    {
        let slot = key::<K, T>();
        if self.entries.contains_key(&slot) {
            debug!("Rejecting second adapter registration");
            return Err(Error::conflicting_adapter::<K, T>());
        }
        debug!("Registering model");
        let entry = self.entries.entry(slot).or_insert_with(ModelEntry::new::<K, T>);
        Ok(&*entry)
    }

    /// Look up the entry binding `K` to `T`
    ///
    /// Unlike [`register`](Self::register) this does not require `K: ModeledBy<T>`,
    /// so it can be asked about any type; a missing entry is reported as
    /// [`Error::NoImplementation`] naming both sides.
    pub fn resolve<K, T>(&self) -> Result<&ModelEntry>
    where
        K: Concept,
        T: ?Sized + 'static,
    {
        trace!(concept = K::NAME, type_name = std::any::type_name::<T>(), "Resolving model");
        self.entries
            .get(&key::<K, T>())
            .ok_or_else(Error::no_implementation::<K, T>)
    }

    /// Whether `T` has been recorded as a model of `K`
    pub fn contains<K, T>(&self) -> bool
    where
        K: Concept,
        T: ?Sized + 'static,
    {
        self.entries.contains_key(&key::<K, T>())
    }

    /// All recorded models of every concept called `concept`
    pub fn models_of<'a>(
        &'a self,
        concept: &'a str,
    ) -> impl Iterator<Item = &'a ModelEntry> + 'a {
        self.entries
            .iter()
            .filter(move |((name, _, _), _)| *name == concept)
            .map(|(_, entry)| entry)
    }

    /// Names of every concept `T` has been recorded against
    pub fn concepts_of<T: ?Sized + 'static>(&self) -> Vec<&'static str> {
        let id = TypeId::of::<T>();
        self.entries
            .keys()
            .filter(|(_, _, type_id)| *type_id == id)
            .map(|(name, _, _)| *name)
            .collect()
    }

    /// All entries, ordered by concept name
    pub fn entries(&self) -> impl Iterator<Item = &ModelEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the catalogue as a JSON array of entries
    pub fn to_json(&self) -> Result<String> {
        let entries: Vec<&ModelEntry> = self.entries.values().collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }
}

/// Chained registration that stops at the first conflict
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: ModelRegistry,
    error: Option<Error>,
}

impl RegistryBuilder {
    /// Record that `T` models `K`
    pub fn register<K, T>(mut self) -> Self
    where
        K: ModeledBy<T>,
        T: ?Sized + 'static,
    {
        if self.error.is_none() {
            if let Err(e) = self.registry.register::<K, T>() {
                self.error = Some(e);
            }
        }
        self
    }

    /// Finish, returning the first registration error if there was one
    pub fn build(self) -> Result<ModelRegistry> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.registry),
        }
    }
}
