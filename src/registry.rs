//! Transform registry: name → transform lookup.
//!
//! The built-in registry is an explicit registration table, initialized once
//! per process on first use and read-only afterwards. Callers that need extra
//! transforms build their own registry with [`TransformRegistry::with_builtins`]
//! and [`TransformRegistry::register`].
//!
//! Names starting with [`PRIVATE_PREFIX`] are hidden: they can be registered
//! (e.g. helpers shared by other transforms) but are never listed and cannot
//! be requested by a pipeline.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::transforms::{builtin_transforms, Transform, TransformDomain};

/// Reserved prefix for names that are not part of the public transform set.
pub const PRIVATE_PREFIX: &str = "__";

/// Entry-point names excluded from listings by default.
pub const DEFAULT_EXCLUDED: &[&str] = &["run", "list_available_transforms"];

static BUILTIN: Lazy<TransformRegistry> = Lazy::new(TransformRegistry::with_builtins);

/// Mapping from transform name to [`Transform`]
#[derive(Debug, Clone, Default)]
pub struct TransformRegistry {
    transforms: FxHashMap<String, Transform>,
}

impl TransformRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in transform
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for transform in builtin_transforms() {
            registry.register(transform);
        }
        registry
    }

    /// The process-wide built-in registry
    pub fn builtin() -> &'static TransformRegistry {
        &BUILTIN
    }

    /// Register a transform, replacing any previous one with the same name.
    /// Returns the replaced transform, if any.
    pub fn register(&mut self, transform: Transform) -> Option<Transform> {
        self.transforms
            .insert(transform.name().to_string(), transform)
    }

    /// Look up a transform by name, including hidden ones
    pub fn get(&self, name: &str) -> Option<&Transform> {
        self.transforms.get(name)
    }

    /// Look up a transform a pipeline is allowed to request
    pub fn get_public(&self, name: &str) -> Option<&Transform> {
        if Self::is_private(name) {
            return None;
        }
        self.get(name)
    }

    /// Domain tag of a registered transform
    pub fn domain_of(&self, name: &str) -> Option<TransformDomain> {
        self.get(name).map(Transform::domain)
    }

    /// Names of all public transforms not in `exclude`.
    ///
    /// Deterministic and side-effect free; an empty registry yields an empty
    /// set.
    pub fn list_available_transforms(&self, exclude: &[&str]) -> BTreeSet<String> {
        self.transforms
            .keys()
            .filter(|name| !Self::is_private(name))
            .filter(|name| !exclude.contains(&name.as_str()))
            .cloned()
            .collect()
    }

    /// [`list_available_transforms`](Self::list_available_transforms) with
    /// the default exclusions
    pub fn available(&self) -> BTreeSet<String> {
        self.list_available_transforms(DEFAULT_EXCLUDED)
    }

    /// Whether `name` can be requested by a pipeline
    pub fn is_available(&self, name: &str) -> bool {
        !Self::is_private(name) && !DEFAULT_EXCLUDED.contains(&name) && self.get(name).is_some()
    }

    /// Iterate over all registered transforms in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Transform> {
        self.transforms.values()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    fn is_private(name: &str) -> bool {
        name.starts_with(PRIVATE_PREFIX)
    }
}
