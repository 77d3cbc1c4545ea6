use crate::fragments::Fragment;
use crate::fragments::FragmentRegistry;
use std::collections::HashMap;

/// Accumulates fragment definitions for an immutable [`FragmentRegistry`].
///
/// Registration is last-write-wins: re-registering a name replaces the
/// prior definition without complaint. Tolerating redefinition (rather than
/// rejecting it) lets callers shadow catalog fragments with variants of
/// their own.
#[derive(Debug, Default)]
pub struct FragmentRegistryBuilder {
    fragments: HashMap<String, Fragment>,
}

impl FragmentRegistryBuilder {
    pub fn new() -> Self {
        Self {
            fragments: HashMap::new(),
        }
    }

    pub fn register(&mut self, fragment: Fragment) -> &mut Self {
        self.fragments.insert(fragment.name().to_string(), fragment);
        self
    }

    /// Consume this builder to produce the immutable registry.
    pub fn build(self) -> FragmentRegistry {
        FragmentRegistry {
            fragments: self.fragments,
        }
    }
}
