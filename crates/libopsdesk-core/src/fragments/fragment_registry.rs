use crate::fragments::Fragment;
use crate::fragments::FragmentRegistryBuilder;
use crate::fragments::catalog;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::OnceLock;

/// The process-wide registry holding the standard fragment catalog.
///
/// Built on first use and never mutated afterwards, so it is safe to share
/// across threads without locking.
pub fn registry() -> &'static FragmentRegistry {
    static STANDARD_FRAGMENT_REGISTRY: OnceLock<FragmentRegistry> = OnceLock::new();
    STANDARD_FRAGMENT_REGISTRY.get_or_init(|| {
        let mut builder = FragmentRegistryBuilder::new();
        for fragment in catalog::standard_fragments() {
            builder.register(fragment);
        }
        builder.build()
    })
}

/// An immutable table of [`Fragment`] definitions keyed by name.
///
/// The registry is static configuration data, not a cache: there is no
/// eviction and no invalidation. Use [`FragmentRegistryBuilder`] to
/// construct one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentRegistry {
    pub(super) fragments: HashMap<String, Fragment>,
}

impl FragmentRegistry {
    pub fn fragments(&self) -> &HashMap<String, Fragment> {
        &self.fragments
    }

    pub fn lookup(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }

    /// Computes the transitive closure of `requested` over the fragment
    /// dependency graph.
    ///
    /// Breadth-first worklist with visited tracking: each name is expanded
    /// at most once, so an accidental cycle in the registry terminates
    /// instead of looping. Names with no registered definition pass through
    /// into the result as opaque references and contribute no further
    /// dependencies.
    pub fn resolve<'a>(
        &self,
        requested: impl IntoIterator<Item = &'a str>,
    ) -> BTreeSet<String> {
        let mut resolved = BTreeSet::new();
        let mut worklist: VecDeque<String> =
            requested.into_iter().map(str::to_string).collect();

        while let Some(name) = worklist.pop_front() {
            if resolved.contains(&name) {
                continue;
            }
            if let Some(fragment) = self.fragments.get(&name) {
                for dependency in fragment.dependencies() {
                    if !resolved.contains(dependency) {
                        worklist.push_back(dependency.clone());
                    }
                }
            }
            resolved.insert(name);
        }

        resolved
    }

    /// Renders the definitions of the named fragments, double-newline
    /// separated, in ascending lexicographic name order.
    ///
    /// Names with no registered definition are skipped rather than
    /// rejected: documents may spread fragments supplied out-of-band.
    /// Dependencies are NOT expanded here; pass the output of
    /// [`FragmentRegistry::resolve`] to render a full closure.
    pub fn render<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> String {
        let ordered: BTreeSet<&str> = names.into_iter().collect();
        let definitions: Vec<String> = ordered
            .iter()
            .filter_map(|name| self.fragments.get(*name))
            .map(Fragment::to_string)
            .collect();
        definitions.join("\n\n")
    }
}
