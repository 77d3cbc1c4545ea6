pub mod catalog;
mod fragment;
mod fragment_registry;
mod fragment_registry_builder;

pub use fragment::Fragment;
pub use fragment_registry::FragmentRegistry;
pub use fragment_registry::registry;
pub use fragment_registry_builder::FragmentRegistryBuilder;
