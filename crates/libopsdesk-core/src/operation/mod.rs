mod detail_level;
mod document_builder;
mod draft;
mod mutation_builder;
mod operation_kind;
mod query_builder;
mod render;
mod resource;

pub use detail_level::DetailLevel;
pub use document_builder::DocumentBuildError;
pub use document_builder::DocumentBuilder;
pub use draft::OperationDraft;
pub use mutation_builder::MutationBuilder;
pub use operation_kind::OperationKind;
pub use query_builder::QueryBuilder;
pub use render::render;
pub use resource::NestedSection;
pub use resource::ResourceDescriptor;
pub use resource::ResourceMutationBuilder;
pub use resource::ResourceQueryBuilder;
pub use resource::descriptors;

#[cfg(test)]
mod tests;
