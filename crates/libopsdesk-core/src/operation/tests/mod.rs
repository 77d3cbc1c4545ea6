mod mutation_builder_tests;
mod query_builder_tests;
mod render_tests;
mod resource_builder_tests;
