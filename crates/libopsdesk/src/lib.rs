pub use libopsdesk_core::*;
