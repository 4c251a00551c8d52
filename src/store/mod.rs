//! Explicit model context: the named parameter slots of one configuration.
pub mod registry;
pub mod types;

pub use registry::Model;
pub use types::ParamId;
