//! Dimensioned-quantity algebra for memory-array characterization reports.
//!
//! Values carry a physical dimension and a decimal scale, arithmetic is
//! checked dimension by dimension, and named parameters track whether they
//! were supplied by the user or derived. An unresolved input makes every
//! figure that depends on it invalid, and the report shows those as "N/A".

pub mod config;
pub mod display;
pub mod error;
pub mod parameter;
pub mod quantity;
pub mod store;
pub mod units;

pub use config::{InputDeck, InputEntry, ReportConfig};
pub use display::{render, render_models, select_rung, OutputMode, ReportFormatter};
pub use error::{Error, Result};
pub use parameter::{Parameter, Provenance, State};
pub use quantity::Quantity;
pub use store::{Model, ParamId};
pub use units::{Dimension, Operation, Prefix, ScaleRung};
