//! The diagnostic chain and its operations
//!
//! Construction, transformation, inspection and rendering live in separate
//! submodules, all as inherent methods of [`Diagnostic`].

pub mod constructors;
pub mod display;
pub mod inspect;
pub mod transform;
pub mod types;

pub use inspect::Layers;
pub use types::{Data, Diagnostic, External, Result};
