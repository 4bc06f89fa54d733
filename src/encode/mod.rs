//! Helpers for encoding a [Module](crate::core::Module) into the binary format.
//!
//! Encoders append to a growable buffer and never re-validate their input: a module built
//! programmatically is trusted to be well-formed.
pub(crate) mod helpers;
pub mod integer;
mod module;
mod names;
mod sections;
mod types;

pub use helpers::{EncodeError, UnsupportedEncodeError};
pub use module::{EncodeModuleError, encode_module};
pub use names::encode_name_section;
