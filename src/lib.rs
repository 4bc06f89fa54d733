//! A codec for WebAssembly modules in the binary format.
//!
//! This library implements the Binary format of the WebAssembly [specification],
//! version 1 (MVP): a [`Module`] can be decoded from any byte source and encoded back into a
//! byte buffer.
//!
//! The main entry points are the [`decode()`] and [`encode()`] functions. The index spaces
//! that indices refer to are given by [`Module::all_declarations`], and
//! [`encode_name_section`] produces the "name" custom section carrying debug names.
//!
//! No validation beyond what the binary format itself requires is performed.
//!
//! [specification]: https://www.w3.org/TR/wasm-core-1/
#![forbid(unsafe_code)]

pub mod core;
pub mod decode;
pub mod decode_errors;
pub mod encode;

pub use crate::core::{IndexSpaces, Module, SectionKind, section_id_name};
pub use crate::decode::{DecodeModuleError, decode_module as decode};
pub use crate::encode::{
    EncodeError, EncodeModuleError, UnsupportedEncodeError, encode_module as encode,
    encode_name_section,
};
