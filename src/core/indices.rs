//! Type definitions for WebAssembly indices.
//!
//! Indices are not checked against the size of their index space by this crate; see
//! [`Module::all_declarations`](crate::core::Module::all_declarations) for how the spaces are
//! formed.
//!
//! See <https://www.w3.org/TR/wasm-core-1/#indices%E2%91%A0>

macro_rules! define_index_type {
    ($name:ident) => {
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
        pub struct $name(pub u32);
    };
}

define_index_type!(TypeIdx);
define_index_type!(FuncIdx);
define_index_type!(TableIdx);
define_index_type!(MemIdx);
define_index_type!(GlobalIdx);
define_index_type!(LocalIdx);
