use crate::core::expr::ConstExpr;
use crate::core::indices::{FuncIdx, MemIdx, TableIdx};
use crate::core::types::GlobalType;

/// A global variable together with the constant expression giving its initial value.
///
/// <https://www.w3.org/TR/wasm-core-1/#globals%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#global-section%E2%91%A0>
#[derive(Debug, PartialEq, Clone)]
pub struct Global {
    pub r#type: GlobalType,
    pub init: ConstExpr,
}

/// An element segment initializes a range of a table, starting at `offset`, with function
/// references.
///
/// <https://www.w3.org/TR/wasm-core-1/#element-segments%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#element-section%E2%91%A0>
#[derive(Debug, PartialEq, Clone)]
pub struct Elem {
    pub table: TableIdx,
    pub offset: ConstExpr,
    pub init: Vec<FuncIdx>,
}

/// A data segment initializes a range of a memory, starting at `offset`, with a static
/// vector of bytes.
///
/// <https://www.w3.org/TR/wasm-core-1/#data-segments%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#data-section%E2%91%A0>
#[derive(Debug, PartialEq, Clone)]
pub struct Data {
    pub memory: MemIdx,
    pub offset: ConstExpr,
    pub init: Vec<u8>,
}

/// The body of a locally defined function: its locals declarations followed by its
/// instructions, kept as uninterpreted bytes.
///
/// <https://www.w3.org/TR/wasm-core-1/#code-section%E2%91%A0>
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Code {
    pub body: Vec<u8>,
}
