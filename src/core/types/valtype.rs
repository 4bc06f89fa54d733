use std::fmt;

/// Value types classify the individual values that WebAssembly code can compute with and
/// the values that a variable accepts.
///
/// <https://www.w3.org/TR/wasm-core-1/#value-types%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#binary-valtype>
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum ValType {
    I32,
    I64,
    F32,
    F64,
}

impl ValType {
    /// The abbreviation used by the text format, e.g. `i32`.
    pub fn name(self) -> &'static str {
        match self {
            ValType::I32 => "i32",
            ValType::I64 => "i64",
            ValType::F32 => "f32",
            ValType::F64 => "f64",
        }
    }
}

impl fmt::Display for ValType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
