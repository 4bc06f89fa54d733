/// Limits classify the size range of resizeable storage associated with memory types and
/// table types. If no maximum is given, the respective storage can grow to any size.
///
/// <https://www.w3.org/TR/wasm-core-1/#limits%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#binary-limits>
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Limits {
    pub min: u32,
    pub max: Option<u32>,
}
