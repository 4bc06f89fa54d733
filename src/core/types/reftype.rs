/// Reference types classify the elements a table holds.
///
/// <https://www.w3.org/TR/wasm-core-1/#table-types%E2%91%A0>
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum RefType {
    Func,
    Extern,
}
