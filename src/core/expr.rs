use crate::core::indices::GlobalIdx;

/// A constant expression, used as the initial value of globals and as the offset of element
/// and data segments. Only the instructions allowed in a constant context are representable;
/// the terminating `end` is implicit.
///
/// <https://www.w3.org/TR/wasm-core-1/#constant-expressions%E2%91%A0>
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum ConstExpr {
    I32Const(i32),
    I64Const(i64),
    F32Const(f32),
    F64Const(f64),
    GlobalGet(GlobalIdx),
}
