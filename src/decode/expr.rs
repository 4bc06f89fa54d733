use crate::core::expr::ConstExpr;
use crate::core::indices::GlobalIdx;
use crate::decode::helpers::{DecodeFloat32Error, DecodeFloat64Error, decode_f32, decode_f64};
use crate::decode::indices::DecodeGlobalIdxError;
use crate::decode::integer::{DecodeI32Error, DecodeI64Error, decode_i32, decode_i64};
use crate::decode::read_byte;
use std::io::{self, Read};
use thiserror::Error;

pub(crate) const I32_CONST: u8 = 0x41;
pub(crate) const I64_CONST: u8 = 0x42;
pub(crate) const F32_CONST: u8 = 0x43;
pub(crate) const F64_CONST: u8 = 0x44;
pub(crate) const GLOBAL_GET: u8 = 0x23;
pub(crate) const END: u8 = 0x0B;

#[derive(Debug, Error)]
#[error(
    "invalid constant expression opcode: expected 0x41 (i32.const), 0x42 (i64.const), 0x43 (f32.const), 0x44 (f64.const) or 0x23 (global.get); got {0:#04X}"
)]
pub struct InvalidConstExprOpcodeError(pub u8);

#[derive(Debug, Error)]
pub enum DecodeConstExprError {
    #[error("failed reading constant expression opcode")]
    ReadOpcode(#[source] io::Error),

    #[error(transparent)]
    InvalidOpcode(#[from] InvalidConstExprOpcodeError),

    #[error("failed decoding i32.const immediate")]
    DecodeI32(#[from] DecodeI32Error),

    #[error("failed decoding i64.const immediate")]
    DecodeI64(#[from] DecodeI64Error),

    #[error("failed decoding f32.const immediate")]
    DecodeF32(#[from] DecodeFloat32Error),

    #[error("failed decoding f64.const immediate")]
    DecodeF64(#[from] DecodeFloat64Error),

    #[error(transparent)]
    DecodeGlobalIdx(#[from] DecodeGlobalIdxError),

    #[error("failed reading end of constant expression")]
    ReadEnd(#[source] io::Error),

    #[error(
        "constant expression must hold a single instruction: expected 0x0B (end); got {0:#04X}"
    )]
    MissingEnd(u8),
}

impl ConstExpr {
    pub(crate) fn decode<R: Read + ?Sized>(reader: &mut R) -> Result<Self, DecodeConstExprError> {
        let opcode = read_byte(reader).map_err(DecodeConstExprError::ReadOpcode)?;

        let expr = match opcode {
            I32_CONST => ConstExpr::I32Const(decode_i32(reader)?),
            I64_CONST => ConstExpr::I64Const(decode_i64(reader)?),
            F32_CONST => ConstExpr::F32Const(decode_f32(reader)?),
            F64_CONST => ConstExpr::F64Const(decode_f64(reader)?),
            GLOBAL_GET => ConstExpr::GlobalGet(GlobalIdx::decode(reader)?),
            b => return Err(InvalidConstExprOpcodeError(b).into()),
        };

        match read_byte(reader).map_err(DecodeConstExprError::ReadEnd)? {
            END => Ok(expr),
            b => Err(DecodeConstExprError::MissingEnd(b)),
        }
    }
}
