use crate::core::types::{
    ExternKind, FuncType, GlobalType, Limits, MemType, Mut, RefType, TableType, ValType,
};
use crate::encode::helpers::{EncodeError, encode_list};
use crate::encode::integer::encode_u32;

impl ValType {
    pub(crate) fn marker(self) -> u8 {
        match self {
            ValType::I32 => 0x7F,
            ValType::I64 => 0x7E,
            ValType::F32 => 0x7D,
            ValType::F64 => 0x7C,
        }
    }

    pub(crate) fn encode(self, out: &mut Vec<u8>) {
        out.push(self.marker());
    }
}

impl RefType {
    pub(crate) fn marker(self) -> u8 {
        match self {
            RefType::Func => 0x70,
            RefType::Extern => 0x6F,
        }
    }
}

impl ExternKind {
    pub(crate) fn marker(self) -> u8 {
        match self {
            ExternKind::Func => 0x00,
            ExternKind::Table => 0x01,
            ExternKind::Mem => 0x02,
            ExternKind::Global => 0x03,
        }
    }
}

impl FuncType {
    pub(crate) fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        out.push(Self::MARKER_BYTE);
        encode_list(&self.parameters, out, encode_valtype)?;
        encode_list(&self.results, out, encode_valtype)
    }
}

fn encode_valtype(t: &ValType, out: &mut Vec<u8>) -> Result<(), EncodeError> {
    t.encode(out);
    Ok(())
}

impl Limits {
    pub(crate) fn encode(&self, out: &mut Vec<u8>) {
        match self.max {
            None => {
                out.push(0x00);
                encode_u32(self.min, out);
            }
            Some(max) => {
                out.push(0x01);
                encode_u32(self.min, out);
                encode_u32(max, out);
            }
        }
    }
}

impl MemType {
    pub(crate) fn encode(&self, out: &mut Vec<u8>) {
        self.limits.encode(out);
    }
}

impl TableType {
    pub(crate) fn encode(&self, out: &mut Vec<u8>) {
        out.push(self.reftype.marker());
        self.limits.encode(out);
    }
}

impl GlobalType {
    pub(crate) fn encode(&self, out: &mut Vec<u8>) {
        let GlobalType(mutability, valtype) = self;
        valtype.encode(out);
        out.push(match mutability {
            Mut::Const => 0x00,
            Mut::Var => 0x01,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::FromMarkerByte;

    #[test]
    fn markers_agree_with_decoder() {
        for t in [ValType::I32, ValType::I64, ValType::F32, ValType::F64] {
            assert_eq!(ValType::from_marker(t.marker()).unwrap(), t);
        }
        for t in [RefType::Func, RefType::Extern] {
            assert_eq!(RefType::from_marker(t.marker()).unwrap(), t);
        }
        for k in [
            ExternKind::Func,
            ExternKind::Table,
            ExternKind::Mem,
            ExternKind::Global,
        ] {
            assert_eq!(ExternKind::from_marker(k.marker()).unwrap(), k);
        }
    }

    #[test]
    fn encodes_function_type() {
        let ft = FuncType {
            parameters: vec![ValType::I32, ValType::F64],
            results: vec![],
        };
        let mut out = Vec::new();
        ft.encode(&mut out).unwrap();
        assert_eq!(out, [0x60, 0x02, 0x7F, 0x7C, 0x00]);
    }

    #[test]
    fn encodes_limits_flag() {
        let mut out = Vec::new();
        Limits { min: 1, max: None }.encode(&mut out);
        Limits {
            min: 1,
            max: Some(65536),
        }
        .encode(&mut out);
        assert_eq!(out, [0x00, 0x01, 0x01, 0x01, 0x80, 0x80, 0x04]);
    }

    #[test]
    fn memory_type_is_not_revalidated() {
        let mut out = Vec::new();
        MemType {
            limits: Limits {
                min: 100,
                max: Some(50),
            },
        }
        .encode(&mut out);
        assert_eq!(out, [0x01, 100, 50]);
    }

    #[test]
    fn encodes_global_type_valtype_first() {
        let mut out = Vec::new();
        GlobalType(Mut::Var, ValType::I32).encode(&mut out);
        assert_eq!(out, [0x7F, 0x01]);
    }
}
