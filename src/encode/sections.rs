use crate::core::{
    Code, ConstExpr, CustomSection, Data, Elem, Export, ExportDesc, Global, Import, ImportDesc,
};
use crate::decode::expr::{END, F32_CONST, F64_CONST, GLOBAL_GET, I32_CONST, I64_CONST};
use crate::encode::helpers::{
    EncodeError, UnsupportedEncodeError, encode_byte_vector, encode_list, encode_name,
};
use crate::encode::integer::{encode_i32, encode_i64, encode_u32};

impl Import {
    /// Only function imports can be encoded; the other descriptors are rejected with
    /// [`EncodeError::Unsupported`] before anything is written.
    pub(crate) fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        let ImportDesc::Func { r#type, .. } = &self.desc else {
            return Err(UnsupportedEncodeError {
                kind: self.desc.kind(),
            }
            .into());
        };

        encode_name(&self.module, out)?;
        encode_name(&self.name, out)?;
        out.push(self.desc.kind().marker());
        encode_u32(r#type.0, out);
        Ok(())
    }
}

impl Export {
    pub(crate) fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        encode_name(&self.name, out)?;
        out.push(self.desc.kind().marker());
        let idx = match self.desc {
            ExportDesc::Func(idx) => idx.0,
            ExportDesc::Table(idx) => idx.0,
            ExportDesc::Mem(idx) => idx.0,
            ExportDesc::Global(idx) => idx.0,
        };
        encode_u32(idx, out);
        Ok(())
    }
}

impl ConstExpr {
    pub(crate) fn encode(&self, out: &mut Vec<u8>) {
        match *self {
            ConstExpr::I32Const(v) => {
                out.push(I32_CONST);
                encode_i32(v, out);
            }
            ConstExpr::I64Const(v) => {
                out.push(I64_CONST);
                encode_i64(v, out);
            }
            ConstExpr::F32Const(v) => {
                out.push(F32_CONST);
                out.extend_from_slice(&v.to_le_bytes());
            }
            ConstExpr::F64Const(v) => {
                out.push(F64_CONST);
                out.extend_from_slice(&v.to_le_bytes());
            }
            ConstExpr::GlobalGet(idx) => {
                out.push(GLOBAL_GET);
                encode_u32(idx.0, out);
            }
        }
        out.push(END);
    }
}

impl Global {
    pub(crate) fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        self.r#type.encode(out);
        self.init.encode(out);
        Ok(())
    }
}

impl Elem {
    pub(crate) fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        encode_u32(self.table.0, out);
        self.offset.encode(out);
        encode_list(&self.init, out, |idx, out| {
            encode_u32(idx.0, out);
            Ok(())
        })
    }
}

impl Data {
    pub(crate) fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        encode_u32(self.memory.0, out);
        self.offset.encode(out);
        encode_byte_vector(&self.init, out)
    }
}

impl Code {
    pub(crate) fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        encode_byte_vector(&self.body, out)
    }
}

impl CustomSection {
    /// Writes the section payload: the name followed by the raw contents.
    pub(crate) fn encode(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        encode_name(&self.name, out)?;
        out.extend_from_slice(&self.contents);
        Ok(())
    }
}
