use crate::core::names::{
    FUNCTION_NAMES_SUBSECTION_ID, LOCAL_NAMES_SUBSECTION_ID, MODULE_NAME_SUBSECTION_ID,
    NAME_SECTION_NAME,
};
use crate::core::{ImportDesc, Module, SectionKind};
use crate::encode::helpers::{EncodeError, encode_framed, encode_len, encode_name};
use crate::encode::integer::encode_u32;

/// Encodes the "name" custom section of `module`, including its section id and size.
///
/// Function names are taken from the `debug_name` of [`ImportDesc::Func`], so only imported
/// functions are named; each is identified by its index in the function index space, which
/// for imports is its position among the function imports. Table, memory and global imports
/// are not counted, so when one of them precedes a function import the written index is lower
/// than that import's position in the import section. The module name subsection is
/// written when [`Module::name`] is non-empty, the function names subsection when at least
/// one imported function is named.
///
/// The local names subsection lists every imported function with zero locals, as local
/// names are not part of the model.
///
/// <https://www.w3.org/TR/wasm-core-1/#name-section%E2%91%A0>
pub fn encode_name_section(module: &Module) -> Result<Vec<u8>, EncodeError> {
    let mut func_count = 0u32;
    let mut func_name_count = 0usize;
    let mut func_name_entries = Vec::new();

    for import in &module.imports {
        let ImportDesc::Func { debug_name, .. } = &import.desc else {
            continue;
        };

        if let Some(name) = debug_name.as_deref().filter(|n| !n.is_empty()) {
            func_name_count += 1;
            encode_u32(func_count, &mut func_name_entries);
            encode_name(name, &mut func_name_entries)?;
        }
        func_count += 1;
    }

    let mut data = Vec::new();
    encode_name(NAME_SECTION_NAME, &mut data)?;

    // <https://www.w3.org/TR/wasm-core-1/#binary-modulenamesec>
    if let Some(name) = module.name.as_deref().filter(|n| !n.is_empty()) {
        let mut content = Vec::new();
        encode_name(name, &mut content)?;
        encode_framed(MODULE_NAME_SUBSECTION_ID, &content, &mut data)?;
    }

    // <https://www.w3.org/TR/wasm-core-1/#binary-funcnamesec>
    if func_name_count > 0 {
        let mut content = Vec::new();
        encode_len(func_name_count, &mut content)?;
        content.extend_from_slice(&func_name_entries);
        encode_framed(FUNCTION_NAMES_SUBSECTION_ID, &content, &mut data)?;
    }

    // <https://www.w3.org/TR/wasm-core-1/#binary-localnamesec>
    if func_count > 0 {
        let mut content = Vec::new();
        encode_u32(func_count, &mut content);
        for idx in 0..func_count {
            encode_u32(idx, &mut content);
            // TODO: emit the names of locals once Code keeps them apart from the body.
            content.push(0);
        }
        encode_framed(LOCAL_NAMES_SUBSECTION_ID, &content, &mut data)?;
    }

    let mut out = Vec::new();
    encode_framed(SectionKind::Custom.id(), &data, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Import;
    use crate::core::indices::TypeIdx;
    use crate::core::types::{GlobalType, Mut, ValType};

    fn func_import(module: &str, name: &str, r#type: u32, debug_name: Option<&str>) -> Import {
        Import {
            module: module.to_owned(),
            name: name.to_owned(),
            desc: ImportDesc::Func {
                r#type: TypeIdx(r#type),
                debug_name: debug_name.map(str::to_owned),
            },
        }
    }

    #[test]
    fn encodes_module_and_function_names() {
        let module = Module {
            name: Some("simple".to_owned()),
            imports: vec![func_import("", "Hello", 0, Some("hello"))],
            ..Default::default()
        };

        #[rustfmt::skip]
        let expected = [
            0x00, 0x1d,
            0x04, b'n', b'a', b'm', b'e',
            0x00, 0x07,
            0x06, b's', b'i', b'm', b'p', b'l', b'e',
            0x01, 0x08,
            0x01,
            0x00, 0x05, b'h', b'e', b'l', b'l', b'o',
            0x02, 0x03,
            0x01,
            0x00, 0x00,
        ];
        assert_eq!(encode_name_section(&module).unwrap(), expected);
    }

    #[test]
    fn module_name_is_optional() {
        let (func0, func1) = ("runtime.args_sizes_get", "runtime.fd_write");
        let module = Module {
            imports: vec![
                func_import("wasi_snapshot_preview1", "args_sizes_get", 0, Some(func0)),
                func_import("wasi_snapshot_preview1", "fd_write", 1, Some(func1)),
            ],
            ..Default::default()
        };

        let mut expected = vec![0x00, 0x39, 0x04, b'n', b'a', b'm', b'e'];
        expected.extend([0x01, u8::try_from(1 + 2 + 2 + func0.len() + func1.len()).unwrap()]);
        expected.push(0x02);
        expected.extend([0x00, u8::try_from(func0.len()).unwrap()]);
        expected.extend_from_slice(func0.as_bytes());
        expected.extend([0x01, u8::try_from(func1.len()).unwrap()]);
        expected.extend_from_slice(func1.as_bytes());
        expected.extend([0x02, 0x05, 0x02, 0x00, 0x00, 0x01, 0x00]);

        assert_eq!(encode_name_section(&module).unwrap(), expected);
    }

    #[test]
    fn omits_empty_subsections() {
        let module = Module {
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            encode_name_section(&module).unwrap(),
            [0x00, 0x05, 0x04, b'n', b'a', b'm', b'e']
        );
    }

    #[test]
    fn unnamed_imports_still_get_local_names() {
        let module = Module {
            imports: vec![func_import("env", "f", 0, None)],
            ..Default::default()
        };
        assert_eq!(
            encode_name_section(&module).unwrap(),
            [0x00, 0x0a, 0x04, b'n', b'a', b'm', b'e', 0x02, 0x03, 0x01, 0x00, 0x00]
        );
    }

    #[test]
    fn function_indices_skip_other_import_kinds() {
        let module = Module {
            imports: vec![
                Import {
                    module: "env".to_owned(),
                    name: "g".to_owned(),
                    desc: ImportDesc::Global(GlobalType(Mut::Const, ValType::I32)),
                },
                func_import("env", "f", 0, Some("f")),
            ],
            ..Default::default()
        };

        let bytes = encode_name_section(&module).unwrap();
        // function names: count 1, index 0, "f"
        assert_eq!(&bytes[7..12], [0x01, 0x04, 0x01, 0x00, 0x01]);
    }
}
