//! WebAssembly custom section type definition.
use crate::core::SectionKind;

/// Custom sections are intended to be used for debugging information or
/// third-party extensions, and are ignored by the WebAssembly semantics.
///
/// Their contents consist of a name further identifying the custom section, followed by an
/// uninterpreted sequence of bytes for custom use.
///
/// <https://www.w3.org/TR/wasm-core-1/#custom-section%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#binary-customsec>
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CustomSection {
    pub name: String,
    pub contents: Vec<u8>,

    /// The last non-custom section that preceded this one in the binary, or `None` if it
    /// appeared before all of them. Encoding emits the section at the same position. Never
    /// [SectionKind::Custom]: encoding rejects such a section.
    pub after: Option<SectionKind>,
}
