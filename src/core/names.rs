//! Contents of the "name" custom section, which associates human-readable names with the
//! module and its functions and locals for debugging purposes.
//!
//! <https://www.w3.org/TR/wasm-core-1/#name-section%E2%91%A0>
use crate::core::indices::{FuncIdx, LocalIdx};

/// Name of the custom section holding debug names.
pub const NAME_SECTION_NAME: &str = "name";

pub(crate) const MODULE_NAME_SUBSECTION_ID: u8 = 0;
pub(crate) const FUNCTION_NAMES_SUBSECTION_ID: u8 = 1;
pub(crate) const LOCAL_NAMES_SUBSECTION_ID: u8 = 2;

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct NameSection {
    pub module_name: Option<String>,

    /// Function names, in ascending function index order.
    pub function_names: Vec<(FuncIdx, String)>,

    /// Local names per function, in ascending function index order.
    pub local_names: Vec<(FuncIdx, Vec<(LocalIdx, String)>)>,
}
