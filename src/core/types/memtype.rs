use crate::core::types::limits::Limits;

/// Memory types classify linear memories and their size range. The limits constrain the
/// minimum and optionally the maximum size of a memory. The limits are given in units of
/// page size.
///
/// <https://www.w3.org/TR/wasm-core-1/#memory-types%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#binary-memtype>
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct MemType {
    pub limits: Limits,
}

impl MemType {
    /// Size of a single page, in bytes.
    pub const PAGE_SIZE: u32 = 64 * 1024;

    /// Upper bound on both limits: 65536 pages of 64KiB make up 4GiB.
    pub const MAX_PAGES: u32 = 65536;
}
