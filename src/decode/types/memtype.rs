use crate::core::types::limits::Limits;
use crate::core::types::memtype::MemType;
use crate::decode::types::limits::{ParseLimitsError, parse_limits};
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeMemoryTypeError {
    #[error("failed decoding Memory type")]
    DecodeLimits(#[from] ParseLimitsError),

    #[error("invalid Memory type")]
    InvalidLimits(#[from] MemoryLimitsError),
}

/// Memory limits that are well-formed but out of range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryLimitsError {
    #[error(
        "memory min must be at most {max_pages} pages (4GiB); got {0}",
        max_pages = MemType::MAX_PAGES
    )]
    MinTooLarge(u32),

    #[error(
        "memory max must be at most {max_pages} pages (4GiB); got {0}",
        max_pages = MemType::MAX_PAGES
    )]
    MaxTooLarge(u32),

    #[error("memory size minimum must not be greater than maximum: min {min}; max {max}")]
    MaxBelowMin { min: u32, max: u32 },
}

pub(crate) fn parse_memtype<R: Read + ?Sized>(
    reader: &mut R,
) -> Result<MemType, DecodeMemoryTypeError> {
    let limits = parse_limits(reader)?;
    validate_memory_limits(&limits)?;
    Ok(MemType { limits })
}

fn validate_memory_limits(limits: &Limits) -> Result<(), MemoryLimitsError> {
    if limits.min > MemType::MAX_PAGES {
        return Err(MemoryLimitsError::MinTooLarge(limits.min));
    }

    if let Some(max) = limits.max {
        if max < limits.min {
            return Err(MemoryLimitsError::MaxBelowMin {
                min: limits.min,
                max,
            });
        }
        if max > MemType::MAX_PAGES {
            return Err(MemoryLimitsError::MaxTooLarge(max));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::integer::encode_u32;

    fn memtype_bytes(min: u32, max: Option<u32>) -> Vec<u8> {
        let mut out = vec![u8::from(max.is_some())];
        encode_u32(min, &mut out);
        if let Some(max) = max {
            encode_u32(max, &mut out);
        }
        out
    }

    fn decode(min: u32, max: Option<u32>) -> Result<MemType, DecodeMemoryTypeError> {
        parse_memtype(&mut memtype_bytes(min, max).as_slice())
    }

    fn limits_error(min: u32, max: Option<u32>) -> MemoryLimitsError {
        match decode(min, max).unwrap_err() {
            DecodeMemoryTypeError::InvalidLimits(e) => e,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn accepts_limits_within_bounds() {
        for (min, max) in [
            (0, None),
            (1, None),
            (65536, None),
            (0, Some(0)),
            (1, Some(65536)),
            (65536, Some(65536)),
        ] {
            assert_eq!(
                decode(min, max).unwrap(),
                MemType {
                    limits: Limits { min, max }
                }
            );
        }
    }

    #[test]
    fn rejects_min_above_page_ceiling() {
        assert_eq!(limits_error(65537, None), MemoryLimitsError::MinTooLarge(65537));
        assert_eq!(limits_error(u32::MAX, None), MemoryLimitsError::MinTooLarge(u32::MAX));
    }

    #[test]
    fn rejects_max_below_min() {
        assert_eq!(
            limits_error(100, Some(50)),
            MemoryLimitsError::MaxBelowMin { min: 100, max: 50 }
        );
    }

    #[test]
    fn rejects_max_above_page_ceiling() {
        assert_eq!(
            limits_error(0, Some(65537)),
            MemoryLimitsError::MaxTooLarge(65537)
        );
    }
}
