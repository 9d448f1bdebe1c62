//! CSS-style hex colours (`#fff`, `#a0b0c0`) → [`Rgba`].

use thiserror::Error;

use super::Rgba;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColourError {
    #[error("colour {0:?} must start with '#'")]
    MissingHash(String),

    #[error("colour {0:?} must have 3 or 6 hex digits")]
    BadLength(String),

    #[error("colour {0:?} contains a non-hex digit")]
    BadDigit(String),
}

/// Parse `#rgb` or `#rrggbb` into `0x00RRGGBB`.
///
/// Short form doubles each nibble, so `#fff` == `#ffffff`.
pub fn parse_hex(s: &str) -> Result<Rgba, ColourError> {
    let digits = s
        .strip_prefix('#')
        .ok_or_else(|| ColourError::MissingHash(s.to_owned()))?;

    if digits.len() != 3 && digits.len() != 6 {
        return Err(ColourError::BadLength(s.to_owned()));
    }
    // from_str_radix alone would accept a leading '+'
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColourError::BadDigit(s.to_owned()));
    }

    let raw = u32::from_str_radix(digits, 16).map_err(|_| ColourError::BadDigit(s.to_owned()))?;
    if digits.len() == 6 {
        return Ok(raw);
    }
    let r = (raw >> 8) & 0xF;
    let g = (raw >> 4) & 0xF;
    let b = raw & 0xF;
    Ok(((r * 0x11) << 16) | ((g * 0x11) << 8) | (b * 0x11))
}
