//! Named color values and their textual forms.

use serde::Serialize;

use crate::core::{Error, Result};

/// Which enumeration a color comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKind {
    /// Named web colors.
    Web,
    /// Windows system (UI element) colors.
    System,
}

/// A named color with a packed `0xAARRGGBB` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub argb: u32,
    pub kind: ColorKind,
}

impl NamedColor {
    pub const fn new(name: &'static str, argb: u32, kind: ColorKind) -> Self {
        Self { name, argb, kind }
    }

    pub fn alpha(&self) -> u8 {
        channel(self.argb, 24)
    }

    pub fn red(&self) -> u8 {
        channel(self.argb, 16)
    }

    pub fn green(&self) -> u8 {
        channel(self.argb, 8)
    }

    pub fn blue(&self) -> u8 {
        channel(self.argb, 0)
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha() == 0xFF
    }

    /// Identifier used in generated C++ (`AliceBlue` -> `aliceBlue`).
    pub fn c_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_uppercase() => {
                first.to_ascii_lowercase().to_string() + chars.as_str()
            }
            _ => self.name.to_string(),
        }
    }

    /// C literal of the packed value, e.g. `0xFFF0F8FF`.
    pub fn c_value(&self) -> String {
        format!("0x{}", argb_hex(self.argb))
    }

    /// CSS hex value without alpha, e.g. `#F0F8FF`.
    pub fn css_value(&self) -> String {
        css_hex(self.argb)
    }

    /// Argument list for the `omw::Color` constructor.
    pub fn ctor_arg(&self) -> String {
        if self.is_opaque() {
            format!("argb_{}", self.c_name())
        } else {
            format!(
                "{}, {}, {}, {}",
                self.red(),
                self.green(),
                self.blue(),
                self.alpha()
            )
        }
    }
}

fn channel(argb: u32, shift: u32) -> u8 {
    ((argb >> shift) & 0xFF) as u8
}

/// Two uppercase hex digits.
pub fn to_hex_u8(value: u8) -> String {
    format!("{value:02X}")
}

/// Eight uppercase hex digits, most significant byte first.
pub fn to_hex_u32(value: u32) -> String {
    [24, 16, 8, 0]
        .iter()
        .map(|&shift| to_hex_u8(channel(value, shift)))
        .collect()
}

/// `AARRGGBB` form of a packed color.
pub fn argb_hex(argb: u32) -> String {
    to_hex_u32(argb)
}

/// `#RRGGBB` form of a packed color; alpha is dropped.
pub fn css_hex(argb: u32) -> String {
    format!(
        "#{}{}{}",
        to_hex_u8(channel(argb, 16)),
        to_hex_u8(channel(argb, 8)),
        to_hex_u8(channel(argb, 0))
    )
}

/// Parse `#RRGGBB` (opaque) or `#AARRGGBB`; the `#` is optional.
pub fn parse_argb(name: &str, value: &str) -> Result<u32> {
    let invalid = || Error::InvalidColor {
        name: name.to_string(),
        value: value.to_string(),
    };
    let digits = value.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let parsed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    match digits.len() {
        6 => Ok(0xFF00_0000 | parsed),
        8 => Ok(parsed),
        _ => Err(invalid()),
    }
}
