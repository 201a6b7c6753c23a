//! Color to hue-code mapping
//!
//! The bridge takes a single byte for color commands. It only encodes hue:
//! saturation and value are dropped, so `(255, 0, 0)` and `(128, 0, 0)` are the same
//! command. The byte is an empirical fit to the bulb firmware, not a standard color
//! space:
//!
//! ```text
//! code = trunc(432 - hue / 360 * 255) mod 256
//! ```

use palette::{encoding, FromColor, Hsv, Srgb};

use crate::{error::MilightError, Result};

/// Hue-code for normalized channels in `0.0..=1.0`.
///
/// Channels are clamped to the unit range and NaN counts as 0. Achromatic input
/// (`r == g == b`) has no hue and maps like pure red (hue 0).
pub fn rgb_to_device_byte(r: f64, g: f64, b: f64) -> u8 {
    let (r, g, b) = (unit(r), unit(g), unit(b));
    hue_to_device_byte(hue_degrees(r, g, b))
}

/// Hue-code for 8-bit channels
pub fn rgb_int_to_device_byte(r: u8, g: u8, b: u8) -> u8 {
    rgb_to_device_byte(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    )
}

/// Hue-code for a `#RRGGBB` (or shorthand `#RGB`) string
pub fn hex_to_device_byte(s: &str) -> Result<u8> {
    let [r, g, b] = parse_hex(s)?;
    Ok(rgb_int_to_device_byte(r, g, b))
}

/// Parse `#RRGGBB` or `#RGB` into 8-bit channels
pub fn parse_hex(s: &str) -> Result<[u8; 3]> {
    let invalid = || MilightError::InvalidColorFormat(s.to_string());

    let digits = s.strip_prefix('#').ok_or_else(invalid)?;
    let expanded = match digits.len() {
        6 => digits.to_string(),
        // #RGB stands for #RRGGBB
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return Err(invalid()),
    };

    let bytes = hex::decode(expanded).map_err(|_| invalid())?;
    <[u8; 3]>::try_from(bytes.as_slice()).map_err(|_| invalid())
}

/// Quantize a hue in degrees to the bridge's byte
pub fn hue_to_device_byte(hue: f64) -> u8 {
    let value = (432.0 - hue / 360.0 * 255.0) as i64;
    value.rem_euclid(256) as u8
}

/// HSV hue in `[0, 360)` degrees
fn hue_degrees(r: f64, g: f64, b: f64) -> f64 {
    if r == g && g == b {
        return 0.0;
    }
    let hsv: Hsv<encoding::Srgb, f64> = Hsv::from_color(Srgb::<f64>::new(r, g, b));
    hsv.hue.into_positive_degrees()
}

fn unit(channel: f64) -> f64 {
    if channel.is_nan() {
        0.0
    } else {
        channel.clamp(0.0, 1.0)
    }
}
