//! Command encoder
//!
//! Every function here is pure: it maps one semantic operation to the byte pairs the
//! bridge expects and performs no I/O. Hand the results to [`crate::transport`].
//!
//! ## Selected zone
//!
//! The bridge remembers which zone the last on/off/white/night command addressed.
//! Brightness, color and disco commands carry no zone and apply to that remembered
//! zone, so a zone-selecting command must be sent before them in the same batch.
//! [`in_zone`] prepends one for you.
//!
//! ```rust
//! use milight::command::{self, Command};
//! use milight::Zone;
//!
//! # fn main() -> milight::Result<()> {
//! let batch = Command::concat([
//!     command::turn_on(Zone::Zone2)?,
//!     command::set_color_hex("#FF8000")?,
//!     command::set_brightness(0.4),
//! ]);
//! assert_eq!(batch.packets().count(), 3);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::color;
use crate::protocol::{self, Packet, Pair, ZoneTable};
use crate::{error::MilightError, zone::Zone, Result};

/// An ordered sequence of (opcode, argument) pairs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Command {
    pairs: Vec<Pair>,
}

impl Command {
    fn single(pair: Pair) -> Self {
        Self { pairs: vec![pair] }
    }

    fn doubled(pair: Pair) -> Self {
        Self {
            pairs: vec![pair, pair],
        }
    }

    /// Concatenate commands, keeping their order
    pub fn concat(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            pairs: commands.into_iter().flat_map(|c| c.pairs).collect(),
        }
    }

    /// This command followed by `next`
    pub fn then(mut self, next: Command) -> Self {
        self.pairs.extend(next.pairs);
        self
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Flattened pair bytes, always an even length
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pairs.iter().flatten().copied().collect()
    }

    /// One packet per pair
    pub fn packets(&self) -> impl Iterator<Item = Packet> + '_ {
        self.pairs.iter().copied().map(Packet::from)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, [opcode, argument]) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}{:02X}", opcode, argument)?;
        }
        Ok(())
    }
}

fn zone_command<Z>(table: &ZoneTable, zone: Z) -> Result<Pair>
where
    Z: TryInto<Zone>,
    MilightError: From<Z::Error>,
{
    let zone = zone.try_into()?;
    Ok(protocol::zone_pair(table, zone))
}

/// Turn on the lights in `zone` without touching their stored color or brightness,
/// and select the zone
pub fn turn_on<Z>(zone: Z) -> Result<Command>
where
    Z: TryInto<Zone>,
    MilightError: From<Z::Error>,
{
    zone_command(&protocol::ON, zone).map(Command::single)
}

/// Turn off the lights in `zone` and select the zone
pub fn turn_off<Z>(zone: Z) -> Result<Command>
where
    Z: TryInto<Zone>,
    MilightError: From<Z::Error>,
{
    zone_command(&protocol::OFF, zone).map(Command::single)
}

/// Full white in `zone`, and select the zone.
///
/// The pair is sent twice: bulbs ignore the white pulse unless it immediately
/// follows another pulse for the same zone.
pub fn set_white<Z>(zone: Z) -> Result<Command>
where
    Z: TryInto<Zone>,
    MilightError: From<Z::Error>,
{
    zone_command(&protocol::WHITE, zone).map(Command::doubled)
}

/// Night mode in `zone`, and select the zone. Sent twice like [`set_white`].
pub fn set_night_mode<Z>(zone: Z) -> Result<Command>
where
    Z: TryInto<Zone>,
    MilightError: From<Z::Error>,
{
    zone_command(&protocol::NIGHT, zone).map(Command::doubled)
}

/// Device brightness byte for `level` in `0.0..=1.0`.
///
/// The level is clamped; NaN gives the minimum.
pub fn brightness_byte(level: f64) -> u8 {
    let level = if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) };
    let span = f64::from(protocol::BRIGHTNESS_MAX - protocol::BRIGHTNESS_MIN);
    (level * span) as u8 + protocol::BRIGHTNESS_MIN
}

/// Brightness for the selected zone
pub fn set_brightness(level: f64) -> Command {
    Command::single([protocol::BRIGHTNESS_PREFIX, brightness_byte(level)])
}

/// Color from 8-bit channels for the selected zone
pub fn set_color_rgb(r: u8, g: u8, b: u8) -> Command {
    color_command(color::rgb_int_to_device_byte(r, g, b))
}

/// Color from `0.0..=1.0` channels for the selected zone
pub fn set_color_rgb_float(r: f64, g: f64, b: f64) -> Command {
    color_command(color::rgb_to_device_byte(r, g, b))
}

/// Color from a `#RRGGBB` string for the selected zone
pub fn set_color_hex(rgb: &str) -> Result<Command> {
    color::hex_to_device_byte(rgb).map(color_command)
}

fn color_command(code: u8) -> Command {
    Command::single([protocol::COLOR_PREFIX, code])
}

/// Disco mode for the selected zone. Repeating it cycles through the modes built
/// into the bulbs.
pub fn disco_mode_on() -> Command {
    Command::single(protocol::DISCO_MODE_ON)
}

pub fn disco_mode_faster() -> Command {
    Command::single(protocol::DISCO_MODE_FASTER)
}

pub fn disco_mode_slower() -> Command {
    Command::single(protocol::DISCO_MODE_SLOWER)
}

/// Select `zone` with an "on" pulse, then run `command` there
pub fn in_zone<Z>(zone: Z, command: Command) -> Result<Command>
where
    Z: TryInto<Zone>,
    MilightError: From<Z::Error>,
{
    Ok(turn_on(zone)?.then(command))
}
