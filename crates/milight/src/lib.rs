//! milight - command encoder and transport for MiLight WiFi bridges
//!
//! The bridge takes one-way UDP datagrams of three bytes each: an opcode, an
//! argument and the trailer `0x55`. This crate provides:
//! - **Encoding**: one pure function per operation (on/off, white, night mode,
//!   brightness, color, disco) returning a [`Command`]
//! - **Color mapping**: RGB, float RGB or hex colors to the bridge's hue byte
//! - **Transport**: paced delivery over UDP, blocking or async
//!
//! ## Zones
//!
//! Bulbs are paired into four zones; [`Zone::All`] addresses all of them. On, off,
//! white and night mode take a zone and also *select* it on the bridge. Brightness,
//! color and disco commands have no zone and act on whatever zone was selected
//! last, so send a selecting command first (or wrap with [`command::in_zone`]).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use milight::{command, transport, Zone};
//!
//! # fn main() -> milight::Result<()> {
//! transport::send(
//!     "10.10.10.104:8899",
//!     &[
//!         command::turn_on(Zone::All)?,
//!         command::set_color_rgb(255, 128, 0),
//!         command::set_brightness(0.4),
//!     ],
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`command`] - Command encoder
//! - [`color`] - Hue-code mapping
//! - [`transport`] - Paced UDP delivery
//! - [`protocol`] - Wire format and opcode tables
//! - [`zone`] - Zone addressing
//! - [`config`] - Bridge settings
//! - [`error`] - Error types

/// Hue-code mapping
pub mod color;
/// Command encoder
pub mod command;
/// Bridge settings
pub mod config;
/// Error types
pub mod error;
/// Wire format and opcode tables
pub mod protocol;
/// Paced UDP delivery
pub mod transport;
/// Zone addressing
pub mod zone;

// Re-exports
pub use command::Command;
pub use config::BridgeConfig;
pub use error::{MilightError, NetworkError, Result};
pub use protocol::{Packet, DEFAULT_PORT, TRAILER};
pub use transport::{send, send_async, PacketSink, Transport, PACKET_INTERVAL};
pub use zone::Zone;
