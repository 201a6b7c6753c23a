//! Bridge wire format and opcode tables
//!
//! Every datagram sent to the bridge is exactly three bytes:
//! - 1 byte: opcode
//! - 1 byte: argument (0x00 for commands without a value)
//! - 1 byte: trailer, always 0x55
//!
//! The bridge never answers, so there is nothing to decode.

use std::fmt;

use crate::zone::Zone;

/// Default UDP port of the bridge firmware
pub const DEFAULT_PORT: u16 = 8899;

/// Fixed final byte of every packet
pub const TRAILER: u8 = 0x55;

/// An (opcode, argument) pair
pub type Pair = [u8; 2];

/// Per-zone pairs, indexed by [`Zone::index`]
pub type ZoneTable = [Pair; 5];

pub const ON: ZoneTable = [[0x42, 0x00], [0x45, 0x00], [0x47, 0x00], [0x49, 0x00], [0x4B, 0x00]];
pub const OFF: ZoneTable = [[0x41, 0x00], [0x46, 0x00], [0x48, 0x00], [0x4A, 0x00], [0x4C, 0x00]];
pub const NIGHT: ZoneTable = [[0xC1, 0x00], [0xC6, 0x00], [0xC8, 0x00], [0xCA, 0x00], [0xCC, 0x00]];
pub const WHITE: ZoneTable = [[0xC2, 0x00], [0xC5, 0x00], [0xC7, 0x00], [0xC9, 0x00], [0xCB, 0x00]];

pub const DISCO_MODE_ON: Pair = [0x4D, 0x00];
pub const DISCO_MODE_FASTER: Pair = [0x44, 0x00];
pub const DISCO_MODE_SLOWER: Pair = [0x43, 0x00];

pub const BRIGHTNESS_PREFIX: u8 = 0x4E;
pub const BRIGHTNESS_MIN: u8 = 0x02;
pub const BRIGHTNESS_MAX: u8 = 0x1B;

pub const COLOR_PREFIX: u8 = 0x40;

/// Look up the pair for `zone` in one of the zone tables
pub fn zone_pair(table: &ZoneTable, zone: Zone) -> Pair {
    table[zone.index()]
}

/// One datagram on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Packet {
    pub opcode: u8,
    pub argument: u8,
}

impl Packet {
    pub const LEN: usize = 3;

    pub const fn new(opcode: u8, argument: u8) -> Self {
        Self { opcode, argument }
    }

    /// Serialize with the trailer appended
    pub const fn to_bytes(self) -> [u8; Self::LEN] {
        [self.opcode, self.argument, TRAILER]
    }
}

impl From<Pair> for Packet {
    fn from([opcode, argument]: Pair) -> Self {
        Self::new(opcode, argument)
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X} {:02X} {:02X}", self.opcode, self.argument, TRAILER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packet_structure() {
        let packet = Packet::new(0x4E, 0x04);
        assert_eq!(packet.to_bytes(), [0x4E, 0x04, 0x55]);
        assert_eq!(packet.to_string(), "4E 04 55");
    }

    #[test]
    fn test_tables_have_distinct_opcodes() {
        let mut opcodes: Vec<u8> = [ON, OFF, NIGHT, WHITE]
            .iter()
            .flat_map(|table| table.iter().map(|pair| pair[0]))
            .collect();
        opcodes.extend([DISCO_MODE_ON[0], DISCO_MODE_FASTER[0], DISCO_MODE_SLOWER[0]]);
        opcodes.extend([BRIGHTNESS_PREFIX, COLOR_PREFIX]);

        let total = opcodes.len();
        opcodes.sort_unstable();
        opcodes.dedup();
        assert_eq!(opcodes.len(), total);
    }

    #[test]
    fn test_zone_pair_uses_row_zero_for_all() {
        assert_eq!(zone_pair(&ON, Zone::All), [0x42, 0x00]);
        assert_eq!(zone_pair(&WHITE, Zone::Zone4), [0xCB, 0x00]);
    }
}
