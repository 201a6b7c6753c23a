use milight::color::{rgb_int_to_device_byte, rgb_to_device_byte};
use milight::command::{self, brightness_byte};
use milight::{Command, MilightError, Zone};
use proptest::prelude::*;

const ON_TABLE: [[u8; 2]; 5] = [[0x42, 0], [0x45, 0], [0x47, 0], [0x49, 0], [0x4B, 0]];
const OFF_TABLE: [[u8; 2]; 5] = [[0x41, 0], [0x46, 0], [0x48, 0], [0x4A, 0], [0x4C, 0]];
const NIGHT_TABLE: [[u8; 2]; 5] = [[0xC1, 0], [0xC6, 0], [0xC8, 0], [0xCA, 0], [0xCC, 0]];
const WHITE_TABLE: [[u8; 2]; 5] = [[0xC2, 0], [0xC5, 0], [0xC7, 0], [0xC9, 0], [0xCB, 0]];

#[test]
fn test_zone_tables_match_wire_protocol() {
    for index in 0u8..5 {
        let i = index as usize;
        assert_eq!(command::turn_on(index).unwrap().pairs(), &[ON_TABLE[i]]);
        assert_eq!(command::turn_off(index).unwrap().pairs(), &[OFF_TABLE[i]]);
        assert_eq!(
            command::set_night_mode(index).unwrap().pairs(),
            &[NIGHT_TABLE[i], NIGHT_TABLE[i]]
        );
        assert_eq!(
            command::set_white(index).unwrap().pairs(),
            &[WHITE_TABLE[i], WHITE_TABLE[i]]
        );
        assert_ne!(
            command::turn_on(index).unwrap(),
            command::turn_off(index).unwrap()
        );
    }
}

#[test]
fn test_encoding_is_stable() {
    for zone in Zone::ALL_ZONES {
        assert_eq!(command::turn_on(zone).unwrap(), command::turn_on(zone).unwrap());
    }
}

#[test]
fn test_every_command_has_even_length() {
    let commands: Vec<Command> = vec![
        command::turn_on(Zone::All).unwrap(),
        command::set_white(Zone::Zone3).unwrap(),
        command::set_brightness(0.7),
        command::set_color_rgb(12, 200, 99),
        command::disco_mode_on(),
    ];
    for cmd in &commands {
        assert_eq!(cmd.to_bytes().len() % 2, 0);
        assert_eq!(cmd.to_bytes().len(), cmd.packets().count() * 2);
    }
}

#[test]
fn test_red_scenario() {
    let cmd = command::set_color_rgb(255, 0, 0);
    assert_eq!(cmd.to_bytes(), vec![0x40, 0xB0]);
    assert_eq!(cmd, command::set_color_hex("#FF0000").unwrap());
}

#[test]
fn test_out_of_range_zone_for_every_zoned_operation() {
    for bad in [5i64, 6, 255, -1] {
        assert!(matches!(command::turn_on(bad), Err(MilightError::InvalidZone(z)) if z == bad));
        assert!(matches!(command::turn_off(bad), Err(MilightError::InvalidZone(_))));
        assert!(matches!(command::set_white(bad), Err(MilightError::InvalidZone(_))));
        assert!(matches!(command::set_night_mode(bad), Err(MilightError::InvalidZone(_))));
    }
}

proptest! {
    #[test]
    fn brightness_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(brightness_byte(lo) <= brightness_byte(hi));
    }

    #[test]
    fn brightness_stays_in_device_range(level in -10.0f64..10.0) {
        let value = brightness_byte(level);
        prop_assert!((0x02..=0x1B).contains(&value));
    }

    #[test]
    fn hue_code_ignores_uniform_scaling(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255, k in 0.05f64..1.0) {
        let (r, g, b) = (f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0);
        let max = r.max(g).max(b);
        prop_assume!(max > 0.0);
        // Normalize so the brightest channel is 1, then scale all three by k
        let full = rgb_to_device_byte(r / max, g / max, b / max);
        let scaled = rgb_to_device_byte(r / max * k, g / max * k, b / max * k);
        // Float noise may cross a truncation step, including the 255/0 wrap
        let distance = full.wrapping_sub(scaled).min(scaled.wrapping_sub(full));
        prop_assert!(distance <= 1, "full {} scaled {}", full, scaled);
    }

    #[test]
    fn hex_agrees_with_int(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let hex = format!("#{:02X}{:02X}{:02X}", r, g, b);
        prop_assert_eq!(
            command::set_color_hex(&hex).unwrap(),
            command::set_color_rgb(r, g, b)
        );
    }
}

#[test]
fn test_scaled_red_matches_full_red() {
    assert_eq!(rgb_int_to_device_byte(255, 0, 0), rgb_int_to_device_byte(128, 0, 0));
    assert_eq!(rgb_int_to_device_byte(0, 0, 255), rgb_int_to_device_byte(0, 0, 64));
}
