//! Command-line arguments

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use milight::{color, command, BridgeConfig, Command, Zone};

#[derive(Parser, Debug)]
#[command(name = "milight", version, about = "Control MiLight bulbs through a WiFi bridge")]
pub struct Cli {
    /// Bridge address, HOST or HOST:PORT
    #[arg(short, long)]
    pub bridge: Option<String>,

    /// TOML file with bridge settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the pause between packets
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Action {
    /// Turn lights on
    On {
        #[arg(default_value = "all")]
        zone: Zone,
    },
    /// Turn lights off
    Off {
        #[arg(default_value = "all")]
        zone: Zone,
    },
    /// Switch to full white
    White {
        #[arg(default_value = "all")]
        zone: Zone,
    },
    /// Switch to night mode
    Night {
        #[arg(default_value = "all")]
        zone: Zone,
    },
    /// Set brightness (0.0-1.0) of the selected zone
    Brightness {
        level: f64,
        /// Select this zone first
        #[arg(short, long)]
        zone: Option<Zone>,
    },
    /// Set color (#RRGGBB or R,G,B) of the selected zone
    Color {
        color: ColorArg,
        /// Select this zone first
        #[arg(short, long)]
        zone: Option<Zone>,
    },
    /// Start disco mode, or cycle to the next one
    Disco,
    /// Speed up disco mode
    DiscoFaster,
    /// Slow down disco mode
    DiscoSlower,
}

/// Color given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorArg {
    Hex(String),
    Rgb(u8, u8, u8),
}

impl FromStr for ColorArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.starts_with('#') {
            color::parse_hex(s).map_err(|e| e.to_string())?;
            return Ok(ColorArg::Hex(s.to_string()));
        }

        let channels: Vec<u8> = s
            .split(',')
            .map(|c| c.trim().parse::<u8>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| format!("invalid channel in {:?}: {}", s, e))?;
        match channels.as_slice() {
            [r, g, b] => Ok(ColorArg::Rgb(*r, *g, *b)),
            _ => Err(format!("expected #RRGGBB or R,G,B, got {:?}", s)),
        }
    }
}

impl Action {
    /// Encode into bridge pairs
    pub fn to_command(&self) -> milight::Result<Command> {
        let (cmd, zone) = match self {
            Action::On { zone } => return command::turn_on(*zone),
            Action::Off { zone } => return command::turn_off(*zone),
            Action::White { zone } => return command::set_white(*zone),
            Action::Night { zone } => return command::set_night_mode(*zone),
            Action::Brightness { level, zone } => (command::set_brightness(*level), *zone),
            Action::Color { color, zone } => {
                let cmd = match color {
                    ColorArg::Hex(hex) => command::set_color_hex(hex)?,
                    ColorArg::Rgb(r, g, b) => command::set_color_rgb(*r, *g, *b),
                };
                (cmd, *zone)
            }
            Action::Disco => (command::disco_mode_on(), None),
            Action::DiscoFaster => (command::disco_mode_faster(), None),
            Action::DiscoSlower => (command::disco_mode_slower(), None),
        };

        match zone {
            Some(zone) => command::in_zone(zone, cmd),
            None => Ok(cmd),
        }
    }
}

impl Cli {
    /// Settings from `--config`, then overridden by flags
    pub fn bridge_config(&self) -> Result<BridgeConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {:?}", path))?;
                toml::from_str(&text)
                    .with_context(|| format!("Failed to parse config file: {:?}", path))?
            }
            None => BridgeConfig::default(),
        };

        if let Some(bridge) = &self.bridge {
            config.host = bridge.clone();
        }
        if let Some(ms) = self.interval_ms {
            config.packet_interval_ms = ms;
        }
        Ok(config)
    }
}
