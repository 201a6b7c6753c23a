//! Error types for encoding and sending bridge commands
use std::convert::Infallible;
use std::io;

use thiserror::Error;

/// Bridge command errors
#[derive(Error, Debug)]
pub enum MilightError {
    /// Zone index outside the five table rows
    #[error("Invalid zone: {0} (must be 0-4)")]
    InvalidZone(i64),

    /// Malformed hex color string
    #[error("Invalid color format: {0:?} (expected #RRGGBB or #RGB)")]
    InvalidColorFormat(String),

    /// Bridge configuration rejected
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Address resolution, socket or write failure
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
}

/// Failures while talking to the bridge over UDP
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The address string could not be resolved
    #[error("failed to resolve bridge address {address:?}: {source}")]
    Resolve {
        address: String,
        #[source]
        source: io::Error,
    },

    /// Resolution succeeded but produced no socket address
    #[error("bridge address {0:?} resolved to nothing")]
    NoAddress(String),

    /// The local socket could not be opened or connected
    #[error("failed to open socket: {0}")]
    Socket(#[source] io::Error),

    /// A datagram write failed; `sent` packets had already gone out
    #[error("write failed after {sent} packet(s): {source}")]
    Write {
        sent: usize,
        #[source]
        source: io::Error,
    },
}

impl MilightError {
    /// True for resolution, socket and write failures
    pub fn is_network(&self) -> bool {
        matches!(self, MilightError::Network(_))
    }

    /// Packets already on the wire when a send was aborted.
    ///
    /// Failures that happen before the first write report zero.
    pub fn packets_sent(&self) -> usize {
        match self {
            MilightError::Network(NetworkError::Write { sent, .. }) => *sent,
            _ => 0,
        }
    }
}

// Lets `Zone` itself satisfy the `TryInto<Zone>` bound used by the encoder.
impl From<Infallible> for MilightError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, MilightError>;
