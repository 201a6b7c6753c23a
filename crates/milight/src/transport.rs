//! Paced UDP transport
//!
//! The bridge firmware drops or garbles packets that arrive back to back, so every
//! packet after the first in a call is delayed by a fixed interval (200 ms by
//! default). Sending N packets therefore takes at least `(N - 1) * interval`.
//!
//! Delivery is fire-and-forget: the bridge never acknowledges anything. Each call
//! opens its own socket, which is closed when the call returns.
//!
//! ```rust,no_run
//! use milight::{command, transport, Zone};
//!
//! # fn main() -> milight::Result<()> {
//! transport::send(
//!     "10.10.10.104:8899",
//!     &[command::turn_on(Zone::All)?, command::set_brightness(0.1)],
//! )?;
//! # Ok(())
//! # }
//! ```

use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};
use std::thread;
use std::time::Duration;

use crate::command::Command;
use crate::error::NetworkError;
use crate::protocol::Packet;
use crate::Result;

/// Gap the firmware needs between packets
pub const PACKET_INTERVAL: Duration = Duration::from_millis(200);

/// Something that accepts one datagram at a time
pub trait PacketSink {
    fn send_packet(&mut self, bytes: &[u8; Packet::LEN]) -> io::Result<()>;
}

impl PacketSink for UdpSocket {
    fn send_packet(&mut self, bytes: &[u8; Packet::LEN]) -> io::Result<()> {
        self.send(bytes).map(|_| ())
    }
}

/// Sends encoded commands to a bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transport {
    interval: Duration,
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport {
    /// Transport with the firmware's 200 ms packet interval
    pub fn new() -> Self {
        Self::with_interval(PACKET_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Send `commands` to the bridge at `address` (`host:port`), blocking until the
    /// last packet is written.
    ///
    /// Returns the number of packets sent. Resolution and socket errors are
    /// reported before anything is written; a write error stops the remaining
    /// packets.
    pub fn send(&self, address: &str, commands: &[Command]) -> Result<usize> {
        let target = resolve(address)?;
        let mut socket = UdpSocket::bind(unspecified_for(&target)).map_err(NetworkError::Socket)?;
        socket.connect(target).map_err(NetworkError::Socket)?;

        tracing::info!(
            "Sending {} packet(s) to bridge {}",
            packet_count(commands),
            target
        );
        self.transmit(&mut socket, commands)
    }

    /// Write every packet of `commands` to `sink` in order, pausing before all but
    /// the first
    pub fn transmit<S>(&self, sink: &mut S, commands: &[Command]) -> Result<usize>
    where
        S: PacketSink + ?Sized,
    {
        let mut sent = 0;
        for packet in commands.iter().flat_map(Command::packets) {
            if sent > 0 {
                thread::sleep(self.interval);
            }
            sink.send_packet(&packet.to_bytes())
                .map_err(|source| write_failed(sent, source))?;
            tracing::debug!("Sent packet {}: {}", sent, packet);
            sent += 1;
        }
        Ok(sent)
    }

    /// Async form of [`Transport::send`].
    ///
    /// The pause between packets is a `tokio` sleep, so dropping the future (for
    /// example from a `tokio::select!`) stops further packets right away. Packets
    /// already written cannot be recalled.
    pub async fn send_async(&self, address: &str, commands: &[Command]) -> Result<usize> {
        let target = tokio::net::lookup_host(address)
            .await
            .map_err(|source| resolve_failed(address, source))?
            .next()
            .ok_or_else(|| NetworkError::NoAddress(address.to_string()))?;

        let socket = tokio::net::UdpSocket::bind(unspecified_for(&target))
            .await
            .map_err(NetworkError::Socket)?;
        socket.connect(target).await.map_err(NetworkError::Socket)?;

        tracing::info!(
            "Sending {} packet(s) to bridge {}",
            packet_count(commands),
            target
        );

        let mut sent = 0;
        for packet in commands.iter().flat_map(Command::packets) {
            if sent > 0 {
                tokio::time::sleep(self.interval).await;
            }
            socket
                .send(&packet.to_bytes())
                .await
                .map_err(|source| write_failed(sent, source))?;
            tracing::debug!("Sent packet {}: {}", sent, packet);
            sent += 1;
        }
        Ok(sent)
    }
}

/// Send with the default interval. See [`Transport::send`].
pub fn send(address: &str, commands: &[Command]) -> Result<usize> {
    Transport::new().send(address, commands)
}

/// Send with the default interval. See [`Transport::send_async`].
pub async fn send_async(address: &str, commands: &[Command]) -> Result<usize> {
    Transport::new().send_async(address, commands).await
}

fn resolve(address: &str) -> Result<SocketAddr> {
    let target = address
        .to_socket_addrs()
        .map_err(|source| resolve_failed(address, source))?
        .next()
        .ok_or_else(|| NetworkError::NoAddress(address.to_string()))?;
    Ok(target)
}

fn resolve_failed(address: &str, source: io::Error) -> NetworkError {
    NetworkError::Resolve {
        address: address.to_string(),
        source,
    }
}

fn write_failed(sent: usize, source: io::Error) -> NetworkError {
    tracing::warn!("Bridge write failed after {} packet(s): {}", sent, source);
    NetworkError::Write { sent, source }
}

/// Local wildcard address in the same family as `target`
fn unspecified_for(target: &SocketAddr) -> SocketAddr {
    match target {
        SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
        SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
    }
}

fn packet_count(commands: &[Command]) -> usize {
    commands.iter().map(|c| c.pairs().len()).sum()
}
