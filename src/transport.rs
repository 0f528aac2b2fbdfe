//! OSC-over-UDP transport.
//!
//! Each payload becomes one OSC message `<path> ,sT` (or `,sF`) sent as a
//! single datagram. Delivery is not acknowledged.

use crate::error::TransportError;
use rosc::{OscMessage, OscPacket, OscType};
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

/// Text plus flag sent to the chatbox.
///
/// `immediate` is VRChat's "send now, skip the keyboard" flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingPayload {
    pub text: String,
    pub immediate: bool,
}

impl OutgoingPayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            immediate: true,
        }
    }

    /// Empty text, which clears the remote display.
    pub fn clear() -> Self {
        Self::new(String::new())
    }
}

/// Destination for outgoing payloads.
pub trait Transport {
    fn send(&mut self, payload: &OutgoingPayload) -> Result<(), TransportError>;
}

/// Fire-and-forget OSC client.
#[derive(Debug)]
pub struct OscClient {
    socket: UdpSocket,
    target: SocketAddr,
    address: String,
}

impl OscClient {
    /// Resolves `host:port` and binds an ephemeral local socket.
    pub fn connect(host: &str, port: u16, address: &str) -> Result<Self, TransportError> {
        let target = (host, port)
            .to_socket_addrs()
            .map_err(|_| TransportError::Resolve(format!("{host}:{port}")))?
            .next()
            .ok_or_else(|| TransportError::Resolve(format!("{host}:{port}")))?;

        let bind_addr: SocketAddr = if target.is_ipv4() {
            ([0, 0, 0, 0], 0).into()
        } else {
            ([0u16; 8], 0).into()
        };
        let socket = UdpSocket::bind(bind_addr)?;

        tracing::debug!(%target, address, "OSC client ready");

        Ok(Self {
            socket,
            target,
            address: address.to_string(),
        })
    }
}

impl Transport for OscClient {
    fn send(&mut self, payload: &OutgoingPayload) -> Result<(), TransportError> {
        let datagram = encode_message(&self.address, payload)?;
        self.socket.send_to(&datagram, self.target)?;
        Ok(())
    }
}

/// Encodes a payload as an OSC message with arguments `[text, immediate]`.
pub fn encode_message(address: &str, payload: &OutgoingPayload) -> Result<Vec<u8>, TransportError> {
    let packet = OscPacket::Message(OscMessage {
        addr: address.to_string(),
        args: vec![
            OscType::String(payload.text.clone()),
            OscType::Bool(payload.immediate),
        ],
    });

    rosc::encoder::encode(&packet).map_err(TransportError::Encode)
}
