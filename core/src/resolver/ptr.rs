use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use iputil_common::config::Config;
use iputil_common::error::ResolveError;
use iputil_protocols::dns;
use tokio::net::UdpSocket;
use tracing::{debug, trace};

use super::ReverseLookup;
use crate::codec;

const MAX_RESPONSE_LEN: usize = 4096;

/// Reverse lookups over plain DNS, bypassing the system resolver.
///
/// Names listed only in `/etc/hosts` are not found this way.
#[derive(Debug, Clone, Copy)]
pub struct PtrResolver {
    nameserver: SocketAddr,
    timeout: Duration,
}

impl PtrResolver {
    pub fn new(nameserver: SocketAddr, timeout: Duration) -> Self {
        Self { nameserver, timeout }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.nameserver, cfg.timeout)
    }

    /// Sends one PTR query for `addr` and waits up to the configured
    /// timeout for the matching answer.
    pub async fn lookup_pointer(&self, addr: IpAddr) -> Result<String, ResolveError> {
        let target: String = addr.to_string();
        let id: u16 = rand::random();
        let query: Vec<u8> = dns::create_ptr_packet(&addr, id)
            .map_err(|e| protocol_error(&target, e))?;

        debug!(%addr, nameserver = %self.nameserver, id, "sending PTR query");
        tokio::time::timeout(self.timeout, self.exchange(&target, &query, id))
            .await
            .map_err(|_| ResolveError::Timeout {
                target: target.clone(),
                millis: self.timeout.as_millis(),
            })?
    }

    async fn exchange(&self, target: &str, query: &[u8], id: u16) -> Result<String, ResolveError> {
        let io_error = |e| ResolveError::lookup(target, e);
        let local: IpAddr = match self.nameserver {
            SocketAddr::V4(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            SocketAddr::V6(_) => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        };

        let socket = UdpSocket::bind(SocketAddr::new(local, 0)).await.map_err(io_error)?;
        socket.send_to(query, self.nameserver).await.map_err(io_error)?;

        let mut buffer = vec![0u8; MAX_RESPONSE_LEN];
        loop {
            let (len, from) = socket.recv_from(&mut buffer).await.map_err(io_error)?;
            let packet: &[u8] = &buffer[..len];

            if from != self.nameserver || packet.len() < 2 || packet[..2] != id.to_be_bytes() {
                trace!(%from, "ignoring unrelated datagram");
                continue;
            }

            return dns::get_hostname(packet)
                .map(|(_, hostname)| hostname)
                .map_err(|e| protocol_error(target, e));
        }
    }
}

#[async_trait]
impl ReverseLookup for PtrResolver {
    async fn reverse_lookup(&self, address: &str) -> Result<String, ResolveError> {
        let addr: IpAddr = codec::parse(address)?;
        self.lookup_pointer(addr).await
    }
}

fn protocol_error(target: &str, e: anyhow::Error) -> ResolveError {
    ResolveError::Protocol {
        target: target.to_string(),
        reason: format!("{e:#}"),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
