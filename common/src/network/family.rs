//! # Address Families
//!
//! The AF_INET / AF_INET6 distinction reported by the system resolver,
//! and the address/family pairs it hands back.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    /// IPv4 (AF_INET).
    Inet,
    /// IPv6 (AF_INET6).
    Inet6,
}

impl AddressFamily {
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => AddressFamily::Inet,
            IpAddr::V6(_) => AddressFamily::Inet6,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Inet => write!(f, "IPv4"),
            AddressFamily::Inet6 => write!(f, "IPv6"),
        }
    }
}

impl FromStr for AddressFamily {
    type Err = String;

    /// Accepts `4`, `6`, `ipv4`, `ipv6`, `inet` and `inet6` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "4" | "ipv4" | "inet" | "af_inet" => Ok(AddressFamily::Inet),
            "6" | "ipv6" | "inet6" | "af_inet6" => Ok(AddressFamily::Inet6),
            _ => Err(format!("unknown address family: {s}")),
        }
    }
}

/// One answer of a multi-address lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddrInfo {
    pub address: IpAddr,
    pub family: AddressFamily,
}

impl From<IpAddr> for AddrInfo {
    fn from(address: IpAddr) -> Self {
        Self {
            address,
            family: AddressFamily::of(&address),
        }
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
