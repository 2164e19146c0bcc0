//! # Address Codec
//!
//! Conversions between presentation strings, integers and the wrapped form
//! used where `:` is not allowed in identifiers.
//!
//! Integers are always `u128`. IPv4 values occupy the low 32 bits, which is
//! why [`to_canonical_string`] renders anything that fits in 32 bits as a
//! dotted-quad.

use std::borrow::Cow;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use iputil_common::error::AddressError;

/// Stand-in for `:` in wrapped addresses.
pub const IP_DELIM: &str = "..";

/// Replaces every `:` with [`IP_DELIM`].
pub fn wrap(ip: &str) -> Cow<'_, str> {
    if ip.contains(':') {
        Cow::Owned(ip.replace(':', IP_DELIM))
    } else {
        Cow::Borrowed(ip)
    }
}

/// Replaces every [`IP_DELIM`] with `:`.
pub fn unwrap(ip: &str) -> Cow<'_, str> {
    if ip.contains(IP_DELIM) {
        Cow::Owned(ip.replace(IP_DELIM, ":"))
    } else {
        Cow::Borrowed(ip)
    }
}

/// Parses a (possibly wrapped) address.
pub fn parse(ip: &str) -> Result<IpAddr, AddressError> {
    unwrap(ip)
        .parse::<IpAddr>()
        .map_err(|_| AddressError::InvalidAddress(ip.to_string()))
}

/// True if `ip`, once unwrapped, is a valid IPv4 or IPv6 address.
pub fn is_address(ip: &str) -> bool {
    parse(ip).is_ok()
}

/// Returns `ip` unchanged if it is a valid address.
pub fn check_ip(ip: &str) -> Result<&str, AddressError> {
    parse(ip).map(|_| ip)
}

pub fn to_integer(ip: &str) -> Result<u128, AddressError> {
    parse(ip).map(|addr| addr_to_u128(&addr))
}

pub fn addr_to_u128(addr: &IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u32::from(*v4) as u128,
        IpAddr::V6(v6) => u128::from(*v6),
    }
}

/// Maps an integer back to an address, IPv4 whenever the value fits.
pub fn u128_to_addr(value: u128) -> IpAddr {
    match u32::try_from(value) {
        Ok(v4) => IpAddr::V4(Ipv4Addr::from(v4)),
        Err(_) => IpAddr::V6(Ipv6Addr::from(value)),
    }
}

pub fn to_canonical_string(value: u128) -> String {
    u128_to_addr(value).to_string()
}

/// Strips a CIDR suffix: `1.1.1.1/24` becomes `1.1.1.1`.
pub fn ip_from_ip_mask(ip_mask: &str) -> &str {
    ip_mask.split('/').next().unwrap_or(ip_mask)
}

/// Turns the 16 decimal octets of an SNMP table index into a canonical
/// IPv6 address.
///
/// Returns an empty string if any octet is not a number or the octets do
/// not make up an address.
pub fn bytes_to_canonical_ipv6<S: AsRef<str>>(bytes: &[S]) -> String {
    let octets: Option<Vec<u8>> = bytes
        .iter()
        .map(|byte| byte.as_ref().trim().parse::<u8>().ok())
        .collect();

    let Some(octets) = octets else {
        return String::new();
    };

    let hextets: Vec<u16> = octets
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();

    match <[u16; 8]>::try_from(hextets) {
        Ok(segments) => Ipv6Addr::from(segments).to_string(),
        Err(_) => String::new(),
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
