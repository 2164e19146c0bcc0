//! # Netmask Math
//!
//! Conversions between the three ways a netmask shows up in device data:
//! a prefix length (`24`), a dotted-quad (`255.255.255.0`) and an SNMP hex
//! string (`0xffffff00`).
//!
//! A few of these conversions are lenient on purpose, since existing data
//! depends on it:
//! * [`hex_to_mask`] maps any input without an `x` to `255.255.255.255`.
//! * [`mask_to_bits`] maps any dotted mask starting with `0` to 0 bits.
//! * [`mask_to_bits`] returns `None` rather than an error for
//!   non-contiguous masks.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use iputil_common::error::AddressError;
use pnet::ipnetwork::IpNetwork;

use crate::codec;

/// Maximum prefix length of an IPv4 mask.
pub const MAX_LENGTH: u8 = 32;

const ALL_ONES: &str = "255.255.255.255";

/// A netmask as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Netmask {
    /// Prefix length, e.g. `24`.
    Bits(u8),
    /// Dotted-quad, e.g. `255.255.255.0`.
    Dotted(String),
}

impl From<u8> for Netmask {
    fn from(bits: u8) -> Self {
        Netmask::Bits(bits)
    }
}

impl FromStr for Netmask {
    type Err = AddressError;

    /// Anything containing a `.` is a dotted mask, everything else must be
    /// a prefix length.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains('.') {
            return Ok(Netmask::Dotted(s.to_string()));
        }
        s.parse::<u8>()
            .map(Netmask::Bits)
            .map_err(|_| AddressError::InvalidNetmask(s.to_string()))
    }
}

impl fmt::Display for Netmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Netmask::Bits(bits) => write!(f, "{bits}"),
            Netmask::Dotted(mask) => write!(f, "{mask}"),
        }
    }
}

/// Converts a hex netmask (`0xffffff00`) to a dotted string (`255.255.255.0`).
///
/// Input without an `x` is taken to mean "no mask" and yields
/// `255.255.255.255`.
pub fn hex_to_mask(hex: &str) -> Result<String, AddressError> {
    let Some((_, digits)) = hex.split_once('x') else {
        return Ok(ALL_ONES.to_string());
    };
    let digits = digits.split('x').next().unwrap_or_default();
    let invalid = || AddressError::InvalidNetmask(hex.to_string());

    if digits.is_empty() || digits.len() % 2 != 0 || !digits.is_ascii() {
        return Err(invalid());
    }

    let octets: Vec<String> = (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|octet| octet.to_string())
                .map_err(|_| invalid())
        })
        .collect::<Result<_, _>>()?;

    Ok(octets.join("."))
}

/// Converts a hex netmask straight to its prefix length.
pub fn hex_to_bits(hex: &str) -> Result<Option<u8>, AddressError> {
    let mask = hex_to_mask(hex)?;
    mask_to_bits(&Netmask::Dotted(mask))
}

/// Returns the prefix length of `netmask`.
///
/// `None` means the dotted mask is a valid address but not a contiguous run
/// of high-order ones.
pub fn mask_to_bits(netmask: &Netmask) -> Result<Option<u8>, AddressError> {
    let mask = match netmask {
        Netmask::Bits(bits) => return Ok(Some(*bits)),
        Netmask::Dotted(mask) => mask,
    };

    if mask.starts_with('0') {
        return Ok(Some(0));
    }

    let mask_number: u128 = codec::to_integer(mask)?;
    let bits = (0..MAX_LENGTH)
        .find(|shift| u32::MAX.checked_shl(*shift as u32).map(u128::from) == Some(mask_number))
        .map(|shift| MAX_LENGTH - shift);
    Ok(bits)
}

/// Converts a prefix length to the integer value of its mask.
pub fn bits_to_decimal_mask(bits: u8) -> Result<u32, AddressError> {
    if bits > MAX_LENGTH {
        return Err(AddressError::InvalidNetmask(bits.to_string()));
    }
    let mask = if bits == 0 {
        0
    } else {
        u32::MAX << (MAX_LENGTH - bits)
    };
    Ok(mask)
}

/// Converts a prefix length to a dotted mask: `12` becomes `255.240.0.0`.
pub fn bits_to_mask(bits: u8) -> Result<String, AddressError> {
    bits_to_decimal_mask(bits).map(|mask| Ipv4Addr::from(mask).to_string())
}

/// Returns the network base address of `ip` under `netmask`.
pub fn network_address(ip: &str, netmask: &Netmask) -> Result<u128, AddressError> {
    network(ip, netmask).map(|net| codec::addr_to_u128(&net))
}

/// Like [`network_address`], rendered as a string: `10.12.25.33` under
/// `/24` becomes `10.12.25.0`.
pub fn network_address_string(ip: &str, netmask: &Netmask) -> Result<String, AddressError> {
    network(ip, netmask).map(|net| net.to_string())
}

fn network(ip: &str, netmask: &Netmask) -> Result<IpAddr, AddressError> {
    let addr: IpAddr = codec::parse(ip)?;
    let invalid = || AddressError::InvalidNetmask(netmask.to_string());

    let prefix: u8 = match (netmask, addr) {
        (Netmask::Bits(bits), _) => *bits,
        (Netmask::Dotted(_), IpAddr::V4(_)) => mask_to_bits(netmask)?.ok_or_else(invalid)?,
        (Netmask::Dotted(_), IpAddr::V6(_)) => return Err(invalid()),
    };

    let network = IpNetwork::new(addr, prefix).map_err(|_| invalid())?;
    Ok(network.network())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
