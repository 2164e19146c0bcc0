//! # Error Types
//!
//! Typed failures surfaced by the address math and the resolver facade.
//! Pure functions return [`AddressError`]; lookups return [`ResolveError`].

use std::io;
use thiserror::Error;

/// A string could not be interpreted as an address, range or netmask.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The input is not a valid IPv4 or IPv6 presentation string.
    #[error("{0} is an invalid address")]
    InvalidAddress(String),
    /// The range expression has too many `-` separated components or
    /// spans past the end of the address space.
    #[error("{0} is an invalid IP range.")]
    InvalidRange(String),
    /// The right hand side of a range is neither a count nor an address.
    #[error("{0} is an invalid end of IP range.")]
    InvalidRangeEnd(String),
    /// The netmask cannot be turned into a prefix length.
    #[error("{0} is an invalid netmask")]
    InvalidNetmask(String),
}

/// A name or address lookup did not produce a usable result.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    InvalidAddress(#[from] AddressError),
    /// The system resolver call failed.
    #[error("lookup of {target} failed: {source}")]
    Lookup {
        target: String,
        #[source]
        source: io::Error,
    },
    #[error("no address found for {0}")]
    NoAddressFound(String),
    #[error("no answer for {target} within {millis}ms")]
    Timeout { target: String, millis: u128 },
    /// The nameserver answered with something that is not a PTR record.
    #[error("bad answer for {target}: {reason}")]
    Protocol { target: String, reason: String },
    /// The blocking worker panicked or was cancelled.
    #[error("resolver worker failed: {0}")]
    Worker(String),
}

impl ResolveError {
    pub fn lookup(target: impl Into<String>, source: io::Error) -> Self {
        Self::Lookup {
            target: target.into(),
            source,
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
