//! Types shared between the `iputil` crates: error enums, runtime
//! configuration and the address-family model used by the resolver.

pub mod config;
pub mod error;
pub mod network;
