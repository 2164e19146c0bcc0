pub mod address;
pub mod lookup;
pub mod mask;
pub mod range;

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use iputil_common::config::{Config, DEFAULT_NAMESERVER, DNS_PORT};
use iputil_common::network::family::AddressFamily;
use iputil_core::mask::Netmask;

#[derive(Parser)]
#[command(name = "iputil")]
#[command(about = "IPv4/IPv6 address math and name lookups.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug output (-vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print bare results only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Send reverse lookups to this nameserver instead of the system resolver
    #[arg(long, global = true, value_name = "ADDR", value_parser = parse_nameserver)]
    pub dns: Option<SocketAddr>,

    /// Timeout for direct DNS queries, in milliseconds
    #[arg(long, global = true, default_value_t = 2000)]
    pub timeout: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate an address (plain or wrapped)
    #[command(alias = "c")]
    Check { address: String },
    /// Convert an address to its integer value
    Int { address: String },
    /// Convert an integer back to an address
    Str { value: u128 },
    /// Replace ':' with '..'
    Wrap { value: String },
    /// Replace '..' with ':'
    Unwrap { value: String },
    /// Build an IPv6 address from 16 decimal octets
    V6bytes {
        #[arg(num_args = 1..)]
        octets: Vec<String>,
    },
    /// Convert a hex netmask (0xffffff00) to dotted form and prefix length
    Hexmask { hex: String },
    /// Convert a netmask to its prefix length
    Bits { mask: Netmask },
    /// Convert a prefix length to a netmask
    Mask { bits: u8 },
    /// Network address of an address under a mask
    #[command(alias = "n")]
    Net { address: String, mask: Netmask },
    /// Expand a range such as 10.0.0.1-5 or 10.0.0.1-10.0.0.9
    #[command(alias = "e")]
    Expand { range: String },
    /// Subnet bounds implied by trailing zero octets
    Bounds { address: String },
    /// Repair a partially typed IPv4 address
    Complete { partial: String },
    /// Reverse lookup of an address
    #[command(alias = "r")]
    Rdns { address: String },
    /// Forward lookup of a hostname
    #[command(alias = "l")]
    Lookup {
        hostname: String,
        /// Preferred address family (4 or 6)
        #[arg(long, short)]
        family: Option<AddressFamily>,
    },
    /// List every address of a hostname
    Addrs { hostname: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            use_libc_resolver: self.dns.is_none(),
            nameserver: self.dns.unwrap_or(DEFAULT_NAMESERVER),
            timeout: Duration::from_millis(self.timeout),
            quiet: self.quiet,
        }
    }
}

/// Accepts `1.1.1.1`, `1.1.1.1:5353`, `::1` or `[::1]:5353`.
fn parse_nameserver(s: &str) -> Result<SocketAddr, String> {
    if let Ok(sock_addr) = s.parse::<SocketAddr>() {
        return Ok(sock_addr);
    }
    s.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DNS_PORT))
        .map_err(|_| format!("invalid nameserver: {s}"))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
