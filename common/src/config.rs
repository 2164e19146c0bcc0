use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DNS_PORT: u16 = 53;
pub const DEFAULT_NAMESERVER: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)), DNS_PORT);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

pub struct Config {
    /// Resolves names through the system resolver, which honours `/etc/hosts`.
    ///
    /// When disabled, reverse lookups send PTR queries straight to `nameserver`.
    pub use_libc_resolver: bool,
    pub nameserver: SocketAddr,
    /// Upper bound for a single direct DNS query.
    pub timeout: Duration,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_libc_resolver: true,
            nameserver: DEFAULT_NAMESERVER,
            timeout: DEFAULT_TIMEOUT,
            quiet: 0,
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
