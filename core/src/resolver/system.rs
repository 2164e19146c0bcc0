use std::io;
use std::net::{IpAddr, ToSocketAddrs};

use super::SystemResolver;

/// The platform resolver (`getnameinfo` / `getaddrinfo`), which consults
/// `/etc/hosts` before DNS.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibcResolver;

impl SystemResolver for LibcResolver {
    fn lookup_addr(&self, addr: &IpAddr) -> io::Result<String> {
        let hostname: String = dns_lookup::lookup_addr(addr)?;
        // getnameinfo hands the numeric form back when no name exists.
        if hostname == addr.to_string() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no hostname for {addr}"),
            ));
        }
        Ok(hostname)
    }

    fn lookup_host(&self, hostname: &str) -> io::Result<Vec<IpAddr>> {
        let addrs = (hostname, 0).to_socket_addrs()?;
        Ok(addrs.map(|sock_addr| sock_addr.ip()).collect())
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
