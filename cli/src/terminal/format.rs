use crate::terminal::colors;
use colored::*;
use std::net::{IpAddr, Ipv6Addr};

pub fn ipv6_to_type_str(ipv6_addr: &Ipv6Addr) -> &'static str {
    if is_global_unicast(ipv6_addr) {
        return "GUA";
    }
    if ipv6_addr.is_unique_local() {
        return "ULA";
    }
    if ipv6_addr.is_unicast_link_local() {
        return "LLA";
    }
    "IPv6"
}

fn is_global_unicast(ipv6_addr: &Ipv6Addr) -> bool {
    let first_byte = ipv6_addr.octets()[0];
    (0x20..=0x3F).contains(&first_byte)
}

/// Short label for an address: `IPv4`, or the IPv6 scope.
pub fn ip_label(ip: &IpAddr) -> &'static str {
    match ip {
        IpAddr::V4(_) => "IPv4",
        IpAddr::V6(ipv6_addr) => ipv6_to_type_str(ipv6_addr),
    }
}

/// Colours an address string by family, falling back to plain text for
/// anything that does not parse.
pub fn colored_addr(addr: &str) -> ColoredString {
    match addr.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => addr.color(colors::IPV4_ADDR),
        Ok(IpAddr::V6(_)) => addr.color(colors::IPV6_ADDR),
        Err(_) => addr.color(colors::TEXT_DEFAULT),
    }
}

/// Pairs every address with its label for [`crate::terminal::print::as_tree_one_level`].
pub fn ips_to_detail(ips: &[IpAddr]) -> Vec<(String, ColoredString)> {
    ips.iter()
        .map(|ip| (ip_label(ip).to_string(), colored_addr(&ip.to_string())))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
