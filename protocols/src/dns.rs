//! # DNS PTR Messages
//!
//! Builds reverse-lookup queries and pulls the hostname out of the answer.
//! Only what a single-question PTR exchange needs is implemented.

use std::net::IpAddr;

use anyhow::{Context, bail, ensure};
use pnet::packet::dns::{DnsClass, DnsPacket, DnsQuery, DnsTypes, MutableDnsPacket, Opcode};

pub const DNS_HDR_LEN: usize = 12;

const POINTER_MASK: u8 = 0xC0;
const MAX_POINTER_JUMPS: usize = 16;

/// Returns the reverse-mapping name for `ip_addr`.
///
/// `10.1.2.3` becomes `3.2.1.10.in-addr.arpa`; IPv6 addresses are spelled out
/// nibble by nibble under `ip6.arpa`.
pub fn reverse_pointer_name(ip_addr: &IpAddr) -> String {
    match ip_addr {
        IpAddr::V4(v4) => {
            let [a, b, c, d] = v4.octets();
            format!("{d}.{c}.{b}.{a}.in-addr.arpa")
        }
        IpAddr::V6(v6) => {
            let mut name = String::with_capacity(72);
            for byte in v6.octets().iter().rev() {
                name.push_str(&format!("{:x}.{:x}.", byte & 0x0F, byte >> 4));
            }
            name.push_str("ip6.arpa");
            name
        }
    }
}

/// Builds a recursive, single-question PTR query for `ip_addr`.
///
/// The buffer starts zeroed, so only the non-zero header fields are set.
pub fn create_ptr_packet(ip_addr: &IpAddr, id: u16) -> anyhow::Result<Vec<u8>> {
    let query: DnsQuery = create_ptr_query(ip_addr);
    let mut buffer: Vec<u8> = vec![0u8; DNS_HDR_LEN];

    let mut header: MutableDnsPacket =
        MutableDnsPacket::new(&mut buffer).context("creating dns header")?;
    header.set_id(id);
    header.set_opcode(Opcode::StandardQuery);
    header.set_is_recursion_desirable(1);
    header.set_query_count(1);

    buffer.extend_from_slice(&query.qname);
    buffer.extend_from_slice(&query.qtype.0.to_be_bytes());
    buffer.extend_from_slice(&query.qclass.0.to_be_bytes());

    Ok(buffer)
}

/// Extracts the transaction id and the first PTR target from a response.
pub fn get_hostname(payload: &[u8]) -> anyhow::Result<(u16, String)> {
    let dns = DnsPacket::new(payload).context("Failed to parse DNS packet")?;
    let transaction_id: u16 = dns.get_id();
    ensure!(payload[2] & 0x80 != 0, "DNS packet {transaction_id} is not a response");

    let rcode: u8 = payload[3] & 0x0F;
    ensure!(rcode == 0, "nameserver answered with rcode {rcode}");

    let query_count: u16 = u16::from_be_bytes([payload[4], payload[5]]);
    let answer_count: u16 = u16::from_be_bytes([payload[6], payload[7]]);

    let mut cursor: usize = DNS_HDR_LEN;
    for _ in 0..query_count {
        let (_, next) = read_name(payload, cursor)?;
        cursor = next + 4;
    }

    for _ in 0..answer_count {
        let (_, next) = read_name(payload, cursor)?;
        cursor = next;
        ensure!(cursor + 10 <= payload.len(), "truncated resource record");

        let rtype: u16 = u16::from_be_bytes([payload[cursor], payload[cursor + 1]]);
        let data_len: usize =
            u16::from_be_bytes([payload[cursor + 8], payload[cursor + 9]]) as usize;
        let data_start: usize = cursor + 10;
        ensure!(data_start + data_len <= payload.len(), "truncated record data");

        if rtype == DnsTypes::PTR.0 {
            let (hostname, _) = read_name(payload, data_start)?;
            return Ok((transaction_id, hostname));
        }
        cursor = data_start + data_len;
    }

    bail!("No PTR record found")
}

fn create_ptr_query(ip_addr: &IpAddr) -> DnsQuery {
    let ptr_string: String = reverse_pointer_name(ip_addr);
    DnsQuery {
        qname: encode_dns_name(&ptr_string),
        qtype: DnsTypes::PTR,
        qclass: DnsClass(1),
        payload: Vec::new(),
    }
}

fn encode_dns_name(name: &str) -> Vec<u8> {
    let mut encoded: Vec<u8> = Vec::new();
    for label in name.split('.') {
        if label.is_empty() {
            continue;
        }
        encoded.push(label.len() as u8);
        encoded.extend_from_slice(label.as_bytes());
    }
    encoded.push(0);
    encoded
}

/// Decodes the (possibly compressed) name starting at `start`.
///
/// Returns the dotted name and the offset just past it in the original
/// record, which for a compressed name is right after the first pointer.
fn read_name(packet: &[u8], start: usize) -> anyhow::Result<(String, usize)> {
    let mut labels: Vec<&str> = Vec::new();
    let mut cursor: usize = start;
    let mut resume: Option<usize> = None;
    let mut jumps: usize = 0;

    loop {
        let len_byte: u8 = *packet.get(cursor).context("name runs past end of packet")?;

        if len_byte & POINTER_MASK == POINTER_MASK {
            let low: u8 = *packet.get(cursor + 1).context("truncated name pointer")?;
            jumps += 1;
            ensure!(jumps <= MAX_POINTER_JUMPS, "name compression loop");
            resume.get_or_insert(cursor + 2);
            cursor = (((len_byte & !POINTER_MASK) as usize) << 8) | low as usize;
            continue;
        }

        let len: usize = len_byte as usize;
        cursor += 1;
        if len == 0 {
            break;
        }
        let label_bytes: &[u8] = packet
            .get(cursor..cursor + len)
            .context("label runs past end of packet")?;
        labels.push(std::str::from_utf8(label_bytes).context("label is not utf-8")?);
        cursor += len;
    }

    Ok((labels.join("."), resume.unwrap_or(cursor)))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
