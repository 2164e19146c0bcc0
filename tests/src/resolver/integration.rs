use std::collections::HashMap;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use iputil_common::config::Config;
use iputil_common::error::ResolveError;
use iputil_common::network::family::AddressFamily;
use iputil_core::resolver::{self, PtrResolver, Resolver, ReverseLookup, SystemResolver};
use iputil_integration_tests::ptr_answer;
use iputil_protocols::dns;
use tokio::net::UdpSocket;

struct HostsFile(HashMap<&'static str, Vec<IpAddr>>);

impl SystemResolver for HostsFile {
    fn lookup_addr(&self, addr: &IpAddr) -> io::Result<String> {
        self.0
            .iter()
            .find(|(_, addrs)| addrs.contains(addr))
            .map(|(name, _)| name.to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "not in hosts file"))
    }

    fn lookup_host(&self, hostname: &str) -> io::Result<Vec<IpAddr>> {
        self.0
            .get(hostname)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "not in hosts file"))
    }
}

fn hosts_file() -> Resolver<HostsFile> {
    let mut hosts = HashMap::new();
    hosts.insert(
        "gateway.lan",
        vec!["fd00::1".parse().unwrap(), "192.168.0.1".parse().unwrap()],
    );
    Resolver::with_system(HostsFile(hosts))
}

/// Replies to a single PTR query with `hostname`, built from the query itself.
async fn one_shot_nameserver(hostname: &'static str) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    tokio::spawn(async move {
        let mut buf = [0u8; 512];
        let (len, peer) = socket.recv_from(&mut buf).await.unwrap();
        let answer = ptr_answer(&buf[..len], hostname);
        socket.send_to(&answer, peer).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn forward_then_reverse() {
    let resolver = hosts_file();
    let address = resolver.forward_lookup("gateway.lan").await.unwrap();
    assert_eq!(address, "192.168.0.1");
    assert_eq!(resolver.reverse_lookup(&address).await.unwrap(), "gateway.lan");
}

#[tokio::test]
async fn preferred_family() {
    let resolver = hosts_file();
    let v6 = resolver
        .preferred_address_async("gateway.lan", Some(AddressFamily::Inet6))
        .await
        .unwrap();
    assert_eq!(v6, "fd00::1");
    assert_eq!(resolver.preferred_address("gateway.lan", None).unwrap(), "fd00::1");
}

#[tokio::test]
async fn unknown_name_fails_the_future() {
    let err = hosts_file().forward_lookup("printer.lan").await.unwrap_err();
    assert!(matches!(err, ResolveError::Lookup { .. }));
}

#[test]
fn list_addresses_reports_families() {
    let families: Vec<AddressFamily> = hosts_file()
        .list_addresses("gateway.lan")
        .map(|info| info.unwrap().family)
        .collect();
    assert_eq!(families, [AddressFamily::Inet6, AddressFamily::Inet]);
}

#[tokio::test]
async fn direct_dns_strategy_from_config() {
    let nameserver = one_shot_nameserver("gateway.lan").await;
    let cfg = Config {
        use_libc_resolver: false,
        nameserver,
        timeout: Duration::from_secs(2),
        ..Default::default()
    };

    let lookup = resolver::reverse_resolver(&cfg);
    assert_eq!(lookup.reverse_lookup("192.168.0.1").await.unwrap(), "gateway.lan");
}

#[tokio::test]
async fn ptr_resolver_sends_reverse_name() {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let nameserver = socket.local_addr().unwrap();
    let resolver = PtrResolver::new(nameserver, Duration::from_millis(200));

    let lookup = tokio::spawn(async move { resolver.reverse_lookup("10.1.2.3").await });

    let mut buf = [0u8; 512];
    let (len, _) = socket.recv_from(&mut buf).await.unwrap();
    let expected = dns::create_ptr_packet(&"10.1.2.3".parse().unwrap(), 0).unwrap();
    assert_eq!(&buf[dns::DNS_HDR_LEN..len], &expected[dns::DNS_HDR_LEN..]);

    let err = lookup.await.unwrap().unwrap_err();
    assert!(matches!(err, ResolveError::Timeout { .. }));
}
