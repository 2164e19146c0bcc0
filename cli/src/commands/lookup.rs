use std::net::IpAddr;

use iputil_common::config::Config;
use iputil_common::network::family::{AddrInfo, AddressFamily};
use iputil_core::resolver::{self, Resolver, ReverseLookup};

use crate::iprint;
use crate::terminal::{format, print};

pub async fn reverse(address: &str, cfg: &Config) -> anyhow::Result<()> {
    let lookup = resolver::reverse_resolver(cfg);
    let hostname: String = lookup.reverse_lookup(address).await?;
    print::aligned_line("Hostname", hostname, cfg.quiet);
    Ok(())
}

pub async fn forward(
    hostname: &str,
    family: Option<AddressFamily>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let resolver = Resolver::new();
    let address: String = match family {
        Some(family) => resolver.preferred_address_async(hostname, Some(family)).await?,
        None => resolver.forward_lookup(hostname).await?,
    };
    print::aligned_line("Address", format::colored_addr(&address), cfg.quiet);
    Ok(())
}

pub async fn list(hostname: &str, cfg: &Config) -> anyhow::Result<()> {
    let resolver = Resolver::new();
    let owned: String = hostname.to_string();
    let infos: Vec<AddrInfo> = tokio::task::spawn_blocking(move || {
        resolver.list_addresses(&owned).collect::<Result<Vec<AddrInfo>, _>>()
    })
    .await??;

    if cfg.quiet > 0 {
        for info in &infos {
            iprint!(&info.address.to_string());
        }
        return Ok(());
    }

    print::header("addresses", cfg.quiet);
    print::tree_head(0, hostname);
    let ips: Vec<IpAddr> = infos.iter().map(|info| info.address).collect();
    print::as_tree_one_level(format::ips_to_detail(&ips));
    iprint!();
    print::print_status(format!("{} addresses", infos.len()));
    Ok(())
}
