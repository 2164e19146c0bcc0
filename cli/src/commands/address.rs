use iputil_common::config::Config;
use iputil_core::{codec, completion};

use crate::terminal::{format, print};

pub fn check(address: &str, cfg: &Config) -> anyhow::Result<()> {
    let address: &str = codec::check_ip(address)?;
    let canonical: String = codec::to_canonical_string(codec::to_integer(address)?);
    print::aligned_line("Valid", format::colored_addr(&canonical), cfg.quiet);
    Ok(())
}

pub fn to_integer(address: &str, cfg: &Config) -> anyhow::Result<()> {
    let value: u128 = codec::to_integer(address)?;
    print::aligned_line("Integer", value.to_string(), cfg.quiet);
    Ok(())
}

pub fn to_string(value: u128, cfg: &Config) {
    let address: String = codec::to_canonical_string(value);
    print::aligned_line("Address", format::colored_addr(&address), cfg.quiet);
}

pub fn wrap(value: &str, cfg: &Config) {
    print::aligned_line("Wrapped", codec::wrap(value).into_owned(), cfg.quiet);
}

pub fn unwrap(value: &str, cfg: &Config) {
    let address: String = codec::unwrap(value).into_owned();
    print::aligned_line("Unwrapped", format::colored_addr(&address), cfg.quiet);
}

pub fn from_bytes(octets: &[String], cfg: &Config) -> anyhow::Result<()> {
    let address: String = codec::bytes_to_canonical_ipv6(octets);
    if address.is_empty() {
        anyhow::bail!("{} octets do not form an IPv6 address", octets.len());
    }
    print::aligned_line("IPv6", format::colored_addr(&address), cfg.quiet);
    Ok(())
}

pub fn complete(partial: &str, cfg: &Config) {
    let address: String = completion::complete(partial);
    print::aligned_line("Completed", format::colored_addr(&address), cfg.quiet);
}
