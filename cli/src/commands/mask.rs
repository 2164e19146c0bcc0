use iputil_common::config::Config;
use iputil_core::mask::{self, Netmask};

use crate::terminal::{format, print};

pub fn from_hex(hex: &str, cfg: &Config) -> anyhow::Result<()> {
    let dotted: String = mask::hex_to_mask(hex)?;
    let bits: Option<u8> = mask::hex_to_bits(hex)?;
    print::header("hex netmask", cfg.quiet);
    print::aligned_line("Netmask", dotted, cfg.quiet);
    print_bits(bits, cfg);
    Ok(())
}

pub fn to_bits(netmask: &Netmask, cfg: &Config) -> anyhow::Result<()> {
    let bits: Option<u8> = mask::mask_to_bits(netmask)?;
    print_bits(bits, cfg);
    Ok(())
}

pub fn from_bits(bits: u8, cfg: &Config) -> anyhow::Result<()> {
    let dotted: String = mask::bits_to_mask(bits)?;
    let decimal: u32 = mask::bits_to_decimal_mask(bits)?;
    print::header("netmask", cfg.quiet);
    print::aligned_line("Netmask", dotted, cfg.quiet);
    print::aligned_line("Decimal", decimal.to_string(), cfg.quiet);
    Ok(())
}

pub fn network(address: &str, netmask: &Netmask, cfg: &Config) -> anyhow::Result<()> {
    let network: String = mask::network_address_string(address, netmask)?;
    let decimal: u128 = mask::network_address(address, netmask)?;
    print::header("network", cfg.quiet);
    print::aligned_line("Network", format::colored_addr(&network), cfg.quiet);
    print::aligned_line("Decimal", decimal.to_string(), cfg.quiet);
    Ok(())
}

fn print_bits(bits: Option<u8>, cfg: &Config) {
    match bits {
        Some(bits) => print::aligned_line("Bits", bits.to_string(), cfg.quiet),
        None => tracing::warn!("Mask is not a contiguous run of ones"),
    }
}
