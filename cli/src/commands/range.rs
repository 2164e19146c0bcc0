use colored::*;
use iputil_common::config::Config;
use iputil_core::{codec, range};

use crate::iprint;
use crate::terminal::{format, print};

pub fn expand(expr: &str, cfg: &Config) -> anyhow::Result<()> {
    let addresses: Vec<String> = range::expand(expr)?;

    print::header("range", cfg.quiet);
    for address in &addresses {
        if cfg.quiet > 0 {
            iprint!(address);
        } else {
            print::print_status(format::colored_addr(address).to_string());
        }
    }

    if cfg.quiet == 0 {
        print::fat_separator(cfg.quiet);
        let total: ColoredString = addresses.len().to_string().bold().green();
        print::print_status(format!("{total} addresses"));
    }
    Ok(())
}

pub fn bounds(address: &str, cfg: &Config) -> anyhow::Result<()> {
    let (low, high) = range::subnet_bounds(address)?;
    let low: String = codec::to_canonical_string(low);
    let high: String = codec::to_canonical_string(high);

    print::header("subnet bounds", cfg.quiet);
    print::aligned_line("Low", format::colored_addr(&low), cfg.quiet);
    print::aligned_line("High", format::colored_addr(&high), cfg.quiet);
    Ok(())
}
