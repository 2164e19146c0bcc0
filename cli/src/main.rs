mod commands;
mod terminal;

use commands::{CommandLine, Commands, address, lookup, mask, range};
use iputil_common::config::Config;
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg: Config = commands.config();

    match commands.command {
        Commands::Check { address } => address::check(&address, &cfg),
        Commands::Int { address } => address::to_integer(&address, &cfg),
        Commands::Str { value } => {
            address::to_string(value, &cfg);
            Ok(())
        }
        Commands::Wrap { value } => {
            address::wrap(&value, &cfg);
            Ok(())
        }
        Commands::Unwrap { value } => {
            address::unwrap(&value, &cfg);
            Ok(())
        }
        Commands::V6bytes { octets } => address::from_bytes(&octets, &cfg),
        Commands::Complete { partial } => {
            address::complete(&partial, &cfg);
            Ok(())
        }
        Commands::Hexmask { hex } => mask::from_hex(&hex, &cfg),
        Commands::Bits { mask } => mask::to_bits(&mask, &cfg),
        Commands::Mask { bits } => mask::from_bits(bits, &cfg),
        Commands::Net { address, mask } => mask::network(&address, &mask, &cfg),
        Commands::Expand { range } => range::expand(&range, &cfg),
        Commands::Bounds { address } => range::bounds(&address, &cfg),
        Commands::Rdns { address } => lookup::reverse(&address, &cfg).await,
        Commands::Lookup { hostname, family } => lookup::forward(&hostname, family, &cfg).await,
        Commands::Addrs { hostname } => lookup::list(&hostname, &cfg).await,
    }
}
