use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aghblock")]
#[command(version)]
#[command(about = "Toggle AdGuard Home blocked services from the command line", long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file (overrides the global one)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Block services on top of the current blocked set
    Block {
        /// Comma-separated service identifiers (e.g. facebook,tiktok)
        services: String,
    },
    /// Unblock services, leaving the rest blocked
    Unblock {
        /// Comma-separated service identifiers
        services: String,
    },
    /// Block every service the appliance knows about
    Blockall,
    /// Clear the blocked set
    Unblockall,
    /// Print the currently blocked identifiers
    Status,
    /// Print every blockable identifier
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_block_with_services() {
        let cli = Cli::try_parse_from(["aghblock", "block", "facebook,tiktok"]).unwrap();
        match cli.command {
            Commands::Block { services } => assert_eq!(services, "facebook,tiktok"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn block_without_services_is_a_usage_error() {
        assert!(Cli::try_parse_from(["aghblock", "block"]).is_err());
    }

    #[test]
    fn missing_subcommand_is_a_usage_error() {
        assert!(Cli::try_parse_from(["aghblock"]).is_err());
    }

    #[test]
    fn unknown_subcommand_is_a_usage_error() {
        assert!(Cli::try_parse_from(["aghblock", "nuke"]).is_err());
    }

    #[test]
    fn bare_subcommands_take_no_argument() {
        assert!(Cli::try_parse_from(["aghblock", "unblockall"]).is_ok());
        assert!(Cli::try_parse_from(["aghblock", "unblockall", "fb"]).is_err());
    }
}
