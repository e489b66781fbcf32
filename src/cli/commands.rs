use colored::Colorize;
use std::collections::HashSet;

use crate::api::{self, BlockedServices};
use crate::utils::AghError;

use super::Commands;

/// Handle CLI subcommands
pub async fn handle_command(
    command: &Commands,
    gateway: &impl BlockedServices,
) -> Result<(), AghError> {
    match command {
        Commands::Block { services } => {
            let requested = split_ids(services);
            let change = api::block(gateway, &requested).await?;
            for id in &change.skipped {
                eprintln!("[AGH] {} is not a blockable service, skipping", id.yellow());
            }
            print_blocked(&change.blocked);
            Ok(())
        }
        Commands::Unblock { services } => {
            let requested = split_ids(services);
            let change = api::unblock(gateway, &requested).await?;
            for id in &change.skipped {
                eprintln!("[AGH] {} is not currently blocked, skipping", id.yellow());
            }
            print_blocked(&change.blocked);
            Ok(())
        }
        Commands::Blockall => {
            let blocked = api::block_all(gateway).await?;
            print_blocked(&blocked);
            Ok(())
        }
        Commands::Unblockall => {
            api::unblock_all(gateway).await?;
            println!("[AGH] All services are unblocked now, have fun!");
            Ok(())
        }
        Commands::Status => {
            let blocked = api::status(gateway).await?;
            if blocked.is_empty() {
                println!("[AGH] Currently blocking nothing");
            } else {
                println!("[AGH] Currently blocking: {}", blocked.join(", ").green());
            }
            Ok(())
        }
        Commands::List => {
            println!("[AGH] Available services to block:");
            for id in api::list_available(gateway).await? {
                println!("  • {}", id.green());
            }
            Ok(())
        }
    }
}

/// Split a comma-separated identifier list, dropping blanks and duplicates
fn split_ids(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(id.to_string()))
        .map(str::to_string)
        .collect()
}

fn print_blocked(blocked: &[String]) {
    if blocked.is_empty() {
        println!("[AGH] Now blocking nothing");
    } else {
        println!("[AGH] Now blocking: {}", blocked.join(", ").green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_ids_dedupes_and_trims() {
        assert_eq!(split_ids("fb, tw,fb,,tw"), vec!["fb", "tw"]);
    }

    #[test]
    fn split_ids_of_blanks_is_empty() {
        assert!(split_ids(" , ,").is_empty());
    }
}
