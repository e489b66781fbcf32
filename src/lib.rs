pub mod api;
pub mod app;
pub mod cli;
pub mod constants;
pub mod utils;

pub use api::{AghClient, BlockedServices};
pub use app::{load_config, Config, Credentials};
pub use cli::{handle_command, Cli, Commands};
pub use utils::AghError;
