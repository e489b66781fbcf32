// Gateway module for the management API - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod client;
mod ops;
mod traits;
mod types;

// Public re-exports - the ONLY way to access API functionality
pub use client::AghClient;
pub use ops::{block, block_all, list_available, status, unblock, unblock_all};
pub use traits::BlockedServices;
pub use types::{BlockChange, ServiceDescriptor};
