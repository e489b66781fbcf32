/// Constants module to avoid magic values in the codebase

// AdGuard Home management API routes, relative to the configured base URL
pub const BLOCKABLE_SERVICES_ROUTE: &str = "/blocked_services/all";
pub const BLOCKED_LIST_ROUTE: &str = "/blocked_services/list";
pub const SET_BLOCKED_ROUTE: &str = "/blocked_services/set";

// Required configuration variables
pub const SERVER_VAR: &str = "AGH_SERVER";
pub const USER_VAR: &str = "AGH_USER";
pub const PASS_VAR: &str = "AGH_PASS";

// Environment prefix mapping AGH_SERVER -> server, etc.
pub const ENV_PREFIX: &str = "AGH_";
