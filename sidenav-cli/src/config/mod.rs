mod loader;
mod types;

pub use loader::{CONFIG_ENV_VAR, ConfigLoader};
pub use types::{LogConfig, SidenavConfig};
