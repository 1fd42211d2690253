pub use ncp_types::environment::{Bug, Environment};
pub use ncp_types::prelude::*;
pub use ncp_types::settings::{SettingsProvider, SettingsSource};

// vim: ts=4
