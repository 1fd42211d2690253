pub use crate::check_type::CheckType;
pub use crate::error::{ClResult, Error};
pub use crate::types::{ActionList, AlmostBoolean, GameVersion, Permission, WorldId};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
