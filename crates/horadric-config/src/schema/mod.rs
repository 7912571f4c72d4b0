//! Configuration schema types for Horadric.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assistant;
mod provider;
mod system;

pub use assistant::*;
pub use provider::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Horadric.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HoradricConfig {
    pub provider: ProviderConfig,
    pub assistant: AssistantConfig,
    pub logging: LoggingConfig,
}
