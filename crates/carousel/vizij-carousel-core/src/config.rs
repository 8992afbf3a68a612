//! Navigator configuration.

use serde::{Deserialize, Serialize};

/// Sizing hints for a [`crate::Navigator`].
/// None of these change transition behaviour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial capacity of the animation registry.
    pub animation_capacity: usize,
    /// Initial capacity of each show/hide listener list.
    pub listener_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animation_capacity: 4,
            listener_capacity: 2,
        }
    }
}
