//! Listener event kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Which half of a transition a listener contributes options to.
///
/// `Hide` providers run against the outgoing item, `Show` providers against the
/// incoming one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    Show,
    Hide,
}

impl Event {
    pub fn as_str(self) -> &'static str {
        match self {
            Event::Show => "show",
            Event::Hide => "hide",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Event {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show" => Ok(Event::Show),
            "hide" => Ok(Event::Hide),
            other => Err(CarouselError::UnknownEvent {
                name: other.to_string(),
            }),
        }
    }
}
