//! Vizij Carousel Core (renderer-agnostic)
//!
//! Tracks which item of a fixed sequence is current and, whenever that changes,
//! dispatches hide/show calls to every registered animation handler. Per-animation
//! option providers contribute JSON objects that are shallow-merged into the
//! options each handler receives. Rendering, timing and input are left to the host.

pub mod config;
pub mod error;
pub mod event;
pub mod navigator;
pub mod options;

pub use config::Config;
pub use error::{BoxError, CarouselError};
pub use event::Event;
pub use navigator::{normalize_index, Navigator};
pub use options::{merge_options, AnimationHandler, OptionProvider, Options};
