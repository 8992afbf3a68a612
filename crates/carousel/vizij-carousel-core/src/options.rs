//! Option providers and the shallow merge that combines their output.
//!
//! Providers registered for one animation and one [`Event`] are called in
//! registration order. Each returns a JSON object; keys from later providers
//! overwrite keys from earlier ones. Nested objects are not merged.

use log::warn;
use serde_json::{Map, Value as JsonValue};

use crate::error::{BoxError, CarouselError};
use crate::event::Event;

/// Merged options handed to an animation handler.
pub type Options = Map<String, JsonValue>;

/// Performs the visual transition for one item.
///
/// Called twice per transition: once with the outgoing item and its hide
/// options, then with the incoming item and its show options. The navigator
/// does not wait for any work the handler schedules.
pub type AnimationHandler<T> = Box<dyn FnMut(&T, &Options) -> Result<(), BoxError>>;

/// Supplies partial options for one item: `(item, reverse, index) -> object`.
///
/// Returning `null` contributes nothing.
pub type OptionProvider<T> = Box<dyn FnMut(&T, bool, usize) -> Result<JsonValue, BoxError>>;

/// Call every provider with `(item, reverse, index)` and merge the returned
/// objects left to right. An empty provider list yields an empty map.
pub fn merge_options<T>(
    id: &str,
    event: Event,
    providers: &mut [OptionProvider<T>],
    item: &T,
    reverse: bool,
    index: usize,
) -> Result<Options, CarouselError> {
    let mut merged = Options::new();

    for provider in providers.iter_mut() {
        let source = provider(item, reverse, index).map_err(|source| {
            warn!("option provider for '{id}' ({event}) failed: {source}");
            CarouselError::Provider {
                id: id.to_string(),
                event,
                source,
            }
        })?;

        match source {
            JsonValue::Object(obj) => merged.extend(obj),
            JsonValue::Null => {}
            other => {
                return Err(CarouselError::InvalidOptions {
                    id: id.to_string(),
                    event,
                    found: json_kind(&other),
                })
            }
        }
    }

    Ok(merged)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a bool",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
