//! The carousel navigator: current-index state plus transition dispatch.

use std::fmt;

use indexmap::IndexMap;
use log::{debug, trace, warn};
use serde_json::Value as JsonValue;

use crate::config::Config;
use crate::error::{BoxError, CarouselError};
use crate::event::Event;
use crate::options::{merge_options, AnimationHandler, OptionProvider, Options};

/// Wrap any integer target into `[0, len)`.
///
/// `len` must be non-zero; a [`Navigator`] guarantees this for its own calls.
pub fn normalize_index(target: isize, len: usize) -> usize {
    target.rem_euclid(len as isize) as usize
}

/// A registered handler together with its show/hide listeners.
/// Listeners only exist while their handler does.
struct Animation<T> {
    handler: AnimationHandler<T>,
    show: Vec<OptionProvider<T>>,
    hide: Vec<OptionProvider<T>>,
}

impl<T> Animation<T> {
    fn new(handler: AnimationHandler<T>, listener_capacity: usize) -> Self {
        Self {
            handler,
            show: Vec::with_capacity(listener_capacity),
            hide: Vec::with_capacity(listener_capacity),
        }
    }

    fn listeners(&self, event: Event) -> &Vec<OptionProvider<T>> {
        match event {
            Event::Show => &self.show,
            Event::Hide => &self.hide,
        }
    }

    fn listeners_mut(&mut self, event: Event) -> &mut Vec<OptionProvider<T>> {
        match event {
            Event::Show => &mut self.show,
            Event::Hide => &mut self.hide,
        }
    }
}

/// Owns a fixed sequence of items and moves a single "current" pointer through it,
/// running every registered animation on each change.
///
/// Handlers are invoked synchronously and never awaited. If a handler only
/// schedules work, a second transition issued before that work finishes will
/// overlap it visually; sequencing rapid input is the caller's job.
pub struct Navigator<T> {
    items: Vec<T>,
    current: usize,
    animations: IndexMap<String, Animation<T>>,
    config: Config,
}

impl<T> Navigator<T> {
    /// Create a navigator over `items` with item 0 current.
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        Self::with_config(items, Config::default())
    }

    pub fn with_config(items: Vec<T>, config: Config) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::EmptySequence);
        }
        Ok(Self {
            items,
            current: 0,
            animations: IndexMap::with_capacity(config.animation_capacity),
            config,
        })
    }

    /// Register an animation handler (builder form of [`Self::register_animation`]).
    pub fn with_animation<F>(mut self, id: impl Into<String>, handler: F) -> Self
    where
        F: FnMut(&T, &Options) -> Result<(), BoxError> + 'static,
    {
        self.register_animation(id, handler);
        self
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &T {
        &self.items[self.current]
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Make `target` (wrapped into range) the current item.
    ///
    /// For every registered animation, in registration order, the handler is called
    /// with the outgoing item and its merged hide options, then with the incoming
    /// item and its merged show options. Hide providers see `(reverse, old index)`,
    /// show providers see `(reverse, new index)`. The index is committed only after
    /// all animations have been dispatched.
    ///
    /// Targeting the current index is a no-op. On error, animations earlier in the
    /// registry may already have run, later ones have not, and the current index is
    /// unchanged.
    pub fn set_current(&mut self, target: isize, reverse: bool) -> Result<(), CarouselError> {
        let next = normalize_index(target, self.items.len());
        if next == self.current {
            return Ok(());
        }
        let prev = self.current;
        debug!("transition {prev} -> {next} (reverse={reverse})");

        let outgoing = &self.items[prev];
        let incoming = &self.items[next];
        for (id, anim) in self.animations.iter_mut() {
            trace!("dispatching animation '{id}'");
            let hide_opts =
                merge_options(id, Event::Hide, &mut anim.hide, outgoing, reverse, prev)?;
            let show_opts =
                merge_options(id, Event::Show, &mut anim.show, incoming, reverse, next)?;

            // Both calls are issued back to back; nothing here waits on the hide.
            (anim.handler)(outgoing, &hide_opts).map_err(|source| handler_failed(id, source))?;
            (anim.handler)(incoming, &show_opts).map_err(|source| handler_failed(id, source))?;
        }

        self.current = next;
        Ok(())
    }

    /// Advance one item forward, wrapping past the end.
    pub fn next(&mut self) -> Result<(), CarouselError> {
        self.set_current(self.current as isize + 1, false)
    }

    /// Step one item back, wrapping before the start.
    pub fn previous(&mut self) -> Result<(), CarouselError> {
        self.set_current(self.current as isize - 1, true)
    }

    /// Jump to `target`, animating in reverse when `target` is below the current index.
    ///
    /// Direction comes from the raw difference, not the wrapped one: from index 2 of
    /// four items, `go_to(-1)` lands on 3 but animates in reverse, and `go_to(4)` lands
    /// on 0 animating forward.
    pub fn go_to(&mut self, target: isize) -> Result<(), CarouselError> {
        let reverse = target < self.current as isize;
        self.set_current(target, reverse)
    }

    /// Register `handler` under `id`, replacing any existing handler.
    ///
    /// Re-registering resets the show and hide listeners for `id`; the animation keeps
    /// its original position in dispatch order.
    pub fn register_animation<F>(&mut self, id: impl Into<String>, handler: F)
    where
        F: FnMut(&T, &Options) -> Result<(), BoxError> + 'static,
    {
        let id = id.into();
        let anim = Animation::new(Box::new(handler), self.config.listener_capacity);
        if self.animations.insert(id.clone(), anim).is_some() {
            debug!("re-registered animation '{id}', listeners reset");
        } else {
            debug!("registered animation '{id}'");
        }
    }

    /// Remove the handler for `id` together with its listeners.
    /// Returns whether anything was registered.
    pub fn remove_animation(&mut self, id: &str) -> bool {
        self.animations.shift_remove(id).is_some()
    }

    /// Append an option provider for `event` on animation `id`.
    ///
    /// Fails with [`CarouselError::AnimationNotFound`] if `id` has no handler yet.
    pub fn add_listener<F>(
        &mut self,
        id: &str,
        event: Event,
        provider: F,
    ) -> Result<(), CarouselError>
    where
        F: FnMut(&T, bool, usize) -> Result<JsonValue, BoxError> + 'static,
    {
        let anim = self.animations.get_mut(id).ok_or_else(|| not_found(id))?;
        anim.listeners_mut(event).push(Box::new(provider));
        Ok(())
    }

    pub fn has_animation(&self, id: &str) -> bool {
        self.animations.contains_key(id)
    }

    /// Registered animation ids in dispatch order.
    pub fn animation_ids(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }

    pub fn listener_count(&self, id: &str, event: Event) -> Result<usize, CarouselError> {
        self.animations
            .get(id)
            .map(|anim| anim.listeners(event).len())
            .ok_or_else(|| not_found(id))
    }

    /// Run `callback` on every item except the first, last item first.
    ///
    /// Meant for one-off setup such as hiding all non-initial items. No animations
    /// run and the current index is untouched.
    pub fn initialize(&self, mut callback: impl FnMut(&T)) {
        for item in self.items.iter().skip(1).rev() {
            callback(item);
        }
    }
}

fn not_found(id: &str) -> CarouselError {
    warn!("no animation registered as '{id}'");
    CarouselError::AnimationNotFound { id: id.to_string() }
}

fn handler_failed(id: &str, source: BoxError) -> CarouselError {
    warn!("animation handler '{id}' failed: {source}");
    CarouselError::Handler {
        id: id.to_string(),
        source,
    }
}

impl<T> fmt::Debug for Navigator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("num_items", &self.items.len())
            .field("current", &self.current)
            .field("animations", &self.animations.keys().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize_index(-1, 4), 3);
        assert_eq!(normalize_index(5, 4), 1);
        assert_eq!(normalize_index(-8, 4), 0);
        assert_eq!(normalize_index(2, 4), 2);
        for i in -20..20 {
            let n = normalize_index(i, 3);
            assert!(n < 3, "{i} normalized to {n}");
            assert_eq!(n as isize, ((i % 3) + 3) % 3);
        }
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let err = Navigator::<u8>::new(Vec::new()).unwrap_err();
        assert!(matches!(err, CarouselError::EmptySequence));
    }

    #[test]
    fn reregistering_keeps_dispatch_position_and_resets_listeners() {
        let mut nav = Navigator::new(vec![1, 2])
            .unwrap()
            .with_animation("fade", |_, _| Ok(()))
            .with_animation("slide", |_, _| Ok(()));
        nav.add_listener("fade", Event::Show, |_, _, _| Ok(json!({ "ms": 200 })))
            .unwrap();
        nav.add_listener("fade", Event::Hide, |_, _, _| Ok(json!({ "ms": 100 })))
            .unwrap();
        assert_eq!(nav.listener_count("fade", Event::Show).unwrap(), 1);

        nav.register_animation("fade", |_, _| Ok(()));
        assert_eq!(nav.animation_ids().collect::<Vec<_>>(), ["fade", "slide"]);
        assert_eq!(nav.listener_count("fade", Event::Show).unwrap(), 0);
        assert_eq!(nav.listener_count("fade", Event::Hide).unwrap(), 0);
    }

    #[test]
    fn remove_drops_listeners_with_handler() {
        let mut nav = Navigator::new(vec!['a', 'b'])
            .unwrap()
            .with_animation("fade", |_, _| Ok(()));
        assert!(nav.remove_animation("fade"));
        assert!(!nav.remove_animation("fade"));
        assert!(!nav.has_animation("fade"));
        assert!(matches!(
            nav.listener_count("fade", Event::Hide),
            Err(CarouselError::AnimationNotFound { .. })
        ));
    }

    #[test]
    fn debug_lists_animation_ids() {
        let nav = Navigator::new(vec![0u8; 3])
            .unwrap()
            .with_animation("fade", |_, _| Ok(()));
        let dbg = format!("{nav:?}");
        assert!(dbg.contains("num_items: 3"));
        assert!(dbg.contains("\"fade\""));
    }
}
