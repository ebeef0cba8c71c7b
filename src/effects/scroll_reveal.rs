use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// How a binding reacts to repeated viewport crossings.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RepeatPolicy {
    /// Fire the forward transition once, then ignore further crossings.
    Once,
    /// Play forward on entry, reverse on exit, indefinitely.
    EveryCrossing,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealState {
    Pending,
    Active,
    Reversed,
    Complete,
}

impl RevealState {
    /// Whether the bound element should currently show its revealed style.
    pub fn revealed(self) -> bool {
        matches!(self, RevealState::Active | RevealState::Complete)
    }

    /// CSS class the section components map the state onto.
    pub fn class(self) -> &'static str {
        if self.revealed() {
            "revealed"
        } else {
            "unrevealed"
        }
    }
}

/// Per-element reveal state machine. Transitions happen only through
/// `observe`, in the order observations arrive.
pub struct RevealBinding {
    policy: RepeatPolicy,
    state: RevealState,
}

impl RevealBinding {
    pub fn new(policy: RepeatPolicy) -> Self {
        Self {
            policy,
            state: RevealState::Pending,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Feed the latest visibility observation. Returns the new state when a
    /// transition happened.
    pub fn observe(&mut self, in_view: bool) -> Option<RevealState> {
        let next = match (self.policy, self.state, in_view) {
            (RepeatPolicy::Once, RevealState::Pending, true) => RevealState::Complete,
            (RepeatPolicy::EveryCrossing, RevealState::Pending, true)
            | (RepeatPolicy::EveryCrossing, RevealState::Reversed, true) => RevealState::Active,
            (RepeatPolicy::EveryCrossing, RevealState::Active, false) => RevealState::Reversed,
            _ => return None,
        };
        self.state = next;
        Some(next)
    }
}

/// Scrubbed binding: progress follows scroll in both directions until it
/// reaches 1.0, then locks in place.
pub struct ScrubBinding {
    progress: f64,
    complete: bool,
}

impl ScrubBinding {
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            complete: false,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn observe_progress(&mut self, fraction: f64) -> f64 {
        if !self.complete {
            self.progress = fraction.clamp(0.0, 1.0);
            if self.progress >= 1.0 {
                self.complete = true;
            }
        }
        self.progress
    }
}

impl Default for ScrubBinding {
    fn default() -> Self {
        Self::new()
    }
}

fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Binds `node`'s reveal state to its viewport position. The element counts
/// as in view once its top edge rises above the viewport bottom minus
/// `offset_px`. Evaluates once at mount so above-the-fold elements reveal
/// without any scroll event; listeners are removed on unmount.
#[hook]
pub fn use_scroll_reveal(node: NodeRef, policy: RepeatPolicy, offset_px: f64) -> RevealState {
    let state = use_state_eq(|| RevealState::Pending);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(node, policy, offset_px): &(NodeRef, RepeatPolicy, f64)| {
                let binding = Rc::new(RefCell::new(RevealBinding::new(*policy)));
                let evaluate: Rc<dyn Fn()> = {
                    let node = node.clone();
                    let offset = *offset_px;
                    Rc::new(move || {
                        let Some(el) = node.cast::<web_sys::Element>() else {
                            return;
                        };
                        let rect = el.get_bounding_client_rect();
                        let in_view =
                            rect.top() < viewport_height() - offset && rect.bottom() > 0.0;
                        if let Some(next) = binding.borrow_mut().observe(in_view) {
                            state.set(next);
                        }
                    })
                };
                evaluate();

                let listener = Closure::wrap(Box::new({
                    let evaluate = evaluate.clone();
                    move || evaluate()
                }) as Box<dyn FnMut()>);
                if let Some(win) = web_sys::window() {
                    let _ = win.add_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                    let _ = win.add_event_listener_with_callback(
                        "resize",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(win) = web_sys::window() {
                        let _ = win.remove_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        );
                        let _ = win.remove_event_listener_with_callback(
                            "resize",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                    drop(listener);
                }
            },
            (node, policy, offset_px),
        );
    }

    *state
}

/// Drives a scrubbed, pinned animation from scroll progress through `node`.
/// The node is expected to be taller than the viewport (its inner content
/// pinned with `position: sticky`); progress is the scrolled fraction of the
/// extra height and locks at 1.0.
#[hook]
pub fn use_scroll_scrub(node: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let binding = Rc::new(RefCell::new(ScrubBinding::new()));
                let evaluate: Rc<dyn Fn()> = {
                    let node = node.clone();
                    Rc::new(move || {
                        let Some(el) = node.cast::<web_sys::Element>() else {
                            return;
                        };
                        let rect = el.get_bounding_client_rect();
                        let span = rect.height() - viewport_height();
                        if span <= 0.0 {
                            return;
                        }
                        let fraction = -rect.top() / span;
                        progress.set(binding.borrow_mut().observe_progress(fraction));
                    })
                };
                evaluate();

                let listener = Closure::wrap(Box::new({
                    let evaluate = evaluate.clone();
                    move || evaluate()
                }) as Box<dyn FnMut()>);
                if let Some(win) = web_sys::window() {
                    let _ = win.add_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                    let _ = win.add_event_listener_with_callback(
                        "resize",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(win) = web_sys::window() {
                        let _ = win.remove_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        );
                        let _ = win.remove_event_listener_with_callback(
                            "resize",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                    drop(listener);
                }
            },
            node,
        );
    }

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_exactly_once() {
        let mut b = RevealBinding::new(RepeatPolicy::Once);
        assert_eq!(b.observe(true), Some(RevealState::Complete));
        for _ in 0..5 {
            assert_eq!(b.observe(false), None);
            assert_eq!(b.observe(true), None);
        }
        assert_eq!(b.state(), RevealState::Complete);
    }

    #[test]
    fn one_shot_fires_for_elements_already_in_view_at_mount() {
        let mut b = RevealBinding::new(RepeatPolicy::Once);
        // The mount-time evaluation is just the first observation.
        assert_eq!(b.observe(true), Some(RevealState::Complete));
    }

    #[test]
    fn one_shot_waits_while_out_of_view() {
        let mut b = RevealBinding::new(RepeatPolicy::Once);
        assert_eq!(b.observe(false), None);
        assert_eq!(b.state(), RevealState::Pending);
        assert_eq!(b.observe(true), Some(RevealState::Complete));
    }

    #[test]
    fn toggle_round_trip_restores_the_initial_visual_state() {
        let mut b = RevealBinding::new(RepeatPolicy::EveryCrossing);
        let initial = b.state().revealed();
        b.observe(true);
        assert!(b.state().revealed());
        b.observe(false);
        assert_eq!(b.state().revealed(), initial);
        // And it keeps toggling.
        assert_eq!(b.observe(true), Some(RevealState::Active));
        assert_eq!(b.observe(false), Some(RevealState::Reversed));
    }

    #[test]
    fn repeated_identical_observations_do_not_retrigger() {
        let mut b = RevealBinding::new(RepeatPolicy::EveryCrossing);
        assert_eq!(b.observe(true), Some(RevealState::Active));
        assert_eq!(b.observe(true), None);
        assert_eq!(b.observe(true), None);
    }

    #[test]
    fn scrub_follows_scroll_both_ways_until_locked() {
        let mut s = ScrubBinding::new();
        assert_eq!(s.observe_progress(0.25), 0.25);
        assert_eq!(s.observe_progress(0.75), 0.75);
        assert_eq!(s.observe_progress(0.5), 0.5);
        assert!(!s.is_complete());
        assert_eq!(s.observe_progress(1.4), 1.0);
        assert!(s.is_complete());
        // Locked: scrolling back no longer moves it.
        assert_eq!(s.observe_progress(0.2), 1.0);
        assert_eq!(s.progress(), 1.0);
    }

    #[test]
    fn scrub_clamps_out_of_range_fractions() {
        let mut s = ScrubBinding::new();
        assert_eq!(s.observe_progress(-3.0), 0.0);
        assert_eq!(s.observe_progress(0.5), 0.5);
        assert_eq!(s.progress(), 0.5);
    }
}
