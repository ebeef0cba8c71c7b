use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

/// Whether the engine cycles through its word list forever or stops after
/// the last word has been fully typed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Repeat {
    Loop,
    Once,
}

#[derive(Clone, PartialEq, Debug)]
pub struct TypewriterConfig {
    pub words: Vec<String>,
    pub type_delay_ms: u32,
    pub hold_delay_ms: u32,
    pub min_delete_delay_ms: u32,
    pub repeat: Repeat,
}

impl TypewriterConfig {
    pub fn looping(words: Vec<String>) -> Self {
        Self {
            words,
            type_delay_ms: config::TYPE_DELAY_MS,
            hold_delay_ms: config::HOLD_DELAY_MS,
            min_delete_delay_ms: config::MIN_DELETE_DELAY_MS,
            repeat: Repeat::Loop,
        }
    }

    pub fn once(word: impl Into<String>) -> Self {
        Self {
            words: vec![word.into()],
            repeat: Repeat::Once,
            ..Self::looping(Vec::new())
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Tick {
    /// Keep going; re-arm the timer with this delay.
    Continue { delay_ms: u32 },
    /// Non-repeating session finished its last word.
    Done,
}

/// Pure typing/deleting state machine. The display text is always a prefix
/// of the word currently being typed or deleted; the tick that empties the
/// display also advances the word index.
pub struct TypewriterSession {
    config: TypewriterConfig,
    word_index: usize,
    display: String,
    deleting: bool,
    delete_delay_ms: u32,
    done: bool,
}

impl TypewriterSession {
    pub fn new(config: TypewriterConfig) -> Self {
        let delete_delay_ms = config.hold_delay_ms;
        Self {
            config,
            word_index: 0,
            display: String::new(),
            deleting: false,
            delete_delay_ms,
            done: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn tick(&mut self) -> Tick {
        if self.done || self.config.words.is_empty() {
            self.done = true;
            return Tick::Done;
        }
        let word = self.config.words[self.word_index % self.config.words.len()].clone();

        if self.deleting {
            self.display.pop();
            // Deletes speed up: each one waits half as long as the last.
            self.delete_delay_ms =
                (self.delete_delay_ms / 2).max(self.config.min_delete_delay_ms);
            if self.display.is_empty() {
                self.deleting = false;
                self.word_index = (self.word_index + 1) % self.config.words.len();
                return Tick::Continue {
                    delay_ms: self.config.type_delay_ms,
                };
            }
            return Tick::Continue {
                delay_ms: self.delete_delay_ms,
            };
        }

        let typed = self.display.chars().count();
        if let Some(next) = word.chars().nth(typed) {
            self.display.push(next);
        }
        if self.display == word {
            // Word complete (immediately so for an empty word).
            if self.config.repeat == Repeat::Once
                && self.word_index == self.config.words.len() - 1
            {
                self.done = true;
                return Tick::Done;
            }
            self.deleting = true;
            self.delete_delay_ms = self.config.hold_delay_ms;
            return Tick::Continue {
                delay_ms: self.config.hold_delay_ms,
            };
        }
        Tick::Continue {
            delay_ms: self.config.type_delay_ms,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub config: TypewriterConfig,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub cursor: bool,
    #[prop_or_default]
    pub on_complete: Option<Callback<()>>,
}

fn arm(
    delay_ms: u32,
    session: Rc<RefCell<TypewriterSession>>,
    display: UseStateHandle<String>,
    pending: Rc<RefCell<Option<Timeout>>>,
    on_complete: Rc<RefCell<Option<Callback<()>>>>,
) {
    let handle = {
        let pending = pending.clone();
        Timeout::new(delay_ms, move || {
            let outcome = session.borrow_mut().tick();
            display.set(session.borrow().display().to_string());
            match outcome {
                Tick::Continue { delay_ms } => {
                    arm(delay_ms, session, display, pending, on_complete);
                }
                Tick::Done => {
                    pending.borrow_mut().take();
                    if let Some(cb) = on_complete.borrow().as_ref() {
                        cb.emit(());
                    }
                }
            }
        })
    };
    *pending.borrow_mut() = Some(handle);
}

/// Renders a continuously typed/deleted word list with a blinking cursor.
#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let display = use_state(String::new);

    // Callbacks compare by Rc identity, so keying the effect on one would
    // restart the session whenever the parent re-renders. Keep the latest
    // callback in a ref instead and key on the config alone.
    let on_complete = use_mut_ref(|| props.on_complete.clone());
    *on_complete.borrow_mut() = props.on_complete.clone();

    {
        let display = display.clone();
        use_effect_with_deps(
            move |config: &TypewriterConfig| {
                let session = Rc::new(RefCell::new(TypewriterSession::new(config.clone())));
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                arm(
                    config.type_delay_ms,
                    session,
                    display,
                    pending.clone(),
                    on_complete,
                );
                move || {
                    // Dropping the handle cancels a still-armed timeout.
                    pending.borrow_mut().take();
                }
            },
            props.config.clone(),
        );
    }

    html! {
        <span class={classes!("typewriter", props.class.clone())}>
            { &*display }
            if props.cursor {
                <span class="typewriter-cursor">{"|"}</span>
            }
            <style>
                {r#"
                .typewriter-cursor {
                    animation: typewriter-blink 1s step-end infinite;
                    font-weight: 400;
                }
                @keyframes typewriter-blink {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0; }
                }
                "#}
            </style>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast(words: &[&str], repeat: Repeat) -> TypewriterSession {
        TypewriterSession::new(TypewriterConfig {
            words: words.iter().map(|w| w.to_string()).collect(),
            type_delay_ms: 10,
            hold_delay_ms: 80,
            min_delete_delay_ms: 5,
            repeat,
        })
    }

    #[test]
    fn cycles_through_word_list_with_wrapping() {
        let mut s = fast(&["AI", "HA"], Repeat::Loop);
        let mut seen = Vec::new();
        for _ in 0..8 {
            assert!(matches!(s.tick(), Tick::Continue { .. }));
            seen.push(s.display().to_string());
        }
        assert_eq!(seen, ["A", "AI", "A", "", "H", "HA", "H", ""]);
        // Emptying the display wrapped the index back to the first word.
        assert_eq!(s.word_index(), 0);
    }

    #[test]
    fn display_is_always_a_prefix_of_the_active_word() {
        let mut s = fast(&["analytics", "ai"], Repeat::Loop);
        for _ in 0..200 {
            let before = s.display().chars().count();
            s.tick();
            let word = ["analytics", "ai"][s.word_index()];
            let after = s.display().chars().count();
            assert!(
                word.starts_with(s.display()),
                "{:?} not a prefix of {:?}",
                s.display(),
                word
            );
            assert!(after.abs_diff(before) <= 1);
        }
    }

    #[test]
    fn full_word_is_held_before_deleting_starts() {
        let mut s = fast(&["AI"], Repeat::Loop);
        s.tick();
        let hold = s.tick();
        assert_eq!(s.display(), "AI");
        assert_eq!(hold, Tick::Continue { delay_ms: 80 });
        assert!(s.is_deleting());
    }

    #[test]
    fn delete_delay_halves_down_to_the_floor() {
        let mut s = fast(&["abcdefgh"], Repeat::Loop);
        let mut delays = Vec::new();
        loop {
            match s.tick() {
                Tick::Continue { delay_ms } => {
                    if s.is_deleting() {
                        delays.push(delay_ms);
                    } else if !delays.is_empty() {
                        break; // display emptied, back to typing
                    }
                }
                Tick::Done => unreachable!(),
            }
        }
        // Hold delay first, then each delete waits half as long, floored.
        assert_eq!(delays, [80, 40, 20, 10, 5, 5, 5, 5]);
    }

    #[test]
    fn single_word_list_loops_on_that_word() {
        let mut s = fast(&["go"], Repeat::Loop);
        let mut displays = Vec::new();
        for _ in 0..8 {
            s.tick();
            displays.push(s.display().to_string());
        }
        assert_eq!(displays, ["g", "go", "g", "", "g", "go", "g", ""]);
    }

    #[test]
    fn empty_word_completes_typing_immediately() {
        let mut s = fast(&["", "hi"], Repeat::Loop);
        assert!(matches!(s.tick(), Tick::Continue { .. }));
        assert_eq!(s.display(), "");
        assert!(s.is_deleting());
    }

    #[test]
    fn once_mode_stops_after_last_word_is_typed() {
        let mut s = fast(&["Hi"], Repeat::Once);
        assert!(matches!(s.tick(), Tick::Continue { .. }));
        assert_eq!(s.tick(), Tick::Done);
        assert_eq!(s.display(), "Hi");
        // Ticking a finished session stays done and never regresses.
        assert_eq!(s.tick(), Tick::Done);
        assert_eq!(s.display(), "Hi");
    }

    #[test]
    fn empty_word_list_is_immediately_done() {
        let mut s = fast(&[], Repeat::Loop);
        assert_eq!(s.tick(), Tick::Done);
    }

    #[test]
    fn session_restarts_track_config_value_not_callback_identity() {
        // The driving effect keys on the config alone: equal configs from
        // successive renders must not tear down a running session.
        let a = TypewriterConfig::once("How We Work?");
        let b = TypewriterConfig::once("How We Work?");
        assert_eq!(a, b);
        assert_ne!(a, TypewriterConfig::once("Why Choose Us?"));

        // Two behaviorally identical callbacks still compare unequal, so a
        // parent rebuilding its completion handler every render would restart
        // the session (and re-fire completion) if the callback were a dep.
        let x: Callback<()> = Callback::from(|_| {});
        let y: Callback<()> = Callback::from(|_| {});
        assert_ne!(x, y);
        assert_eq!(x, x.clone());

        // The session the effect would keep across those renders stays done.
        let mut s = TypewriterSession::new(a);
        while s.tick() != Tick::Done {}
        assert_eq!(s.display(), "How We Work ?");
        assert_eq!(s.tick(), Tick::Done);
    }
}
