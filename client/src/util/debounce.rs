//! Trailing-edge debounce for search input.
//!
//! Each keystroke calls `schedule()` and arms a timer for `delay()`. When the
//! timer fires, `should_fire(ticket)` is true only if no later keystroke
//! arrived, so a burst of input inside the window yields exactly one fetch.
//! `DebouncedInput` applies that rule to a text field's value.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::time::Duration;

/// Delay between the last search keystroke and the catalog refetch.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    latest: u64,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay, latest: 0 }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record an input; any earlier pending ticket is superseded.
    pub fn schedule(&mut self) -> DebounceTicket {
        self.latest += 1;
        DebounceTicket(self.latest)
    }

    /// Whether the timer for `ticket` should trigger the action.
    #[must_use]
    pub fn should_fire(&self, ticket: DebounceTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Drop every pending ticket.
    pub fn cancel(&mut self) {
        self.latest += 1;
    }
}

/// A text field whose settled value trails its keystrokes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebouncedInput {
    raw: String,
    settled: String,
    debouncer: Debouncer,
}

impl DebouncedInput {
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self { raw: initial.to_owned(), settled: initial.to_owned(), debouncer: Debouncer::default() }
    }

    /// What the field shows.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// What fetches depend on.
    #[must_use]
    pub fn settled(&self) -> &str {
        &self.settled
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }

    /// A keystroke. Arm a timer for the returned ticket.
    pub fn input(&mut self, value: String) -> DebounceTicket {
        self.raw = value;
        self.debouncer.schedule()
    }

    /// The timer for `ticket` elapsed. Returns whether the settled value moved.
    pub fn elapse(&mut self, ticket: DebounceTicket) -> bool {
        if !self.debouncer.should_fire(ticket) || self.raw == self.settled {
            return false;
        }
        self.settled.clone_from(&self.raw);
        true
    }

    /// Replace both values at once, dropping any pending keystroke.
    pub fn set_now(&mut self, value: String) {
        self.debouncer.cancel();
        self.settled.clone_from(&value);
        self.raw = value;
    }
}
