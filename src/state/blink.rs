//! Caret blink clock.
//!
//! One shared clock drives every blinking caret on the page so they stay in
//! visual sync. Subscribers reference-count the clock: the mount loop only
//! schedules blink ticks while someone is subscribed, and the phase resets
//! to visible when the last subscriber leaves.
//!
//! The clock itself is passive - the mount loop calls [`advance`] when its
//! blink timer fires and re-schedules at [`BLINK_HALF_PERIOD`].

use std::cell::Cell;
use std::time::Duration;

use spark_signals::{signal, Signal};

/// Half of the on/off cycle: phase toggles every 500ms (1s full blink).
pub const BLINK_HALF_PERIOD: Duration = Duration::from_millis(500);

thread_local! {
    static PHASE: Signal<bool> = signal(true); // Start visible
    static SUBSCRIBERS: Cell<usize> = const { Cell::new(0) };
}

/// Subscribe to the blink clock. Returns an unsubscribe function.
///
/// While at least one subscriber exists, the mount loop keeps the blink
/// timer alive. Unsubscribing when the count reaches zero resets the phase
/// to visible so the next subscriber starts from a shown caret.
pub fn subscribe_to_blink() -> impl FnOnce() {
    SUBSCRIBERS.with(|c| c.set(c.get() + 1));

    move || {
        SUBSCRIBERS.with(|c| {
            let remaining = c.get().saturating_sub(1);
            c.set(remaining);
            if remaining == 0 {
                PHASE.with(|p| p.set(true));
            }
        });
    }
}

/// Current blink phase: true = caret visible.
pub fn blink_phase() -> bool {
    PHASE.with(|p| p.get())
}

/// The phase signal, for reactive reads in the view.
pub fn blink_signal() -> Signal<bool> {
    PHASE.with(Signal::clone)
}

/// Whether the mount loop should keep scheduling blink ticks.
pub fn has_subscribers() -> bool {
    SUBSCRIBERS.with(Cell::get) > 0
}

/// Toggle the phase. Called by the mount loop when a blink timer fires;
/// a tick with no subscribers is a stale timer and leaves the phase alone.
pub fn advance() {
    if !has_subscribers() {
        return;
    }
    PHASE.with(|p| p.set(!p.get()));
}

/// Reset clock state (tests).
pub fn reset_blink_state() {
    SUBSCRIBERS.with(|c| c.set(0));
    PHASE.with(|p| p.set(true));
}
