//! Hovered-category state for the skills grid.
//!
//! Purely presentational, last-write-wins: whichever block the pointer was
//! over most recently wins, and leaving clears it. Controls whether a
//! category card shows per-skill proficiency numbers and bars. Deliberately
//! not part of the reveal state machine.

use spark_signals::{signal, Signal};

use crate::types::BlockId;

thread_local! {
    static HOVERED: Signal<Option<BlockId>> = signal(None);
}

/// The hovered-category signal, for reactive reads in the view.
pub fn hovered_signal() -> Signal<Option<BlockId>> {
    HOVERED.with(Signal::clone)
}

/// Currently hovered block, if any.
pub fn hovered() -> Option<BlockId> {
    HOVERED.with(|s| s.get())
}

/// Set the hovered block (last write wins). `None` clears.
pub fn set_hovered(id: Option<BlockId>) {
    HOVERED.with(|s| {
        if s.get() != id {
            s.set(id);
        }
    });
}

/// Clear hover only if `id` is the hovered block, e.g. when the block's
/// owning view unmounts.
pub fn clear_if(id: BlockId) {
    HOVERED.with(|s| {
        if s.get() == Some(id) {
            s.set(None);
        }
    });
}

/// Reset hover state (tests).
pub fn reset_hover_state() {
    HOVERED.with(|s| s.set(None));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SectionKind;

    fn setup() {
        reset_hover_state();
    }

    #[test]
    fn test_last_write_wins() {
        setup();

        let a = BlockId::new(SectionKind::Skills, 0);
        let b = BlockId::new(SectionKind::Skills, 1);

        assert_eq!(hovered(), None);
        set_hovered(Some(a));
        set_hovered(Some(b));
        assert_eq!(hovered(), Some(b));

        set_hovered(None);
        assert_eq!(hovered(), None);
    }

    #[test]
    fn test_clear_if_only_matches() {
        setup();

        let a = BlockId::new(SectionKind::Skills, 0);
        let b = BlockId::new(SectionKind::Skills, 1);

        set_hovered(Some(a));
        clear_if(b);
        assert_eq!(hovered(), Some(a));

        clear_if(a);
        assert_eq!(hovered(), None);
    }
}
