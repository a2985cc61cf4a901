use super::Generation;

/// Why a run stopped advancing
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TerminalReason {
    /// No live cells remain
    Extinct,
    /// The board returned to the state two generations back (period 2)
    Oscillating,
    /// The board did not change (still life)
    Frozen,
}

impl TerminalReason {
    /// Message shown in the banner once the run ends
    pub const fn label(self) -> &'static str {
        match self {
            TerminalReason::Extinct => "Dead Gen",
            TerminalReason::Oscillating => "Blinking Gen",
            TerminalReason::Frozen => "Frozen Gen",
        }
    }
}

/// Classify a freshly computed generation against the two before it.
/// Checked in order: extinction, period-2 repeat, then no change.
///
/// Only period-2 cycles are caught; longer cycles run until the window
/// is closed.
pub fn detect(
    next: &Generation,
    current: &Generation,
    previous: &Generation,
) -> Option<TerminalReason> {
    if next.is_empty() {
        Some(TerminalReason::Extinct)
    } else if next == previous {
        Some(TerminalReason::Oscillating)
    } else if next == current {
        Some(TerminalReason::Frozen)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn generation(cells: &[(usize, usize)]) -> Generation {
        cells
            .iter()
            .map(|&(x, y)| Cell::new(x, y).unwrap())
            .collect()
    }

    #[test]
    fn test_extinct() {
        let current = generation(&[(2, 2)]);
        let next = current.next();
        assert_eq!(
            detect(&next, &current, &Generation::new()),
            Some(TerminalReason::Extinct)
        );
    }

    #[test]
    fn test_oscillating_blinker() {
        let previous = generation(&[(5, 5), (5, 6), (5, 7)]);
        let current = previous.next();
        let next = current.next();
        assert_eq!(
            detect(&next, &current, &previous),
            Some(TerminalReason::Oscillating)
        );
    }

    #[test]
    fn test_frozen_block() {
        let current = generation(&[(3, 3), (3, 4), (4, 3), (4, 4)]);
        let next = current.next();
        assert_eq!(
            detect(&next, &current, &Generation::new()),
            Some(TerminalReason::Frozen)
        );
    }

    #[test]
    fn test_still_life_seen_twice_reports_oscillating() {
        // previous == current == next: the period-2 check runs first
        let block = generation(&[(3, 3), (3, 4), (4, 3), (4, 4)]);
        assert_eq!(
            detect(&block.next(), &block, &block),
            Some(TerminalReason::Oscillating)
        );
    }

    #[test]
    fn test_evolving_pattern_continues() {
        let previous = Generation::new();
        let current = generation(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let next = current.next();
        assert_eq!(detect(&next, &current, &previous), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TerminalReason::Extinct.label(), "Dead Gen");
        assert_eq!(TerminalReason::Oscillating.label(), "Blinking Gen");
        assert_eq!(TerminalReason::Frozen.label(), "Frozen Gen");
    }
}
