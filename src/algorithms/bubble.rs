/// Outcome of a single comparison within a bubble-sort pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassStep {
    /// Comparison done, more pairs remain in the current pass.
    MoreWork,
    /// End of a pass that swapped at least once; the index wrapped to 0.
    PassComplete,
    /// A full pass made no swaps; the values are sorted.
    SortDone,
}

/// Compare index and per-pass swap flag for one bubble-sort run.
///
/// Each `advance` call performs exactly one adjacent comparison, so a caller
/// can interleave redraws between comparisons.
#[derive(Clone, Debug)]
pub struct BubbleState {
    index: usize,
    changed: bool,
    comparisons: usize,
    swaps: usize,
}

impl BubbleState {
    pub fn new() -> Self {
        Self {
            index: 0,
            changed: false,
            comparisons: 0,
            swaps: 0,
        }
    }

    /// Left position of the pair compared next, always < len - 1.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    pub fn swaps(&self) -> usize {
        self.swaps
    }

    /// Compare `values[index]` with its right neighbor, swap them if they are
    /// out of order, and move on to the next pair.
    ///
    /// Requires `values.len() >= 2`; the owning engine enforces that at
    /// construction.
    pub fn advance(&mut self, values: &mut [f32]) -> PassStep {
        self.comparisons += 1;
        if values[self.index] > values[self.index + 1] {
            values.swap(self.index, self.index + 1);
            self.changed = true;
            self.swaps += 1;
        }

        self.index += 1;
        if self.index == values.len() - 1 {
            if !self.changed {
                return PassStep::SortDone;
            }
            self.index = 0;
            self.changed = false;
            return PassStep::PassComplete;
        }
        PassStep::MoreWork
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run to completion, returning (comparisons, passes).
    fn drive(values: &mut [f32]) -> (usize, usize) {
        let mut state = BubbleState::new();
        let mut passes = 1;
        loop {
            match state.advance(values) {
                PassStep::MoreWork => {}
                PassStep::PassComplete => passes += 1,
                PassStep::SortDone => return (state.comparisons(), passes),
            }
        }
    }

    #[test]
    fn sorts_ascending() {
        let mut values = [0.9, 0.1, 0.5, 0.3, 0.7];
        drive(&mut values);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn comparison_count_is_pairs_times_passes() {
        let mut values = [0.6, 0.2, 0.9, 0.1];
        let pairs = values.len() - 1;
        let (comparisons, passes) = drive(&mut values);
        assert_eq!(comparisons, pairs * passes);
    }

    #[test]
    fn sorted_input_needs_exactly_one_pass() {
        let mut values = [0.1, 0.2, 0.3];
        let (comparisons, passes) = drive(&mut values);
        assert_eq!(passes, 1);
        assert_eq!(comparisons, 2);
    }

    #[test]
    fn two_values_are_ordered_after_one_comparison() {
        let mut values = [0.8, 0.2];
        let mut state = BubbleState::new();
        assert_eq!(state.advance(&mut values), PassStep::PassComplete);
        assert_eq!(values, [0.2, 0.8]);
        // The follow-up pass only confirms completion
        assert_eq!(state.advance(&mut values), PassStep::SortDone);
        assert_eq!(state.swaps(), 1);
    }

    #[test]
    fn index_wraps_after_a_dirty_pass() {
        let mut values = [0.5, 0.4, 0.3];
        let mut state = BubbleState::new();
        assert_eq!(state.advance(&mut values), PassStep::MoreWork);
        assert_eq!(state.index(), 1);
        assert_eq!(state.advance(&mut values), PassStep::PassComplete);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn reverse_order_ends_sorted() {
        let mut values: Vec<f32> = (0..8).rev().map(|i| i as f32 / 8.0).collect();
        drive(&mut values);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }
}
