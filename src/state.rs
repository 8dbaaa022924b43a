//! Processing-state label for a sandwich moving through the bar.
use super::catalog::closed_set;

closed_set! {
    /// Ordered workflow progress. States only ever move forward and
    /// `Complete` is terminal.
    pub enum ProcessingState: "state" {
        AddingFilling => "ADDING_FILLING",
        Toasting => "TOASTING",
        AddingToppings => "ADDING_TOPPINGS",
        Complete => "COMPLETE",
    }
}

impl ProcessingState {
    pub fn is_terminal(&self) -> bool {
        *self == ProcessingState::Complete
    }
    /// Forward moves only; skipping a state (e.g. no toasting) is fine.
    pub fn can_advance_to(&self, next: ProcessingState) -> bool {
        !self.is_terminal() && next > *self
    }
}
