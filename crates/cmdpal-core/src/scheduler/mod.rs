//! Interaction-aware refresh scheduling.
//!
//! Timers keep firing on their own cadence; this module only decides whether a
//! tick is allowed to refresh. A burst of user activity closes the gate for a
//! fixed delay so content doesn't shift under the pointer.

mod clock;
mod gate;
mod interactions;

pub use clock::{Clock, ManualClock, SystemClock};
pub use gate::RefreshGate;
pub use interactions::{
    BURST_THRESHOLD, BURST_WINDOW, INTERACTION_HISTORY, InteractionClock, InteractionLog,
    SUPPRESSION_DELAY,
};
