//! Domain types for board reconciliation.

mod drag;
mod view;

pub use drag::{DropEvent, DropOutcome};
pub use view::BoardView;
