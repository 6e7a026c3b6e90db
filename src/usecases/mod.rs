//! Application use cases. Orchestrate domain logic via ports.

pub mod composer;
pub mod library;
pub mod view_state;

pub use composer::ComposerService;
pub use library::{Illustration, LibraryService};
pub use view_state::{
    LoadState, MovementField, MovementFlow, Screen, ViewState, WeeklyField, WeeklyFlow,
    COPIED_RESET_SECS,
};
