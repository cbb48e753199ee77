pub mod state;

pub use state::{
    CatalogEvent, CatalogViewState, Effect, PendingSwitch, Transition, ViewPhase,
    CATEGORY_SWITCH_DELAY_MS,
};
