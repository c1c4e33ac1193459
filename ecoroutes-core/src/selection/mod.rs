mod country_region;
mod interaction_state;
mod selection_predicate;
mod selection_state;

pub use country_region::CountryRegionLookup;
pub use interaction_state::{InteractionEvent, InteractionState};
pub use selection_predicate::SelectionPredicate;
pub use selection_state::SelectionState;
