//! Domain model: match, rosters, events and the event-type taxonomy.

pub mod coordinates;
pub mod event;
pub mod formations;
pub mod match_data;
pub mod taxonomy;

#[cfg(test)]
mod tests;

pub use coordinates::{FieldCoordinates, FIELD_MAX, FIELD_MIN};
pub use event::{EventPatch, LiveEvent, Metadata, NewEvent};
pub use formations::{apply_formation, find_formation, formation_names, Formation, FORMATIONS};
pub use match_data::{Match, MatchPatch, Player, Team};
pub use taxonomy::{EventType, EventTypeInfo, SubOption, EVENT_TYPES};
