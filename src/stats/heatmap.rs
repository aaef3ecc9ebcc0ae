use super::types::{HeatMapData, HeatMapZone};
use crate::cli::types::{MatchId, PlayerId};
use crate::model::{FieldCoordinates, LiveEvent, FIELD_MAX};

pub const DEFAULT_HEAT_MAP_COLUMNS: usize = 6;
pub const DEFAULT_HEAT_MAP_ROWS: usize = 4;

/// Grid heat map of where a player's events happened.
///
/// The field is split into `columns x rows` equal zones, listed row by row
/// from the top-left. Events of types recorded without a field position are
/// skipped. A zero dimension is treated as 1.
pub fn compute_heat_map(
    player_id: &PlayerId,
    match_id: &MatchId,
    events: &[LiveEvent],
    columns: usize,
    rows: usize,
) -> HeatMapData {
    let columns = columns.max(1);
    let rows = rows.max(1);
    let width = FIELD_MAX / columns as f64;
    let height = FIELD_MAX / rows as f64;

    let mut touches = vec![0u32; columns * rows];
    for event in events
        .iter()
        .filter(|e| &e.player_id == player_id && e.event_type.requires_field_position())
    {
        let FieldCoordinates { x, y } = event.coordinates.clamped();
        let col = ((x / width) as usize).min(columns - 1);
        let row = ((y / height) as usize).min(rows - 1);
        touches[row * columns + col] += 1;
    }

    let busiest = touches.iter().copied().max().unwrap_or(0);
    let zones = touches
        .iter()
        .enumerate()
        .map(|(i, &count)| HeatMapZone {
            x: (i % columns) as f64 * width,
            y: (i / columns) as f64 * height,
            width,
            height,
            touches: count,
            intensity: if busiest == 0 {
                0.0
            } else {
                count as f64 / busiest as f64
            },
        })
        .collect();

    HeatMapData {
        player_id: player_id.clone(),
        match_id: match_id.clone(),
        zones,
    }
}
