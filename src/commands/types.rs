//! Event taxonomy listing

use crate::model::{SubOption, EVENT_TYPES};

fn codes(options: &[SubOption]) -> String {
    options
        .iter()
        .map(|o| o.code)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print every built-in event type with its capture shape and vocabularies.
pub fn handle_types() {
    for info in EVENT_TYPES.iter() {
        let shape = match (info.pitch_position, info.dual_position) {
            (false, _) => "no position",
            (true, false) => "position",
            (true, true) => "origin -> destination",
        };
        println!(
            "{:<22} {:<26} {}{}",
            info.code,
            info.label,
            shape,
            if info.legacy { "  (legacy)" } else { "" }
        );
        if !info.sub_actions.is_empty() {
            println!("    sub-actions: {}", codes(info.sub_actions));
        }
        if !info.sub_events.is_empty() {
            println!("    sub-events:  {}", codes(info.sub_events));
        }
    }
}
