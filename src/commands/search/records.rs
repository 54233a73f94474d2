//! Records search output
//!
//! One `H` header line per strategy, followed by `P` (path),
//! `O` (order of exploration), `D` (depth) and `C` (cost) lines when the
//! goal was reached.

use super::SearchOutcome;
use graphwalk_core::format::escape_record_value;

pub fn render(outcomes: &[SearchOutcome<'_>], separator: &str) -> String {
    let mut out = String::new();

    for outcome in outcomes {
        out.push_str(&format!(
            "H algorithm={} start={} goal={} found={}\n",
            outcome.algorithm,
            escape_record_value(outcome.start),
            escape_record_value(outcome.goal),
            outcome.result.is_some()
        ));

        if let Some(result) = &outcome.result {
            out.push_str(&format!(
                "P {}\n",
                escape_record_value(&result.joined_path(separator))
            ));
            out.push_str(&format!(
                "O {}\n",
                escape_record_value(&result.joined_exploration_order(separator))
            ));
            out.push_str(&format!("D {}\n", result.depth));
            out.push_str(&format!("C {}\n", result.cost));
        }
    }

    out
}
