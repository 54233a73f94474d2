//! JSON search output

use super::{OutcomeView, SearchOutcome};
use graphwalk_core::error::Result;

/// A single outcome renders as an object; several render as an array
pub fn render(outcomes: &[SearchOutcome<'_>]) -> Result<String> {
    let views: Vec<OutcomeView> = outcomes.iter().map(OutcomeView::from).collect();

    // Serialized straight to text: costs may exceed the range of `Value` numbers
    let rendered = match views.as_slice() {
        [single] => serde_json::to_string_pretty(single)?,
        _ => serde_json::to_string_pretty(&views)?,
    };

    Ok(format!("{rendered}\n"))
}
