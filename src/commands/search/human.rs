//! Human-readable search output

use super::SearchOutcome;

/// Render labeled lines per strategy, or a "no path found" line on a miss
pub fn render(outcomes: &[SearchOutcome<'_>], separator: &str) -> String {
    let mut out = String::new();

    for (index, outcome) in outcomes.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }

        let label = outcome.algorithm.label();
        match &outcome.result {
            Some(result) => {
                out.push_str(&format!(
                    "{label} Path: {}\n",
                    result.joined_path(separator)
                ));
                out.push_str(&format!(
                    "{label} Order of Exploration: {}\n",
                    result.joined_exploration_order(separator)
                ));
                out.push_str(&format!("{label} Depth: {}\n", result.depth));
                out.push_str(&format!("{label} Cost: {}\n", result.cost));
            }
            None => {
                out.push_str(&format!(
                    "{label}: no path found from {} to {}\n",
                    outcome.start, outcome.goal
                ));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::search::test_support::outcome;
    use graphwalk_core::graph::Algorithm;

    #[test]
    fn test_render_found() {
        let rendered = render(&[outcome(Algorithm::Bfs, "A", "D")], "");
        assert_eq!(
            rendered,
            "BFS Path: ABD\nBFS Order of Exploration: ABCD\nBFS Depth: 2\nBFS Cost: 6\n"
        );
    }

    #[test]
    fn test_render_with_separator() {
        let rendered = render(&[outcome(Algorithm::Ucs, "A", "D")], "->");
        assert!(rendered.starts_with("UCS Path: A->B->C->D\n"));
    }

    #[test]
    fn test_render_miss() {
        let rendered = render(&[outcome(Algorithm::Dfs, "D", "A")], "");
        assert_eq!(rendered, "DFS: no path found from D to A\n");
    }

    #[test]
    fn test_render_multiple_blocks_are_separated() {
        let rendered = render(
            &[
                outcome(Algorithm::Dfs, "A", "D"),
                outcome(Algorithm::Bfs, "A", "D"),
            ],
            "",
        );
        assert!(rendered.contains("DFS Cost: 4\n\nBFS Path: ABD\n"));
    }
}
