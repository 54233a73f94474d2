use super::*;
use crate::graph::load::{parse_graph, WeightPolicy};
use crate::graph::Graph;

fn entry(cost: Cost, node: &str, path: &[&str]) -> HeapEntry {
    HeapEntry {
        accumulated_cost: cost,
        node_id: node.to_string(),
        path: path.iter().map(|s| s.to_string()).collect(),
    }
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let cheap = entry(1, "B", &["A", "B"]);
    let dear = entry(2, "A", &["A"]);
    let cheap_c = entry(1, "C", &["A", "C"]);

    // Lower cost wins regardless of node id
    assert_eq!(cheap.cmp(&dear), Ordering::Less);
    assert_eq!(dear.cmp(&cheap), Ordering::Greater);

    // Equal costs fall back to node id, then path
    assert_eq!(cheap.cmp(&cheap_c), Ordering::Less);
    assert_eq!(
        entry(3, "D", &["A", "B", "D"]).cmp(&entry(3, "D", &["A", "C", "D"])),
        Ordering::Less
    );

    assert_eq!(cheap, cheap.clone());
    assert_ne!(cheap, cheap_c);
}

#[test]
fn test_min_heap_pops_cheapest_first() {
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(entry(5, "A", &["A"])));
    heap.push(Reverse(entry(1, "Z", &["Z"])));
    heap.push(Reverse(entry(1, "M", &["M"])));

    let order: Vec<String> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.node_id)).collect();
    assert_eq!(order, vec!["M", "Z", "A"]);
}

#[test]
fn test_ucs_finds_cheapest_path() {
    let g = parse_graph("A:B:1,C:4\nB:C:2,D:5\nC:D:1", WeightPolicy::default()).unwrap();

    let result = ucs_search(&g, "A", "D").unwrap();
    assert_eq!(result.algorithm, Algorithm::Ucs);
    assert_eq!(result.joined_exploration_order(""), "ABCD");
    assert_eq!(result.joined_path(""), "ABCD");
    assert_eq!(result.depth, 3);
    assert_eq!(result.cost, 4);
}

#[test]
fn test_ucs_prefers_cheaper_parallel_edge() {
    let mut g = Graph::new();
    g.add_edge("A", "B", 3);
    g.add_edge("A", "B", 1);

    let result = ucs_search(&g, "A", "B").unwrap();
    assert_eq!(result.cost, 1);
    assert_eq!(result.path, vec!["A", "B"]);
}

#[test]
fn test_ucs_stale_entries_are_not_logged_twice() {
    // C is pushed at cost 5 (direct) and cost 2 (via B); only the cheaper pop is logged
    let g = parse_graph("A:B:1,C:5\nB:C:1", WeightPolicy::default()).unwrap();

    assert!(ucs_search(&g, "A", "Z").is_none());

    let result = ucs_search(&g, "A", "C").unwrap();
    assert_eq!(result.exploration_order, vec!["A", "B", "C"]);
    assert_eq!(result.cost, 2);
}

#[test]
fn test_ucs_equal_cost_tie_breaks_on_node_id() {
    let g = parse_graph("S:Y:2,X:2\nX:G:1\nY:G:1", WeightPolicy::default()).unwrap();

    let result = ucs_search(&g, "S", "G").unwrap();
    assert_eq!(result.exploration_order, vec!["S", "X", "Y", "G"]);
    assert_eq!(result.path, vec!["S", "X", "G"]);
    assert_eq!(result.cost, 3);
}

#[test]
fn test_ucs_zero_weight_cycle_terminates() {
    let g = parse_graph("A:B:0,A:0\nB:A:0", WeightPolicy::default()).unwrap();
    assert!(ucs_search(&g, "A", "C").is_none());
}

#[test]
fn test_ucs_negative_weights_still_terminate() {
    // Finalize-on-pop commits to B at cost 1 before the -10 edge is seen
    let g = parse_graph("A:B:1,C:2\nC:B:-10", WeightPolicy::AllowNegative).unwrap();

    let result = ucs_search(&g, "A", "B").unwrap();
    assert_eq!(result.path, vec!["A", "B"]);
    assert_eq!(result.cost, 1);
}

#[test]
fn test_ucs_start_is_goal() {
    let g = parse_graph("A:B:1", WeightPolicy::default()).unwrap();
    let result = ucs_search(&g, "A", "A").unwrap();
    assert_eq!(result.path, vec!["A"]);
    assert_eq!(result.exploration_order, vec!["A"]);
    assert_eq!(result.depth, 0);
    assert_eq!(result.cost, 0);
}
