use chain_dag::Graph;
use proptest::prelude::*;

/// Each entry picks up to two uplinks among the vertices created so far.
fn build(layout: &[Vec<usize>]) -> Graph {
    let mut g = Graph::new();
    for (i, picks) in layout.iter().enumerate() {
        let mut uplinks: Vec<u32> = Vec::new();
        if i > 0 {
            for p in picks {
                let u = (p % i) as u32;
                if !uplinks.contains(&u) {
                    uplinks.push(u);
                }
            }
        }
        g.add_vertex(&uplinks).unwrap();
    }
    g
}

fn graph_layout() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0usize..64, 0..3), 1..24)
}

proptest! {
    #[test]
    fn ids_match_positions(layout in graph_layout()) {
        let g = build(&layout);
        for (i, v) in g.vertices().iter().enumerate() {
            prop_assert_eq!(v.id() as usize, i);
        }
        for (i, e) in g.edges().iter().enumerate() {
            prop_assert_eq!(e.id() as usize, i);
            prop_assert!(g.vertices()[e.top() as usize].downlinks().contains(&e.id()));
            prop_assert!(g.vertices()[e.bottom() as usize].uplinks().contains(&e.id()));
        }
        prop_assert_eq!(g.chain_first(), Some(0));
        prop_assert_eq!(g.chain_last(), Some(layout.len() as u32 - 1));
    }

    #[test]
    fn uplink_edges_follow_chain_order(layout in graph_layout()) {
        let g = build(&layout);
        for e in g.edges() {
            prop_assert!(g.before(e.bottom()).contains(&e.top()));
        }
    }

    #[test]
    fn available_connections_never_close_a_cycle(layout in graph_layout(), pick in 0usize..64) {
        let mut g = build(&layout);
        let v = (pick % layout.len()) as u32;
        for proto in g.available_connections(v) {
            prop_assert!(!g.is_below(proto.bottom, v));
            prop_assert!(!g.directly_below(v).contains(&proto.bottom));
        }
        for proto in g.available_connections(v) {
            if g.add_edge(proto.top, proto.bottom).is_ok() {
                prop_assert!(!g.is_below(v, v));
            }
        }
        for u in 0..g.vertices().len() as u32 {
            prop_assert!(!g.is_below(u, u));
        }
    }

    #[test]
    fn lowest_common_ancestor_is_nearest_shared_predecessor(layout in graph_layout(), a in 0usize..64, b in 0usize..64) {
        let g = build(&layout);
        let n = layout.len();
        let (v0, v1) = ((a % n) as u32, (b % n) as u32);
        let expected = v0.min(v1).checked_sub(1);
        prop_assert_eq!(g.lowest_common_ancestor(v0, v1), expected);
        prop_assert_eq!(g.common_ancestors(v0, v1).len() as u32, v0.min(v1));
    }
}
