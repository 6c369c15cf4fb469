//! Frontier discipline lock tests: the expansion order of each strategy,
//! read back from the branch's expansion events.

use forage_search::policy::StrategyV1;
use forage_search::report::TerminationReasonV1;
use forage_search::scorer::Evaluator;
use forage_search::search::run_branch;
use lock_tests::{binary_tree, policy};

#[test]
fn breadth_first_expands_level_by_level() {
    let g = binary_tree(4);
    let branch = run_branch(0, &g, &g, &policy(StrategyV1::BreadthFirst, None)).unwrap();

    assert_eq!(branch.events.len(), 31);
    let depths: Vec<u32> = branch.events.iter().map(|e| e.depth).collect();
    assert!(depths.windows(2).all(|w| w[0] <= w[1]), "{depths:?}");
    let ids: Vec<u64> = branch.events.iter().map(|e| e.node_id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "FIFO pops in creation order");
}

#[test]
fn depth_first_follows_the_last_pushed_child() {
    let g = binary_tree(4);
    let branch = run_branch(0, &g, &g, &policy(StrategyV1::DepthFirst, None)).unwrap();

    assert_eq!(branch.events.len(), 31);
    for pair in branch.events.windows(2) {
        if let Some(last) = pair[0].children.last() {
            assert_eq!(pair[1].node_id, *last);
        }
    }
    let first_leaf = branch.events.iter().find(|e| e.children.is_empty()).unwrap();
    assert_eq!(first_leaf.depth, 4, "depth-first reaches a leaf first");
}

#[test]
fn best_first_never_pops_past_a_cheaper_waiting_node() {
    let g = binary_tree(4);
    let branch = run_branch(0, &g, &g, &policy(StrategyV1::BestFirst, None)).unwrap();

    let key = |id: u64| {
        let n = branch.nodes.get(id).unwrap();
        (n.f_cost(), n.node_id)
    };
    // created_in[id] = index of the event that pushed node `id`.
    let mut created_in = vec![0usize; branch.nodes.len()];
    for (i, e) in branch.events.iter().enumerate() {
        for c in &e.children {
            created_in[usize::try_from(*c).unwrap()] = i;
        }
    }
    for (i, popped) in branch.events.iter().enumerate() {
        for later in &branch.events[i + 1..] {
            let id = usize::try_from(later.node_id).unwrap();
            if later.node_id != 0 && created_in[id] < i {
                assert!(
                    key(popped.node_id) <= key(later.node_id),
                    "node {} popped before cheaper node {}",
                    popped.node_id,
                    later.node_id
                );
            }
        }
    }
}

#[test]
fn best_first_priority_uses_negated_evaluation() {
    let g = binary_tree(2);
    let branch = run_branch(0, &g, &g, &policy(StrategyV1::BestFirst, None)).unwrap();
    for node in (1..branch.nodes.len() as u64).filter_map(|id| branch.nodes.get(id)) {
        assert_eq!(node.eval_term, -g.evaluate(&node.state));
    }
    // Root, then "r" (state 2) before "l" (state 1).
    let order: Vec<u32> = branch
        .events
        .iter()
        .map(|e| branch.nodes.get(e.node_id).unwrap().state)
        .collect();
    assert_eq!(&order[..2], &[0, 2]);
}

#[test]
fn frontier_exhaustion_concludes_on_last_popped() {
    let g = binary_tree(3);
    for strategy in lock_tests::STRATEGIES {
        let branch = run_branch(0, &g, &g, &policy(strategy, None)).unwrap();
        let last = branch.events.last().unwrap().node_id;
        assert_eq!(
            branch.termination,
            TerminationReasonV1::FrontierExhausted { node_id: last },
            "{strategy:?}"
        );
    }
}
