//! Explored-set and expansion-budget lock tests.

use std::collections::HashSet;

use forage_harness::worlds::maze::{GameScore, MazeWorld, OPEN};
use forage_search::policy::{StrategyV1, DEFAULT_MAX_EXPANSIONS};
use forage_search::report::TerminationReasonV1;
use forage_search::search::run_branch;
use lock_tests::{binary_tree, chain, expanded_states, policy, ring, STRATEGIES};

#[test]
fn cyclic_graph_terminates_without_budget() {
    for strategy in STRATEGIES {
        let g = ring(12);
        let branch = run_branch(0, &g, &g, &policy(strategy, None)).unwrap();

        let states = expanded_states(&branch);
        let unique: HashSet<u32> = states.iter().copied().collect();
        assert_eq!(states.len(), 12, "{strategy:?}");
        assert_eq!(unique.len(), 12, "{strategy:?}: a state was expanded twice");
        assert!(matches!(
            branch.termination,
            TerminationReasonV1::FrontierExhausted { .. }
        ));
        assert_eq!(g.enumerated(), states, "actions listed once per expansion");
    }
}

#[test]
fn explored_successors_are_suppressed_not_counted() {
    let g = ring(3);
    let branch = run_branch(0, &g, &g, &policy(StrategyV1::BreadthFirst, None)).unwrap();
    let root = &branch.events[0];
    // "stay" leads back to the explored root.
    assert_eq!(root.duplicates_suppressed, 1);
    assert_eq!(root.children.len(), 2);
    let suppressed: u64 = branch.events.iter().map(|e| e.duplicates_suppressed).sum();
    let pushed: usize = branch.events.iter().map(|e| e.children.len()).sum();
    assert_eq!(branch.expansions, pushed as u64);
    assert_eq!(suppressed + branch.expansions, 9, "3 states x 3 actions");
}

#[test]
fn default_budget_caps_an_endless_chain() {
    for strategy in STRATEGIES {
        let g = chain(10_000);
        let branch = run_branch(0, &g, &g, &policy(strategy, Some(DEFAULT_MAX_EXPANSIONS))).unwrap();
        assert_eq!(branch.expansions, 50);
        assert_eq!(branch.events.len(), 50);
        let concluding = branch.nodes.get(branch.concluding_node()).unwrap();
        assert_eq!(concluding.depth, 49, "{strategy:?}");
        assert!(matches!(
            branch.termination,
            TerminationReasonV1::BudgetExhausted { .. }
        ));
    }
}

#[test]
fn full_expansion_landing_on_the_cap_concludes() {
    let g = binary_tree(6);
    let branch = run_branch(0, &g, &g, &policy(StrategyV1::BreadthFirst, Some(50))).unwrap();
    assert_eq!(branch.expansions, 50);
    assert_eq!(branch.events.len(), 25);
    assert!(branch.events.iter().all(|e| !e.budget_cut));
    assert_eq!(
        branch.termination,
        TerminationReasonV1::BudgetExhausted {
            node_id: branch.events[24].node_id
        }
    );
}

#[test]
fn budget_cut_mid_expansion_concludes_at_the_expanding_node() {
    let g = binary_tree(6);
    let branch = run_branch(0, &g, &g, &policy(StrategyV1::BreadthFirst, Some(49))).unwrap();
    assert_eq!(branch.expansions, 49);
    let last = branch.events.last().unwrap();
    assert!(last.budget_cut);
    assert_eq!(last.children.len(), 1);
    assert_eq!(branch.concluding_node(), last.node_id);
}

#[test]
fn maze_branches_respect_the_budget() {
    let world = MazeWorld::from_text(OPEN).unwrap();
    let root = world.initial_state();
    for strategy in STRATEGIES {
        let branch = run_branch(root.clone(), &world, &GameScore, &policy(strategy, Some(50))).unwrap();
        assert!(branch.expansions <= 50, "{strategy:?}: {}", branch.expansions);
        let states = expanded_states(&branch);
        let unique: HashSet<_> = states.iter().cloned().collect();
        assert_eq!(unique.len(), states.len(), "{strategy:?}");
    }
}

#[test]
fn win_at_branch_root_concludes_immediately() {
    let g = chain(3).win(0);
    let branch = run_branch(0, &g, &g, &policy(StrategyV1::DepthFirst, None)).unwrap();
    assert_eq!(branch.termination, TerminationReasonV1::WinFound { node_id: 0 });
    assert!(branch.events.is_empty());
    assert!(g.enumerated().is_empty());
}
