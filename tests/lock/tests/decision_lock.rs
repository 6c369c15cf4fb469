//! Per-turn decision lock tests: short-circuits, path scoring, tie
//! handling and report determinism.

use forage_harness::worlds::table_graph::TableGraph;
use forage_search::policy::{LosePolicyV1, SearchPolicyV1, StrategyV1};
use forage_search::report::{CandidateOutcomeV1, DecisionReasonV1};
use forage_search::selector::choose_action;
use lock_tests::{policy, ring, STRATEGIES};

#[test_log::test]
fn immediate_win_is_chosen_before_any_branch_search() {
    let g = TableGraph::from_edges(&[(0, "a", 1), (0, "b", 2), (0, "c", 3), (1, "x", 4)])
        .win(3)
        .win(4);
    let d = choose_action(&g, &0, &g, &SearchPolicyV1::default()).unwrap();
    assert_eq!(d.action, "c");
    assert_eq!(d.reason, DecisionReasonV1::ImmediateWin);
    assert_eq!(g.enumerated(), vec![0]);
}

#[test_log::test]
fn winning_branch_returns_its_first_action() {
    for strategy in STRATEGIES {
        let g = TableGraph::from_edges(&[
            (0, "a", 1),
            (0, "b", 2),
            (1, "x", 5),
            (2, "y", 6),
            (6, "z", 7),
        ])
        .win(7)
        .value(5, 100);
        let d = choose_action(&g, &0, &g, &policy(strategy, None)).unwrap();
        assert_eq!(d.action, "b", "{strategy:?}");
        assert_eq!(d.reason, DecisionReasonV1::BranchShortCircuit);
    }
}

#[test_log::test]
fn path_integral_beats_single_best_leaf() {
    // Branch a: 1 -> 11 -> 12 scores 6 + 6; branch b: 2 -> 21 scores 10.
    let g = TableGraph::from_edges(&[(0, "a", 1), (0, "b", 2), (1, "p", 11), (11, "q", 12), (2, "r", 21)])
        .value(11, 6)
        .value(12, 6)
        .value(21, 10);
    let d = choose_action(&g, &0, &g, &policy(StrategyV1::BreadthFirst, None)).unwrap();
    assert_eq!(d.action, "a");
    let scores: Vec<i64> = d
        .report
        .candidates
        .iter()
        .map(|c| match c.outcome {
            CandidateOutcomeV1::Searched { score, .. } => score,
            ref other => panic!("unexpected outcome {other:?}"),
        })
        .collect();
    assert_eq!(scores, vec![12, 10]);
}

#[test_log::test]
fn equal_scores_keep_the_first_candidate() {
    for strategy in STRATEGIES {
        let g = ring(5);
        let first = choose_action(&g, &0, &g, &policy(strategy, Some(50))).unwrap();
        assert_eq!(first.action, "fwd", "{strategy:?}");
        for _ in 0..5 {
            let again = choose_action(&g, &0, &g, &policy(strategy, Some(50))).unwrap();
            assert_eq!(again.action, first.action);
            assert_eq!(again.report.digest().unwrap(), first.report.digest().unwrap());
        }
    }
}

#[test_log::test]
fn prune_branch_avoids_a_deep_loss() {
    let g = TableGraph::from_edges(&[(0, "a", 1), (0, "b", 2), (1, "x", 3), (3, "y", 4), (2, "z", 5)])
        .lose(4)
        .value(3, 50)
        .value(5, 1);
    let expand = choose_action(&g, &0, &g, &SearchPolicyV1::default()).unwrap();
    assert_eq!(expand.action, "a");

    let prune = SearchPolicyV1 {
        lose_policy: LosePolicyV1::PruneBranch,
        ..SearchPolicyV1::default()
    };
    let d = choose_action(&g, &0, &g, &prune).unwrap();
    assert_eq!(d.action, "b");
}

#[test_log::test]
fn report_is_canonical_json() {
    let g = ring(4);
    let d = choose_action(&g, &0, &g, &SearchPolicyV1::default()).unwrap();
    let bytes = d.report.to_canonical_json_bytes().unwrap();
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(!text.contains(' '), "compact form");

    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed["chosen_index"], 0);
    assert_eq!(parsed["candidates"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["policy"]["max_expansions"], 50);
}
