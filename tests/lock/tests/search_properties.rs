//! Property tests over random finite graphs.
//!
//! - the counter never exceeds the budget
//! - no state is expanded twice within a branch
//! - the concluding node exists and short-circuits end on a win
//! - identical inputs give identical decision reports

use std::collections::HashSet;

use forage_harness::worlds::table_graph::TableGraph;
use forage_search::error::SearchError;
use forage_search::policy::{LosePolicyV1, SearchPolicyV1, StrategyV1};
use forage_search::search::run_branch;
use forage_search::selector::choose_action;
use lock_tests::expanded_states;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct RandomGraph {
    edges: Vec<(u32, u32)>,
    wins: Vec<u32>,
    loses: Vec<u32>,
    values: Vec<i64>,
}

impl RandomGraph {
    fn build(&self) -> TableGraph {
        let mut g = TableGraph::new();
        for (i, (from, to)) in self.edges.iter().enumerate() {
            g = g.edge(*from, &format!("e{i}"), *to);
        }
        for w in &self.wins {
            g = g.win(*w);
        }
        for l in &self.loses {
            g = g.lose(*l);
        }
        for (s, v) in (0u32..).zip(&self.values) {
            g = g.value(s, *v);
        }
        g
    }
}

fn arb_graph() -> impl Strategy<Value = RandomGraph> {
    (2u32..24).prop_flat_map(|n| {
        (
            prop::collection::vec((0..n, 0..n), 0..80),
            prop::collection::vec(1..n, 0..3),
            prop::collection::vec(1..n, 0..3),
            prop::collection::vec(-20i64..20, n as usize),
        )
            .prop_map(|(edges, wins, loses, values)| RandomGraph {
                edges,
                wins,
                loses,
                values,
            })
    })
}

fn arb_policy() -> impl Strategy<Value = SearchPolicyV1> {
    (
        prop_oneof![
            Just(StrategyV1::BreadthFirst),
            Just(StrategyV1::DepthFirst),
            Just(StrategyV1::BestFirst),
        ],
        prop::option::of(1u64..60),
        prop_oneof![
            Just(LosePolicyV1::Expand),
            Just(LosePolicyV1::SkipState),
            Just(LosePolicyV1::PruneBranch),
        ],
    )
        .prop_map(|(strategy, max_expansions, lose_policy)| SearchPolicyV1 {
            strategy,
            max_expansions,
            lose_policy,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn branch_invariants_hold(graph in arb_graph(), policy in arb_policy()) {
        let g = graph.build();
        let branch = run_branch(0, &g, &g, &policy).unwrap();

        if let Some(cap) = policy.max_expansions {
            prop_assert!(branch.expansions <= cap);
        }

        let states = expanded_states(&branch);
        let unique: HashSet<u32> = states.iter().copied().collect();
        prop_assert_eq!(unique.len(), states.len());

        let concluding = branch.nodes.get(branch.concluding_node());
        prop_assert!(concluding.is_some());
        if branch.is_short_circuit() {
            let node = concluding.unwrap();
            prop_assert!(graph.wins.contains(&node.state));
        }
    }

    #[test]
    fn decisions_are_deterministic(graph in arb_graph(), policy in arb_policy()) {
        let first = choose_action(&graph.build(), &0, &graph.build(), &policy);
        let second = choose_action(&graph.build(), &0, &graph.build(), &policy);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(&a.action, &b.action);
                prop_assert_eq!(a.report.digest().unwrap(), b.report.digest().unwrap());
                let legal: Vec<u32> = graph.edges.iter().filter(|(f, _)| *f == 0).map(|(_, t)| *t).collect();
                prop_assert!(!legal.is_empty());
                prop_assert!(a.report.candidates.len() == legal.len());
            }
            (Err(a), Err(b)) => {
                prop_assert_eq!(&a, &b);
                prop_assert_eq!(a, SearchError::EmptyLegalActions);
            }
            (a, b) => prop_assert!(false, "diverged: {:?} vs {:?}", a.is_ok(), b.is_ok()),
        }
    }
}
