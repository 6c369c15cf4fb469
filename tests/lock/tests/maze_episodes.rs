//! End-to-end maze episodes through the harness runner.

use forage_harness::agents::{GreedyAgent, RandomAgent, SearchAgent};
use forage_harness::runner::{run_episode, EpisodeOutcomeV1};
use forage_harness::worlds::maze::{GameScore, MazeWorld, CORRIDOR, OPEN, SMALL, TINY};
use forage_kernel::maze::rules::Direction;
use forage_search::policy::{LosePolicyV1, SearchPolicyV1};
use lock_tests::{policy, STRATEGIES};

const GHOST_BEHIND: &str = "\
%%%%%%%
%G P .%
%%%%%%%";

#[test_log::test]
fn every_strategy_clears_the_corridor() {
    let world = MazeWorld::from_text(CORRIDOR).unwrap();
    for strategy in STRATEGIES {
        let mut agent = SearchAgent::new(policy(strategy, None), GameScore);
        let episode = run_episode(&world, &mut agent, world.initial_state(), 20).unwrap();
        assert_eq!(episode.outcome, EpisodeOutcomeV1::Won, "{strategy:?}");
        assert_eq!(episode.actions, vec![Direction::East; 4]);
    }
}

#[test_log::test]
fn agent_outruns_a_trailing_ghost() {
    let world = MazeWorld::from_text(GHOST_BEHIND).unwrap();
    for lose_policy in [
        LosePolicyV1::Expand,
        LosePolicyV1::SkipState,
        LosePolicyV1::PruneBranch,
    ] {
        let policy = SearchPolicyV1 {
            lose_policy,
            ..SearchPolicyV1::default()
        };
        let mut agent = SearchAgent::new(policy, GameScore);
        let episode = run_episode(&world, &mut agent, world.initial_state(), 20).unwrap();
        assert_eq!(episode.outcome, EpisodeOutcomeV1::Won, "{lose_policy:?}");
        assert_eq!(episode.turns, 2);
        assert_eq!(episode.final_score, -2 + 10 + 500);
    }
}

#[test_log::test]
fn episodes_end_within_the_turn_cap() {
    for text in [TINY, SMALL, OPEN] {
        let world = MazeWorld::from_text(text).unwrap();
        for strategy in STRATEGIES {
            let mut agent = SearchAgent::new(policy(strategy, Some(50)), GameScore);
            let episode = run_episode(&world, &mut agent, world.initial_state(), 40).unwrap();
            assert!(episode.turns <= 40);
            assert_eq!(episode.decision_digests.len(), episode.turns as usize);
            if episode.outcome == EpisodeOutcomeV1::TurnLimit {
                assert_eq!(episode.turns, 40);
            }
        }
        let mut greedy = GreedyAgent::new(GameScore, 5);
        let mut random = RandomAgent::new(5);
        let g = run_episode(&world, &mut greedy, world.initial_state(), 40).unwrap();
        let r = run_episode(&world, &mut random, world.initial_state(), 40).unwrap();
        assert!(g.decision_digests.is_empty() && r.decision_digests.is_empty());
    }
}

#[test_log::test]
fn replaying_an_episode_gives_identical_digests() {
    let world = MazeWorld::from_text(SMALL).unwrap();
    let play = || {
        let mut agent = SearchAgent::new(SearchPolicyV1::default(), GameScore);
        run_episode(&world, &mut agent, world.initial_state(), 30).unwrap()
    };
    let (a, b) = (play(), play());
    assert_eq!(a.actions, b.actions);
    assert_eq!(a.decision_digests, b.decision_digests);
    assert_eq!(a.final_score, b.final_score);
}
