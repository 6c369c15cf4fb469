//! `TableGraph`: an explicit, instrumented state graph.
//!
//! States are `u32` ids and actions are string labels. Edges keep their
//! insertion order, which is the legal-action order. Every
//! `legal_actions` call is logged so tests can tell which states a search
//! touched.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use log::warn;

use forage_search::contract::StateGraphView;
use forage_search::scorer::Evaluator;

#[derive(Debug, Default)]
pub struct TableGraph {
    edges: BTreeMap<u32, Vec<(String, u32)>>,
    wins: BTreeSet<u32>,
    loses: BTreeSet<u32>,
    values: BTreeMap<u32, i64>,
    enumerated: RefCell<Vec<u32>>,
}

impl TableGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(from, label, to)` triples.
    #[must_use]
    pub fn from_edges(edges: &[(u32, &str, u32)]) -> Self {
        edges
            .iter()
            .fold(Self::new(), |g, (from, label, to)| g.edge(*from, label, *to))
    }

    #[must_use]
    pub fn edge(mut self, from: u32, label: &str, to: u32) -> Self {
        self.edges
            .entry(from)
            .or_default()
            .push((label.to_string(), to));
        self
    }

    #[must_use]
    pub fn win(mut self, state: u32) -> Self {
        self.wins.insert(state);
        self
    }

    #[must_use]
    pub fn lose(mut self, state: u32) -> Self {
        self.loses.insert(state);
        self
    }

    /// Evaluator value of `state` (0 when unset).
    #[must_use]
    pub fn value(mut self, state: u32, value: i64) -> Self {
        self.values.insert(state, value);
        self
    }

    /// States whose legal actions were listed, in call order.
    #[must_use]
    pub fn enumerated(&self) -> Vec<u32> {
        self.enumerated.borrow().clone()
    }

    pub fn clear_log(&self) {
        self.enumerated.borrow_mut().clear();
    }
}

impl StateGraphView for TableGraph {
    type State = u32;
    type Action = String;

    fn legal_actions(&self, state: &u32) -> Vec<String> {
        self.enumerated.borrow_mut().push(*state);
        self.edges
            .get(state)
            .map(|out| out.iter().map(|(label, _)| label.clone()).collect())
            .unwrap_or_default()
    }

    fn successor(&self, state: &u32, action: &String) -> u32 {
        let target = self
            .edges
            .get(state)
            .and_then(|out| out.iter().find(|(label, _)| label == action))
            .map(|(_, to)| *to);
        target.unwrap_or_else(|| {
            warn!("no edge {action:?} from state {state}; state unchanged");
            *state
        })
    }

    fn is_win(&self, state: &u32) -> bool {
        self.wins.contains(state)
    }

    fn is_lose(&self, state: &u32) -> bool {
        self.loses.contains(state)
    }
}

impl Evaluator<u32> for TableGraph {
    fn evaluate(&self, state: &u32) -> i64 {
        self.values.get(state).copied().unwrap_or(0)
    }
}
