//! World implementations for agents and tests.

pub mod maze;
pub mod table_graph;
