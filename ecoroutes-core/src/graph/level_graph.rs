use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{AggregatedEdge, AggregationLevel};
use crate::selection::{SelectionPredicate, SelectionState};

/// nodes and edges of one aggregation level. node order is the order names
/// were first seen in the route table and drives the chord layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelGraph {
    pub level: AggregationLevel,
    pub nodes: Vec<String>,
    pub edges: Vec<AggregatedEdge>,
}

impl LevelGraph {
    pub fn new(level: AggregationLevel, nodes: Vec<String>, edges: Vec<AggregatedEdge>) -> Self {
        Self {
            level,
            nodes,
            edges,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn edges_touching<'a>(&'a self, node: &'a str) -> impl Iterator<Item = &'a AggregatedEdge> {
        self.edges.iter().filter(move |e| e.touches(node))
    }

    /// sum of the weights of all edges incident to `node`
    pub fn incident_weight(&self, node: &str) -> f64 {
        self.edges_touching(node).map(|e| e.weight).sum()
    }

    /// the subgraph visible under a selection of countries (city and country
    /// levels) or regions (region level). city edges are tested on the countries
    /// of their endpoints. kept nodes are those incident to a kept edge.
    pub fn filter_by_selection(
        &self,
        selection: &SelectionState,
        predicate: SelectionPredicate,
    ) -> LevelGraph {
        let edges = self
            .edges
            .iter()
            .filter(|e| match self.level {
                AggregationLevel::City => match (&e.source_country, &e.target_country) {
                    (Some(src), Some(dst)) => predicate.accepts(selection, src, dst),
                    _ => false,
                },
                AggregationLevel::Country | AggregationLevel::Region => {
                    predicate.accepts(selection, &e.source, &e.target)
                }
            })
            .cloned()
            .collect::<Vec<_>>();
        let incident: HashSet<&str> = edges
            .iter()
            .flat_map(|e| [e.source.as_str(), e.target.as_str()])
            .collect();
        let nodes = self
            .nodes
            .iter()
            .filter(|n| incident.contains(n.as_str()))
            .cloned()
            .collect();
        LevelGraph {
            level: self.level,
            nodes,
            edges,
        }
    }
}
