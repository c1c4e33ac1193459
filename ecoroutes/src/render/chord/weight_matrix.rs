use std::collections::HashMap;

use ecoroutes_core::graph::LevelGraph;

use crate::render::RenderError;

/// square matrix of edge weights indexed by node order. an edge contributes
/// its weight at both `[s][t]` and `[t][s]`, so row sums equal the total weight
/// incident to a node.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    nodes: Vec<String>,
    values: Vec<Vec<f64>>,
    counts: Vec<Vec<usize>>,
}

impl WeightMatrix {
    /// builds the matrix of one aggregation level. edges naming a node that is
    /// not in the node list are ignored.
    pub fn from_level(graph: &LevelGraph) -> WeightMatrix {
        let n = graph.nodes.len();
        let index = graph
            .nodes
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.as_str(), idx))
            .collect::<HashMap<_, _>>();
        let mut values = vec![vec![0.0; n]; n];
        let mut counts = vec![vec![0; n]; n];
        for edge in graph.edges.iter() {
            let (Some(&s), Some(&t)) = (
                index.get(edge.source.as_str()),
                index.get(edge.target.as_str()),
            ) else {
                log::debug!(
                    "skipping {} edge {} -> {} with unknown endpoint",
                    graph.level,
                    edge.source,
                    edge.target
                );
                continue;
            };
            values[s][t] += edge.weight;
            counts[s][t] += 1;
            if s != t {
                values[t][s] += edge.weight;
                counts[t][s] += 1;
            }
        }
        WeightMatrix {
            nodes: graph.nodes.clone(),
            values,
            counts,
        }
    }

    /// wraps precomputed rows, each counted as a single edge.
    pub fn from_rows(nodes: Vec<String>, rows: Vec<Vec<f64>>) -> Result<WeightMatrix, RenderError> {
        if rows.len() != nodes.len() {
            return Err(RenderError::MatrixShapeError {
                rows: rows.len(),
                cols: nodes.len(),
            });
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != nodes.len()) {
            return Err(RenderError::MatrixShapeError {
                rows: rows.len(),
                cols: bad.len(),
            });
        }
        let counts = rows
            .iter()
            .map(|r| r.iter().map(|v| usize::from(*v != 0.0)).collect())
            .collect();
        Ok(WeightMatrix {
            nodes,
            values: rows,
            counts,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn index_of(&self, node: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n == node)
    }

    /// accumulated weight between `i` and `j`, zero when out of range
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or_default()
    }

    pub fn row_sum(&self, i: usize) -> f64 {
        self.values.get(i).map(|row| row.iter().sum()).unwrap_or_default()
    }

    /// mean weight of the edges between `i` and `j`, None when there are none
    pub fn mean(&self, i: usize, j: usize) -> Option<f64> {
        let count = self.counts.get(i).and_then(|row| row.get(j)).copied()?;
        if count == 0 {
            None
        } else {
            Some(self.get(i, j) / count as f64)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ecoroutes_core::graph::{AggregatedEdge, AggregationLevel};

    fn edge(source: &str, target: &str, weight: f64) -> AggregatedEdge {
        AggregatedEdge {
            source: source.to_owned(),
            target: target.to_owned(),
            weight,
            source_country: None,
            target_country: None,
            source_region: String::new(),
            target_region: String::new(),
        }
    }

    fn graph() -> LevelGraph {
        LevelGraph::new(
            AggregationLevel::Country,
            vec![
                String::from("France"),
                String::from("Germany"),
                String::from("Spain"),
            ],
            vec![
                edge("France", "Germany", 60.0),
                edge("Germany", "France", 40.0),
                edge("France", "Spain", 70.0),
                edge("France", "Atlantis", 10.0),
            ],
        )
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let matrix = WeightMatrix::from_level(&graph());
        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
        assert_eq!(matrix.get(0, 1), 100.0);
        assert_eq!(matrix.mean(0, 1), Some(50.0));
        assert_eq!(matrix.mean(1, 2), None);
    }

    #[test]
    fn test_row_sum_is_incident_weight() {
        let g = graph();
        let matrix = WeightMatrix::from_level(&g);
        assert_eq!(matrix.row_sum(0), 170.0);
        assert_eq!(matrix.row_sum(2), g.incident_weight("Spain"));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let result = WeightMatrix::from_rows(
            vec![String::from("a"), String::from("b")],
            vec![vec![0.0, 1.0], vec![1.0]],
        );
        assert!(matches!(
            result,
            Err(RenderError::MatrixShapeError { rows: 2, cols: 1 })
        ));
    }
}
