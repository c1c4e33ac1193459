mod aggregated_edge;
mod aggregation_level;
mod aggregation_rules;
mod edge_weight;
mod level_graph;
mod route_graph;

pub mod graph_ops;

pub use aggregated_edge::AggregatedEdge;
pub use aggregation_level::AggregationLevel;
pub use aggregation_rules::{AggregationRules, DEFAULT_DISTANCE_THRESHOLD, DEFAULT_REGIONS};
pub use edge_weight::EdgeWeight;
pub use level_graph::LevelGraph;
pub use route_graph::RouteGraph;
