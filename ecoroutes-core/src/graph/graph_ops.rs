//! the steps of [`super::RouteGraph::build`]. each step is a pure function of
//! its inputs so that the levels can be rebuilt or tested in isolation.
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;

use super::{AggregatedEdge, AggregationRules};
use crate::record::RouteRecord;

/// node names of each level in first-seen order
#[derive(Debug, Clone, Default)]
pub struct NodeSets {
    pub cities: IndexSet<String>,
    pub countries: IndexSet<String>,
    pub regions: IndexSet<String>,
}

/// accumulates city, country and region names over all records, including
/// records too long to produce an edge. blank names are skipped and regions
/// outside the allow-list never become nodes.
pub fn collect_nodes(records: &[RouteRecord], rules: &AggregationRules) -> NodeSets {
    let mut nodes = NodeSets::default();
    for record in records {
        for endpoint in [&record.departure, &record.arrival] {
            insert_name(&mut nodes.cities, &endpoint.city);
            insert_name(&mut nodes.countries, &endpoint.country);
            if rules.allows_region(&endpoint.region) {
                insert_name(&mut nodes.regions, &endpoint.region);
            }
        }
    }
    nodes
}

fn insert_name(set: &mut IndexSet<String>, name: &str) {
    if !name.is_empty() && !set.contains(name) {
        set.insert(name.to_owned());
    }
}

/// one undirected edge per city pair. the first direction found in the table
/// wins; self-loops and routes longer than the distance threshold are skipped.
pub fn create_city_edges(records: &[RouteRecord], rules: &AggregationRules) -> Vec<AggregatedEdge> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut edges = Vec::new();
    for record in records {
        let src = record.departure.city.as_str();
        let dst = record.arrival.city.as_str();
        if src == dst {
            continue;
        }
        if seen.contains(&(src, dst)) || seen.contains(&(dst, src)) {
            continue;
        }
        if record.distance > rules.distance_threshold {
            continue;
        }
        seen.insert((src, dst));
        seen.insert((dst, src));
        edges.push(AggregatedEdge {
            source: src.to_owned(),
            target: dst.to_owned(),
            weight: rules.weight.of(record),
            source_country: Some(record.departure.country.clone()),
            target_country: Some(record.arrival.country.clone()),
            source_region: record.departure.region.clone(),
            target_region: record.arrival.region.clone(),
        });
    }
    edges
}

/// running sum of the city edges collapsing onto one aggregate key
struct EdgeGroup<'a> {
    first: &'a AggregatedEdge,
    weight_sum: f64,
    count: usize,
}

impl EdgeGroup<'_> {
    fn mean(&self) -> f64 {
        self.weight_sum / self.count as f64
    }
}

/// groups city edges by a directed key, dropping edges whose key is None,
/// blank, or whose two key halves are equal. groups keep first-seen order.
fn group_edges<'a, F>(city_edges: &'a [AggregatedEdge], key_fn: F) -> IndexMap<(String, String), EdgeGroup<'a>>
where
    F: Fn(&AggregatedEdge) -> Option<(String, String)>,
{
    let mut groups: IndexMap<(String, String), EdgeGroup<'a>> = IndexMap::new();
    for edge in city_edges {
        let Some(key) = key_fn(edge) else {
            continue;
        };
        if key.0 == key.1 || key.0.is_empty() || key.1.is_empty() {
            continue;
        }
        let group = groups.entry(key).or_insert(EdgeGroup {
            first: edge,
            weight_sum: 0.0,
            count: 0,
        });
        group.weight_sum += edge.weight;
        group.count += 1;
    }
    groups
}

/// country edges: arithmetic mean of the city edges between two countries.
/// regions are taken from the first city edge of each group.
pub fn create_country_edges(city_edges: &[AggregatedEdge]) -> Vec<AggregatedEdge> {
    group_edges(city_edges, |e| {
        Some((e.source_country.clone()?, e.target_country.clone()?))
    })
    .into_iter()
    .map(|((source, target), group)| AggregatedEdge {
        weight: group.mean(),
        source_country: Some(source.clone()),
        target_country: Some(target.clone()),
        source_region: group.first.source_region.clone(),
        target_region: group.first.target_region.clone(),
        source,
        target,
    })
    .collect()
}

/// region edges: arithmetic mean of the city edges between two allowed regions.
pub fn create_region_edges(
    city_edges: &[AggregatedEdge],
    rules: &AggregationRules,
) -> Vec<AggregatedEdge> {
    group_edges(city_edges, |e| {
        if rules.allows_region(&e.source_region) && rules.allows_region(&e.target_region) {
            Some((e.source_region.clone(), e.target_region.clone()))
        } else {
            None
        }
    })
    .into_iter()
    .map(|((source, target), group)| AggregatedEdge {
        weight: group.mean(),
        source_country: None,
        target_country: None,
        source_region: source.clone(),
        target_region: target.clone(),
        source,
        target,
    })
    .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::record::{RouteEndpoint, RouteRecord};

    fn record(src: (&str, &str), dst: (&str, &str), distance: f64, co2: f64) -> RouteRecord {
        RouteRecord {
            id: RouteRecord::route_id(src.0, dst.0),
            departure: RouteEndpoint {
                city: src.0.to_owned(),
                country: src.1.to_owned(),
                region: String::from("Western Europe"),
                ..Default::default()
            },
            arrival: RouteEndpoint {
                city: dst.0.to_owned(),
                country: dst.1.to_owned(),
                region: String::from("Western Europe"),
                ..Default::default()
            },
            distance,
            avg_co2: co2,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_seen_direction_wins() {
        let records = vec![
            record(("A", "X"), ("B", "X"), 100.0, 10.0),
            record(("B", "X"), ("A", "X"), 100.0, 20.0),
        ];
        let edges = create_city_edges(&records, &AggregationRules::default());
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].source, "A");
        assert_eq!(edges[0].target, "B");
        assert_eq!(edges[0].weight, 10.0);
    }

    #[test]
    fn test_long_route_never_becomes_edge() {
        let records = vec![record(("A", "X"), ("B", "Y"), 5000.1, 10.0)];
        assert!(create_city_edges(&records, &AggregationRules::default()).is_empty());

        let at_threshold = vec![record(("A", "X"), ("B", "Y"), 5000.0, 10.0)];
        assert_eq!(create_city_edges(&at_threshold, &AggregationRules::default()).len(), 1);
    }

    #[test]
    fn test_skipped_long_route_does_not_block_reverse() {
        let records = vec![
            record(("A", "X"), ("B", "Y"), 6000.0, 10.0),
            record(("B", "Y"), ("A", "X"), 4000.0, 20.0),
        ];
        let edges = create_city_edges(&records, &AggregationRules::default());
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].source, "B");
    }

    #[test]
    fn test_same_country_pair_is_excluded() {
        let records = vec![
            record(("A", "X"), ("B", "X"), 100.0, 10.0),
            record(("A", "X"), ("C", "Y"), 100.0, 30.0),
        ];
        let city_edges = create_city_edges(&records, &AggregationRules::default());
        let country_edges = create_country_edges(&city_edges);
        assert_eq!(country_edges.len(), 1);
        assert_eq!(country_edges[0].source, "X");
        assert_eq!(country_edges[0].target, "Y");
        assert_eq!(country_edges[0].weight, 30.0);
    }

    #[test]
    fn test_country_weight_is_mean_and_direction_matters() {
        let records = vec![
            record(("A", "X"), ("C", "Y"), 100.0, 10.0),
            record(("B", "X"), ("D", "Y"), 100.0, 25.0),
            record(("E", "Y"), ("A", "X"), 100.0, 7.0),
        ];
        let city_edges = create_city_edges(&records, &AggregationRules::default());
        let country_edges = create_country_edges(&city_edges);
        assert_eq!(country_edges.len(), 2);
        assert!((country_edges[0].weight - 17.5).abs() < 1e-9);
        assert_eq!(country_edges[1].source, "Y");
        assert_eq!(country_edges[1].weight, 7.0);
    }

    #[test]
    fn test_blank_names_are_not_nodes() {
        let records = vec![record(("A", ""), ("B", "Y"), 100.0, 1.0)];
        let nodes = collect_nodes(&records, &AggregationRules::default());
        assert_eq!(nodes.countries.len(), 1);
        assert_eq!(nodes.cities.len(), 2);
    }
}
