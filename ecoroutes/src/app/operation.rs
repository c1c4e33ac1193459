use std::{cell::RefCell, rc::Rc};

use clap::Subcommand;
use ecoroutes_core::{
    bus::RouteBus,
    dataset::{dataset_ops, KmlTrackSource},
    graph::{AggregationLevel, LevelGraph, RouteGraph},
    record::{DisplayKey, TravelMode},
    search::SearchQuery,
    selection::{CountryRegionLookup, SelectionPredicate},
};
use serde::{Deserialize, Serialize};

use super::{app_ops, EcoRoutesAppError};
use crate::{
    config::EcoRoutesConfig,
    render::{chord::ChordRenderer, map::MapRenderer, BarPlotRenderer, RegionMatrixRenderer},
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum EcoRoutesOperation {
    /// aggregate the route table into city, country and region graphs, written as JSON
    Aggregate {
        /// a single level to write, all three when omitted
        #[arg(long)]
        level: Option<AggregationLevel>,
        /// countries (city and country levels) or regions (region level) to keep
        #[arg(long)]
        select: Vec<String>,
        /// `both` keeps edges between selected names, `either` edges touching one
        #[arg(long, default_value_t = SelectionPredicate::BothEndpoints)]
        predicate: SelectionPredicate,
        #[arg(long)]
        output: Option<String>,
    },
    /// draw one aggregation level as a chord diagram SVG
    Chord {
        #[arg(long, default_value_t = AggregationLevel::City)]
        level: AggregationLevel,
        /// names to select, selected arcs are outlined and filter the edges
        #[arg(long)]
        select: Vec<String>,
        /// name of the arc under the pointer
        #[arg(long)]
        hover: Option<String>,
        #[arg(long, default_value_t = SelectionPredicate::BothEndpoints)]
        predicate: SelectionPredicate,
        #[arg(long)]
        output: Option<String>,
    },
    /// find the lowest-emission destinations from a city and map them as GeoJSON
    Search {
        #[arg(long)]
        city: String,
        #[arg(long, default_value_t = 5)]
        count: usize,
        /// km
        #[arg(long, default_value_t = 1000.0)]
        max_distance: f64,
        #[arg(long, default_value_t = TravelMode::Average)]
        mode: TravelMode,
        #[arg(long)]
        output: Option<String>,
        /// also write a bar plot SVG of the results to this file
        #[arg(long)]
        bar_plot: Option<String>,
    },
    /// map routes between two cities, once per mode, as GeoJSON
    Route {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// repeat to show the route with several modes
        #[arg(long, default_values_t = vec![TravelMode::Average])]
        mode: Vec<TravelMode>,
        /// modes removed again after plotting
        #[arg(long)]
        remove: Vec<TravelMode>,
        #[arg(long)]
        output: Option<String>,
    },
    /// draw the region-to-region CO2 matrix SVG
    Regions {
        #[arg(long)]
        select: Vec<String>,
        /// countries whose region is toggled
        #[arg(long)]
        country: Vec<String>,
        #[arg(long)]
        output: Option<String>,
    },
    /// list city names starting with a prefix
    Suggest {
        prefix: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

impl EcoRoutesOperation {
    pub fn run(&self, config: &EcoRoutesConfig) -> Result<(), EcoRoutesAppError> {
        match self {
            EcoRoutesOperation::Aggregate {
                level,
                select,
                predicate,
                output,
            } => {
                let records = app_ops::load_records_or_empty(config);
                let graph = RouteGraph::build(&records, &config.aggregation);
                let selection = app_ops::selection_of(select);
                let filter = |g: &LevelGraph| match selection.as_ref() {
                    Some(s) => g.filter_by_selection(s, *predicate),
                    None => g.clone(),
                };
                let json = match level {
                    Some(l) => serde_json::to_string_pretty(&filter(graph.level(*l)))?,
                    None => serde_json::to_string_pretty(&RouteGraph {
                        city: filter(&graph.city),
                        country: filter(&graph.country),
                        region: filter(&graph.region),
                    })?,
                };
                app_ops::write_output(output.as_deref(), &json)
            }
            EcoRoutesOperation::Chord {
                level,
                select,
                hover,
                predicate,
                output,
            } => {
                let records = app_ops::load_records_or_empty(config);
                let graph = RouteGraph::build(&records, &config.aggregation);
                let selection = app_ops::selection_of(select);
                let state = app_ops::interaction_state(selection.as_ref(), hover.as_deref());
                let visible = match selection.as_ref() {
                    Some(s) => graph.level(*level).filter_by_selection(s, *predicate),
                    None => graph.level(*level).clone(),
                };
                let svg = ChordRenderer::new(config.chord.clone()).render(&visible, &state)?;
                app_ops::write_output(output.as_deref(), &svg)
            }
            EcoRoutesOperation::Search {
                city,
                count,
                max_distance,
                mode,
                output,
                bar_plot,
            } => {
                let index = app_ops::load_index(config);
                let (mut bus, map) = map_on_bus(config);
                let query = SearchQuery::new(city, *count, *max_distance, *mode);
                let routes = index.search_and_publish(&query, &mut bus).inspect_err(|e| {
                    log::warn!("{e}");
                })?;
                for route in routes.iter() {
                    log::info!("{}: {} kg CO2", route.record.id, route.co2().trunc());
                }
                if let Some(bar_plot_file) = bar_plot {
                    let svg = BarPlotRenderer::new(config.bar_plot.clone()).render(bus.routes())?;
                    app_ops::write_output(Some(bar_plot_file.as_str()), &svg)?;
                }
                let geojson = map.borrow().to_geojson_string()?;
                app_ops::write_output(output.as_deref(), &geojson)
            }
            EcoRoutesOperation::Route {
                from,
                to,
                mode,
                remove,
                output,
            } => {
                let index = app_ops::load_index(config);
                let (mut bus, map) = map_on_bus(config);
                for m in mode.iter() {
                    index
                        .add_route(from, to, *m, &mut bus)
                        .inspect_err(|e| log::warn!("{e}"))?;
                }
                for m in remove.iter() {
                    let key = DisplayKey {
                        id: index.find(from, to)?.id.clone(),
                        mode: *m,
                    };
                    if !bus.delete_route(&key) {
                        log::warn!("route {key} is not displayed");
                    }
                }
                let geojson = map.borrow().to_geojson_string()?;
                app_ops::write_output(output.as_deref(), &geojson)
            }
            EcoRoutesOperation::Regions {
                select,
                country,
                output,
            } => {
                let table = dataset_ops::read_region_table(&config.region_table_file)?;
                let selection =
                    app_ops::region_selection(select, country, &CountryRegionLookup::default());
                let regions = config
                    .aggregation
                    .region_allow_list
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>();
                for cell in table.selected_cells(&selection) {
                    log::info!("{} -> {}: {:.2} kg CO2", cell.departure, cell.arrival, cell.co2);
                }
                let svg = RegionMatrixRenderer::new(config.region_matrix.clone())
                    .render(&table, &selection, &regions)?;
                app_ops::write_output(output.as_deref(), &svg)
            }
            EcoRoutesOperation::Suggest { prefix, limit } => {
                let directory = app_ops::load_city_directory(config)?;
                let suggestions = directory.suggest(prefix, *limit);
                if suggestions.is_empty() {
                    log::warn!("no city starts with '{prefix}'");
                }
                app_ops::write_output(None, &suggestions.join("\n"))
            }
        }
    }
}

/// a fresh bus with a map renderer subscribed to it
fn map_on_bus(config: &EcoRoutesConfig) -> (RouteBus, Rc<RefCell<MapRenderer>>) {
    let mut bus = RouteBus::new(config.bus.replay_capacity);
    let tracks = KmlTrackSource::new(&config.track_directory, config.track_naming.clone());
    let map = Rc::new(RefCell::new(MapRenderer::new(
        config.map.clone(),
        Box::new(tracks),
    )));
    MapRenderer::attach(Rc::clone(&map), &mut bus);
    (bus, map)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    fn config() -> EcoRoutesConfig {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test")
            .join("ecoroutes.toml");
        EcoRoutesConfig::try_from_file(&path.to_string_lossy()).expect("fixture config should load")
    }

    fn output_file(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("ecoroutes-{}-{name}", std::process::id()))
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_aggregate_writes_filtered_level() {
        let output = output_file("country.json");
        EcoRoutesOperation::Aggregate {
            level: Some(AggregationLevel::Country),
            select: vec![String::from("France"), String::from("Germany")],
            predicate: SelectionPredicate::BothEndpoints,
            output: Some(output.clone()),
        }
        .run(&config())
        .unwrap();
        let text = std::fs::read_to_string(&output).unwrap();
        let graph: LevelGraph = serde_json::from_str(&text).unwrap();
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.nodes, vec!["France", "Germany"]);
        let _ = std::fs::remove_file(output);
    }

    #[test]
    fn test_repeated_select_keeps_name() {
        let output = output_file("country-repeated.json");
        EcoRoutesOperation::Aggregate {
            level: Some(AggregationLevel::Country),
            select: vec![
                String::from("France"),
                String::from("France"),
                String::from("Germany"),
            ],
            predicate: SelectionPredicate::BothEndpoints,
            output: Some(output.clone()),
        }
        .run(&config())
        .unwrap();
        let text = std::fs::read_to_string(&output).unwrap();
        let graph: LevelGraph = serde_json::from_str(&text).unwrap();
        assert_eq!(graph.nodes, vec!["France", "Germany"]);
        let _ = std::fs::remove_file(output);
    }

    #[test]
    fn test_search_without_matches_is_an_error() {
        let result = EcoRoutesOperation::Search {
            city: String::from("Atlantis"),
            count: 3,
            max_distance: 1000.0,
            mode: TravelMode::Average,
            output: None,
            bar_plot: None,
        }
        .run(&config());
        assert!(matches!(result, Err(EcoRoutesAppError::SearchError(_))));
    }

    #[test]
    fn test_route_writes_geojson_per_mode() {
        let output = output_file("route.geojson");
        EcoRoutesOperation::Route {
            from: String::from("Paris"),
            to: String::from("Lyon"),
            mode: vec![TravelMode::Train, TravelMode::Flight],
            remove: vec![TravelMode::Flight],
            output: Some(output.clone()),
        }
        .run(&config())
        .unwrap();
        let text = std::fs::read_to_string(&output).unwrap();
        let collection: geojson::FeatureCollection = serde_json::from_str(&text).unwrap();
        assert_eq!(collection.features.len(), 3);
        assert!(!text.contains("\"flight\""));
        let _ = std::fs::remove_file(output);
    }

    #[test]
    fn test_regions_writes_svg() {
        let output = output_file("regions.svg");
        EcoRoutesOperation::Regions {
            select: vec![],
            country: vec![String::from("France"), String::from("Spain")],
            output: Some(output.clone()),
        }
        .run(&config())
        .unwrap();
        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.matches("class=\"cell filled\"").count(), 2);
        let _ = std::fs::remove_file(output);
    }
}
