//! Data model and in-memory pipeline for exploring CO2 emissions and energy use
//! of travel between European cities.
//!
//! A flat route table is read into [`record::RouteRecord`]s, coarsened into city,
//! country and region graphs by [`graph::RouteGraph::build`], filtered through
//! [`selection::SelectionState`] and shared with renderers over the
//! [`bus::RouteBus`].
pub mod bus;
pub mod color;
pub mod dataset;
pub mod graph;
pub mod record;
pub mod search;
pub mod selection;
