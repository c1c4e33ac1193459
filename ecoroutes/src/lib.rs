//! command line front end of EcoRoutes: configuration, the chord, map, bar
//! plot and region matrix renderers, and the subcommands driving them.
pub mod app;
pub mod config;
pub mod render;
