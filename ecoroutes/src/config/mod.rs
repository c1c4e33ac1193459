mod bar_plot_config;
mod bus_config;
mod chord_config;
mod ecoroutes_config;
mod map_config;
mod region_matrix_config;

pub use bar_plot_config::BarPlotConfig;
pub use bus_config::BusConfig;
pub use chord_config::ChordConfig;
pub use ecoroutes_config::EcoRoutesConfig;
pub use map_config::{MapConfig, ModeRamps};
pub use region_matrix_config::RegionMatrixConfig;
