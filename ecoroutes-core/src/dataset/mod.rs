mod city_directory;
mod dataset_error;
mod region_table;
mod track;

pub mod dataset_ops;

pub use city_directory::CityDirectory;
pub use dataset_error::DatasetError;
pub use region_table::{RegionCell, RegionTable, RegionTableRow};
pub use track::{KmlTrackSource, TrackNaming, TrackSource};
