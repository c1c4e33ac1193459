mod bar_plot;
pub mod chord;
pub mod map;
mod region_matrix;
mod render_error;
pub mod svg_ops;

pub use bar_plot::BarPlotRenderer;
pub use region_matrix::RegionMatrixRenderer;
pub use render_error::RenderError;
