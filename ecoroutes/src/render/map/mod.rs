mod map_layer;
pub mod map_ops;
mod map_renderer;

pub use map_layer::{LineStyle, MapLayer, MarkerKind};
pub use map_renderer::MapRenderer;
