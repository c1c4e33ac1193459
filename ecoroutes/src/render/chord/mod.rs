mod chord_layout;
mod chord_renderer;
mod weight_matrix;

pub use chord_layout::{ChordGroup, ChordLayout, ChordRibbon, ChordSide};
pub use chord_renderer::ChordRenderer;
pub use weight_matrix::WeightMatrix;
