#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("failed writing svg: {0}")]
    SvgWriteError(#[from] std::fmt::Error),
    #[error("failed serializing map layers: {0}")]
    GeoJsonError(#[from] serde_json::Error),
    #[error("chord matrix is {rows}x{cols}, expected a square matrix")]
    MatrixShapeError { rows: usize, cols: usize },
}
