use ecoroutes_core::{dataset::DatasetError, search::SearchError};

use crate::render::RenderError;

#[derive(thiserror::Error, Debug)]
pub enum EcoRoutesAppError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error(transparent)]
    DatasetError(#[from] DatasetError),
    #[error(transparent)]
    SearchError(#[from] SearchError),
    #[error(transparent)]
    RenderError(#[from] RenderError),
    #[error("failed writing '{filepath}': {source}")]
    WriteError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failed serializing output: {0}")]
    JsonError(#[from] serde_json::Error),
}
