mod app_error;
pub mod app_ops;
mod ecoroutes_app;
mod operation;

pub use app_error::EcoRoutesAppError;
pub use ecoroutes_app::EcoRoutesApp;
pub use operation::EcoRoutesOperation;
