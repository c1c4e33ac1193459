mod coordinate;
mod display_route;
mod route_record;
mod route_row;
mod travel_mode;

pub mod record_ops;

pub use coordinate::{parse_coordinates, Coordinate};
pub use display_route::{DisplayKey, DisplayRoute};
pub use route_record::{ModeMetrics, RouteEndpoint, RouteRecord};
pub use route_row::RouteRow;
pub use travel_mode::TravelMode;
