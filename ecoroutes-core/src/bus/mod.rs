mod channel;
mod route_bus;

pub use channel::{Channel, ReplayChannel, SubscriptionId};
pub use route_bus::RouteBus;
