#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no route from {departure} to {arrival}")]
    UnknownRoute { departure: String, arrival: String },
    #[error("a search must ask for at least one destination")]
    ZeroCount,
    #[error("no destinations found from '{city}' within {max_distance} km")]
    NoDestinationsFound { city: String, max_distance: f64 },
}
