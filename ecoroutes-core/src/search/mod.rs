mod route_index;
mod search_error;
mod search_query;

pub use route_index::RouteIndex;
pub use search_error::SearchError;
pub use search_query::SearchQuery;
