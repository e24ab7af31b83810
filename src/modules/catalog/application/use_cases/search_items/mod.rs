mod handler;
mod query;
mod result;

pub use handler::SearchItemsHandler;
pub use query::SearchItemsQuery;
pub use result::SearchItemsResult;
