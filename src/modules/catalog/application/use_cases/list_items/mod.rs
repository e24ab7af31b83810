mod handler;
mod query;
mod result;

pub use handler::ListItemsHandler;
pub use query::ListItemsQuery;
pub use result::ListItemsResult;
