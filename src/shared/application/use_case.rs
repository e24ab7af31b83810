use crate::shared::errors::AppResult;
/// Base trait for all use cases following CQRS pattern
///
/// Every operation of the core is one handler implementing either
/// [`UseCase`] (writes) or [`Query`] (reads).
///
/// # Example
///
/// ```ignore
/// struct AddRatingCommand {
///     item_id: Uuid,
///     value: f64,
///     caller_id: Uuid,
/// }
///
/// struct AddRatingHandler {
///     rating_repository: Arc<dyn RatingRepository>,
/// }
///
/// #[async_trait]
/// impl UseCase<AddRatingCommand, AddRatingResult> for AddRatingHandler {
///     async fn execute(&self, command: AddRatingCommand) -> AppResult<AddRatingResult> {
///         // Use case logic here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
