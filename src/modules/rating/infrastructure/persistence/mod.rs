mod rating_repository_impl;

pub use rating_repository_impl::RatingRepositoryImpl;
