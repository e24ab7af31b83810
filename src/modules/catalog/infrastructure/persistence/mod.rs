mod item_repository_impl;

pub use item_repository_impl::ItemRepositoryImpl;
