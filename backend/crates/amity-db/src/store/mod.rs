pub mod friendship_store;
pub mod store_error;
