pub mod store;

pub use store::{LoadError, StoreError};
