pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod store;

pub use config::ManagerConfig;
pub use document::{Author, Document};
pub use error::{Result, StoreError};
pub use loader::{DataFormat, DataLoader};
pub use store::{DocumentStore, IdGenerator, SearchRequest, SequentialGenerator, UuidGenerator};
