mod document_store;
mod filters;
mod id;
mod request;

pub use document_store::DocumentStore;
pub use id::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use request::SearchRequest;
