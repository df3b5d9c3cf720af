//! Persisted state storage.

mod libsql_store;
mod memory;
mod traits;

pub use libsql_store::LibSqlStore;
pub use memory::MemoryStore;
pub use traits::StateStore;
