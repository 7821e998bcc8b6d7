pub mod file_store;
pub mod kv;
pub mod repository;

pub use file_store::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use repository::{PlanRepository, PLAN_KEY};
