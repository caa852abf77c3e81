pub mod visitor_repo;
pub use visitor_repo::{PgVisitorStore, VisitorStore};
pub mod memory_repo;
pub use memory_repo::MemoryVisitorStore;
