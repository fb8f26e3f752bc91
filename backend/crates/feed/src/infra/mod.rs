//! Infrastructure Layer
//!
//! Database implementations and the filesystem image store.

pub mod image_store;
pub mod memory;
pub mod postgres;

pub use image_store::FsImageStore;
pub use memory::InMemoryPostRepository;
pub use postgres::PgPostRepository;
