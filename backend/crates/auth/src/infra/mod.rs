//! Infrastructure Layer
//!
//! Database implementations of the account repository.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryAccountRepository;
pub use postgres::PgAccountRepository;
