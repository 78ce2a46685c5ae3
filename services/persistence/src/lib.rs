//! Order book persistence backends
//!
//! One storage contract, two interchangeable implementations: a
//! process-local in-memory store (the default and the correctness
//! reference) and a Redis store whose key space gives O(1) best-order
//! lookup per book side without materializing the whole book.

pub mod backend;
pub mod keys;
pub mod memory;
pub mod redis;

pub use backend::{Backend, Persistence, StorageError};
pub use memory::MemoryStore;
pub use redis::RedisStore;
