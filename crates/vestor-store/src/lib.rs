//! # vestor-store
//!
//! Flat-file persistence for the advisory service. One JSON document holds
//! every user, generated advice session, and saved plan; it is loaded fully
//! into memory and rewritten wholesale on each mutation behind the
//! `AdviceStore` repository trait. A `MemoryStore` with identical semantics
//! backs the tests.

pub mod error;
pub mod json_store;
pub mod record;
pub mod store;

pub use error::{Result, StoreError};
pub use json_store::JsonFileStore;
pub use record::{AdviceSession, Database, NewUser, RecordId, SavedPlan, SessionRecord, StoredUser};
pub use store::{AdviceStore, MemoryStore};
