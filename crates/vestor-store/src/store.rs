//! Repository Interface
//!
//! The boundary layer persists generator output through this trait; the
//! generator and responder themselves never touch it.

use std::sync::RwLock;

use crate::error::Result;
use crate::record::{AdviceSession, Database, NewUser, SavedPlan, SessionRecord, StoredUser};

/// Repository over users, advice sessions, and saved plans
pub trait AdviceStore: Send + Sync {
    /// Append a generated advice session; returns the stored record
    fn record_session(&self, session: AdviceSession) -> Result<AdviceSession>;

    /// Append a saved plan; returns the stored record
    fn save_plan(&self, plan: SavedPlan) -> Result<SavedPlan>;

    /// Plans owned by a user, in insertion order
    fn plans_for_user(&self, user_id: &str) -> Result<Vec<SavedPlan>>;

    /// Every record in the shared sessions array
    fn sessions(&self) -> Result<Vec<SessionRecord>>;

    /// Register a user; fails on a duplicate email (case-insensitive)
    fn create_user(&self, user: NewUser) -> Result<StoredUser>;

    fn find_user_by_email(&self, email: &str) -> Result<Option<StoredUser>>;
}

/// In-memory store (for development/testing)
pub struct MemoryStore {
    db: RwLock<Database>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            db: RwLock::new(Database::default()),
        }
    }
}

impl AdviceStore for MemoryStore {
    fn record_session(&self, session: AdviceSession) -> Result<AdviceSession> {
        let mut db = self.db.write().unwrap();
        db.record_session(session.clone());
        Ok(session)
    }

    fn save_plan(&self, plan: SavedPlan) -> Result<SavedPlan> {
        let mut db = self.db.write().unwrap();
        db.save_plan(plan.clone());
        Ok(plan)
    }

    fn plans_for_user(&self, user_id: &str) -> Result<Vec<SavedPlan>> {
        let db = self.db.read().unwrap();
        Ok(db.plans_for_user(user_id))
    }

    fn sessions(&self) -> Result<Vec<SessionRecord>> {
        let db = self.db.read().unwrap();
        Ok(db.sessions.clone())
    }

    fn create_user(&self, user: NewUser) -> Result<StoredUser> {
        let mut db = self.db.write().unwrap();
        db.create_user(user)
    }

    fn find_user_by_email(&self, email: &str) -> Result<Option<StoredUser>> {
        let db = self.db.read().unwrap();
        Ok(db.find_user_by_email(email).cloned())
    }
}
