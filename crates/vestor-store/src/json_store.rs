//! JSON File Store
//!
//! The whole database is one JSON document loaded fully into memory and
//! rewritten wholesale on every mutation. Writers are serialized by the
//! in-process lock; the file write itself goes through a temp file and
//! rename so a crash never leaves a half-written document. Concurrent
//! processes sharing one file can still lose updates - accepted for the
//! low-traffic single-instance deployment this targets.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::Result;
use crate::record::{AdviceSession, Database, NewUser, SavedPlan, SessionRecord, StoredUser};
use crate::store::AdviceStore;

/// File-backed store holding the document in memory behind a lock
pub struct JsonFileStore {
    path: PathBuf,
    db: RwLock<Database>,
}

impl JsonFileStore {
    /// Open a store, creating the file (and parent directory) when absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let db = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            let db = Database::default();
            write_document(&path, &db)?;
            db
        };

        tracing::debug!(path = %path.display(), users = db.users.len(), "opened store");

        Ok(Self {
            path,
            db: RwLock::new(db),
        })
    }

    fn persist(&self, db: &Database) -> Result<()> {
        write_document(&self.path, db)
    }
}

/// Write the whole document: temp file in the same directory, then rename.
fn write_document(path: &Path, db: &Database) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serde_json::to_string_pretty(db)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl AdviceStore for JsonFileStore {
    fn record_session(&self, session: AdviceSession) -> Result<AdviceSession> {
        let mut db = self.db.write().unwrap();
        db.record_session(session.clone());
        self.persist(&db)?;
        Ok(session)
    }

    fn save_plan(&self, plan: SavedPlan) -> Result<SavedPlan> {
        let mut db = self.db.write().unwrap();
        db.save_plan(plan.clone());
        self.persist(&db)?;
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
        let stored = db.create_user(user)?;
        self.persist(&db)?;
        Ok(stored)
    }

    fn find_user_by_email(&self, email: &str) -> Result<Option<StoredUser>> {
        let db = self.db.read().unwrap();
        Ok(db.find_user_by_email(email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_open_creates_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vestor.json");

        let store = JsonFileStore::open(&path).unwrap();
        assert!(path.exists());
        assert!(store.sessions().unwrap().is_empty());
    }

    #[test]
    fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vestor.json");

        let record = json!({"advice": {"allocations": {"crypto": 1500}}});
        {
            let store = JsonFileStore::open(&path).unwrap();
            store
                .create_user(NewUser {
                    name: "Asha".into(),
                    email: "asha@example.com".into(),
                    password_hash: "hash".into(),
                })
                .unwrap();
            store
                .save_plan(SavedPlan::new("u1", "My Plan", record.clone()))
                .unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        let user = reopened.find_user_by_email("asha@example.com").unwrap();
        assert!(user.is_some());

        let plans = reopened.plans_for_user("u1").unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].record, record);
    }

    #[test]
    fn test_duplicate_user_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vestor.json");
        let store = JsonFileStore::open(&path).unwrap();

        let new_user = |email: &str| NewUser {
            name: "Asha".into(),
            email: email.into(),
            password_hash: "hash".into(),
        };
        store.create_user(new_user("asha@example.com")).unwrap();
        assert!(store.create_user(new_user("ASHA@EXAMPLE.COM")).is_err());

        let db: Database =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(db.users.len(), 1);
    }
}
