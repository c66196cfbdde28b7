//! Store Records
//!
//! Record types persisted in the JSON document: users, generated advice
//! sessions, and user-saved plans. Sessions and plans are distinct types
//! that share the single on-disk `sessions` array as an untagged union.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vestor_core::{AdviceDocument, AdviceRequest};

use crate::error::StoreError;

/// Unique record identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub id: RecordId,

    pub name: String,

    /// Unique, compared case-insensitively
    pub email: String,

    pub password_hash: String,

    pub created_at: DateTime<Utc>,
}

/// Registration data before an id and timestamp are assigned
#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// One generated advice computation, persisted for history.
/// Appended on every recommend call; never mutated or deleted.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceSession {
    pub id: RecordId,

    /// Raw request exactly as received
    pub input: AdviceRequest,

    pub advice: AdviceDocument,

    pub created_at: DateTime<Utc>,
}

impl AdviceSession {
    pub fn new(input: AdviceRequest, advice: AdviceDocument) -> Self {
        Self {
            id: RecordId::new(),
            input,
            advice,
            created_at: Utc::now(),
        }
    }
}

/// A user-named reference to a prior session's advice payload
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    pub id: RecordId,

    /// Owning user
    pub user_id: String,

    pub title: String,

    /// Session-shaped payload as posted back by the client; the boundary
    /// guarantees it carries an `advice` member.
    pub record: serde_json::Value,

    pub created_at: DateTime<Utc>,
}

impl SavedPlan {
    pub fn new(
        user_id: impl Into<String>,
        title: impl Into<String>,
        record: serde_json::Value,
    ) -> Self {
        Self {
            id: RecordId::new(),
            user_id: user_id.into(),
            title: title.into(),
            record,
            created_at: Utc::now(),
        }
    }
}

/// Either record kind held in the shared `sessions` array.
///
/// The two payload shapes are disjoint (a plan has `userId`/`record`, a
/// session has `input`/`advice`), so the union needs no explicit tag.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionRecord {
    Advice(AdviceSession),
    Plan(SavedPlan),
}

/// The whole persisted document
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub users: Vec<StoredUser>,

    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
}

impl Database {
    /// Register a user. Email uniqueness is the only enforced invariant.
    pub fn create_user(&mut self, new_user: NewUser) -> Result<StoredUser, StoreError> {
        if self.find_user_by_email(&new_user.email).is_some() {
            return Err(StoreError::DuplicateEmail(new_user.email));
        }
        let user = StoredUser {
            id: RecordId::new(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        self.users.push(user.clone());
        Ok(user)
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&StoredUser> {
        self.users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
    }

    pub fn record_session(&mut self, session: AdviceSession) {
        self.sessions.push(SessionRecord::Advice(session));
    }

    pub fn save_plan(&mut self, plan: SavedPlan) {
        self.sessions.push(SessionRecord::Plan(plan));
    }

    /// Plans owned by a user, in insertion order
    pub fn plans_for_user(&self, user_id: &str) -> Vec<SavedPlan> {
        self.sessions
            .iter()
            .filter_map(|record| match record {
                SessionRecord::Plan(plan) if plan.user_id == user_id => Some(plan.clone()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Asha".into(),
            email: email.into(),
            password_hash: "$argon2id$stub".into(),
        }
    }

    #[test]
    fn test_duplicate_email_is_case_insensitive() {
        let mut db = Database::default();
        db.create_user(new_user("asha@example.com")).unwrap();

        let err = db.create_user(new_user("Asha@Example.COM")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail(_)));
        assert_eq!(db.users.len(), 1);
    }

    #[test]
    fn test_plans_filtered_by_owner() {
        let mut db = Database::default();
        db.save_plan(SavedPlan::new("u1", "My Plan", json!({"advice": {}})));
        db.save_plan(SavedPlan::new("u2", "Other", json!({"advice": {}})));

        let plans = db.plans_for_user("u1");
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].title, "My Plan");
    }

    #[test]
    fn test_session_union_round_trips() {
        let plan = SavedPlan::new("u1", "My Plan", json!({"advice": {"x": 1}}));
        let serialized = serde_json::to_string(&SessionRecord::Plan(plan.clone())).unwrap();
        let parsed: SessionRecord = serde_json::from_str(&serialized).unwrap();
        match parsed {
            SessionRecord::Plan(restored) => {
                assert_eq!(restored.id, plan.id);
                assert_eq!(restored.record, plan.record);
            }
            SessionRecord::Advice(_) => panic!("plan deserialized as advice session"),
        }
    }
}
