//! Backend client trait and the in-memory test implementation
//!
//! Pages receive a client by injection, scoped to the process or request.
//! Every operation is one attempt: no retry, no backoff.

use crate::error::{BackendError, Result};
use crate::types::{AuthSession, AuthUser, Credentials, UserRow};
use std::collections::HashMap;
use std::sync::Mutex;

/// The boundary contract with the hosted auth-and-database service.
///
/// Row reads return zero or one row; session retrieval returns a session or
/// none. Errors carry the backend's message strings unchanged.
pub trait BackendClient {
    fn sign_up(&self, credentials: &Credentials, username: &str) -> Result<AuthSession>;
    fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession>;
    fn sign_out(&self) -> Result<()>;
    fn session(&self) -> Result<Option<AuthSession>>;

    /// Select a `users` row by primary key
    fn user_by_id(&self, id: &str) -> Result<Option<UserRow>>;
    /// Select a `users` row by username
    fn user_by_username(&self, username: &str) -> Result<Option<UserRow>>;
    /// Insert a `users` row
    fn insert_user(&self, row: &UserRow) -> Result<UserRow>;

    /// Skill names attached to a user
    fn skills_for(&self, user_id: &str) -> Result<Vec<String>>;
    /// Number of projects the user contributes to
    fn contribution_count(&self, user_id: &str) -> Result<usize>;
}

#[derive(Default)]
struct MemoryState {
    accounts: HashMap<String, (String, String)>, // email -> (password, user id)
    session: Option<AuthSession>,
    users: HashMap<String, UserRow>,
    skills: HashMap<String, Vec<String>>,
    contributions: HashMap<String, usize>,
    next_id: u32,
}

/// In-memory backend used by the test suites.
///
/// Mirrors the hosted service's observable behavior, including its message
/// strings, so classification tests run against realistic text.
#[derive(Default)]
pub struct MemoryBackend {
    state: Mutex<MemoryState>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user row directly, bypassing auth
    pub fn seed_user(&self, row: UserRow) {
        let mut state = self.state.lock().unwrap();
        state.users.insert(row.id.clone(), row);
    }

    pub fn seed_skills(&self, user_id: &str, skills: Vec<String>) {
        self.state
            .lock()
            .unwrap()
            .skills
            .insert(user_id.to_string(), skills);
    }

    pub fn seed_contributions(&self, user_id: &str, count: usize) {
        self.state
            .lock()
            .unwrap()
            .contributions
            .insert(user_id.to_string(), count);
    }

    /// Open a session for an existing auth user without credentials
    pub fn seed_session(&self, user: AuthUser) {
        self.state.lock().unwrap().session = Some(AuthSession { user });
    }
}

impl BackendClient for MemoryBackend {
    fn sign_up(&self, credentials: &Credentials, username: &str) -> Result<AuthSession> {
        let mut state = self.state.lock().unwrap();
        if state.accounts.contains_key(&credentials.email) {
            return Err(BackendError::Rejected("User already registered".into()));
        }
        state.next_id += 1;
        let id = format!("auth-{:08x}", state.next_id);
        state
            .accounts
            .insert(credentials.email.clone(), (credentials.password.clone(), id.clone()));
        let session = AuthSession {
            user: AuthUser {
                id,
                email: Some(credentials.email.clone()),
                username: Some(username.to_string()),
            },
        };
        state.session = Some(session.clone());
        Ok(session)
    }

    fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession> {
        let mut state = self.state.lock().unwrap();
        match state.accounts.get(&credentials.email) {
            Some((password, id)) if *password == credentials.password => {
                let session = AuthSession {
                    user: AuthUser {
                        id: id.clone(),
                        email: Some(credentials.email.clone()),
                        username: None,
                    },
                };
                state.session = Some(session.clone());
                Ok(session)
            }
            _ => Err(BackendError::Rejected("Invalid login credentials".into())),
        }
    }

    fn sign_out(&self) -> Result<()> {
        self.state.lock().unwrap().session = None;
        Ok(())
    }

    fn session(&self) -> Result<Option<AuthSession>> {
        Ok(self.state.lock().unwrap().session.clone())
    }

    fn user_by_id(&self, id: &str) -> Result<Option<UserRow>> {
        Ok(self.state.lock().unwrap().users.get(id).cloned())
    }

    fn user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .users
            .values()
            .find(|row| row.username == username)
            .cloned())
    }

    fn insert_user(&self, row: &UserRow) -> Result<UserRow> {
        let mut state = self.state.lock().unwrap();
        if state.users.contains_key(&row.id) {
            return Err(BackendError::Rejected(format!(
                "duplicate key value violates unique constraint on {}",
                row.id
            )));
        }
        state.users.insert(row.id.clone(), row.clone());
        Ok(row.clone())
    }

    fn skills_for(&self, user_id: &str) -> Result<Vec<String>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .skills
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    fn contribution_count(&self, user_id: &str) -> Result<usize> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .contributions
            .get(user_id)
            .copied()
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: "hunter22".to_string(),
        }
    }

    #[test]
    fn test_sign_up_then_sign_in() {
        let backend = MemoryBackend::new();
        let session = backend.sign_up(&creds("a@b.co"), "ada").unwrap();
        assert_eq!(session.user.username.as_deref(), Some("ada"));

        backend.sign_out().unwrap();
        assert!(backend.session().unwrap().is_none());

        let session = backend.sign_in(&creds("a@b.co")).unwrap();
        assert_eq!(session.user.email.as_deref(), Some("a@b.co"));
        assert!(backend.session().unwrap().is_some());
    }

    #[test]
    fn test_wrong_password_message() {
        let backend = MemoryBackend::new();
        backend.sign_up(&creds("a@b.co"), "ada").unwrap();
        let err = backend
            .sign_in(&Credentials {
                email: "a@b.co".into(),
                password: "wrong".into(),
            })
            .unwrap_err();
        assert_eq!(err, BackendError::Rejected("Invalid login credentials".into()));
    }

    #[test]
    fn test_duplicate_sign_up() {
        let backend = MemoryBackend::new();
        backend.sign_up(&creds("a@b.co"), "ada").unwrap();
        let err = backend.sign_up(&creds("a@b.co"), "ada2").unwrap_err();
        assert_eq!(err, BackendError::Rejected("User already registered".into()));
    }

    #[test]
    fn test_row_select_returns_zero_or_one() {
        let backend = MemoryBackend::new();
        assert!(backend.user_by_id("nope").unwrap().is_none());
        backend.seed_user(UserRow {
            id: "u1".into(),
            username: "ada".into(),
            email: Some("a@b.co".into()),
            avatar_url: None,
            bio: None,
        });
        assert!(backend.user_by_username("ada").unwrap().is_some());
        assert!(backend.user_by_username("grace").unwrap().is_none());
    }
}
