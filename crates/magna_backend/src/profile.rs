//! Dashboard profile logic
//!
//! The deterministic half of the dashboard page: deriving a username for a
//! fresh account, probing for a free one, scoring profile completeness, and
//! the load sequence that stitches the backend calls together.

use crate::client::BackendClient;
use crate::error::{BackendError, Result};
use crate::types::{AuthUser, UserRow};

/// Probes attempted before giving up on a unique username
const MAX_USERNAME_PROBES: u32 = 10;

/// Everything the dashboard renders for a signed-in member
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub user: UserRow,
    pub skills: Vec<String>,
    pub projects_joined: usize,
    /// 0-100 completion score
    pub profile_complete: u8,
}

/// Pick a username for an auth user with no profile row yet: sign-up
/// metadata first, then the email local part, then a truncated-id fallback.
pub fn derive_username(auth: &AuthUser) -> String {
    if let Some(name) = auth.username.as_deref() {
        if !name.trim().is_empty() {
            return name.to_string();
        }
    }
    if let Some(email) = auth.email.as_deref() {
        if let Some(local) = email.split('@').next() {
            if !local.is_empty() {
                return local.to_string();
            }
        }
    }
    let prefix: String = auth.id.chars().take(8).collect();
    format!("user_{prefix}")
}

/// Append a counter to `base` until `exists` reports it free.
///
/// Probing is bounded; if every candidate is taken the last one is returned
/// anyway and the insert surfaces the conflict.
pub fn resolve_unique_username<F>(base: &str, mut exists: F) -> Result<String>
where
    F: FnMut(&str) -> Result<bool>,
{
    let mut candidate = base.to_string();
    let mut counter = 1;
    while counter < MAX_USERNAME_PROBES {
        if !exists(&candidate)? {
            return Ok(candidate);
        }
        candidate = format!("{base}{counter}");
        counter += 1;
    }
    Ok(candidate)
}

/// Profile completion score: 50 for having a profile at all, +20 for a bio,
/// +20 for at least one skill, +10 for an avatar, capped at 100
pub fn profile_completion(bio: Option<&str>, skill_count: usize, avatar_url: Option<&str>) -> u8 {
    let mut score: u32 = 50;
    if bio.is_some_and(|b| !b.trim().is_empty()) {
        score += 20;
    }
    if skill_count > 0 {
        score += 20;
    }
    if avatar_url.is_some_and(|a| !a.trim().is_empty()) {
        score += 10;
    }
    score.min(100) as u8
}

/// Load the dashboard for the current session.
///
/// Requires an authenticated session; creates the member's `users` row on
/// first visit, with a unique username derived from the auth user.
pub fn load_dashboard<C: BackendClient>(client: &C) -> Result<DashboardData> {
    let session = client.session()?.ok_or(BackendError::NoSession)?;
    let auth = session.user;

    let user = match client.user_by_id(&auth.id)? {
        Some(row) => row,
        None => {
            let base = derive_username(&auth);
            let username =
                resolve_unique_username(&base, |name| Ok(client.user_by_username(name)?.is_some()))?;
            tracing::debug!(user = %auth.id, %username, "creating profile row on first visit");
            client.insert_user(&UserRow {
                id: auth.id.clone(),
                username,
                email: auth.email.clone(),
                avatar_url: None,
                bio: None,
            })?
        }
    };

    let skills = client.skills_for(&auth.id)?;
    let projects_joined = client.contribution_count(&auth.id)?;
    let profile_complete =
        profile_completion(user.bio.as_deref(), skills.len(), user.avatar_url.as_deref());

    Ok(DashboardData {
        user,
        skills,
        projects_joined,
        profile_complete,
    })
}
