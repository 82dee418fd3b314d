//! Magna backend boundary
//!
//! The site treats its hosted authentication-and-database service as an
//! opaque collaborator: every call is a single attempt that may fail with a
//! transport or validation error, return zero or one row, or return a
//! session or none. This crate pins that boundary down as Rust types:
//!
//! - [`BackendClient`]: the client trait pages receive by injection (there
//!   is deliberately no module-level singleton)
//! - [`BackendError`] and [`SubmitError`]: transport errors and the
//!   user-visible classification of the backend's message strings
//! - [`validate`]: the local field checks run before any backend call
//! - [`profile`]: the dashboard's deterministic profile logic (username
//!   derivation, uniqueness probing, completion scoring)
//!
//! An in-memory [`MemoryBackend`] backs the test suite; no network transport
//! lives here.

pub mod client;
pub mod error;
pub mod profile;
pub mod types;
pub mod validate;

pub use client::{BackendClient, MemoryBackend};
pub use error::{BackendError, SubmitError};
pub use profile::{derive_username, load_dashboard, profile_completion, resolve_unique_username, DashboardData};
pub use types::{AuthSession, AuthUser, Credentials, UserRow};
pub use validate::{validate_login, validate_signup, LoginForm, SignupForm};
