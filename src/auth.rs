//! High-level authentication flows
//!
//! This module combines the API client and the session store into the
//! sign-in, registration, session-restore, and sign-out flows, and decides
//! where a user lands after authenticating.

use crate::api::ApiClient;
use crate::store::{Session, StoredSession, User};
use crate::Result;
use std::path::Path;

/// Where the client navigates after a successful authentication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The main dashboard
    Dashboard,
    /// The personality assessment, for accounts without a profile yet
    Assessment,
}

/// Decide the post-authentication destination for a user
///
/// Accounts that have not completed the personality assessment are routed to
/// it before anything else; everyone else lands on the dashboard.
pub fn destination_for(user: &User) -> Destination {
    if user.has_personality_profile() {
        Destination::Dashboard
    } else {
        Destination::Assessment
    }
}

/// Sign in with email and password
///
/// On success the token is installed on the API client and persisted to the
/// session file, so the next start can restore the session without a login.
///
/// # Arguments
/// * `api` - the API client
/// * `session_path` - path of the session token file
/// * `email` / `password` - credentials
///
/// # Returns
/// The authenticated session and the screen to navigate to
///
/// # Example
/// ```rust,no_run
/// use pairpad::api::ApiClient;
/// use pairpad::auth::{sign_in, Destination};
/// use pairpad::store::Settings;
///
/// # async fn example() -> pairpad::Result<()> {
/// let api = ApiClient::new(&Settings::default())?;
/// let (session, destination) = sign_in(&api, "session.json", "a@b.c", "hunter2").await?;
///
/// if destination == Destination::Assessment {
///     println!("{} still needs to take the assessment", session.user.username);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn sign_in(
    api: &ApiClient,
    session_path: impl AsRef<Path>,
    email: &str,
    password: &str,
) -> Result<(Session, Destination)> {
    let login = api.login(email, password).await?;

    api.set_token(&login.access);
    StoredSession {
        access_token: login.access.clone(),
    }
    .save(session_path)?;

    let destination = destination_for(&login.user);
    let session = Session {
        user: login.user,
        access_token: login.access,
    };

    Ok((session, destination))
}

/// Create an account and sign in with it
///
/// Token handling matches [`sign_in`]. Fresh accounts have no personality
/// profile, so the destination is always the assessment in practice.
pub async fn register(
    api: &ApiClient,
    session_path: impl AsRef<Path>,
    username: &str,
    email: &str,
    password: &str,
    role: crate::store::UserRole,
) -> Result<(Session, Destination)> {
    let registered = api.register(username, email, password, role).await?;

    api.set_token(&registered.tokens.access);
    StoredSession {
        access_token: registered.tokens.access.clone(),
    }
    .save(session_path)?;

    let destination = destination_for(&registered.user);
    let session = Session {
        user: registered.user,
        access_token: registered.tokens.access,
    };

    Ok((session, destination))
}

/// Restore a session from a previously saved token
///
/// Loads the token file, installs the token, and re-fetches the profile. A
/// rejected token (401/403) clears the stale file and reports no session;
/// transport failures propagate so a flaky network does not destroy a valid
/// session file.
///
/// # Returns
/// `Ok(None)` when signed out or the stored token is no longer accepted
pub async fn restore_session(
    api: &ApiClient,
    session_path: impl AsRef<Path>,
) -> Result<Option<Session>> {
    let path = session_path.as_ref();

    let stored = match StoredSession::load(path)? {
        Some(stored) => stored,
        None => return Ok(None),
    };

    api.set_token(&stored.access_token);

    match api.get_profile().await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "session restored");
            Ok(Some(Session {
                user,
                access_token: stored.access_token,
            }))
        }
        Err(crate::Error::Api { status, .. }) if status == 401 || status == 403 => {
            tracing::warn!("stored token rejected, clearing session");
            api.clear_token();
            StoredSession::clear(path)?;
            Ok(None)
        }
        Err(e) => {
            api.clear_token();
            Err(e)
        }
    }
}

/// Sign out
///
/// The local token and session file are cleared first; the server is then
/// notified best-effort, with failures logged and swallowed. An unreachable
/// server must not trap the user in a signed-in state.
pub async fn sign_out(api: &ApiClient, session_path: impl AsRef<Path>) -> Result<()> {
    api.clear_token();
    StoredSession::clear(session_path)?;

    if let Err(e) = api.logout().await {
        tracing::warn!("logout notification failed: {}", e);
    }

    Ok(())
}
