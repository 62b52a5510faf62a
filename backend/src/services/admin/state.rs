use std::sync::Arc;

use log::error;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::content::slots::{self, SlotStore};

/// Plain-text credential pair, persisted verbatim. Faithful to the site
/// this fronts: no hashing, no lockout, no expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        AdminCredentials {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

struct AdminData {
    credentials: AdminCredentials,
    authenticated: bool,
}

/// Session state for the dashboard gate, shared as `web::Data`. The
/// credential pair and the authenticated marker live in separate slots so
/// a rotation never touches the open session.
#[derive(Clone)]
pub struct AdminState {
    inner: Arc<RwLock<AdminData>>,
    slots: SlotStore,
}

impl AdminState {
    pub fn load(slots: SlotStore) -> Self {
        let credentials = match slots.read(slots::ADMIN_CREDENTIALS) {
            Ok(Some(text)) => serde_json::from_str(&text).unwrap_or_default(),
            Ok(None) => AdminCredentials::default(),
            Err(e) => {
                error!("failed to read admin credentials slot: {e}");
                AdminCredentials::default()
            }
        };
        let authenticated = matches!(
            slots.read(slots::ADMIN_AUTH),
            Ok(Some(marker)) if marker == "true"
        );
        AdminState {
            inner: Arc::new(RwLock::new(AdminData {
                credentials,
                authenticated,
            })),
            slots,
        }
    }

    /// Case-sensitive check against the stored pair. Success opens the
    /// session and persists the marker; failure changes nothing.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        let mut data = self.inner.write().await;
        if data.credentials.username == username && data.credentials.password == password {
            data.authenticated = true;
            if let Err(e) = self.slots.write(slots::ADMIN_AUTH, "true") {
                error!("failed to persist session marker: {e}");
            }
            true
        } else {
            false
        }
    }

    pub async fn logout(&self) {
        let mut data = self.inner.write().await;
        data.authenticated = false;
        if let Err(e) = self.slots.remove(slots::ADMIN_AUTH) {
            error!("failed to clear session marker: {e}");
        }
    }

    /// Unconditionally replaces and persists the credential pair. The
    /// current session, if any, stays open.
    pub async fn update_credentials(&self, username: String, password: String) {
        let mut data = self.inner.write().await;
        data.credentials = AdminCredentials { username, password };
        match serde_json::to_string(&data.credentials) {
            Ok(json) => {
                if let Err(e) = self.slots.write(slots::ADMIN_CREDENTIALS, &json) {
                    error!("failed to persist admin credentials: {e}");
                }
            }
            Err(e) => error!("failed to serialize admin credentials: {e}"),
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.authenticated
    }

    pub async fn username(&self) -> String {
        self.inner.read().await.credentials.username.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_slots() -> (tempfile::TempDir, SlotStore) {
        let dir = tempfile::tempdir().unwrap();
        let slots = SlotStore::open(dir.path().join("slots.sqlite")).unwrap();
        (dir, slots)
    }

    #[tokio::test]
    async fn default_credentials_gate_the_session() {
        let (_dir, slots) = temp_slots();
        let state = AdminState::load(slots);
        assert!(!state.login("admin", "wrong").await);
        assert!(!state.is_authenticated().await);
        assert!(!state.login("Admin", "admin123").await);
        assert!(state.login("admin", "admin123").await);
        assert!(state.is_authenticated().await);
    }

    #[tokio::test]
    async fn updated_credentials_replace_the_old_pair() {
        let (_dir, slots) = temp_slots();
        let state = AdminState::load(slots);
        state.update_credentials("x".to_string(), "y".to_string()).await;
        assert!(!state.login("admin", "admin123").await);
        assert!(state.login("x", "y").await);
    }

    #[tokio::test]
    async fn session_and_credentials_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slots.sqlite");
        {
            let state = AdminState::load(SlotStore::open(&path).unwrap());
            state.update_credentials("x".to_string(), "y".to_string()).await;
            assert!(state.login("x", "y").await);
        }
        let reloaded = AdminState::load(SlotStore::open(&path).unwrap());
        assert!(reloaded.is_authenticated().await);
        assert_eq!(reloaded.username().await, "x");

        reloaded.logout().await;
        let after_logout = AdminState::load(SlotStore::open(&path).unwrap());
        assert!(!after_logout.is_authenticated().await);
    }
}
