//! Session controller: connection flag and active profile.
//!
//! The only two mutating operations of the navigation core live here.
//! The active profile is held as an index into the known list, so it can
//! never dangle.

use std::collections::HashSet;

use super::error::{CoreError, Result};
use super::profile::Profile;

/// Connection lifecycle. There is no edge back to `Disconnected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    Disconnected,
    Connected,
}

/// Single source of truth for `{connected, active_profile}`.
#[derive(Debug, Clone)]
pub struct SessionController {
    connection: Connection,
    known_profiles: Vec<Profile>,
    active: usize,
}

/// Read-only view handed to the selector and the renderers.
#[derive(Debug, Clone, Copy)]
pub struct SessionSnapshot<'a> {
    pub connected: bool,
    pub active_profile: &'a Profile,
    pub known_profiles: &'a [Profile],
}

impl SessionController {
    /// Create a disconnected session whose active profile is the first one.
    pub fn new(known_profiles: Vec<Profile>) -> Result<Self> {
        if known_profiles.is_empty() {
            return Err(CoreError::NoProfiles);
        }

        let mut seen = HashSet::new();
        for profile in &known_profiles {
            if !seen.insert(profile.id.as_str()) {
                return Err(CoreError::DuplicateProfile {
                    id: profile.id.to_string(),
                });
            }
        }

        Ok(Self {
            connection: Connection::Disconnected,
            known_profiles,
            active: 0,
        })
    }

    /// Mark the session connected. Repeated calls are no-ops.
    pub fn connect(&mut self) {
        if self.connection == Connection::Connected {
            return;
        }
        self.connection = Connection::Connected;
        tracing::info!(
            profile_id = %self.active_profile().id,
            "session connected"
        );
    }

    /// Make the profile with `id` active.
    ///
    /// Unknown ids leave the session unchanged.
    pub fn select_profile(&mut self, id: &str) -> Result<&Profile> {
        let Some(index) = self.known_profiles.iter().position(|p| p.id.as_str() == id) else {
            log::warn!("Ignoring selection of unknown profile '{id}'");
            return Err(CoreError::UnknownProfile { id: id.to_string() });
        };

        if index != self.active {
            self.active = index;
            tracing::info!(
                profile_id = %id,
                role = self.known_profiles[index].role.label(),
                "active profile changed"
            );
        }

        Ok(&self.known_profiles[index])
    }

    pub fn connection(&self) -> Connection {
        self.connection
    }

    pub fn is_connected(&self) -> bool {
        self.connection == Connection::Connected
    }

    pub fn active_profile(&self) -> &Profile {
        &self.known_profiles[self.active]
    }

    pub fn known_profiles(&self) -> &[Profile] {
        &self.known_profiles
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            connected: self.is_connected(),
            active_profile: self.active_profile(),
            known_profiles: &self.known_profiles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::Role;

    fn profiles() -> Vec<Profile> {
        vec![
            Profile::new("1", Role::Investor, "Investor Account"),
            Profile::new("2", Role::Issuer, "Issuer Account"),
        ]
    }

    #[test]
    fn test_initial_state() {
        let session = SessionController::new(profiles()).unwrap();
        assert!(!session.is_connected());
        assert_eq!(session.connection(), Connection::Disconnected);
        assert_eq!(session.active_profile().id.as_str(), "1");
    }

    #[test]
    fn test_empty_profiles_rejected() {
        let err = SessionController::new(Vec::new()).unwrap_err();
        assert_eq!(err, CoreError::NoProfiles);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut list = profiles();
        list.push(Profile::new("2", Role::Admin, "Shadow"));
        let err = SessionController::new(list).unwrap_err();
        assert_eq!(err, CoreError::DuplicateProfile { id: "2".into() });
    }

    #[test]
    fn test_connect_is_idempotent() {
        let mut session = SessionController::new(profiles()).unwrap();
        session.connect();
        session.connect();
        assert!(session.is_connected());
        assert_eq!(session.active_profile().id.as_str(), "1");
    }

    #[test]
    fn test_select_returns_the_known_element() {
        let mut session = SessionController::new(profiles()).unwrap();
        let selected: *const Profile = session.select_profile("2").unwrap();
        assert!(std::ptr::eq(selected, &session.known_profiles()[1]));
        assert!(std::ptr::eq(session.active_profile(), &session.known_profiles()[1]));
    }

    #[test]
    fn test_select_while_disconnected() {
        let mut session = SessionController::new(profiles()).unwrap();
        session.select_profile("2").unwrap();
        assert!(!session.is_connected());
        assert_eq!(session.active_profile().role, Role::Issuer);
    }

    #[test]
    fn test_unknown_profile_keeps_state() {
        let mut session = SessionController::new(profiles()).unwrap();
        session.connect();
        session.select_profile("2").unwrap();

        let err = session.select_profile("999").unwrap_err();
        assert_eq!(err, CoreError::UnknownProfile { id: "999".into() });
        assert_eq!(session.active_profile().id.as_str(), "2");
        assert!(session.is_connected());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut session = SessionController::new(profiles()).unwrap();
        session.connect();
        let snap = session.snapshot();
        assert!(snap.connected);
        assert_eq!(snap.known_profiles.len(), 2);
        assert_eq!(snap.active_profile.display_name, "Investor Account");
    }
}
