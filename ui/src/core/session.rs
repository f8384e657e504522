//! Who is browsing. Kept in memory only; there is no real authentication.

use serde::{Deserialize, Serialize};

pub const GUEST_NAME: &str = "Guest";
pub const NO_EMAIL: &str = "Not provided";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Customer account offered by the demo sign-in switch.
    pub fn demo_customer() -> Self {
        Self {
            id: "u1".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            role: Role::User,
        }
    }

    /// Administrator account offered by the demo sign-in switch.
    pub fn demo_admin() -> Self {
        Self {
            id: "a1".into(),
            name: "Admin".into(),
            email: "admin@haweya.com".into(),
            role: Role::Admin,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn guest() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    /// Name and email for notifications, with placeholders for guests.
    pub fn identity(&self) -> (&str, &str) {
        match &self.user {
            Some(user) => (user.name.as_str(), user.email.as_str()),
            None => (GUEST_NAME, NO_EMAIL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guests_use_placeholders() {
        let session = Session::guest();
        assert_eq!(session.identity(), ("Guest", "Not provided"));
        assert!(session.user().is_none());
        assert!(!session.is_admin());
    }

    #[test]
    fn signed_in_users_are_identified() {
        let session = Session::signed_in(User::demo_customer());
        assert_eq!(session.identity(), ("John Doe", "john@example.com"));
        assert!(!session.is_admin());
        assert!(Session::signed_in(User::demo_admin()).is_admin());
    }
}
