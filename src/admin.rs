//! Front-end admin mode.
//!
//! This is a plain string comparison against fixed credentials, remembered in
//! session storage. It gates UI affordances only and protects nothing.

use crate::error::AuthError;
use crate::store::KeyValueStore;
use log::info;

pub const ADMIN_FLAG: &str = "venx_admin_auth";
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "Venx@123";

pub struct AdminSession<S> {
    store: S,
}

impl<S: KeyValueStore> AdminSession<S> {
    pub fn new(store: S) -> AdminSession<S> {
        AdminSession { store }
    }

    /// A storage failure reads as logged out.
    pub fn is_admin(&self) -> bool {
        matches!(self.store.get_item(ADMIN_FLAG), Ok(Some(flag)) if flag == "true")
    }

    /// The username is trimmed, the password is compared as typed.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.trim() != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }
        self.store.set_item(ADMIN_FLAG, "true")?;
        info!("admin logged in");
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.store.remove_item(ADMIN_FLAG)?;
        Ok(())
    }
}

/// The pair the "use demo credentials" button fills in.
pub fn demo_credentials() -> (&'static str, &'static str) {
    (ADMIN_USERNAME, ADMIN_PASSWORD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn correct_credentials_set_the_flag() {
        let mut session = AdminSession::new(MemoryStore::new());
        assert!(!session.is_admin());

        session.login("admin", "Venx@123").unwrap();
        assert!(session.is_admin());
    }

    #[test]
    fn username_whitespace_is_tolerated_but_password_is_exact() {
        let mut session = AdminSession::new(MemoryStore::new());
        assert!(session.login("  admin ", "Venx@123").is_ok());
        session.logout().unwrap();

        let result = session.login("admin", " Venx@123");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(!session.is_admin());
    }

    #[test]
    fn wrong_credentials_leave_the_flag_alone() {
        let mut session = AdminSession::new(MemoryStore::new());
        assert!(session.login("root", "Venx@123").is_err());
        assert!(session.login("admin", "venx@123").is_err());
        assert!(!session.is_admin());
    }

    #[test]
    fn logout_clears_the_flag() {
        let mut session = AdminSession::new(MemoryStore::new());
        session.login("admin", "Venx@123").unwrap();
        session.logout().unwrap();
        assert!(!session.is_admin());
    }

    #[test]
    fn demo_credentials_log_in() {
        let (user, pass) = demo_credentials();
        let mut session = AdminSession::new(MemoryStore::new());
        assert!(session.login(user, pass).is_ok());
    }
}
