//! JS-facing handle over the links directory and the admin session.
//!
//! The host page builds the link cards and the admin modal itself; this type
//! owns the data and the rules behind them.

use crate::admin::{self, AdminSession};
use crate::error::LinkError;
use crate::links::LinkDirectory;
use crate::store::{local_storage, session_storage};
use wasm_bindgen::prelude::*;
use web_sys::Storage;

#[wasm_bindgen]
pub struct WebLinks {
    links: LinkDirectory<Storage>,
    session: AdminSession<Storage>,
}

#[wasm_bindgen]
impl WebLinks {
    /// Bind to `localStorage` for links and `sessionStorage` for the admin flag.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebLinks, JsValue> {
        Ok(WebLinks {
            links: LinkDirectory::new(local_storage()?),
            session: AdminSession::new(session_storage()?),
        })
    }

    /// The stored links as a JSON array of `{title, url}`.
    pub fn links_json(&mut self) -> Result<String, JsValue> {
        let links = self.links.load()?;
        let json = serde_json::to_string(&links).map_err(LinkError::from)?;
        Ok(json)
    }

    pub fn add_link(&mut self, title: &str, url: &str) -> Result<(), JsValue> {
        self.links.add(title, url)?;
        Ok(())
    }

    /// Returns whether a link was removed.
    pub fn delete_link(&mut self, index: usize) -> Result<bool, JsValue> {
        Ok(self.links.delete(index)?.is_some())
    }

    pub fn reset_to_default(&mut self) -> Result<(), JsValue> {
        self.links.reset_to_default()?;
        Ok(())
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<(), JsValue> {
        self.session.login(username, password)?;
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), JsValue> {
        self.session.logout()?;
        Ok(())
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    pub fn demo_username() -> String {
        admin::demo_credentials().0.to_owned()
    }

    pub fn demo_password() -> String {
        admin::demo_credentials().1.to_owned()
    }
}
