//! Navigation signal raised when the session expires

use parking_lot::Mutex;

/// Where the user currently is, and how to move them
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Path of the current page, e.g. `/guild`
    fn current_path(&self) -> String;

    /// Move the user to `path`
    fn navigate(&self, path: &str);
}

/// Decides whether an expired session sends the user to the entry page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectPolicy {
    pub entry_path: String,
    pub register_path: String,
}

impl RedirectPolicy {
    pub fn new(entry_path: impl Into<String>, register_path: impl Into<String>) -> Self {
        Self {
            entry_path: entry_path.into(),
            register_path: register_path.into(),
        }
    }

    /// No redirect from the entry or registration page; first-time signup
    /// runs there without a session.
    pub fn should_redirect(&self, current_path: &str) -> bool {
        let path = current_path.split(['?', '#']).next().unwrap_or_default();
        path != self.entry_path && path != self.register_path
    }
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self::new("/", "/register")
    }
}

/// Navigator that only tracks the current path
#[derive(Debug)]
pub struct InMemoryNavigator {
    current: Mutex<String>,
    redirects: Mutex<Vec<String>>,
}

impl InMemoryNavigator {
    pub fn new(start_path: impl Into<String>) -> Self {
        Self {
            current: Mutex::new(start_path.into()),
            redirects: Mutex::new(Vec::new()),
        }
    }

    /// Paths navigated to, oldest first
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().clone()
    }

    /// Record a page change made by the user
    pub fn visit(&self, path: impl Into<String>) {
        *self.current.lock() = path.into();
    }
}

impl Navigator for InMemoryNavigator {
    fn current_path(&self) -> String {
        self.current.lock().clone()
    }

    fn navigate(&self, path: &str) {
        *self.current.lock() = path.to_string();
        self.redirects.lock().push(path.to_string());
    }
}
