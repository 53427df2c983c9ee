/// Upper bound on the working-directory string, shared by every branch of
/// the `cd` path resolver.
pub const SHELL_CWD_MAX_SIZE: usize = 256;

/// Per-session shell state. The working directory lives here as an owned
/// string: always non-empty, always absolute, only the `cd` handler
/// replaces it. One session per shell, handlers borrow it mutably for the
/// duration of a single dispatch.
pub struct Session {
    pub(crate) current_path: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            current_path: String::from("/"),
        }
    }

    /// Start a session at the given absolute path. Anything that is not an
    /// absolute path falls back to the root.
    pub fn with_current(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.is_empty() || !path.starts_with('/') {
            return Self::new();
        }
        Self { current_path: path }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_root() {
        assert_eq!(Session::new().current_path(), "/");
    }

    #[test]
    fn test_with_current_accepts_absolute() {
        let session = Session::with_current("/home/user");
        assert_eq!(session.current_path(), "/home/user");
    }

    #[test]
    fn test_with_current_rejects_relative_and_empty() {
        assert_eq!(Session::with_current("home").current_path(), "/");
        assert_eq!(Session::with_current("").current_path(), "/");
    }
}
