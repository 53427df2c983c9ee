use std::fmt;
use std::fs;

/// Entry type reported by directory iteration, used to pick listing colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Other,
}

#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

#[derive(Debug)]
pub enum SysError {
    ChangeDir(String),
    OpenDir(String),
    Reboot(String),
}

impl fmt::Display for SysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SysError::ChangeDir(path) => write!(f, "cannot enter directory: {}", path),
            SysError::OpenDir(path) => write!(f, "cannot open directory: {}", path),
            SysError::Reboot(msg) => write!(f, "reboot failed: {}", msg),
        }
    }
}

impl std::error::Error for SysError {}

/// OS primitives the built-in commands rely on. Command logic only talks to
/// this trait, so tests can run against an in-memory stand-in.
pub trait System {
    fn change_directory(&self, path: &str) -> Result<(), SysError>;
    fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>, SysError>;
    fn reboot(&self) -> Result<(), SysError>;
}

#[derive(Debug, Clone, Copy)]
pub struct RealSystem;

impl Default for RealSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RealSystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for RealSystem {
    fn change_directory(&self, path: &str) -> Result<(), SysError> {
        std::env::set_current_dir(path).map_err(|_| SysError::ChangeDir(path.to_string()))
    }

    fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>, SysError> {
        let reader = fs::read_dir(path).map_err(|_| SysError::OpenDir(path.to_string()))?;

        let mut entries = Vec::new();
        for item in reader {
            let item = item.map_err(|_| SysError::OpenDir(path.to_string()))?;
            let kind = match item.file_type() {
                Ok(t) if t.is_dir() => EntryKind::Directory,
                Ok(t) if t.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            };
            entries.push(DirEntry {
                name: item.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        Ok(entries)
    }

    fn reboot(&self) -> Result<(), SysError> {
        let status = unsafe { libc::reboot(libc::RB_AUTOBOOT) };
        if status == -1 {
            Err(SysError::Reboot(
                std::io::Error::last_os_error().to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
pub mod fake {
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    use super::{DirEntry, SysError, System};

    /// In-memory stand-in for the OS: a fixed set of directories that exist,
    /// plus a log of every directory-change request made against it.
    pub struct FakeSystem {
        dirs: BTreeSet<String>,
        entries: Vec<DirEntry>,
        pub chdir_log: RefCell<Vec<String>>,
        pub reboot_count: RefCell<u32>,
    }

    impl FakeSystem {
        pub fn with_dirs(dirs: &[&str]) -> Self {
            Self {
                dirs: dirs.iter().map(|d| d.to_string()).collect(),
                entries: Vec::new(),
                chdir_log: RefCell::new(Vec::new()),
                reboot_count: RefCell::new(0),
            }
        }

        pub fn with_entries(mut self, entries: Vec<DirEntry>) -> Self {
            self.entries = entries;
            self
        }
    }

    impl System for FakeSystem {
        fn change_directory(&self, path: &str) -> Result<(), SysError> {
            self.chdir_log.borrow_mut().push(path.to_string());
            if self.dirs.contains(path) {
                Ok(())
            } else {
                Err(SysError::ChangeDir(path.to_string()))
            }
        }

        fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>, SysError> {
            if self.dirs.contains(path) {
                Ok(self.entries.clone())
            } else {
                Err(SysError::OpenDir(path.to_string()))
            }
        }

        fn reboot(&self) -> Result<(), SysError> {
            *self.reboot_count.borrow_mut() += 1;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeSystem;
    use super::*;

    #[test]
    fn test_fake_change_directory() {
        let sys = FakeSystem::with_dirs(&["/tmp"]);

        assert!(sys.change_directory("/tmp").is_ok());
        assert!(sys.change_directory("/nope").is_err());
        assert_eq!(*sys.chdir_log.borrow(), vec!["/tmp", "/nope"]);
    }

    #[test]
    fn test_real_list_directory() {
        let sys = RealSystem::new();
        let temp = std::env::temp_dir();

        assert!(sys.list_directory(&temp.to_string_lossy()).is_ok());
        assert!(sys.list_directory("/definitely/not/a/dir").is_err());
    }
}
