//! Filesystem utilities.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the home directory.
pub fn expand_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }

    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_untouched() {
        assert_eq!(expand_path("/etc/app/.env"), PathBuf::from("/etc/app/.env"));
        assert_eq!(expand_path(".env"), PathBuf::from(".env"));
    }

    #[test]
    fn test_tilde_expanded() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~/.authsecret/config"), home.join(".authsecret/config"));
        }
    }
}
