//! Reading and updating dotenv-style `NAME=value` files.
//!
//! Only what is needed to look up and store a single variable: comments and
//! unrelated lines are left exactly as they were.

use authsecret_types::{bail, AuthSecretError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

static VAR_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

/// Check that `name` is a usable environment variable name.
pub fn validate_var_name(name: &str) -> Result<()> {
    if !VAR_NAME.is_match(name) {
        bail!(Validation, "Invalid variable name '{}'", name);
    }
    Ok(())
}

/// Split a line into `(has_export, key, raw_value)` if it is an assignment.
fn parse_assignment(line: &str) -> Option<(bool, &str, &str)> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (exported, rest) = match trimmed.strip_prefix("export ") {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };

    let (key, value) = rest.split_once('=')?;
    Some((exported, key.trim(), value.trim()))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn read_existing(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AuthSecretError::EnvFile(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Overwrite `path`; a newly created file is readable by the owner only.
/// Existing files keep their permissions.
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.flush()
}

/// Look up `name` in an env file.
///
/// A missing file reads as `None`. The first assignment wins.
pub fn read_var(path: impl AsRef<Path>, name: &str) -> Result<Option<String>> {
    validate_var_name(name)?;

    let Some(content) = read_existing(path.as_ref())? else {
        return Ok(None);
    };

    Ok(content
        .lines()
        .filter_map(parse_assignment)
        .find(|(_, key, _)| *key == name)
        .map(|(_, _, value)| unquote(value).to_string()))
}

/// Set `name=value` in an env file, creating the file if needed.
///
/// The first existing assignment of `name` is replaced in place (keeping an
/// `export ` prefix); otherwise the assignment is appended.
pub fn upsert_var(path: impl AsRef<Path>, name: &str, value: &str) -> Result<()> {
    validate_var_name(name)?;
    let path = path.as_ref();

    let content = read_existing(path)?.unwrap_or_default();
    let mut replaced = false;
    let mut lines: Vec<String> = Vec::new();

    for line in content.lines() {
        match parse_assignment(line) {
            Some((exported, key, _)) if !replaced && key == name => {
                let prefix = if exported { "export " } else { "" };
                lines.push(format!("{}{}={}", prefix, name, value));
                replaced = true;
            }
            _ => lines.push(line.to_string()),
        }
    }

    if !replaced {
        lines.push(format!("{}={}", name, value));
    }

    let mut output = lines.join("\n");
    output.push('\n');

    write_private(path, output.as_bytes()).map_err(|e| {
        AuthSecretError::EnvFile(format!("Failed to write {}: {}", path.display(), e))
    })?;

    tracing::debug!("stored {} in {}", name, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_var_name_validation() {
        assert!(validate_var_name("BETTER_AUTH_SECRET").is_ok());
        assert!(validate_var_name("_private1").is_ok());

        assert!(validate_var_name("").is_err());
        assert!(validate_var_name("1ABC").is_err());
        assert!(validate_var_name("WITH-DASH").is_err());
        assert!(validate_var_name("A B").is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let value = read_var(dir.path().join(".env"), "SECRET").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_read_handles_comments_export_and_quotes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(
            &path,
            "# SECRET=commented\nexport SECRET=\"abc=def\"\nSECRET=second\nOTHER='x'\n",
        )
        .unwrap();

        assert_eq!(read_var(&path, "SECRET").unwrap().as_deref(), Some("abc=def"));
        assert_eq!(read_var(&path, "OTHER").unwrap().as_deref(), Some("x"));
        assert_eq!(read_var(&path, "MISSING").unwrap(), None);
    }

    #[test]
    fn test_read_empty_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "SECRET=\n").unwrap();
        assert_eq!(read_var(&path, "SECRET").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_upsert_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");

        upsert_var(&path, "SECRET", "s3cr3t").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "SECRET=s3cr3t\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        upsert_var(&path, "SECRET", "s3cr3t").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_file_keeps_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "A=1\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        upsert_var(&path, "SECRET", "s3cr3t").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "# app\nA=1\nexport SECRET=old\nB=2").unwrap();

        upsert_var(&path, "SECRET", "new").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# app\nA=1\nexport SECRET=new\nB=2\n"
        );
    }

    #[test]
    fn test_upsert_appends_after_unterminated_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "A=1").unwrap();

        upsert_var(&path, "SECRET", "v").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "A=1\nSECRET=v\n");
    }

    #[test]
    fn test_upsert_rejects_bad_name() {
        let dir = TempDir::new().unwrap();
        let err = upsert_var(dir.path().join(".env"), "BAD NAME", "v").unwrap_err();
        assert!(matches!(err, AuthSecretError::Validation(_)));
    }

    proptest! {
        #[test]
        fn upsert_leaves_other_vars_alone(
            others in proptest::collection::btree_map("[A-Z][A-Z0-9_]{0,8}", "[a-z0-9]{0,12}", 0..6),
            secret in "[A-Za-z0-9+/]{43}=",
        ) {
            prop_assume!(!others.contains_key("SECRET"));
            let dir = TempDir::new().unwrap();
            let path = dir.path().join(".env");
            let body: String = others.iter().map(|(k, v)| format!("{}={}\n", k, v)).collect();
            fs::write(&path, body).unwrap();

            upsert_var(&path, "SECRET", &secret).unwrap();

            prop_assert_eq!(read_var(&path, "SECRET").unwrap(), Some(secret));
            for (key, value) in &others {
                prop_assert_eq!(read_var(&path, key).unwrap(), Some(value.clone()));
            }
        }
    }
}
