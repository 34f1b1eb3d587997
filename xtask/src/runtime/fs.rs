//! Shared filesystem helpers for xtask commands.

use crate::runtime::error::{XtaskError, XtaskResult};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a text file, returning `None` if it does not exist.
pub fn read_text_if_exists(path: &Path) -> XtaskResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(
            XtaskError::io(format!("failed to read {}: {err}", path.display())).with_path(path),
        ),
    }
}

/// Write a text file, creating missing parent directories.
pub fn write_text(path: &Path, contents: &str) -> XtaskResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| {
            XtaskError::io(format!("failed to create {}: {err}", parent.display()))
                .with_path(parent)
        })?;
    }
    fs::write(path, contents).map_err(|err| {
        XtaskError::io(format!("failed to write {}: {err}", path.display())).with_path(path)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "xtask-fs-test-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn write_then_read_creates_parents() {
        let dir = unique_temp_dir();
        let path = dir.join("nested/out.css");
        assert_eq!(read_text_if_exists(&path).expect("read missing"), None);

        write_text(&path, "a { }\n").expect("write");
        assert_eq!(
            read_text_if_exists(&path).expect("read"),
            Some("a { }\n".to_string())
        );
        let _ = fs::remove_dir_all(dir);
    }
}
