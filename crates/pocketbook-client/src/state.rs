use std::fs;
use std::path::{Path, PathBuf};

use crate::{ClientError, ClientResult};

pub const HOME_ENV_VAR: &str = "POCKETBOOK_HOME";

pub fn resolve_tracker_home(home_override: Option<&Path>) -> ClientResult<PathBuf> {
    let candidate = match home_override {
        Some(path) => path.to_path_buf(),
        None => {
            if let Some(override_path) = std::env::var_os(HOME_ENV_VAR) {
                PathBuf::from(override_path)
            } else if let Some(home_path) = home::home_dir() {
                home_path.join(".pocketbook")
            } else {
                return Err(ClientError::tracker_home_unavailable(
                    Path::new("."),
                    "Could not resolve a home directory for tracker storage.",
                ));
            }
        }
    };

    absolutize(&candidate)
}

pub fn ensure_tracker_directory(path: &Path) -> ClientResult<()> {
    fs::create_dir_all(path).map_err(|error| map_io_error(path, &error))?;
    set_private_permissions_best_effort(path);
    Ok(())
}

pub fn map_io_error(path: &Path, error: &std::io::Error) -> ClientError {
    if error.kind() == std::io::ErrorKind::PermissionDenied {
        return ClientError::tracker_home_unavailable(path, &format!("permission denied ({error})"));
    }

    ClientError::tracker_home_unavailable(path, &error.to_string())
}

fn absolutize(path: &Path) -> ClientResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| ClientError::tracker_home_unavailable(path, &error.to_string()))
}

#[cfg(unix)]
fn set_private_permissions_best_effort(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o700));
}

#[cfg(not(unix))]
fn set_private_permissions_best_effort(_path: &Path) {}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::resolve_tracker_home;

    #[test]
    fn explicit_override_wins() {
        let resolved = resolve_tracker_home(Some(Path::new("/tmp/pocketbook-home")));
        assert!(resolved.is_ok());
        if let Ok(path) = resolved {
            assert_eq!(path, Path::new("/tmp/pocketbook-home"));
        }
    }

    #[test]
    fn relative_override_is_made_absolute() {
        let resolved = resolve_tracker_home(Some(Path::new("relative-home")));
        assert!(resolved.is_ok());
        if let Ok(path) = resolved {
            assert!(path.is_absolute());
            assert!(path.ends_with("relative-home"));
        }
    }
}
