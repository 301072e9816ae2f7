use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("folio");
            Some(state_dir.join("folio.log"))
        } else {
            ProjectDirs::from("", "", "folio")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("folio.log"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_ends_in_folio_log() {
        if let Some(path) = AppDirs::log_path() {
            assert_eq!(path.file_name().and_then(|f| f.to_str()), Some("folio.log"));
        }
    }
}
