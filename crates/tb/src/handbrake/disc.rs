//! Locating the disc to read and the directory to write to.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use super::HandbrakeError;

/// Directory discs get mounted under for the current user: `/media/$USER`.
pub fn default_media_dir() -> PathBuf {
    let user = env::var("USER").unwrap_or_else(|_| "user".to_string());
    Path::new("/media").join(user)
}

/// Default output directory: `~/Videos`.
pub fn default_output_dir() -> PathBuf {
    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join("Videos"),
        None => PathBuf::from(".").join("Videos"),
    }
}

/// Finds the mounted disc: the first sub-directory of `media_dir` by name.
pub fn find_disc(media_dir: &Path) -> Result<PathBuf, HandbrakeError> {
    let entries = fs::read_dir(media_dir).map_err(|source| HandbrakeError::MediaDir {
        dir: media_dir.to_path_buf(),
        source,
    })?;

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|entry| entry.path())
        .collect();
    dirs.sort();

    dirs.into_iter()
        .next()
        .ok_or_else(|| HandbrakeError::NoDiscFound {
            dir: media_dir.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_disc_skips_files() {
        let media = TempDir::new().unwrap();
        fs::write(media.path().join("aaa.txt"), "not a disc").unwrap();
        fs::create_dir(media.path().join("MY_MOVIE")).unwrap();

        let disc = find_disc(media.path()).unwrap();
        assert_eq!(disc, media.path().join("MY_MOVIE"));
    }

    #[test]
    fn test_find_disc_picks_first_by_name() {
        let media = TempDir::new().unwrap();
        fs::create_dir(media.path().join("ZED")).unwrap();
        fs::create_dir(media.path().join("ALPHA")).unwrap();

        assert_eq!(find_disc(media.path()).unwrap(), media.path().join("ALPHA"));
    }

    #[test]
    fn test_find_disc_empty_dir() {
        let media = TempDir::new().unwrap();
        let err = find_disc(media.path()).unwrap_err();
        assert!(matches!(err, HandbrakeError::NoDiscFound { .. }));
        assert!(err.to_string().contains(&media.path().display().to_string()));
    }

    #[test]
    fn test_find_disc_missing_dir() {
        let media = TempDir::new().unwrap();
        let missing = media.path().join("nope");
        let err = find_disc(&missing).unwrap_err();
        assert!(matches!(err, HandbrakeError::MediaDir { .. }));
    }

    #[test]
    fn test_default_output_dir_ends_in_videos() {
        assert!(default_output_dir().ends_with("Videos"));
    }

    #[test]
    fn test_default_media_dir_under_media() {
        assert!(default_media_dir().starts_with("/media"));
    }
}
