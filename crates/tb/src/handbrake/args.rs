//! Command lines for HandBrakeCLI.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Default HandBrakeCLI executable.
pub const DEFAULT_BINARY: &str = "HandBrakeCLI";

/// One title to transcode, with the tracks to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscodeJob {
    /// Output file name without extension.
    pub name: String,
    /// Title index on the disc.
    pub title: u32,
    pub audio: Vec<u32>,
    pub subtitles: Vec<u32>,
}

impl TranscodeJob {
    /// Path of the MP4 this job writes into `output_dir`.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}.mp4", self.name))
    }

    /// Arguments for transcoding this job from `source` into `output_dir`.
    ///
    /// Track options are left out when no track is selected, so HandBrake
    /// falls back to its defaults.
    pub fn to_args(&self, source: &Path, output_dir: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-i".into(),
            source.into(),
            "-o".into(),
            self.output_path(output_dir).into(),
            "-t".into(),
            self.title.to_string().into(),
            "-f".into(),
            "mp4".into(),
        ];

        if !self.subtitles.is_empty() {
            args.push("-s".into());
            args.push(join_tracks(&self.subtitles).into());
        }
        if !self.audio.is_empty() {
            args.push("-a".into());
            args.push(join_tracks(&self.audio).into());
        }

        args.push("-m".into());
        args
    }
}

/// Arguments for scanning every title of `source` as JSON.
pub fn scan_args(source: &Path) -> Vec<OsString> {
    vec![
        "-i".into(),
        source.into(),
        "--json".into(),
        "-t".into(),
        "0".into(),
    ]
}

fn join_tracks(tracks: &[u32]) -> String {
    tracks
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders a command line for display.
pub fn display_command(program: &str, args: &[OsString]) -> String {
    let mut line = program.to_string();
    for arg in args {
        let arg = arg.to_string_lossy();
        line.push(' ');
        if arg.contains(' ') {
            line.push_str(&format!("\"{arg}\""));
        } else {
            line.push_str(&arg);
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn test_scan_args() {
        let args = scan_args(Path::new("/media/me/DISC"));
        assert_eq!(
            strings(&args),
            vec!["-i", "/media/me/DISC", "--json", "-t", "0"]
        );
    }

    #[test]
    fn test_transcode_args_with_tracks() {
        let job = TranscodeJob {
            name: "Movie".to_string(),
            title: 3,
            audio: vec![1, 2],
            subtitles: vec![4],
        };
        let args = job.to_args(Path::new("/media/me/DISC"), Path::new("/home/me/Videos"));
        assert_eq!(
            strings(&args),
            vec![
                "-i",
                "/media/me/DISC",
                "-o",
                "/home/me/Videos/Movie.mp4",
                "-t",
                "3",
                "-f",
                "mp4",
                "-s",
                "4",
                "-a",
                "1,2",
                "-m"
            ]
        );
    }

    #[test]
    fn test_transcode_args_without_tracks() {
        let job = TranscodeJob {
            name: "Extras".to_string(),
            title: 2,
            audio: vec![],
            subtitles: vec![],
        };
        let args = strings(&job.to_args(Path::new("/d"), Path::new("/o")));
        assert!(!args.contains(&"-s".to_string()));
        assert!(!args.contains(&"-a".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("-m"));
    }

    #[test]
    fn test_display_command_quotes_spaces() {
        let job = TranscodeJob {
            name: "Home Movies".to_string(),
            title: 1,
            audio: vec![],
            subtitles: vec![],
        };
        let line = display_command(
            DEFAULT_BINARY,
            &job.to_args(Path::new("/d"), Path::new("/o")),
        );
        assert_eq!(
            line,
            "HandBrakeCLI -i /d -o \"/o/Home Movies.mp4\" -t 1 -f mp4 -m"
        );
    }
}
