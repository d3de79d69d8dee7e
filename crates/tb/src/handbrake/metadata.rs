//! Disc metadata as reported by `HandBrakeCLI --json`.

use serde::{Deserialize, Serialize};

use super::HandbrakeError;

/// Text printed by HandBrakeCLI right before the title set JSON.
pub const TITLE_SET_MARKER: &str = "JSON Title Set: ";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawTitleSet {
    title_list: Vec<RawTitle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawTitle {
    index: u32,
    #[serde(default)]
    name: String,
    duration: RawDuration,
    geometry: RawGeometry,
    #[serde(default)]
    audio_list: Vec<RawAudio>,
    #[serde(default)]
    subtitle_list: Vec<RawSubtitle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawDuration {
    hours: u64,
    minutes: u64,
    seconds: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawGeometry {
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawAudio {
    track_number: u32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    channel_layout_name: String,
    #[serde(default)]
    language_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawSubtitle {
    track_number: u32,
    #[serde(default)]
    language_code: String,
    #[serde(default)]
    source_name: String,
}

/// A title on the disc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    /// Title number passed to `-t`.
    pub index: u32,
    pub name: String,
    pub duration_ms: u64,
    pub resolution: Resolution,
    pub audio: Vec<AudioTrack>,
    pub subtitles: Vec<SubtitleTrack>,
}

/// Frame size of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// An audio track of a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioTrack {
    /// Track number passed to `-a`.
    pub track: u32,
    pub description: String,
    /// Channel layout name, e.g. "stereo".
    pub layout: String,
    pub language: String,
}

/// A subtitle track of a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtitleTrack {
    /// Track number passed to `-s`.
    pub track: u32,
    pub name: String,
    pub language: String,
}

impl From<RawTitle> for Title {
    fn from(raw: RawTitle) -> Self {
        let d = raw.duration;
        Self {
            index: raw.index,
            name: raw.name,
            duration_ms: ((d.hours * 60 + d.minutes) * 60 + d.seconds) * 1000,
            resolution: Resolution {
                width: raw.geometry.width,
                height: raw.geometry.height,
            },
            audio: raw
                .audio_list
                .into_iter()
                .map(|a| AudioTrack {
                    track: a.track_number,
                    description: a.description,
                    layout: a.channel_layout_name,
                    language: a.language_code,
                })
                .collect(),
            subtitles: raw
                .subtitle_list
                .into_iter()
                .map(|s| SubtitleTrack {
                    track: s.track_number,
                    name: s.source_name,
                    language: s.language_code,
                })
                .collect(),
        }
    }
}

impl Title {
    /// Duration rounded to whole minutes.
    pub fn duration_minutes(&self) -> u64 {
        (self.duration_ms + 30_000) / 60_000
    }

    /// Menu label for the title at position `n` of the scan.
    pub fn label(&self, n: usize) -> String {
        format!("{}: {} ({}) mins", n, self.name, self.duration_minutes())
    }
}

impl AudioTrack {
    /// Menu label for the track.
    pub fn label(&self) -> String {
        format!("{} ({})", self.description, self.language)
    }
}

impl SubtitleTrack {
    /// Menu label for the track.
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.language)
    }
}

/// Extracts the titles from the output of a HandBrakeCLI scan.
///
/// Anything after the title set JSON value is ignored.
pub fn parse_scan_output(output: &str) -> Result<Vec<Title>, HandbrakeError> {
    let start = output
        .find(TITLE_SET_MARKER)
        .ok_or(HandbrakeError::MissingTitleSet)?;
    let json = &output[start + TITLE_SET_MARKER.len()..];

    let set = serde_json::Deserializer::from_str(json)
        .into_iter::<RawTitleSet>()
        .next()
        .ok_or(HandbrakeError::MissingTitleSet)??;

    Ok(set.title_list.into_iter().map(Title::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCAN_OUTPUT: &str = r#"Version: {
    "Name": "HandBrake"
}
Progress: {
    "State": "SCANNING"
}
JSON Title Set: {
    "MainFeature": 1,
    "TitleList": [
        {
            "Index": 1,
            "Name": "MOVIE",
            "Duration": {"Hours": 1, "Minutes": 42, "Seconds": 31, "Ticks": 553059000},
            "Geometry": {"Height": 576, "Width": 720, "PAR": {"Den": 15, "Num": 16}},
            "AudioList": [
                {"TrackNumber": 1, "Description": "English (AC3) (5.1 ch)", "ChannelLayoutName": "5point1", "LanguageCode": "eng"},
                {"TrackNumber": 2, "Description": "Francais (AC3) (2.0 ch)", "ChannelLayoutName": "stereo", "LanguageCode": "fra"}
            ],
            "SubtitleList": [
                {"TrackNumber": 1, "LanguageCode": "eng", "SourceName": "VOBSUB"}
            ]
        },
        {
            "Index": 2,
            "Name": "EXTRAS",
            "Duration": {"Hours": 0, "Minutes": 2, "Seconds": 29},
            "Geometry": {"Height": 576, "Width": 720},
            "AudioList": [],
            "SubtitleList": []
        }
    ]
}
HandBrake has exited.
"#;

    #[test]
    fn test_parse_scan_output() {
        let titles = parse_scan_output(SCAN_OUTPUT).unwrap();
        assert_eq!(titles.len(), 2);

        let movie = &titles[0];
        assert_eq!(movie.index, 1);
        assert_eq!(movie.name, "MOVIE");
        assert_eq!(movie.duration_ms, (3600 + 42 * 60 + 31) * 1000);
        assert_eq!(
            movie.resolution,
            Resolution {
                width: 720,
                height: 576
            }
        );
        assert_eq!(movie.audio.len(), 2);
        assert_eq!(movie.audio[1].track, 2);
        assert_eq!(movie.audio[1].layout, "stereo");
        assert_eq!(movie.audio[1].language, "fra");
        assert_eq!(movie.subtitles[0].name, "VOBSUB");

        assert!(titles[1].audio.is_empty());
    }

    #[test]
    fn test_missing_marker() {
        let err = parse_scan_output("libdvdnav: error opening disc").unwrap_err();
        assert!(matches!(err, HandbrakeError::MissingTitleSet));
    }

    #[test]
    fn test_malformed_title_set() {
        let err = parse_scan_output("JSON Title Set: {\"TitleList\": [{\"Index\": }").unwrap_err();
        assert!(matches!(err, HandbrakeError::MetadataParse(_)));
    }

    #[test]
    fn test_labels() {
        let titles = parse_scan_output(SCAN_OUTPUT).unwrap();
        assert_eq!(titles[0].label(0), "0: MOVIE (103) mins");
        assert_eq!(titles[1].label(1), "1: EXTRAS (2) mins");
        assert_eq!(titles[0].audio[0].label(), "English (AC3) (5.1 ch) (eng)");
        assert_eq!(titles[0].subtitles[0].label(), "VOBSUB - eng");
    }

    #[test]
    fn test_duration_minutes_rounds_half_up() {
        let mut title = parse_scan_output(SCAN_OUTPUT).unwrap().remove(1);
        title.duration_ms = 90_000;
        assert_eq!(title.duration_minutes(), 2);
        title.duration_ms = 89_999;
        assert_eq!(title.duration_minutes(), 1);
    }
}
