//! Menu-driven wrapper around `HandBrakeCLI`.
//!
//! A run scans the mounted disc, asks which titles to keep and which audio
//! and subtitle tracks each should carry, then transcodes the chosen titles
//! one after another into MP4 files.

pub mod args;
pub mod disc;
pub mod exec;
pub mod metadata;

use std::io;
use std::path::PathBuf;

use dialoguer::{Input, MultiSelect};

use crate::commands::Result;
use args::TranscodeJob;
use metadata::Title;

/// Errors specific to disc handling.
#[derive(Debug, thiserror::Error)]
pub enum HandbrakeError {
    /// The media directory has no sub-directory.
    #[error("No disc found in {}", dir.display())]
    NoDiscFound { dir: PathBuf },

    /// The media directory could not be listed.
    #[error("Cannot read media directory {}: {source}", dir.display())]
    MediaDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The scan output has no title set.
    #[error("HandBrakeCLI output has no title set")]
    MissingTitleSet,

    /// The title set is not valid JSON of the expected shape.
    #[error("Cannot parse disc metadata: {0}")]
    MetadataParse(#[from] serde_json::Error),

    /// An output name was left blank.
    #[error("Output name for title {title} cannot be empty")]
    EmptyOutputName { title: u32 },
}

/// Interactive questions asked while planning a run.
pub trait Prompter {
    /// Asks the user to pick any number of `items`; returns chosen positions.
    fn select_many(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>>;

    /// Asks the user for a line of text.
    fn input(&mut self, prompt: &str) -> Result<String>;
}

/// [`Prompter`] backed by terminal menus.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select_many(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        let chosen = MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .interact()?;
        Ok(chosen)
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        let text: String = Input::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        Ok(text)
    }
}

/// Asks which titles to transcode and how, producing one job per title.
///
/// Track menus are only shown when a title has more than one track of
/// that kind; otherwise every track is kept.
pub fn plan_jobs(titles: &[Title], prompter: &mut dyn Prompter) -> Result<Vec<TranscodeJob>> {
    let labels: Vec<String> = titles
        .iter()
        .enumerate()
        .map(|(n, title)| title.label(n))
        .collect();
    let chosen = prompter.select_many("Which titles to transcode?", &labels)?;

    let mut jobs = Vec::with_capacity(chosen.len());
    for title in chosen.into_iter().filter_map(|n| titles.get(n)) {
        tracing::info!(index = title.index, name = %title.name, "planning title");

        let name = prompter
            .input(&format!(
                "{}: {} - what do you want to call the output file",
                title.index, title.name
            ))?
            .trim()
            .to_string();
        if name.is_empty() {
            return Err(HandbrakeError::EmptyOutputName { title: title.index }.into());
        }

        let audio = if title.audio.len() > 1 {
            let labels: Vec<String> = title.audio.iter().map(|a| a.label()).collect();
            pick(prompter, "Which audio", &labels, &title.audio)?
        } else {
            title.audio.iter().collect()
        };

        let subtitles = if title.subtitles.len() > 1 {
            let labels: Vec<String> = title.subtitles.iter().map(|s| s.label()).collect();
            pick(prompter, "Which subtitles", &labels, &title.subtitles)?
        } else {
            title.subtitles.iter().collect()
        };

        jobs.push(TranscodeJob {
            name,
            title: title.index,
            audio: audio.iter().map(|a| a.track).collect(),
            subtitles: subtitles.iter().map(|s| s.track).collect(),
        });
    }

    Ok(jobs)
}

fn pick<'a, T>(
    prompter: &mut dyn Prompter,
    prompt: &str,
    labels: &[String],
    items: &'a [T],
) -> Result<Vec<&'a T>> {
    let chosen = prompter.select_many(prompt, labels)?;
    Ok(chosen.into_iter().filter_map(|n| items.get(n)).collect())
}
