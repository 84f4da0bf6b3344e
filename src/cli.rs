//! Command-line arguments and the line-oriented command set of the
//! interactive session.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::config::Config;
use crate::ui::app::{AppIntent, AppState};
use crate::ui::episode::EpisodeIntent;
use crate::ui::seasons::SeasonsIntent;
use crate::ui::shows::ShowsIntent;

#[derive(Debug, Parser)]
#[command(name = "tvmaze-browser", version, about = "Search TV shows and browse their episodes")]
pub struct Args {
    /// Config file to use instead of the default location.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the catalog API base URL.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override the search debounce window in milliseconds.
    #[arg(long)]
    pub debounce_ms: Option<u64>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.catalog.base_url = base_url.clone();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.search.debounce_ms = debounce_ms;
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("No show #{0} in the current results")]
    NoSuchShow(usize),

    #[error("No episode S{season:02}E{number:02} in the loaded seasons")]
    NoSuchEpisode { season: u32, number: u32 },
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(String),
    Select(usize),
    Back,
    Load,
    Cancel,
    Episode { season: u32, number: u32 },
    Dismiss,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  search <text>            search shows (debounced)
  clear                    clear the query and results
  select <n>               open show #n from the results
  back                     close the open show
  load                     (re)load seasons of the open show
  cancel                   cancel a running season load
  episode <season> <n>     open an episode's details
  dismiss                  close the episode details
  help                     show this help
  quit                     exit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "clear" => Ok(Command::Search(String::new())),
            "select" | "open" => rest
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(Command::Select)
                .ok_or(CommandError::Usage("select <n>")),
            "back" => Ok(Command::Back),
            "load" => Ok(Command::Load),
            "cancel" => Ok(Command::Cancel),
            "episode" | "ep" => {
                let mut numbers = rest.split_whitespace().map(str::parse::<u32>);
                match (numbers.next(), numbers.next(), numbers.next()) {
                    (Some(Ok(season)), Some(Ok(number)), None) => {
                        Ok(Command::Episode { season, number })
                    }
                    _ => Err(CommandError::Usage("episode <season> <n>")),
                }
            }
            "dismiss" | "done" => Ok(Command::Dismiss),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }

    /// Translate into an intent against the current state.
    ///
    /// `Help` and `Quit` are handled by the session itself and map to `None`.
    pub fn into_intent(self, state: &AppState) -> Result<Option<AppIntent>, CommandError> {
        let shows = &state.shows;
        let intent = match self {
            Command::Search(text) => ShowsIntent::Search(text),
            Command::Select(n) => {
                let show = shows
                    .shows
                    .get(n - 1)
                    .cloned()
                    .ok_or(CommandError::NoSuchShow(n))?;
                ShowsIntent::SetNavigation {
                    selection: Some(show),
                }
            }
            Command::Back => ShowsIntent::SetNavigation { selection: None },
            Command::Load => ShowsIntent::Seasons(SeasonsIntent::LoadSeasons),
            Command::Cancel => ShowsIntent::Seasons(SeasonsIntent::CancelLoadSeasons),
            Command::Episode { season, number } => {
                let episode = shows
                    .seasons
                    .iter()
                    .filter(|s| s.id == season)
                    .flat_map(|s| s.episodes.iter())
                    .find(|e| e.number == number)
                    .cloned()
                    .ok_or(CommandError::NoSuchEpisode { season, number })?;
                ShowsIntent::Seasons(SeasonsIntent::Select {
                    episode: Some(episode),
                })
            }
            Command::Dismiss => ShowsIntent::Seasons(SeasonsIntent::Episode(EpisodeIntent::Dismiss)),
            Command::Help | Command::Quit => return Ok(None),
        };
        Ok(Some(AppIntent::Shows(intent)))
    }
}

/// Plain-text dump of the session.
pub fn render(state: &AppState) -> String {
    let shows = &state.shows;
    let mut out = String::new();

    let _ = writeln!(out, "Query: \"{}\"", shows.search_term);
    if shows.shows.is_empty() {
        let _ = writeln!(out, "  (no results)");
    }
    for (index, show) in shows.shows.iter().enumerate() {
        let marker = if shows.selected_show.as_ref() == Some(show) { '*' } else { ' ' };
        let _ = writeln!(out, " {}{:>3}. {}", marker, index + 1, show.name);
    }

    let Some(selected) = &shows.selected_show else {
        return out;
    };

    let _ = writeln!(out, "\n{}", selected.name);
    for season in &shows.seasons {
        let _ = writeln!(out, "  Season {}", season.id);
        for episode in &season.episodes {
            let _ = writeln!(out, "    E{:02} {}", episode.number, episode.name);
        }
    }

    if shows.is_sheet_presented {
        if let Some(episode) = &shows.selected_episode {
            let _ = writeln!(
                out,
                "\n[S{:02}E{:02}] {}",
                episode.season, episode.number, episode.name
            );
            if !episode.airdate.is_empty() {
                let _ = writeln!(out, "  Aired: {}", episode.airdate);
            }
            if let Some(runtime) = episode.runtime {
                let _ = writeln!(out, "  Runtime: {} min", runtime);
            }
            if let Some(summary) = &episode.summary {
                let _ = writeln!(out, "  {}", summary);
            }
        }
    }

    out
}
