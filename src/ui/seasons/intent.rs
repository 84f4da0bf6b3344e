use crate::catalog::{Episode, Season};
use crate::ui::episode::EpisodeIntent;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum SeasonsIntent {
    /// Browse view became active: fetch seasons for the selected show.
    LoadSeasons,

    /// Season fetch finished. Failures arrive here as an empty list.
    Update { seasons: Vec<Season> },

    /// Browse view became inactive: abort the fetch if still running.
    CancelLoadSeasons,

    /// User picked an episode (or cleared the pick).
    Select { episode: Option<Episode> },

    /// Show or hide the detail sheet.
    SetSheet { is_presented: bool },

    /// Intent from the detail sheet.
    Episode(EpisodeIntent),
}

impl Intent for SeasonsIntent {}
