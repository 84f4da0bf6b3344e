use crate::catalog::{Episode, Season, Show};
use crate::ui::episode::EpisodeState;
use crate::ui::mvi::{Lens, UiState};

/// Browse session for one show.
///
/// `seasons` stays empty until a fetch completes, and while no show is
/// selected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeasonsState {
    pub selected_show: Option<Show>,
    pub seasons: Vec<Season>,
    pub selected_episode: Option<Episode>,
    pub is_sheet_presented: bool,
}

impl UiState for SeasonsState {}

/// Projects the browse session onto the detail sheet.
pub struct EpisodeLens;

impl Lens for EpisodeLens {
    type Parent = SeasonsState;
    type Child = EpisodeState;

    fn project(parent: &SeasonsState) -> EpisodeState {
        EpisodeState {
            selected_episode: parent.selected_episode.clone(),
            is_sheet_presented: parent.is_sheet_presented,
        }
    }

    fn embed(mut parent: SeasonsState, child: EpisodeState) -> SeasonsState {
        parent.selected_episode = child.selected_episode;
        parent.is_sheet_presented = child.is_sheet_presented;
        parent
    }
}
