use crate::catalog::{Episode, Season, Show};
use crate::ui::mvi::{Lens, UiState};
use crate::ui::seasons::SeasonsState;

/// Search session. Lives for the whole run of the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShowsState {
    pub shows: Vec<Show>,
    /// Trimmed query; `shows` is empty whenever this is.
    pub search_term: String,
    pub selected_show: Option<Show>,
    pub seasons: Vec<Season>,
    pub selected_episode: Option<Episode>,
    pub is_sheet_presented: bool,
}

impl UiState for ShowsState {}

impl ShowsState {
    /// Read-only view of the browse session.
    pub fn seasons_state(&self) -> SeasonsState {
        SeasonsLens::project(self)
    }
}

/// Projects the search session onto the browse session of the selected show.
pub struct SeasonsLens;

impl Lens for SeasonsLens {
    type Parent = ShowsState;
    type Child = SeasonsState;

    fn project(parent: &ShowsState) -> SeasonsState {
        SeasonsState {
            selected_show: parent.selected_show.clone(),
            seasons: parent.seasons.clone(),
            selected_episode: parent.selected_episode.clone(),
            is_sheet_presented: parent.is_sheet_presented,
        }
    }

    fn embed(mut parent: ShowsState, child: SeasonsState) -> ShowsState {
        parent.selected_show = child.selected_show;
        parent.seasons = child.seasons;
        parent.selected_episode = child.selected_episode;
        parent.is_sheet_presented = child.is_sheet_presented;
        parent
    }
}
