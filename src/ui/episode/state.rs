use crate::catalog::Episode;
use crate::ui::mvi::UiState;

/// What the detail sheet sees of the browse session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EpisodeState {
    pub selected_episode: Option<Episode>,
    pub is_sheet_presented: bool,
}

impl UiState for EpisodeState {}
