use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum EpisodeIntent {
    /// User closed the detail sheet.
    Dismiss,
}

impl Intent for EpisodeIntent {}
