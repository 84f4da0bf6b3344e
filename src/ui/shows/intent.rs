use crate::catalog::Show;
use crate::ui::mvi::Intent;
use crate::ui::seasons::SeasonsIntent;

#[derive(Debug, Clone, PartialEq)]
pub enum ShowsIntent {
    /// The search field changed.
    Search(String),

    /// Search finished. Failures arrive here as an empty list.
    Update { shows: Vec<Show> },

    /// User opened a show, or navigated back with `None`.
    SetNavigation { selection: Option<Show> },

    /// Intent for the browse session of the selected show.
    Seasons(SeasonsIntent),
}

impl Intent for ShowsIntent {}
