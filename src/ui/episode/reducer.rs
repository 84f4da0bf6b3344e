use crate::ui::mvi::{Effect, Reducer};

use super::intent::EpisodeIntent;
use super::state::EpisodeState;

pub struct EpisodeEnvironment;

pub struct EpisodeReducer;

impl Reducer for EpisodeReducer {
    type State = EpisodeState;
    type Intent = EpisodeIntent;
    type Environment = EpisodeEnvironment;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
        _env: &Self::Environment,
    ) -> (Self::State, Effect<Self::Intent>) {
        match intent {
            EpisodeIntent::Dismiss => {
                state.is_sheet_presented = false;
                (state, Effect::none())
            }
        }
    }
}
