use std::sync::Arc;

use crate::catalog::CatalogProvider;
use crate::ui::episode::{EpisodeEnvironment, EpisodeReducer};
use crate::ui::mvi::{pullback, CancelId, Effect, Reducer};

use super::intent::SeasonsIntent;
use super::state::{EpisodeLens, SeasonsState};

pub struct SeasonsEnvironment {
    pub provider: Arc<dyn CatalogProvider>,
}

pub struct SeasonsReducer;

impl Reducer for SeasonsReducer {
    type State = SeasonsState;
    type Intent = SeasonsIntent;
    type Environment = SeasonsEnvironment;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
        env: &Self::Environment,
    ) -> (Self::State, Effect<Self::Intent>) {
        match intent {
            SeasonsIntent::LoadSeasons => {
                let Some(show_id) = state.selected_show.as_ref().map(|show| show.id) else {
                    return (state, Effect::send(SeasonsIntent::Update { seasons: Vec::new() }));
                };
                (state, load_seasons(env, show_id))
            }

            SeasonsIntent::Update { seasons } => {
                state.seasons = seasons;
                (state, Effect::none())
            }

            SeasonsIntent::CancelLoadSeasons => (state, Effect::cancel(CancelId::LoadSeasons)),

            SeasonsIntent::Select { episode } => {
                state.selected_episode = episode;
                (state, Effect::send(SeasonsIntent::SetSheet { is_presented: true }))
            }

            SeasonsIntent::SetSheet { is_presented } => {
                state.is_sheet_presented = is_presented;
                (state, Effect::none())
            }

            SeasonsIntent::Episode(intent) => pullback::<EpisodeReducer, EpisodeLens, _>(
                state,
                intent,
                &EpisodeEnvironment,
                SeasonsIntent::Episode,
            ),
        }
    }
}

/// Fetch the show's seasons; any failure becomes an empty season list.
fn load_seasons(env: &SeasonsEnvironment, show_id: u64) -> Effect<SeasonsIntent> {
    let provider = Arc::clone(&env.provider);
    Effect::task(async move {
        let seasons = match provider.seasons(show_id).await {
            Ok(seasons) => seasons,
            Err(err) => {
                tracing::warn!(show_id, error = %err, "Season fetch failed, showing none");
                Vec::new()
            }
        };
        SeasonsIntent::Update { seasons }
    })
    .cancellable(CancelId::LoadSeasons)
}
