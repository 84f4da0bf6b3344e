use std::sync::Arc;
use std::time::Duration;

use crate::catalog::CatalogProvider;
use crate::ui::mvi::{pullback, CancelId, Effect, Reducer};
use crate::ui::seasons::{SeasonsEnvironment, SeasonsIntent, SeasonsReducer};

use super::intent::ShowsIntent;
use super::state::{SeasonsLens, ShowsState};

pub struct ShowsEnvironment {
    pub provider: Arc<dyn CatalogProvider>,
    /// Quiet period after the last query change before searching.
    pub debounce: Duration,
}

impl ShowsEnvironment {
    pub fn new(provider: Arc<dyn CatalogProvider>, debounce: Duration) -> Self {
        Self { provider, debounce }
    }

    fn seasons(&self) -> SeasonsEnvironment {
        SeasonsEnvironment {
            provider: Arc::clone(&self.provider),
        }
    }
}

pub struct ShowsReducer;

impl Reducer for ShowsReducer {
    type State = ShowsState;
    type Intent = ShowsIntent;
    type Environment = ShowsEnvironment;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
        env: &Self::Environment,
    ) -> (Self::State, Effect<Self::Intent>) {
        match intent {
            ShowsIntent::Search(term) => {
                state.search_term = term.trim().to_string();
                if state.search_term.is_empty() {
                    // A search still waiting out its debounce must not
                    // repopulate the cleared list.
                    state.shows.clear();
                    return (state, Effect::cancel(CancelId::Search));
                }
                let fetch = search(env, state.search_term.clone());
                (state, Effect::batch([Effect::cancel(CancelId::Search), fetch]))
            }

            ShowsIntent::Update { shows } => {
                state.shows = shows;
                (state, Effect::none())
            }

            ShowsIntent::SetNavigation { selection } => {
                if state.selected_show == selection {
                    return (state, Effect::none());
                }
                let activated = selection.is_some();
                state.selected_show = selection;
                state.seasons.clear();
                state.selected_episode = None;
                state.is_sheet_presented = false;

                let browse = if activated {
                    SeasonsIntent::LoadSeasons
                } else {
                    SeasonsIntent::CancelLoadSeasons
                };
                (state, Effect::send(ShowsIntent::Seasons(browse)))
            }

            ShowsIntent::Seasons(intent) => pullback::<SeasonsReducer, SeasonsLens, _>(
                state,
                intent,
                &env.seasons(),
                ShowsIntent::Seasons,
            ),
        }
    }
}

/// Debounced catalog search for `term`; any failure becomes an empty list.
fn search(env: &ShowsEnvironment, term: String) -> Effect<ShowsIntent> {
    let provider = Arc::clone(&env.provider);
    Effect::task(async move {
        tracing::debug!(query = %term, "Issuing show search");
        let shows = match provider.search(&term).await {
            Ok(shows) => shows,
            Err(err) => {
                tracing::warn!(query = %term, error = %err, "Show search failed, showing no results");
                Vec::new()
            }
        };
        ShowsIntent::Update { shows }
    })
    .debounce(CancelId::Search, env.debounce)
}
