//! Root of the machine tree: the application state and its store.

use std::sync::Arc;

use crate::catalog::{CatalogError, CatalogProvider, TvMazeClient};
use crate::config::Config;
use crate::ui::mvi::{pullback, Effect, Intent, Lens, Reducer, Store, UiState};
use crate::ui::shows::{ShowsEnvironment, ShowsIntent, ShowsReducer, ShowsState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub shows: ShowsState,
}

impl UiState for AppState {}

#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    Shows(ShowsIntent),
}

impl Intent for AppIntent {}

pub struct AppEnvironment {
    pub shows: ShowsEnvironment,
}

impl AppEnvironment {
    pub fn new(provider: Arc<dyn CatalogProvider>, config: &Config) -> Self {
        Self {
            shows: ShowsEnvironment::new(provider, config.search.debounce()),
        }
    }

    /// Environment talking to the TVMaze API described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        let provider = Arc::new(TvMazeClient::new(&config.catalog)?);
        Ok(Self::new(provider, config))
    }
}

/// Projects the application onto the show search.
///
/// Every field is written back, selection and browse session included.
pub struct ShowsLens;

impl Lens for ShowsLens {
    type Parent = AppState;
    type Child = ShowsState;

    fn project(parent: &AppState) -> ShowsState {
        parent.shows.clone()
    }

    fn embed(mut parent: AppState, child: ShowsState) -> AppState {
        parent.shows = child;
        parent
    }
}

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;
    type Environment = AppEnvironment;

    fn reduce(
        state: Self::State,
        intent: Self::Intent,
        env: &Self::Environment,
    ) -> (Self::State, Effect<Self::Intent>) {
        match intent {
            AppIntent::Shows(intent) => {
                pullback::<ShowsReducer, ShowsLens, _>(state, intent, &env.shows, AppIntent::Shows)
            }
        }
    }
}

pub type AppStore = Store<AppReducer>;

pub fn app_store(env: AppEnvironment) -> AppStore {
    Store::new(AppState::default(), env)
}
