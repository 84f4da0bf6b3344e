//! State projections for composing reducers.

use super::effect::Effect;
use super::reducer::Reducer;

/// Bidirectional view of a parent state as a child machine's state.
///
/// `embed(parent, project(&parent))` must give back `parent` unchanged.
pub trait Lens {
    type Parent;
    type Child;

    fn project(parent: &Self::Parent) -> Self::Child;

    fn embed(parent: Self::Parent, child: Self::Child) -> Self::Parent;
}

/// Run a child reducer against the projection of `state` and write the
/// result back, re-tagging the child's effects with `wrap`.
pub fn pullback<R, L, PI>(
    state: L::Parent,
    intent: R::Intent,
    env: &R::Environment,
    wrap: fn(R::Intent) -> PI,
) -> (L::Parent, Effect<PI>)
where
    R: Reducer,
    L: Lens<Child = R::State>,
    PI: Send + 'static,
{
    let child = L::project(&state);
    let (child, effect) = R::reduce(child, intent, env);
    (L::embed(state, child), effect.map(wrap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mvi::{Intent, UiState};

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter {
        value: u32,
    }
    impl UiState for Counter {}

    #[derive(Debug, Clone, PartialEq)]
    enum CounterIntent {
        Increment,
        Echo,
    }
    impl Intent for CounterIntent {}

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = Counter;
        type Intent = CounterIntent;
        type Environment = ();

        fn reduce(mut state: Counter, intent: CounterIntent, _env: &()) -> (Counter, Effect<CounterIntent>) {
            match intent {
                CounterIntent::Increment => {
                    state.value += 1;
                    (state, Effect::none())
                }
                CounterIntent::Echo => (state, Effect::send(CounterIntent::Increment)),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Parent {
        label: String,
        count: u32,
    }

    #[derive(Debug, PartialEq)]
    enum ParentIntent {
        Counter(CounterIntent),
    }

    struct CountLens;

    impl Lens for CountLens {
        type Parent = Parent;
        type Child = Counter;

        fn project(parent: &Parent) -> Counter {
            Counter { value: parent.count }
        }

        fn embed(mut parent: Parent, child: Counter) -> Parent {
            parent.count = child.value;
            parent
        }
    }

    #[test]
    fn pullback_writes_child_changes_into_parent() {
        let parent = Parent {
            label: "kept".into(),
            count: 4,
        };
        let (parent, effect) = pullback::<CounterReducer, CountLens, _>(
            parent,
            CounterIntent::Increment,
            &(),
            ParentIntent::Counter,
        );
        assert_eq!(parent.count, 5);
        assert_eq!(parent.label, "kept");
        assert!(effect.is_none());
    }

    #[test]
    fn pullback_wraps_child_effects() {
        let (_, effect) = pullback::<CounterReducer, CountLens, _>(
            Parent::default(),
            CounterIntent::Echo,
            &(),
            ParentIntent::Counter,
        );
        match effect {
            Effect::Send(intent) => {
                assert_eq!(intent, ParentIntent::Counter(CounterIntent::Increment))
            }
            other => panic!("expected Send, got {:?}", other),
        }
    }
}
