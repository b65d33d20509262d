/// A pure state transition: `(state, action) -> next state`.
///
/// Implementations must not observe anything beyond their arguments;
/// the container in `quadra-store` relies on this to make dispatch the
/// only way state changes.
pub trait Reducer {
    type State;
    type Action;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}
