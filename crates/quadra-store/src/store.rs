use tracing::debug;

use quadra_core::Reducer;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<S> = Box<dyn FnMut(&S)>;

/// Unidirectional-data-flow state container.
///
/// The store owns the current state; the only way to change it is
/// [`Store::dispatch`], which runs the reducer, commits the result and
/// then notifies subscribers in subscription order. Stores are plain
/// owned values; construct as many independent ones as needed.
pub struct Store<R: Reducer> {
    reducer: R,
    state: R::State,
    subscribers: Vec<(SubscriptionId, Subscriber<R::State>)>,
    next_id: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new(reducer: R, initial: R::State) -> Self {
        Self {
            reducer,
            state: initial,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn with_default(reducer: R) -> Self
    where
        R::State: Default,
    {
        Self::new(reducer, R::State::default())
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Apply `action` through the reducer and notify every subscriber
    /// with the committed state. Subscribers are notified even when the
    /// reducer returns a state equal to the previous one.
    pub fn dispatch(&mut self, action: R::Action) -> &R::State {
        self.state = self.reducer.reduce(&self.state, &action);
        debug!("dispatch: notifying {} subscribers", self.subscribers.len());
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
        &self.state
    }

    /// Register an observer. It is not called at registration time,
    /// only on subsequent dispatches.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&R::State) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns false if the id is unknown
    /// (already unsubscribed, or from another store).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() < before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use quadra_core::{CounterAction, CounterReducer, CounterState};

    fn counter_store() -> Store<CounterReducer> {
        Store::with_default(CounterReducer)
    }

    fn recording_subscriber(
        store: &mut Store<CounterReducer>,
    ) -> (SubscriptionId, Rc<RefCell<Vec<i64>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |state: &CounterState| sink.borrow_mut().push(state.value));
        (id, seen)
    }

    #[test]
    fn test_initial_state_is_zero() {
        let store = counter_store();
        assert_eq!(store.state().value, 0);
    }

    #[test]
    fn test_dispatch_applies_reducer() {
        let mut store = counter_store();
        assert_eq!(store.dispatch(CounterAction::Increment).value, 1);
        assert_eq!(store.dispatch(CounterAction::Decrement).value, 0);
    }

    #[test]
    fn test_increment_twice_then_decrement() {
        let mut store = counter_store();
        store.dispatch(CounterAction::Increment);
        store.dispatch(CounterAction::Increment);
        store.dispatch(CounterAction::Decrement);
        assert_eq!(store.state().value, 1);
    }

    #[test]
    fn test_subscribers_see_every_committed_state() {
        let mut store = counter_store();
        let (_, seen) = recording_subscriber(&mut store);

        store.dispatch(CounterAction::Increment);
        store.dispatch(CounterAction::Increment);
        store.dispatch(CounterAction::Decrement);

        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn test_subscribe_does_not_fire_immediately() {
        let mut store = counter_store();
        let (_, seen) = recording_subscriber(&mut store);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = counter_store();
        let (id, seen) = recording_subscriber(&mut store);

        store.dispatch(CounterAction::Increment);
        assert!(store.unsubscribe(id));
        store.dispatch(CounterAction::Increment);

        assert_eq!(*seen.borrow(), vec![1]);
        // Second unsubscribe of the same id is a no-op.
        assert!(!store.unsubscribe(id));
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_notification_follows_subscription_order() {
        let mut store = counter_store();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let sink = Rc::clone(&order);
            store.subscribe(move |_: &CounterState| sink.borrow_mut().push(tag));
        }

        store.dispatch(CounterAction::Increment);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_stores_are_independent() {
        let mut left = counter_store();
        let mut right = Store::new(CounterReducer, CounterState::new(100));

        left.dispatch(CounterAction::Increment);
        right.dispatch(CounterAction::Decrement);

        assert_eq!(left.state().value, 1);
        assert_eq!(right.state().value, 99);
    }

    // A reducer over a wider action set than it handles: the match
    // carries a catch-all identity arm, the untyped-dispatch behavior
    // the container must support.
    #[derive(Debug, PartialEq)]
    enum ToggleAction {
        Toggle,
        Ping,
        Pong,
    }

    struct ToggleReducer;

    impl Reducer for ToggleReducer {
        type State = bool;
        type Action = ToggleAction;

        fn reduce(&self, state: &bool, action: &ToggleAction) -> bool {
            match action {
                ToggleAction::Toggle => !state,
                _ => *state,
            }
        }
    }

    #[test]
    fn test_unhandled_action_is_identity_but_still_notifies() {
        let mut store = Store::new(ToggleReducer, false);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state: &bool| sink.borrow_mut().push(*state));

        store.dispatch(ToggleAction::Ping);
        assert!(!*store.state());
        store.dispatch(ToggleAction::Toggle);
        store.dispatch(ToggleAction::Pong);

        // Identity transitions still reach subscribers.
        assert_eq!(*seen.borrow(), vec![false, true, true]);
    }
}
