use serde::{Deserialize, Serialize};
use std::fmt;

use crate::reducer::Reducer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub value: i64,
}

impl CounterState {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterAction {
    Increment,
    Decrement,
}

impl fmt::Display for CounterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increment => write!(f, "increment"),
            Self::Decrement => write!(f, "decrement"),
        }
    }
}

impl std::str::FromStr for CounterAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "increment" | "inc" => Ok(Self::Increment),
            "decrement" | "dec" => Ok(Self::Decrement),
            _ => Err(format!("invalid counter action: {s}")),
        }
    }
}

/// The built-in reducer: ±1 steps, saturating at the i64 edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(&self, state: &CounterState, action: &CounterAction) -> CounterState {
        match action {
            CounterAction::Increment => CounterState::new(state.value.saturating_add(1)),
            CounterAction::Decrement => CounterState::new(state.value.saturating_sub(1)),
        }
    }
}
