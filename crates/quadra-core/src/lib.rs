pub mod counter;
pub mod error;
pub mod quadratic;
pub mod reducer;

pub use counter::{CounterAction, CounterReducer, CounterState};
pub use error::{QuadraError, QuadraResult};
pub use quadratic::{solve, Coefficients, Roots};
pub use reducer::Reducer;
