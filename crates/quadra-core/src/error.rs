use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuadraError {
    #[error("not a quadratic: leading coefficient a is zero")]
    Degenerate,

    #[error("coefficient {name} is not finite: {value}")]
    NonFinite { name: &'static str, value: f64 },
}

pub type QuadraResult<T> = Result<T, QuadraError>;
