use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T, E = CoreError> = std::result::Result<T, E>;

/// A suite was asked for a function id it does not contain.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[error("Problem suit {suite} lacks a function with function id {function_id}")]
pub struct NoSuchProblem {
    suite: String,
    function_id: i64,
}

impl NoSuchProblem {
    pub fn new(suite: impl Into<String>, function_id: i64) -> Self {
        Self {
            suite: suite.into(),
            function_id,
        }
    }

    pub fn suite(&self) -> &str {
        &self.suite
    }

    pub fn function_id(&self) -> i64 {
        self.function_id
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn report(&self) {
        tracing::warn!(suite = %self.suite, function_id = self.function_id, "{self}");
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(transparent)]
    NoSuchProblem(#[from] NoSuchProblem),
    /// The suite name itself is unknown.
    #[error("Problem suit {0} does not exist")]
    NoSuchSuite(String),
}

impl CoreError {
    /// Suite the failed lookup was made against.
    pub fn suite(&self) -> &str {
        match self {
            CoreError::NoSuchProblem(e) => e.suite(),
            CoreError::NoSuchSuite(s) => s,
        }
    }

    pub fn report(&self) {
        match self {
            CoreError::NoSuchProblem(e) => e.report(),
            CoreError::NoSuchSuite(s) => tracing::warn!(suite = %s, "{self}"),
        }
    }
}
