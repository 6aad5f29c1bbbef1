pub mod errors;

pub use errors::{CoreError, NoSuchProblem};
