//! Type inference for columns
//!
//! Given a column's raw values, picks the single logical type that best
//! describes all of them, restricted to what the registry allows.

mod errors;
mod inferrer;

pub use errors::{InferError, InferResult};
pub use inferrer::{values_from_json, InferenceResult, TypeInferrer};
