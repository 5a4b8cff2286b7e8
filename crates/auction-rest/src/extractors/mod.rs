//! Custom Axum extractors.

mod id;
mod validated;

pub use id::*;
pub use validated::*;
