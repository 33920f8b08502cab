//! Core ETL (Extract, Transform, Load) abstractions
//!
//! A clone is an ETL run: extract the source workflow, rename it, and load
//! it into the target.

mod extract;
mod load;
mod pipeline;
mod transform;

pub use extract::Extractor;
pub use load::Loader;
pub use pipeline::Pipeline;
pub use transform::Transformer;
