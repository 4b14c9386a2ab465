pub mod error;
pub mod math;
pub mod pathway;

pub use error::{PolypathError, Result};
pub use pathway::{PathProjection, Pathway, PolylinePathway};
