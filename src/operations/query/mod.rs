mod area;
mod edge_lengths;

pub use area::{Area, AreaMeasure};
pub use edge_lengths::EdgeLengths;
