pub mod analyze;
pub mod query;
pub mod reconcile;

pub use analyze::{AnalyzePlot, PlotSummary};
pub use query::{Area, AreaMeasure, EdgeLengths};
pub use reconcile::{AreaReport, Reconcile, Reconciliation};
