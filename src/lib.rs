pub mod api;
pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod store;

pub use api::{compute_area, compute_edge_lengths, reconcile};
pub use config::Policy;
pub use error::{PlotError, Result};
pub use geometry::SurveyPoint;
pub use operations::{AnalyzePlot, AreaReport, PlotSummary, Reconciliation};
pub use store::PointStore;
