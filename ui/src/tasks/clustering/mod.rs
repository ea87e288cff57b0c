mod builder;
mod metrics;
mod view;

pub use builder::{build, run, ClusterSummary, ClusteringInput, ClusteringReport};
pub use metrics::ClusteringMetrics;
pub use view::ClusteringView;
