mod builder;
mod metrics;
mod view;

pub use builder::{build, run, RegressionInput, RegressionReport, Residuals};
pub use metrics::RegressionMetrics;
pub use view::RegressionView;
