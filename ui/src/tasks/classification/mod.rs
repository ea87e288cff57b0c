mod builder;
mod metrics;
mod view;

pub use builder::{build, run, ClassCount, ClassificationInput, ClassificationReport};
pub use metrics::ClassificationMetrics;
pub use view::ClassificationView;
