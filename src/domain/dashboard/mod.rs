pub mod overview;

pub use overview::{DashboardOverview, MetricCard, ToolCard};
