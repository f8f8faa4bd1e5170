mod column;
mod dashboard;

pub use column::DashboardColumn;
pub use dashboard::SubjectsDashboard;
