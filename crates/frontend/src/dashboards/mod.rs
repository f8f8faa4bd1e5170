pub mod d001_subjects;

pub use d001_subjects::ui::SubjectsDashboard;
