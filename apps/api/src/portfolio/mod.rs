// Portfolio shaping: ResumeRecord → PortfolioRecord, plus user-edit merging.

pub mod dates;
pub mod handlers;
pub mod merge;
pub mod transform;
