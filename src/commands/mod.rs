//! Command implementations

pub mod simple;
pub mod solutions;
pub mod survey;

pub use simple::run_simple;
pub use solutions::{Solution, SolutionsResult, find_solutions};
pub use survey::{RootSummary, SurveyStatistics, run_survey};
