mod activity;
mod ids;
mod participation;
mod student;

pub use activity::*;
pub use ids::*;
pub use participation::*;
pub use student::*;
