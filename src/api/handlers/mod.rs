pub mod categories;
pub mod questions;
pub mod quizzes;

pub use categories::*;
pub use questions::*;
pub use quizzes::*;
