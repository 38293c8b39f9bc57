//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod answer_repo;
pub mod question_repo;
pub mod user_repo;

pub use answer_repo::AnswerRepo;
pub use question_repo::QuestionRepo;
pub use user_repo::UserRepo;
