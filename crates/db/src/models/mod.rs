//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row, plus whatever DTOs its writes need.

pub mod answer;
pub mod question;
pub mod user;
