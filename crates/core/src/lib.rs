//! Domain rules for the Q&A service.
//!
//! Everything here is free of I/O so the repository and HTTP layers can share
//! one definition of what a valid question, answer, or account looks like and
//! who may change what.

pub mod answer;
pub mod error;
pub mod ownership;
pub mod question;
pub mod types;
pub mod user;
pub mod validation;
