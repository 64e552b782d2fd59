//! lessonbot: a four-stage wizard that turns a course creator's answers into a
//! Gemini-generated lesson plan.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::AppError;
