//! Row models and DTOs, one module per table.

pub mod artist;
pub mod label;
pub mod recording;
pub mod track;
