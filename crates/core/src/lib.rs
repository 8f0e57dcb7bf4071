//! Catalog domain logic.
//!
//! Validation and mapping of recording form submissions, the request
//! workflow that decides between re-rendering and committing, and the
//! storage collaborator trait. No HTTP or database dependencies.

pub mod error;
pub mod locale;
pub mod recording;
pub mod reference;
pub mod store;
pub mod types;
pub mod workflow;
