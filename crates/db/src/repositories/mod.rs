//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod artist_repo;
pub mod label_repo;
pub mod recording_repo;
pub mod track_repo;

pub use artist_repo::ArtistRepo;
pub use label_repo::LabelRepo;
pub use recording_repo::RecordingRepo;
pub use track_repo::TrackRepo;
