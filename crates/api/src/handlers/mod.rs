pub mod artist;
pub mod label;
pub mod recording;
