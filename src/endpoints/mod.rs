//! Pinata API endpoint groups.

pub mod data;
pub mod pinning;
