//! Storage backends for the service layer.
//!
//! `memory` holds every repository in process, for development runs and
//! tests; the SeaORM repositories live next to their traits.

pub mod memory;
