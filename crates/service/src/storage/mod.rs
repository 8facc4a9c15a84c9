//! Storage helpers for the in-memory repository fakes.

pub mod memory;
