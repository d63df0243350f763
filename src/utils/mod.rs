// Shared helpers for reading raw bytes and text

pub mod encoding;
pub mod io;
