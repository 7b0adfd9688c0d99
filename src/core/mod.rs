//! Core types shared by the downloads renderer and the color exporter.

mod error;

pub use error::{Error, Result};
