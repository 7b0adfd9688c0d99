//! omw-tools - Site and palette tooling for the omw library.
//!
//! Two independent concerns live here:
//!
//! - [`downloads`] renders a hand-authored release catalog into the
//!   download sections of a static page.
//! - [`colors`] enumerates the web and Windows system colors and exports
//!   them as C++ constants, a CSV table and an HTML swatch page.
//!
//! # Example
//!
//! ```
//! use omw_tools::colors::{generate_csv, ColorTable};
//!
//! let csv = generate_csv(&ColorTable::known());
//! assert!(csv.starts_with("Color,Name\n"));
//! ```

pub mod cli;
pub mod colors;
pub mod config;
pub mod core;
pub mod downloads;
pub mod output;

pub use core::{Error, Result};
