//! Named colors: the web and Windows system color enumerations, their hex
//! forms, and exports to C++ constants, CSV and a swatch page.

mod color;
mod export;
mod table;
mod view;

pub use color::{argb_hex, css_hex, parse_argb, to_hex_u32, to_hex_u8, ColorKind, NamedColor};
pub use export::{generate_cpp, generate_csv, write_exports};
pub use table::{ColorSelection, ColorTable, SYSTEM_COLORS, WEB_COLORS};
pub use view::{rows, write_swatches, ColorRow, SwatchPage};
