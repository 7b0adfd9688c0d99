//! Visual inspection of the color table: terminal swatches and an HTML page.

use std::io::Write;

use colored::Colorize;
use minijinja::{context, Environment};
use serde::Serialize;

use crate::colors::color::{ColorKind, NamedColor};
use crate::colors::table::ColorTable;
use crate::core::Result;

const SWATCH_TEMPLATE: &str = include_str!("template.html");

/// Flattened view of a color for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorRow {
    pub name: String,
    pub kind: ColorKind,
    pub css: String,
    pub argb: String,
    pub c_name: String,
}

impl From<&NamedColor> for ColorRow {
    fn from(color: &NamedColor) -> Self {
        Self {
            name: color.name.to_string(),
            kind: color.kind,
            css: color.css_value(),
            argb: color.c_value(),
            c_name: color.c_name(),
        }
    }
}

pub fn rows(colors: &[NamedColor]) -> Vec<ColorRow> {
    colors.iter().map(ColorRow::from).collect()
}

/// Print one line per color: swatch, CSS value and name.
///
/// Without `use_color` the swatch column is left blank.
pub fn write_swatches<W: Write>(colors: &[NamedColor], writer: &mut W, use_color: bool) -> Result<()> {
    let width = colors.iter().map(|c| c.name.len()).max().unwrap_or(0);
    for color in colors {
        let swatch = if use_color {
            "      "
                .on_truecolor(color.red(), color.green(), color.blue())
                .to_string()
        } else {
            "      ".to_string()
        };
        let note = if color.is_opaque() {
            String::new()
        } else {
            format!("  alpha {}", color.alpha())
        };
        writeln!(
            writer,
            "{swatch}  {}  {:<width$}{note}",
            color.css_value(),
            color.name
        )?;
    }
    Ok(())
}

/// SwatchPage renders the color table as a standalone HTML page.
pub struct SwatchPage {
    env: Environment<'static>,
}

impl SwatchPage {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("colors.html", SWATCH_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render(&self, table: &ColorTable) -> Result<String> {
        let tmpl = self.env.get_template("colors.html")?;
        let rendered = tmpl.render(context! {
            sections => vec![
                context! { title => "Web Colors", colors => rows(&table.web) },
                context! { title => "System Colors", colors => rows(&table.system) },
            ],
        })?;
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_color() {
        let row = ColorRow::from(&NamedColor::new("AliceBlue", 0xFFF0_F8FF, ColorKind::Web));
        assert_eq!(row.css, "#F0F8FF");
        assert_eq!(row.argb, "0xFFF0F8FF");
        assert_eq!(row.c_name, "aliceBlue");
    }

    #[test]
    fn test_write_swatches_plain() {
        let colors = [
            NamedColor::new("Transparent", 0x00FF_FFFF, ColorKind::Web),
            NamedColor::new("Red", 0xFFFF_0000, ColorKind::Web),
        ];
        let mut out = Vec::new();
        write_swatches(&colors, &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "        #FFFFFF  Transparent  alpha 0");
        assert_eq!(lines[1].trim_end(), "        #FF0000  Red");
    }

    #[test]
    fn test_swatch_page() {
        let page = SwatchPage::new().unwrap();
        let html = page.render(&ColorTable::known()).unwrap();
        assert!(html.contains("<h2>Web Colors</h2>"));
        assert!(html.contains("<h2>System Colors</h2>"));
        assert!(html.contains("background-color:#F0F8FF"));
        assert!(html.contains("<td>WindowText</td>"));
    }
}
