//! One-shot exports of the color table: C++ constants and a system colors CSV.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::colors::color::NamedColor;
use crate::colors::table::ColorTable;
use crate::config::ColorsConfig;
use crate::core::Result;

/// C++ source declaring `argb_*` constants and `omw::Color` objects.
///
/// Web colors live in `namespace colors`, system colors in the nested
/// `namespace windows`, indented by four spaces.
pub fn generate_cpp(table: &ColorTable) -> String {
    let mut cpp = String::from("namespace colors\n{\n");
    push_declarations(&mut cpp, &table.web, "");
    cpp.push('\n');
    cpp.push_str("namespace windows\n{\n");
    push_declarations(&mut cpp, &table.system, "    ");
    cpp.push_str("}\n");
    cpp.push_str("}\n");
    cpp
}

fn push_declarations(cpp: &mut String, colors: &[NamedColor], indent: &str) {
    for color in colors {
        cpp.push_str(&format!(
            "{indent}constexpr int32_t argb_{} = {};\n",
            color.c_name(),
            color.c_value()
        ));
    }
    cpp.push_str(indent);
    cpp.push('\n');
    for color in colors {
        cpp.push_str(&format!(
            "{indent}const omw::Color {} = omw::Color({});\n",
            color.c_name(),
            color.ctor_arg()
        ));
    }
}

/// `Color,Name` CSV of the system colors.
pub fn generate_csv(table: &ColorTable) -> String {
    let mut csv = String::from("Color,Name\n");
    for color in &table.system {
        csv.push_str(&format!("{},{}\n", color.css_value(), color.name));
    }
    csv
}

/// Write both exports into the configured directory and return their paths.
pub fn write_exports(table: &ColorTable, config: &ColorsConfig) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(&config.out_dir)?;

    let cpp_path = config.out_dir.join(&config.cpp_file);
    fs::write(&cpp_path, generate_cpp(table))?;
    info!(path = %cpp_path.display(), colors = table.web.len() + table.system.len(), "wrote C++ colors");

    let csv_path = config.out_dir.join(&config.csv_file);
    fs::write(&csv_path, generate_csv(table))?;
    info!(path = %csv_path.display(), colors = table.system.len(), "wrote system colors CSV");

    Ok((cpp_path, csv_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::color::ColorKind;

    fn small_table() -> ColorTable {
        ColorTable {
            web: vec![
                NamedColor::new("Transparent", 0x00FF_FFFF, ColorKind::Web),
                NamedColor::new("AliceBlue", 0xFFF0_F8FF, ColorKind::Web),
            ],
            system: vec![NamedColor::new("Control", 0xFFF0_F0F0, ColorKind::System)],
        }
    }

    #[test]
    fn test_cpp_layout() {
        let expected = "namespace colors\n\
{\n\
constexpr int32_t argb_transparent = 0x00FFFFFF;\n\
constexpr int32_t argb_aliceBlue = 0xFFF0F8FF;\n\
\n\
const omw::Color transparent = omw::Color(255, 255, 255, 0);\n\
const omw::Color aliceBlue = omw::Color(argb_aliceBlue);\n\
\n\
namespace windows\n\
{\n    \
constexpr int32_t argb_control = 0xFFF0F0F0;\n    \
\n    \
const omw::Color control = omw::Color(argb_control);\n\
}\n\
}\n";
        assert_eq!(generate_cpp(&small_table()), expected);
    }

    #[test]
    fn test_cpp_full_table() {
        let cpp = generate_cpp(&ColorTable::known());
        assert!(cpp.contains("constexpr int32_t argb_yellowGreen = 0xFF9ACD32;\n"));
        assert!(cpp.contains("    const omw::Color windowText = omw::Color(argb_windowText);\n"));
        assert_eq!(cpp.matches("constexpr int32_t").count(), 174);
    }

    #[test]
    fn test_csv() {
        assert_eq!(generate_csv(&small_table()), "Color,Name\n#F0F0F0,Control\n");
        let csv = generate_csv(&ColorTable::known());
        assert_eq!(csv.lines().count(), 34);
        assert!(csv.contains("\n#0078D7,Highlight\n"));
    }

    #[test]
    fn test_write_exports() {
        let dir = tempfile::tempdir().unwrap();
        let config = ColorsConfig {
            out_dir: dir.path().join("generated"),
            ..Default::default()
        };
        let (cpp, csv) = write_exports(&small_table(), &config).unwrap();
        assert_eq!(cpp, dir.path().join("generated/omw_colors.cpp"));
        assert!(fs::read_to_string(cpp).unwrap().starts_with("namespace colors\n"));
        assert!(fs::read_to_string(csv).unwrap().starts_with("Color,Name\n"));
    }
}
