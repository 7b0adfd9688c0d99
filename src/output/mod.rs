//! Output formatters for listings and catalog reports.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::core::Result;

/// Output format enum.
#[derive(Clone, Copy, Debug, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
    Markdown,
}

impl Format {
    pub fn format<T: Serialize, W: Write>(&self, data: &T, writer: &mut W) -> Result<()> {
        let value = serde_json::to_value(data)?;
        match self {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, &value)?;
                writeln!(writer)?;
            }
            Format::Markdown => write_markdown(&value, writer, 2)?,
            Format::Text => write_text(&value, writer, 0)?,
        }
        Ok(())
    }
}

fn write_markdown<W: Write>(value: &Value, writer: &mut W, level: usize) -> Result<()> {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                if is_nested(val) {
                    writeln!(writer, "{} {}\n", "#".repeat(level.min(6)), title_key(key))?;
                    write_markdown(val, writer, level + 1)?;
                } else {
                    writeln!(writer, "**{}**: {}\n", title_key(key), scalar(val))?;
                }
            }
        }
        Value::Array(rows) if rows.is_empty() => writeln!(writer, "_No items_\n")?,
        Value::Array(rows) => match columns(rows) {
            Some(headers) => write_table(rows, &headers, writer)?,
            None => {
                for row in rows {
                    write_markdown(row, writer, level)?;
                }
            }
        },
        _ => writeln!(writer, "{}\n", scalar(value))?,
    }
    Ok(())
}

fn write_table<W: Write>(rows: &[Value], headers: &[String], writer: &mut W) -> Result<()> {
    let titles: Vec<String> = headers.iter().map(|h| title_key(h)).collect();
    writeln!(writer, "| {} |", titles.join(" | "))?;
    writeln!(writer, "|{}", " --- |".repeat(headers.len()))?;
    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| scalar(row.get(h).unwrap_or(&Value::Null)).replace('|', "\\|"))
            .collect();
        writeln!(writer, "| {} |", cells.join(" | "))?;
    }
    writeln!(writer)?;
    Ok(())
}

fn write_text<W: Write>(value: &Value, writer: &mut W, indent: usize) -> Result<()> {
    let prefix = "  ".repeat(indent);
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                if is_nested(val) {
                    writeln!(writer, "{prefix}{}:", title_key(key))?;
                    write_text(val, writer, indent + 1)?;
                } else {
                    writeln!(writer, "{prefix}{}: {}", title_key(key), scalar(val))?;
                }
            }
        }
        Value::Array(rows) => {
            for row in rows {
                match row {
                    Value::Object(map) if !map.values().any(is_nested) => {
                        let cells: Vec<String> = map.values().map(scalar).collect();
                        writeln!(writer, "{prefix}{}", cells.join("  "))?;
                    }
                    _ if is_nested(row) => {
                        writeln!(writer, "{prefix}-")?;
                        write_text(row, writer, indent + 1)?;
                    }
                    _ => writeln!(writer, "{prefix}{}", scalar(row))?,
                }
            }
        }
        _ => writeln!(writer, "{prefix}{}", scalar(value))?,
    }
    Ok(())
}

fn is_nested(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Keys shared by every row when all rows are flat objects.
fn columns(rows: &[Value]) -> Option<Vec<String>> {
    let Value::Object(first) = rows.first()? else {
        return None;
    };
    let flat = rows.iter().all(|row| {
        matches!(row, Value::Object(map) if !map.values().any(is_nested))
    });
    flat.then(|| first.keys().cloned().collect())
}

fn title_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => if *b { "yes" } else { "no" }.to_string(),
        Value::Null => "-".to_string(),
        _ => value.to_string(),
    }
}
