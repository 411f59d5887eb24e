// Table rendering.
//
// The core crate hands over `LabelTable`s (title, seven column headers,
// labelled rows of seven cells). Renderers only decide layout: the text
// renderer pads every column to its widest entry and optionally draws
// ASCII rules; the JSON renderer serializes the tables as-is.
//
// Widths are measured in chars, not bytes, so the diminished marker counts
// as one column.

use crate::config::{Border, OutputFormat, RenderConfig};
use anyhow::Result;
use modal_harmony::LabelTable;
use std::fmt::Write;

pub trait TableRenderer {
    fn render(&self, tables: &[LabelTable]) -> Result<String>;
}

pub struct TextRenderer {
    pub border: Border,
    pub padding: usize,
}

pub struct JsonRenderer;

/// Build the renderer a config asks for.
pub fn renderer_for(config: &RenderConfig) -> Box<dyn TableRenderer> {
    match config.format {
        OutputFormat::Text => Box::new(TextRenderer {
            border: config.border,
            padding: config.padding,
        }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

fn char_width(s: &str) -> usize {
    s.chars().count()
}

/// Widths of the label column followed by the seven cell columns.
fn column_widths(table: &LabelTable) -> [usize; 8] {
    let mut widths = [0; 8];
    for (w, header) in widths[1..].iter_mut().zip(&table.columns) {
        *w = char_width(header);
    }
    for row in &table.rows {
        widths[0] = widths[0].max(char_width(&row.label));
        for (w, cell) in widths[1..].iter_mut().zip(&row.cells) {
            *w = (*w).max(char_width(cell));
        }
    }
    widths
}

impl TextRenderer {
    fn rule(&self, out: &mut String, widths: &[usize; 8]) {
        if self.border == Border::None {
            return;
        }
        out.push('+');
        for &w in widths {
            out.push_str(&"-".repeat(w + 2 * self.padding));
            out.push('+');
        }
        out.push('\n');
    }

    fn line<'a>(
        &self,
        out: &mut String,
        widths: &[usize; 8],
        cells: impl Iterator<Item = &'a str>,
    ) {
        let pad = " ".repeat(self.padding);
        let (open, sep, close) = match self.border {
            Border::Ascii => ("|", "|", "|"),
            Border::None => ("", " ", ""),
        };
        let mut text = String::from(open);
        for (i, (cell, &w)) in cells.zip(widths).enumerate() {
            if i > 0 {
                text.push_str(sep);
            }
            let _ = write!(text, "{pad}{cell:<w$}{pad}");
        }
        text.push_str(close);
        out.push_str(text.trim_end());
        out.push('\n');
    }

    fn render_table(&self, out: &mut String, table: &LabelTable) {
        let widths = column_widths(table);
        out.push_str(&table.title);
        out.push('\n');
        self.rule(out, &widths);
        self.line(
            out,
            &widths,
            std::iter::once("").chain(table.columns.iter().map(String::as_str)),
        );
        self.rule(out, &widths);
        for row in &table.rows {
            self.line(
                out,
                &widths,
                std::iter::once(row.label.as_str()).chain(row.cells.iter().map(String::as_str)),
            );
        }
        self.rule(out, &widths);
    }
}

impl TableRenderer for TextRenderer {
    fn render(&self, tables: &[LabelTable]) -> Result<String> {
        let mut out = String::new();
        for (i, table) in tables.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.render_table(&mut out, table);
        }
        Ok(out)
    }
}

impl TableRenderer for JsonRenderer {
    fn render(&self, tables: &[LabelTable]) -> Result<String> {
        let mut json = serde_json::to_string_pretty(tables)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modal_harmony::LabelRow;

    fn sample() -> LabelTable {
        LabelTable {
            title: "Sample".to_string(),
            columns: ["1", "2", "3", "4", "5", "6", "7"].map(String::from),
            rows: vec![LabelRow {
                label: "Locrian (b5)".to_string(),
                cells: ["i°", "bII", "biii", "iv", "bV", "bVI", "bvii"].map(String::from),
            }],
        }
    }

    #[test]
    fn test_ascii_layout() {
        let text = TextRenderer { border: Border::Ascii, padding: 1 }
            .render(&[sample()])
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Sample");
        assert_eq!(
            lines[1],
            "+--------------+----+-----+------+----+----+-----+------+"
        );
        assert_eq!(
            lines[4],
            "| Locrian (b5) | i° | bII | biii | iv | bV | bVI | bvii |"
        );
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_rows_share_width_in_chars() {
        let text = TextRenderer { border: Border::Ascii, padding: 1 }
            .render(&[sample()])
            .unwrap();
        let widths: Vec<usize> = text.lines().skip(1).map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_borderless() {
        let text = TextRenderer { border: Border::None, padding: 0 }
            .render(&[sample()])
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "Locrian (b5) i° bII biii iv bV bVI bvii");
    }

    #[test]
    fn test_json() {
        let json = JsonRenderer.render(&[sample()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["title"], "Sample");
        assert_eq!(value[0]["rows"][0]["cells"][0], "i°");
    }
}
