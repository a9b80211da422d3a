//! Human-readable compression report

use console::{Alignment, measure_text_width, pad_str, style};

use super::utils::{format_file_size, format_percent};
use super::{CompressionResult, total_saved};

const HEADERS: [&str; 4] = ["File", "Original", "Final", "Saved"];

/// Render `results` as an aligned table followed by the total saved
pub fn render_table(results: &[CompressionResult]) -> String {
    let rows: Vec<[String; 4]> = results
        .iter()
        .map(|result| {
            [
                result.name.clone(),
                format_file_size(result.original),
                format_file_size(result.final_size),
                format_percent(result.saved_percent()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(measure_text_width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", style("--- Compression Report ---").bold()));

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(title, width)| style(pad_str(title, width, Alignment::Left, None)).bold().to_string())
        .collect();
    out.push_str(&format!("{}\n", header.join("  ")));

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(column, (cell, width))| {
                // File names read left to right, numbers line up on the right.
                let align = if column == 0 { Alignment::Left } else { Alignment::Right };
                pad_str(cell, width, align, None).into_owned()
            })
            .collect();
        out.push_str(&format!("{}\n", cells.join("  ")));
    }

    let saved = total_saved(results);
    out.push_str(&format!("{}\n", style("-".repeat(26)).dim()));
    out.push_str(&format!(
        "TOTAL SPACE SAVED: {} ({:.2} KB)\n",
        style(format_file_size(saved)).green().bold(),
        saved as f64 / 1024.0
    ));

    out
}
