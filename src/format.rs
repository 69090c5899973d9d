//! Console formatting of cell values.

use cellflow_core::CellValue;

/// Format a number for display.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "#NAN!".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "#INF!" } else { "-#INF!" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

/// One display line per cell: `[index] value`.
pub fn format_cell(cell: &CellValue) -> String {
    format!("[{}] {}", cell.index, format_number(cell.value))
}
