//! User-facing export summary.

use crate::export::ExportSummary;

/// Renders the summary printed to stdout after a successful export.
///
/// ```text
/// Exported 1204 products to ./data/products.json
///   Brands: 38, Fuel types: 5
///   Price range: 19.99 - 8499
///   File size: 2,481,337 bytes
/// ```
pub fn format_summary(summary: &ExportSummary) -> String {
    format!(
        "Exported {} products to {}\n  Brands: {}, Fuel types: {}\n  Price range: {} - {}\n  File size: {} bytes",
        summary.total,
        summary.output.display(),
        summary.brand_count,
        summary.fuel_type_count,
        summary.price_min,
        summary.price_max,
        format_thousands(summary.bytes_written)
    )
}

/// Formats an integer with `,` between groups of three digits.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
