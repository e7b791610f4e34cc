// ABOUTME: Output formatting for image listings.
// ABOUTME: Supports a human-readable table and JSON for scripting.

use crate::api::Image;
use clap::ValueEnum;

/// Output format for `img ls`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for humans
    #[default]
    Table,
    /// JSON array for scripting
    Json,
}

/// Print an image listing in the requested format.
pub fn print_images(images: &[Image], format: OutputFormat) {
    match format {
        OutputFormat::Table => print_table(images),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(images) {
                println!("{json}");
            }
        }
    }
}

fn print_table(images: &[Image]) {
    println!("{:<66} {:<8} {:>10}  TAGS", "DIGEST", "PUBLIC", "SIZE");

    for image in images {
        println!(
            "{:<66} {:<8} {:>10}  {}",
            image.digest,
            if image.public { "yes" } else { "no" },
            format_size(image.size_in_bytes),
            image.tags.join(", "),
        );
    }
}

/// Render a byte count with a binary unit, one decimal place.
fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}
