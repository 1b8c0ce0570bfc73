//! Plate formatting example.
//!
//! Run with: `cargo run --example formatting`

use plate_formatter::format;

fn main() {
    println!("=== Licence Plate Formatting ===\n");

    // -------------------------------------------------------------------------
    // Common layouts
    // -------------------------------------------------------------------------
    println!("--- Common layouts ---\n");

    let plates = [
        ("ab12cd", "letters-digits-letters"),
        ("12ab34", "digits-letters-digits"),
        ("1234ab", "four digits, split in half"),
        ("abcd12", "four letters, split in half"),
        ("1abc23", "short leading group"),
    ];

    for (raw, description) in plates {
        println!("  {}", description);
        println!("    Input:  {}", raw);
        println!("    Output: {}", format::format_plate(raw));
        println!();
    }

    // -------------------------------------------------------------------------
    // Messy input
    // -------------------------------------------------------------------------
    println!("--- Spaces and hyphens are ignored ---\n");

    for raw in ["ab-12 34", " a b 1 2 3 4 ", "A-B-1-2-3-4"] {
        println!("    {:<16} -> {}", format!("{:?}", raw), format::format_plate(raw));
    }
    println!();

    // -------------------------------------------------------------------------
    // Pipeline steps
    // -------------------------------------------------------------------------
    println!("--- Pipeline for \"AB1234CD\" ---\n");

    let normalized = format::normalize("AB1234CD");
    let segmented = format::segment(&normalized);
    let repaired = format::repair(&segmented);
    let trimmed = format::trim_leading_separator(&repaired);
    let collapsed = format::collapse(trimmed);

    println!("    normalize: {}", normalized);
    println!("    segment:   {}", segmented);
    println!("    repair:    {}", repaired);
    println!("    collapse:  {}", collapsed);
    println!();

    // -------------------------------------------------------------------------
    // Fixed points
    // -------------------------------------------------------------------------
    println!("--- Write-back decisions ---\n");

    for raw in ["AB-12-CD", "ab-12-cd", "", "   "] {
        match format::reformat(raw) {
            format::Reformat::Unchanged => println!("    {:?}: leave alone", raw),
            format::Reformat::Rewrite(value) => println!("    {:?}: write {:?}", raw, value),
        }
    }
}
