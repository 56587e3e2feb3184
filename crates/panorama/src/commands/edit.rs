use clap::Args;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

use panorama_core::modes::format_resolution;
use panorama_core::{DisplayMode, ModeEditor, Orientation};

/// Arguments for the `edit` subcommand.
#[derive(Args)]
pub struct EditArgs {
    /// Display number as shown by `panorama list`
    display: usize,
    /// New resolution (e.g. 1920x1080)
    #[arg(long)]
    resolution: Option<String>,
    /// New refresh rate in Hz
    #[arg(long)]
    frequency: Option<String>,
    /// landscape, portrait, landscape-flipped or portrait-flipped
    #[arg(long)]
    orientation: Option<String>,
}

pub fn execute(args: &EditArgs) {
    let snapshot = super::discover();
    let mut editor = ModeEditor::new(&snapshot);
    let index = args.display;

    if let Some(resolution) = &args.resolution {
        editor
            .set_resolution(index, resolution)
            .unwrap_or_else(|e| super::fail(e));
    }
    if let Some(frequency) = &args.frequency {
        editor
            .set_frequency(index, frequency)
            .unwrap_or_else(|e| super::fail(e));
    }
    if let Some(orientation) = &args.orientation {
        let Some(orientation) = Orientation::parse(orientation) else {
            super::fail(format!("unknown orientation {orientation:?}"));
        };
        editor
            .set_orientation(index, orientation)
            .unwrap_or_else(|e| super::fail(e));
    }

    let active = *editor.active(index).unwrap_or_else(|e| super::fail(e));
    let effective = *editor.effective(index).unwrap_or_else(|e| super::fail(e));
    let options = editor
        .frequency_options(index)
        .unwrap_or_else(|e| super::fail(e));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new(""), Cell::new("Active"), Cell::new("Pending")]);
    let rows: [(&str, fn(&DisplayMode) -> String); 3] = [
        ("Resolution", resolution),
        ("Refresh rate", frequency),
        ("Orientation", orientation),
    ];
    for (field, value) in rows {
        table.add_row(vec![
            Cell::new(field),
            Cell::new(value(&active)),
            Cell::new(value(&effective)),
        ]);
    }
    println!("{table}");

    if options.is_empty() {
        println!(
            "\nWarning: {} is not a supported resolution.",
            format_resolution(effective.width, effective.height)
        );
    } else {
        println!("\nRefresh rates at this resolution: {} Hz", options.join(", "));
        if !options.contains(&effective.frequency.to_string()) {
            println!("Warning: {} Hz is not offered here.", effective.frequency);
        }
    }

    match editor.changes().count() {
        0 => println!("No changes."),
        _ => println!("Dry run: nothing was applied."),
    }
}

fn resolution(mode: &DisplayMode) -> String {
    format_resolution(mode.width, mode.height)
}

fn frequency(mode: &DisplayMode) -> String {
    format!("{} Hz", mode.frequency)
}

fn orientation(mode: &DisplayMode) -> String {
    mode.orientation.to_string()
}
