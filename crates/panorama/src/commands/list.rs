use clap::Args;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use panorama_core::Rect;

/// Arguments for the `list` subcommand.
#[derive(Args)]
pub struct ListArgs {
    /// Print the full snapshot as JSON
    #[arg(long)]
    json: bool,
}

pub fn execute(args: &ListArgs) {
    let snapshot = super::discover();

    if args.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => super::fail(e),
        }
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#"),
            Cell::new("Device"),
            Cell::new("Monitor"),
            Cell::new("Mode"),
            Cell::new("Orientation"),
            Cell::new("Position").set_alignment(CellAlignment::Right),
            Cell::new("Work area"),
            Cell::new("Primary"),
        ]);

    for (index, display) in snapshot.displays.iter().enumerate() {
        let mode = &display.current;
        table.add_row(vec![
            Cell::new(index),
            Cell::new(&display.device.name),
            Cell::new(display.label()),
            Cell::new(format!(
                "{}x{} @ {} Hz",
                mode.width, mode.height, mode.frequency
            )),
            Cell::new(mode.orientation),
            Cell::new(format!("{}, {}", mode.position.x, mode.position.y))
                .set_alignment(CellAlignment::Right),
            Cell::new(describe(&display.geometry.work_area)),
            Cell::new(if display.is_primary() { "yes" } else { "" }),
        ]);
    }

    println!("{table}");
    println!("\n{} displays found", snapshot.len());
}

fn describe(rect: &Rect) -> String {
    format!("{}x{} at {}, {}", rect.width, rect.height, rect.x, rect.y)
}
