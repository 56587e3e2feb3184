use clap::Args;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use panorama_core::config::Config;
use panorama_core::normalize_layout;

/// Arguments for the `layout` subcommand. Unset values come from the
/// `[layout]` section of the config.
#[derive(Args)]
pub struct LayoutArgs {
    /// Width of the bounding box
    #[arg(long)]
    width: Option<f64>,
    /// Height of the bounding box
    #[arg(long)]
    height: Option<f64>,
    /// Fraction of the box width the monitors span
    #[arg(long)]
    scale: Option<f64>,
    /// Pixels per inch used for the physical conversion
    #[arg(long)]
    density: Option<f64>,
}

pub fn execute(args: &LayoutArgs, config: &Config) {
    let mut params = config.layout.params();
    if let Some(width) = args.width {
        params.box_width = width;
    }
    if let Some(height) = args.height {
        params.box_height = height;
    }
    if let Some(scale) = args.scale {
        params.scale_fraction = scale;
    }
    if let Some(density) = args.density {
        params.density = density;
    }

    let snapshot = super::discover();
    let layout =
        normalize_layout(&snapshot.placements(), &params).unwrap_or_else(|e| super::fail(e));

    let right = |text: String| Cell::new(text).set_alignment(CellAlignment::Right);
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#"),
            Cell::new("Device"),
            Cell::new("X").set_alignment(CellAlignment::Right),
            Cell::new("Y").set_alignment(CellAlignment::Right),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
        ]);

    for (index, (display, rect)) in snapshot.displays.iter().zip(&layout.rects).enumerate() {
        table.add_row(vec![
            Cell::new(index),
            Cell::new(&display.device.name),
            right(format!("{:.1}", rect.x)),
            right(format!("{:.1}", rect.y)),
            right(format!("{:.1}", rect.width)),
            right(format!("{:.1}", rect.height)),
        ]);
    }

    println!("{table}");
    println!(
        "\nBox {}x{}, scale {:.2}, margins {:.1} / {:.1}, content height {:.1}",
        params.box_width,
        params.box_height,
        layout.scale,
        layout.margin_x,
        layout.margin_y,
        layout.content_height()
    );
}
