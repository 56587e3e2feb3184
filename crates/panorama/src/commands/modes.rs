use clap::Args;

use panorama_core::config::Config;
use panorama_core::modes::{self, FrequencyOrder};

/// Arguments for the `modes` subcommand.
#[derive(Args)]
pub struct ModesArgs {
    /// Display number as shown by `panorama list`
    display: usize,
    /// Only list refresh rates offered at this resolution (e.g. 1920x1080)
    #[arg(long)]
    resolution: Option<String>,
    /// Sort refresh rates by value instead of as text
    #[arg(long)]
    numeric: bool,
}

pub fn execute(args: &ModesArgs, config: &Config) {
    let snapshot = super::discover();
    let display = snapshot.get(args.display).unwrap_or_else(|e| super::fail(e));
    let current = &display.current;

    println!("{} ({})", display.device.name, display.label());
    println!(
        "Current: {} @ {} Hz",
        modes::format_resolution(current.width, current.height),
        current.frequency
    );
    if !display.current_is_listed() {
        println!("Note: the current mode is not among the reported modes.");
    }

    println!("\nResolutions:");
    for resolution in modes::distinct_resolutions(&display.modes) {
        println!("  {resolution}");
    }

    let (heading, rates) = match &args.resolution {
        Some(resolution) => {
            let (width, height) =
                modes::parse_resolution(resolution).unwrap_or_else(|e| super::fail(e));
            (
                format!("Refresh rates at {}", modes::format_resolution(width, height)),
                modes::frequencies_for_resolution(&display.modes, width, height),
            )
        }
        None => {
            let order = if args.numeric {
                FrequencyOrder::Numeric
            } else {
                config.modes.frequency_order
            };
            (
                "Refresh rates".to_string(),
                modes::distinct_frequencies(&display.modes, order),
            )
        }
    };

    println!("\n{heading}:");
    if rates.is_empty() {
        println!("  (none)");
    }
    for rate in rates {
        println!("  {rate} Hz");
    }
}
