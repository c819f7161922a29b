//! broadloom - CLI for the carpet roll cutting-layout engine.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use broadloom::{
    build_diagram, compute_layout_with, layout_stats, quick_validate, shelf_summaries,
    validate_rooms, RollConfig, RoomSpec, DEFAULT_ROLL_WIDTH,
};

/// Compute carpet roll cutting layouts from a rooms file.
#[derive(Parser, Debug)]
#[command(name = "broadloom")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input JSON file: an array of room specifications
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the layout JSON (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Roll width in meters
    #[arg(short, long, default_value_t = DEFAULT_ROLL_WIDTH)]
    roll_width: f64,

    /// Validate only, don't compute a layout
    #[arg(long)]
    validate: bool,

    /// Print a human-readable shelf summary instead of JSON
    #[arg(long)]
    summary: bool,

    /// Include diagram geometry in the JSON output
    #[arg(long)]
    diagram: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.input.display());

    let contents = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let rooms: Vec<RoomSpec> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    info!("Loaded {} room(s)", rooms.len());

    let config = RollConfig::new(args.roll_width);

    // Surface every warning and error, then gate on the validation result.
    let validation = validate_rooms(&rooms, &config);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    quick_validate(&rooms, &config)?;

    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    // Compute the layout
    let layout = compute_layout_with(&rooms, &config)?;

    if args.summary {
        print_summary(&layout, &config);
        return Ok(());
    }

    let json = if args.diagram {
        let diagram = build_diagram(&layout, &config);
        serde_json::to_string_pretty(&serde_json::json!({
            "layout": layout,
            "diagram": diagram,
        }))?
    } else {
        serde_json::to_string_pretty(&layout)?
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote layout: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Print the shelf-by-shelf breakdown and totals.
fn print_summary(layout: &broadloom::LayoutResult, config: &RollConfig) {
    let shelves = shelf_summaries(layout, config);
    let stats = layout_stats(layout, config);

    println!("Roll width: {}m", config.roll_width);
    println!("Shelves: {}", shelves.len());
    for (index, shelf) in shelves.iter().enumerate() {
        let mut detail = String::new();
        if shelf.regular_pieces > 0 && shelf.stair_pieces > 0 {
            detail = format!(
                " ({} room + {} stair)",
                shelf.regular_pieces, shelf.stair_pieces
            );
        } else if shelf.stair_pieces > 0 {
            detail = format!(" ({} stair pieces)", shelf.stair_pieces);
        } else if shelf.regular_pieces > 1 {
            detail = format!(" ({} pieces)", shelf.regular_pieces);
        }
        println!(
            "  Shelf {}: {:.2}m high, {}% width utilized{}",
            index + 1,
            shelf.height,
            shelf.utilization_percent,
            detail
        );
    }
    println!(
        "Efficiency: {}% ({:.2}m\u{00b2} used of {:.2}m\u{00b2})",
        stats.efficiency_percent, stats.used_area, stats.roll_area
    );
    println!("Total: {:.2} broadloom meters", layout.total_length);
}
