use anyhow::Context;
use backdrop_core::{
    scroll_fade_opacity, DecorationLayout, LayoutEngine, LayoutPolicy, Viewport,
};
use clap::{Parser, ValueEnum};

/// Print the backdrop layout a browser would draw for a viewport.
#[derive(Parser, Debug)]
#[command(name = "backdrop-native", about, version)]
struct Cli {
    /// Viewport width in CSS pixels
    #[arg(long, default_value_t = 1440)]
    width: i32,
    /// Viewport height in CSS pixels
    #[arg(long, default_value_t = 900)]
    height: i32,
    /// Override the layout seed
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i32>,
    /// Narrow-layout band fraction override
    #[arg(long)]
    band: Option<f64>,
    /// Also report the layer opacity at this scroll offset
    #[arg(long)]
    scroll_y: Option<f64>,
    #[arg(short, long, default_value = "text")]
    output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    let cli = Cli::parse();

    let mut policy = LayoutPolicy::default();
    if let Some(seed) = cli.seed {
        policy = policy.with_seed(seed);
    }
    if let Some(band) = cli.band {
        policy.narrow_band_fraction = band;
    }
    let engine = LayoutEngine::new(policy).context("invalid layout policy")?;
    let layout = engine.layout(Viewport::new(cli.width, cli.height));
    log::info!(
        "{}x{} -> {:?}, {} items",
        cli.width,
        cli.height,
        layout.mode,
        layout.items.len()
    );

    match cli.output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&layout).context("serialize layout")?;
            println!("{json}");
        }
        OutputFormat::Text => print_table(&layout),
    }

    if let Some(y) = cli.scroll_y {
        let fade = scroll_fade_opacity(layout.mode, y, engine.policy());
        println!("layer opacity at scrollY={y}: {fade:.3}");
    }
    Ok(())
}

fn print_table(layout: &DecorationLayout) {
    println!(
        "mode={:?} cell={}px grid={}x{}",
        layout.mode, layout.cell_size, layout.cols, layout.rows
    );
    println!(
        "{:<14} {:>8} {:>8} {:<16} {:>7} {:>9} {:>7}",
        "key", "x", "y", "icon", "opacity", "duration", "delay"
    );
    for item in &layout.items {
        let (duration, delay) = item.animation_timing.for_mode(layout.mode);
        println!(
            "{:<14} {:>8.1} {:>8.1} {:<16} {:>7.3} {:>9.3} {:>7.3}",
            item.key(),
            item.position.x,
            item.position.y,
            item.icon_name(),
            item.opacity,
            duration,
            delay
        );
    }
    if layout.is_empty() {
        println!("(no decorable cells)");
    }
}
