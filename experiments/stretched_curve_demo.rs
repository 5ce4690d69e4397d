// Sample a set of stretched curves and print their frames.
//
// Without arguments the three canonical cases are used: rightward, leftward
// and vertical travel. A JSON case file can replace them, and the frames can
// additionally be plotted to an SVG chart.

use anyhow::{Context, Result};
use bezier_stretch::data::StretchCase;
use bezier_stretch::modules::export::json::frames_to_json;
use bezier_stretch::modules::export::plot::{save_svg, PlotOptions, PlotSeries};
use bezier_stretch::modules::parse::json::cases_from_file;
use bezier_stretch::{pt, FrameSequence, Trajectory};
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Sample stretched Bezier arcs into animation frames
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file with a list of cases, replacing the built-in ones
    #[clap(long)]
    cases: Option<PathBuf>,

    /// Write an SVG chart of every case to this file
    #[clap(long)]
    plot: Option<PathBuf>,

    /// Print each frame sequence as JSON instead of plain lists
    #[clap(long)]
    json: bool,

    /// Also sample the accelerated trajectory example
    #[clap(long)]
    trajectory: bool,
}

fn print_frames(label: &str, frames: &FrameSequence, as_json: bool) -> Result<()> {
    println!("{}", label);
    if as_json {
        println!("{}", frames_to_json(frames)?);
    } else {
        println!("Xframes: {:?}", frames.x_frames());
        println!("Yframes: {:?}", frames.y_frames());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let cases = match &cli.cases {
        Some(path) => cases_from_file(path)
            .with_context(|| format!("Failed to read cases from {}", path.display()))?,
        None => StretchCase::default_cases(),
    };
    info!("Sampling {} stretched curves", cases.len());

    let mut sampled = Vec::with_capacity(cases.len());
    for case in &cases {
        let frames = case
            .curve()
            .generate()
            .with_context(|| format!("Failed to sample {}", case.display_label()))?;
        print_frames(&case.display_label(), &frames, cli.json)?;
        sampled.push((case.display_label(), frames));
    }

    if cli.trajectory {
        let frames = Trajectory::new(pt!(0, 0), pt!(5, 5), pt!(-2, -5))
            .velocity_factor(1.2)
            .generate()?;
        let label = "Trajectory (0, 0) -> (5, 5), acceleration (-2, -5)".to_string();
        print_frames(&label, &frames, cli.json)?;
        sampled.push((label, frames));
    }

    if let Some(path) = &cli.plot {
        let series: Vec<PlotSeries> = sampled
            .iter()
            .map(|(label, frames)| PlotSeries::new(label.as_str(), frames))
            .collect();
        save_svg(path, &series, &PlotOptions::default())
            .with_context(|| format!("Failed to write plot to {}", path.display()))?;
        info!("Plot written to {}", path.display());
    }

    Ok(())
}
