use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::config::load_config;
use crate::error::RenderError;
use crate::layout::compute_layout;
use crate::parser::load_network;
use crate::render::{render_svg, write_output_svg};

#[derive(Parser, Debug)]
#[command(name = "nlr", version, about = "Layered network graph renderer")]
pub struct Args {
    /// Network description (JSON)
    #[arg(short = 'i', long = "input", default_value = "network.json")]
    pub input: PathBuf,

    /// Output image
    #[arg(short = 'o', long = "output", default_value = "test.png")]
    pub output: PathBuf,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "png")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme and spacing overrides)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Png,
    Svg,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let network = match load_network(&args.input) {
        Ok(network) => network,
        // An absent input ends the run with a one-line diagnostic and no
        // image, not a surfaced error.
        Err(err @ RenderError::MissingInput(_)) => {
            eprintln!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let layout = compute_layout(&network, &config.layout, &mut rand::rng())?;
    let svg = render_svg(&layout, &config.theme, &config.layout);
    match args.output_format {
        OutputFormat::Png => {
            #[cfg(feature = "png")]
            crate::render::write_output_png(&svg, &args.output)?;
            #[cfg(not(feature = "png"))]
            anyhow::bail!("this build has no png support; use --outputFormat svg");
        }
        OutputFormat::Svg => write_output_svg(&svg, &args.output)?,
    }
    Ok(())
}
