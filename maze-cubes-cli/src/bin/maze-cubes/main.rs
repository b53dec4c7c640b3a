//! Binary for the maze-cubes command-line generator.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

use std::io::Write as _;

use anyhow::Context as _;
use clap::Parser as _;

use maze_cubes::{Maze, MazeBuilder, MazeSettings, Outcome, WorldScale};
use maze_cubes_cli::{config_files, logging, output};

mod command_options;
use command_options::{MazeArgs, SizeArg};

fn main() -> Result<(), anyhow::Error> {
    // Destructure as a check that we're using all the args
    let MazeArgs {
        size: SizeArg(size),
        seed,
        cell_size,
        layer_height,
        config,
        raw_size,
        format,
        logging: logging_args,
    } = MazeArgs::parse();

    logging::install(&logging_args)?;

    // Size precedence: --size, then --config, then the default.
    let mut settings = match &config {
        Some(path) => {
            config_files::load_settings(path).context("Error loading configuration file")?
        }
        None => MazeSettings::default(),
    };
    let size = match size {
        Some(size) if raw_size => size,
        Some(size) => {
            settings.apply(size.width, size.height, size.depth);
            settings.to_size()
        }
        None => settings.to_size(),
    };

    let seed = seed.unwrap_or_else(rand::random);
    log::info!(
        "Generating {w}×{h}×{d} maze with seed {seed}",
        w = size.width,
        h = size.height,
        d = size.depth
    );

    let mut builder = MazeBuilder::from_seed(seed);
    let generated = builder
        .generate(size)
        .with_context(|| format!("cannot generate a maze of size {size:?}"))?;
    if generated.report.outcome == Outcome::Fallback {
        log::info!("Using the fallback corridor layout");
    }
    let maze = Maze::new(generated, WorldScale::new(cell_size, layer_height));

    log::debug!(
        "Exit at {exit:?}, world position {position:?}",
        exit = maze.exit_cell(),
        position = maze.exit_world_position(),
    );
    if let Some(spawn) = maze.random_spawn_position(builder.rng_mut()) {
        log::debug!("Spawn point at world position {spawn:?}");
    }

    let mut stdout = std::io::stdout().lock();
    output::write(format, &maze, seed, &mut stdout).context("failed to write output")?;
    stdout.flush()?;
    Ok(())
}
