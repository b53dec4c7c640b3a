//! Command line option parsing.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use maze_cubes::WorldScale;
use maze_cubes::math::{GridSize, GridSizeCoord};
use maze_cubes_cli::logging::LoggingArgs;
use maze_cubes_cli::output::OutputFormat;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "maze-cubes", author, about, version,
    help_template = "\
{name} {version}
{author}
{about-with-newline}
{usage-heading}
    {usage}

{all-args}{after-help}",
)]
pub(crate) struct MazeArgs {
    /// Dimensions of the maze: width, height, and depth.
    ///
    /// Unless --raw-size is given, each is clamped to the sizes the game offers
    /// (8 to 64 wide and deep, 5 to 32 high).
    ///
    /// If not specified, the size from --config, or else 10×10×10, is used.
    #[arg(long = "size", short = 's', value_name = "X,Y,Z", default_value = "default")]
    pub(crate) size: SizeArg,

    /// Seed value for the random choices made while generating.
    ///
    /// May be an integer between 0 and 18446744073709551615 (2⁶⁴ - 1).
    ///
    /// If not specified, a randomly chosen seed will be used, and logged.
    #[arg(long = "seed")]
    pub(crate) seed: Option<u64>,

    /// Horizontal size of a cell in world units.
    #[arg(long = "cell-size", value_name = "UNITS", default_value_t = WorldScale::default().cell_size())]
    pub(crate) cell_size: f64,

    /// Vertical size of a cell in world units.
    #[arg(long = "layer-height", value_name = "UNITS", default_value_t = WorldScale::default().layer_height())]
    pub(crate) layer_height: f64,

    /// JSON file to read maze settings from, such as {"width": 10, "height": 10, "depth": 10}.
    #[arg(long = "config", value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Use --size as given instead of clamping it; only sizes below 3 are raised.
    #[arg(long = "raw-size")]
    pub(crate) raw_size: bool,

    /// How to print the maze.
    #[arg(long = "format", short = 'f', value_enum, default_value = "text")]
    pub(crate) format: OutputFormat,

    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
}

/// Maze size, parseable in a variety of formats, and with `None` referring to
/// “default”, not “optional”.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SizeArg(pub Option<GridSize>);

impl FromStr for SizeArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("default") {
            Ok(SizeArg(None))
        } else {
            let dims: [GridSizeCoord; 3] = s
                .split(&['×', 'x', ',', ';', ' '][..])
                .map(|s| {
                    let i = s
                        .parse::<GridSizeCoord>()
                        .map_err(|_| format!("{s:?} not an integer or \"default\""))?;
                    if i < 1 {
                        return Err(format!("{s:?} not an integer or \"default\""));
                    }
                    Ok(i)
                })
                .collect::<Result<Vec<GridSizeCoord>, String>>()?
                .try_into()
                .map_err(|_| String::from("must be three integers or \"default\""))?;
            Ok(SizeArg(Some(GridSize::from(dims))))
        }
    }
}
