//! Printing a generated maze.

use std::fmt::Write as _;
use std::io;

use maze_cubes::Maze;
use maze_cubes::math::{Cube, GridCoordinate};

/// Character used for the exit cell in text output.
const EXIT_GLYPH: char = 'E';

/// Output format chosen with `--format`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum, strum::IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Every layer drawn as text, bottom layer first.
    #[value(help = "Every layer drawn as text, bottom layer first")]
    Text,
    /// A JSON object with the generation results and layers.
    #[value(help = "A JSON object with the generation results and the layers as text")]
    Json,
}

/// What [`OutputFormat::Json`] writes.
#[derive(Debug, serde::Serialize)]
struct MazeDocument {
    size: [u32; 3],
    seed: u64,
    exit: [GridCoordinate; 3],
    attempts: u32,
    outcome: &'static str,
    layers: Vec<String>,
}

/// Writes `maze` to `out` in the given format.
///
/// `seed` is included so that the output records how to reproduce it.
pub fn write(
    format: OutputFormat,
    maze: &Maze,
    seed: u64,
    out: &mut dyn io::Write,
) -> Result<(), anyhow::Error> {
    match format {
        OutputFormat::Text => out.write_all(text(maze, seed).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &document(maze, seed))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Draws every layer of the maze, with a heading for each, and the exit marked.
pub fn text(maze: &Maze, seed: u64) -> String {
    let report = maze.report();
    let [w, h, d] = maze.size().to_array();
    let mut text = format!(
        "{w}×{h}×{d} maze, seed {seed}, {outcome} after {attempts} attempt{s}\n",
        outcome = <&str>::from(report.outcome),
        attempts = report.attempts,
        s = if report.attempts == 1 { "" } else { "s" },
    );
    for (y, layer) in layers(maze).into_iter().enumerate() {
        write!(text, "\ny = {y}\n{layer}").unwrap();
    }
    text
}

/// Each horizontal layer of the maze as text, bottom first, with the exit marked.
pub fn layers(maze: &Maze) -> Vec<String> {
    let exit: Cube = maze.report().exit;
    maze.grid()
        .bounds()
        .y_range()
        .filter_map(|y| {
            maze.grid().layer_string_with(y, |cube, state| {
                if cube == exit {
                    EXIT_GLYPH
                } else {
                    state.glyph()
                }
            })
        })
        .collect()
}

fn document(maze: &Maze, seed: u64) -> MazeDocument {
    let report = maze.report();
    MazeDocument {
        size: maze.size().to_array(),
        seed,
        exit: report.exit.into(),
        attempts: report.attempts,
        outcome: report.outcome.into(),
        layers: layers(maze),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use maze_cubes::{CellState, GeneratedMaze, MazeBuilder, MazeGrid, WorldScale};
    use pretty_assertions::assert_eq;

    /// A 4×3×3 maze with one corridor cell, an exit on the −X face, and one ethereal cell.
    fn tiny_maze() -> Maze {
        let mut generated: GeneratedMaze = MazeBuilder::from_seed(0).generate([4, 3, 3]).unwrap();
        generated.grid = MazeGrid::from_fn([4, 3, 3], |cube| match [cube.x, cube.y, cube.z] {
            [0 | 1, 1, 1] => CellState::Void,
            [2, 1, 1] => CellState::Ethereal,
            _ => CellState::Solid,
        })
        .unwrap();
        generated.report.exit = Cube::new(0, 1, 1);
        Maze::new(generated, WorldScale::default())
    }

    #[test]
    fn text_output() {
        let maze = tiny_maze();
        let seed = 0;
        assert_eq!(
            text(&maze, seed),
            indoc! {"
                4×3×3 maze, seed 0, connected after 1 attempt

                y = 0
                ####
                ####
                ####

                y = 1
                ####
                E.~#
                ####

                y = 2
                ####
                ####
                ####
            "}
        );
    }

    #[test]
    fn json_output() {
        let maze = tiny_maze();
        let mut buffer = Vec::new();
        write(OutputFormat::Json, &maze, 99, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "size": [4, 3, 3],
                "seed": 99,
                "exit": [0, 1, 1],
                "attempts": 1,
                "outcome": "connected",
                "layers": [
                    "####\n####\n####\n",
                    "####\nE.~#\n####\n",
                    "####\n####\n####\n",
                ],
            })
        );
    }
}
