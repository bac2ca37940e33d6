//! Configuration settings for the Sudoku SAT encoder

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub puzzle: PuzzleConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Grid geometry: `size` is the edge length N, `block_size` the edge
/// length B of the B×B sub-blocks. N must be divisible by B.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub size: usize,
    pub block_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub puzzle_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            puzzle: PuzzleConfig {
                size: 9,
                block_size: 3,
            },
            input: InputConfig {
                puzzle_file: PathBuf::from("input/puzzles/example_9x9.txt"),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                output_directory: PathBuf::from("output/formulas"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        self.validate_geometry()?;

        if !self.input.puzzle_file.exists() {
            anyhow::bail!(
                "Puzzle file does not exist: {}",
                self.input.puzzle_file.display()
            );
        }

        Ok(())
    }

    /// Validate only the grid geometry (no filesystem checks)
    pub fn validate_geometry(&self) -> Result<()> {
        if self.puzzle.size == 0 {
            anyhow::bail!("Grid size must be positive");
        }

        // Atom names concatenate single decimal digits, so identifiers
        // collide for grids larger than 9x9.
        if self.puzzle.size > 9 {
            anyhow::bail!(
                "Grid size {} exceeds the maximum of 9 supported by the atom naming scheme",
                self.puzzle.size
            );
        }

        if self.puzzle.block_size == 0 {
            anyhow::bail!("Block size must be positive");
        }

        if self.puzzle.size % self.puzzle.block_size != 0 {
            anyhow::bail!(
                "Grid size {} is not divisible by block size {}",
                self.puzzle.size,
                self.puzzle.block_size
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(size) = cli_overrides.size {
            self.puzzle.size = size;
        }
        if let Some(block_size) = cli_overrides.block_size {
            self.puzzle.block_size = block_size;
        }
        if let Some(ref puzzle_file) = cli_overrides.puzzle_file {
            self.input.puzzle_file = puzzle_file.clone();
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub size: Option<usize>,
    pub block_size: Option<usize>,
    pub puzzle_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}
