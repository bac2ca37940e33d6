//! Main CLI application for the Sudoku SAT encoder

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use sudoku_sat_encoder::{
    config::{CliOverrides, Settings},
    encoding::EncodingProblem,
    sudoku::create_example_puzzles,
    utils::{ColorOutput, FormulaFormatter},
};

#[derive(Parser)]
#[command(name = "sudoku_sat_encoder")]
#[command(about = "Encode Sudoku puzzles as propositional SAT formulas")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a puzzle into a boolean formula
    Encode {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Puzzle file (overrides config)
        #[arg(short, long)]
        puzzle: Option<PathBuf>,

        /// Grid size N (overrides config)
        #[arg(short, long)]
        size: Option<usize>,

        /// Block size B (overrides config)
        #[arg(short, long)]
        block_size: Option<usize>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the full formula to stdout
        #[arg(long)]
        print: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and puzzle files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Inspect a puzzle and the size of its encoding without writing output
    Analyze {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Puzzle file (overrides config)
        #[arg(short, long)]
        puzzle: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            config,
            puzzle,
            size,
            block_size,
            output,
            print,
            verbose,
        } => encode_command(config, puzzle, size, block_size, output, print, verbose),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Analyze { config, puzzle } => analyze_command(config, puzzle),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn encode_command(
    config_path: PathBuf,
    puzzle_file: Option<PathBuf>,
    size: Option<usize>,
    block_size: Option<usize>,
    output_dir: Option<PathBuf>,
    print: bool,
    verbose: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("Sudoku SAT Encoder"));

    let mut settings = load_settings(&config_path)?;

    let cli_overrides = CliOverrides {
        size,
        block_size,
        puzzle_file,
        output_dir,
    };
    settings.merge_with_cli(&cli_overrides);

    settings.validate().context("Configuration validation failed")?;

    let problem = EncodingProblem::new(settings.clone())
        .context("Failed to create encoding problem")?;

    if verbose {
        println!("Puzzle:");
        println!("{}", FormulaFormatter::format_puzzle(problem.grid()));
    }

    let result = problem.encode().context("Failed to encode puzzle")?;

    println!("{}", ColorOutput::success(&result.summary()));

    if verbose {
        println!("\n{}", result.statistics);
    }

    if print {
        println!("{}", result.formula);
    } else {
        println!(
            "\n{}",
            FormulaFormatter::format_formula_preview(&result.formula, 200)
        );
    }

    let saved_path =
        FormulaFormatter::save_formula(&result, &settings.output.output_directory, settings.output.format)
            .context("Failed to save formula")?;

    println!(
        "{}",
        ColorOutput::success(&format!("Formula saved to {}", saved_path.display()))
    );

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/puzzles");
    let output_dir = directory.join("output/formulas");

    for dir in [&config_dir, &input_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_puzzles(&input_dir).context("Failed to create example puzzles")?;
    println!("Created example puzzles in: {}", input_dir.display());

    // A small 4x4 configuration next to the default
    let mut small_config = Settings::default();
    small_config.puzzle.size = 4;
    small_config.puzzle.block_size = 2;
    small_config.input.puzzle_file = PathBuf::from("input/puzzles/example_4x4.txt");
    small_config.to_file(&config_dir.join("small.yaml"))?;
    println!("Created: {}", config_dir.join("small.yaml").display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your puzzles to {}", input_dir.display());
    println!("3. Run: cargo run -- encode --config config/default.yaml");

    Ok(())
}

fn analyze_command(config_path: PathBuf, puzzle_file: Option<PathBuf>) -> Result<()> {
    println!("{}", ColorOutput::info("Analyzing puzzle..."));

    let mut settings = load_settings(&config_path)?;

    if let Some(puzzle) = puzzle_file {
        settings.input.puzzle_file = puzzle;
    }

    settings.validate().context("Configuration validation failed")?;

    let problem = EncodingProblem::new(settings)?;
    let grid = problem.grid();

    println!("Puzzle ({}x{}):", grid.size(), grid.size());
    println!("{}", FormulaFormatter::format_puzzle_with_coords(grid));

    println!("Puzzle Statistics:");
    println!("  Prefilled cells: {}", grid.prefilled_count());
    println!(
        "  Fill ratio: {:.1}%",
        (grid.prefilled_count() as f64 / (grid.size() * grid.size()) as f64) * 100.0
    );

    let generator = problem.encoder().generator();
    println!("\nExpected encoding size:");
    println!("  Atoms: {}", generator.namer().atom_count());
    println!("  Cell constraints: {}", generator.expected_cell_count());
    println!("  Row constraints: {}", generator.expected_line_count());
    println!("  Column constraints: {}", generator.expected_line_count());
    println!("  Block constraints: {}", generator.expected_block_count());
    println!(
        "  Total conjuncts: {}",
        generator.expected_structural_count() + grid.prefilled_count()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "sudoku_sat_encoder",
            "encode",
            "--config",
            "test.yaml",
            "--size",
            "4",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/puzzles/example_4x4.txt").exists());
        assert!(temp_dir.path().join("input/puzzles/example_9x9.txt").exists());
    }
}
