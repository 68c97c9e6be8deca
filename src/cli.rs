//! explorar CLI - Exploratory Data Analysis and Reporting
//!
//! Command-line interface for explorar operations.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};

use crate::{
    chart::{Chart, SaveOptions},
    explore::{self, ExploreOptions},
    loader, report, sample,
    stats::{self, GroupedSummary},
};

/// explorar - Exploratory Data Analysis and Reporting in Pure Rust
#[derive(Parser)]
#[command(name = "explorar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic employee dataset
    Generate {
        /// Output file path
        output: PathBuf,
        /// Number of rows to generate
        #[arg(long, default_value_t = sample::DEFAULT_ROWS)]
        rows: usize,
        /// Generator seed
        #[arg(long, default_value_t = sample::DEFAULT_SEED)]
        seed: u64,
    },
    /// Display shape, column info, statistics, and missing values
    Explore {
        /// Path to dataset file
        path: PathBuf,
        /// Skip the per-column info section
        #[arg(long)]
        no_info: bool,
        /// Skip the summary statistics section
        #[arg(long)]
        no_stats: bool,
    },
    /// Display summary statistics for numeric columns
    Summary {
        /// Path to dataset file
        path: PathBuf,
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Render a chart to an image file
    #[command(subcommand)]
    Chart(ChartCommands),
    /// Write a text summary report
    Report {
        /// Path to dataset file
        path: PathBuf,
        /// Output report path
        output: PathBuf,
    },
    /// Run the full example pipeline end to end
    Demo {
        /// Directory for generated artifacts
        #[arg(long, default_value = "results")]
        dir: PathBuf,
        /// Number of rows to generate
        #[arg(long, default_value_t = sample::DEFAULT_ROWS)]
        rows: usize,
        /// Generator seed
        #[arg(long, default_value_t = sample::DEFAULT_SEED)]
        seed: u64,
    },
}

/// Chart rendering commands
#[derive(Subcommand)]
enum ChartCommands {
    /// Correlation heatmap over the numeric columns
    Heatmap {
        /// Path to dataset file
        path: PathBuf,
        /// Output image path
        output: PathBuf,
        /// Figure width in units
        #[arg(long, default_value_t = 10)]
        width: u32,
        /// Figure height in units
        #[arg(long, default_value_t = 8)]
        height: u32,
        /// Dots per unit
        #[arg(long, default_value_t = 300)]
        dpi: u32,
    },
    /// Histogram grid over numeric columns
    Histograms {
        /// Path to dataset file
        path: PathBuf,
        /// Output image path
        output: PathBuf,
        /// Columns to plot (defaults to every numeric column)
        #[arg(short, long, value_delimiter = ',')]
        columns: Option<Vec<String>>,
        /// Figure width in units
        #[arg(long, default_value_t = 15)]
        width: u32,
        /// Figure height in units
        #[arg(long, default_value_t = 10)]
        height: u32,
        /// Dots per unit
        #[arg(long, default_value_t = 300)]
        dpi: u32,
    },
    /// Boxplots of numeric columns grouped by a categorical column
    Boxplots {
        /// Path to dataset file
        path: PathBuf,
        /// Output image path
        output: PathBuf,
        /// Column to group by
        #[arg(short, long)]
        group: String,
        /// Value columns (defaults to every numeric column)
        #[arg(short, long, value_delimiter = ',')]
        columns: Option<Vec<String>>,
        /// Dots per unit
        #[arg(long, default_value_t = 300)]
        dpi: u32,
    },
}

/// Run the explorar CLI.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { output, rows, seed } => cmd_generate(&output, rows, seed),
        Commands::Explore {
            path,
            no_info,
            no_stats,
        } => cmd_explore(&path, no_info, no_stats),
        Commands::Summary { path, format } => cmd_summary(&path, &format),
        Commands::Chart(chart_cmd) => match chart_cmd {
            ChartCommands::Heatmap {
                path,
                output,
                width,
                height,
                dpi,
            } => cmd_chart_heatmap(&path, &output, width, height, dpi),
            ChartCommands::Histograms {
                path,
                output,
                columns,
                width,
                height,
                dpi,
            } => cmd_chart_histograms(&path, &output, columns.as_deref(), width, height, dpi),
            ChartCommands::Boxplots {
                path,
                output,
                group,
                columns,
                dpi,
            } => cmd_chart_boxplots(&path, &output, &group, columns.as_deref(), dpi),
        },
        Commands::Report { path, output } => cmd_report(&path, &output),
        Commands::Demo { dir, rows, seed } => cmd_demo(&dir, rows, seed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_generate(output: &Path, rows: usize, seed: u64) -> crate::Result<()> {
    let table = sample::generate(rows, seed)?;
    loader::save(&table, output)?;

    println!(
        "Sample data saved: {} ({} rows)",
        output.display(),
        table.len()
    );

    Ok(())
}

fn cmd_explore(path: &Path, no_info: bool, no_stats: bool) -> crate::Result<()> {
    let table = loader::load(path)?;
    let options = ExploreOptions::new()
        .with_info(!no_info)
        .with_stats(!no_stats);

    explore::explore(&table, &options)
}

fn cmd_summary(path: &Path, format: &str) -> crate::Result<()> {
    let table = loader::load(path)?;
    let summaries = stats::summarize(&table)?;

    if format == "json" {
        let json_str = serde_json::to_string_pretty(&summaries)?;
        println!("{}", json_str);
    } else {
        print!("{}", explore::render_summaries(&summaries));
    }

    Ok(())
}

fn cmd_chart_heatmap(
    path: &Path,
    output: &Path,
    width: u32,
    height: u32,
    dpi: u32,
) -> crate::Result<()> {
    let table = loader::load(path)?;
    let chart = Chart::correlation_heatmap(&table, (width, height))?;
    chart.save(output, &SaveOptions::new().with_resolution(dpi))
}

fn cmd_chart_histograms(
    path: &Path,
    output: &Path,
    columns: Option<&[String]>,
    width: u32,
    height: u32,
    dpi: u32,
) -> crate::Result<()> {
    let table = loader::load(path)?;
    let refs: Option<Vec<&str>> = columns.map(|c| c.iter().map(String::as_str).collect());
    let chart = Chart::histograms(&table, refs.as_deref(), (width, height))?;
    chart.save(output, &SaveOptions::new().with_resolution(dpi))
}

fn cmd_chart_boxplots(
    path: &Path,
    output: &Path,
    group: &str,
    columns: Option<&[String]>,
    dpi: u32,
) -> crate::Result<()> {
    let table = loader::load(path)?;
    let names = match columns {
        Some(cols) => cols.to_vec(),
        None => table.numeric_column_names(),
    };
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let chart = Chart::grouped_boxplots(&table, &refs, group)?;
    chart.save(output, &SaveOptions::new().with_resolution(dpi))
}

fn cmd_report(path: &Path, output: &Path) -> crate::Result<()> {
    let table = loader::load(path)?;
    report::build_report(&table, output)
}

fn cmd_demo(dir: &Path, rows: usize, seed: u64) -> crate::Result<()> {
    println!("=== Sample Analysis ===\n");
    std::fs::create_dir_all(dir).map_err(|e| crate::Error::io(e, dir))?;

    println!("1. Generating sample data...");
    let generated = sample::generate(rows, seed)?;
    let data_path = dir.join("sample_data.csv");
    loader::save(&generated, &data_path)?;
    println!("Sample data saved: {}", data_path.display());

    println!("\n2. Exploring data...");
    let table = loader::load(&data_path)?;
    explore::explore(&table, &ExploreOptions::default())?;

    println!("\n3. Plotting correlation matrix...");
    let heatmap_path = dir.join("correlation_matrix.png");
    Chart::correlation_heatmap(&table, (10, 8))?.save(&heatmap_path, &SaveOptions::new())?;

    println!("\n4. Plotting distributions...");
    let distributions_path = dir.join("distributions.png");
    Chart::histograms(
        &table,
        Some(&["age", "income", "tenure", "satisfaction"]),
        (15, 10),
    )?
    .save(&distributions_path, &SaveOptions::new())?;

    println!("\n5. Analyzing by department...");
    let by_department =
        stats::grouped_summary(&table, "department", &["age", "income", "satisfaction"])?;
    println!("Department statistics:");
    print_grouped(&by_department);

    let boxplot_path = dir.join("department_analysis.png");
    Chart::grouped_boxplots(&table, &["income", "satisfaction", "age"], "department")?
        .save(&boxplot_path, &SaveOptions::new())?;

    println!("\n6. Analyzing by gender...");
    let by_gender = stats::grouped_summary(&table, "gender", &["age", "income", "satisfaction"])?;
    println!("Gender statistics:");
    print_grouped(&by_gender);

    println!("\n7. Writing summary report...");
    let report_path = dir.join("data_summary_report.txt");
    report::build_report(&table, &report_path)?;

    println!("\n=== Analysis Complete ===");
    println!("Result files:");
    println!("- {}: sample data", data_path.display());
    println!("- {}: correlation matrix", heatmap_path.display());
    println!("- {}: distributions", distributions_path.display());
    println!("- {}: department analysis", boxplot_path.display());
    println!("- {}: summary report", report_path.display());

    Ok(())
}

fn print_grouped(summary: &GroupedSummary) {
    println!(
        "{:<14} {:<14} {:<8} {:<14} {:<14}",
        "GROUP", "COLUMN", "COUNT", "MEAN", "STD"
    );
    println!("{}", "-".repeat(68));
    for group in &summary.groups {
        for (idx, column) in summary.value_columns.iter().enumerate() {
            println!(
                "{:<14} {:<14} {:<8} {:<14} {:<14}",
                group.label,
                column,
                group.count,
                fmt_cell(group.means.get(idx).copied().flatten()),
                fmt_cell(group.stds.get(idx).copied().flatten())
            );
        }
    }
}

fn fmt_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "NaN".to_string(), |v| format!("{:.2}", v))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::cast_precision_loss,
    clippy::too_many_lines
)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::try_parse_from(["explorar", "generate", "out.csv", "--rows", "50"])
            .ok()
            .unwrap_or_else(|| panic!("Should parse"));
        match cli.command {
            Commands::Generate { output, rows, seed } => {
                assert_eq!(output, PathBuf::from("out.csv"));
                assert_eq!(rows, 50);
                assert_eq!(seed, sample::DEFAULT_SEED);
            }
            _ => panic!("Expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_chart_histogram_columns() {
        let cli = Cli::try_parse_from([
            "explorar",
            "chart",
            "histograms",
            "data.csv",
            "out.png",
            "--columns",
            "age,income",
        ])
        .ok()
        .unwrap_or_else(|| panic!("Should parse"));
        match cli.command {
            Commands::Chart(ChartCommands::Histograms { columns, .. }) => {
                assert_eq!(
                    columns,
                    Some(vec!["age".to_string(), "income".to_string()])
                );
            }
            _ => panic!("Expected chart histograms command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        let result = Cli::try_parse_from(["explorar", "frobnicate"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cmd_generate_and_summary() {
        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let data_path = temp_dir.path().join("sample.csv");

        cmd_generate(&data_path, 50, 42)
            .ok()
            .unwrap_or_else(|| panic!("Should generate"));
        assert!(data_path.exists());

        cmd_summary(&data_path, "text")
            .ok()
            .unwrap_or_else(|| panic!("Should summarize"));
        cmd_summary(&data_path, "json")
            .ok()
            .unwrap_or_else(|| panic!("Should summarize as json"));
    }

    #[test]
    fn test_cmd_report_writes_artifact() {
        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let data_path = temp_dir.path().join("sample.csv");
        let report_path = temp_dir.path().join("report.txt");

        cmd_generate(&data_path, 50, 42)
            .ok()
            .unwrap_or_else(|| panic!("Should generate"));
        cmd_report(&data_path, &report_path)
            .ok()
            .unwrap_or_else(|| panic!("Should build report"));

        let text = std::fs::read_to_string(&report_path)
            .ok()
            .unwrap_or_else(|| panic!("Should read report"));
        assert!(text.contains("=== Correlation Matrix ==="));
    }

    #[test]
    fn test_cmd_demo_produces_all_artifacts() {
        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let dir = temp_dir.path().join("results");

        cmd_demo(&dir, 60, 42)
            .ok()
            .unwrap_or_else(|| panic!("Should run demo"));

        assert!(dir.join("sample_data.csv").exists());
        assert!(dir.join("correlation_matrix.png").exists());
        assert!(dir.join("distributions.png").exists());
        assert!(dir.join("department_analysis.png").exists());
        assert!(dir.join("data_summary_report.txt").exists());
    }

    #[test]
    fn test_cmd_explore_missing_file() {
        let result = cmd_explore(&PathBuf::from("/nonexistent/data.csv"), false, false);
        assert!(result.is_err());
    }
}
