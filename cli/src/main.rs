//! dvitools CLI - DVI analysis and comparison tool

use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use dvitools::render::{self, analysis, AnalysisReport};
use dvitools::{
    Analyzer, DiffEngine, DiffOptions, DiffReport, DviParser, JsonFormat, ParseOptions,
    ReportOptions,
};

#[derive(Parser)]
#[command(name = "dvitools")]
#[command(version)]
#[command(about = "Analyze and compare TeX DVI files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and analyze a DVI file
    Parse {
        /// Input DVI file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "summary")]
        format: OutputFormat,

        /// Fail if the file needed any recovery
        #[arg(long)]
        strict: bool,
    },

    /// Compare two DVI files
    #[command(group(ArgGroup::new("scope").args(["layout_only", "content_only", "fonts_only"])))]
    Diff {
        /// First DVI file
        #[arg(value_name = "FILE1")]
        file1: PathBuf,

        /// Second DVI file
        #[arg(value_name = "FILE2")]
        file2: PathBuf,

        /// Generate detailed report
        #[arg(short, long)]
        detailed: bool,

        /// Compare layout only
        #[arg(long)]
        layout_only: bool,

        /// Compare content only
        #[arg(long)]
        content_only: bool,

        /// Compare fonts only
        #[arg(long)]
        fonts_only: bool,

        /// Print the raw comparison as JSON
        #[arg(long)]
        json: bool,

        /// Ignore timestamp differences
        #[arg(long)]
        ignore_timestamps: bool,

        /// Decode both files on the current thread
        #[arg(long, env = "DVITOOLS_SEQUENTIAL")]
        sequential: bool,
    },

    /// Analyze a specific aspect of a DVI file
    Analyze {
        /// One of: fonts, layout, content, text, positions
        #[arg(value_name = "ASPECT")]
        aspect: String,

        /// Input DVI file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Headline counts
    Summary,
    /// Counts plus font, layout and content sections
    Detailed,
    /// Preamble, fonts, layout and content as JSON
    Json,
}

const ASPECTS: &str = "fonts, layout, content, text, positions";

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            format,
            strict,
        } => cmd_parse(&input, format, strict),
        Commands::Diff {
            file1,
            file2,
            detailed,
            layout_only,
            content_only,
            fonts_only,
            json,
            ignore_timestamps,
            sequential,
        } => {
            let mut options = DiffOptions::new().with_parallel(!sequential);
            if layout_only {
                options = options.layout_only();
            } else if content_only {
                options = options.content_only();
            } else if fonts_only {
                options = options.fonts_only();
            }
            if ignore_timestamps {
                log::debug!("--ignore-timestamps has no effect on structural comparison");
            }
            cmd_diff(&file1, &file2, options, detailed, json)
        }
        Commands::Analyze { aspect, input } => cmd_analyze(&aspect, &input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn check_file_exists(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        Ok(())
    } else {
        Err(dvitools::Error::FileNotFound(path.to_path_buf()).into())
    }
}

fn cmd_parse(
    input: &Path,
    format: OutputFormat,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_file_exists(input)?;

    let options = if strict {
        ParseOptions::new().strict()
    } else {
        ParseOptions::new()
    };
    let outcome = DviParser::open_with_options(input, options)?.parse_outcome()?;
    let doc = &outcome.document;
    let analyzed = Analyzer::new(doc).analyze();

    match format {
        OutputFormat::Json => {
            let report = AnalysisReport::new(doc, &analyzed);
            println!("{}", render::to_json(&report, JsonFormat::Pretty)?);
        }
        OutputFormat::Detailed => println!("{}", analysis::detailed(doc, &analyzed)),
        OutputFormat::Summary => println!("{}", analysis::summary(doc, &analyzed)),
    }

    if !outcome.is_complete() && format != OutputFormat::Json {
        println!();
        println!("{}", analysis::diagnostics(&outcome.diagnostics).yellow());
    }

    Ok(())
}

fn cmd_diff(
    file1: &Path,
    file2: &Path,
    options: DiffOptions,
    detailed: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_file_exists(file1)?;
    check_file_exists(file2)?;

    let result = DiffEngine::new(options).diff_files(file1, file2)?;

    if json {
        println!("{}", render::to_json(&result, JsonFormat::Pretty)?);
    } else {
        let report = DiffReport::new(&result, ReportOptions::new().with_detailed(detailed));
        println!("{}", report.render());
    }

    Ok(())
}

fn cmd_analyze(aspect: &str, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let aspect = aspect.to_lowercase();
    if !ASPECTS.split(", ").any(|known| known == aspect) {
        return Err(format!("Unknown aspect: {}\nAvailable aspects: {}", aspect, ASPECTS).into());
    }
    check_file_exists(input)?;

    let doc = dvitools::parse_file(input)?;
    let analyzer = Analyzer::new(&doc);

    let output = match aspect.as_str() {
        "fonts" => analysis::fonts(&analyzer.analyze_fonts()),
        "layout" => analysis::layout(&analyzer.analyze_layout()),
        "content" => analysis::content(&analyzer.analyze_content()),
        "text" => analysis::text(&analyzer.extract_text()),
        _ => analysis::positions(&analyzer.character_positions()),
    };
    println!("{}", output);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "dvitools".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("DVI analysis and comparison tool");
    println!();
    println!("License: MIT");
}
