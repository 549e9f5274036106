//! corpustat CLI - descriptive statistics for text corpora
//!
//! Command-line interface over the corpustat library.

use clap::{Parser, Subcommand};
use corpustat::table::{frequency_by_group, group_frequency_table, NORMALIZED};
use corpustat::{
    compute_tfidf, dir_frequency, import_records, load_survey, normalize, word_frequency, Config,
    CsvExportService, LinguisticPipeline, Record, Result, SnowballPipeline, Tokenizer,
};
use indicatif::{ProgressBar, ProgressStyle};
use log::error;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "corpustat")]
#[command(version)]
#[command(about = "Descriptive statistics for text corpora", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Most frequent words of a document
    Freq {
        /// Input text file
        input: PathBuf,

        /// Number of results (default: from config, 50)
        #[arg(short = 'k', long)]
        count: Option<usize>,
    },

    /// Most frequent words across every file of a directory
    Dir {
        /// Directory of text files
        dir: PathBuf,

        /// Number of results (default: from config, 50)
        #[arg(short = 'k', long)]
        count: Option<usize>,
    },

    /// Split a document into sentences
    Sentences {
        /// Input text file
        input: PathBuf,
    },

    /// Print the normalized lemma tokens of a document
    Tokens {
        /// Input text file
        input: PathBuf,
    },

    /// TF-IDF weights of a document's tokens
    Tfidf {
        /// Input text file
        input: PathBuf,
    },

    /// Import record batches and derive combined, normalized and token columns
    Table {
        /// JSON file holding an array of record batches
        input: PathBuf,

        /// Rank words per distinct value of this column
        #[arg(short, long)]
        group: Option<String>,

        /// Column whose text is ranked per group
        #[arg(long, default_value = NORMALIZED)]
        text_column: String,

        /// Number of results per group (default: from config, 50)
        #[arg(short = 'k', long)]
        count: Option<usize>,

        /// Rows to print
        #[arg(long, default_value = "5")]
        head: usize,
    },

    /// Load an exported survey and print its first rows
    Survey {
        /// Directory of CSV exports
        dir: PathBuf,

        /// Spreadsheet name (reads <dir>/<name>.csv)
        spreadsheet: String,

        /// Rows to print
        #[arg(long, default_value = "5")]
        head: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Err(e) = run(cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let pipeline = SnowballPipeline::new(&config.pipeline)?;
    let amount = |count: Option<usize>| count.unwrap_or(config.frequency.amount);

    match cli.command {
        Commands::Freq { input, count } => show_frequency(&pipeline, input, amount(count)),
        Commands::Dir { dir, count } => show_dir_frequency(&pipeline, dir, amount(count)),
        Commands::Sentences { input } => show_sentences(&pipeline, input),
        Commands::Tokens { input } => show_tokens(&pipeline, input),
        Commands::Tfidf { input } => show_tfidf(&pipeline, input),
        Commands::Table {
            input,
            group,
            text_column,
            count,
            head,
        } => show_table(&pipeline, &config, input, group, text_column, amount(count), head),
        Commands::Survey {
            dir,
            spreadsheet,
            head,
        } => show_survey(&config, dir, spreadsheet, head),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn show_frequency(pipeline: &dyn LinguisticPipeline, input: PathBuf, amount: usize) -> Result<()> {
    let text = fs::read_to_string(&input)?;
    print!("{}", word_frequency(pipeline, &text, amount)?);
    Ok(())
}

fn show_dir_frequency(pipeline: &dyn LinguisticPipeline, dir: PathBuf, amount: usize) -> Result<()> {
    let pb = spinner(&format!("Analyzing {}...", dir.display()));
    let table = dir_frequency(pipeline, &dir, amount);
    pb.finish_and_clear();
    print!("{}", table?);
    Ok(())
}

fn show_sentences(pipeline: &dyn LinguisticPipeline, input: PathBuf) -> Result<()> {
    let text = fs::read_to_string(&input)?;
    for (i, sentence) in pipeline.sentences(&text)?.iter().enumerate() {
        println!("{:>4}  {}", i + 1, sentence);
    }
    Ok(())
}

fn show_tokens(pipeline: &dyn LinguisticPipeline, input: PathBuf) -> Result<()> {
    let text = fs::read_to_string(&input)?;
    let tokens = Tokenizer::new(pipeline).tokenize(&normalize(&text))?;
    println!("{}", tokens.join(" "));
    Ok(())
}

fn show_tfidf(pipeline: &dyn LinguisticPipeline, input: PathBuf) -> Result<()> {
    let text = fs::read_to_string(&input)?;
    let tokens = Tokenizer::new(pipeline).tokenize(&normalize(&text))?;
    let tfidf = compute_tfidf(&tokens)?;
    for (feature, weight) in tfidf.nonzero_weights() {
        println!("{}  -  {:.6}", feature, weight);
    }
    Ok(())
}

fn show_table(
    pipeline: &dyn LinguisticPipeline,
    config: &Config,
    input: PathBuf,
    group: Option<String>,
    text_column: String,
    amount: usize,
    head: usize,
) -> Result<()> {
    let batches: Vec<Vec<Record>> = serde_json::from_str(&fs::read_to_string(&input)?)?;

    let pb = spinner("Deriving text columns...");
    let imported = import_records(&batches, pipeline, &config.table.metadata);
    pb.finish_and_clear();
    let (tidy, _raw) = imported?;

    println!("{} rows, {} columns", tidy.height(), tidy.width());
    println!("{}", tidy.head(Some(head)));

    if let Some(group) = group {
        let rows = frequency_by_group(&tidy, &group, &text_column, amount, pipeline)?;
        println!("{}", group_frequency_table(&rows)?);
    }
    Ok(())
}

fn show_survey(config: &Config, dir: PathBuf, spreadsheet: String, head: usize) -> Result<()> {
    let service = CsvExportService::new(dir);
    let frame = load_survey(&service, &spreadsheet, &config.sheet)?;
    println!("{}", frame.head(Some(head)));
    Ok(())
}
