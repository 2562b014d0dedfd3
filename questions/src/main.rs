use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use passage_core::{answer, Corpus, IdfTable, QueryConfig, TokenizedCorpus, TokenizerOptions};
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "questions")]
#[command(about = "Answer questions from a directory of text documents using TF-IDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// Directory containing .txt documents
    #[arg(long)]
    corpus: PathBuf,
    /// Stem tokens with the English Snowball stemmer
    #[arg(long, default_value_t = false)]
    stem: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank documents and sentences for a query
    Ask {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Query text; prompted for on stdin when omitted
        #[arg(long)]
        query: Option<String>,
        /// JSON file with `file_matches` / `sentence_matches`
        #[arg(long)]
        config: Option<PathBuf>,
        /// Number of top documents to extract sentences from
        #[arg(long, env = "FILE_MATCHES")]
        file_matches: Option<usize>,
        /// Number of sentences to print
        #[arg(long, env = "SENTENCE_MATCHES")]
        sentence_matches: Option<usize>,
        /// Print the full answer as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the rarest terms of the document IDF table
    Idf {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Number of terms to print
        #[arg(long, default_value_t = 20)]
        top: usize,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { corpus, query, config, file_matches, sentence_matches, json } => {
            let mut cfg = match config {
                Some(path) => QueryConfig::from_json_file(path)?,
                None => QueryConfig::default(),
            };
            if let Some(n) = file_matches { cfg.file_matches = n; }
            if let Some(n) = sentence_matches { cfg.sentence_matches = n; }
            ask(&corpus, query, &cfg, json)
        }
        Commands::Idf { corpus, top } => print_idf(&corpus, top),
    }
}

fn load(args: &CorpusArgs) -> Result<TokenizedCorpus> {
    let corpus = Corpus::load_dir(&args.corpus)?;
    Ok(TokenizedCorpus::new(corpus, TokenizerOptions { stem: args.stem }))
}

fn ask(args: &CorpusArgs, query: Option<String>, cfg: &QueryConfig, json: bool) -> Result<()> {
    let corpus = load(args)?;
    let query = match query {
        Some(q) => q,
        None => prompt("Query: ")?,
    };
    let result = answer(&query, &corpus, cfg)?;
    tracing::info!(documents = result.documents.len(), sentences = result.sentences.len(), "answered query");

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let ids: Vec<&str> = result.documents.iter().map(|d| d.id.as_str()).collect();
    println!("Top file matches: {ids:?}");
    if !result.has_matches() {
        println!("No results.");
        return Ok(());
    }
    for sentence in &result.sentences {
        println!();
        println!("{}", sentence.sentence);
    }
    Ok(())
}

fn print_idf(args: &CorpusArgs, top: usize) -> Result<()> {
    let corpus = load(args)?;
    let idf = IdfTable::compute(&corpus.documents)
        .with_context(|| format!("computing IDF over {}", args.corpus.display()))?;
    println!("{} terms over {} documents", idf.len(), idf.collection_size());
    for (term, weight) in idf.ranked().into_iter().take(top) {
        println!("{weight:>8.4}  {term}");
    }
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{label}")?;
    stdout.flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("no query given");
    }
    Ok(line.trim_end().to_string())
}
