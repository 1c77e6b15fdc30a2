use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use recnik::config::DEFAULT_STORE;
use recnik::database::{self, sources, words};
use recnik::dictionary::{transliterate, Tokenizer, DEFAULT_STRIP};
use recnik::{Error, IngestConfig, ProvenancePolicy, Result};

#[derive(Parser)]
#[command(name = "recnik")]
#[command(about = "Builds a Serbian word dictionary from text sources")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import a word list (one Cyrillic word per line) into the store
    Import(ImportArgs),
    /// Transliterate the given text, or stdin when none is given
    Transliterate { text: Vec<String> },
    /// Show the first words of a word list next to their Latin spelling
    Preview {
        input: PathBuf,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Write the sorted unique words of a text, one per line
    Tokenize {
        input: PathBuf,
        /// Output file, stdout when omitted
        output: Option<PathBuf>,
        #[command(flatten)]
        tokenizer: TokenizerArgs,
    },
    /// Count characters, words and unique words of a text
    Stats {
        input: PathBuf,
        #[command(flatten)]
        tokenizer: TokenizerArgs,
        #[arg(long)]
        json: bool,
    },
    /// Show the Latin form and the sources of a stored word
    Lookup {
        word: String,
        #[arg(long, default_value = DEFAULT_STORE)]
        store: PathBuf,
    },
    /// List registered sources and how many words they contributed
    Sources {
        #[arg(long, default_value = DEFAULT_STORE)]
        store: PathBuf,
    },
}

#[derive(Args)]
struct ImportArgs {
    /// Word list to import
    source: Option<PathBuf>,
    /// Name the source is registered under (defaults to the file name)
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    store: Option<PathBuf>,
    /// Words per checkpoint commit [default: 5000]
    #[arg(long)]
    batch_size: Option<usize>,
    #[arg(long, value_enum)]
    provenance: Option<ProvenancePolicy>,
    /// JSON file with import settings; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TokenizerArgs {
    /// Characters removed before splitting [default: the usual punctuation]
    #[arg(long)]
    strip: Option<String>,
    #[arg(long)]
    keep_case: bool,
    #[arg(long)]
    keep_numbers: bool,
}

impl TokenizerArgs {
    fn build(&self) -> Result<Tokenizer> {
        let strip: Vec<char> = match &self.strip {
            Some(strip) => strip.chars().collect(),
            None => DEFAULT_STRIP.to_vec(),
        };

        Tokenizer::new(&strip, !self.keep_case, !self.keep_numbers)
    }
}

impl ImportArgs {
    fn into_config(self) -> Result<IngestConfig> {
        let mut config = match &self.config {
            Some(path) => IngestConfig::from_json_file(path)?,
            None => IngestConfig::default(),
        };

        if let Some(source) = self.source {
            config.source_path = source;
        }
        if let Some(name) = self.name {
            config.source_name = name;
        }
        if let Some(store) = self.store {
            config.store_location = store;
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if let Some(provenance) = self.provenance {
            config.provenance = provenance;
        }

        Ok(config)
    }
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            Err(Error::SourceNotFound(path.to_path_buf()))
        }
        Err(error) => Err(error.into()),
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Import(args) => {
            let json = args.json;
            let config = args.into_config()?;
            let summary = recnik::ingest(&config).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
            }
        }
        Command::Transliterate { text } => {
            let mut stdout = io::stdout().lock();

            if text.is_empty() {
                for line in io::stdin().lock().lines() {
                    writeln!(stdout, "{}", transliterate(&line?))?;
                }
            } else {
                writeln!(stdout, "{}", transliterate(&text.join(" ")))?;
            }
        }
        Command::Preview { input, limit } => {
            let reader = open_input(&input)?;
            let mut stdout = io::stdout().lock();

            let mut shown = 0;
            for line in reader.lines() {
                if shown >= limit {
                    break;
                }
                let line = line?;
                let cyrillic = line.trim();
                if cyrillic.is_empty() {
                    continue;
                }

                shown += 1;
                writeln!(stdout, "{shown}. {cyrillic} -> {}", transliterate(cyrillic))?;
            }
        }
        Command::Tokenize {
            input,
            output,
            tokenizer,
        } => {
            let vocabulary = tokenizer.build()?.vocabulary(open_input(&input)?)?;

            let mut writer: Box<dyn Write> = match output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(io::stdout().lock()),
            };
            for word in &vocabulary {
                writeln!(writer, "{word}")?;
            }
            writer.flush()?;

            tracing::info!("{} unique words", vocabulary.len());
        }
        Command::Stats {
            input,
            tokenizer,
            json,
        } => {
            let text = io::read_to_string(open_input(&input)?)?;
            let stats = tokenizer.build()?.stats(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Characters:   {}", stats.characters);
                println!("Words:        {}", stats.tokens);
                println!("Unique words: {}", stats.unique);
            }
        }
        Command::Lookup { word, store } => {
            let conn = database::open(&store).await?;

            match words::find_word(&conn, word.clone()).await? {
                Some(found) => {
                    println!("{} -> {}", found.cyrillic, found.latin);
                    for source in sources::sources_for_word(&conn, word).await? {
                        println!("  {} (source_id={})", source.file_name, source.id);
                    }
                }
                None => println!("{word} is not in the dictionary"),
            }

            conn.close().await?;
        }
        Command::Sources { store } => {
            let conn = database::open(&store).await?;

            println!("{} words in total", words::count_words(&conn).await?);
            for (source, count) in sources::list_sources(&conn).await? {
                println!("{:>4}  {}  ({} words)", source.id, source.file_name, count);
            }

            conn.close().await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
