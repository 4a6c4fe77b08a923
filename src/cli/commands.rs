use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::api::{
    AnalyzeRequest, Endpoint, GlossaryPayload, TranslatorPayload, analysis_headers,
};
use crate::chat::{Conversation, HttpReply};
use crate::filters::{
    MatchScope, filter, filter_in_scope, lookup_word, search_pages, suggest, unique_categories,
};
use crate::interpreter::interpret;
use crate::models::Direction;
use crate::parsers::{load_glossary, load_pages, load_translations};
use crate::utils::{Settings, format_path_with_tilde, init_logging};

#[derive(Parser)]
#[command(name = "digiguard")]
#[command(version = "0.1.0")]
#[command(
    about = "Anti-fraud reply interpreter and glossary search for DigiGuard",
    long_about = None
)]
pub struct Cli {
    /// Log debug output to stderr (overridden by DIGIGUARD_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interpret an analysis reply body read from FILE or stdin
    Interpret {
        file: Option<PathBuf>,

        /// Print the {text, score, risk_level} object instead of a chat message
        #[arg(long)]
        json: bool,
    },
    /// List glossary terms, optionally filtered
    Glossary {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(short, long)]
        query: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        /// Also match the query against definitions
        #[arg(long)]
        definitions: bool,
    },
    /// List translator pairs, or translate a single word
    Translate {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(short, long, conflicts_with = "word")]
        query: Option<String>,
        #[arg(short, long)]
        word: Option<String>,
        #[arg(short, long, default_value_t = Direction::BoomerToSlang)]
        direction: Direction,
    },
    /// Autocomplete suggestions for a partial query
    Suggest {
        target: SuggestTarget,
        #[arg(short, long)]
        query: String,
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List glossary categories in first-seen order
    Categories {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Search site pages by title or keyword
    Pages {
        #[arg(short, long)]
        query: String,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Show statistics about the local data directory
    Stats,
    /// Show the backend URLs the configured bases resolve to
    Endpoints,
    /// Print the HTTP request an admin or chat action would send
    Request {
        #[command(subcommand)]
        kind: RequestKind,
    },
}

#[derive(Subcommand)]
pub enum RequestKind {
    /// Add a glossary term, or update it with --id
    Glossary {
        #[arg(long)]
        term: String,
        #[arg(long)]
        definition: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        id: Option<i64>,
    },
    /// Add a translator pair, or update it with --id
    Translation {
        #[arg(long)]
        boomer_word: String,
        #[arg(long)]
        slang_word: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        id: Option<i64>,
    },
    /// Send a message to the analysis endpoint
    Analyze {
        #[arg(long)]
        text: String,
    },
    /// Site-wide search for a query
    Search {
        #[arg(long)]
        query: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SuggestTarget {
    Glossary,
    Translations,
    Pages,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Interpret { file, json } => interpret_reply(file.as_deref(), json),
        Commands::Glossary { file, query, category, definitions } => {
            let settings = load_settings()?;
            let path = file.unwrap_or_else(|| settings.glossary_path());
            list_glossary(&path, query.as_deref(), category.as_deref(), definitions)
        }
        Commands::Translate { file, query, word, direction } => {
            let settings = load_settings()?;
            let path = file.unwrap_or_else(|| settings.translations_path());
            match word {
                Some(word) => translate_word(&path, &word, direction),
                None => list_translations(&path, query.as_deref(), direction),
            }
        }
        Commands::Suggest { target, query, limit, file } => {
            let settings = load_settings()?;
            show_suggestions(&settings, target, &query, limit, file)
        }
        Commands::Categories { file } => {
            let settings = load_settings()?;
            let path = file.unwrap_or_else(|| settings.glossary_path());
            for category in unique_categories(&load_glossary(&path)?) {
                println!("{}", category);
            }
            Ok(())
        }
        Commands::Pages { query, file } => {
            let settings = load_settings()?;
            let path = file.unwrap_or_else(|| settings.pages_path());
            let pages = load_pages(&path)?;
            for page in search_pages(&pages, &query) {
                println!("{}  {}", page.title, page.route);
            }
            Ok(())
        }
        Commands::Stats => show_stats(&load_settings()?),
        Commands::Endpoints => show_endpoints(&load_settings()?),
        Commands::Request { kind } => show_request(&load_settings()?, kind),
    }
}

fn load_settings() -> Result<Settings> {
    let settings = Settings::from_env()?;
    debug!(data_dir = %settings.data_dir.display(), "Loaded settings");
    Ok(settings)
}

fn list_glossary(
    path: &Path,
    query: Option<&str>,
    category: Option<&str>,
    definitions: bool,
) -> Result<()> {
    let entries = load_glossary(path)?;
    let scope = if definitions { MatchScope::Extended } else { MatchScope::Primary };
    let matches = filter_in_scope(&entries, query.unwrap_or(""), category, scope);

    for entry in &matches {
        println!("{} [{}]", entry.term, entry.category);
        if !entry.definition.is_empty() {
            println!("    {}", entry.definition);
        }
    }
    println!("{} of {} terms", matches.len(), entries.len());
    Ok(())
}

fn translate_word(path: &Path, word: &str, direction: Direction) -> Result<()> {
    let entries = load_translations(path)?;
    match lookup_word(&entries, word, direction) {
        Some(translation) => {
            println!("{} → {}", translation.source, translation.target);
            if let Some(description) = translation.description {
                println!("    {}", description);
            }
        }
        None => println!("Nessuna traduzione trovata per \"{}\"", word.trim()),
    }
    Ok(())
}

fn list_translations(path: &Path, query: Option<&str>, direction: Direction) -> Result<()> {
    let entries = load_translations(path)?;
    let matches = filter(&entries, query.unwrap_or(""), None);
    for entry in &matches {
        let (source, target) = entry.oriented(direction);
        println!("{} → {}", source, target);
    }
    println!("{} of {} pairs", matches.len(), entries.len());
    Ok(())
}

fn show_suggestions(
    settings: &Settings,
    target: SuggestTarget,
    query: &str,
    limit: Option<usize>,
    file: Option<PathBuf>,
) -> Result<()> {
    let limit = limit.unwrap_or(settings.suggestion_limit);
    let suggestions = match target {
        SuggestTarget::Glossary => {
            let path = file.unwrap_or_else(|| settings.glossary_path());
            suggest(&load_glossary(&path)?, query, limit)
        }
        SuggestTarget::Translations => {
            let path = file.unwrap_or_else(|| settings.translations_path());
            suggest(&load_translations(&path)?, query, limit)
        }
        SuggestTarget::Pages => {
            let path = file.unwrap_or_else(|| settings.pages_path());
            suggest(&load_pages(&path)?, query, limit)
        }
    };
    for suggestion in suggestions {
        println!("{}", suggestion);
    }
    Ok(())
}

fn show_endpoints(settings: &Settings) -> Result<()> {
    println!("Content API: {}", settings.api_base);
    println!("Analysis API: {}", settings.analyze_base);
    println!("Health check timeout: {} ms", settings.health_timeout.as_millis());
    for (name, value) in analysis_headers(&settings.analyze_base) {
        println!("Analysis header: {}: {}", name, value);
    }
    println!();

    let endpoints = [
        Endpoint::GlossaryAll,
        Endpoint::GlossaryAdd,
        Endpoint::TranslatorAll,
        Endpoint::TranslatorAdd,
        Endpoint::SearchAllPages,
        Endpoint::Analyze,
        Endpoint::AnalyzeImage,
    ];
    for endpoint in &endpoints {
        print_route(settings, endpoint);
    }
    Ok(())
}

fn show_request(settings: &Settings, kind: RequestKind) -> Result<()> {
    match kind {
        RequestKind::Glossary { term, definition, category, id } => {
            let payload = GlossaryPayload::new(&term, &definition, category.as_deref());
            payload.validate().context("Invalid glossary term")?;
            let payload = match id {
                Some(id) => payload.with_id(id),
                None => payload,
            };
            let endpoint = id.map_or(Endpoint::GlossaryAdd, Endpoint::GlossaryUpdate);
            print_route(settings, &endpoint);
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        RequestKind::Translation { boomer_word, slang_word, description, id } => {
            let payload = TranslatorPayload::new(&boomer_word, &slang_word, description.as_deref());
            payload.validate().context("Invalid translator pair")?;
            let payload = match id {
                Some(id) => payload.with_id(id),
                None => payload,
            };
            let endpoint = id.map_or(Endpoint::TranslatorAdd, Endpoint::TranslatorUpdate);
            print_route(settings, &endpoint);
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        RequestKind::Analyze { text } => {
            print_route(settings, &Endpoint::Analyze);
            println!("{}", serde_json::to_string_pretty(&AnalyzeRequest::new(&text))?);
        }
        RequestKind::Search { query } => print_route(settings, &Endpoint::Search(&query)),
    }
    Ok(())
}

fn print_route(settings: &Settings, endpoint: &Endpoint<'_>) {
    println!(
        "{:<6} {}",
        endpoint.method(),
        endpoint.url(&settings.api_base, &settings.analyze_base)
    );
}

fn interpret_reply(file: Option<&Path>, json: bool) -> Result<()> {
    let body = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read reply file: {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("Failed to read reply from stdin")?,
    };

    if json {
        let reply = interpret(&body)?;
        println!("{}", serde_json::to_string_pretty(&reply.to_output())?);
        return Ok(());
    }

    let mut conversation = Conversation::new();
    let message = conversation.receive(Ok(HttpReply::ok(body)));
    if let Some(label) = message.risk_level.and_then(|level| level.label()) {
        println!("{}", label);
    }
    println!("{}", message.text);

    Ok(())
}

fn show_stats(settings: &Settings) -> Result<()> {
    println!("DigiGuard Data Statistics");
    println!("=========================");
    println!("Data directory: {}", format_path_with_tilde(&settings.data_dir));
    println!();

    let glossary_path = settings.glossary_path();
    if glossary_path.exists() {
        let entries = load_glossary(&glossary_path)?;
        println!("Glossary terms: {}", entries.len());
        println!("  Categories: {}", unique_categories(&entries).len());
    } else {
        println!("Glossary terms: (missing {})", glossary_path.display());
    }

    print_count("Translator pairs", &settings.translations_path(), load_translations)?;
    print_count("Search pages", &settings.pages_path(), load_pages)?;

    Ok(())
}

fn print_count<T>(label: &str, path: &Path, load: fn(&Path) -> Result<Vec<T>>) -> Result<()> {
    if path.exists() {
        println!("{}: {}", label, load(path)?.len());
    } else {
        println!("{}: (missing {})", label, path.display());
    }
    Ok(())
}
