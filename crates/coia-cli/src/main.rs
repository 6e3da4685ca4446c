//! coia CLI - generate localized, identifier-safe aliases

rust_i18n::i18n!("locales", fallback = "en");

mod locale;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use coia_core::{
    AliasConfig, AliasError, AliasRequest, DeletionClass, create_alias_with, languages,
};
use colored::Colorize;
use rust_i18n::t;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const EXIT_ALIAS_ERROR: u8 = 1;
const EXIT_USAGE_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "coia")]
#[command(author, version, about = "Generate localized, identifier-safe aliases", long_about = None)]
#[command(subcommand_negates_reqs = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    alias: AliasArgs,

    /// Config file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Message locale (en, es, zh-CN); does not change the alias language
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Also delete modifier letters during normalization
    #[arg(long, global = true)]
    strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// List the supported alias languages and exit
    #[arg(long)]
    list_languages: bool,
}

#[derive(Args)]
struct AliasArgs {
    /// Alias language code (e.g. en, fr, ja)
    #[arg(short, long)]
    lang: Option<String>,

    /// Digits-only flags, at most 10
    #[arg(short, long)]
    flags: Option<String>,

    /// Who holds the role; omit or pass "" for the localized "me"
    #[arg(short, long)]
    who: Option<String>,

    /// Role description
    #[arg(short, long, required_unless_present = "list_languages")]
    role: Option<String>,

    /// Organization the role applies to
    #[arg(short, long)]
    scope: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize arbitrary text without template resolution
    Normalize {
        /// Text to normalize
        text: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct AliasOutput<'a> {
    alias: &'a str,
}

#[derive(Serialize)]
struct ErrorOutput<'a> {
    error: ErrorBody<'a>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    kind: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    lang: Option<&'a str>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", t!("cli.error_prefix").red().bold(), e);
            ExitCode::from(EXIT_USAGE_ERROR)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => AliasConfig::load(path)
            .with_context(|| {
                t!("cli.config_load_failed", path = path.display().to_string()).to_string()
            })?,
        None => AliasConfig::default(),
    };

    locale::init(cli.locale.as_deref(), config.locale.as_deref());

    if cli.strict {
        config.deletion = DeletionClass::Strict;
    }

    if cli.list_languages {
        print_languages();
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(Commands::Normalize { text }) = &cli.command {
        let alias = config.normalizer().normalize(text);
        print_alias(cli.format, &alias)?;
        return Ok(ExitCode::SUCCESS);
    }

    let lang = cli
        .alias
        .lang
        .as_deref()
        .or(config.default_lang.as_deref())
        .ok_or_else(|| anyhow::anyhow!(t!("cli.missing_lang").to_string()))?;

    let request = AliasRequest::from_parts(
        lang,
        cli.alias.flags.as_deref(),
        cli.alias.who.as_deref(),
        cli.alias.role.as_deref().unwrap_or_default(),
        cli.alias.scope.as_deref(),
    );

    match create_alias_with(&request, &config) {
        Ok(alias) => {
            print_alias(cli.format, &alias)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!(kind = e.kind(), "alias creation failed");
            print_alias_error(cli.format, &e)?;
            Ok(ExitCode::from(EXIT_ALIAS_ERROR))
        }
    }
}

fn print_alias(format: OutputFormat, alias: &str) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{alias}"),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&AliasOutput { alias })?;
            println!("{json}");
        }
    }
    Ok(())
}

fn print_alias_error(format: OutputFormat, error: &AliasError) -> Result<()> {
    match format {
        OutputFormat::Text => {
            eprintln!(
                "{} {}",
                t!("cli.error_prefix").red().bold(),
                localized_message(error)
            );
        }
        OutputFormat::Json => {
            let output = ErrorOutput {
                error: ErrorBody {
                    kind: error.kind(),
                    message: error.to_string(),
                    lang: error.lang(),
                },
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn localized_message(error: &AliasError) -> String {
    match error {
        AliasError::EmptyRole => t!("cli.alias_error.empty_role").to_string(),
        AliasError::InvalidFlags => t!("cli.alias_error.invalid_flags").to_string(),
        AliasError::FlagsTooLong => t!(
            "cli.alias_error.flags_too_long",
            max = coia_core::resolver::MAX_FLAGS_LEN.to_string()
        )
        .to_string(),
        AliasError::NoPronounTranslation(lang) => {
            t!("cli.alias_error.no_pronoun_translation", lang = lang.as_str()).to_string()
        }
        AliasError::NoScopeTemplate(lang) => {
            t!("cli.alias_error.no_scope_template", lang = lang.as_str()).to_string()
        }
        AliasError::NoTemplate(lang) => {
            t!("cli.alias_error.no_template", lang = lang.as_str()).to_string()
        }
    }
}

fn print_languages() {
    println!("{}", t!("cli.supported_languages"));
    for &(code, name) in languages::SUPPORTED_LANGUAGES {
        println!("  {:<4} {}", code, name);
    }
}
