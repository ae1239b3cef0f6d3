//! CLI definitions and entry point

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

use pascal_lex::{
    display_error, lexer::source::ReaderSource, write_tokens, Lexer, RenderOptions,
};

/// pascal-lex - Split Pascal source into classified tokens
#[derive(Parser, Debug)]
#[command(
    name = "pascal-lex",
    version,
    about = "Split Pascal source into classified tokens",
    long_about = "Tokenizes a Pascal source file line by line.\n\n\
                  Every line is matched against an ordered pattern catalog and\n\
                  overlapping matches are resolved longest-first."
)]
pub struct Cli {
    /// Source file to tokenize
    pub file: PathBuf,

    /// Include comment tokens in the output
    #[arg(long)]
    pub show_comments: bool,

    /// Prefix every token with line:start-end
    #[arg(long)]
    pub positions: bool,

    /// Print token counts per kind after the listing
    #[arg(long)]
    pub summary: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let options = RenderOptions {
        show_comments: cli.show_comments,
        positions: cli.positions,
    };

    let source = match ReaderSource::open(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            display_error(&err);
            return ExitCode::FAILURE;
        }
    };

    let (tokens, error) = Lexer::default().tokenize(source);

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = write_tokens(&mut stdout, &tokens, options, cli.summary) {
        log::error!("cannot write tokens: {}", err);
        return ExitCode::FAILURE;
    }

    if let Some(err) = error {
        display_error(&err);
        return ExitCode::FAILURE;
    }

    log::info!("{} tokens from {}", tokens.len(), cli.file.display());
    ExitCode::SUCCESS
}
