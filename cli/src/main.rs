use std::fmt::Write as _;
use std::io::{self, Write};

use clap::{Parser, Subcommand, ValueEnum};
use urltoken::error::{AppResult, run_with_error_handler};
use urltoken::{Config, Token};

#[derive(Parser, Debug)]
#[command(about = "Generate and inspect url-safe random tokens", long_about = None)]
pub struct Cli {
    /// Read ./config.toml instead of the per-user config
    #[arg(long, global = true)]
    pub local: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate new tokens
    Generate {
        /// Length in bytes, defaults to the configured length
        #[arg(long)]
        length: Option<usize>,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Decode a text token and print its bytes
    Inspect { text: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Hex,
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}

fn render(token: &Token, format: Format) -> String {
    match format {
        Format::Text => token.to_text(),
        Format::Hex => to_hex(token.as_bytes()),
    }
}

fn write_tokens<W: Write>(
    out: &mut W,
    length: usize,
    count: usize,
    format: Format,
) -> AppResult<()> {
    for _ in 0..count {
        let token = Token::generate(length)?;
        writeln!(out, "{}", render(&token, format))?;
    }
    Ok(())
}

async fn generate(
    use_local: bool,
    length: Option<usize>,
    count: usize,
    format: Format,
) -> AppResult<()> {
    let length = match length {
        Some(length) => length,
        None => Config::get_or_init(use_local).await?.token().length(),
    };

    tracing::debug!(length, count, "generating tokens");
    write_tokens(&mut io::stdout().lock(), length, count, format)
}

fn inspect(text: &str) -> AppResult<()> {
    let token: Token = text.parse()?;
    println!("length: {}", token.len());
    println!("bytes:  {}", to_hex(token.as_bytes()));
    Ok(())
}

#[tokio::main]
async fn main() {
    urltoken::init_tracing();
    let cli = Cli::parse();

    run_with_error_handler(async || match &cli.command {
        Commands::Generate {
            length,
            count,
            format,
        } => generate(cli.local, *length, *count, *format).await,
        Commands::Inspect { text } => inspect(text),
    })
    .await;
}
