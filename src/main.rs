use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotsrc::{FALLBACK_TENANT, TenantId, cli, config, error, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve a Spotify link, spsearch: or sprec: identifier
    Resolve(ResolveOptions),

    /// Search albums, artists, playlists and tracks
    Search(SearchOptions),

    /// Artist metadata or track audio features
    Info(InfoOptions),

    /// Serve the local HTTP API
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveOptions {
    /// Link or prefixed query, e.g. https://open.spotify.com/track/<id> or spsearch:<query>
    pub identifier: String,

    /// Tenant whose credentials are used (falls back to the default tenant)
    #[clap(long, default_value_t = FALLBACK_TENANT, allow_hyphen_values = true)]
    pub tenant: TenantId,

    /// Report 30 second previews instead of full tracks
    #[clap(long)]
    pub preview: bool,

    /// Print the result as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    pub query: String,

    /// Result type(s) to search for; defaults to all
    #[clap(long = "type", value_parser = utils::parse_search_types)]
    pub types: Option<utils::SearchTypes>,

    #[clap(long, default_value_t = FALLBACK_TENANT, allow_hyphen_values = true)]
    pub tenant: TenantId,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoOptions {
    /// Artist id to describe
    #[clap(long)]
    artist: Option<String>,

    /// Track id whose audio features to show
    #[clap(long)]
    features: Option<String>,

    #[clap(long, default_value_t = FALLBACK_TENANT, allow_hyphen_values = true)]
    tenant: TenantId,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let source = match cli::source_from_env() {
        Ok(source) => source,
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };

    match cli.command {
        Command::Resolve(opt) => {
            cli::resolve(&source, opt.identifier, opt.tenant, opt.preview, opt.json).await
        }
        Command::Search(opt) => {
            let types = opt.types.unwrap_or_default();
            cli::search(&source, opt.query, &types, opt.tenant).await
        }
        Command::Info(opt) => cli::info(&source, opt.artist, opt.features, opt.tenant).await,
        Command::Serve => cli::serve(source).await,
        Command::Completions(_) => {}
    }
}
