use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use etsyproxy::{cli, config, error};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Server options used when no subcommand is given
    #[clap(flatten)]
    serve: ServeOptions,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve(ServeOptions),

    /// Print the Etsy consent URL for the configured client
    AuthUrl(AuthUrlOptions),

    /// Generate a new PKCE code verifier and challenge
    Verifier,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct ServeOptions {
    /// Port to listen on (overrides SERVER_PORT)
    #[clap(long)]
    pub port: Option<u16>,

    /// Directory holding the handlebars views (overrides VIEWS_DIR)
    #[clap(long)]
    pub views: Option<PathBuf>,
}

impl From<ServeOptions> for config::Overrides {
    fn from(opts: ServeOptions) -> Self {
        config::Overrides {
            port: opts.port,
            views_dir: opts.views,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct AuthUrlOptions {
    /// Space separated scopes (overrides ETSY_SCOPE)
    #[clap(long)]
    pub scope: Option<String>,

    /// Open the URL in the default browser
    #[clap(long)]
    pub open: bool,
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

    match cli.command {
        None => cli::serve(cli.serve.into()).await,
        Some(Command::Serve(opt)) => cli::serve(opt.into()).await,
        Some(Command::AuthUrl(opt)) => cli::auth_url(opt.scope, opt.open).await,
        Some(Command::Verifier) => cli::verifier(),
        Some(Command::Completions(opt)) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
