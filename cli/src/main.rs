mod commands;
mod source;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use feedback::export::ExportError;
use feedback::{FeedbackSource, ItemId, LoadStatus, ViewState};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
    #[error("cannot read fixture {path}: {source}")]
    Fixture { path: String, source: io::Error },
    #[error("{0}")]
    Load(String),
    #[error("no feedback item with id {0}")]
    UnknownItem(ItemId),
    #[error("no feedback items to show")]
    NoItems,
    #[error("csv export failed: {0}")]
    Export(#[from] ExportError),
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "surf", about = "SURF feedback priorities from the command line")]
struct Cli {
    #[arg(long, env = "SURF_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Read the envelope from a JSON file instead of the API.
    #[arg(long)]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check `GET /healthz`.
    Ping,
    /// Ranked items, optionally filtered by title.
    List {
        #[arg(long)]
        filter: Option<String>,
    },
    /// Full detail of one item (default: the first).
    Show { id: Option<ItemId> },
    /// Visible items as CSV.
    Export {
        #[arg(long)]
        filter: Option<String>,
        /// Output path, or `-` for stdout.
        #[arg(long, short, default_value = "-")]
        output: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let http = reqwest::Client::new();

    if matches!(cli.command, Command::Ping) {
        return run_ping(&http, &cli.base_url).await;
    }

    let mut view = load_view(&cli, http).await?;
    let stdout = io::stdout();
    match cli.command {
        Command::Ping => Ok(()),
        Command::List { filter } => commands::list(&mut view, filter.as_deref(), &mut stdout.lock()),
        Command::Show { id } => commands::show(&mut view, id, &mut stdout.lock()),
        Command::Export { filter, output } => {
            if output == "-" {
                commands::export(&mut view, filter.as_deref(), &mut stdout.lock())
            } else {
                let mut file = BufWriter::new(File::create(&output)?);
                commands::export(&mut view, filter.as_deref(), &mut file)?;
                file.flush()?;
                eprintln!("wrote {} items to {output}", view.visible_count());
                Ok(())
            }
        }
    }
}

async fn run_ping(http: &reqwest::Client, base_url: &str) -> Result<(), CliError> {
    let url = format!("{}/healthz", base_url.trim_end_matches('/'));
    let status = http.get(url).send().await?.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

async fn load_view(cli: &Cli, http: reqwest::Client) -> Result<ViewState, CliError> {
    let source: Box<dyn FeedbackSource> = match &cli.fixture {
        Some(path) => Box::new(source::read_fixture(path).map_err(|source| CliError::Fixture {
            path: path.display().to_string(),
            source,
        })?),
        None => Box::new(source::ApiSource::new(http, &cli.base_url)),
    };

    let mut view = ViewState::new();
    view.load(source.as_ref()).await;
    match view.status() {
        LoadStatus::Error(message) => Err(CliError::Load(message.clone())),
        LoadStatus::Loading | LoadStatus::Ready => Ok(view),
    }
}
