use anyhow::Context;
use clap::{Parser, Subcommand};
use tasklist::client::TaskClient;
use tasklist::config::Config;
use tasklist::state::AppState;
use tasklist::{router, ui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tasklist", version, about = "In-memory task list service and client")]
struct Cli {
    /// Service base URL for client commands (overrides TASKLIST_URL).
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP service (default).
    Serve,
    /// Interactive terminal view.
    Ui,
    /// Print all tasks.
    List,
    /// Create a task.
    Add {
        #[arg(required = true)]
        title: Vec<String>,
    },
    /// Flip a task's completion.
    Toggle { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("invalid configuration")?;
    let client = || TaskClient::new(cli.url.as_deref().unwrap_or(&config.api_url));

    match &cli.command {
        Some(Command::Serve) | None => serve(&config).await?,
        Some(Command::Ui) => ui::run(client()).await,
        Some(Command::List) => ui::list(&client()).await?,
        Some(Command::Add { title }) => ui::add(&client(), &title.join(" ")).await?,
        Some(Command::Toggle { id }) => ui::toggle(&client(), id).await?,
    }
    Ok(())
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist=info,tower_http=info".into()),
        )
        .init();

    let addr = config.bind_addr();
    let app = router::build(AppState::new());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server running on {addr}");

    axum::serve(listener, app).await.context("server error")
}
