use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use quizindex::{index, names, utils, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding the quiz definition files.
    #[arg(short, long, env = "QUIZ_DATA_DIR", default_value = names::DEFAULT_DATA_DIR, global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan the data directory and write its index.json.
    GenerateIndex,

    /// Serve the quiz index over HTTP.
    Serve {
        /// The address to bind to.
        #[arg(short, long, env, default_value = names::DEFAULT_ADDRESS)]
        address: String,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "quizindex=info,tower_http=info".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    match args.command {
        Some(Command::GenerateIndex) => generate_index(args.data_dir),
        Some(Command::Serve { address }) => serve(args.data_dir, address).await,
        None => {
            Args::command().print_help()?;
            Ok(())
        }
    }
}

fn generate_index(data_dir: PathBuf) -> color_eyre::Result<()> {
    tracing::info!("generating quiz index for {}", data_dir.display());

    let report = index::generate_index_file(&data_dir)?;

    tracing::info!("index written to {}", report.path.display());
    tracing::info!("{} quizzes indexed", report.index.count);
    tracing::info!("categories: {}", report.index.categories.join(", "));

    Ok(())
}

async fn serve(data_dir: PathBuf, address: String) -> color_eyre::Result<()> {
    let address = address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!(
        "quizindex {} serving {} on http://{}",
        utils::VERSION,
        data_dir.display(),
        listener.local_addr()?
    );

    let routes = quizindex::router(AppState { data_dir });
    axum::serve(listener, routes)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
