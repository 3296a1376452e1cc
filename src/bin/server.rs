use std::net::IpAddr;
use std::time::Duration;

use clap::Parser;
use miette::Result;

use biztime::api::{self, Config};
use biztime::db::{Database, SqliteDatabase};

#[derive(Parser)]
#[command(name = "biztime")]
#[command(author, version, about = "Bookkeeping demo API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Path to the SQLite database file
    #[arg(long, default_value = "biztime.db")]
    database: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    request_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let db = SqliteDatabase::open(&cli.database).await?;
    db.migrate().await?;

    api::run(
        Config {
            host: cli.host,
            port: cli.port,
            request_timeout: Duration::from_secs(cli.request_timeout),
        },
        db,
    )
    .await
}
