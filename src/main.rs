use clap::Parser;
use studyhall::db::Db;
use studyhall::AppState;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database URL, e.g. sqlite://studyhall.db
    #[clap(env)]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Set the Secure attribute on session cookies.
    #[arg(long, env, default_value_t = false)]
    secure_cookies: bool,

    /// Bootstrap an admin account with this email (requires --admin-password).
    #[arg(long, env)]
    admin_email: Option<String>,

    /// Password for the bootstrapped admin account.
    #[arg(long, env)]
    admin_password: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,studyhall=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(&args.database_url).await?;

    if let (Some(email), Some(password)) = (&args.admin_email, &args.admin_password) {
        db.ensure_admin(email, password).await?;
    }

    let app = studyhall::router(AppState {
        db,
        secure_cookies: args.secure_cookies,
    });

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!("listening on {}", args.address);
    axum::serve(listener, app).await?;

    Ok(())
}
