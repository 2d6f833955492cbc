mod cli;

use anyhow::Result;
use clap::Parser;
use quire_core::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        session_revocation::SessionRevocationStore,
        time::Clock,
        util::SlugGenerator,
    },
    queries::site_options::SiteDefaults,
    services::ApplicationServices,
};
use quire_core::config::AppConfig;
use quire_core::domain::{
    page::{PageReadRepository, PageWriteRepository},
    site_option::SiteOptionRepository,
    tag::TagRepository,
};
use quire_core::infrastructure::{
    database,
    repositories::{
        SqlitePageReadRepository, SqlitePageWriteRepository, SqliteSiteOptionRepository,
        SqliteTagRepository,
    },
    security::{Argon2PasswordHasher, HmacTokenManager, InMemorySessionRevocationStore},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use quire_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = cli::Cli::parse();
    match args.command {
        Some(command) => cli::run(command).await,
        None => serve().await,
    }
}

async fn serve() -> Result<()> {
    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let page_write_repo: Arc<dyn PageWriteRepository> =
        Arc::new(SqlitePageWriteRepository::new(Arc::clone(&pool)));
    let page_read_repo: Arc<dyn PageReadRepository> =
        Arc::new(SqlitePageReadRepository::new(Arc::clone(&pool)));
    let tag_repo: Arc<dyn TagRepository> = Arc::new(SqliteTagRepository::new(Arc::clone(&pool)));
    let option_repo: Arc<dyn SiteOptionRepository> =
        Arc::new(SqliteSiteOptionRepository::new(Arc::clone(&pool)));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let token_manager_impl =
        HmacTokenManager::new(config.session_key(), config.token_ttl(), Arc::clone(&clock))?;
    let token_manager: Arc<dyn TokenManager> = Arc::new(token_manager_impl);
    let revocation_store: Arc<dyn SessionRevocationStore> =
        Arc::new(InMemorySessionRevocationStore::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(
        page_write_repo,
        page_read_repo,
        tag_repo,
        option_repo,
        password_hasher,
        token_manager,
        revocation_store,
        clock,
        slugger,
        SiteDefaults {
            sitename: config.sitename().to_string(),
            author: config.author().to_string(),
        },
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        sitename = config.sitename(),
        author = config.author(),
        "listening on {address}"
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
