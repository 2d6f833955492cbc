// src/cli.rs
//
// Operator commands for the same binary that serves the site. Database
// administration works without the web-serving configuration; only `serve`
// (the default, no subcommand) needs a session key.
use anyhow::Result;
use argon2::password_hash::rand_core::{OsRng, RngCore};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use std::sync::Arc;

use quire_core::application::commands::pages::{
    PageCommandService, ResetSlugCommand, ResetSummaryCommand, SetCreatedDateCommand,
    SetUpdatedDateCommand,
};
use quire_core::application::commands::site_options::{
    ClearOptionCommand, SetOptionCommand, SiteOptionCommandService,
};
use quire_core::application::ports::security::PasswordHasher as _;
use quire_core::application::queries::site_options::{
    ListOptionsQuery, SiteDefaults, SiteOptionQueryService,
};
use quire_core::config::AppConfig;
use quire_core::domain::page::services::PageSlugService;
use quire_core::domain::page::{PageReadRepository, PageWriteRepository};
use quire_core::domain::site_option::SiteOptionRepository;
use quire_core::domain::tag::TagRepository;
use quire_core::infrastructure::{
    database,
    repositories::{
        SqlitePageReadRepository, SqlitePageWriteRepository, SqliteSiteOptionRepository,
        SqliteTagRepository,
    },
    security::Argon2PasswordHasher,
    time::SystemClock,
    util::DefaultSlugGenerator,
};

#[derive(Parser)]
#[command(name = "quire-core", version, about = "Single-author wiki engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<AdminCommand>,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Create the database schema and exit.
    CreateDb,
    /// Print a fresh random session key.
    CreateSecretKey,
    /// Print the argon2 hash of a password, for `set-option hashed_password`.
    HashPassword { password: String },
    /// Recompute a page's slug from its current title.
    ResetSlug { page_id: i64 },
    /// Re-derive a page's summary from its stored content.
    ResetSummary { page_id: i64 },
    /// Override a page's creation date.
    SetDate { page_id: i64, date: String },
    /// Override a page's last-updated date.
    SetLastUpdated { page_id: i64, date: String },
    /// List options, optionally filtered by a search term.
    ListOptions { search: Option<String> },
    /// Set an option value, creating the option if needed.
    SetOption { name: String, value: String },
    /// Remove an option.
    ClearOption { name: String },
}

struct AdminContext {
    page_commands: PageCommandService,
    option_commands: SiteOptionCommandService,
    option_queries: SiteOptionQueryService,
}

async fn admin_context() -> Result<AdminContext> {
    let database_url = AppConfig::database_url_from_env();
    let pool = Arc::new(database::init_pool(&database_url).await?);
    database::run_migrations(&pool).await?;

    let write_repo: Arc<dyn PageWriteRepository> =
        Arc::new(SqlitePageWriteRepository::new(Arc::clone(&pool)));
    let read_repo: Arc<dyn PageReadRepository> =
        Arc::new(SqlitePageReadRepository::new(Arc::clone(&pool)));
    let tag_repo: Arc<dyn TagRepository> = Arc::new(SqliteTagRepository::new(Arc::clone(&pool)));
    let option_repo: Arc<dyn SiteOptionRepository> =
        Arc::new(SqliteSiteOptionRepository::new(Arc::clone(&pool)));

    let slug_service = Arc::new(PageSlugService::new(
        Arc::clone(&read_repo),
        Arc::new(DefaultSlugGenerator),
    ));

    let page_commands = PageCommandService::new(
        write_repo,
        read_repo,
        tag_repo,
        slug_service,
        Arc::new(SystemClock),
    );
    let option_commands = SiteOptionCommandService::new(Arc::clone(&option_repo));
    let option_queries = SiteOptionQueryService::new(
        option_repo,
        SiteDefaults {
            sitename: AppConfig::sitename_from_env(),
            author: AppConfig::author_from_env(),
        },
    );

    Ok(AdminContext {
        page_commands,
        option_commands,
        option_queries,
    })
}

fn generate_secret_key() -> String {
    let mut bytes = [0u8; 24];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    anyhow::bail!("unrecognized date {input:?}; expected RFC 3339 or YYYY-MM-DD [HH:MM:SS]")
}

pub async fn run(command: AdminCommand) -> Result<()> {
    match command {
        AdminCommand::CreateDb => {
            let database_url = AppConfig::database_url_from_env();
            println!("Setting up the database");
            let pool = database::init_pool(&database_url).await?;
            database::run_migrations(&pool).await?;
            println!("Database schema is up to date");
        }
        AdminCommand::CreateSecretKey => {
            println!("{}", generate_secret_key());
        }
        AdminCommand::HashPassword { password } => {
            let hash = Argon2PasswordHasher.hash(&password).await?;
            println!("{hash}");
        }
        AdminCommand::ResetSlug { page_id } => {
            let ctx = admin_context().await?;
            println!("Resetting the slug for page {page_id}");
            let outcome = ctx
                .page_commands
                .reset_slug(ResetSlugCommand { page_id })
                .await?;
            println!("Old slug is \"{}\"", outcome.old_slug);
            println!("New slug is \"{}\"", outcome.new_slug);
        }
        AdminCommand::ResetSummary { page_id } => {
            let ctx = admin_context().await?;
            println!("Resetting the summary for page {page_id}");
            let outcome = ctx
                .page_commands
                .reset_summary(ResetSummaryCommand { page_id })
                .await?;
            println!("Old summary is \"{}\"", outcome.old_summary);
            println!("New summary is \"{}\"", outcome.new_summary);
        }
        AdminCommand::SetDate { page_id, date } => {
            let at = parse_date(&date)?;
            let ctx = admin_context().await?;
            println!("Setting the date for page {page_id}");
            let outcome = ctx
                .page_commands
                .set_created_date(SetCreatedDateCommand { page_id, at })
                .await?;
            println!("Old date is \"{}\"", outcome.old_date);
            println!("New date is \"{}\"", outcome.new_date);
        }
        AdminCommand::SetLastUpdated { page_id, date } => {
            let at = parse_date(&date)?;
            let ctx = admin_context().await?;
            println!("Setting the last updated date for page {page_id}");
            let outcome = ctx
                .page_commands
                .set_updated_date(SetUpdatedDateCommand { page_id, at })
                .await?;
            println!("Old date is \"{}\"", outcome.old_date);
            println!("New date is \"{}\"", outcome.new_date);
        }
        AdminCommand::ListOptions { search } => {
            let ctx = admin_context().await?;
            let options = ctx
                .option_queries
                .list_options(ListOptionsQuery { search })
                .await?;
            if options.is_empty() {
                println!("No options found");
            } else {
                let width = options.iter().map(|o| o.name.len()).max().unwrap_or(0);
                println!("Options");
                println!("-------");
                for option in options {
                    println!(
                        "{:width$}   {}",
                        option.name,
                        option.value.as_deref().unwrap_or("")
                    );
                }
            }
        }
        AdminCommand::SetOption { name, value } => {
            let ctx = admin_context().await?;
            let outcome = ctx
                .option_commands
                .set_option(SetOptionCommand { name, value })
                .await?;
            match outcome.old_value {
                Some(old) => println!("Old value is \"{old}\""),
                None => println!("Created option {}", outcome.name),
            }
            println!("New value is \"{}\"", outcome.new_value);
        }
        AdminCommand::ClearOption { name } => {
            let ctx = admin_context().await?;
            println!("Clearing option {name}");
            let outcome = ctx
                .option_commands
                .clear_option(ClearOptionCommand { name })
                .await?;
            println!("Old value is \"{}\"", outcome.old_value.unwrap_or_default());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_keys_are_hex_and_fresh() {
        let key = generate_secret_key();
        assert_eq!(key.len(), 48);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(key, generate_secret_key());
    }

    #[test]
    fn parse_date_accepts_common_formats() {
        assert!(parse_date("2024-05-01T12:00:00Z").is_ok());
        assert!(parse_date("2024-05-01 12:00:00").is_ok());
        assert!(parse_date("2024-05-01").is_ok());
        assert!(parse_date("yesterday").is_err());
    }
}
