mod support;

use quire_core::application::commands::auth::LoginCommand;
use quire_core::application::commands::site_options::{SetOptionCommand, ClearOptionCommand};
use quire_core::application::error::ApplicationError;
use quire_core::application::ports::security::PasswordHasher as _;
use quire_core::application::queries::site_options::ListOptionsQuery;
use quire_core::domain::site_option::SiteOption;
use quire_core::infrastructure::security::Argon2PasswordHasher;
use support::{MemoryDb, build_services, test_instant};

async fn store_password(db: &MemoryDb, password: &str) {
    let hash = Argon2PasswordHasher.hash(password).await.unwrap();
    db.set_option_raw(SiteOption::HASHED_PASSWORD, &hash);
}

#[tokio::test]
async fn login_without_password_option_is_unavailable() {
    let db = MemoryDb::new();
    let services = build_services(&db, test_instant());

    let err = services
        .auth_commands
        .login(LoginCommand {
            password: "anything".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unavailable(_)));
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let db = MemoryDb::new();
    store_password(&db, "right-password").await;
    let services = build_services(&db, test_instant());

    let err = services
        .auth_commands
        .login(LoginCommand {
            password: "wrong-password".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn login_issues_a_token_that_authenticates() {
    let db = MemoryDb::new();
    store_password(&db, "letmein").await;
    db.set_option_raw(SiteOption::AUTHOR, "Option Author");
    let services = build_services(&db, test_instant());

    let token = services
        .auth_commands
        .login(LoginCommand {
            password: "letmein".into(),
        })
        .await
        .unwrap();
    assert_eq!(token.expires_in, 3600);

    let user = services.authenticate(&token.token).await.unwrap();
    assert_eq!(user.author, "Option Author");
    assert_eq!(user.session_id, token.session_id);
}

#[tokio::test]
async fn logout_revokes_the_session() {
    let db = MemoryDb::new();
    store_password(&db, "letmein").await;
    let services = build_services(&db, test_instant());

    let token = services
        .auth_commands
        .login(LoginCommand {
            password: "letmein".into(),
        })
        .await
        .unwrap();

    let user = services.authenticate(&token.token).await.unwrap();
    services.auth_commands.logout(&user).await.unwrap();

    let err = services.authenticate(&token.token).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn garbage_tokens_are_rejected() {
    let db = MemoryDb::new();
    let services = build_services(&db, test_instant());

    let err = services.authenticate("not-a-token").await.unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn site_info_prefers_options_over_config_defaults() {
    let db = MemoryDb::new();
    let services = build_services(&db, test_instant());

    let defaults = services.option_queries.site_info().await.unwrap();
    assert_eq!(defaults.sitename, "Test Site");
    assert_eq!(defaults.author, "Test Author");

    db.set_option_raw(SiteOption::SITENAME, "Configured Site");
    let configured = services.option_queries.site_info().await.unwrap();
    assert_eq!(configured.sitename, "Configured Site");
    assert_eq!(configured.author, "Test Author");
}

#[tokio::test]
async fn option_commands_report_old_and_new_values() {
    let db = MemoryDb::new();
    let services = build_services(&db, test_instant());

    let created = services
        .option_commands
        .set_option(SetOptionCommand {
            name: "main_page".into(),
            value: "welcome".into(),
        })
        .await
        .unwrap();
    assert!(created.old_value.is_none());
    assert_eq!(created.new_value, "welcome");

    let replaced = services
        .option_commands
        .set_option(SetOptionCommand {
            name: "main_page".into(),
            value: "home".into(),
        })
        .await
        .unwrap();
    assert_eq!(replaced.old_value.as_deref(), Some("welcome"));

    let listed = services
        .option_queries
        .list_options(ListOptionsQuery {
            search: Some("main".into()),
        })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "main_page");

    let cleared = services
        .option_commands
        .clear_option(ClearOptionCommand {
            name: "main_page".into(),
        })
        .await
        .unwrap();
    assert_eq!(cleared.old_value.as_deref(), Some("home"));

    let missing = services
        .option_commands
        .clear_option(ClearOptionCommand {
            name: "main_page".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(missing, ApplicationError::NotFound(_)));
}
