mod support;

use quire_core::application::commands::pages::CreatePageCommand;
use quire_core::application::error::ApplicationError;
use quire_core::application::queries::pages::{GetPageBySlugQuery, ListPagesQuery};
use quire_core::application::queries::tags::GetTagQuery;
use quire_core::domain::site_option::SiteOption;
use support::{MemoryDb, authed_user, build_services, test_instant};

async fn seed_page(
    services: &quire_core::application::services::ApplicationServices,
    title: &str,
    is_private: bool,
    tags: &str,
) -> quire_core::application::dto::PageDto {
    let actor = authed_user(test_instant());
    services
        .page_commands
        .create_page(
            &actor,
            CreatePageCommand {
                title: title.into(),
                content: Some(format!("{title} body")),
                notes: None,
                is_private,
                tags: tags.into(),
            },
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn anonymous_listing_hides_private_pages() {
    let db = MemoryDb::new();
    let services = build_services(&db, test_instant());
    seed_page(&services, "Public One", false, "").await;
    seed_page(&services, "Hidden One", true, "").await;

    let query = || ListPagesQuery {
        page: 1,
        per_page: 10,
    };

    let anonymous = services
        .page_queries
        .list_pages(None, query())
        .await
        .unwrap();
    assert_eq!(anonymous.total, 1);
    assert_eq!(anonymous.items[0].title, "Public One");

    let actor = authed_user(test_instant());
    let authenticated = services
        .page_queries
        .list_pages(Some(&actor), query())
        .await
        .unwrap();
    assert_eq!(authenticated.total, 2);
}

#[tokio::test]
async fn listing_is_ordered_by_title_and_paginated() {
    let db = MemoryDb::new();
    let services = build_services(&db, test_instant());
    seed_page(&services, "Cherry", false, "").await;
    seed_page(&services, "Apple", false, "").await;
    seed_page(&services, "Banana", false, "").await;

    let first = services
        .page_queries
        .list_pages(
            None,
            ListPagesQuery {
                page: 1,
                per_page: 2,
            },
        )
        .await
        .unwrap();

    let titles: Vec<&str> = first.items.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Apple", "Banana"]);
    assert_eq!(first.total, 3);
    assert!(first.has_more);

    let second = services
        .page_queries
        .list_pages(
            None,
            ListPagesQuery {
                page: 2,
                per_page: 2,
            },
        )
        .await
        .unwrap();
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].title, "Cherry");
    assert!(!second.has_more);
}

#[tokio::test]
async fn private_page_by_slug_requires_authentication() {
    let db = MemoryDb::new();
    let services = build_services(&db, test_instant());
    let page = seed_page(&services, "Secret Notes", true, "").await;

    let err = services
        .page_queries
        .get_page_by_slug(
            None,
            GetPageBySlugQuery {
                slug: page.slug.clone(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));

    let actor = authed_user(test_instant());
    let found = services
        .page_queries
        .get_page_by_slug(Some(&actor), GetPageBySlugQuery { slug: page.slug })
        .await
        .unwrap();
    assert_eq!(found.title, "Secret Notes");
}

#[tokio::test]
async fn missing_slug_is_not_found() {
    let db = MemoryDb::new();
    let services = build_services(&db, test_instant());

    let err = services
        .page_queries
        .get_page_by_slug(
            None,
            GetPageBySlugQuery {
                slug: "nothing-here".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn main_page_prefers_title_match_over_slug() {
    let db = MemoryDb::new();
    let services = build_services(&db, test_instant());

    // One page whose *slug* is "welcome", another whose *title* is "welcome".
    seed_page(&services, "Welcome", false, "").await;
    seed_page(&services, "welcome", false, "").await;
    db.set_option_raw(SiteOption::MAIN_PAGE, "welcome");

    let main = services.page_queries.main_page(None).await.unwrap();
    assert_eq!(main.title, "welcome");
}

#[tokio::test]
async fn main_page_falls_back_to_slug_lookup() {
    let db = MemoryDb::new();
    let services = build_services(&db, test_instant());
    seed_page(&services, "Front Door", false, "").await;
    db.set_option_raw(SiteOption::MAIN_PAGE, "front-door");

    let main = services.page_queries.main_page(None).await.unwrap();
    assert_eq!(main.title, "Front Door");
}

#[tokio::test]
async fn unset_main_page_is_not_found() {
    let db = MemoryDb::new();
    let services = build_services(&db, test_instant());

    let err = services.page_queries.main_page(None).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn private_main_page_is_hidden_from_anonymous_visitors() {
    let db = MemoryDb::new();
    let services = build_services(&db, test_instant());
    seed_page(&services, "Members Only", true, "").await;
    db.set_option_raw(SiteOption::MAIN_PAGE, "Members Only");

    let err = services.page_queries.main_page(None).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let actor = authed_user(test_instant());
    let main = services.page_queries.main_page(Some(&actor)).await.unwrap();
    assert_eq!(main.title, "Members Only");
}

#[tokio::test]
async fn tags_list_includes_orphans_in_name_order() {
    let db = MemoryDb::new();
    let services = build_services(&db, test_instant());
    seed_page(&services, "Tagged", false, "zebra, alpha").await;

    let tags = services.tag_queries.list_tags().await.unwrap();
    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "zebra"]);
}

#[tokio::test]
async fn tag_pages_are_visibility_filtered() {
    let db = MemoryDb::new();
    let services = build_services(&db, test_instant());
    seed_page(&services, "Open Post", false, "shared").await;
    seed_page(&services, "Closed Post", true, "shared").await;

    let tags = services.tag_queries.list_tags().await.unwrap();
    let tag_id = tags[0].id;

    let anonymous = services
        .tag_queries
        .get_tag(None, GetTagQuery { id: tag_id })
        .await
        .unwrap();
    assert_eq!(anonymous.pages.len(), 1);
    assert_eq!(anonymous.pages[0].title, "Open Post");

    let actor = authed_user(test_instant());
    let authenticated = services
        .tag_queries
        .get_tag(Some(&actor), GetTagQuery { id: tag_id })
        .await
        .unwrap();
    assert_eq!(authenticated.pages.len(), 2);
}

#[tokio::test]
async fn unknown_tag_is_not_found() {
    let db = MemoryDb::new();
    let services = build_services(&db, test_instant());

    let err = services
        .tag_queries
        .get_tag(None, GetTagQuery { id: 7 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
