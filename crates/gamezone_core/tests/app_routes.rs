use gamezone_core::db::open_db_in_memory;
use gamezone_core::seed::seed_articles;
use gamezone_core::view::{DetailView, Grid};
use gamezone_core::{
    AdminView, App, ArticleFilter, LocalAuthClient, NoticeLevel, Page, Profile,
    ProfileRepository, RecordingNotifier, Route, SqliteArticleRepository,
    SqliteProfileRepository, ALL_CATEGORIES,
};
use std::sync::Arc;
use uuid::Uuid;

#[test]
fn route_parsing_covers_every_page() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse(""), Route::Home);
    assert_eq!(Route::parse("/auth/"), Route::Auth);
    assert_eq!(Route::parse("/admin?tab=new"), Route::Admin);
    assert_eq!(
        Route::parse("/article/abc-123"),
        Route::Article("abc-123".to_string())
    );
    assert_eq!(
        Route::parse("/article/a/b"),
        Route::NotFound("/article/a/b".to_string())
    );
    assert_eq!(
        Route::parse("/nowhere"),
        Route::NotFound("/nowhere".to_string())
    );
}

#[test]
fn home_page_applies_filter() {
    let conn = open_db_in_memory().unwrap();
    seed_articles(&SqliteArticleRepository::new(&conn), Uuid::new_v4()).unwrap();
    let auth = LocalAuthClient::new();
    let app = App::new(&conn, &auth, Arc::new(RecordingNotifier::new()));

    let home = match app.open("/", ArticleFilter::new("valorant", ALL_CATEGORIES)) {
        Page::Home(home) => home,
        other => panic!("expected home page, got {other:?}"),
    };
    assert_eq!(home.query, "valorant");
    assert!(home.featured.is_some());
    match home.grid {
        Grid::Cards { cards } => {
            assert_eq!(cards.len(), 1);
            assert!(cards[0].title.starts_with("Valorant"));
        }
        other => panic!("unexpected grid: {other:?}"),
    }
}

#[test]
fn article_page_round_trips_card_link() {
    let conn = open_db_in_memory().unwrap();
    let ids = seed_articles(&SqliteArticleRepository::new(&conn), Uuid::new_v4()).unwrap();
    let auth = LocalAuthClient::new();
    let app = App::new(&conn, &auth, Arc::new(RecordingNotifier::new()));

    let path = Route::article(ids[1]).path();
    match app.open(&path, ArticleFilter::default()) {
        Page::Article(DetailView::Found { article, .. }) => assert_eq!(article.id, ids[1]),
        other => panic!("unexpected page: {other:?}"),
    }

    match app.open("/article/missing", ArticleFilter::default()) {
        Page::Article(view) => assert_eq!(view, DetailView::not_found()),
        other => panic!("unexpected page: {other:?}"),
    }
}

#[test]
fn unknown_path_renders_not_found_page() {
    let conn = open_db_in_memory().unwrap();
    let auth = LocalAuthClient::new();
    let app = App::new(&conn, &auth, Arc::new(RecordingNotifier::new()));

    match app.open("/games/top-10", ArticleFilter::default()) {
        Page::NotFound(view) => {
            assert_eq!(view.attempted_path, "/games/top-10");
            assert_eq!(view.heading, "404");
            assert_eq!(view.back, Route::Home);
        }
        other => panic!("unexpected page: {other:?}"),
    }
}

#[test]
fn auth_page_redirects_signed_in_user_home() {
    let conn = open_db_in_memory().unwrap();
    let auth = LocalAuthClient::new();
    let app = App::new(&conn, &auth, Arc::new(RecordingNotifier::new()));

    match app.open("/auth", ArticleFilter::default()) {
        Page::Auth(view) => assert_eq!(view.redirect, None),
        other => panic!("unexpected page: {other:?}"),
    }
    assert_eq!(auth.listener_count(), 0);

    auth.sign_in(Uuid::new_v4());
    match app.open("/auth", ArticleFilter::default()) {
        Page::Auth(view) => assert_eq!(view.redirect, Some(Route::Home)),
        other => panic!("unexpected page: {other:?}"),
    }
}

#[test]
fn admin_page_follows_gate() {
    let conn = open_db_in_memory().unwrap();
    let auth = LocalAuthClient::new();
    let notifier = Arc::new(RecordingNotifier::new());
    let app = App::new(&conn, &auth, notifier.clone());

    match app.open("/admin", ArticleFilter::default()) {
        Page::Admin(AdminView::Redirect { to }) => assert_eq!(to, Route::Auth),
        other => panic!("unexpected page: {other:?}"),
    }

    let user_id = Uuid::new_v4();
    auth.sign_in(user_id);
    assert!(matches!(
        app.open("/admin", ArticleFilter::default()),
        Page::Admin(AdminView::Denied(_))
    ));

    SqliteProfileRepository::new(&conn)
        .upsert_profile(&Profile::admin(user_id))
        .unwrap();
    seed_articles(&SqliteArticleRepository::new(&conn), user_id).unwrap();
    match app.open("/admin", ArticleFilter::default()) {
        Page::Admin(AdminView::Panel { submit_label, rows }) => {
            assert_eq!(submit_label, "Create Article");
            assert_eq!(rows.len(), 7);
            assert!(rows.iter().all(|row| row.status == "Published"));
        }
        other => panic!("unexpected page: {other:?}"),
    }
    assert!(notifier
        .notices()
        .iter()
        .all(|notice| notice.level != NoticeLevel::Error));
}

#[test]
fn pages_serialize_with_page_tag() {
    let conn = open_db_in_memory().unwrap();
    let auth = LocalAuthClient::new();
    let app = App::new(&conn, &auth, Arc::new(RecordingNotifier::new()));

    let page = app.open("/", ArticleFilter::default());
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["page"], "home");
    assert_eq!(json["grid"]["kind"], "empty");
}
