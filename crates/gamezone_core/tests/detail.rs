use gamezone_core::db::open_db_in_memory;
use gamezone_core::service::detail_service::RELATED_LIMIT;
use gamezone_core::view::DetailView;
use gamezone_core::{
    Article, ArticleDraft, ArticleRepository, DetailService, RecordingNotifier, Route,
    SqliteArticleRepository,
};
use uuid::Uuid;

fn insert(repo: &SqliteArticleRepository<'_>, title: &str, category: &str, published: bool) -> Article {
    let article = Article::from_draft(
        ArticleDraft {
            title: title.to_string(),
            content: format!("{title} body"),
            excerpt: None,
            image_url: None,
            category: category.to_string(),
            tags: Vec::new(),
            featured: false,
            published,
        },
        Uuid::new_v4(),
    );
    repo.insert_article(&article).unwrap();
    article
}

#[test]
fn unknown_id_renders_not_found_with_route_home() {
    let conn = open_db_in_memory().unwrap();
    let service = DetailService::new(SqliteArticleRepository::new(&conn));
    let notifier = RecordingNotifier::new();

    let view = service.load(&Uuid::new_v4().to_string(), &notifier);
    match &view {
        DetailView::NotFound {
            message,
            action_label,
            back,
        } => {
            assert_eq!(message, "Article not found");
            assert_eq!(action_label, "Back to Home");
            assert_eq!(back, &Route::Home);
        }
        other => panic!("unexpected view: {other:?}"),
    }
    assert_eq!(view.back().path(), "/");
    assert!(notifier.notices().is_empty());
}

#[test]
fn malformed_id_renders_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = DetailService::new(SqliteArticleRepository::new(&conn));

    let view = service.load("not-a-uuid", &RecordingNotifier::new());
    assert_eq!(view, DetailView::not_found());
}

#[test]
fn unpublished_article_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);
    let draft = insert(&repo, "Secret Draft", "PC", false);

    let view = DetailService::new(repo).load(&draft.id.to_string(), &RecordingNotifier::new());
    assert_eq!(view, DetailView::not_found());
}

#[test]
fn found_article_lists_at_most_three_related_from_same_category() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);
    let current = insert(&repo, "Valorant Finals", "Esports", true);
    for index in 0..5 {
        insert(&repo, &format!("Esports story {index}"), "Esports", true);
    }
    insert(&repo, "GPU review", "PC", true);

    let view = DetailService::new(repo).load(&current.id.to_string(), &RecordingNotifier::new());
    match view {
        DetailView::Found {
            article,
            related,
            back,
        } => {
            assert_eq!(article, current);
            assert_eq!(related.len(), RELATED_LIMIT as usize);
            assert!(related.iter().all(|card| card.category == "Esports"));
            assert!(related.iter().all(|card| card.id != current.id));
            assert_eq!(back, Route::Home);
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn article_alone_in_category_has_no_related() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);
    let current = insert(&repo, "Lonely", "Retro", true);
    insert(&repo, "Elsewhere", "PC", true);

    let view = DetailService::new(repo).load_by_id(current.id, &RecordingNotifier::new());
    match view {
        DetailView::Found { related, .. } => assert!(related.is_empty()),
        other => panic!("unexpected view: {other:?}"),
    }
}
