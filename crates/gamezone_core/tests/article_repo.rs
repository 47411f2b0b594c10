use chrono::{DateTime, Utc};
use gamezone_core::db::open_db_in_memory;
use gamezone_core::{
    Article, ArticleDraft, ArticleRepository, Profile, ProfileRepository, RepoError,
    SqliteArticleRepository, SqliteProfileRepository,
};
use uuid::Uuid;

fn draft(title: &str, category: &str, published: bool) -> ArticleDraft {
    ArticleDraft {
        title: title.to_string(),
        content: format!("{title} body"),
        excerpt: Some(format!("{title} excerpt")),
        image_url: None,
        category: category.to_string(),
        tags: vec!["News".to_string()],
        featured: false,
        published,
    }
}

fn at(millis: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap()
}

fn article_at(title: &str, category: &str, published: bool, millis: i64) -> Article {
    Article::with_id(
        Uuid::new_v4(),
        draft(title, category, published),
        Uuid::new_v4(),
        at(millis),
    )
}

#[test]
fn insert_then_read_back_keeps_every_field() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);

    let mut article = article_at("Elden Ring DLC", "Reviews", true, 1_700_000_000_123);
    article.image_url = Some("https://cdn.example.com/elden.png".to_string());
    article.tags = Some(vec!["RPG".to_string(), "FromSoftware".to_string()]);
    article.featured = true;
    repo.insert_article(&article).unwrap();

    let loaded = repo.get_published(article.id).unwrap().unwrap();
    assert_eq!(loaded, article);
}

#[test]
fn listings_are_newest_first_and_public_listing_hides_drafts() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);

    let oldest = article_at("Oldest", "PC", true, 1_000);
    let draft_row = article_at("Draft", "PC", false, 2_000);
    let newest = article_at("Newest", "Console", true, 3_000);
    for article in [&oldest, &draft_row, &newest] {
        repo.insert_article(article).unwrap();
    }

    let published: Vec<_> = repo
        .list_published()
        .unwrap()
        .into_iter()
        .map(|article| article.id)
        .collect();
    assert_eq!(published, vec![newest.id, oldest.id]);

    let all: Vec<_> = repo
        .list_all()
        .unwrap()
        .into_iter()
        .map(|article| article.id)
        .collect();
    assert_eq!(all, vec![newest.id, draft_row.id, oldest.id]);
}

#[test]
fn draft_is_invisible_to_detail_lookup() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);

    let hidden = article_at("Hidden", "PC", false, 1_000);
    repo.insert_article(&hidden).unwrap();

    assert_eq!(repo.get_published(hidden.id).unwrap(), None);
    assert_eq!(repo.get_published(Uuid::new_v4()).unwrap(), None);
}

#[test]
fn related_is_same_category_published_without_self_and_limited() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);

    let current = article_at("Current", "Esports", true, 10_000);
    repo.insert_article(&current).unwrap();
    for index in 0..4 {
        repo.insert_article(&article_at(&format!("Match {index}"), "Esports", true, index))
            .unwrap();
    }
    repo.insert_article(&article_at("Unpublished", "Esports", false, 20_000))
        .unwrap();
    repo.insert_article(&article_at("Other", "PC", true, 30_000))
        .unwrap();

    let related = repo.list_related("Esports", current.id, 3).unwrap();
    assert_eq!(related.len(), 3);
    assert!(related.iter().all(|article| article.category == "Esports"));
    assert!(related.iter().all(|article| article.published));
    assert!(related.iter().all(|article| article.id != current.id));

    assert!(repo.list_related("Esports", current.id, 0).unwrap().is_empty());
}

#[test]
fn update_replaces_editable_fields_only() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);

    let original = article_at("Before", "PC", false, 5_000);
    repo.insert_article(&original).unwrap();

    let mut next = draft("After", "Console", true);
    next.tags = Vec::new();
    repo.update_article(original.id, &next).unwrap();

    let loaded = repo.get_published(original.id).unwrap().unwrap();
    let mut expected = original.clone();
    expected.apply_draft(next);
    assert_eq!(loaded, expected);
    assert_eq!(loaded.created_at, original.created_at);
    assert_eq!(loaded.author_id, original.author_id);
}

#[test]
fn update_and_delete_of_missing_row_return_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);
    let missing = Uuid::new_v4();

    let err = repo
        .update_article(missing, &draft("Title", "PC", true))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));

    let err = repo.delete_article(missing).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));
}

#[test]
fn delete_removes_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);

    let article = article_at("Gone", "PC", true, 1_000);
    repo.insert_article(&article).unwrap();
    repo.delete_article(article.id).unwrap();

    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn blank_title_is_rejected_before_sql() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);

    let article = article_at("   ", "PC", true, 1_000);
    let err = repo.insert_article(&article).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn corrupt_tags_surface_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);

    let article = article_at("Broken", "PC", true, 1_000);
    repo.insert_article(&article).unwrap();
    conn.execute(
        "UPDATE articles SET tags = 'not json' WHERE id = ?1;",
        [article.id.to_string()],
    )
    .unwrap();

    let err = repo.list_published().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn profile_upsert_replaces_role() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProfileRepository::new(&conn);
    let user_id = Uuid::new_v4();

    assert_eq!(repo.get_profile(user_id).unwrap(), None);

    repo.upsert_profile(&Profile::new(user_id, "user")).unwrap();
    assert!(!repo.get_profile(user_id).unwrap().unwrap().is_admin());

    repo.upsert_profile(&Profile::admin(user_id)).unwrap();
    assert!(repo.get_profile(user_id).unwrap().unwrap().is_admin());
}
