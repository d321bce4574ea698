// Integration tests for the JSON posts file store

use crate::common::{post, PostsFile};
use serde_json::json;
use sitesearch::core::content::{
    ContentStore, JsonContentStore, PostField, PostOrder, PostQuery, PostRelation,
};

fn all_fields(needle: &str) -> PostQuery {
    PostQuery::matching(
        needle,
        &[PostField::Title, PostField::Content, PostField::Excerpt],
    )
}

#[test]
fn test_file_changes_are_picked_up() {
    let posts = PostsFile::with_posts(&[post(1, "First", "", 1)]);
    let store = JsonContentStore::new(posts.path());
    assert_eq!(store.find_published(&all_fields("")).unwrap().len(), 1);

    let updated = serde_json::to_string(&vec![post(1, "First", "", 1), post(2, "Second", "", 2)])
        .unwrap();
    std::fs::write(posts.path(), updated).unwrap();
    assert_eq!(store.find_published(&all_fields("")).unwrap().len(), 2);
}

#[test]
fn test_created_at_ordering() {
    let mut older = post(1, "Older", "", 1);
    older["created_at"] = json!("2020-01-01T00:00:00Z");
    let mut newer = post(2, "Newer", "", 5);
    newer["created_at"] = json!("2021-01-01T00:00:00Z");
    let posts = PostsFile::with_posts(&[older, newer]);

    let store = JsonContentStore::new(posts.path());
    let by_published = store.find_published(&all_fields("")).unwrap();
    assert_eq!(by_published[0].title, "Older");

    let by_created = store
        .find_published(&all_fields("").order_by(PostOrder::CreatedAtDesc))
        .unwrap();
    assert_eq!(by_created[0].title, "Newer");
}

#[test]
fn test_featured_images_relation() {
    let mut p = post(1, "Pictures", "", 1);
    p["featured_images"] = json!([{ "url": "/a.png" }]);
    let posts = PostsFile::with_posts(&[p]);
    let store = JsonContentStore::new(posts.path());

    let plain = store.find_published(&all_fields("pic")).unwrap();
    assert!(plain[0].featured_images.is_empty());

    let loaded = store
        .find_published(&all_fields("pic").with(PostRelation::FeaturedImages))
        .unwrap();
    assert_eq!(loaded[0].featured_images[0].url, "/a.png");
}

#[test]
fn test_invalid_json_is_storage_error() {
    let posts = PostsFile::with_posts(&[]);
    std::fs::write(posts.path(), "[{\"id\": \"not a number\"}]").unwrap();

    let err = JsonContentStore::new(posts.path())
        .find_published(&all_fields("x"))
        .unwrap_err();
    assert!(err.is_storage());
    assert!(err.message().contains("parse"));
}
