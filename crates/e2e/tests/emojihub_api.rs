//! Live EmojiHub API tests
//!
//! Require a server already listening on `http://localhost:4000/api`:
//!
//! ```text
//! git clone https://github.com/cheatsnake/emojihub.git && cd emojihub
//! go run cmd/main.go
//! cargo test --package emojihub-e2e --test emojihub_api -- --ignored --test-threads=1
//! ```
//!
//! Marked ignored because nothing starts the server for them.

use once_cell::sync::Lazy;
use test_case::test_case;

use emojihub_e2e::check;
use emojihub_e2e::client::{category_path, group_path};
use emojihub_e2e::emoji::{INVALID_CATEGORY, INVALID_GROUP};
use emojihub_e2e::{EmojiClient, HarnessConfig};

static CONFIG: Lazy<HarnessConfig> = Lazy::new(|| {
    HarnessConfig::default()
        .validated()
        .expect("default harness config is valid")
});

fn client() -> EmojiClient {
    EmojiClient::new(&CONFIG).expect("build http client")
}

#[tokio::test]
#[ignore]
async fn random_emoji_has_all_fields() {
    let emoji = client().random().await.expect("GET /random");

    assert!(!emoji.name.is_empty());
    assert!(!emoji.category.is_empty());
    assert!(!emoji.group.is_empty());
    assert!(!emoji.html_code.is_empty());
    assert!(!emoji.unicode.is_empty());
}

#[tokio::test]
#[ignore]
async fn all_emojis_is_non_empty() {
    let emojis = client().all().await.expect("GET /all");

    assert!(!emojis.is_empty());
}

#[test_case("smileys-and-people")]
#[test_case("animals-and-nature")]
#[test_case("food-and-drink")]
#[test_case("travel-and-places")]
#[test_case("activities")]
#[test_case("objects")]
#[test_case("symbols")]
#[test_case("flags")]
#[tokio::test]
#[ignore]
async fn emojis_by_category(category: &str) {
    let emojis = client()
        .all_by_category(category)
        .await
        .expect("GET /all/category");

    check::records_in_category(&emojis, category).unwrap();
}

#[test_case("travel-and-places")]
#[test_case("activities")]
#[test_case("animal-bug")]
#[tokio::test]
#[ignore]
async fn emojis_by_group(group: &str) {
    let emojis = client().all_by_group(group).await.expect("GET /all/group");

    check::records_in_group(&emojis, group).unwrap();
}

#[tokio::test]
#[ignore]
async fn invalid_category_is_not_found() {
    let response = client()
        .get(&category_path(INVALID_CATEGORY))
        .await
        .expect("GET /all/category/invalid-category");

    assert_eq!(response.status.as_u16(), 404);
}

#[tokio::test]
#[ignore]
async fn invalid_group_is_not_found() {
    let response = client()
        .get(&group_path(INVALID_GROUP))
        .await
        .expect("GET /all/group/invalid-group");

    assert_eq!(response.status.as_u16(), 404);
}

#[tokio::test]
#[ignore]
async fn category_listing_is_stable_across_reads() {
    let client = client();
    let first = client.all_by_category("activities").await.expect("first read");
    let second = client.all_by_category("activities").await.expect("second read");

    check::set_equal(&first, &second).unwrap();
}
