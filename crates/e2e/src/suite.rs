//! The built-in EmojiHub suite

use crate::client::{category_path, group_path, random_category_path, random_group_path, ALL, RANDOM};
use crate::emoji::{Category, INVALID_CATEGORY, INVALID_GROUP, KNOWN_GROUPS};
use crate::spec::{BodyCheck, TestCase};

/// Category re-read by the idempotence case
pub const IDEMPOTENT_CATEGORY: Category = Category::Activities;

/// All built-in cases in execution order.
///
/// Cases tagged `core` cover the documented endpoints; `extended` cases cover
/// the random-by-category/group endpoints and repeated reads.
pub fn builtin() -> Vec<TestCase> {
    let mut cases = vec![
        TestCase::get("random", RANDOM)
            .describe("A random emoji has all fields set")
            .tagged(&["core", "random"])
            .expect_body(BodyCheck::Record),
        TestCase::get("all", ALL)
            .describe("The full list is non-empty")
            .tagged(&["core", "all"])
            .expect_body(BodyCheck::Records),
    ];

    for category in Category::ALL {
        let slug = category.slug();
        cases.push(
            TestCase::get(format!("category/{}", slug), category_path(slug))
                .describe(format!("Every emoji is in category {}", slug))
                .tagged(&["core", "category"])
                .expect_body(BodyCheck::RecordsInCategory {
                    category: slug.to_string(),
                }),
        );
    }

    for group in KNOWN_GROUPS {
        cases.push(
            TestCase::get(format!("group/{}", group), group_path(group))
                .describe(format!("Every emoji is in group {}", group))
                .tagged(&["core", "group"])
                .expect_body(BodyCheck::RecordsInGroup {
                    group: group.to_string(),
                }),
        );
    }

    cases.push(
        TestCase::get("invalid-category", category_path(INVALID_CATEGORY))
            .describe("Unknown category is 404")
            .tagged(&["core", "category", "negative"])
            .expect_status(404),
    );
    cases.push(
        TestCase::get("invalid-group", group_path(INVALID_GROUP))
            .describe("Unknown group is 404")
            .tagged(&["core", "group", "negative"])
            .expect_status(404),
    );

    for category in Category::ALL {
        let slug = category.slug();
        cases.push(
            TestCase::get(format!("random/category/{}", slug), random_category_path(slug))
                .describe(format!("A random emoji from category {}", slug))
                .tagged(&["extended", "random", "category"])
                .expect_body(BodyCheck::RecordInCategory {
                    category: slug.to_string(),
                }),
        );
    }

    for group in KNOWN_GROUPS {
        cases.push(
            TestCase::get(format!("random/group/{}", group), random_group_path(group))
                .describe(format!("A random emoji from group {}", group))
                .tagged(&["extended", "random", "group"])
                .expect_body(BodyCheck::RecordInGroup {
                    group: group.to_string(),
                }),
        );
    }

    let slug = IDEMPOTENT_CATEGORY.slug();
    cases.push(
        TestCase::get(format!("idempotent/category/{}", slug), category_path(slug))
            .describe("Repeated reads return the same emojis")
            .tagged(&["extended", "idempotence", "category"])
            .expect_body(BodyCheck::Idempotent),
    );

    cases
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_core_cases() {
        let cases = builtin();
        let core = TestCase::filter_by_tag(&cases, "core");
        // random + all + 8 categories + 3 groups + 2 negative
        assert_eq!(core.len(), 15);

        let negative = TestCase::filter_by_tag(&cases, "negative");
        assert_eq!(negative.len(), 2);
        assert!(negative.iter().all(|c| c.expect.status == 404));
    }

    #[test]
    fn test_names_unique() {
        let cases = builtin();
        let names: HashSet<_> = cases.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), cases.len());
    }

    #[test]
    fn test_category_case_paths() {
        let cases = builtin();
        let flags = cases.iter().find(|c| c.name == "category/flags").unwrap();
        assert_eq!(flags.request.path, "/all/category/flags");
        assert_eq!(
            flags.expect.body,
            BodyCheck::RecordsInCategory {
                category: "flags".to_string()
            }
        );
    }
}
