//! Assertions over decoded records

use std::collections::HashSet;

use crate::emoji::EmojiRecord;
use crate::error::{E2eError, E2eResult};

/// Every field of the record must be non-empty
pub fn record_complete(record: &EmojiRecord) -> E2eResult<()> {
    let empty = record.empty_fields();
    if empty.is_empty() {
        Ok(())
    } else {
        Err(E2eError::AssertionFailed(format!(
            "emoji '{}' has empty field(s): {}",
            record.name,
            empty.join(", ")
        )))
    }
}

/// The list must be non-empty and every record complete
pub fn records_complete(records: &[EmojiRecord]) -> E2eResult<()> {
    if records.is_empty() {
        return Err(E2eError::AssertionFailed(
            "expected a non-empty list of emojis".to_string(),
        ));
    }
    records.iter().try_for_each(record_complete)
}

pub fn record_in_category(record: &EmojiRecord, category: &str) -> E2eResult<()> {
    record_complete(record)?;
    let actual = record.category_slug();
    if actual == category {
        Ok(())
    } else {
        Err(E2eError::AssertionFailed(format!(
            "emoji '{}' has category '{}' ({}), expected '{}'",
            record.name, record.category, actual, category
        )))
    }
}

pub fn record_in_group(record: &EmojiRecord, group: &str) -> E2eResult<()> {
    record_complete(record)?;
    let actual = record.group_slug();
    if actual == group {
        Ok(())
    } else {
        Err(E2eError::AssertionFailed(format!(
            "emoji '{}' has group '{}' ({}), expected '{}'",
            record.name, record.group, actual, group
        )))
    }
}

pub fn records_in_category(records: &[EmojiRecord], category: &str) -> E2eResult<()> {
    records_complete(records)?;
    records.iter().try_for_each(|r| record_in_category(r, category))
}

pub fn records_in_group(records: &[EmojiRecord], group: &str) -> E2eResult<()> {
    records_complete(records)?;
    records.iter().try_for_each(|r| record_in_group(r, group))
}

/// Two reads of the same resource must hold the same records, order aside
pub fn set_equal(first: &[EmojiRecord], second: &[EmojiRecord]) -> E2eResult<()> {
    let a: HashSet<&EmojiRecord> = first.iter().collect();
    let b: HashSet<&EmojiRecord> = second.iter().collect();
    if a == b {
        return Ok(());
    }

    let missing = a.difference(&b).count();
    let added = b.difference(&a).count();
    Err(E2eError::AssertionFailed(format!(
        "repeated read differs: {} emoji(s) missing, {} new ({} vs {} records)",
        missing,
        added,
        first.len(),
        second.len()
    )))
}
