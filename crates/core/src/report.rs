use std::collections::HashMap;

use crate::types::{CategoryCount, TopicSummary};

pub const UNKNOWN_CATEGORY: &str = "Unknown";

pub fn topic_comment(count: usize, name: &str) -> String {
    format!(
        "There are {} popular videos trending in the '{}' category during this period.",
        count, name
    )
}

/// Join ranked category counts with their resolved names, keeping rank order.
pub fn assemble_topics(
    top: Vec<CategoryCount>,
    names: &HashMap<String, String>,
) -> Vec<TopicSummary> {
    top.into_iter()
        .map(|category| {
            let name = names
                .get(&category.category_id)
                .map(String::as_str)
                .unwrap_or(UNKNOWN_CATEGORY)
                .to_string();
            TopicSummary {
                comment: topic_comment(category.count, &name),
                category_id: category.category_id,
                name,
                count: category.count,
                titles: category.titles,
            }
        })
        .collect()
}
