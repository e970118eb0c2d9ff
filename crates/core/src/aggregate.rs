use std::collections::HashMap;

use crate::types::{CategoryCount, VideoRecord};

/// Number of categories kept in a report.
pub const TOP_CATEGORY_LIMIT: usize = 10;

/// Count records per category in first-encounter order. Records missing a
/// category id or a title do not count.
pub fn count_by_category(records: &[VideoRecord]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let (Some(category_id), Some(title)) = (
            record.category_id.as_deref().filter(|id| !id.is_empty()),
            record.title.as_deref().filter(|title| !title.is_empty()),
        ) else {
            tracing::debug!(id = %record.id, "skipping video without category or title");
            continue;
        };

        let slot = *index.entry(category_id).or_insert_with(|| {
            counts.push(CategoryCount {
                category_id: category_id.to_string(),
                count: 0,
                titles: Vec::new(),
            });
            counts.len() - 1
        });

        let entry = &mut counts[slot];
        entry.count += 1;
        entry.titles.push(title.to_string());
    }

    counts
}

/// Largest `limit` categories by count. Equal counts keep their input order.
pub fn top_categories(mut counts: Vec<CategoryCount>, limit: usize) -> Vec<CategoryCount> {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

pub fn aggregate(records: &[VideoRecord]) -> Vec<CategoryCount> {
    top_categories(count_by_category(records), TOP_CATEGORY_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(category: Option<&str>, title: Option<&str>) -> VideoRecord {
        VideoRecord {
            id: format!("{:?}-{:?}", category, title),
            category_id: category.map(str::to_string),
            title: title.map(str::to_string),
            published_at: Some("2025-03-01T00:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_counts_and_titles_grow_together() {
        let records = vec![
            video(Some("10"), Some("A")),
            video(Some("20"), Some("C")),
            video(Some("10"), Some("B")),
        ];

        let counts = count_by_category(&records);
        assert_eq!(
            counts,
            vec![
                CategoryCount {
                    category_id: "10".to_string(),
                    count: 2,
                    titles: vec!["A".to_string(), "B".to_string()],
                },
                CategoryCount {
                    category_id: "20".to_string(),
                    count: 1,
                    titles: vec!["C".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_skips_records_missing_category_or_title() {
        let records = vec![
            video(None, Some("no category")),
            video(Some("10"), None),
            video(Some(""), Some("empty category")),
            video(Some("10"), Some("")),
            video(Some("10"), Some("kept")),
        ];

        let counts = count_by_category(&records);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[0].titles, vec!["kept".to_string()]);
    }

    #[test]
    fn test_ties_keep_first_encounter_order() {
        let records = vec![
            video(Some("1"), Some("a")),
            video(Some("2"), Some("b")),
            video(Some("3"), Some("c")),
            video(Some("3"), Some("d")),
            video(Some("2"), Some("e")),
        ];

        let ids: Vec<String> = aggregate(&records)
            .into_iter()
            .map(|c| c.category_id)
            .collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_truncates_to_ten_and_counts_sum() {
        // 15 categories, category i appears i+1 times
        let records: Vec<VideoRecord> = (0..15)
            .flat_map(|i| {
                (0..=i).map(move |j| video(Some(&i.to_string()), Some(&format!("v{}-{}", i, j))))
            })
            .collect();

        let all = count_by_category(&records);
        assert_eq!(all.iter().map(|c| c.count).sum::<usize>(), records.len());

        let top = aggregate(&records);
        assert_eq!(top.len(), TOP_CATEGORY_LIMIT);
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
        assert_eq!(top[0].category_id, "14");
        assert_eq!(top[9].category_id, "5");
    }

    #[test]
    fn test_empty_input_yields_no_categories() {
        assert!(aggregate(&[]).is_empty());
    }
}
