use serde::Deserialize;

/// Fixed page size for every paginated listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// The `page` query parameter. Carried as a raw string so that a non-numeric
/// value falls back to the first page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    page: Option<String>,
}

impl PageQuery {
    /// 1-based page number; absent or unparsable values mean page 1.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|page| page.parse().ok())
            .unwrap_or(1)
    }
}

/// Slice `[(page - 1) * 10, page * 10)` out of an ordered listing. A page
/// past the end is an empty slice, never an error.
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    let start = page.saturating_sub(1) * QUESTIONS_PER_PAGE;

    items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_first_page() {
        let items: Vec<i32> = (1..=25).collect();

        let page = paginate(&items, 1);

        assert_eq!(page, (1..=10).collect::<Vec<i32>>());
    }

    #[test]
    fn test_paginate_offset() {
        let items: Vec<i32> = (1..=25).collect();

        assert_eq!(paginate(&items, 2), (11..=20).collect::<Vec<i32>>());
        assert_eq!(paginate(&items, 3), (21..=25).collect::<Vec<i32>>());
    }

    #[test]
    fn test_paginate_past_the_end_is_empty() {
        let items: Vec<i32> = (1..=25).collect();

        assert!(paginate(&items, 4).is_empty());
        assert!(paginate::<i32>(&[], 1).is_empty());
    }

    #[test]
    fn test_page_zero_behaves_as_first_page() {
        let items: Vec<i32> = (1..=25).collect();

        assert_eq!(paginate(&items, 0), paginate(&items, 1));
    }

    #[test]
    fn test_page_query_is_lenient() {
        let absent = PageQuery { page: None };
        let numeric = PageQuery {
            page: Some("3".to_string()),
        };
        let garbage = PageQuery {
            page: Some("abc".to_string()),
        };
        let negative = PageQuery {
            page: Some("-2".to_string()),
        };

        assert_eq!(absent.page(), 1);
        assert_eq!(numeric.page(), 3);
        assert_eq!(garbage.page(), 1);
        assert_eq!(negative.page(), 1);
    }
}
