use super::Category;

/// Page number used when the caller does not supply one
pub const DEFAULT_PAGE_NUMBER: i32 = 1;

/// Page size used when the caller does not supply one
pub const DEFAULT_PAGE_SIZE: i32 = 100;

/// Raw listing parameters as received from a caller
///
/// Every field is optional and no combination is rejected. Call
/// [`CategoryListParams::normalize`] to resolve them into a [`CategoryQuery`].
///
/// # Example
/// ```
/// use blog_categories_api::domain::category::CategoryListParams;
///
/// let params = CategoryListParams::default()
///     .search("rust")
///     .sort("name", "asc")
///     .paginate(2, 10);
///
/// let query = params.normalize();
/// assert_eq!(query.page.skip, 10);
/// assert_eq!(query.page.take, 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryListParams {
    /// Free-text filter applied to `name`
    pub query: Option<String>,
    /// `"Name"` or `"URL"`, matched case-insensitively
    pub sort_by: Option<String>,
    /// `"asc"` for ascending, anything else for descending
    pub sort_direction: Option<String>,
    /// 1-based page number
    pub page_number: Option<i32>,
    /// Maximum number of records per page
    pub page_size: Option<i32>,
}

impl CategoryListParams {
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn sort(mut self, sort_by: impl Into<String>, direction: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_direction = Some(direction.into());
        self
    }

    pub fn paginate(mut self, page_number: i32, page_size: i32) -> Self {
        self.page_number = Some(page_number);
        self.page_size = Some(page_size);
        self
    }

    /// Resolves the raw parameters into the three pipeline stages
    pub fn normalize(&self) -> CategoryQuery {
        let direction = SortDirection::parse(self.sort_direction.as_deref());

        CategoryQuery {
            filter: self.query.as_deref().and_then(NameFilter::parse),
            sort: self
                .sort_by
                .as_deref()
                .and_then(|sort_by| CategorySort::resolve(sort_by, direction)),
            page: PageWindow::new(self.page_number, self.page_size),
        }
    }
}

/// Case-insensitive substring match on `name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    needle: String,
}

impl NameFilter {
    /// Returns `None` for blank input, which disables filtering
    ///
    /// The text is not trimmed: `" an"` only matches names containing a
    /// space followed by "an".
    pub fn parse(query: &str) -> Option<Self> {
        if query.trim().is_empty() {
            return None;
        }

        Some(Self {
            needle: query.to_lowercase(),
        })
    }

    /// Lower-cased search text
    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }

    pub fn apply(&self, mut categories: Vec<Category>) -> Vec<Category> {
        categories.retain(|category| self.matches(&category.name));
        categories
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    UrlHandle,
}

impl SortKey {
    /// The field this key orders by
    pub fn of(self, category: &Category) -> &str {
        match self {
            SortKey::Name => &category.name,
            SortKey::UrlHandle => &category.url_handle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Only `"asc"` (any case) is ascending; absent or unknown values are descending
    pub fn parse(direction: Option<&str>) -> Self {
        match direction {
            Some(value) if value.eq_ignore_ascii_case("asc") => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }
}

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl CategorySort {
    /// Maps a `sortBy` value onto a concrete ordering
    ///
    /// Unknown keys return `None` and leave natural order untouched.
    ///
    /// `"URL"` sorts by url handle only when ascending. Any other direction
    /// sorts by name descending, not by url handle.
    pub fn resolve(sort_by: &str, direction: SortDirection) -> Option<Self> {
        if sort_by.eq_ignore_ascii_case("name") {
            return Some(Self {
                key: SortKey::Name,
                direction,
            });
        }

        if sort_by.eq_ignore_ascii_case("url") {
            let key = match direction {
                SortDirection::Ascending => SortKey::UrlHandle,
                SortDirection::Descending => SortKey::Name,
            };
            return Some(Self { key, direction });
        }

        None
    }

    /// Stable ordinal sort; equal keys keep their incoming order
    pub fn apply(&self, mut categories: Vec<Category>) -> Vec<Category> {
        let key = self.key;

        match self.direction {
            SortDirection::Ascending => categories.sort_by(|a, b| key.of(a).cmp(key.of(b))),
            SortDirection::Descending => categories.sort_by(|a, b| key.of(b).cmp(key.of(a))),
        }

        categories
    }
}

/// Offset/limit window over the filtered and sorted sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: i64,
    pub take: i64,
}

impl PageWindow {
    /// `skip = (page_number - 1) * page_size`, clamped at zero
    ///
    /// A non-positive page size produces an empty window.
    pub fn new(page_number: Option<i32>, page_size: Option<i32>) -> Self {
        let page_number = i64::from(page_number.unwrap_or(DEFAULT_PAGE_NUMBER));
        let page_size = i64::from(page_size.unwrap_or(DEFAULT_PAGE_SIZE));

        let skip = page_number.saturating_sub(1).saturating_mul(page_size).max(0);

        Self {
            skip,
            take: page_size.max(0),
        }
    }

    pub fn apply(&self, categories: Vec<Category>) -> Vec<Category> {
        let skip = usize::try_from(self.skip).unwrap_or(usize::MAX);
        let take = usize::try_from(self.take).unwrap_or(usize::MAX);

        categories.into_iter().skip(skip).take(take).collect()
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Normalised listing query: filter, then sort, then page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryQuery {
    pub filter: Option<NameFilter>,
    pub sort: Option<CategorySort>,
    pub page: PageWindow,
}

impl CategoryQuery {
    /// Runs the whole pipeline over an in-memory sequence in natural order
    pub fn apply(&self, categories: Vec<Category>) -> Vec<Category> {
        let categories = match &self.filter {
            Some(filter) => filter.apply(categories),
            None => categories,
        };

        let categories = match &self.sort {
            Some(sort) => sort.apply(categories),
            None => categories,
        };

        self.page.apply(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::CategoryDraft;
    use uuid::Uuid;

    fn category(name: &str, url_handle: &str) -> Category {
        Category::from_draft(Uuid::new_v4(), CategoryDraft::new(name, url_handle))
    }

    fn names(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(|c| c.name.as_str()).collect()
    }

    fn sample() -> Vec<Category> {
        vec![
            category("Cloud", "cloud"),
            category("Ant", "ant"),
            category("Bat", "bat"),
        ]
    }

    #[test]
    fn blank_query_disables_filter() {
        assert!(NameFilter::parse("").is_none());
        assert!(NameFilter::parse("   \t").is_none());
    }

    #[test]
    fn filter_is_case_insensitive() {
        let filter = NameFilter::parse("aN").unwrap();

        assert!(filter.matches("Ant"));
        assert!(filter.matches("PLANT"));
        assert!(!filter.matches("Bat"));
    }

    #[test]
    fn filter_folds_non_ascii_letters() {
        for query in ["É", "é", "ÉCL"] {
            let filter = NameFilter::parse(query).unwrap();
            assert!(filter.matches("Éclair"), "query {query:?}");
        }

        assert!(!NameFilter::parse("e").unwrap().matches("Éclair"));
    }

    #[test]
    fn filter_does_not_trim_query() {
        let filter = NameFilter::parse(" an").unwrap();

        assert!(!filter.matches("Ant"));
        assert!(filter.matches("Big Ant"));
    }

    #[test]
    fn filter_keeps_natural_order() {
        let result = NameFilter::parse("t").unwrap().apply(sample());

        assert_eq!(names(&result), vec!["Ant", "Bat"]);
    }

    #[test]
    fn direction_only_asc_is_ascending() {
        assert_eq!(SortDirection::parse(Some("asc")), SortDirection::Ascending);
        assert_eq!(SortDirection::parse(Some("ASC")), SortDirection::Ascending);
        assert_eq!(SortDirection::parse(Some("desc")), SortDirection::Descending);
        assert_eq!(SortDirection::parse(Some("up")), SortDirection::Descending);
        assert_eq!(SortDirection::parse(None), SortDirection::Descending);
    }

    #[test]
    fn sort_keys_match_case_insensitively() {
        let sort = CategorySort::resolve("NAME", SortDirection::Ascending).unwrap();
        assert_eq!(sort.key, SortKey::Name);

        let sort = CategorySort::resolve("url", SortDirection::Ascending).unwrap();
        assert_eq!(sort.key, SortKey::UrlHandle);
    }

    #[test]
    fn unknown_sort_key_is_ignored() {
        assert!(CategorySort::resolve("created", SortDirection::Ascending).is_none());
        assert!(CategorySort::resolve("", SortDirection::Descending).is_none());
    }

    #[test]
    fn url_descending_sorts_by_name() {
        let sort = CategorySort::resolve("URL", SortDirection::Descending).unwrap();

        assert_eq!(sort.key, SortKey::Name);
        assert_eq!(sort.direction, SortDirection::Descending);
    }

    #[test]
    fn url_descending_orders_by_name_not_handle() {
        let items = vec![
            category("Alpha", "zzz"),
            category("Zulu", "aaa"),
            category("Mike", "mmm"),
        ];

        let sort = CategorySort::resolve("URL", SortDirection::Descending).unwrap();
        let result = sort.apply(items);

        assert_eq!(names(&result), vec!["Zulu", "Mike", "Alpha"]);
    }

    #[test]
    fn url_ascending_orders_by_handle() {
        let items = vec![
            category("Alpha", "zzz"),
            category("Zulu", "aaa"),
            category("Mike", "mmm"),
        ];

        let sort = CategorySort::resolve("URL", SortDirection::Ascending).unwrap();
        let result = sort.apply(items);

        assert_eq!(names(&result), vec!["Zulu", "Mike", "Alpha"]);
    }

    #[test]
    fn sort_is_ordinal() {
        let items = vec![category("apple", "a"), category("Banana", "b")];

        let sort = CategorySort::resolve("Name", SortDirection::Ascending).unwrap();
        let result = sort.apply(items);

        // Upper-case letters sort before lower-case ones
        assert_eq!(names(&result), vec!["Banana", "apple"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let first = category("Same", "first");
        let second = category("Same", "second");

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sort = CategorySort {
                key: SortKey::Name,
                direction,
            };
            let result = sort.apply(vec![first.clone(), second.clone()]);

            assert_eq!(result[0].url_handle, "first");
            assert_eq!(result[1].url_handle, "second");
        }
    }

    #[test]
    fn default_window_is_first_hundred() {
        let page = PageWindow::default();

        assert_eq!(page.skip, 0);
        assert_eq!(page.take, 100);
    }

    #[test]
    fn window_skips_previous_pages() {
        assert_eq!(PageWindow::new(Some(1), Some(5)).skip, 0);
        assert_eq!(PageWindow::new(Some(2), Some(5)).skip, 5);
        assert_eq!(PageWindow::new(Some(3), Some(5)).skip, 10);
    }

    #[test]
    fn missing_page_size_uses_default_for_skip() {
        let page = PageWindow::new(Some(3), None);

        assert_eq!(page.skip, 200);
        assert_eq!(page.take, 100);
    }

    #[test]
    fn non_positive_page_number_behaves_as_first_page() {
        assert_eq!(PageWindow::new(Some(0), Some(10)), PageWindow::new(Some(1), Some(10)));
        assert_eq!(PageWindow::new(Some(-4), Some(10)), PageWindow::new(Some(1), Some(10)));
    }

    #[test]
    fn non_positive_page_size_yields_empty_page() {
        assert_eq!(PageWindow::new(Some(1), Some(0)).take, 0);
        assert_eq!(PageWindow::new(Some(2), Some(-3)), PageWindow { skip: 0, take: 0 });
        assert!(PageWindow::new(Some(1), Some(0)).apply(sample()).is_empty());
    }

    #[test]
    fn window_does_not_overflow() {
        let page = PageWindow::new(Some(i32::MAX), Some(i32::MAX));

        assert!(page.skip > 0);
        assert!(page.apply(sample()).is_empty());
    }

    #[test]
    fn pipeline_sorts_then_pages() {
        let query = CategoryListParams::default()
            .sort("Name", "asc")
            .paginate(1, 2)
            .normalize();

        let result = query.apply(sample());

        assert_eq!(names(&result), vec!["Ant", "Bat"]);
    }

    #[test]
    fn pipeline_pages_after_filtering() {
        let items = vec![
            category("Xa", "1"),
            category("Yb", "2"),
            category("Za", "3"),
            category("Wa", "4"),
        ];

        let query = CategoryListParams::default()
            .search("A")
            .sort("name", "asc")
            .paginate(2, 2)
            .normalize();

        // Filtered and sorted: Wa, Xa, Za -> page 2 holds only Za
        assert_eq!(names(&query.apply(items)), vec!["Za"]);
    }

    #[test]
    fn pipeline_filters_by_substring() {
        let query = CategoryListParams::default()
            .search("an")
            .sort("Name", "asc")
            .normalize();

        assert_eq!(names(&query.apply(sample())), vec!["Ant"]);
    }

    #[test]
    fn empty_params_keep_natural_order() {
        let query = CategoryListParams::default().normalize();

        assert_eq!(query.filter, None);
        assert_eq!(query.sort, None);
        assert_eq!(names(&query.apply(sample())), vec!["Cloud", "Ant", "Bat"]);
    }
}
