//! # Static catalogs and search
//!
//! Colleges, scholarships, FAQs and timeline events are compiled-in reference
//! data. The searchable ones implement [`Searchable`] and share one filter:
//!
//! | Catalog | Matched fields | Kind |
//! |---------|----------------|------|
//! | [`College`] | name, location, type | none |
//! | [`Scholarship`] | name, provider, description | scholarship type |
//! | [`Faq`] | question, answer | FAQ category id |
//!
//! [`filter`] keeps an item when the query occurs, ignoring case, in any of
//! its fields and its kind passes the [`KindFilter`]. Results keep catalog
//! order; there is no ranking.

mod college;
mod event;
mod faq;
mod scholarship;

pub use college::{College, COLLEGES};
pub use event::{Event, EventKind, Priority, TimelineSummary, EVENTS};
pub use faq::{Faq, FaqCategory, FAQS, FAQ_CATEGORIES};
pub use scholarship::{DeadlineUrgency, Scholarship, SCHOLARSHIPS, SCHOLARSHIP_TYPES};

/// Sentinel kind value meaning "no kind restriction".
pub const ALL: &str = "all";

/// A catalog record that can be found by free-text search.
pub trait Searchable {
    /// Text fields the query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// The value compared against a [`KindFilter::Only`]. `None` never matches a restriction.
    fn kind(&self) -> Option<&str> {
        None
    }
}

/// Exact-match restriction on an item's kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Only(String),
}

impl KindFilter {
    /// Parse a select-box value; [`ALL`] lifts the restriction.
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            KindFilter::All
        } else {
            KindFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            KindFilter::All => ALL,
            KindFilter::Only(kind) => kind,
        }
    }

    fn accepts(&self, kind: Option<&str>) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(wanted) => kind == Some(wanted.as_str()),
        }
    }
}

/// Whether `query` occurs in one of the item's fields, ignoring case.
pub fn matches_query<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Items matching `query` and `kind`, in catalog order.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str, kind: &KindFilter) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| kind.accepts(item.kind()) && matches_query(*item, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_everything() {
        assert_eq!(filter(COLLEGES, "", &KindFilter::All).len(), COLLEGES.len());
        assert_eq!(filter(SCHOLARSHIPS, "", &KindFilter::All).len(), SCHOLARSHIPS.len());
        assert_eq!(filter(FAQS, "", &KindFilter::All).len(), FAQS.len());
    }

    #[test]
    fn test_results_only_contain_matches() {
        for query in ["psg", "TAMIL", "engineering", "need", "theme", "zzz", "of"] {
            for college in filter(COLLEGES, query, &KindFilter::All) {
                assert!(matches_query(college, query));
            }
            let hits = filter(SCHOLARSHIPS, query, &KindFilter::All);
            let expected = SCHOLARSHIPS.iter().filter(|s| matches_query(*s, query)).count();
            assert_eq!(hits.len(), expected);
            for faq in filter(FAQS, query, &KindFilter::All) {
                assert!(matches_query(faq, query));
            }
        }
    }

    #[test]
    fn test_college_search_fields() {
        let by_name: Vec<_> = filter(COLLEGES, "psg", &KindFilter::All)
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(by_name, vec!["2"]);

        // Every college is in Coimbatore.
        assert_eq!(filter(COLLEGES, "coimbatore", &KindFilter::All).len(), 5);
        assert_eq!(filter(COLLEGES, "Private Engineering", &KindFilter::All).len(), 5);
        // Description is not searched.
        assert!(filter(COLLEGES, "holistic", &KindFilter::All).is_empty());
    }

    #[test]
    fn test_scholarship_type_filter() {
        let need = KindFilter::parse("Need-based");
        let ids: Vec<_> = filter(SCHOLARSHIPS, "", &need).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["3", "5"]);

        let ids: Vec<_> = filter(SCHOLARSHIPS, "government", &KindFilter::parse("Merit-based"))
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["1"]);

        assert!(filter(SCHOLARSHIPS, "", &KindFilter::parse("Sports")).is_empty());
    }

    #[test]
    fn test_faq_category_filter() {
        let colleges = KindFilter::parse("colleges");
        let ids: Vec<_> = filter(FAQS, "", &colleges).into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["2", "4"]);

        let ids: Vec<_> = filter(FAQS, "karpagam", &colleges).into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["4"]);

        assert!(filter(FAQS, "karpagam", &KindFilter::parse("technical")).is_empty());
    }

    #[test]
    fn test_all_sentinel() {
        assert_eq!(KindFilter::parse("all"), KindFilter::All);
        assert_eq!(KindFilter::All.as_str(), "all");
        assert_eq!(KindFilter::parse("Arts").as_str(), "Arts");
    }

    #[test]
    fn test_kind_restriction_excludes_kindless_items() {
        assert!(filter(COLLEGES, "", &KindFilter::parse("anything")).is_empty());
    }
}
