//! Blog post data model.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors raised when a post fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid slug '{0}': use lowercase letters, digits, '-' or '_'")]
    InvalidSlug(String),
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Blog post as stored in the key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    /// Publication date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub content: String,
    /// Distinct visitor identifiers that have viewed the post.
    #[serde(default)]
    pub views: Vec<String>,
}

impl BlogPost {
    /// Creates a post dated today with a slug derived from the title.
    pub fn new(
        title: impl Into<String>,
        excerpt: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let title = title.into();
        Self {
            slug: slugify(&title),
            title,
            date: PostDate::today().to_string(),
            cover_image: None,
            excerpt: excerpt.into(),
            author: None,
            categories: Vec::new(),
            content: content.into(),
            views: Vec::new(),
        }
    }

    /// Checks required fields, slug characters and date format.
    ///
    /// # Errors
    ///
    /// Returns the first class of problem found: missing fields, then an
    /// invalid slug, then an invalid date.
    pub fn validate(&self) -> Result<(), PostError> {
        let missing: Vec<&'static str> = [
            ("title", &self.title),
            ("slug", &self.slug),
            ("excerpt", &self.excerpt),
            ("content", &self.content),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(PostError::MissingFields(missing));
        }

        if !is_valid_slug(&self.slug) {
            return Err(PostError::InvalidSlug(self.slug.clone()));
        }

        PostDate::parse(&self.date).ok_or_else(|| PostError::InvalidDate(self.date.clone()))?;

        Ok(())
    }

    /// Adds a category, ignoring blanks and duplicates.
    ///
    /// Returns whether the category list changed.
    pub fn add_category(&mut self, category: &str) -> bool {
        let category = category.trim();
        if category.is_empty() || self.categories.iter().any(|c| c == category) {
            return false;
        }
        self.categories.push(category.to_string());
        true
    }

    pub fn remove_category(&mut self, category: &str) {
        self.categories.retain(|c| c != category);
    }

    /// Number of distinct visitors.
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Records a visitor and returns whether it was new.
    pub fn record_view(&mut self, visitor: &str) -> bool {
        if self.views.iter().any(|v| v == visitor) {
            return false;
        }
        self.views.push(visitor.to_string());
        true
    }

    /// Parsed publication date, if well formed.
    pub fn parsed_date(&self) -> Option<PostDate> {
        PostDate::parse(&self.date)
    }

    /// Publication date as "March 5, 2025", or the raw string.
    pub fn long_date(&self) -> String {
        self.parsed_date()
            .map(|d| d.long())
            .unwrap_or_else(|| self.date.clone())
    }

    /// Publication date as "Mar 5, 2025", or the raw string.
    pub fn short_date(&self) -> String {
        self.parsed_date()
            .map(|d| d.short())
            .unwrap_or_else(|| self.date.clone())
    }
}

/// Derives a URL slug from a title.
///
/// Lowercases, drops characters other than word characters and whitespace,
/// then joins whitespace separated words with `-`.
///
/// # Examples
///
/// ```
/// use termfolio::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// ```
pub fn slugify(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Slugs name URL path components, so only a safe character set is allowed.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Calendar date of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PostDate(NaiveDate);

impl PostDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses `YYYY-MM-DD`, also accepting a trailing `T...` time part.
    pub fn parse(s: &str) -> Option<Self> {
        let date = s.split_once('T').map_or(s, |(date, _)| date);
        // Only zero-padded fields are accepted.
        if date.len() != 10 {
            return None;
        }
        NaiveDate::parse_from_str(date, DATE_FORMAT).ok().map(Self)
    }

    /// Current UTC date.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// "March 5, 2025"
    pub fn long(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }

    /// "Mar 5, 2025"
    pub fn short(&self) -> String {
        self.0.format("%b %-d, %Y").to_string()
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Orders posts newest first; equal dates keep their existing order.
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlogPost {
        BlogPost {
            slug: "hello-world".to_string(),
            title: "Hello World".to_string(),
            date: "2025-03-05".to_string(),
            cover_image: None,
            excerpt: "First post".to_string(),
            author: Some("Kalan".to_string()),
            categories: vec!["rust".to_string()],
            content: "Body".to_string(),
            views: Vec::new(),
        }
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        // Arrange & Act & Assert
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust   is  fun "), "rust-is-fun");
        assert_eq!(slugify("snake_case title"), "snake_case-title");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_validate_ok() {
        // Arrange
        let post = sample();

        // Act & Assert
        assert_eq!(post.validate(), Ok(()));
    }

    #[test]
    fn test_validate_missing_fields() {
        // Arrange
        let mut post = sample();
        post.title.clear();
        post.content = "   ".to_string();

        // Act
        let err = post.validate().unwrap_err();

        // Assert
        assert_eq!(err, PostError::MissingFields(vec!["title", "content"]));
        assert_eq!(err.to_string(), "Missing required fields: title, content");
    }

    #[test]
    fn test_validate_bad_slug() {
        // Arrange
        let mut post = sample();
        post.slug = "../etc".to_string();

        // Act & Assert
        assert!(matches!(post.validate(), Err(PostError::InvalidSlug(_))));
    }

    #[test]
    fn test_validate_bad_date() {
        // Arrange
        let mut post = sample();
        post.date = "2025-02-30".to_string();

        // Act & Assert
        assert!(matches!(post.validate(), Err(PostError::InvalidDate(_))));
    }

    #[test]
    fn test_categories_dedupe() {
        // Arrange
        let mut post = sample();

        // Act
        let added_dup = post.add_category(" rust ");
        let added_blank = post.add_category("  ");
        let added_new = post.add_category("web");
        post.remove_category("rust");

        // Assert
        assert!(!added_dup);
        assert!(!added_blank);
        assert!(added_new);
        assert_eq!(post.categories, vec!["web".to_string()]);
    }

    #[test]
    fn test_record_view_unique() {
        // Arrange
        let mut post = sample();

        // Act
        let first = post.record_view("1.2.3.4");
        let again = post.record_view("1.2.3.4");
        let other = post.record_view("5.6.7.8");

        // Assert
        assert!(first);
        assert!(!again);
        assert!(other);
        assert_eq!(post.view_count(), 2);
    }

    #[test]
    fn test_date_formats() {
        // Arrange
        let post = sample();

        // Act & Assert
        assert_eq!(post.long_date(), "March 5, 2025");
        assert_eq!(post.short_date(), "Mar 5, 2025");
    }

    #[test]
    fn test_unparseable_date_shown_verbatim() {
        // Arrange
        let mut post = sample();
        post.date = "someday".to_string();

        // Act & Assert
        assert_eq!(post.long_date(), "someday");
    }

    #[test]
    fn test_parse_date_with_time() {
        // Arrange & Act
        let date = PostDate::parse("2024-02-29T10:00:00.000Z");

        // Assert
        assert_eq!(date, PostDate::from_ymd(2024, 2, 29));
    }

    #[test]
    fn test_parse_rejects_impossible_and_unpadded_dates() {
        // Arrange & Act & Assert
        assert_eq!(PostDate::parse("2023-02-29"), None);
        assert_eq!(PostDate::parse("2025-13-01"), None);
        assert_eq!(PostDate::parse("2025-3-5"), None);
        assert_eq!(PostDate::parse("2025-03-05x"), None);
        assert!(PostDate::parse("2000-02-29").is_some());
    }

    #[test]
    fn test_post_date_display_and_formats() {
        // Arrange
        let date = PostDate::from_ymd(2024, 12, 1).expect("Valid date");

        // Act & Assert
        assert_eq!(date.to_string(), "2024-12-01");
        assert_eq!(date.long(), "December 1, 2024");
        assert_eq!(date.short(), "Dec 1, 2024");
        assert_eq!(PostDate::parse(&date.to_string()), Some(date));
    }

    #[test]
    fn test_serde_camel_case() {
        // Arrange
        let mut post = sample();
        post.cover_image = Some("/media/x.png".to_string());

        // Act
        let json = serde_json::to_string(&post).expect("Should serialize");
        let back: BlogPost = serde_json::from_str(&json).expect("Should deserialize");

        // Assert
        assert!(json.contains("\"coverImage\""));
        assert_eq!(back, post);
    }

    #[test]
    fn test_deserialize_without_views() {
        // Arrange
        let json = r#"{"slug":"a","title":"A","date":"2025-01-01","excerpt":"e","content":"c"}"#;

        // Act
        let post: BlogPost = serde_json::from_str(json).expect("Should deserialize");

        // Assert
        assert!(post.views.is_empty());
        assert!(post.categories.is_empty());
        assert_eq!(post.author, None);
    }

    #[test]
    fn test_sort_newest_first() {
        // Arrange
        let mut a = sample();
        a.slug = "a".to_string();
        a.date = "2024-01-01".to_string();
        let mut b = sample();
        b.slug = "b".to_string();
        b.date = "2025-01-01".to_string();
        let mut posts = vec![a, b];

        // Act
        sort_newest_first(&mut posts);

        // Assert
        assert_eq!(posts[0].slug, "b");
    }
}
