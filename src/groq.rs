//! GROQ query construction for the content store.
//!
//! Three fixed query shapes cover the whole storefront: a by-category
//! listing, a newest-N listing and a by-slug single-document lookup. The
//! builders are pure; the same inputs always yield the same query text.
//!
//! Caller-supplied route parameters are escaped as GROQ string literals
//! before interpolation so that a `category` or `slug` containing quotes
//! cannot alter query semantics.

use std::fmt::{Display, Formatter};

use crate::domain::types::{CategoryName, Slug};

/// Default size of the homepage "newest" rail.
pub const DEFAULT_NEWEST_LIMIT: usize = 4;

/// A finished GROQ query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field set projected for listing cards.
const LISTING_PROJECTION: &str = r#"{
  _id,
  "imageUrl": images[0].asset->url,
  price,
  name,
  "slug": slug.current,
  "categoryName": category->name
}"#;

/// Field set projected for the detail page.
const DETAIL_PROJECTION: &str = r#"{
  _id,
  images,
  price,
  name,
  description,
  "slug": slug.current,
  "categoryName": category->name,
  price_id
}"#;

/// Escape a value for use inside a double-quoted GROQ string literal.
///
/// Quotes and backslashes would alter query semantics; bare control
/// characters would make the store reject the query outright, turning a
/// nonsense parameter into an error page instead of an empty result.
fn escape_str(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Select all products whose resolved category name equals `category`
/// (exact, case-sensitive match), projected for listing cards.
pub fn category_query(category: &CategoryName) -> Query {
    Query(format!(
        r#"*[_type == "product" && category->name == "{}"] {LISTING_PROJECTION}"#,
        escape_str(category.as_str()),
    ))
}

/// Select the `limit` most recently created products, newest first,
/// projected for listing cards. Tie order among equal creation times is
/// not guaranteed by the store.
pub fn newest_query(limit: usize) -> Query {
    Query(format!(
        r#"*[_type == "product"][0...{limit}] | order(_createdAt desc) {LISTING_PROJECTION}"#,
    ))
}

/// Select the single product whose slug equals `slug`, projected for the
/// detail page. Yields at most one document.
pub fn by_slug_query(slug: &Slug) -> Query {
    Query(format!(
        r#"*[_type == "product" && slug.current == "{}"][0] {DETAIL_PROJECTION}"#,
        escape_str(slug.as_str()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_query_filters_on_product_type_and_category() {
        let query = category_query(&CategoryName::new("men").unwrap());
        assert!(query.as_str().starts_with(
            r#"*[_type == "product" && category->name == "men"]"#
        ));
        assert!(query.as_str().contains(r#""imageUrl": images[0].asset->url"#));
        assert!(query.as_str().contains(r#""slug": slug.current"#));
    }

    #[test]
    fn newest_query_slices_and_orders_descending() {
        let query = newest_query(DEFAULT_NEWEST_LIMIT);
        assert!(query.as_str().contains("[0...4]"));
        assert!(query.as_str().contains("order(_createdAt desc)"));
    }

    #[test]
    fn by_slug_query_selects_a_single_document() {
        let query = by_slug_query(&Slug::new("blue-shirt").unwrap());
        assert!(query.as_str().starts_with(
            r#"*[_type == "product" && slug.current == "blue-shirt"][0]"#
        ));
        assert!(query.as_str().contains("price_id"));
        assert!(query.as_str().contains("description"));
    }

    #[test]
    fn quotes_in_parameters_cannot_escape_the_string_literal() {
        let category = CategoryName::new(r#"men"] | *[_type == "user"#).unwrap();
        let query = category_query(&category);
        assert!(query
            .as_str()
            .contains(r#"category->name == "men\"] | *[_type == \"user""#));
    }

    #[test]
    fn control_characters_are_escaped_not_passed_through() {
        let category = CategoryName::new("men\nwomen").unwrap();
        let query = category_query(&category);
        assert!(query.as_str().contains(r#"category->name == "men\nwomen""#));

        let slug = Slug::new("odd\u{0007}slug").unwrap();
        let query = by_slug_query(&slug);
        assert!(query.as_str().contains(r#"slug.current == "oddslug""#));
    }

    #[test]
    fn backslashes_are_escaped() {
        let slug = Slug::new(r"odd\slug").unwrap();
        let query = by_slug_query(&slug);
        assert!(query.as_str().contains(r#"slug.current == "odd\\slug""#));
    }

    #[test]
    fn builders_are_deterministic() {
        let category = CategoryName::new("women").unwrap();
        assert_eq!(category_query(&category), category_query(&category));
        assert_eq!(newest_query(8), newest_query(8));
    }
}
