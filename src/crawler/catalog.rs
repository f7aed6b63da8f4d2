//! Source enumeration: author index pages and book listings
//!
//! The library site publishes one author index page per letter, each author
//! page carrying a table of book links. Book pages map to downloadable HTML
//! archives by a fixed URL rewrite: `book` becomes `get/html` and the `.html`
//! suffix becomes `.zip`. Links on the site are scheme-relative (`//host/…`).

use scraper::{Html, Selector};
use std::collections::BTreeSet;

/// Formats the author index address for one index letter
pub fn author_index_url(base_url: &str, letter: char) -> String {
    format!("{}/authors-{}.html", base_url.trim_end_matches('/'), letter)
}

/// Parses an author index page into a list of author page addresses
///
/// Every `<a href>` on the index counts as an author address. The site uses
/// scheme-relative links, which gain an `https:` prefix; anything else is
/// passed through as-is and left to fail URL parsing at fetch time, where it
/// is treated as "no books found".
pub fn parse_author_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&anchor_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(absolutize)
        .collect()
}

/// Parses an author page into the set of book archive addresses
///
/// Only anchors inside table cells of the page's first `<table>` are
/// considered, and only those whose address contains `book`. Each match is
/// rewritten into an archive address: `book` → `get/html`, truncate at
/// `.html`, append `.zip`. A page without a table yields the empty set;
/// duplicates collapse.
pub fn parse_book_archive_links(html: &str) -> BTreeSet<String> {
    let document = Html::parse_document(html);

    let Ok(table_selector) = Selector::parse("table") else {
        return BTreeSet::new();
    };
    let Ok(anchor_selector) = Selector::parse("td a[href]") else {
        return BTreeSet::new();
    };

    let Some(table) = document.select(&table_selector).next() else {
        return BTreeSet::new();
    };

    table
        .select(&anchor_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| href.contains("book"))
        .map(book_link_to_archive)
        .collect()
}

/// Rewrites one book page address into its archive address
fn book_link_to_archive(href: &str) -> String {
    let rewritten = href.replace("book", "get/html");
    let stem = rewritten.split(".html").next().unwrap_or(&rewritten);
    absolutize(&format!("{}.zip", stem))
}

/// Prefixes scheme-relative addresses with `https:`
fn absolutize(href: &str) -> String {
    if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_index_url() {
        assert_eq!(
            author_index_url("https://royallib.com", 'a'),
            "https://royallib.com/authors-a.html"
        );
        assert_eq!(
            author_index_url("https://royallib.com/", 'z'),
            "https://royallib.com/authors-z.html"
        );
    }

    #[test]
    fn test_parse_author_links_collects_every_anchor() {
        let html = r#"
            <html><body>
                <a href="//royallib.com/author/ivanov">Ivanov</a>
                <a href="//royallib.com/author/petrov">Petrov</a>
                <a href="/comment/guestbook.html">Guestbook</a>
            </body></html>
        "#;
        let links = parse_author_links(html);
        assert_eq!(
            links,
            vec![
                "https://royallib.com/author/ivanov",
                "https://royallib.com/author/petrov",
                "/comment/guestbook.html",
            ]
        );
    }

    #[test]
    fn test_parse_author_links_skips_anchor_without_href() {
        let html = "<html><body><a name=\"top\">Top</a></body></html>";
        assert!(parse_author_links(html).is_empty());
    }

    #[test]
    fn test_book_links_rewritten_to_archives() {
        let html = r#"
            <html><body><table>
                <tr><td><a href="//royallib.com/book/ivanov/roman.html">Roman</a></td></tr>
                <tr><td><a href="//royallib.com/book/ivanov/povest.html">Povest</a></td></tr>
            </table></body></html>
        "#;
        let links = parse_book_archive_links(html);
        assert_eq!(links.len(), 2);
        assert!(links.contains("https://royallib.com/get/html/ivanov/roman.zip"));
        assert!(links.contains("https://royallib.com/get/html/ivanov/povest.zip"));
    }

    #[test]
    fn test_non_book_links_in_table_ignored() {
        let html = r#"
            <html><body><table>
                <tr><td><a href="//royallib.com/genre/fantasy">Fantasy</a></td></tr>
                <tr><td><a href="//royallib.com/book/ivanov/roman.html">Roman</a></td></tr>
            </table></body></html>
        "#;
        let links = parse_book_archive_links(html);
        assert_eq!(links.len(), 1);
        assert!(links.contains("https://royallib.com/get/html/ivanov/roman.zip"));
    }

    #[test]
    fn test_duplicate_book_links_collapse() {
        let html = r#"
            <html><body><table>
                <tr><td><a href="//royallib.com/book/ivanov/roman.html">Roman</a></td>
                    <td><a href="//royallib.com/book/ivanov/roman.html">Roman again</a></td></tr>
            </table></body></html>
        "#;
        assert_eq!(parse_book_archive_links(html).len(), 1);
    }

    #[test]
    fn test_page_without_table_yields_empty_set() {
        let html = r#"
            <html><body>
                <a href="//royallib.com/book/ivanov/roman.html">Not in a table</a>
            </body></html>
        "#;
        assert!(parse_book_archive_links(html).is_empty());
    }

    #[test]
    fn test_only_first_table_is_scanned() {
        let html = r#"
            <html><body>
                <table><tr><td><a href="//royallib.com/book/a/one.html">One</a></td></tr></table>
                <table><tr><td><a href="//royallib.com/book/b/two.html">Two</a></td></tr></table>
            </body></html>
        "#;
        let links = parse_book_archive_links(html);
        assert_eq!(links.len(), 1);
        assert!(links.contains("https://royallib.com/get/html/a/one.zip"));
    }
}
