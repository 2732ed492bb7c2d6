use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Upper bound on images returned for one search
pub const MAX_IMAGES: usize = 50;

/// Matches containing any of these anywhere are dropped (substring test, not a host test)
pub const EXCLUDED_HOSTS: [&str; 2] = ["gstatic.com", "google.com"];

const IMAGE_URL_PATTERN: &str = r#"https?://[^\s<>"]+?\.(?:jpg|jpeg|gif|png)"#;

static IMAGE_URL_RE: OnceLock<Regex> = OnceLock::new();

fn image_url_re() -> &'static Regex {
    IMAGE_URL_RE.get_or_init(|| Regex::new(IMAGE_URL_PATTERN).expect("image url pattern is valid"))
}

/// Scan a raw results page for image URLs.
///
/// Returns at most [`MAX_IMAGES`] unique URLs in no particular order.
pub fn extract(body: &str) -> Vec<String> {
    let unique: HashSet<&str> = image_url_re()
        .find_iter(body)
        .map(|m| m.as_str())
        .filter(|url| !EXCLUDED_HOSTS.iter().any(|host| url.contains(host)))
        .collect();

    unique
        .into_iter()
        .take(MAX_IMAGES)
        .map(str::to_string)
        .collect()
}

/// Last path segment of the full URL string, query string included.
pub fn get_filename_from_url(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_plain_bodies_yield_nothing() {
        assert!(extract("").is_empty());
        assert!(extract("no urls here").is_empty());
    }

    #[test]
    fn duplicates_and_excluded_hosts_are_dropped() {
        let body = r#"<img src="http://a.com/x.png"> ["http://a.com/x.png", "https://gstatic.com/y.jpg"]"#;
        assert_eq!(extract(body), vec!["http://a.com/x.png".to_string()]);
    }

    #[test]
    fn google_anywhere_in_the_url_excludes_it() {
        let body = "https://cdn.example.org/img?ref=google.com/a.jpg https://cdn.example.org/b.gif";
        assert_eq!(extract(body), vec!["https://cdn.example.org/b.gif".to_string()]);
    }

    #[test]
    fn result_is_capped_at_fifty_unique_urls() {
        let body: String = (0..60)
            .map(|i| format!("\"https://img{}.example.com/photo.jpeg\" ", i))
            .collect();

        let urls = extract(&body);
        assert_eq!(urls.len(), MAX_IMAGES);
        let unique: HashSet<&String> = urls.iter().collect();
        assert_eq!(unique.len(), MAX_IMAGES);
        assert!(urls.iter().all(|u| body.contains(u.as_str())));
    }

    #[test]
    fn match_stops_at_first_extension_and_keeps_case() {
        let body = "see https://a.com/x.png.jpg and http://b.com/UP.PNG and http://c.com/z.gif";
        let mut urls = extract(body);
        urls.sort();
        assert_eq!(urls, vec!["http://c.com/z.gif", "https://a.com/x.png"]);
    }

    #[test]
    fn match_does_not_cross_quotes_or_whitespace() {
        let body = r#"http://a.com/"b.png http://c.com/d e.jpg"#;
        assert!(extract(body).is_empty());
    }

    #[test]
    fn filename_is_last_path_segment() {
        assert_eq!(get_filename_from_url("http://a.com/dir/x.png"), "x.png");
        assert_eq!(get_filename_from_url("http://a.com/x.png?w=1"), "x.png?w=1");
        assert_eq!(get_filename_from_url("http://a.com/dir/"), "dir");
        assert_eq!(get_filename_from_url("plain.gif"), "plain.gif");
    }
}
