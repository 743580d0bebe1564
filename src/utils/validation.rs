use once_cell::sync::Lazy;
use regex::Regex;

/// Letters, digits, spaces, brackets and hyphens: job titles, departments,
/// locations and the short free-text application fields.
pub static PLAIN_TEXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9() -]+$").expect("valid plain text regex"));

pub static PERSON_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z' -]+$").expect("valid name regex"));

pub static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9()+ -]+$").expect("valid phone regex"));

pub static HTTP_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://").expect("valid url scheme regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_accepts_brackets_and_hyphens() {
        assert!(PLAIN_TEXT_RE.is_match("Australia (Remote)"));
        assert!(PLAIN_TEXT_RE.is_match("Full-time 40 hours"));
        assert!(!PLAIN_TEXT_RE.is_match("DROP TABLE jobs;"));
        assert!(!PLAIN_TEXT_RE.is_match(""));
    }

    #[test]
    fn names_reject_digits() {
        assert!(PERSON_NAME_RE.is_match("Mary-Jane O'Neil"));
        assert!(!PERSON_NAME_RE.is_match("R2 D2"));
    }

    #[test]
    fn phone_numbers_allow_international_format() {
        assert!(PHONE_RE.is_match("+61 (0) 478-921-643"));
        assert!(!PHONE_RE.is_match("call me maybe"));
    }

    #[test]
    fn resume_links_must_be_http() {
        assert!(HTTP_URL_RE.is_match("https://example.com/cv.pdf"));
        assert!(!HTTP_URL_RE.is_match("ftp://example.com/cv.pdf"));
    }
}
