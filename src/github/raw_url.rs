//! Browsable ↔ raw content URL conversion.
//!
//! `https://github.com/o/r/blob/main/a.py` → `https://raw.githubusercontent.com/o/r/main/a.py`.
//! Raw URLs are first normalized back to the browsable shape, so both
//! shapes go through the same derivation.

use reqwest::Url;

use crate::error::{AppError, Result};

/// Maps a browsable (or raw) file URL on the configured GitHub hosts to its
/// raw content URL. Anything else, including look-alike hosts and
/// userinfo tricks such as `https://github.com@other.host/...`, is rejected.
pub fn derive_raw_url(url: &str, web_base: &str, raw_base: &str) -> Result<String> {
    let url = url.trim();
    let web_base = web_base.trim_end_matches('/');
    let raw_base = raw_base.trim_end_matches('/');

    let browsable = if path_under(url, raw_base).is_some() {
        to_browsable_url(url, web_base, raw_base)
    } else {
        url.to_string()
    };

    let rest = path_under(&browsable, web_base)
        .filter(|_| same_origin(&browsable, web_base))
        .ok_or_else(|| AppError::InvalidInput(format!("unrecognized file URL: {}", url)))?;

    let raw = format!("{}{}", raw_base, rest.replacen("/blob/", "/", 1));
    if !same_origin(&raw, raw_base) {
        return Err(AppError::InvalidInput(format!("unrecognized file URL: {}", url)));
    }
    Ok(raw)
}

/// Raw → browsable. Only `master` is mapped back to a `/blob/` segment;
/// other branches come back without one and derive to the same raw URL.
pub fn to_browsable_url(url: &str, web_base: &str, raw_base: &str) -> String {
    match path_under(url, raw_base.trim_end_matches('/')) {
        Some(rest) => format!(
            "{}{}",
            web_base.trim_end_matches('/'),
            rest.replacen("/master/", "/blob/master/", 1)
        ),
        None => url.to_string(),
    }
}

/// The path after `base`, only when `base` ends at a path boundary.
fn path_under<'a>(url: &'a str, base: &str) -> Option<&'a str> {
    url.strip_prefix(base).filter(|rest| rest.starts_with('/'))
}

fn same_origin(url: &str, base: &str) -> bool {
    match (Url::parse(url), Url::parse(base)) {
        (Ok(url), Ok(base)) => url.origin() == base.origin(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_GITHUB_WEB as WEB, DEFAULT_RAW_CONTENT as RAW};

    #[test]
    fn browsable_url_maps_to_raw_host_without_blob() {
        let raw = derive_raw_url("https://github.com/o/r/blob/main/src/a.py", WEB, RAW).unwrap();
        assert_eq!(raw, "https://raw.githubusercontent.com/o/r/main/src/a.py");
        assert!(raw.contains("raw.githubusercontent.com"));
        assert!(!raw.contains("/blob/"));
    }

    #[test]
    fn raw_input_round_trips_to_same_raw_url() {
        for (browsable, raw) in [
            (
                "https://github.com/o/r/blob/master/nb/x.ipynb",
                "https://raw.githubusercontent.com/o/r/master/nb/x.ipynb",
            ),
            (
                "https://github.com/o/r/blob/main/a.py",
                "https://raw.githubusercontent.com/o/r/main/a.py",
            ),
        ] {
            let from_browsable = derive_raw_url(browsable, WEB, RAW).unwrap();
            let from_raw = derive_raw_url(raw, WEB, RAW).unwrap();
            assert_eq!(from_browsable, from_raw);
            assert_eq!(from_raw, raw);
        }
    }

    #[test]
    fn raw_master_url_normalizes_to_blob_form() {
        assert_eq!(
            to_browsable_url("https://raw.githubusercontent.com/o/r/master/a.py", WEB, RAW),
            "https://github.com/o/r/blob/master/a.py"
        );
    }

    #[test]
    fn only_the_first_blob_segment_is_dropped() {
        let raw = derive_raw_url("https://github.com/o/r/blob/main/blob/a.py", WEB, RAW).unwrap();
        assert_eq!(raw, "https://raw.githubusercontent.com/o/r/main/blob/a.py");
    }

    #[test]
    fn foreign_hosts_are_rejected() {
        assert!(matches!(
            derive_raw_url("https://gitlab.com/o/r/-/blob/main/a.py", WEB, RAW),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn look_alike_hosts_are_rejected() {
        for url in [
            "https://github.com@evil.example/o/r/blob/main/a.py",
            "https://github.com.evil/o/r/blob/main/a.py",
            "https://raw.githubusercontent.com@evil.example/o/r/main/a.py",
            "https://raw.githubusercontent.com.evil/o/r/main/a.py",
            "https://github.com",
        ] {
            assert!(
                matches!(derive_raw_url(url, WEB, RAW), Err(AppError::InvalidInput(_))),
                "accepted {}",
                url
            );
        }
    }
}
