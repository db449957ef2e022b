//! Browser-impersonating header bundles.
//!
//! The upstream serves a bot-detection page unless these values match a real
//! Chromium request, so they are reproduced exactly.

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, HOST, REFERER,
};

use crate::error::ScraperError;

pub(crate) const BROWSER_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";

const SEC_CH_UA: &str = r#""Not)A;Brand";v="8", "Chromium";v="138""#;

/// Headers shared by both bundles.
fn common(referer: &str) -> Result<HeaderMap, ScraperError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("x-nextjs-data"),
        HeaderValue::from_static("1"),
    );
    headers.insert(
        HeaderName::from_static("sec-ch-ua-platform"),
        HeaderValue::from_static("\"Linux\""),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(
        HeaderName::from_static("sec-ch-ua"),
        HeaderValue::from_static(SEC_CH_UA),
    );
    headers.insert(
        HeaderName::from_static("sec-ch-ua-mobile"),
        HeaderValue::from_static("?0"),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("cors"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("empty"),
    );
    headers.insert(REFERER, header_value(referer)?);
    Ok(headers)
}

/// Headers for search data page requests.
pub(crate) fn page_headers(base_url: &str) -> Result<HeaderMap, ScraperError> {
    common(&format!("{base_url}/en/search"))
}

/// Headers for the build-id lookup request.
///
/// `host` is the `Host` value for the upstream, including a non-default port.
pub(crate) fn build_id_headers(base_url: &str, host: &str) -> Result<HeaderMap, ScraperError> {
    let mut headers = common(&format!("{base_url}/en/search?l=1&c=2&fu=0&rp=y&ob=mr"))?;
    headers.insert(HOST, header_value(host)?);
    headers.insert(
        ACCEPT_ENCODING,
        HeaderValue::from_static("gzip, deflate, br"),
    );
    headers.insert(
        HeaderName::from_static("priority"),
        HeaderValue::from_static("u=1, i"),
    );
    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue, ScraperError> {
    HeaderValue::from_str(value).map_err(|e| ScraperError::InvalidBaseUrl {
        url: value.to_owned(),
        reason: format!("not a valid header value: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_headers_request_json_variant() {
        let headers = page_headers("https://www.propertyfinder.ae").unwrap();
        assert_eq!(headers["x-nextjs-data"], "1");
        assert_eq!(headers["sec-ch-ua"], SEC_CH_UA);
        assert_eq!(headers[REFERER], "https://www.propertyfinder.ae/en/search");
        assert!(headers.get(HOST).is_none());
        assert!(headers.get("priority").is_none());
    }

    #[test]
    fn build_id_headers_add_host_and_priority() {
        let headers = build_id_headers("https://www.propertyfinder.ae", "www.propertyfinder.ae")
            .unwrap();
        assert_eq!(headers[HOST], "www.propertyfinder.ae");
        assert_eq!(headers["priority"], "u=1, i");
        assert_eq!(headers[ACCEPT_ENCODING], "gzip, deflate, br");
        assert_eq!(
            headers[REFERER],
            "https://www.propertyfinder.ae/en/search?l=1&c=2&fu=0&rp=y&ob=mr"
        );
    }
}
