use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Every request goes to the local machine.
pub const LOCAL_HOST: &str = "localhost";

// Characters a browser's encodeURIComponent leaves untouched.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Assembles the request URL from the form fields.
///
/// Nothing here is validated: the port is appended verbatim and the query
/// string is not re-encoded, so a malformed input yields a malformed URL.
pub fn build_url(
    protocol: &str,
    port: &str,
    api_url: &str,
    path_segments: &[String],
    query: &str,
) -> String {
    let mut url = format!("{protocol}://{LOCAL_HOST}");

    if !port.is_empty() {
        url.push(':');
        url.push_str(port);
    }

    if !api_url.is_empty() {
        if !api_url.starts_with('/') {
            url.push('/');
        }
        url.push_str(api_url);
    }

    if !path_segments.is_empty() {
        url.push('/');
        url.push_str(&path_segments.join("/"));
    }

    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }

    url
}

pub fn encode_path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Trims and encodes each entry, dropping the ones left empty.
pub fn path_segments<S: AsRef<str>>(entries: &[S]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| encode_path_segment(entry.as_ref().trim()))
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Joins the non-empty trimmed entries with `&`. Entries are not parsed.
pub fn query_string<S: AsRef<str>>(entries: &[S]) -> String {
    entries
        .iter()
        .map(|entry| entry.as_ref().trim())
        .filter(|entry| !entry.is_empty())
        .collect::<Vec<_>>()
        .join("&")
}
