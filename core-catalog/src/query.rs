//! Page identity resolution from the query string.

use url::form_urlencoded;

/// Key carrying the artist identifier in the page's query string.
const ARTIST_PARAM: &str = "id";

/// Extract the artist identifier from a raw query string.
///
/// Accepts the string with or without a leading `?`. Returns `None` when the
/// parameter is absent or empty; both render the "no artist specified" page.
pub fn artist_id_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == ARTIST_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
