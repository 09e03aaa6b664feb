use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use webfinger_jrd::URI_TEMPLATE_TOKEN;

use crate::resource::Resource;

/// Everything except ASCII alphanumerics and `-._~` is escaped.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(crate) fn query_escape(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ESCAPE).to_string()
}

/// Substitute the resource URI into an LRDD template.
///
/// Only the first `{uri}` is replaced; any later occurrence is left as is.
pub fn expand_template(template: &str, resource: &Resource) -> String {
    template.replacen(
        URI_TEMPLATE_TOKEN,
        &query_escape(&resource.as_uri_string()),
        1,
    )
}
