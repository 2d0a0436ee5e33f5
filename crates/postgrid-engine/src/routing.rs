use percent_encoding::percent_decode_str;
use postgrid_types::RoutingScheme;
use url::{Url, form_urlencoded};

/// Base for resolving site-relative locations such as `/article?id=x`
const RELATIVE_BASE: &str = "http://localhost/";

/// Site-relative link to the article page for `id`
pub fn article_href(scheme: &RoutingScheme, id: &str) -> String {
    match scheme {
        RoutingScheme::Query { param, .. } => {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair(param, id)
                .finish();
            format!("{}?{}", scheme.prefix(), query)
        }
        RoutingScheme::Path { .. } => {
            let Ok(mut url) = Url::parse(RELATIVE_BASE) else {
                return format!("{}/{}", scheme.prefix(), id);
            };
            url.set_path(scheme.prefix());
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.pop_if_empty().push(id);
            }
            url.path().to_string()
        }
    }
}

/// Extract the requested post id from a navigation location.
///
/// `location` may be absolute (`https://blog.example/article?id=x`) or
/// site-relative. Empty ids resolve to `None`.
pub fn resolve_id(scheme: &RoutingScheme, location: &str) -> Option<String> {
    let url = parse_location(location)?;

    let id = match scheme {
        RoutingScheme::Query { param, .. } => url
            .query_pairs()
            .find(|(key, _)| key == param.as_str())
            .map(|(_, value)| value.into_owned()),
        RoutingScheme::Path { .. } => {
            let prefix = scheme.prefix();
            let rest = url.path().strip_prefix(prefix)?;
            // "/articles/x" must not match prefix "/article"
            if !prefix.is_empty() && !rest.starts_with('/') {
                return None;
            }
            rest.split('/')
                .filter(|segment| !segment.is_empty())
                .next_back()
                .map(percent_decode)
        }
    };

    id.filter(|id| !id.is_empty())
}

fn parse_location(location: &str) -> Option<Url> {
    let base = Url::parse(RELATIVE_BASE).ok()?;
    Url::options().base_url(Some(&base)).parse(location).ok()
}

fn percent_decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}
