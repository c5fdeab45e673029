/// One search request, built once from the command line.
#[derive(Debug)]
pub struct Request {
    pub base_path: String,
    pub search_query: String,
}

impl Request {
    pub fn new(base_path: impl Into<String>, search_query: impl Into<String>) -> Self {
        Request {
            base_path: base_path.into(),
            search_query: search_query.into(),
        }
    }

    pub fn url(&self) -> String {
        build_url(&self.base_path, &self.search_query)
    }
}

/// Joins the base path and the search query, adding a single `/` to the base
/// path when it has none. The query is appended as-is, without URL encoding.
pub fn build_url(base_path: &str, search_query: &str) -> String {
    let mut url = normalize_base_path(base_path);
    url.push_str(search_query);
    url
}

fn normalize_base_path(base_path: &str) -> String {
    let mut base = base_path.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    base
}
