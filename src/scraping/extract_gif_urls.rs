use scraper::{Html, Selector};

/// Extracts the `src` of every `<img>` whose value ends with `extension`
/// (compared case-insensitively), keeping at most `max_results` in document
/// order.
///
/// Images without a `src`, or with an empty one, are skipped. Values are
/// returned exactly as written in the page: relative paths are not resolved
/// and duplicates are kept.
pub fn extract_gif_urls(html_content: &str, extension: &str, max_results: usize) -> Vec<String> {
    let document = Html::parse_document(html_content);
    let selector = Selector::parse("img").expect("valid selector");
    let extension = extension.to_lowercase();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("src"))
        .filter(|src| !src.is_empty() && src.to_lowercase().ends_with(&extension))
        .take(max_results)
        .map(str::to_string)
        .collect()
}
