use std::time::Duration;

use colored::Colorize;

use crate::config::Settings;
use crate::scraping::extract_gif_urls::extract_gif_urls;
use crate::utilities::build_url::Request;
use crate::utilities::fetch_page::{fetch_page, FetchError};

/// Fetches the search page for `request` and returns the gif URLs found in it.
///
/// The caller decides what a failed fetch means; this function only reports it.
pub async fn fetch_and_extract_gifs(
    request: &Request,
    settings: &Settings,
) -> Result<Vec<String>, FetchError> {
    let url = request.url();
    let verbose = settings.log.verbose;

    if verbose {
        eprintln!("{} {}", "Fetching".cyan(), url);
    }

    let timeout = settings.http.timeout_secs.map(Duration::from_secs);
    let html = fetch_page(&url, timeout).await?;

    let gif_urls = extract_gif_urls(
        &html,
        &settings.scraper.extension,
        settings.scraper.max_results,
    );

    if verbose {
        eprintln!(
            "{}",
            format!("Found {} image(s) ending in {}", gif_urls.len(), settings.scraper.extension)
                .green()
        );
    }

    Ok(gif_urls)
}

#[cfg(test)]
mod tests {
    use tokio::net::TcpListener;

    use super::*;
    use crate::config::load_settings;
    use crate::utilities::fetch_page::test_server::{html_response, serve_once};

    #[tokio::test]
    async fn fetches_and_filters_the_search_page() {
        let body = br#"<html><body>
            <img src="a.gif"><img src="b.png"><img src="c.GIF"><img>
        </body></html>"#;
        let (base_url, server) = serve_once(html_response("200 OK", "text/html", body)).await;

        let request = Request::new(format!("{}/search", base_url), "cats");
        let settings = load_settings(None).unwrap();

        let gifs = fetch_and_extract_gifs(&request, &settings).await.unwrap();
        assert_eq!(gifs, vec!["a.gif", "c.GIF"]);
        assert_eq!(server.await.unwrap(), "GET /search/cats HTTP/1.1");
    }

    #[tokio::test]
    async fn caps_results_at_ten() {
        let body: String = (0..15).map(|i| format!(r#"<img src="{}.gif">"#, i)).collect();
        let (base_url, _server) =
            serve_once(html_response("200 OK", "text/html", body.as_bytes())).await;

        let request = Request::new(base_url, "q");
        let settings = load_settings(None).unwrap();

        let gifs = fetch_and_extract_gifs(&request, &settings).await.unwrap();
        assert_eq!(gifs.len(), 10);
        assert_eq!(gifs.first().map(String::as_str), Some("0.gif"));
        assert_eq!(gifs.last().map(String::as_str), Some("9.gif"));
    }

    #[tokio::test]
    async fn unreachable_host_is_reported() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let request = Request::new(format!("http://{}", addr), "cats");
        let settings = load_settings(None).unwrap();

        assert!(fetch_and_extract_gifs(&request, &settings).await.is_err());
    }
}
