pub mod build_url;
pub mod fetch_page;
