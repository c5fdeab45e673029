pub mod extract_gif_urls;
