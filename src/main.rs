use std::process::ExitCode;

use colored::Colorize;

use cli::ParseOutcome;

mod cli;
mod config;
mod fetch_and_extract_gifs;
mod scraping;
mod utilities;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let invocation = match cli::parse_args(std::env::args_os()) {
        ParseOutcome::Run(invocation) => invocation,
        ParseOutcome::Usage => {
            eprintln!("{}", cli::usage());
            return ExitCode::from(1);
        }
        ParseOutcome::Exit(e) => e.exit(),
    };

    // Load configuration settings
    let mut settings = match config::load_settings(invocation.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{} {:#}", "Failed to load configuration:".red(), e);
            return ExitCode::from(1);
        }
    };
    settings.log.verbose |= invocation.verbose;

    // A failed fetch still ends the run normally, with nothing printed
    let gif_urls = match fetch_and_extract_gifs::fetch_and_extract_gifs(
        &invocation.request,
        &settings,
    )
    .await
    {
        Ok(gif_urls) => gif_urls,
        Err(e) => {
            eprintln!("{}", format!("Error fetching URL: {:#}", anyhow::Error::from(e)).red());
            Vec::new()
        }
    };

    for gif_url in gif_urls {
        println!("{}", gif_url);
    }

    ExitCode::SUCCESS
}
