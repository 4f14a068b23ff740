use cast_crawler::Crawl;
use cast_crawler::output;
use clap::Parser;
use std::error::Error;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let config = Args::parse().into_config()?;
    let output_path = config.output.clone();
    let format = config.output_format();

    ::log::info!(
        "Crawling cast of {} into {}",
        config.start_url,
        output_path.display()
    );

    let start_time = std::time::Instant::now();
    let rx = Crawl::new(&config.start_url)
        .with_config(config)
        .generate()
        .await?;

    let written = output::write_records(&output_path, format, rx).await?;

    ::log::info!(
        "Wrote {} records to {} in {:.2} seconds",
        written,
        output_path.display(),
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
