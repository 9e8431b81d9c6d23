//! Search jobs against a backend, degrading to the bundled corpus
//!
//! ```text
//! RUST_LOG=medexjob=debug cargo run --example search_jobs -- radiologist
//! MEDEXJOB_CONFIG=medexjob.yaml cargo run --example search_jobs -- nurse
//! ```

use medexjob::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("medexjob=info")),
        )
        .init();

    let config = match std::env::var("MEDEXJOB_CONFIG") {
        Ok(path) => ClientConfig::from_yaml_file(&path)?,
        Err(_) => ClientConfig::default_config(),
    };
    tracing::info!(base_url = %config.api.base_url, "Using backend");

    let resolver = JobResolver::from_config(&config)?;
    let search = std::env::args().nth(1);

    let mut query = JobsQuery::new().size(5);
    if let Some(term) = search {
        query = query.search(term);
    }

    let (page, source) = resolver.resolve_with_source(&query).await;
    println!(
        "{} job(s) from {:?}, page {}/{}",
        page.total_elements,
        source,
        page.number + 1,
        page.total_pages.max(1)
    );
    for job in &page.content {
        println!(
            "  [{}] {} - {} ({}) apply by {}",
            job.id, job.title, job.organization, job.location, job.last_date
        );
    }

    let service = HttpJobService::from_config(&config.api)?;
    let feed = PulseFeed::new(std::sync::Arc::new(service));
    let (meta, pulse) = futures::join!(resolver.fetch_meta(), feed.pulse_updates());

    println!("\nCategories: {}", meta.categories.join(", "));
    println!("Locations:  {}", meta.locations.join(", "));

    println!("\nPulse:");
    for update in pulse {
        let marker = if update.is_breaking() { "!" } else { " " };
        println!(" {} {} {:?}: {}", marker, update.date, update.kind, update.title);
    }

    Ok(())
}
