use eyre::Result;
use storefront::view::{LoadState, PageMarker, ProductsPage};
use storefront::{CatalogClient, CatalogConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = CatalogConfig::from_env()?;
    let client = CatalogClient::new(&config)?;

    let mut page = ProductsPage::default();
    page.load(&client).await;
    if let LoadState::Failed(message) = page.state() {
        eyre::bail!("Error: {message}");
    }

    let view = page.view();
    println!("Categories: {}", view.categories.join(", "));
    for product in &view.visible {
        println!(
            "#{:<4} {:<40} ${:>8.2}  [{}]",
            product.id,
            product.title,
            product.final_price(),
            product.category
        );
    }
    let pagination = view.pagination;
    if pagination.needs_controls() {
        let buttons: Vec<String> = pagination
            .markers()
            .iter()
            .map(|marker| match marker {
                PageMarker::Page(n) if *n == pagination.current_page() => format!("[{n}]"),
                PageMarker::Page(n) => n.to_string(),
                PageMarker::Ellipsis => "...".to_string(),
            })
            .collect();
        println!(
            "Showing {} to {} of {} results  {}",
            pagination.start_item(),
            pagination.end_item(),
            pagination.total_items(),
            buttons.join(" ")
        );
    }
    Ok(())
}
