//! The `fetch` command: one page fetch, then the widget's client-side
//! filter/sort/reveal pass, rendered to the terminal.

use std::time::Duration;

use clap::{Args, ValueEnum};
use shopfront_client::StorefrontClient;
use shopfront_core::{SortOrder, WidgetConfig};
use shopfront_engine::{WidgetState, REVEAL_DELAY_MS};

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Collection handle to fetch, overriding the configured one
    /// ("all" for the unscoped product listing).
    #[arg(long)]
    collection: Option<String>,

    /// Restrict the view to this brand; repeat for several.
    #[arg(long = "brand")]
    brands: Vec<String>,

    /// Restrict the view to this product type; repeat for several.
    #[arg(long = "product-type")]
    product_types: Vec<String>,

    /// Price sort direction.
    #[arg(long, value_enum, default_value_t = SortArg::Asc)]
    sort: SortArg,

    /// Keep driving the reveal machine until the whole filtered view is
    /// shown, instead of stopping at the initial window.
    #[arg(long)]
    reveal_all: bool,

    /// Print the visible products as JSON instead of a listing.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortOrder::PriceAsc,
            SortArg::Desc => SortOrder::PriceDesc,
        }
    }
}

/// Runs the fetch command against the configured shop.
///
/// # Errors
///
/// Returns any configuration, HTTP, or upstream API error; all are terminal
/// and render as a single message.
pub async fn run(mut config: WidgetConfig, args: FetchArgs) -> anyhow::Result<()> {
    if let Some(collection) = args.collection {
        config.collection_handle = collection;
    }

    let client = StorefrontClient::new(&config)?;
    let mut widget = WidgetState::new();

    let generation = widget.begin_fetch();
    let page = client.fetch_product_page(None).await?;
    tracing::info!(
        collection = %page.title,
        products = page.products.len(),
        has_next_page = page.page_info.has_next_page,
        "fetched product page"
    );
    widget.apply_page(generation, page);

    for brand in &args.brands {
        widget.toggle_brand(brand);
    }
    for product_type in &args.product_types {
        widget.toggle_product_type(product_type);
    }
    widget.set_sort(args.sort.into());

    if args.reveal_all {
        // Stand-in for the scroll sentinel: keep revealing, with the
        // widget's loading-spinner pacing, until the view is exhausted.
        while widget.sentinel_visible() {
            tokio::time::sleep(Duration::from_millis(REVEAL_DELAY_MS)).await;
            widget.complete_reveal();
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&widget.visible_products())?
        );
        return Ok(());
    }

    render_listing(&widget);
    Ok(())
}

fn render_listing(widget: &WidgetState) {
    let visible = widget.visible_products();

    println!(
        "{} — showing {} of {} matching products",
        widget.collection_title().unwrap_or("(untitled)"),
        visible.len(),
        widget.filtered_len()
    );

    if visible.is_empty() {
        println!("No products found matching your filters.");
        return;
    }

    for product in &visible {
        println!(
            "  {:>8} {:<4} {} [{}] {}{}",
            product.price.amount,
            product.price.currency_code,
            product.title,
            product.vendor,
            product.page_path(),
            if product.product_type.is_empty() {
                String::new()
            } else {
                format!(" ({})", product.product_type)
            }
        );
    }

    if !widget.is_exhausted() {
        println!("  … scroll for more ({} total)", widget.filtered_len());
    }
}
