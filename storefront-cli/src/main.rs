use clap::{Parser, Subcommand};
use storefront_core::Pager;

#[derive(Parser)]
#[command(name = "storefront-cli")]
#[command(about = "A CLI for browsing the remote product catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of the product catalog
    List {
        /// 1-based page to show
        #[arg(short, long, default_value = "1")]
        page: usize,
    },
    /// Print catalog summary information
    Info,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { page } => {
            if page == 0 {
                eprintln!("Page numbers are 1-based.");
                std::process::exit(2);
            }

            let catalog = match storefront_core::load_catalog().await {
                Ok(catalog) => catalog,
                Err(e) => {
                    eprintln!("Error fetching products: {}", e);
                    std::process::exit(1);
                }
            };
            log::debug!("fetched {} products", catalog.products.len());

            let mut pager = Pager::default();
            pager.jump(page);

            println!("Products");
            let slice = pager.current_slice(&catalog.products);
            if slice.is_empty() {
                println!("  (no products on this page)");
            }
            for product in slice {
                println!("  {}. {} - ${}", product.id, product.title, product.price);
            }
            println!("Page {} of {}", page, pager.page_count(catalog.products.len()));
        }
        Commands::Info => {
            let catalog = match storefront_core::load_catalog().await {
                Ok(catalog) => catalog,
                Err(e) => {
                    eprintln!("Error fetching products: {}", e);
                    std::process::exit(1);
                }
            };

            let pager = Pager::default();
            let fetched_at = catalog
                .fetched_at
                .format(&time::format_description::well_known::Rfc3339)
                .unwrap_or_else(|_| "unknown time".to_string());

            println!("Products loaded: {}", catalog.products.len());
            println!("Catalog size reported by server: {}", catalog.total_available);
            println!(
                "Pages at {} items per page: {}",
                pager.items_per_page,
                pager.page_count(catalog.products.len())
            );
            println!("Fetched at: {}", fetched_at);
        }
    }

    Ok(())
}
