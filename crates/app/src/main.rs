//! Vitrine storefront CLI

use std::process;

use clap::{Args, Parser, Subcommand};

use vitrine::pricing::discount_percent;
use vitrine_app::{config::AppConfig, context::AppContext};

#[derive(Debug, Parser)]
#[command(name = "vitrine-app", about = "Vitrine storefront CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Product(ProductCommand),
    Shipping(ShippingCommand),
}

#[derive(Debug, Args)]
struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Fetch and display a product's normalised catalogue entry
    Show(ShowProductArgs),
}

#[derive(Debug, Args)]
struct ShowProductArgs {
    /// Product id or slug
    id_or_slug: String,

    #[command(flatten)]
    config: AppConfig,
}

#[derive(Debug, Args)]
struct ShippingCommand {
    #[command(subcommand)]
    command: ShippingSubcommand,
}

#[derive(Debug, Subcommand)]
enum ShippingSubcommand {
    /// Display the current shipping policy
    Show(ShowShippingArgs),
}

#[derive(Debug, Args)]
struct ShowShippingArgs {
    #[command(flatten)]
    config: AppConfig,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Product(ProductCommand {
            command: ProductSubcommand::Show(args),
        }) => show_product(args).await,
        Commands::Shipping(ShippingCommand {
            command: ShippingSubcommand::Show(args),
        }) => show_shipping(args).await,
    }
}

async fn show_product(args: ShowProductArgs) -> Result<(), String> {
    let context = AppContext::from_config(&args.config)
        .map_err(|error| format!("failed to build context: {error}"))?;

    let product = context
        .products
        .get_product(&args.id_or_slug)
        .await
        .map_err(|error| format!("failed to fetch product: {error}"))?;

    println!("{} ({})", product.name, product.slug);
    println!("active: {}", product.is_active);

    match discount_percent(product.price, product.original) {
        Some(percent) => println!(
            "price: {} (was {}, -{percent}%)",
            product.price, product.original
        ),
        None => println!("price: {}", product.price),
    }

    for color in &product.colors {
        println!("color: {} ({:?})", color.name, color.id);
    }

    for size in &product.sizes {
        let stock = if size.in_stock { "in stock" } else { "out of stock" };
        println!("size: {} ({stock})", size.name);
    }

    println!("variants: {}", product.variants.len());

    Ok(())
}

async fn show_shipping(args: ShowShippingArgs) -> Result<(), String> {
    let context = AppContext::from_config(&args.config)
        .map_err(|error| format!("failed to build context: {error}"))?;

    let policy = context.shipping_policy().await;

    println!("free shipping threshold: {}", policy.free_shipping_threshold);
    println!("shipping fee: {}", policy.shipping_fee);

    Ok(())
}
