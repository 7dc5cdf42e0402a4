use anyhow::{bail, Context, Result};
use catalog::{load_products, sample_products, Color, Product, Size};
use clap::{Parser, Subcommand};
use filtering::specs::{and_of, ColorSpecification, SizeSpecification};
use filtering::{BetterFilter, Filter, ProductFilter, Specification};
use std::path::PathBuf;
use tracing::info;

/// oc-filter - rigid versus specification-based product filtering
#[derive(Parser)]
#[command(name = "oc-filter")]
#[command(about = "Filter a product catalog by color and size", long_about = None)]
struct Cli {
    /// JSON catalog to filter instead of the built-in sample
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both filter styles on the catalog (default)
    Demo,

    /// Run a single query
    Filter {
        /// Keep only products of this color (red, green, blue)
        #[arg(long)]
        color: Option<Color>,

        /// Keep only products of this size (small, medium, large)
        #[arg(long)]
        size: Option<Size>,

        /// Use the fixed-query ProductFilter instead of BetterFilter
        #[arg(long)]
        rigid: bool,

        /// Evaluate the specification on the rayon thread pool
        #[arg(long, conflicts_with = "rigid")]
        parallel: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries result lines
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let products = match &cli.catalog {
        Some(path) => load_products(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => sample_products(),
    };
    info!("Catalog has {} products", products.len());

    let lines = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => demo_lines(&products),
        Commands::Filter {
            color,
            size,
            rigid,
            parallel,
        } => query_lines(&products, color, size, rigid, parallel)?,
    };

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

/// Both filter styles side by side: green things, then green and large things.
fn demo_lines(products: &[Product]) -> Vec<String> {
    let mut lines = Vec::new();

    info!("Rigid filter");
    for p in ProductFilter::by_color(products, Color::Green) {
        lines.push(format!("{} is green", p.name()));
    }
    for p in ProductFilter::by_size_and_color(products, Size::Large, Color::Green) {
        lines.push(format!("{} is green & large", p.name()));
    }

    info!("Specification filter");
    let filter = BetterFilter::new();
    let green = ColorSpecification::new(Color::Green);
    let large = SizeSpecification::new(Size::Large);
    lines.extend(describe_matches(&filter.filter(products, &green), &green));

    let green_and_large = and_of(&green, &large);
    lines.extend(describe_matches(
        &filter.filter(products, &green_and_large),
        &green_and_large,
    ));

    lines
}

fn query_lines(
    products: &[Product],
    color: Option<Color>,
    size: Option<Size>,
    rigid: bool,
    parallel: bool,
) -> Result<Vec<String>> {
    let spec = build_specification(color, size)?;

    let matches = if rigid {
        match (color, size) {
            (Some(color), Some(size)) => ProductFilter::by_size_and_color(products, size, color),
            (Some(color), None) => ProductFilter::by_color(products, color),
            (None, Some(size)) => ProductFilter::by_size(products, size),
            // rejected by build_specification
            (None, None) => Vec::new(),
        }
    } else if parallel {
        BetterFilter.par_filter(products, &*spec)
    } else {
        BetterFilter.filter(products, &*spec)
    };

    info!(
        "{} of {} products are {}",
        matches.len(),
        products.len(),
        spec.describe()
    );
    Ok(describe_matches(&matches, &*spec))
}

fn build_specification(
    color: Option<Color>,
    size: Option<Size>,
) -> Result<Box<dyn Specification<Product>>> {
    let spec: Box<dyn Specification<Product>> = match (color, size) {
        (Some(color), Some(size)) => Box::new(and_of(
            ColorSpecification::new(color),
            SizeSpecification::new(size),
        )),
        (Some(color), None) => Box::new(ColorSpecification::new(color)),
        (None, Some(size)) => Box::new(SizeSpecification::new(size)),
        (None, None) => bail!("at least one of --color or --size is required"),
    };
    Ok(spec)
}

/// One "<name> is <description>" line per matching product.
fn describe_matches(matches: &[&Product], spec: &dyn Specification<Product>) -> Vec<String> {
    let description = spec.describe();
    matches
        .iter()
        .map(|p| format!("{} is {}", p.name(), description))
        .collect()
}
