use owo_colors::OwoColorize;
use shopfront_engine::CatalogSummary;
use shopfront_runtime::ProductView;
use shopfront_types::{Category, Product};

/// Options for terminal output
#[derive(Debug, Clone)]
pub struct RenderOpts {
    pub enable_color: bool,
}

impl RenderOpts {
    /// Color on only when stdout is an interactive terminal.
    pub fn detect() -> Self {
        use is_terminal::IsTerminal;
        Self {
            enable_color: std::io::stdout().is_terminal(),
        }
    }
}

/// Results header: "N Products Found" plus the showing-N-of-M line.
pub fn format_results_header(summary: &CatalogSummary, opts: &RenderOpts) -> Vec<String> {
    let noun = if summary.visible == 1 {
        "Product"
    } else {
        "Products"
    };
    let title = format!("{} {} Found", summary.visible, noun);

    let mut subtitle = String::new();
    if let Some(category) = &summary.category {
        subtitle.push_str(&format!("in {} • ", category));
    }
    subtitle.push_str(&format!(
        "Showing {} of {} total products",
        summary.visible, summary.total
    ));

    if opts.enable_color {
        vec![format!("{}", title.bold()), format!("{}", subtitle.dimmed())]
    } else {
        vec![title, subtitle]
    }
}

/// One table row per product: id, title, price, category, stars.
pub fn format_product_row(product: &Product, opts: &RenderOpts) -> String {
    let price = format!("${:.2}", product.price);
    let stars = format_stars(product.rating.rate);

    if opts.enable_color {
        format!(
            "{:>4}  {:<40}  {:>9}  {:<16}  {} ({})",
            product.id.to_string().dimmed(),
            product.title,
            price.green(),
            product.category.to_string().cyan(),
            stars.yellow(),
            product.rating.count,
        )
    } else {
        format!(
            "{:>4}  {:<40}  {:>9}  {:<16}  {} ({})",
            product.id, product.title, price, product.category, stars, product.rating.count,
        )
    }
}

/// Empty-state for a Ready view whose criteria hide every product.
pub fn format_empty_state(opts: &RenderOpts) -> Vec<String> {
    let heading = "No products found";
    let hint = "Try adjusting your search or category filters, or run without --search/--category to clear them.";

    if opts.enable_color {
        vec![format!("{}", heading.bold()), format!("{}", hint.dimmed())]
    } else {
        vec![heading.to_string(), hint.to_string()]
    }
}

/// Detail card: category, title, rating, price, description and the
/// transient view state.
pub fn format_product_card(view: &ProductView, opts: &RenderOpts) -> Vec<String> {
    let product = &view.product;
    let mut lines = Vec::new();

    if opts.enable_color {
        lines.push(format!("{}", product.category.to_string().cyan()));
        lines.push(format!("{}", product.title.bold()));
    } else {
        lines.push(product.category.to_string());
        lines.push(product.title.clone());
    }

    lines.push(format!(
        "{} {:.1} stars ({} reviews)",
        format_stars(product.rating.rate),
        product.rating.rate,
        product.rating.count
    ));

    let price = format!("${:.2}", product.price);
    if opts.enable_color {
        lines.push(format!("{}", price.green().bold()));
    } else {
        lines.push(price);
    }

    lines.push(String::new());
    lines.push(product.description.clone());
    lines.push(String::new());

    lines.push(format!("Quantity: {}", view.quantity));
    if view.wishlisted {
        lines.push("♥ On your wishlist".to_string());
    }
    if view.cart_ack {
        let ack = "✓ Added to cart";
        if opts.enable_color {
            lines.push(format!("{}", ack.green()));
        } else {
            lines.push(ack.to_string());
        }
    }

    lines.push(format!("Image: {}", product.image));
    lines
}

pub fn format_category_list(categories: &[Category], opts: &RenderOpts) -> Vec<String> {
    categories
        .iter()
        .map(|category| {
            if opts.enable_color {
                format!("{}", category.to_string().cyan())
            } else {
                category.to_string()
            }
        })
        .collect()
}

/// Five-position star bar, filled to the rounded rate.
pub fn format_stars(rate: f64) -> String {
    let filled = (rate.round().clamp(0.0, 5.0)) as usize;
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(5 - filled));
    stars
}
