use crate::output::{self, RenderOpts};
use anyhow::{Result, anyhow};
use shopfront_runtime::{ListPhase, Storefront};
use shopfront_source::ProductSource;
use shopfront_types::{CategoryFilter, SortKey};

pub async fn handle<S: ProductSource>(
    storefront: &Storefront<S>,
    category: CategoryFilter,
    search: String,
    sort: SortKey,
) -> Result<()> {
    let controller = storefront.list();
    controller.set_category(category);
    controller.set_search(search);
    controller.set_sort(sort);

    controller.load().await;

    let view = match controller.phase() {
        ListPhase::Ready(view) => view,
        ListPhase::Error { message } => {
            return Err(anyhow!("{} (run the command again to retry)", message));
        }
        ListPhase::Loading => unreachable!("load() settles before returning"),
    };

    let opts = RenderOpts::detect();
    if let Some(summary) = controller.summary() {
        for line in output::format_results_header(&summary, &opts) {
            println!("{}", line);
        }
        println!();
    }

    if view.visible.is_empty() {
        for line in output::format_empty_state(&opts) {
            println!("{}", line);
        }
        return Ok(());
    }

    for product in &view.visible {
        println!("{}", output::format_product_row(product, &opts));
    }

    Ok(())
}
