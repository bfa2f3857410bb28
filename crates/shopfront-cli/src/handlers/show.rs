use crate::output::{self, RenderOpts};
use anyhow::{Result, anyhow};
use shopfront_runtime::{DetailPhase, Storefront};
use shopfront_source::ProductSource;
use shopfront_types::ProductId;

pub async fn handle<S: ProductSource>(
    storefront: &Storefront<S>,
    id: u64,
    quantity: Option<i64>,
    wishlist: bool,
    add_to_cart: bool,
) -> Result<()> {
    let controller = storefront.detail();
    controller.load(ProductId(id)).await;

    match controller.phase() {
        DetailPhase::Ready(_) => {}
        DetailPhase::Error { message, retryable } => {
            // The not-found case gets no retry affordance
            return if retryable {
                Err(anyhow!("{} (run the command again to retry)", message))
            } else {
                Err(anyhow!(message))
            };
        }
        DetailPhase::Loading => unreachable!("load() settles before returning"),
    }

    if let Some(quantity) = quantity {
        // Non-positive entry is silently ignored by the controller
        controller.set_quantity(quantity);
    }
    if wishlist {
        controller.toggle_wishlist();
    }
    if add_to_cart {
        controller.add_to_cart();
    }

    let opts = RenderOpts::detect();
    if let Some(view) = controller.view() {
        for line in output::format_product_card(&view, &opts) {
            println!("{}", line);
        }
    }

    Ok(())
}
