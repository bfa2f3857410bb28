use crate::output::{self, RenderOpts};
use anyhow::{Result, anyhow};
use shopfront_runtime::Storefront;
use shopfront_source::ProductSource;

pub async fn handle<S: ProductSource>(storefront: &Storefront<S>) -> Result<()> {
    let categories = storefront
        .source()
        .list_categories()
        .await
        .map_err(|err| anyhow!("{} (run the command again to retry)", err))?;

    let opts = RenderOpts::detect();
    for line in output::format_category_list(&categories, &opts) {
        println!("{}", line);
    }

    Ok(())
}
