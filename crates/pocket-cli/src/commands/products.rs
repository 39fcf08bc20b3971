use pocket_api::DataSource;
use pocket_api::rankings::LaneigeProducts;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct ProductRow {
    product_id: u64,
    name: String,
    style: Option<String>,
    rank_1: Option<u32>,
    rank_1_category: Option<String>,
    rank_2: Option<u32>,
    rank_2_category: Option<String>,
}

/// Handle `pocket products`: the ids `add --product` and `trends` take.
pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let products = ctx.backend.laneige_products().await?;
    let mut rows = product_rows(&products);
    truncate_to(
        &mut rows,
        effective_limit(None, flags.limit, ctx.config.general.default_limit),
    );
    output(&rows, flags.format)
}

fn product_rows(products: &LaneigeProducts) -> Vec<ProductRow> {
    products
        .items
        .iter()
        .map(|p| ProductRow {
            product_id: p.product_id,
            name: p.display_name(),
            style: p.style.clone(),
            rank_1: p.rank_1,
            rank_1_category: p.rank_1_category.clone(),
            rank_2: p.rank_2,
            rank_2_category: p.rank_2_category.clone(),
        })
        .collect()
}
