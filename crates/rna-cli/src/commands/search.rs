use serde::Serialize;

use rna_config::RnaConfig;
use rna_usda::{rank, UsdaClient};

use crate::cli::{GlobalFlags, SearchArgs};
use crate::output::output;
use crate::progress::Progress;

/// One row of `rna search` output: enough to pick a product and feed its
/// FDC id to `rna audit`.
#[derive(Debug, Serialize)]
struct SearchMatch {
    fdc_id: u64,
    brand: String,
    description: String,
    package_weight: Option<String>,
    relevance: f64,
}

pub async fn run(args: &SearchArgs, config: &RnaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = UsdaClient::new(&config.usda);

    let spinner = Progress::spinner("Searching USDA FoodData Central...", flags);
    let results = client.search(&args.query).await;
    spinner.finish_clear();

    let ranked = rank::rank(results?.foods, &args.query, args.limit);
    if ranked.is_empty() {
        tracing::warn!(query = %args.query, "no USDA matches found");
    }

    let matches: Vec<SearchMatch> = ranked
        .into_iter()
        .map(|r| SearchMatch {
            fdc_id: r.food.fdc_id,
            brand: r
                .food
                .brand()
                .map_or_else(|| "Generic".to_string(), str::to_string),
            description: r.food.description.clone(),
            package_weight: r.food.package_weight.clone(),
            relevance: (r.relevance * 10.0).round() / 10.0,
        })
        .collect();

    output(&matches, flags.format)
}
