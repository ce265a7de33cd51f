use anyhow::Context;
use serde::Serialize;

use rna_config::RnaConfig;
use rna_core::{delta, AuditReport, AuditSession, Nutrient};
use rna_extract::{ExtractClient, LabelInfo};
use rna_usda::{FoodDetails, UsdaClient};

use crate::cli::{AuditArgs, GlobalFlags};
use crate::output::output;
use crate::progress::Progress;

/// One comparison-table row with its display delta.
#[derive(Debug, Serialize)]
pub struct ComparisonRow {
    pub nutrient: Nutrient,
    pub unit: &'static str,
    pub usda: Option<f64>,
    pub label: Option<f64>,
    pub delta_pct: Option<f64>,
}

/// Everything one audit run produced, reused by `rna push`.
pub struct AuditOutcome {
    pub details: Option<FoodDetails>,
    pub label: Option<LabelInfo>,
    pub report: AuditReport,
    pub comparison: Vec<ComparisonRow>,
    pub triggers: Vec<String>,
}

/// Printable summary of an audit run.
#[derive(Debug, Serialize)]
struct AuditResponse {
    product: Option<String>,
    brand: Option<String>,
    fdc_id: Option<u64>,
    serving_size: Option<f64>,
    serving_size_unit: Option<String>,
    comparison: Vec<ComparisonRow>,
    report: AuditReport,
    triggers: Vec<String>,
}

pub async fn run(args: &AuditArgs, config: &RnaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = execute(args, config, flags).await?;

    let response = AuditResponse {
        product: outcome
            .details
            .as_ref()
            .map(|d| d.product_description.clone())
            .or_else(|| outcome.label.as_ref().and_then(|l| l.product_name.clone())),
        brand: outcome
            .details
            .as_ref()
            .map(|d| d.brand_name.clone())
            .or_else(|| outcome.label.as_ref().and_then(|l| l.brand.clone())),
        fdc_id: outcome.details.as_ref().map(|d| d.fdc_id),
        serving_size: outcome.details.as_ref().and_then(|d| d.serving_size),
        serving_size_unit: outcome
            .details
            .as_ref()
            .map(|d| d.serving_size_unit.clone()),
        comparison: outcome.comparison,
        report: outcome.report,
        triggers: outcome.triggers,
    };
    output(&response, flags.format)
}

/// Assemble the session from whatever sources were given, audit it, and run
/// trigger analysis. Each fetch merges only after it fully succeeds.
pub async fn execute(
    args: &AuditArgs,
    config: &RnaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<AuditOutcome> {
    let mut session = AuditSession::new();

    let label = load_label(args, config, flags).await?;
    if let Some(label) = &label {
        session.apply_label(&label.nutrients);
    }

    let details = match args.fdc_id {
        Some(fdc_id) => {
            let client = UsdaClient::new(&config.usda);
            let spinner = Progress::spinner("Fetching USDA reference data...", flags);
            let details = client.food_details(fdc_id).await;
            spinner.finish_clear();
            let details = details.with_context(|| format!("USDA lookup failed for {fdc_id}"))?;
            session.apply_usda(&details.nutrients);
            Some(details)
        }
        None => None,
    };

    let report = session.audit(&config.audit.to_policy());

    let comparison = session
        .table()
        .iter()
        .map(|(nutrient, entry)| ComparisonRow {
            nutrient,
            unit: nutrient.unit(),
            usda: entry.usda,
            label: entry.label,
            delta_pct: delta(entry.label, entry.usda).map(|pct| (pct * 10.0).round() / 10.0),
        })
        .collect();

    let triggers = if args.no_triggers {
        Vec::new()
    } else {
        analyze_triggers(label.as_ref(), details.as_ref(), config, flags).await
    };

    Ok(AuditOutcome {
        details,
        label,
        report,
        comparison,
        triggers,
    })
}

async fn load_label(
    args: &AuditArgs,
    config: &RnaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<Option<LabelInfo>> {
    if let Some(path) = &args.label {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read label file at {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("label file at {} is not valid JSON", path.display()))?;
        return Ok(Some(LabelInfo::from_json(&value)));
    }

    if let Some(path) = &args.image {
        let image = std::fs::read(path)
            .with_context(|| format!("failed to read image at {}", path.display()))?;
        let client = ExtractClient::new(&config.ocr, &config.llm);
        let spinner = Progress::spinner("Scanning label...", flags);
        let label = client.label_from_image(image).await;
        spinner.finish_clear();
        return Ok(Some(label.context("label extraction failed")?));
    }

    Ok(None)
}

/// Trigger analysis is advisory: a failure is logged, never fatal, and the
/// audit report it accompanies is already final.
async fn analyze_triggers(
    label: Option<&LabelInfo>,
    details: Option<&FoodDetails>,
    config: &RnaConfig,
    flags: &GlobalFlags,
) -> Vec<String> {
    if !config.llm.is_configured() {
        return Vec::new();
    }

    let label_ingredients = label.and_then(|l| l.ingredients.as_deref());
    let usda_ingredients = details.and_then(|d| d.ingredients.as_deref());
    if label_ingredients.is_none() && usda_ingredients.is_none() {
        return Vec::new();
    }

    let client = ExtractClient::new(&config.ocr, &config.llm);
    let spinner = Progress::spinner("Analyzing ingredients for hidden triggers...", flags);
    let result = client
        .ingredient_triggers(label_ingredients, usda_ingredients)
        .await;
    spinner.finish_clear();

    result.unwrap_or_else(|error| {
        tracing::warn!(%error, "ingredient trigger analysis failed");
        Vec::new()
    })
}
