use anyhow::Context;
use serde::Serialize;

use rna_config::RnaConfig;
use rna_core::{AuditReport, ReportColor};
use rna_store::{prepare_record, AirtableClient};

use crate::cli::{AuditArgs, GlobalFlags};
use crate::commands::audit;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct PushResponse {
    record_id: String,
    product: String,
    status: String,
    color: ReportColor,
}

pub async fn run(args: &AuditArgs, config: &RnaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.fdc_id.is_some(),
        "pushing to the audit database requires --fdc-id (run `rna search` first)"
    );

    let client = AirtableClient::new(&config.airtable)?;
    let outcome = audit::execute(args, config, flags).await?;
    let details = outcome
        .details
        .context("audit produced no USDA details to persist")?;

    let record = prepare_record(&details, outcome.label.as_ref(), &outcome.report);

    let spinner = Progress::spinner("Sending to audit database...", flags);
    let record_id = client.push(&record).await;
    spinner.finish_clear();
    let record_id = record_id.context("failed to push record to the audit database")?;

    let AuditReport { status, color, .. } = outcome.report;
    output(
        &PushResponse {
            record_id,
            product: details.product_description,
            status,
            color,
        },
        flags.format,
    )
}
