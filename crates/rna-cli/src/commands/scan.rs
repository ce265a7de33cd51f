use anyhow::Context;

use rna_config::RnaConfig;
use rna_extract::ExtractClient;

use crate::cli::{GlobalFlags, ScanArgs};
use crate::output::output;
use crate::progress::Progress;

pub async fn run(args: &ScanArgs, config: &RnaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let image = std::fs::read(&args.image)
        .with_context(|| format!("failed to read image at {}", args.image.display()))?;

    let client = ExtractClient::new(&config.ocr, &config.llm);
    let spinner = Progress::spinner("Scanning label...", flags);
    let label = client.label_from_image(image).await;
    spinner.finish_clear();

    output(&label?, flags.format)
}
