//! Report annotation command.

use std::path::Path;

use console::style;

use trialbot::config::Settings;
use trialbot_annotate::services::annotation::{Annotator, StudyCharsAnnotator};

use super::super::helpers::read_document;

/// Annotate a single report file and print the marginalia envelope.
pub fn cmd_annotate(settings: &Settings, file: &Path, compact: bool) -> anyhow::Result<()> {
    let text = read_document(file)?;
    // Registry exports hard-wrap paragraphs; rejoin lines before segmenting.
    let text = text.split('\n').collect::<Vec<_>>().join(" ");

    tracing::info!(models = %settings.model_dir.display(), "loading classifiers");
    let annotator = StudyCharsAnnotator::from_dir(&settings.model_dir)?;

    eprintln!(
        "{} {} annotator ready",
        style("✓").green(),
        annotator.display_name()
    );

    let result = annotator.annotate(&text)?;
    let json = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{}", json);

    Ok(())
}
