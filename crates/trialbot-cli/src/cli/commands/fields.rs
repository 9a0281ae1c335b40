//! Study characteristics listing command.

use console::style;

use trialbot::models::StudyCharacteristic;

/// List the predicted fields and the classifier files they load from.
pub fn cmd_fields() -> anyhow::Result<()> {
    for characteristic in StudyCharacteristic::ALL {
        println!(
            "{:<24} {}",
            characteristic.display_name(),
            style(format!("{}_clf.p", characteristic.storage_key())).dim()
        );
    }
    Ok(())
}
