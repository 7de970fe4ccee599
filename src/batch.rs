//! Headless scanning: barcodes are read line by line from a pipe or file

use crate::config::ScannerConfig;
use crate::scan::{BarcodeScanHandler, ScanOutcome};
use crate::search::PackageSearch;
use crate::state::{ManifestForm, Notifier, Severity};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Reports notifications through the log, since there is no screen
struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => tracing::info!("{message}"),
            Severity::Warning => tracing::warn!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        }
    }
}

/// Scan every line of `input` into a fresh manifest, then write the
/// manifest's sales invoices to `output`, one per line.
///
/// A failed lookup is logged and the remaining lines are still scanned.
pub async fn run<R, W, S>(
    config: &ScannerConfig,
    search: &S,
    input: R,
    mut output: W,
) -> Result<ManifestForm>
where
    R: BufRead,
    W: Write,
    S: PackageSearch + ?Sized,
{
    let mut form = ManifestForm::new(
        config.shipping_provider_code.clone().unwrap_or_default(),
        config.channel_id.clone().unwrap_or_default(),
    );
    let mut handler = BarcodeScanHandler::new(config.translator());
    let mut notifier = LogNotifier;

    for line in input.lines() {
        form.scan_barcode.set_value(line?);
        match handler.handle(&mut form, search, &mut notifier).await {
            Ok(ScanOutcome::Skipped) => {}
            Ok(outcome) => tracing::debug!(?outcome, "Scan finished"),
            Err(e) => tracing::error!("Error: {e}"),
        }
    }

    for item in form.items() {
        writeln!(output, "{}", item.sales_invoice)?;
    }
    output.flush()?;

    Ok(form)
}
