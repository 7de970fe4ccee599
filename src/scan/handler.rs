//! Scan-field change handler
//!
//! Turns a scanned barcode into a manifest row: validates the scan, looks the
//! package up through [`PackageSearch`], and adds the matching sales invoice
//! to the form unless it is already there. The scan field is reset after
//! every scan, whatever the outcome.

use super::reset::ScanReset;
use crate::i18n::Translator;
use crate::search::{PackageSearch, ScanRequest, SearchError};
use crate::state::{ManifestForm, Notifier, Severity};

pub const NOT_FOUND_MESSAGE: &str = "Could not find the package.";
pub const DUPLICATE_MESSAGE: &str = "Package already added in this manifest";
pub const SUPERSEDED_MESSAGE: &str = "An earlier scan was replaced by a newer one, scan it again";

/// Identifies one lookup started by a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// A lookup that has been started but not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingScan {
    pub id: RequestId,
    pub request: ScanRequest,
}

/// Result of a lookup, tagged with the request that produced it
#[derive(Debug)]
pub struct ScanResponse {
    pub id: RequestId,
    pub result: Result<Option<String>, SearchError>,
}

/// How a scan ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Scan field was empty; nothing looked up
    Skipped,
    /// New row added for this sales invoice
    Inserted(String),
    /// Sales invoice already on the manifest
    Duplicate(String),
    NotFound,
    /// A newer scan started before this one resolved
    Superseded,
}

#[derive(Debug, Default)]
pub struct BarcodeScanHandler {
    translator: Translator,
    next_id: u64,
    /// Only the most recently started lookup may touch the form
    latest: Option<RequestId>,
}

impl BarcodeScanHandler {
    pub fn new(translator: Translator) -> Self {
        Self {
            translator,
            next_id: 0,
            latest: None,
        }
    }

    /// The lookup whose result will be applied, if one is outstanding
    pub fn in_flight(&self) -> Option<RequestId> {
        self.latest
    }

    /// Start a scan from the current form values.
    ///
    /// Returns `None` (after resetting the scan field) when there is nothing
    /// to look up. Otherwise the scan field is emptied for the next scan, and
    /// the caller runs the lookup and hands the result to
    /// [`complete`](Self::complete), which performs the full reset.
    pub fn begin(&mut self, form: &mut ManifestForm) -> Option<PendingScan> {
        let mut form = ScanReset::new(form);
        let pending = self.prepare(&form)?;
        form.scan_barcode.clear();
        form.disarm();
        Some(pending)
    }

    /// Apply a finished lookup to the form.
    ///
    /// Remote failures are returned to the caller; the scan field is reset
    /// either way.
    pub fn complete<N>(
        &mut self,
        form: &mut ManifestForm,
        response: ScanResponse,
        notifier: &mut N,
    ) -> Result<ScanOutcome, SearchError>
    where
        N: Notifier + ?Sized,
    {
        let mut form = ScanReset::new(form);
        self.resolve(&mut form, response, notifier)
    }

    /// Run a whole scan: validate, look up and apply.
    pub async fn handle<S, N>(
        &mut self,
        form: &mut ManifestForm,
        search: &S,
        notifier: &mut N,
    ) -> Result<ScanOutcome, SearchError>
    where
        S: PackageSearch + ?Sized,
        N: Notifier + ?Sized,
    {
        let mut form = ScanReset::new(form);
        let Some(pending) = self.prepare(&form) else {
            return Ok(ScanOutcome::Skipped);
        };

        let lookup = ForgetOnDrop {
            handler: self,
            id: pending.id,
        };
        let result = search.search_packages(&pending.request).await;
        lookup.handler.resolve(
            &mut form,
            ScanResponse {
                id: pending.id,
                result,
            },
            notifier,
        )
    }

    fn prepare(&mut self, form: &ManifestForm) -> Option<PendingScan> {
        if form.scan_barcode.is_blank() {
            tracing::debug!("Ignoring empty scan");
            return None;
        }

        self.next_id += 1;
        let id = RequestId(self.next_id);
        self.latest = Some(id);

        let request = ScanRequest {
            search_term: form.scan_barcode.value().trim().to_string(),
            shipper: form.shipping_provider_code.value().to_string(),
            channel: form.channel_id.value().to_string(),
        };
        tracing::debug!(
            request_id = id.0,
            search_term = %request.search_term,
            shipper = %request.shipper,
            channel = %request.channel,
            "Starting package lookup"
        );

        Some(PendingScan { id, request })
    }

    fn resolve<N>(
        &mut self,
        form: &mut ManifestForm,
        response: ScanResponse,
        notifier: &mut N,
    ) -> Result<ScanOutcome, SearchError>
    where
        N: Notifier + ?Sized,
    {
        if self.latest != Some(response.id) {
            match &response.result {
                Ok(Some(sales_invoice)) => {
                    tracing::warn!(
                        request_id = response.id.0,
                        sales_invoice = %sales_invoice,
                        "Dropping match of superseded lookup"
                    );
                    notifier.notify(
                        &self.translator.translate(SUPERSEDED_MESSAGE),
                        Severity::Warning,
                    );
                }
                Ok(None) => tracing::debug!(request_id = response.id.0, "Dropping superseded lookup"),
                Err(e) => tracing::debug!(
                    request_id = response.id.0,
                    "Dropping superseded lookup that failed: {e}"
                ),
            }
            return Ok(ScanOutcome::Superseded);
        }
        self.latest = None;

        let sales_invoice = match response.result {
            Ok(Some(sales_invoice)) => sales_invoice,
            Ok(None) => {
                tracing::warn!(request_id = response.id.0, "No package matched the scan");
                notifier.notify(&self.translator.translate(NOT_FOUND_MESSAGE), Severity::Error);
                return Ok(ScanOutcome::NotFound);
            }
            Err(e) => {
                tracing::error!(request_id = response.id.0, "Package lookup failed: {e}");
                return Err(e);
            }
        };

        if form.contains_invoice(&sales_invoice) {
            tracing::warn!(sales_invoice = %sales_invoice, "Package already on manifest");
            notifier.notify(&self.translator.translate(DUPLICATE_MESSAGE), Severity::Warning);
            return Ok(ScanOutcome::Duplicate(sales_invoice));
        }

        let row_name = form.add_manifest_item().name.clone();
        form.set_sales_invoice(&row_name, &sales_invoice);
        tracing::info!(sales_invoice = %sales_invoice, row = %row_name, "Added package to manifest");

        Ok(ScanOutcome::Inserted(sales_invoice))
    }
}

/// Forgets the in-flight lookup if a running `handle` future is dropped
struct ForgetOnDrop<'a> {
    handler: &'a mut BarcodeScanHandler,
    id: RequestId,
}

impl Drop for ForgetOnDrop<'_> {
    fn drop(&mut self) {
        if self.handler.latest == Some(self.id) {
            tracing::debug!(request_id = self.id.0, "Lookup dropped before it resolved");
            self.handler.latest = None;
        }
    }
}
