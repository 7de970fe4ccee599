//! Application state and core logic

use crate::config::ScannerConfig;
use crate::scan::{BarcodeScanHandler, PendingScan, ScanResponse};
use crate::search::{PackageSearch, SearchClient, SearchError};
use crate::state::{ActiveField, ManifestForm, Notifier, Severity, ToastQueue};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// The manifest being edited
    pub form: ManifestForm,
    /// Visible notifications
    pub toasts: ToastQueue,
    /// Lookups started and not yet applied
    pub pending_lookups: usize,
    handler: BarcodeScanHandler,
    search: Arc<dyn PackageSearch>,
    responses_tx: mpsc::UnboundedSender<ScanResponse>,
    responses_rx: mpsc::UnboundedReceiver<ScanResponse>,
    config: ScannerConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured search service
    pub fn new(config: ScannerConfig) -> Result<Self> {
        let search = SearchClient::new(&config.search_address())?;
        tracing::info!("Using package search service at {}", search.address());
        Ok(Self::with_search(config, Arc::new(search)))
    }

    pub fn with_search(config: ScannerConfig, search: Arc<dyn PackageSearch>) -> Self {
        let (responses_tx, responses_rx) = mpsc::unbounded_channel();
        let form = ManifestForm::new(
            config.shipping_provider_code.clone().unwrap_or_default(),
            config.channel_id.clone().unwrap_or_default(),
        );

        Self {
            form,
            toasts: ToastQueue::new(config.toast_duration()),
            pending_lookups: 0,
            handler: BarcodeScanHandler::new(config.translator()),
            search,
            responses_tx,
            responses_rx,
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while the most recent scan is waiting for the search service
    pub fn awaiting_lookup(&self) -> bool {
        self.handler.in_flight().is_some()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.form.next_field(),
            KeyCode::BackTab => self.form.prev_field(),
            KeyCode::Enter => {
                // Barcode scanners terminate each scan with Enter
                if self.form.active_field == ActiveField::ScanBarcode {
                    self.on_scan_barcode();
                } else {
                    self.form.next_field();
                }
            }
            KeyCode::Up => self.form.select_prev_item(),
            KeyCode::Down => self.form.select_next_item(),
            KeyCode::Delete => {
                if let Some(item) = self.form.remove_selected_item() {
                    tracing::info!(sales_invoice = %item.sales_invoice, "Removed package from manifest");
                    self.toasts
                        .notify(&format!("Removed {}", item.sales_invoice), Severity::Info);
                }
            }
            KeyCode::Backspace => self.form.active_field_mut().pop_char(),
            KeyCode::Char(c) => self.form.active_field_mut().push_char(c),
            _ => {}
        }
    }

    /// Scan field changed: start a lookup in the background
    fn on_scan_barcode(&mut self) {
        let Some(PendingScan { id, request }) = self.handler.begin(&mut self.form) else {
            return;
        };
        self.pending_lookups += 1;

        let search = Arc::clone(&self.search);
        let responses = self.responses_tx.clone();
        tokio::spawn(async move {
            let lookup =
                tokio::spawn(async move { search.search_packages(&request).await });
            let result = match lookup.await {
                Ok(result) => result,
                Err(e) => Err(SearchError::Aborted(e.to_string())),
            };
            // The receiver only goes away when the app shuts down
            let _ = responses.send(ScanResponse { id, result });
        });
    }

    /// Apply finished lookups and expire old notifications.
    /// Returns true if anything on screen changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        while let Ok(response) = self.responses_rx.try_recv() {
            self.apply(response);
            changed = true;
        }
        self.toasts.prune() || changed
    }

    fn apply(&mut self, response: ScanResponse) {
        self.pending_lookups = self.pending_lookups.saturating_sub(1);
        match self
            .handler
            .complete(&mut self.form, response, &mut self.toasts)
        {
            Ok(outcome) => tracing::debug!(?outcome, "Scan finished"),
            Err(e) => self.toasts.notify(&format!("Error: {e}"), Severity::Error),
        }
    }

    /// Remember the shipper and channel for the next session
    pub fn save_settings(&mut self) -> Result<()> {
        self.config.shipping_provider_code =
            Some(self.form.shipping_provider_code.value().to_string());
        self.config.channel_id = Some(self.form.channel_id.value().to_string());
        self.config.save()
    }

    /// Wait for the next lookup to finish and apply it
    #[cfg(test)]
    async fn wait_for_lookup(&mut self) {
        if let Some(response) = self.responses_rx.recv().await {
            self.apply(response);
        }
    }
}
