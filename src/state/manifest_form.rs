//! The shipment manifest form and its item rows

use super::field::FormField;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Field names as exposed to the scan handler
pub const SCAN_BARCODE: &str = "scan_barcode";
pub const SHIPPING_PROVIDER_CODE: &str = "shipping_provider_code";
pub const CHANNEL_ID: &str = "channel_id";

/// One package on the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestItem {
    /// Row identifier, unique within the form
    pub name: String,
    /// Sales invoice the package was shipped against
    pub sales_invoice: String,
    pub scanned_at: DateTime<Utc>,
}

impl ManifestItem {
    /// Create an empty row with a fresh row name
    pub fn new() -> Self {
        Self {
            name: Uuid::new_v4().to_string(),
            sales_invoice: String::new(),
            scanned_at: Utc::now(),
        }
    }
}

impl Default for ManifestItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Which input field has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveField {
    ShippingProvider,
    Channel,
    #[default]
    ScanBarcode,
}

impl ActiveField {
    pub fn next(self) -> Self {
        match self {
            Self::ShippingProvider => Self::Channel,
            Self::Channel => Self::ScanBarcode,
            Self::ScanBarcode => Self::ShippingProvider,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::ShippingProvider => Self::ScanBarcode,
            Self::Channel => Self::ShippingProvider,
            Self::ScanBarcode => Self::Channel,
        }
    }
}

/// In-memory state of a manifest being edited
#[derive(Debug, Clone)]
pub struct ManifestForm {
    pub shipping_provider_code: FormField,
    pub channel_id: FormField,
    pub scan_barcode: FormField,
    pub active_field: ActiveField,
    items: Vec<ManifestItem>,
    /// Selected row in the item list
    pub selected_item: usize,
    /// Bumped every time the item list is asked to re-render
    items_revision: u64,
}

impl ManifestForm {
    pub fn new(shipping_provider_code: String, channel_id: String) -> Self {
        Self {
            shipping_provider_code: FormField::with_value(
                SHIPPING_PROVIDER_CODE,
                "Shipping Provider",
                shipping_provider_code,
            ),
            channel_id: FormField::with_value(CHANNEL_ID, "Channel", channel_id),
            scan_barcode: FormField::new(SCAN_BARCODE, "Scan Barcode"),
            active_field: ActiveField::default(),
            items: Vec::new(),
            selected_item: 0,
            items_revision: 0,
        }
    }

    pub fn items(&self) -> &[ManifestItem] {
        &self.items
    }

    pub fn items_revision(&self) -> u64 {
        self.items_revision
    }

    /// True if some row already references the given sales invoice
    pub fn contains_invoice(&self, sales_invoice: &str) -> bool {
        self.items.iter().any(|item| item.sales_invoice == sales_invoice)
    }

    /// Append a new empty row and return it
    pub fn add_manifest_item(&mut self) -> &mut ManifestItem {
        self.items.push(ManifestItem::new());
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    /// Set the sales invoice of the row with the given name.
    /// Returns false if no such row exists.
    pub fn set_sales_invoice(&mut self, row_name: &str, sales_invoice: &str) -> bool {
        match self.items.iter_mut().find(|item| item.name == row_name) {
            Some(item) => {
                item.sales_invoice = sales_invoice.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove the currently selected row
    pub fn remove_selected_item(&mut self) -> Option<ManifestItem> {
        if self.selected_item >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(self.selected_item);
        if self.selected_item > 0 && self.selected_item >= self.items.len() {
            self.selected_item -= 1;
        }
        self.refresh_items();
        Some(removed)
    }

    /// Ask the renderer to redraw the item list.
    ///
    /// The draw loop compares [`items_revision`](Self::items_revision) with
    /// the revision it last drew and redraws when they differ.
    pub fn refresh_items(&mut self) {
        self.items_revision = self.items_revision.wrapping_add(1);
        if !self.items.is_empty() && self.selected_item >= self.items.len() {
            self.selected_item = self.items.len() - 1;
        }
    }

    pub fn select_next_item(&mut self) {
        if self.selected_item + 1 < self.items.len() {
            self.selected_item += 1;
        }
    }

    pub fn select_prev_item(&mut self) {
        self.selected_item = self.selected_item.saturating_sub(1);
    }

    pub fn active_field_mut(&mut self) -> &mut FormField {
        match self.active_field {
            ActiveField::ShippingProvider => &mut self.shipping_provider_code,
            ActiveField::Channel => &mut self.channel_id,
            ActiveField::ScanBarcode => &mut self.scan_barcode,
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }
}

impl Default for ManifestForm {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form_with(invoices: &[&str]) -> ManifestForm {
        let mut form = ManifestForm::new("DELHIVERY".to_string(), "AMZ".to_string());
        for invoice in invoices {
            let name = form.add_manifest_item().name.clone();
            form.set_sales_invoice(&name, invoice);
        }
        form
    }

    #[test]
    fn test_new_form_defaults() {
        let form = ManifestForm::new("DELHIVERY".to_string(), "AMZ".to_string());
        assert_eq!(form.shipping_provider_code.value(), "DELHIVERY");
        assert_eq!(form.channel_id.value(), "AMZ");
        assert!(form.scan_barcode.is_blank());
        assert_eq!(form.active_field, ActiveField::ScanBarcode);
        assert!(form.items().is_empty());
        assert_eq!(form.items_revision(), 0);
    }

    #[test]
    fn test_add_item_generates_unique_row_names() {
        let mut form = ManifestForm::default();
        let first = form.add_manifest_item().name.clone();
        let second = form.add_manifest_item().name.clone();
        assert_ne!(first, second);
        assert_eq!(form.items().len(), 2);
    }

    #[test]
    fn test_set_sales_invoice_by_row_name() {
        let mut form = ManifestForm::default();
        let name = form.add_manifest_item().name.clone();
        assert!(form.set_sales_invoice(&name, "SINV-0007"));
        assert_eq!(form.items()[0].sales_invoice, "SINV-0007");
        assert!(form.contains_invoice("SINV-0007"));
    }

    #[test]
    fn test_set_sales_invoice_unknown_row() {
        let mut form = ManifestForm::default();
        assert!(!form.set_sales_invoice("missing", "SINV-0007"));
    }

    #[test]
    fn test_contains_invoice() {
        let form = form_with(&["SINV-0001", "SINV-0002"]);
        assert!(form.contains_invoice("SINV-0002"));
        assert!(!form.contains_invoice("SINV-0003"));
    }

    #[test]
    fn test_refresh_bumps_revision() {
        let mut form = ManifestForm::default();
        form.refresh_items();
        form.refresh_items();
        assert_eq!(form.items_revision(), 2);
    }

    #[test]
    fn test_remove_selected_item_keeps_selection_in_bounds() {
        let mut form = form_with(&["SINV-0001", "SINV-0002"]);
        form.select_next_item();
        let removed = form.remove_selected_item().map(|i| i.sales_invoice);
        assert_eq!(removed, Some("SINV-0002".to_string()));
        assert_eq!(form.selected_item, 0);
        assert_eq!(form.items().len(), 1);
        assert_eq!(form.items_revision(), 1);
    }

    #[test]
    fn test_remove_from_empty_list() {
        let mut form = ManifestForm::default();
        assert!(form.remove_selected_item().is_none());
    }

    #[test]
    fn test_selection_clamps() {
        let mut form = form_with(&["SINV-0001"]);
        form.select_next_item();
        assert_eq!(form.selected_item, 0);
        form.select_prev_item();
        assert_eq!(form.selected_item, 0);
    }

    #[test]
    fn test_field_cycle() {
        let mut form = ManifestForm::default();
        form.next_field();
        assert_eq!(form.active_field, ActiveField::ShippingProvider);
        form.active_field_mut().push_char('X');
        assert_eq!(form.shipping_provider_code.value(), "X");
        form.prev_field();
        assert_eq!(form.active_field, ActiveField::ScanBarcode);
    }
}
