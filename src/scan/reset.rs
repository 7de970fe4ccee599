//! Drop guard that resets the scan field

use crate::state::ManifestForm;
use std::ops::{Deref, DerefMut};

/// Clears the scan field and refreshes the item list when dropped.
///
/// Holds the form for the duration of a scan so the reset runs on every
/// exit path, including early returns, `?` and unwinding.
pub struct ScanReset<'a> {
    form: &'a mut ManifestForm,
    armed: bool,
}

impl<'a> ScanReset<'a> {
    pub fn new(form: &'a mut ManifestForm) -> Self {
        Self { form, armed: true }
    }

    /// Skip the reset; the scan continues elsewhere and resets there
    pub fn disarm(mut self) {
        self.armed = false;
    }
}

impl Deref for ScanReset<'_> {
    type Target = ManifestForm;

    fn deref(&self) -> &ManifestForm {
        self.form
    }
}

impl DerefMut for ScanReset<'_> {
    fn deref_mut(&mut self) -> &mut ManifestForm {
        self.form
    }
}

impl Drop for ScanReset<'_> {
    fn drop(&mut self) {
        if self.armed {
            tracing::trace!(field = self.form.scan_barcode.name, "Resetting scan field");
            self.form.scan_barcode.clear();
            self.form.refresh_items();
        }
    }
}
