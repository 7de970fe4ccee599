//! Barcode scan handling for the manifest form

mod handler;
mod reset;

pub use handler::{BarcodeScanHandler, PendingScan, ScanOutcome, ScanResponse};

#[cfg(test)]
pub use handler::SUPERSEDED_MESSAGE;
