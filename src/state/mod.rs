//! Application state module

mod field;
mod manifest_form;
mod toast;

pub use field::FormField;
pub use manifest_form::{ActiveField, ManifestForm};
pub use toast::{Notifier, Severity, ToastQueue};

#[cfg(test)]
pub use toast::MockNotifier;
