//! Form field value objects

/// A single-line text field on the manifest form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Field name as the form engine knows it (e.g. `scan_barcode`)
    pub name: &'static str,
    pub label: &'static str,
    value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self::with_value(name, label, String::new())
    }

    /// Create a field with an initial value
    pub fn with_value(name: &'static str, label: &'static str, value: String) -> Self {
        Self { name, label, value }
    }

    /// Current raw value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// True when the value is empty or only whitespace
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_blank() {
        let field = FormField::new("scan_barcode", "Scan Barcode");
        assert_eq!(field.value(), "");
        assert!(field.is_blank());
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let field = FormField::with_value("scan_barcode", "Scan Barcode", " \t ".to_string());
        assert!(field.is_blank());
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::new("channel_id", "Channel");
        field.push_char('A');
        field.push_char('M');
        field.push_char('Z');
        field.pop_char();
        assert_eq!(field.value(), "AM");
        assert!(!field.is_blank());
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::new("channel_id", "Channel");
        field.pop_char();
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::with_value("scan_barcode", "Scan", "PKG-001".to_string());
        field.clear();
        assert!(field.is_blank());
    }
}
