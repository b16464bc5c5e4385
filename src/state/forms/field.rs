//! Form field value objects

use crate::validate::{self, FieldKind, Verdict};

/// A single form field: configuration, the masked value, and its current
/// inline error state.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    value: String,
    verdict: Verdict,
    /// Error text shown under the field, set on blur or submit.
    pub error: Option<String>,
}

impl FormField {
    pub fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        let (value, verdict) = validate::evaluate("", kind, required);
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
            value,
            verdict,
            error: None,
        }
    }

    /// Create a required free-text field.
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text, true)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Push a character, re-masking the whole value. Typing clears any stale
    /// error; the message comes back on blur if the field still fails.
    pub fn push_char(&mut self, c: char) {
        let mut raw = self.value.clone();
        raw.push(c);
        self.set_value(&raw);
        self.error = None;
    }

    /// Remove the last character and re-mask. Masked values never end in
    /// punctuation, so this always drops a digit.
    pub fn pop_char(&mut self) {
        let mut raw = self.value.clone();
        raw.pop();
        self.set_value(&raw);
        self.error = None;
    }

    /// Replace the value wholesale (paste path), running the mask once.
    pub fn set_value(&mut self, raw: &str) {
        let (masked, verdict) = validate::evaluate(raw, self.kind, self.required);
        self.value = masked;
        self.verdict = verdict;
    }

    pub fn clear(&mut self) {
        self.set_value("");
        self.error = None;
    }

    /// Blur semantics: re-evaluate and surface the error text when the field
    /// does not pass. Returns the final verdict.
    pub fn validate(&mut self) -> Verdict {
        let raw = self.value.clone();
        self.set_value(&raw);
        self.error = if self.verdict.is_valid() {
            None
        } else {
            Some(self.error_message())
        };
        self.verdict
    }

    fn error_message(&self) -> String {
        if self.required && self.value.trim().is_empty() {
            return "This field is required.".to_string();
        }
        match (self.kind, self.verdict) {
            (_, Verdict::Valid) => String::new(),
            (FieldKind::Text, _) => "This field is required.".to_string(),
            (FieldKind::TaxId, Verdict::Incomplete) => {
                "Document number is incomplete.".to_string()
            }
            (FieldKind::TaxId, _) => "Invalid document number.".to_string(),
            (FieldKind::Phone, _) => {
                "Invalid phone number. Format: (00) 00000-0000.".to_string()
            }
            (FieldKind::PostalCode, _) => {
                "Invalid postal code. Format: 00000-000.".to_string()
            }
        }
    }

    /// Value shown in the widget.
    pub fn display_value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn push_char_applies_mask_incrementally() {
        let mut field = FormField::new("document", "Document", FieldKind::TaxId, true);
        for c in "52998224725".chars() {
            field.push_char(c);
        }
        assert_eq!(field.value(), "529.982.247-25");
        assert_eq!(field.verdict(), Verdict::Valid);
    }

    #[test]
    fn push_char_ignores_non_digits_on_masked_fields() {
        let mut field = FormField::new("postal_code", "Postal code", FieldKind::PostalCode, false);
        for c in "01a31x0-100".chars() {
            field.push_char(c);
        }
        assert_eq!(field.value(), "01310-100");
    }

    #[test]
    fn pop_char_removes_a_digit_not_just_punctuation() {
        let mut field = FormField::new("document", "Document", FieldKind::TaxId, true);
        field.set_value("5299");
        assert_eq!(field.value(), "529.9");
        field.pop_char();
        assert_eq!(field.value(), "529");
        field.pop_char();
        assert_eq!(field.value(), "52");
    }

    #[test]
    fn typing_clears_error_until_next_validate() {
        let mut field = FormField::new("document", "Document", FieldKind::TaxId, true);
        field.set_value("123");
        field.validate();
        assert_eq!(
            field.error.as_deref(),
            Some("Document number is incomplete.")
        );
        field.push_char('4');
        assert!(field.error.is_none());
    }

    #[test]
    fn validate_surfaces_required_error_on_empty_text() {
        let mut field = FormField::text("name", "Full name");
        assert_eq!(field.validate(), Verdict::Invalid);
        assert_eq!(field.error.as_deref(), Some("This field is required."));
        field.set_value("Maria");
        assert_eq!(field.validate(), Verdict::Valid);
        assert!(field.error.is_none());
    }

    #[test]
    fn optional_field_validates_clean_when_empty() {
        let mut field = FormField::new("phone", "Phone", FieldKind::Phone, false);
        assert_eq!(field.validate(), Verdict::Valid);
        assert!(field.error.is_none());
        field.set_value("119876543");
        assert_eq!(field.validate(), Verdict::Invalid);
        assert_eq!(
            field.error.as_deref(),
            Some("Invalid phone number. Format: (00) 00000-0000.")
        );
    }

    #[test]
    fn clear_resets_value_and_error() {
        let mut field = FormField::new("document", "Document", FieldKind::TaxId, true);
        field.set_value("123");
        field.validate();
        field.clear();
        assert_eq!(field.value(), "");
        assert!(field.error.is_none());
    }
}
