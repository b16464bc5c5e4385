//! Form state management and the registration form

use super::field::FormField;
use crate::validate::FieldKind;
use std::collections::HashMap;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Volunteer registration form: three required fields, two optional masked
/// ones, and a buttons row.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: FormField,
    pub email: FormField,
    pub document: FormField,
    pub phone: FormField,
    pub postal_code: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Clear, 1=Submit)
    pub selected_button: usize,
}

/// Index of the buttons row (one past the last field).
const BUTTONS_ROW: usize = 5;

impl RegisterForm {
    pub fn new(phone_required: bool, postal_code_required: bool) -> Self {
        Self {
            name: FormField::text("name", "Full name"),
            email: FormField::text("email", "Email"),
            document: FormField::new("document", "Document number", FieldKind::TaxId, true),
            phone: FormField::new("phone", "Phone", FieldKind::Phone, phone_required),
            postal_code: FormField::new(
                "postal_code",
                "Postal code",
                FieldKind::PostalCode,
                postal_code_required,
            ),
            active_field_index: 0,
            selected_button: 1, // Default to "Submit"
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        self.next_button();
    }

    fn fields_mut(&mut self) -> [&mut FormField; 5] {
        [
            &mut self.name,
            &mut self.email,
            &mut self.document,
            &mut self.phone,
            &mut self.postal_code,
        ]
    }

    /// Run blur validation on every field. Returns true when the whole form
    /// is submittable; failing fields keep their inline error text.
    pub fn validate_all(&mut self) -> bool {
        let mut ok = true;
        for field in self.fields_mut() {
            ok &= field.validate().is_valid();
        }
        ok
    }

    /// Collect `{field name -> masked value}` for persistence.
    pub fn to_record_values(&self) -> HashMap<String, String> {
        [
            &self.name,
            &self.email,
            &self.document,
            &self.phone,
            &self.postal_code,
        ]
        .into_iter()
        .map(|f| (f.name.clone(), f.value().to_string()))
        .collect()
    }

    pub fn clear(&mut self) {
        for field in self.fields_mut() {
            field.clear();
        }
        self.active_field_index = 0;
        self.selected_button = 1;
    }

    /// Blur the field being left when focus moves, so its error shows up
    /// without waiting for submit.
    pub fn blur_active_field(&mut self) {
        let index = self.active_field_index;
        if let Some(field) = self.field_at_mut(index) {
            field.validate();
        }
    }

    fn field_at_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.document),
            3 => Some(&mut self.phone),
            4 => Some(&mut self.postal_code),
            _ => None,
        }
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Form for RegisterForm {
    fn field_count(&self) -> usize {
        6 // name, email, document, phone, postal_code, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field_index;
        self.field_at_mut(index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.document),
            3 => Some(&self.phone),
            4 => Some(&self.postal_code),
            // Index 5 is the buttons row, no FormField for it
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> RegisterForm {
        let mut form = RegisterForm::default();
        form.name.set_value("Maria da Silva");
        form.email.set_value("maria@example.org");
        form.document.set_value("52998224725");
        form
    }

    #[test]
    fn new_has_correct_defaults() {
        let form = RegisterForm::default();
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.selected_button, 1); // Submit button
        assert_eq!(form.name.name, "name");
        assert_eq!(form.document.name, "document");
        assert!(!form.phone.required);
        assert!(!form.postal_code.required);
    }

    #[test]
    fn required_switches_apply_to_optional_fields() {
        let form = RegisterForm::new(true, true);
        assert!(form.phone.required);
        assert!(form.postal_code.required);
    }

    #[test]
    fn field_count_and_cycling() {
        let mut form = RegisterForm::default();
        assert_eq!(form.field_count(), 6);
        for _ in 0..6 {
            form.next_field();
        }
        assert_eq!(form.active_field_index, 0); // Wrapped back
        form.prev_field();
        assert_eq!(form.active_field_index, 5); // Wrapped to buttons row
        assert!(form.is_buttons_row_active());
    }

    #[test]
    fn set_active_field_clamps() {
        let mut form = RegisterForm::default();
        form.set_active_field(100);
        assert_eq!(form.active_field_index, 5);
    }

    #[test]
    fn get_field_returns_correct_fields() {
        let form = RegisterForm::default();
        assert_eq!(form.get_field(0).unwrap().name, "name");
        assert_eq!(form.get_field(1).unwrap().name, "email");
        assert_eq!(form.get_field(2).unwrap().name, "document");
        assert_eq!(form.get_field(3).unwrap().name, "phone");
        assert_eq!(form.get_field(4).unwrap().name, "postal_code");
        assert!(form.get_field(5).is_none()); // buttons row
    }

    #[test]
    fn buttons_wrap_both_ways() {
        let mut form = RegisterForm::default();
        form.next_button();
        assert_eq!(form.selected_button, 0);
        form.next_button();
        assert_eq!(form.selected_button, 1);
        form.prev_button();
        assert_eq!(form.selected_button, 0);
    }

    #[test]
    fn validate_all_flags_every_failing_field() {
        let mut form = RegisterForm::default();
        form.phone.set_value("119876543");
        assert!(!form.validate_all());
        assert!(form.name.error.is_some());
        assert!(form.email.error.is_some());
        assert!(form.document.error.is_some());
        assert!(form.phone.error.is_some());
        assert!(form.postal_code.error.is_none()); // optional and empty
    }

    #[test]
    fn validate_all_passes_with_required_fields_filled() {
        let mut form = filled_form();
        assert!(form.validate_all());
        assert!(form.name.error.is_none());
        assert!(form.document.error.is_none());
    }

    #[test]
    fn to_record_values_uses_masked_values() {
        let mut form = filled_form();
        form.phone.set_value("11987654321");
        form.postal_code.set_value("01310100");
        let values = form.to_record_values();
        assert_eq!(values["document"], "529.982.247-25");
        assert_eq!(values["phone"], "(11) 98765-4321");
        assert_eq!(values["postal_code"], "01310-100");
        assert_eq!(values["name"], "Maria da Silva");
        assert_eq!(values.len(), 5);
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = filled_form();
        form.active_field_index = 3;
        form.validate_all();
        form.clear();
        assert_eq!(form.name.value(), "");
        assert_eq!(form.document.value(), "");
        assert_eq!(form.active_field_index, 0);
        assert!(form.document.error.is_none());
    }
}
