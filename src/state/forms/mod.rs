//! Form state: field value objects and the registration form

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Form, RegisterForm};
