//! Storage module: the durable key-value collaborator and registration records

mod json;
mod records;
mod traits;

pub use json::JsonFileStorage;
pub use records::{append_registration, load_registrations, RegistrationRecord};
pub use traits::Storage;

#[cfg(test)]
pub use traits::MockStorage;
