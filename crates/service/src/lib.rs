//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod animal;
#[cfg(test)]
pub mod test_support;
