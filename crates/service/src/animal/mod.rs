//! Animal module: three-layer architecture (domain, repository, service).
//!
//! Every kind shares one record shape and one set of rules; the kind only
//! decides the `group` label that scopes storage.

pub mod domain;
pub mod validator;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Animal, AnimalInput, AnimalKind, Cat, Horse};
pub use service::AnimalService;
