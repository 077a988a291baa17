pub mod db;
pub mod animal;
