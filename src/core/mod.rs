pub mod persistence;
pub mod registrar;
