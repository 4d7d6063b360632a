pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::console::Console;
pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::{persistence::EnrollmentStore, registrar::Registrar};
pub use domain::model::{Person, PersonDetails, Student};
pub use domain::record::Record;
pub use utils::error::{ErrorCategory, Field, RegistrarError, Result};
