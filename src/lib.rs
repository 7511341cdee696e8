pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod history;
pub mod logging;
pub mod product;

pub use catalog::Catalog;
pub use config::{CliArgs, ConsoleConfig, IdMode};
pub use console::Console;
pub use error::{CatalogError, ConsoleError, InputError};
pub use product::{Product, ProductId};
