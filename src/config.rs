//! Command-line and environment configuration
use clap::{Parser, ValueEnum};

/// How new product ids are obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IdMode {
    /// The operator types the id
    #[default]
    Manual,
    /// The catalog hands out `001`, `002`, ...
    Sequential,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "inventory", about = "Console inventory tracker", version)]
pub struct CliArgs {
    #[arg(
        long,
        env = "INVENTORY_ID_MODE",
        value_enum,
        value_name = "MODE",
        default_value_t = IdMode::Manual,
        help = "Whether product ids are typed in or generated"
    )]
    pub id_mode: IdMode,

    #[arg(
        long,
        env = "INVENTORY_LOG",
        value_name = "FILTER",
        default_value = "warn",
        help = "Log filter directive used when RUST_LOG is unset"
    )]
    pub log_filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsoleConfig {
    pub id_mode: IdMode,
}

impl ConsoleConfig {
    pub fn from_args(args: &CliArgs) -> Self {
        Self {
            id_mode: args.id_mode,
        }
    }
}
