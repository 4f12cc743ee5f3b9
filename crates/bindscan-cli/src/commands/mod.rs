pub mod config;
pub mod schema;
pub mod scan;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Scan(args) => scan::handle(&args, flags),
        Commands::Config => config::handle(flags),
        Commands::Schema => schema::handle(),
    }
}
