//! CLI command handlers. Each command is in its own file.

mod completions;
mod man;
mod pack;
mod plan;

pub use completions::run_completions;
pub use man::run_man;
pub use pack::run_pack;
pub use plan::run_plan;

use zipname_core::config::ZipnameConfig;
use zipname_core::{RenameEngine, RenamePolicy};

use crate::cli::PolicyArgs;

/// Engine for flags layered over the config defaults.
pub(crate) fn engine_for(cfg: &ZipnameConfig, args: &PolicyArgs) -> RenameEngine {
    let raw = args.to_raw().or(cfg.defaults.to_raw());
    let policy = RenamePolicy::from_raw(&raw);
    tracing::debug!(?policy, "effective rename policy");
    RenameEngine::new(policy)
}
