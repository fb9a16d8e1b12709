//! `zipname plan <files>...` – dry run: show the rename mapping only.

use anyhow::Result;
use std::path::PathBuf;
use zipname_core::config::ZipnameConfig;
use zipname_core::upload::upload_name;
use zipname_core::RenamedName;

use super::engine_for;
use crate::cli::PolicyArgs;

/// Renames the file names of `files` without touching their contents.
pub fn plan_names(cfg: &ZipnameConfig, files: &[PathBuf], policy: &PolicyArgs) -> Vec<RenamedName> {
    let engine = engine_for(cfg, policy);
    let names: Vec<String> = files.iter().map(|p| upload_name(p)).collect();
    engine.plan(names.iter().map(String::as_str))
}

pub fn run_plan(cfg: &ZipnameConfig, files: &[PathBuf], policy: &PolicyArgs, json: bool) -> Result<()> {
    let mapping = plan_names(cfg, files, policy);
    if json {
        println!("{}", serde_json::to_string_pretty(&mapping)?);
        return Ok(());
    }
    if mapping.is_empty() {
        println!("No files with usable names.");
    } else {
        for r in &mapping {
            println!("{}  ->  {}", r.source_name, r.name);
        }
    }
    let skipped = files.len() - mapping.len();
    if skipped > 0 {
        println!("{skipped} file(s) skipped (no usable name).");
    }
    Ok(())
}
