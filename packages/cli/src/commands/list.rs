use super::builtin_registry;
use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Debug, Args)]
pub struct ListArgs {}

pub fn list(_args: ListArgs) -> Result<()> {
    let registry = builtin_registry()?;

    println!("{}", "Available generators:".bright_blue().bold());
    for name in registry.names() {
        println!("  {} {}", "•".green(), name);
    }

    Ok(())
}
