use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

const EXAMPLE_MODEL: &str = r#"{
  "namespace": "com.example",
  "version": "0.1.0",
  "elements": [
    {
      "kind": "class",
      "name": "Trade",
      "definition": "A trade record",
      "attributes": [
        { "name": "id", "type": "string", "card": { "inf": 1, "sup": 1 } },
        { "name": "tradeDate", "type": "date", "card": { "inf": 1, "sup": 1 } },
        { "name": "legs", "type": "Leg", "card": { "inf": 1, "sup": null } }
      ]
    },
    {
      "kind": "class",
      "name": "Leg",
      "attributes": [
        { "name": "notional", "type": "number", "card": { "inf": 1, "sup": 1 } }
      ]
    }
  ]
}
"#;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Generator to enable (may be repeated)
    #[arg(short, long, default_value = "Sample")]
    pub generator: Vec<String>,

    /// Model directory
    #[arg(short, long, default_value = "model")]
    pub model_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing modelgen project...".bright_blue().bold());

    let model_dir = PathBuf::from(cwd).join(&args.model_dir);
    if !model_dir.exists() {
        fs::create_dir_all(&model_dir)?;
        println!("  {} Created {}/", "✓".green(), args.model_dir);
    }

    let example_file = model_dir.join("example.json");
    if !example_file.exists() {
        fs::write(&example_file, EXAMPLE_MODEL)?;
        println!("  {} Created example.json", "✓".green());
    }

    let config = Config {
        model_dir: args.model_dir.clone(),
        generators: args.generator.clone(),
        ..Config::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/example.json", args.model_dir);
    println!("  2. Run: modelgen generate");
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelgen_model::ModelDocument;

    fn args(force: bool) -> InitArgs {
        InitArgs {
            generator: vec!["Sample".to_string()],
            model_dir: "model".to_string(),
            force,
        }
    }

    #[test]
    fn test_init_creates_config_and_example() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        init(args(false), cwd).unwrap();

        let config = Config::load(cwd).unwrap();
        assert_eq!(config.generators, vec!["Sample"]);

        let doc = ModelDocument::load(dir.path().join("model/example.json")).unwrap();
        assert_eq!(doc.classes().count(), 2);
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "outDir": "mine" }"#).unwrap();

        init(args(false), cwd).unwrap();
        assert_eq!(Config::load(cwd).unwrap().out_dir, "mine");

        init(args(true), cwd).unwrap();
        assert_eq!(Config::load(cwd).unwrap().out_dir, "generated");
    }
}
