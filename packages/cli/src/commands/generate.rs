use super::builtin_registry;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use modelgen_common::{write_files, FileSystemSink, GeneratorRegistry};
use modelgen_model::{ModelDocument, Packages};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Generator to run (may be repeated; overrides config)
    #[arg(short, long)]
    pub generator: Vec<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Version label embedded in generated files (overrides model and config)
    #[arg(long)]
    pub model_version: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,
}

pub fn generate(args: GenerateArgs, cwd: &str) -> Result<()> {
    let project_dir = PathBuf::from(cwd).join(&args.path);
    let project = project_dir.display().to_string();

    let config = Config::load(&project)?;
    let model_dir = config.get_model_dir(&project);

    if !model_dir.exists() {
        return Err(anyhow!("Model directory does not exist: {:?}", model_dir));
    }

    let registry = builtin_registry()?;
    let generators = selected_generators(&args, &config, &registry)?;

    println!("{}", "🔨 Generating from model files...".bright_blue().bold());

    let model_files = find_model_files(&model_dir)?;

    if model_files.is_empty() {
        println!("{}", "⚠️  No model files found".yellow());
        return Ok(());
    }

    println!("Found {} files", model_files.len());

    let out_dir = match &args.out_dir {
        Some(out) => project_dir.join(out),
        None => config.get_out_dir(&project),
    };

    let mut success_count = 0;
    let mut error_count = 0;

    for model_file in &model_files {
        let relative_path = model_file.strip_prefix(&model_dir).unwrap_or(model_file);
        match generate_file(model_file, &args, &config, &registry, &generators, &out_dir) {
            Ok(count) => {
                success_count += 1;
                println!(
                    "  {} {} → {} files",
                    "✓".green(),
                    relative_path.display(),
                    count
                );
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    e.to_string().red()
                );
            }
        }
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Processed {} model files successfully",
            "✅".green(),
            success_count
        );
    } else {
        println!(
            "{} Processed {} model files, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
    }

    Ok(())
}

/// Generators named on the command line, else those in the config
fn selected_generators(
    args: &GenerateArgs,
    config: &Config,
    registry: &GeneratorRegistry,
) -> Result<Vec<String>> {
    let generators = if args.generator.is_empty() {
        config.generators.clone()
    } else {
        args.generator.clone()
    };

    if generators.is_empty() {
        return Err(anyhow!("No generators selected"));
    }

    for name in &generators {
        if registry.get(name).is_none() {
            return Err(anyhow!(
                "Unknown generator: {}. Available: {}",
                name,
                registry.names().join(", ")
            ));
        }
    }

    Ok(generators)
}

fn find_model_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json") {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Run every selected generator over one model file, returning the number
/// of files produced
fn generate_file(
    file_path: &Path,
    args: &GenerateArgs,
    config: &Config,
    registry: &GeneratorRegistry,
    generators: &[String],
    out_dir: &Path,
) -> Result<usize> {
    let document = ModelDocument::load(file_path)?;

    let packages = match &config.namespace {
        Some(namespace) => Packages::new(namespace.as_str()),
        None => document.packages(),
    };
    let version = args
        .model_version
        .as_deref()
        .or(config.version.as_deref())
        .unwrap_or(&document.version);

    tracing::debug!(
        file = %file_path.display(),
        namespace = %packages.namespace(),
        version = %version,
        "Loaded model"
    );

    let mut count = 0;
    for name in generators {
        let files = registry.run(name, &packages, &document.elements, version)?;

        if args.stdout {
            for (path, content) in &files {
                println!("// {}", path);
                println!("{}", content);
            }
            count += files.len();
        } else {
            let mut sink = FileSystemSink::new(out_dir);
            count += write_files(&mut sink, &files)?.len();
        }
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG_NAME;
    use std::fs;

    const MODEL: &str = r#"{
        "namespace": "com.example",
        "version": "1.0",
        "elements": [
            { "kind": "class", "name": "Trade", "definition": "A trade record", "attributes": [
                { "name": "id", "type": "string", "card": { "inf": 1, "sup": 1 } },
                { "name": "legs", "type": "Leg", "card": { "inf": 0, "sup": null } }
            ] }
        ]
    }"#;

    fn args() -> GenerateArgs {
        GenerateArgs {
            path: ".".to_string(),
            generator: vec![],
            out_dir: None,
            model_version: None,
            stdout: false,
        }
    }

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("model/nested")).unwrap();
        fs::write(dir.path().join("model/trade.json"), MODEL).unwrap();
        fs::write(dir.path().join("model/notes.txt"), "ignored").unwrap();
        dir
    }

    #[test]
    fn test_generate_writes_stubs() {
        let dir = project();
        generate(args(), dir.path().to_str().unwrap()).unwrap();

        let stub =
            fs::read_to_string(dir.path().join("generated/com/example/model/Trade.sample")).unwrap();
        assert!(stub.contains("/** A trade record — version 1.0 */"));
        assert!(stub.contains("\tString id\n"));
        assert!(stub.contains("\tList<Leg> legs\n"));
    }

    #[test]
    fn test_config_and_flag_overrides() {
        let dir = project();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "namespace": "org.acme", "version": "9.9" }"#,
        )
        .unwrap();

        let mut args = args();
        args.out_dir = Some("dist".to_string());
        args.model_version = Some("2.0".to_string());
        generate(args, dir.path().to_str().unwrap()).unwrap();

        let stub = fs::read_to_string(dir.path().join("dist/org/acme/model/Trade.sample")).unwrap();
        assert!(stub.starts_with("package org.acme.model\n"));
        assert!(stub.contains("version 2.0"));
    }

    #[test]
    fn test_invalid_model_file_does_not_abort_run() {
        let dir = project();
        fs::write(dir.path().join("model/nested/broken.json"), "{ nope").unwrap();

        generate(args(), dir.path().to_str().unwrap()).unwrap();
        assert!(dir
            .path()
            .join("generated/com/example/model/Trade.sample")
            .exists());
    }

    #[test]
    fn test_unknown_generator_rejected() {
        let dir = project();
        let mut args = args();
        args.generator = vec!["Cobol".to_string()];

        let err = generate(args, dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Unknown generator: Cobol"));
    }

    #[test]
    fn test_missing_model_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate(args(), dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Model directory does not exist"));
    }

    #[test]
    fn test_find_model_files_sorted_json_only() {
        let dir = project();
        fs::write(dir.path().join("model/nested/a.json"), MODEL).unwrap();

        let files = find_model_files(&dir.path().join("model")).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "trade.json"]);
    }
}
