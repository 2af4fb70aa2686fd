//! retoc CLI - batch outline inference over fragment dump files

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use retoc::{
    infer, to_json, FragmentProvider, InferenceConfig, JsonFormat, JsonFragmentProvider,
    TextFragment,
};

#[derive(Parser)]
#[command(name = "retoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Infer document outlines from layout fragment dumps", long_about = None)]
struct Cli {
    /// Input fragment dump (*.json) or directory of dumps
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output directory for outline JSON files
    #[arg(short, long, value_name = "DIR", default_value = "output")]
    output: PathBuf,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Clustering seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Suppress per-file status lines
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let files = discover_inputs(&cli.input)?;
    if files.is_empty() {
        anyhow::bail!("no .json fragment dumps found in {}", cli.input.display());
    }

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;

    let config = InferenceConfig::new().with_cluster_seed(cli.seed);
    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let pb = progress_bar(files.len() as u64, cli.quiet);

    // Read every dump first; the inference batch then runs one rayon worker
    // per document.
    let mut documents: Vec<(PathBuf, Option<Vec<TextFragment>>)> = Vec::new();
    for path in files {
        let provider = JsonFragmentProvider::new(&path);
        match provider.fragments() {
            Ok(fragments) => documents.push((path, Some(fragments))),
            Err(e) => {
                log::warn!("{}: {}", path.display(), e);
                documents.push((path, None));
            }
        }
    }

    let batch: Vec<Vec<TextFragment>> = documents
        .iter()
        .map(|(_, fragments)| fragments.clone().unwrap_or_default())
        .collect();
    let results = infer::infer_batch(&batch, &config);

    let mut ok = 0usize;
    let mut failed = 0usize;
    for ((path, fragments), mut result) in documents.into_iter().zip(results) {
        pb.inc(1);

        if fragments.is_none() {
            failed += 1;
            if !cli.quiet {
                pb.println(format!(
                    "{} {}",
                    "[✗] Failed:".red(),
                    path.display()
                ));
            }
            continue;
        }

        // Never emit a blank display title when the file name can stand in.
        if result.title.is_empty() {
            result.title = file_stem(&path);
        }

        let out_path = cli.output.join(format!("{}.json", file_stem(&path)));
        match to_json(&result, format)
            .map_err(anyhow::Error::from)
            .and_then(|json| fs::write(&out_path, json).map_err(anyhow::Error::from))
        {
            Ok(()) => {
                ok += 1;
                if !cli.quiet {
                    pb.println(format!(
                        "{} {} ({} headings)",
                        "[✓] Processed:".green(),
                        path.display(),
                        result.outline.len()
                    ));
                }
            }
            Err(e) => {
                failed += 1;
                if !cli.quiet {
                    pb.println(format!("{} {}: {:#}", "[✗] Failed:".red(), path.display(), e));
                }
            }
        }
    }

    pb.finish_and_clear();
    if !cli.quiet {
        println!("{} processed, {} failed", ok, failed);
    }
    Ok(())
}

/// Collect input dump files: a single file as-is, a directory's *.json
/// entries sorted by name.
fn discover_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = fs::read_dir(input)
        .with_context(|| format!("failed to read {}", input.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("json"))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string()
}

fn progress_bar(len: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_discover_inputs_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.json", "a.json", "notes.txt"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let files = discover_inputs(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_discover_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        File::create(&path).unwrap();

        let files = discover_inputs(&path).unwrap();
        assert_eq!(files, vec![path]);
    }

    #[test]
    fn test_end_to_end_run() {
        let dir = tempfile::tempdir().unwrap();
        let input_dir = dir.path().join("in");
        let output_dir = dir.path().join("out");
        fs::create_dir_all(&input_dir).unwrap();

        let dump = r#"[
            {"text":"Coastal Erosion Survey Results","page":1,"font_size":22.0,"y_position":50.0},
            {"text":"1. Introduction","page":1,"font_size":15.0,"y_position":140.0},
            {"text":"the measurements were taken quarterly.","page":1,"font_size":10.0,"y_position":200.0},
            {"text":"the measurements were taken quarterly.","page":1,"font_size":10.0,"y_position":214.0},
            {"text":"the measurements were taken quarterly.","page":1,"font_size":10.0,"y_position":228.0}
        ]"#;
        let mut f = File::create(input_dir.join("survey.json")).unwrap();
        f.write_all(dump.as_bytes()).unwrap();

        let cli = Cli {
            input: input_dir,
            output: output_dir.clone(),
            compact: true,
            seed: 42,
            quiet: true,
        };
        run(&cli).unwrap();

        let written = fs::read_to_string(output_dir.join("survey.json")).unwrap();
        let result: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(result["title"], "Coastal Erosion Survey Results");
        assert_eq!(result["outline"][0]["level"], "H1");
        assert_eq!(result["outline"][0]["text"], "1. Introduction");
    }

    #[test]
    fn test_stem_fallback_for_empty_title() {
        let dir = tempfile::tempdir().unwrap();
        let input_dir = dir.path().join("in");
        let output_dir = dir.path().join("out");
        fs::create_dir_all(&input_dir).unwrap();

        // No fragment qualifies as title or heading.
        let dump = r#"[
            {"text":"42","page":1,"font_size":10.0,"y_position":700.0}
        ]"#;
        fs::write(input_dir.join("sparse.json"), dump).unwrap();

        let cli = Cli {
            input: input_dir,
            output: output_dir.clone(),
            compact: true,
            seed: 42,
            quiet: true,
        };
        run(&cli).unwrap();

        let written = fs::read_to_string(output_dir.join("sparse.json")).unwrap();
        let result: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(result["title"], "sparse");
        assert_eq!(result["outline"].as_array().unwrap().len(), 0);
    }
}
