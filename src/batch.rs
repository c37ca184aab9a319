//! Whole-folder runs: find the input files, enhance each one, then move the
//! originals and their enhanced copies into the output folder.

use crate::error::{Result, SubglossError};
use crate::pipeline::{Enhancer, ProcessedFile};
use console::style;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const INPUT_DIR_NAME: &str = "input";
const SUBTITLE_EXTENSION: &str = "srt";

/// A file that could not be enhanced, with the reason.
#[derive(Debug, Clone)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: String,
}

/// What happened to every file of a run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub processed: Vec<ProcessedFile>,
    pub failed: Vec<FailedFile>,
    pub move_errors: Vec<String>,
}

/// Find a directory named `input` (any case) directly under `root`.
pub fn find_input_dir(root: &Path) -> Result<Option<PathBuf>> {
    let mut entries: Vec<_> = fs::read_dir(root)?.collect::<std::io::Result<_>>()?;
    entries.sort_by_key(|e| e.file_name());

    Ok(entries
        .into_iter()
        .map(|e| e.path())
        .find(|path| {
            path.is_dir()
                && path
                    .file_name()
                    .map(|n| n.to_string_lossy().eq_ignore_ascii_case(INPUT_DIR_NAME))
                    .unwrap_or(false)
        }))
}

/// List the `.srt` files (any case) in `dir`, sorted by name.
pub fn discover_srt_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_file() {
            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                if ext.eq_ignore_ascii_case(SUBTITLE_EXTENSION) {
                    files.push(path);
                }
            }
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Locate the input folder under `root` and its subtitle files.
pub fn discover(root: &Path) -> Result<(PathBuf, Vec<PathBuf>)> {
    let input_dir = find_input_dir(root)?.ok_or_else(|| {
        SubglossError::Discovery(format!("no '{}' folder in {}", INPUT_DIR_NAME, root.display()))
    })?;

    let files = discover_srt_files(&input_dir)?;
    if files.is_empty() {
        return Err(SubglossError::Discovery(format!(
            "no .srt files in {}",
            input_dir.display()
        )));
    }

    Ok((input_dir, files))
}

/// Move `file` into `dir`, keeping its name. Falls back to copy and delete
/// when a rename is not possible (e.g. across filesystems).
pub fn relocate(file: &Path, dir: &Path) -> Result<PathBuf> {
    let name = file
        .file_name()
        .ok_or_else(|| SubglossError::Move(format!("{} has no file name", file.display())))?;
    let destination = dir.join(name);

    if destination == file {
        return Ok(destination);
    }

    fs::create_dir_all(dir)
        .map_err(|e| SubglossError::Move(format!("{}: {}", dir.display(), e)))?;

    if fs::rename(file, &destination).is_err() {
        debug!("Rename failed, copying {} instead", file.display());
        fs::copy(file, &destination)
            .and_then(|_| fs::remove_file(file))
            .map_err(|e| {
                SubglossError::Move(format!(
                    "{} -> {}: {}",
                    file.display(),
                    destination.display(),
                    e
                ))
            })?;
    }

    Ok(destination)
}

/// Enhance every discovered file, then relocate the successes.
///
/// Discovery problems abort the run. A file that fails is reported and the
/// run moves on to the next one.
pub async fn run_batch(root: &Path, output_dir: &Path, enhancer: &Enhancer) -> Result<BatchSummary> {
    let (input_dir, files) = discover(root)?;

    fs::create_dir_all(output_dir)?;

    println!("Found {} SRT file(s) to process:", files.len());
    for file in &files {
        println!("  - {}", display_name(file));
    }
    info!("Reading from {}", input_dir.display());
    let options = enhancer.options();
    info!(
        "Languages:  {} -> {}",
        options.source_language, options.target_language
    );

    let mut summary = BatchSummary::default();

    for file in files {
        match enhancer.process_file(&file, output_dir).await {
            Ok(processed) => {
                println!(
                    "{} Successfully processed {}\n",
                    style("✓").green(),
                    display_name(&file)
                );
                summary.processed.push(processed);
            }
            Err(e) => {
                println!(
                    "{} Error processing {}: {}\n",
                    style("✗").red(),
                    display_name(&file),
                    e
                );
                summary.failed.push(FailedFile {
                    path: file,
                    error: e.to_string(),
                });
            }
        }
    }

    println!("Moving original and output files to output folder...");
    for processed in &summary.processed {
        let moved = relocate(&processed.input_path, output_dir)
            .and_then(|_| relocate(&processed.output_path, output_dir));
        match moved {
            Ok(_) => println!(
                "  Moved {} and {}",
                display_name(&processed.input_path),
                display_name(&processed.output_path)
            ),
            Err(e) => {
                warn!("{}", e);
                println!("  Error moving files: {}", e);
                summary.move_errors.push(e.to_string());
            }
        }
    }

    Ok(summary)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Print a summary of the batch results.
pub fn print_summary(summary: &BatchSummary) {
    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("                      Processing complete!                     ");
    println!("═══════════════════════════════════════════════════════════════");
    println!();
    println!("  Processed:  {}", summary.processed.len());
    println!(
        "  Cues:       {}",
        summary.processed.iter().map(|p| p.cue_count).sum::<usize>()
    );
    if !summary.failed.is_empty() {
        println!("  Failed:     {}", summary.failed.len());
        for failed in &summary.failed {
            println!("    {} {}", display_name(&failed.path), style(&failed.error).dim());
        }
    }
    if !summary.move_errors.is_empty() {
        println!("  Move errors: {}", summary.move_errors.len());
    }
    println!();
    println!("═══════════════════════════════════════════════════════════════");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_input_dir_case_insensitive() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("Input")).unwrap();
        fs::write(root.path().join("input.txt"), "").unwrap();

        let found = find_input_dir(root.path()).unwrap().unwrap();
        assert_eq!(found.file_name().unwrap(), "Input");
    }

    #[test]
    fn test_find_input_dir_missing() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("inputs")).unwrap();
        assert!(find_input_dir(root.path()).unwrap().is_none());
    }

    #[test]
    fn test_discover_srt_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.SRT"), "").unwrap();
        fs::write(dir.path().join("a.srt"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("folder.srt")).unwrap();

        let files = discover_srt_files(dir.path()).unwrap();
        let names: Vec<_> = files.iter().map(|f| display_name(f)).collect();
        assert_eq!(names, vec!["a.srt", "b.SRT"]);
    }

    #[test]
    fn test_discover_errors() {
        let root = tempfile::tempdir().unwrap();
        assert!(matches!(discover(root.path()), Err(SubglossError::Discovery(_))));

        fs::create_dir(root.path().join("input")).unwrap();
        assert!(matches!(discover(root.path()), Err(SubglossError::Discovery(_))));
    }

    #[test]
    fn test_relocate() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("a.srt");
        fs::write(&file, "data").unwrap();
        let out = root.path().join("output");

        let moved = relocate(&file, &out).unwrap();
        assert_eq!(moved, out.join("a.srt"));
        assert!(!file.exists());
        assert_eq!(fs::read_to_string(&moved).unwrap(), "data");

        // already in place
        assert_eq!(relocate(&moved, &out).unwrap(), moved);
        assert!(moved.exists());
    }

    #[test]
    fn test_relocate_missing_source() {
        let root = tempfile::tempdir().unwrap();
        let result = relocate(&root.path().join("ghost.srt"), root.path().join("out").as_path());
        assert!(matches!(result, Err(SubglossError::Move(_))));
    }
}
