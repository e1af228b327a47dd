//! CLI output formatting.
//!
//! Output is **information-centric**: each folder is shown by its display
//! name with its key and files as indented context lines. Generated files
//! follow the same header/context layout so `list`, `thumbnails` and `build`
//! read alike.
//!
//! # Output Format
//!
//! ## Catalog
//!
//! ```text
//! 001 Gophers (3 files)
//!     Key: gophers
//!     001 gopher-front.png
//!     002 gopher-side.png
//! ```
//!
//! ## Thumbnails
//!
//! ```text
//! 001 Gophers (3 files)
//!     001 gopher-front.png 240x320 → 96x128
//!     002 gopher-side.png 320x200 → 128x80
//! ```
//!
//! ## Summary
//!
//! ```text
//! README → /repo/README.md
//! Wrote 9 thumbnails, 1 README
//! ```
//!
//! # Architecture
//!
//! Each `format_*` function is pure and returns `Vec<String>`; the `print_*`
//! wrappers write to stdout.

use crate::catalog::Catalog;
use crate::pipeline::RunReport;
use crate::thumbnails::GeneratedThumbnail;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Folder header: positional index, display name and file count.
///
/// ```text
/// 001 Gophers (3 files)
/// ```
fn folder_header(index: usize, display_name: &str, files: usize) -> String {
    format!(
        "{} {} ({})",
        format_index(index),
        display_name,
        plural(files, "file", "files")
    )
}

/// Format the populated catalog as a tree.
pub fn format_catalog(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, folder) in catalog.folders().iter().enumerate() {
        lines.push(folder_header(i + 1, &folder.display_name, folder.files.len()));
        lines.push(format!("{}Key: {}", indent(1), folder.key));
        for (j, file) in folder.files.iter().enumerate() {
            lines.push(format!("{}{} {}", indent(1), format_index(j + 1), file));
        }
    }
    lines
}

/// Format the populated catalog as pretty-printed JSON.
pub fn format_catalog_json(catalog: &Catalog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(catalog)
}

/// Format generated thumbnails grouped under their folder.
pub fn format_thumbnails(catalog: &Catalog, thumbnails: &[GeneratedThumbnail]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, folder) in catalog.folders().iter().enumerate() {
        let generated: Vec<&GeneratedThumbnail> =
            thumbnails.iter().filter(|t| t.key == folder.key).collect();
        if generated.is_empty() {
            continue;
        }
        lines.push(folder_header(i + 1, &folder.display_name, folder.files.len()));
        for (j, thumb) in generated.iter().enumerate() {
            let (sw, sh) = thumb.source_dimensions;
            let (tw, th) = thumb.dimensions;
            lines.push(format!(
                "{}{} {} {}x{} → {}x{}",
                indent(1),
                format_index(j + 1),
                thumb.file,
                sw,
                sh,
                tw,
                th
            ));
        }
    }
    lines
}

/// Format the outcome of a run: thumbnails, README path and a summary line.
pub fn format_run_report(report: &RunReport) -> Vec<String> {
    let mut lines = format_thumbnails(&report.catalog, &report.thumbnails);

    if let Some(path) = &report.readme {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("README → {}", path.display()));
    }

    let mut parts = Vec::new();
    if !report.thumbnails.is_empty() {
        parts.push(plural(report.thumbnails.len(), "thumbnail", "thumbnails"));
    }
    if report.readme.is_some() {
        parts.push("1 README".to_string());
    }
    if !parts.is_empty() {
        lines.push(format!("Wrote {}", parts.join(", ")));
    }
    lines
}

pub fn print_catalog(catalog: &Catalog) {
    for line in format_catalog(catalog) {
        println!("{}", line);
    }
}

pub fn print_run_report(report: &RunReport) {
    for line in format_run_report(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Folder;
    use crate::test_helpers::{MemoryStore, populated};
    use std::path::PathBuf;

    fn catalog() -> Catalog {
        populated(vec![
            Folder::new(
                "gophers",
                "Gophers",
                MemoryStore::with_names(&["front.png", "side.png"]),
            ),
            Folder::new("misc", "Miscellaneous", MemoryStore::with_names(&["mug.png"])),
        ])
    }

    fn thumb(key: &str, file: &str, source: (u32, u32), dims: (u32, u32)) -> GeneratedThumbnail {
        GeneratedThumbnail {
            key: key.to_string(),
            file: file.to_string(),
            path: PathBuf::from(format!("/repo/thumbnails/{key}/{file}")),
            source_dimensions: source,
            dimensions: dims,
        }
    }

    #[test]
    fn catalog_tree() {
        let lines = format_catalog(&catalog());
        assert_eq!(
            lines,
            vec![
                "001 Gophers (2 files)",
                "    Key: gophers",
                "    001 front.png",
                "    002 side.png",
                "002 Miscellaneous (1 file)",
                "    Key: misc",
                "    001 mug.png",
            ]
        );
    }

    #[test]
    fn catalog_json() {
        let json: serde_json::Value =
            serde_json::from_str(&format_catalog_json(&catalog()).unwrap()).unwrap();
        assert_eq!(json["folders"][0]["key"], "gophers");
        assert_eq!(json["folders"][1]["files"], serde_json::json!(["mug.png"]));
    }

    #[test]
    fn thumbnails_grouped_by_folder() {
        let thumbs = vec![
            thumb("gophers", "front.png", (240, 320), (96, 128)),
            thumb("misc", "mug.png", (64, 64), (64, 64)),
        ];
        let lines = format_thumbnails(&catalog(), &thumbs);
        assert_eq!(
            lines,
            vec![
                "001 Gophers (2 files)",
                "    001 front.png 240x320 → 96x128",
                "002 Miscellaneous (1 file)",
                "    001 mug.png 64x64 → 64x64",
            ]
        );
    }

    #[test]
    fn run_report_readme_only() {
        let report = RunReport {
            root: PathBuf::from("/repo"),
            catalog: catalog(),
            thumbnails: Vec::new(),
            readme: Some(PathBuf::from("/repo/README.md")),
        };
        assert_eq!(
            format_run_report(&report),
            vec!["README → /repo/README.md", "Wrote 1 README"]
        );
    }

    #[test]
    fn run_report_with_thumbnails_and_readme() {
        let report = RunReport {
            root: PathBuf::from("/repo"),
            catalog: catalog(),
            thumbnails: vec![thumb("misc", "mug.png", (300, 300), (128, 128))],
            readme: Some(PathBuf::from("/repo/README.md")),
        };
        let lines = format_run_report(&report);
        assert_eq!(lines.first().unwrap(), "002 Miscellaneous (1 file)");
        assert!(lines.contains(&String::new()));
        assert_eq!(lines.last().unwrap(), "Wrote 1 thumbnail, 1 README");
    }

    #[test]
    fn run_report_nothing_written() {
        let report = RunReport {
            root: PathBuf::from("/repo"),
            catalog: catalog(),
            thumbnails: Vec::new(),
            readme: None,
        };
        assert!(format_run_report(&report).is_empty());
    }
}
