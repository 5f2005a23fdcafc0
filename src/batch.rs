//! Batch processing: input files in, one outline JSON per file out.
//!
//! Supported inputs are layout dumps (`.json`) and, with the `pdf` feature,
//! PDF files (`.pdf`). Each result is written next to its siblings in the
//! output directory as `<input stem>.json`.

use crate::document::{LayoutDocument, LayoutSource};
use crate::error::{Error, Result};
use crate::outline::{OutlineExtractor, OutlineResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Kinds of input files the batch driver understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Structured-blocks layout JSON
    Layout,
    /// PDF file
    Pdf,
}

impl InputKind {
    /// Determine the kind from a path's extension, case-insensitively.
    pub fn of(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(InputKind::Layout),
            "pdf" => Some(InputKind::Pdf),
            _ => None,
        }
    }

    /// Whether this build can read the kind.
    pub fn is_supported(&self) -> bool {
        match self {
            InputKind::Layout => true,
            InputKind::Pdf => cfg!(feature = "pdf"),
        }
    }
}

/// Counts from a directory run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files written successfully
    pub processed: usize,
    /// Files that failed
    pub failed: usize,
}

/// Open any supported input as a layout source.
pub fn open_source(path: &Path) -> Result<Box<dyn LayoutSource>> {
    match InputKind::of(path) {
        Some(InputKind::Layout) => Ok(Box::new(LayoutDocument::open(path)?)),
        #[cfg(feature = "pdf")]
        Some(InputKind::Pdf) => Ok(Box::new(crate::pdf_backend::PdfOxideSource::open(path)?)),
        #[cfg(not(feature = "pdf"))]
        Some(InputKind::Pdf) => Err(Error::UnsupportedInput(format!(
            "{} (rebuild with the `pdf` feature to read PDF files)",
            path.display()
        ))),
        None => Err(Error::UnsupportedInput(path.display().to_string())),
    }
}

/// Output location for an input: `<output_dir>/<stem>.json`.
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "output".into());
    name.push(".json");
    output_dir.join(name)
}

/// Supported input files in a directory, sorted by path.
pub fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && InputKind::of(&path).is_some_and(|k| k.is_supported()) {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Write an outline as pretty-printed JSON.
pub fn write_outline(result: &OutlineResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json)?;
    Ok(())
}

/// Extract one file's outline and write it into `output_dir`.
///
/// Returns the path written.
pub fn process_file(extractor: &OutlineExtractor, input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let mut source = open_source(input)?;
    let result = extractor.extract_outline(source.as_mut())?;
    let output = output_path_for(input, output_dir);
    write_outline(&result, &output)?;
    log::info!(
        "{} -> {} ({} headings)",
        input.display(),
        output.display(),
        result.outline.len()
    );
    Ok(output)
}

/// Process every supported file in `input_dir`.
///
/// The output directory is created if needed. A failing file is logged and
/// counted; the remaining files are still processed.
pub fn process_dir(extractor: &OutlineExtractor, input_dir: &Path, output_dir: &Path) -> Result<BatchSummary> {
    fs::create_dir_all(output_dir)?;
    let inputs = collect_inputs(input_dir)?;
    if inputs.is_empty() {
        log::warn!("No supported input files in {}", input_dir.display());
    }

    let mut summary = BatchSummary::default();
    for input in &inputs {
        match process_file(extractor, input, output_dir) {
            Ok(_) => summary.processed += 1,
            Err(e) => {
                log::warn!("Failed to process {}: {}", input.display(), e);
                summary.failed += 1;
            },
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_kind() {
        assert_eq!(InputKind::of(Path::new("a/report.PDF")), Some(InputKind::Pdf));
        assert_eq!(InputKind::of(Path::new("layout.json")), Some(InputKind::Layout));
        assert_eq!(InputKind::of(Path::new("notes.txt")), None);
        assert_eq!(InputKind::of(Path::new("README")), None);
        assert!(InputKind::Layout.is_supported());
    }

    #[test]
    fn test_output_path_replaces_extension() {
        let out = output_path_for(Path::new("/in/file01.pdf"), Path::new("/out"));
        assert_eq!(out, PathBuf::from("/out/file01.json"));

        let out = output_path_for(Path::new("in/report.v2.pdf"), Path::new("out"));
        assert_eq!(out, PathBuf::from("out/report.v2.json"));
    }

    #[test]
    fn test_dotted_stems_do_not_collide() {
        let out = Path::new("out");
        let v1 = output_path_for(Path::new("report.v1.pdf"), out);
        let v2 = output_path_for(Path::new("report.v2.pdf"), out);
        assert_ne!(v1, v2);
        assert_eq!(v1, PathBuf::from("out/report.v1.json"));
        assert_eq!(output_path_for(Path::new("in/notes"), out), PathBuf::from("out/notes.json"));
    }

    #[test]
    fn test_open_source_unknown_extension() {
        assert!(matches!(
            open_source(Path::new("slides.pptx")),
            Err(Error::UnsupportedInput(_))
        ));
    }

    #[cfg(not(feature = "pdf"))]
    #[test]
    fn test_pdf_needs_feature() {
        assert!(!InputKind::Pdf.is_supported());
        assert!(matches!(
            open_source(Path::new("paper.pdf")),
            Err(Error::UnsupportedInput(_))
        ));
    }
}
