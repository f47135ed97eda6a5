use lines_core::{LanguageTable, LineClassifier, Tally, TrailingFlush};
use lines_shared_kernel::{LinesError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// What became of one dispatched file.
#[derive(Debug)]
pub enum FileOutcome {
    Counted { language: &'static str, tally: Tally },
    /// No extension, or one the language table does not know.
    Unrecognized,
    /// Open, read, or pattern failure; the file contributes nothing.
    Failed(LinesError),
}

/// Scans a single file and returns its per-file tally.
pub fn scan_file(path: &Path, table: &LanguageTable, trailing: TrailingFlush) -> FileOutcome {
    let Some(entry) = path
        .file_name()
        .and_then(|name| table.for_file_name(&name.to_string_lossy()))
    else {
        return FileOutcome::Unrecognized;
    };

    let scanned = entry.patterns().and_then(|patterns| {
        let file = File::open(path).map_err(|source| LinesError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let mut classifier = LineClassifier::new(patterns);
        classify_reader(&mut BufReader::new(file), &mut classifier, path)?;
        Ok(classifier.finish(trailing))
    });

    match scanned {
        Ok(tally) => FileOutcome::Counted {
            language: entry.name(),
            tally,
        },
        Err(e) => {
            log::warn!("Skipping {}: {e}", path.display());
            FileOutcome::Failed(e)
        }
    }
}

/// Feeds every line of `reader` to `classifier`.
///
/// Lines are split on `\n`; a trailing `\r` is dropped as well, and invalid
/// UTF-8 is replaced rather than rejected.
///
/// # Errors
/// Returns [`LinesError::FileRead`] when the reader fails mid-file.
pub fn classify_reader<R: BufRead>(reader: &mut R, classifier: &mut LineClassifier<'_>, path: &Path) -> Result<()> {
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        let read = reader.read_until(b'\n', &mut line_buf).map_err(|source| LinesError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        if read == 0 {
            return Ok(());
        }

        let mut line = line_buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }
        classifier.classify(&String::from_utf8_lossy(line));
    }
}
