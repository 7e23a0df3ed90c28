use anyhow::Result;
use std::fmt;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::score::{parse_score, ScoreRejection, UpperBound};
use crate::console::Console;
use crate::store::ScoreStore;

/// Marks read from a file, plus the rows that were passed over
#[derive(Debug, Default)]
pub struct FileImport {
    pub store: ScoreStore,
    pub skipped: Vec<SkippedRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the file
    pub line: u64,
    /// First field of the row, trimmed
    pub name: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingMark,
    EmptyName,
    Rejected(ScoreRejection),
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            SkipReason::MissingMark => {
                write!(f, "Warning: Skipping {}. Row has no mark column.", self.name)
            }
            SkipReason::EmptyName => {
                write!(f, "Warning: Skipping row {}. Student name is empty.", self.line)
            }
            SkipReason::Rejected(ScoreRejection::OutOfRange(mark)) => write!(
                f,
                "Warning: Skipping {}. Mark {} is out of range.",
                self.name, mark
            ),
            SkipReason::Rejected(ScoreRejection::NotANumber(_)) => write!(
                f,
                "Warning: Skipping {}. Mark is not a valid number.",
                self.name
            ),
        }
    }
}

#[derive(Debug)]
pub enum ImportError {
    NotFound(PathBuf),
    Read { path: PathBuf, source: csv::Error },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::NotFound(path) => write!(f, "File '{}' not found", path.display()),
            ImportError::Read { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::NotFound(_) => None,
            ImportError::Read { source, .. } => Some(source),
        }
    }
}

/// Read `name,mark` rows from a comma-separated file.
///
/// Rows that are short, have an empty name, or carry a mark that is not an
/// integer in 0..100 are recorded in `skipped` and do not stop the import.
/// Columns after the second are ignored. Any read or decoding failure aborts
/// the whole import.
pub fn read_marks_file(path: &Path) -> Result<FileImport, ImportError> {
    if !path.exists() {
        return Err(ImportError::NotFound(path.to_path_buf()));
    }

    let read_err = |source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(read_err)?;

    let mut import = FileImport::default();
    for result in reader.records() {
        let record = result.map_err(read_err)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let name = record.get(0).unwrap_or_default().trim().to_string();

        let reason = match record.get(1) {
            None => SkipReason::MissingMark,
            Some(_) if name.is_empty() => SkipReason::EmptyName,
            Some(raw_mark) => match parse_score(raw_mark, UpperBound::Exclusive) {
                Ok(score) => {
                    import.store.insert(name, score);
                    continue;
                }
                Err(rejection) => SkipReason::Rejected(rejection),
            },
        };
        debug!(line, student = %name, ?reason, "skipping row");
        import.skipped.push(SkippedRow { line, name, reason });
    }

    info!(
        path = %path.display(),
        loaded = import.store.len(),
        skipped = import.skipped.len(),
        "read marks file"
    );
    Ok(import)
}

/// Load marks from `path`, reporting skipped rows and failures on the console.
///
/// Never fails on account of the file: a missing or unreadable file yields an
/// empty store. Errors returned here come from the console alone.
pub fn load_marks<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    path: &Path,
) -> Result<ScoreStore> {
    let import = match read_marks_file(path) {
        Ok(import) => import,
        Err(ImportError::NotFound(path)) => {
            console.say(format!(
                "Error: File '{}' not found. Please check the path.",
                path.display()
            ))?;
            return Ok(ScoreStore::new());
        }
        Err(e) => {
            warn!(error = %e, "marks import aborted");
            console.say(format!(
                "An unexpected error occurred while reading '{}'. No marks were imported.",
                path.display()
            ))?;
            return Ok(ScoreStore::new());
        }
    };

    for row in &import.skipped {
        console.say(row)?;
    }

    if import.store.is_empty() {
        console.say("\nNo valid marks were loaded from the file.")?;
    } else {
        console.say(format!(
            "\nSuccessfully loaded marks for {} student(s) from {}.",
            import.store.len(),
            path.display()
        ))?;
    }
    Ok(import.store)
}

/// Ask for a file name and import it.
///
/// A blank reply falls back to `default_path` when one is configured.
/// Returns `None` if input runs out before a file name is given.
pub fn import_marks<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    default_path: Option<&Path>,
) -> Result<Option<ScoreStore>> {
    console.say("\n---CSV Data Import---")?;
    let Some(input) = console.prompt("Enter the CSV filename (e.g. student_data.csv): ")? else {
        return Ok(None);
    };

    let path = match (input.is_empty(), default_path) {
        (true, Some(default)) => {
            console.say(format!("Using default file {}", default.display()))?;
            default.to_path_buf()
        }
        _ => PathBuf::from(input),
    };

    load_marks(console, &path).map(Some)
}
