pub mod file;
pub mod manual;
pub mod score;

pub use file::{import_marks, load_marks, read_marks_file, FileImport, ImportError, SkipReason, SkippedRow};
pub use manual::enter_marks;
pub use score::{parse_score, ScoreRejection, UpperBound};
