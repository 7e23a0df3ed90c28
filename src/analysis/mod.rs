pub mod grading;
pub mod pass_fail;
pub mod stats;

pub use grading::{assign_grades, Distribution, Grade, GradeAssignment};
pub use pass_fail::{partition, PassFail, PASS_MARK};
pub use stats::Summary;

use crate::store::ScoreStore;

/// One line of the final results table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub name: String,
    pub score: u8,
    pub grade: Grade,
}

/// Everything derived from one store, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub summary: Summary,
    pub distribution: Distribution,
    pub pass_fail: PassFail,
    pub rows: Vec<ResultRow>,
}

/// Run statistics, grading and pass/fail over `store`.
///
/// Returns `None` for an empty store; there is nothing meaningful to report.
pub fn analyze(store: &ScoreStore) -> Option<Analysis> {
    if store.is_empty() {
        return None;
    }

    let summary = Summary::from_scores(&store.scores());
    let assignment = assign_grades(store);
    let pass_fail = partition(store);

    let rows = store
        .iter()
        .zip(&assignment.grades)
        .map(|((name, score), (_, grade))| ResultRow {
            name: name.to_string(),
            score,
            grade: *grade,
        })
        .collect();

    Some(Analysis {
        summary,
        distribution: assignment.distribution,
        pass_fail,
        rows,
    })
}
