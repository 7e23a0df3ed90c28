use crate::store::ScoreStore;

/// Lowest passing score
pub const PASS_MARK: u8 = 40;

/// Student names split by result, each list in store order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassFail {
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}

pub fn partition(store: &ScoreStore) -> PassFail {
    let (passed, failed): (Vec<_>, Vec<_>) = store
        .iter()
        .partition(|&(_, score)| score >= PASS_MARK);
    PassFail {
        passed: passed.into_iter().map(|(name, _)| name.to_string()).collect(),
        failed: failed.into_iter().map(|(name, _)| name.to_string()).collect(),
    }
}
