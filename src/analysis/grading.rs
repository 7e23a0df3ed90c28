use std::fmt;

use crate::store::ScoreStore;

/// Letter grade, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Every grade in report order
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// | Score  | Grade |
    /// |--------|-------|
    /// | >= 90  | A     |
    /// | 80-89  | B     |
    /// | 70-79  | C     |
    /// | 60-69  | D     |
    /// | < 60   | F     |
    pub fn for_score(score: u8) -> Self {
        match score {
            90.. => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::F => 'F',
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Number of students per grade. Every grade is present, starting at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Distribution {
    counts: [usize; 5],
}

impl Distribution {
    pub fn record(&mut self, grade: Grade) {
        self.counts[grade.slot()] += 1;
    }

    pub fn count(&self, grade: Grade) -> usize {
        self.counts[grade.slot()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// (grade, count) pairs in A..F order
    pub fn iter(&self) -> impl Iterator<Item = (Grade, usize)> + '_ {
        Grade::ALL.iter().map(|&grade| (grade, self.count(grade)))
    }
}

/// Per-student grades in store order, with their distribution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeAssignment {
    pub grades: Vec<(String, Grade)>,
    pub distribution: Distribution,
}

impl GradeAssignment {
    pub fn grade_of(&self, name: &str) -> Option<Grade> {
        self.grades
            .iter()
            .find(|(student, _)| student == name)
            .map(|(_, grade)| *grade)
    }
}

pub fn assign_grades(store: &ScoreStore) -> GradeAssignment {
    let mut assignment = GradeAssignment::default();
    for (name, score) in store.iter() {
        let grade = Grade::for_score(score);
        assignment.distribution.record(grade);
        assignment.grades.push((name.to_string(), grade));
    }
    assignment
}
