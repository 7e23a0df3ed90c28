use std::io::{Cursor, Write};

use gradebook::analysis::{analyze, Grade};
use gradebook::console::Console;
use gradebook::import::{load_marks, read_marks_file};
use gradebook::session::{run_session, SessionOptions};
use tempfile::NamedTempFile;

fn run_with(input: &str, options: &SessionOptions) -> String {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    run_session(&mut console, options).unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

fn marks_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_csv_import_full_report() {
    let file = marks_file("Alice,95\nBob,40\nCarl,abc\nDee,101\nEve,35\n");
    let input = format!("2\n{}\n3\n", file.path().display());

    let output = run_with(&input, &SessionOptions::default());

    assert!(output.contains("Warning: Skipping Carl. Mark is not a valid number."));
    assert!(output.contains("Warning: Skipping Dee. Mark 101 is out of range."));
    assert!(output.contains("Successfully loaded marks for 3 student(s)"));
    assert!(output.contains("Total Students: 3"));
    assert!(output.contains("Highest Score (Max): 95"));
    assert!(output.contains("Lowest Score (Min): 35"));
    assert!(output.contains("Class Median: 40.00"));
    assert!(output.contains("Grade A: 1 student(s)"));
    assert!(output.contains("Grade F: 2 student(s)"));
    assert!(output.contains("Total Passed Students (Score >= 40): 2"));
    assert!(output.contains("Names: Alice, Bob"));
    assert!(output.contains("Names: Eve"));
    assert!(output.ends_with("Exiting GradeBook Analyzer. GoodBye!!\n"));
}

#[test]
fn test_default_csv_used_for_blank_reply() {
    let file = marks_file("Zed,88\n");
    let options = SessionOptions {
        use_colors: false,
        default_csv: Some(file.path().to_path_buf()),
    };

    let output = run_with("2\n\n3\n", &options);

    assert!(output.contains("Total Students: 1"));
    assert!(output.contains("Grade B: 1 student(s)"));
}

#[test]
fn test_manual_then_file_cycles_are_independent() {
    let file = marks_file("Fay,72\nGus,64\n");
    let input = format!(
        "1\nZoe\n150\n-1\n85\ndone\n2\n{}\n3\n",
        file.path().display()
    );

    let output = run_with(&input, &SessionOptions::default());

    assert_eq!(output.matches("Marks must be between 0 and 100.").count(), 2);
    assert!(output.contains("Total Students: 1"));
    assert!(output.contains("Total Students: 2"));
    // Zoe does not leak into the second cycle
    assert_eq!(output.matches("Zoe ").count(), 1);
}

#[test]
fn test_typed_hundred_accepted_but_file_hundred_rejected() {
    let output = run_with("1\nAce\n100\ndone\n3\n", &SessionOptions::default());
    assert!(output.contains("Highest Score (Max): 100"));

    let file = marks_file("Ace,100\n");
    let import = read_marks_file(file.path()).unwrap();
    assert!(import.store.is_empty());
    assert_eq!(import.skipped.len(), 1);
}

#[test]
fn test_nonexistent_file_yields_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());

    let store = load_marks(&mut console, &dir.path().join("ghost.csv")).unwrap();

    assert!(store.is_empty());
    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.starts_with("Error: File"));
}

#[test]
fn test_imported_names_flow_through_analysis() {
    let file = marks_file("Ann,91\nBo,59\nCy,60\nAnn,45\n");
    let import = read_marks_file(file.path()).unwrap();
    let analysis = analyze(&import.store).unwrap();

    let names: Vec<&str> = analysis.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bo", "Cy"]);
    assert_eq!(analysis.rows[0].score, 45);
    assert_eq!(analysis.rows[0].grade, Grade::F);
    assert_eq!(analysis.distribution.total(), 3);
    assert_eq!(analysis.pass_fail.passed, vec!["Ann", "Cy"]);
    assert_eq!(analysis.pass_fail.failed, vec!["Bo"]);
}
