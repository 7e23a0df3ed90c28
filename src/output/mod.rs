pub mod formatter;

pub use formatter::{
    format_grade_distribution, format_menu, format_pass_fail, format_report, format_results_table,
    format_statistics, should_use_colors,
};
