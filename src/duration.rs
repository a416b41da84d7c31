//! Expected operating time per procedure label.

use crate::config::{FLAP_CASE_MINUTES, LONG_CASE_MINUTES, SHORT_CASE_MINUTES};

/// First matching row wins; unmatched labels take [`SHORT_CASE_MINUTES`].
const DURATION_TABLE: &[(&[&str], u32)] = &[
    (
        &["thay khớp", "ptns tái tạo", "dây chằng", "khx"],
        LONG_CASE_MINUTES,
    ),
    (&["chuyển vạt"], FLAP_CASE_MINUTES),
];

/// Estimate the duration in minutes of a procedure label.
pub fn estimate_duration(procedure_label: &str) -> u32 {
    let label = procedure_label.to_lowercase();
    DURATION_TABLE
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| label.contains(keyword)))
        .map(|(_, minutes)| *minutes)
        .unwrap_or(SHORT_CASE_MINUTES)
}
