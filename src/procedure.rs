//! Procedure label derivation from free-text diagnoses.
//!
//! A label is a short canonical Vietnamese string such as
//! `"PT KHX đùi T"`: a base procedure, then the anatomical location, then the
//! side. The base procedure comes from an ordered rule table where the first
//! matching rule wins, so the order of `PROCEDURE_RULES` is the precedence.

use crate::vocabulary;

/// Label used when no rule recognises the diagnosis.
pub const GENERIC_LABEL: &str = "Phẫu thuật";

struct ProcedureRule {
    matches: fn(&str) -> bool,
    label: &'static str,
    /// Whether location and side are appended to the base label.
    qualified: bool,
}

const PROCEDURE_RULES: &[ProcedureRule] = &[
    ProcedureRule {
        matches: vocabulary::mentions_implant,
        label: "PT Tháo phương tiện",
        qualified: true,
    },
    ProcedureRule {
        matches: vocabulary::mentions_tumor,
        label: "PT Bóc u",
        qualified: true,
    },
    ProcedureRule {
        matches: vocabulary::mentions_infection,
        label: "PT Nạo viêm",
        qualified: true,
    },
    ProcedureRule {
        matches: vocabulary::mentions_soft_tissue_defect,
        label: "PT Chuyển vạt da",
        qualified: true,
    },
    ProcedureRule {
        matches: vocabulary::mentions_femoral_neck_fracture,
        label: "PT Thay khớp háng",
        qualified: false,
    },
    ProcedureRule {
        matches: vocabulary::mentions_fracture,
        label: "PT KHX",
        qualified: true,
    },
];

/// Derive the canonical procedure label for a diagnosis.
///
/// Never fails: unrecognised or empty text yields [`GENERIC_LABEL`], still
/// qualified by location and side when those are present.
pub fn derive_procedure(diagnosis: &str) -> String {
    let text = diagnosis.to_lowercase();

    if let Some(ligament) = vocabulary::ligament(&text) {
        let base = format!("PTNS tái tạo {ligament}");
        let knee = text.contains("gối").then_some("gối");
        return join_label(&base, knee, vocabulary::laterality(&text));
    }

    match PROCEDURE_RULES.iter().find(|rule| (rule.matches)(&text)) {
        Some(rule) if !rule.qualified => rule.label.to_string(),
        Some(rule) => join_label(
            rule.label,
            vocabulary::location(&text),
            vocabulary::laterality(&text),
        ),
        None => join_label(
            GENERIC_LABEL,
            vocabulary::location(&text),
            vocabulary::laterality(&text),
        ),
    }
}

fn join_label(base: &str, location: Option<&str>, side: Option<&str>) -> String {
    [Some(base), location, side]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
