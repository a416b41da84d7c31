//! Priority and room classification of pending surgery cases.

use crate::config::{
    ARTHROPLASTY_FALLBACK_ROOMS, ARTHROPLASTY_ROOMS, FLAP_CASE_MINUTES, GENERAL_ROOMS,
    OVERFLOW_ROOMS, SEPTIC_ROOMS,
};
use crate::duration::estimate_duration;
use crate::models::{ClassifiedCase, PendingCase, PriorityTag};
use crate::procedure::derive_procedure;
use crate::vocabulary;
use tracing::debug;

/// Age at or above which a fixation is treated as high risk.
const ELDERLY_AGE: u32 = 70;
/// Age at or below which a fixation is treated as high risk.
const CHILD_AGE: u32 = 7;

/// Priority tag and room pools for one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub priority: PriorityTag,
    pub primary_rooms: Vec<String>,
    pub fallback_rooms: Option<Vec<String>>,
}

impl Classification {
    fn new(priority: PriorityTag, primary: &[&str], fallback: Option<&[&str]>) -> Self {
        Classification {
            priority,
            primary_rooms: rooms(primary),
            fallback_rooms: fallback.map(rooms),
        }
    }
}

fn rooms(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|room| room.to_string()).collect()
}

/// Classify a case from its diagnosis, procedure label and age.
///
/// Rules are evaluated top to bottom and the first match decides:
/// septic work goes to the dedicated room, arthroplasty and arthroscopy to
/// room 7 with room 8 as fallback, everything else to rooms 7/8 with rooms
/// 9/10 as overflow for tumors and implant removals.
pub fn classify(diagnosis: &str, procedure_label: &str, age: u32) -> Classification {
    let diagnosis = diagnosis.to_lowercase();
    let label = procedure_label.to_lowercase();

    if vocabulary::mentions_infection(&diagnosis)
        || label.starts_with("pt nạo viêm")
        || label.starts_with("pt chuyển vạt da")
    {
        return Classification::new(PriorityTag::Infection, SEPTIC_ROOMS, None);
    }

    if vocabulary::mentions_femoral_neck_fracture(&diagnosis)
        || label.contains("thay khớp háng")
        || label.starts_with("ptns tái tạo")
        || vocabulary::ligament(&diagnosis).is_some()
    {
        return Classification::new(
            PriorityTag::ThaOrArthroscopy,
            ARTHROPLASTY_ROOMS,
            Some(ARTHROPLASTY_FALLBACK_ROOMS),
        );
    }

    if label.starts_with("pt khx")
        && !label.contains("tháo phương tiện")
        && !vocabulary::mentions_implant(&diagnosis)
    {
        let priority = if age >= ELDERLY_AGE || age <= CHILD_AGE {
            PriorityTag::KhxHighRisk
        } else {
            PriorityTag::KhxOther
        };
        return Classification::new(priority, GENERAL_ROOMS, None);
    }

    if label.starts_with("pt bóc u") {
        return Classification::new(PriorityTag::Tumor, GENERAL_ROOMS, Some(OVERFLOW_ROOMS));
    }

    if label.contains("tháo phương tiện") {
        return Classification::new(
            PriorityTag::RemoveImplant,
            GENERAL_ROOMS,
            Some(OVERFLOW_ROOMS),
        );
    }

    if estimate_duration(&label) == FLAP_CASE_MINUTES {
        return Classification::new(PriorityTag::OtherMajor, GENERAL_ROOMS, None);
    }

    Classification::new(PriorityTag::Minor, GENERAL_ROOMS, None)
}

/// Derive label and duration for a pending case and classify it.
pub fn classify_case(case: &PendingCase, sequence: usize) -> ClassifiedCase {
    let procedure_label = derive_procedure(&case.diagnosis);
    let duration_minutes = estimate_duration(&procedure_label);
    let classification = classify(&case.diagnosis, &procedure_label, case.age);

    debug!(
        case_id = %case.id,
        label = %procedure_label,
        duration = duration_minutes,
        priority = %classification.priority,
        "classified case"
    );

    ClassifiedCase {
        case: case.clone(),
        procedure_label,
        duration_minutes,
        priority: classification.priority,
        primary_rooms: classification.primary_rooms,
        fallback_rooms: classification.fallback_rooms,
        sequence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_diagnosis(diagnosis: &str, age: u32) -> ClassifiedCase {
        classify_case(&PendingCase::new("p", diagnosis, age), 0)
    }

    #[test]
    fn femoral_neck_fracture_goes_to_arthroplasty_room() {
        let case = classify_diagnosis("Gãy cổ xương đùi bên trái", 68);
        assert_eq!(case.procedure_label, "PT Thay khớp háng");
        assert_eq!(case.priority, PriorityTag::ThaOrArthroscopy);
        assert_eq!(case.primary_rooms, vec!["7"]);
        assert_eq!(case.fallback_rooms, Some(vec!["8".to_string()]));
        assert_eq!(case.duration_minutes, 90);
    }

    #[test]
    fn infection_goes_to_septic_room() {
        let case = classify_diagnosis("Viêm xương cẳng chân phải", 40);
        assert_eq!(case.procedure_label, "PT Nạo viêm cẳng chân P");
        assert_eq!(case.priority, PriorityTag::Infection);
        assert_eq!(case.primary_rooms, vec!["1"]);
        assert_eq!(case.fallback_rooms, None);
        assert_eq!(case.duration_minutes, 30);
    }

    #[test]
    fn infected_implant_is_still_septic() {
        let case = classify_diagnosis("Nhiễm trùng nẹp vít cẳng chân trái", 50);
        assert_eq!(case.procedure_label, "PT Tháo phương tiện cẳng chân T");
        assert_eq!(case.priority, PriorityTag::Infection);
    }

    #[test]
    fn unaccented_pus_is_septic() {
        let case = classify_diagnosis("Chay mu vet mo", 40);
        assert_eq!(case.procedure_label, "PT Nạo viêm");
        assert_eq!(case.priority, PriorityTag::Infection);
        assert_eq!(case.primary_rooms, vec!["1"]);

        let pubic = classify_diagnosis("Gãy ngành xương mu phải", 40);
        assert_eq!(pubic.priority, PriorityTag::KhxOther);
    }

    #[test]
    fn flap_label_is_septic() {
        let case = classify_diagnosis("Khuyết hổng phần mềm cẳng chân phải", 35);
        assert_eq!(case.priority, PriorityTag::Infection);
        assert_eq!(case.duration_minutes, 60);
    }

    #[test]
    fn ligament_reconstruction_is_arthroscopy() {
        let case = classify_diagnosis("Đứt DCCT gối phải", 25);
        assert_eq!(case.priority, PriorityTag::ThaOrArthroscopy);
        assert_eq!(case.primary_rooms, vec!["7"]);
    }

    #[test]
    fn fixation_risk_depends_on_age() {
        for (age, expected) in [
            (0, PriorityTag::KhxHighRisk),
            (70, PriorityTag::KhxHighRisk),
            (85, PriorityTag::KhxHighRisk),
            (7, PriorityTag::KhxHighRisk),
            (8, PriorityTag::KhxOther),
            (69, PriorityTag::KhxOther),
        ] {
            let case = classify_diagnosis("Gãy thân xương cánh tay trái", age);
            assert_eq!(case.procedure_label, "PT KHX cánh tay T");
            assert_eq!(case.priority, expected, "age {age}");
            assert_eq!(case.primary_rooms, vec!["7", "8"]);
            assert_eq!(case.fallback_rooms, None);
        }
    }

    #[test]
    fn tumor_and_implant_removal_overflow_to_rooms_nine_and_ten() {
        let tumor = classify_diagnosis("U bao hoạt dịch cổ tay phải", 30);
        assert_eq!(tumor.priority, PriorityTag::Tumor);
        assert_eq!(tumor.fallback_rooms, Some(vec!["9".to_string(), "10".to_string()]));

        let removal = classify_diagnosis("Còn đinh nội tủy xương đùi trái", 30);
        assert_eq!(removal.priority, PriorityTag::RemoveImplant);
        assert_eq!(removal.primary_rooms, vec!["7", "8"]);
        assert_eq!(removal.fallback_rooms, Some(vec!["9".to_string(), "10".to_string()]));
    }

    #[test]
    fn supplied_flap_label_without_septic_prefix_is_other_major() {
        let classification = classify("Mất da lưng bàn tay", "Chuyển vạt da bàn tay", 40);
        assert_eq!(classification.priority, PriorityTag::OtherMajor);
    }

    #[test]
    fn anything_else_is_minor() {
        let case = classify_diagnosis("Ngón tay cò súng", 55);
        assert_eq!(case.procedure_label, "Phẫu thuật");
        assert_eq!(case.priority, PriorityTag::Minor);
        assert_eq!(case.primary_rooms, vec!["7", "8"]);
    }
}
