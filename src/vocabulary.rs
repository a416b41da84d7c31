//! Keyword predicates over lower-cased Vietnamese diagnosis text.
//!
//! Shared by the procedure deriver and the case classifier so both read a
//! diagnosis the same way. Every function expects already lower-cased input.

use regex::Regex;
use std::sync::LazyLock;

const IMPLANT_KEYWORDS: &[&str] = &["nẹp", "vít", "đinh", "phương tiện"];
const TUMOR_KEYWORDS: &[&str] = &["u mỡ", "nang", "hạch", "bướu"];
const INFECTION_KEYWORDS: &[&str] = &[
    "viêm",
    "nhiễm trùng",
    "áp xe",
    "hoại tử",
    "viem",
    "nhiem trung",
    "ap xe",
    "hoai tu",
];
const SOFT_TISSUE_DEFECT_KEYWORDS: &[&str] = &["khuyết hổng", "lộ xương"];
const FEMORAL_NECK_FRACTURE: &str = "gãy cổ xương đùi";
const FRACTURE: &str = "gãy";
/// "xương mu" is the pubic bone, not pus.
const PUBIC_BONE_PREFIXES: &[&str] = &["xương ", "xuong "];

/// Anatomical locations, in match priority order.
const LOCATIONS: &[&str] = &[
    "cẳng chân",
    "cẳng tay",
    "cánh tay",
    "đùi",
    "vai",
    "cổ tay",
    "bàn tay",
    "bàn chân",
    "gối",
];

static TUMOR_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bu\b").expect("tumor pattern is valid"));
static PUS_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bm(ủ|u)\b").expect("pus pattern is valid"));
static LEFT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\btrái\b").expect("left pattern is valid"));
static RIGHT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bphải\b").expect("right pattern is valid"));

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Cruciate ligament named in the diagnosis, if any.
pub fn ligament(text: &str) -> Option<&'static str> {
    let anterior = text.contains("dcct") || text.contains("dây chằng chéo trước");
    let posterior = text.contains("dccs") || text.contains("dây chằng chéo sau");
    match (anterior, posterior) {
        (true, true) => Some("DCCT + DCCS"),
        (true, false) => Some("DCCT"),
        (false, true) => Some("DCCS"),
        (false, false) => None,
    }
}

pub fn mentions_implant(text: &str) -> bool {
    contains_any(text, IMPLANT_KEYWORDS)
}

pub fn mentions_tumor(text: &str) -> bool {
    TUMOR_WORD.is_match(text) || contains_any(text, TUMOR_KEYWORDS)
}

pub fn mentions_infection(text: &str) -> bool {
    contains_any(text, INFECTION_KEYWORDS) || mentions_pus(text)
}

fn mentions_pus(text: &str) -> bool {
    PUS_WORD
        .find_iter(text)
        .any(|word| {
            let before = &text[..word.start()];
            word.as_str() == "mủ" || !PUBIC_BONE_PREFIXES.iter().any(|p| before.ends_with(p))
        })
}

pub fn mentions_soft_tissue_defect(text: &str) -> bool {
    contains_any(text, SOFT_TISSUE_DEFECT_KEYWORDS)
}

pub fn mentions_femoral_neck_fracture(text: &str) -> bool {
    text.contains(FEMORAL_NECK_FRACTURE)
}

pub fn mentions_fracture(text: &str) -> bool {
    text.contains(FRACTURE)
}

/// First anatomical location found, in vocabulary priority order.
pub fn location(text: &str) -> Option<&'static str> {
    LOCATIONS.iter().copied().find(|place| text.contains(place))
}

/// Short laterality marker: `2 bên`, `T` (left) or `P` (right).
pub fn laterality(text: &str) -> Option<&'static str> {
    if text.contains("2 bên") || text.contains("hai bên") {
        Some("2 bên")
    } else if LEFT_WORD.is_match(text) {
        Some("T")
    } else if RIGHT_WORD.is_match(text) {
        Some("P")
    } else {
        None
    }
}
