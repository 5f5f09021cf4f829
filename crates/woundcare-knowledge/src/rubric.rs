//! Standardized wound assessment rubric.

use serde::Serialize;

/// One rubric section, e.g. "wound bed appearance".
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RubricSection {
    pub name: &'static str,
    pub items: &'static [RubricItem],
}

/// A term and its clinical description within a rubric section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RubricItem {
    pub term: &'static str,
    pub description: &'static str,
}

/// The assessment rubric, in section order.
pub fn assessment_rubric() -> &'static [RubricSection] {
    &SECTIONS
}

static SECTIONS: [RubricSection; 4] = [
    RubricSection {
        name: "wound bed appearance",
        items: &[
            RubricItem {
                term: "granulation",
                description: "Red, moist, granular tissue; optimal for healing",
            },
            RubricItem {
                term: "epithelialization",
                description: "Pink or white new skin growth from edges or islands",
            },
            RubricItem {
                term: "slough",
                description: "Yellow/white fibrinous tissue; requires debridement",
            },
            RubricItem {
                term: "eschar",
                description: "Black/brown necrotic tissue; may need debridement",
            },
            RubricItem {
                term: "fibrin",
                description: "Sticky yellow/white stringy tissue on wound surface",
            },
        ],
    },
    RubricSection {
        name: "exudate amount",
        items: &[
            RubricItem {
                term: "none",
                description: "Wound tissue dry",
            },
            RubricItem {
                term: "minimal",
                description: "Wound tissue moist; no measurable exudate",
            },
            RubricItem {
                term: "moderate",
                description: "Wound tissues saturated; drainage involves \u{2264}75% dressing",
            },
            RubricItem {
                term: "heavy",
                description: "Wound tissues bathed in fluid; drainage involves >75% dressing",
            },
        ],
    },
    RubricSection {
        name: "exudate type",
        items: &[
            RubricItem {
                term: "serous",
                description: "Clear, watery plasma",
            },
            RubricItem {
                term: "sanguineous",
                description: "Fresh bleeding, bright red",
            },
            RubricItem {
                term: "serosanguineous",
                description: "Pink-red, watery",
            },
            RubricItem {
                term: "purulent",
                description: "Thick, opaque yellow/green/brown drainage (indicates infection)",
            },
        ],
    },
    RubricSection {
        name: "periwound condition",
        items: &[
            RubricItem {
                term: "intact",
                description: "Skin intact with normal appearance",
            },
            RubricItem {
                term: "macerated",
                description: "White, soggy skin due to excessive moisture",
            },
            RubricItem {
                term: "erythematous",
                description: "Redness, may indicate inflammation or early pressure damage",
            },
            RubricItem {
                term: "indurated",
                description: "Abnormally hard tissue when palpated",
            },
            RubricItem {
                term: "edematous",
                description: "Swollen due to excess fluid in tissues",
            },
            RubricItem {
                term: "excoriated",
                description: "Abraded or scraped skin",
            },
            RubricItem {
                term: "dry/flaky",
                description: "Dehydrated skin lacking moisture",
            },
        ],
    },
];
