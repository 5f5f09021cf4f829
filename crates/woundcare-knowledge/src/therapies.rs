//! Advanced wound therapy reference data.

use serde::Serialize;

/// A specialized treatment for complex or non-healing wounds.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdvancedTherapy {
    pub name: &'static str,
    pub mechanism: Option<&'static str>,
    pub benefits: &'static [&'static str],
    pub types: &'static [&'static str],
    pub indications: &'static [&'static str],
    pub contraindications: &'static [&'static str],
}

/// All advanced therapies, in definition order.
pub fn advanced_therapies() -> &'static [AdvancedTherapy] {
    &THERAPIES
}

static THERAPIES: [AdvancedTherapy; 4] = [
    AdvancedTherapy {
        name: "negative pressure wound therapy",
        mechanism: Some("Applies controlled subatmospheric pressure to wound bed"),
        benefits: &[
            "Removes excess exudate",
            "Reduces edema",
            "Increases blood flow",
            "Promotes granulation tissue formation",
            "Reduces wound size",
        ],
        types: &[],
        indications: &[
            "Diabetic ulcers",
            "Pressure injuries stages 3-4",
            "Surgical wounds",
            "Traumatic wounds",
            "Skin grafts/flaps",
        ],
        contraindications: &[
            "Untreated osteomyelitis",
            "Malignancy in wound",
            "Exposed vessels",
            "Necrotic tissue with eschar",
            "Untreated coagulopathy",
        ],
    },
    AdvancedTherapy {
        name: "hyperbaric oxygen therapy",
        mechanism: Some("Delivers 100% oxygen under increased atmospheric pressure"),
        benefits: &[
            "Increases oxygenation to hypoxic wound tissues",
            "Enhances neutrophil killing activity",
            "Promotes angiogenesis",
            "Reduces edema",
        ],
        types: &[],
        indications: &[
            "Diabetic foot ulcers",
            "Compromised grafts/flaps",
            "Necrotizing infections",
            "Radiation injuries",
            "Refractory osteomyelitis",
        ],
        contraindications: &[],
    },
    AdvancedTherapy {
        name: "bioengineered skin substitutes",
        mechanism: None,
        benefits: &[],
        types: &[
            "Allografts (cadaveric dermis)",
            "Xenografts (porcine/bovine dermis)",
            "Dermal matrices (acellular)",
            "Living cell therapy (containing fibroblasts and/or keratinocytes)",
        ],
        indications: &[
            "Diabetic foot ulcers",
            "Venous ulcers",
            "Burns",
            "Surgical/traumatic wounds",
        ],
        contraindications: &[],
    },
    AdvancedTherapy {
        name: "growth factors",
        mechanism: Some("Promotes cellular migration, proliferation, and ECM formation"),
        benefits: &[],
        types: &[
            "Platelet-derived growth factor (PDGF)",
            "Epidermal growth factor (EGF)",
            "Platelet-rich plasma (PRP)",
        ],
        indications: &["Diabetic neuropathic ulcers, pressure injuries, chronic wounds"],
        contraindications: &[],
    },
];
