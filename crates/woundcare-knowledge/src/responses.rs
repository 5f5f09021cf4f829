//! Fixed response strings: greetings, defaults, prompts, fallback
//! recommendations, the disclaimer, and the further-reading blurb.

use woundcare_core::models::wound::WoundType;

/// Greeting responses; one is picked at random per greeting query.
pub const GREETINGS: [&str; 3] = [
    "Hello! I'm the AI Care Planner assistant. How can I help with wound care today?",
    "Hi there! I can help answer questions about wound care or generate a personalized \
     care plan. What would you like to know?",
    "Welcome to the AI Care Planner. I'm here to assist with wound care information and \
     recommendations. How can I help you?",
];

/// Default responses for queries nothing else matched.
pub const DEFAULTS: [&str; 3] = [
    "I'm not sure I understand your question. Could you rephrase or ask about a specific \
     wound type, dressing, or care technique?",
    "I don't have specific information about that. Would you like to know about pressure \
     ulcers, diabetic wounds, venous ulcers, arterial ulcers, surgical wounds, or wound \
     care techniques?",
    "I'm not finding specific information for that query. Try asking about wound \
     assessment, dressing selection, signs of infection, or wound healing processes.",
];

/// Prompt returned when a pressure-ulcer query carries no resolvable stage.
pub const STAGE_PROMPT: &str =
    "For pressure ulcers, treatment depends on the stage. Please specify the stage (I-IV, \
     unstageable, or deep tissue injury) for more specific recommendations.";

/// Legal disclaimer attached to every generated care plan.
pub const DISCLAIMER: &str =
    "This care plan is generated for informational purposes only and should not replace \
     professional medical advice. Always consult with a qualified healthcare provider for \
     diagnosis and treatment.";

/// Further-reading pointers for the CLI's resource listing.
pub const RESOURCES: &str =
    "For more detailed wound care information, please consult these trusted resources:\n\
     - National Pressure Injury Advisory Panel (NPIAP): https://npiap.com\n\
     - Wound, Ostomy and Continence Nurses Society: https://www.wocn.org\n\
     - Agency for Healthcare Research and Quality: https://www.ahrq.gov\n\
     Always consult with a healthcare professional for specific patient care.";

/// Last-resort recommendation when a wound type has no advice entry and
/// no per-type fallback either.
pub const GENERIC_RECOMMENDATION: &str =
    "Clean wound with saline solution. Apply appropriate dressing based on wound \
     assessment. Reassess regularly for signs of healing or complications.";

/// Short per-type fallback recommendations.
///
/// A second, independent tier below the advice table: shorter texts the
/// care-plan generator uses when the advice table has nothing for the
/// type. Burn is absent here too and drops to
/// [`GENERIC_RECOMMENDATION`].
pub fn fallback_recommendations(wound_type: WoundType) -> Option<&'static str> {
    match wound_type {
        WoundType::Pressure => Some(
            "Assess skin daily. Keep area clean and dry. Reposition every 2 hours. Use \
             pressure redistribution surface. Clean wound with appropriate solution based \
             on wound assessment. Apply dressing appropriate for wound characteristics and \
             exudate amount.",
        ),
        WoundType::Diabetic => Some(
            "Offload pressure from wound. Clean with saline solution. Debride necrotic \
             tissue if present. Apply appropriate dressing based on wound assessment. \
             Monitor blood glucose levels. Assess for signs of infection.",
        ),
        WoundType::Venous => Some(
            "Apply compression therapy as appropriate. Elevate legs. Clean wound gently. \
             Apply appropriate dressing based on exudate level. Consider referral to \
             vascular specialist.",
        ),
        WoundType::Arterial => Some(
            "Protect wound from trauma. Clean gently with saline. Do not use compression. \
             Apply non-adherent dressing. Refer to vascular specialist for evaluation.",
        ),
        WoundType::Surgical => Some(
            "Clean with saline solution. Apply appropriate dressing based on wound depth \
             and exudate. Monitor for signs of infection. Follow surgeon's specific \
             instructions.",
        ),
        WoundType::Traumatic => Some(
            "Clean thoroughly. Remove debris if present. Consider tetanus prophylaxis. \
             Apply appropriate dressing based on wound characteristics.",
        ),
        WoundType::Burn => None,
    }
}
