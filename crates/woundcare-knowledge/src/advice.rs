//! Treatment advice keyed by wound type and stage.
//!
//! Pressure ulcers carry one entry per stage; burns carry depth entries
//! (superficial/partial/full) and deliberately no `general` entry; every
//! other type has a single `general` entry. Stage keys are free-form
//! strings because the chatbot resolves them from user text before the
//! lookup, including keys that never match (see the resolver).

use woundcare_core::models::wound::{WoundStage, WoundType};

/// One advice entry: wound type, stage key, treatment text.
#[derive(Debug, Clone, Copy)]
pub struct AdviceEntry {
    pub wound_type: WoundType,
    pub stage_key: &'static str,
    pub text: &'static str,
}

/// Stage key used by wound types with a single, stage-independent entry.
pub const GENERAL: &str = "general";

/// All advice entries, in definition order.
pub fn advice_entries() -> &'static [AdviceEntry] {
    &ENTRIES
}

/// Advice text for a wound type and stage key, if present.
pub fn advice(wound_type: WoundType, stage_key: &str) -> Option<&'static str> {
    ENTRIES
        .iter()
        .find(|e| e.wound_type == wound_type && e.stage_key == stage_key)
        .map(|e| e.text)
}

/// The `general` advice for a wound type, if it has one.
pub fn general_advice(wound_type: WoundType) -> Option<&'static str> {
    advice(wound_type, GENERAL)
}

/// Pressure-ulcer advice for a classified stage.
pub fn pressure_stage_advice(stage: WoundStage) -> Option<&'static str> {
    advice(WoundType::Pressure, stage.as_str())
}

static ENTRIES: [AdviceEntry; 14] = [
    AdviceEntry {
        wound_type: WoundType::Pressure,
        stage_key: "stage1",
        text: "Assess skin daily. Keep area clean and dry. Apply protective barrier cream. \
               Reposition every 2 hours. Use pressure redistribution surface. Protect from \
               friction and shear. Ensure adequate nutrition and hydration.",
    },
    AdviceEntry {
        wound_type: WoundType::Pressure,
        stage_key: "stage2",
        text: "Clean wound with saline solution. Apply hydrocolloid or foam dressing. Change \
               dressing every 3-7 days or when leakage occurs. Reposition every 2 hours. Use \
               pressure redistribution surface. Protect surrounding skin with barrier product. \
               Monitor for signs of infection. Ensure adequate nutrition with focus on protein \
               intake.",
    },
    AdviceEntry {
        wound_type: WoundType::Pressure,
        stage_key: "stage3",
        text: "Clean wound with saline solution. Pack wound with alginate or hydrogel as \
               appropriate for wound bed moisture. Cover with foam dressing. Change dressing \
               daily or when saturated. Consider negative pressure wound therapy for \
               appropriate candidates. Obtain wound culture if signs of infection present. \
               Provide pressure redistribution surface. Consult dietitian for nutritional \
               support. Consider specialty wound care consult.",
    },
    AdviceEntry {
        wound_type: WoundType::Pressure,
        stage_key: "stage4",
        text: "Surgical consultation may be needed. Clean wound with saline solution. Pack \
               wound with alginate or hydrogel based on wound characteristics. Cover with foam \
               dressing. Change dressing daily or when saturated. Consider negative pressure \
               wound therapy. Assess for osteomyelitis if bone is exposed. Provide bariatric \
               pressure redistribution surface. Implement comprehensive nutrition plan with \
               protein supplementation. Monitor for complications including tunneling and \
               undermining.",
    },
    AdviceEntry {
        wound_type: WoundType::Pressure,
        stage_key: "unstageable",
        text: "Do not remove stable, dry eschar unless infected. Keep area clean and dry. \
               Monitor for signs of infection including erythema and fluctuance of surrounding \
               tissue. Surgical debridement may be needed for infected wounds. Provide \
               pressure redistribution surface. Reposition every 2 hours. Optimize nutrition \
               and hydration. Reassess when eschar softens or lifts to determine true stage.",
    },
    AdviceEntry {
        wound_type: WoundType::Pressure,
        stage_key: "deepTissue",
        text: "Observe area closely and protect from further pressure. Do not massage area. \
               Use pressure redistribution surface. Reposition frequently. Monitor for changes \
               in tissue integrity as deep tissue injury may evolve into a higher stage \
               pressure injury. Keep area clean and dry. Ensure optimal nutrition with \
               adequate protein intake. Document changes in appearance daily.",
    },
    AdviceEntry {
        wound_type: WoundType::Diabetic,
        stage_key: GENERAL,
        text: "Offload pressure from wound. Clean with saline solution. Debride necrotic \
               tissue if present and appropriate. Apply hydrogel for dry wounds or \
               foam/alginate for exudating wounds. Assess for infection. Monitor blood \
               glucose levels, aiming for optimal glycemic control. Consider specialized \
               footwear to prevent further ulceration. Evaluate vascular status. Provide \
               comprehensive diabetes management education. Consider advanced therapies for \
               wounds not progressing with standard care after 4 weeks.",
    },
    AdviceEntry {
        wound_type: WoundType::Venous,
        stage_key: GENERAL,
        text: "Clean with saline solution. Apply compression therapy (30-40 mmHg) if arterial \
               supply adequate. Elevate legs above heart level when sitting or lying down. \
               Apply zinc oxide impregnated bandage or foam dressing based on exudate level. \
               Change dressing 2-3 times per week or when strike-through occurs. Protect \
               periwound skin with barrier cream. Consider pentoxifylline or aspirin therapy \
               in consultation with provider. Encourage walking and ankle exercises. Provide \
               education on long-term compression therapy needs.",
    },
    AdviceEntry {
        wound_type: WoundType::Arterial,
        stage_key: GENERAL,
        text: "Protect wound with non-adherent dressing. Do not use compression. Keep wound \
               clean and moist. Consult vascular surgeon for evaluation and possible \
               revascularization. Avoid trauma to lower extremities. Position with feet \
               dependent if rest pain present. Manage pain as prescribed. Monitor for signs \
               of infection. Keep dressings minimal to avoid pressure on compromised tissue. \
               Educate on smoking cessation if applicable.",
    },
    AdviceEntry {
        wound_type: WoundType::Surgical,
        stage_key: GENERAL,
        text: "Clean with saline solution. Apply appropriate dressing based on exudate amount \
               - non-adherent or impregnated gauze for minimal exudate, foam for moderate \
               exudate. Monitor for signs of infection including increased pain, erythema, or \
               purulent drainage. Remove sutures/staples as ordered. Support wound edges with \
               steri-strips if needed after suture removal. Educate on activity restrictions. \
               Ensure adequate nutrition for healing. Report dehiscence or evisceration \
               immediately.",
    },
    AdviceEntry {
        wound_type: WoundType::Traumatic,
        stage_key: GENERAL,
        text: "Clean thoroughly with saline solution. Remove debris if present. Consider \
               tetanus prophylaxis if indicated. Apply appropriate dressing based on wound \
               type and exudate. For abrasions, consider transparent film. For lacerations, \
               steri-strips or sutures may be needed. For contusions, monitor for expanding \
               hematoma. Elevate injured extremity if edema present. Assess for underlying \
               structural damage. Monitor for signs of infection. Manage pain appropriately.",
    },
    AdviceEntry {
        wound_type: WoundType::Burn,
        stage_key: "superficial",
        text: "Cool burn with room temperature water for 10-15 minutes (if within first \
               hour). Clean gently with mild soap and water. Apply moisturizer or aloe vera \
               gel. Cover with non-adherent dressing if needed. Do not use ice. Protect from \
               sun exposure during healing. Manage pain with prescribed analgesics.",
    },
    AdviceEntry {
        wound_type: WoundType::Burn,
        stage_key: "partial",
        text: "Clean gently with mild soap and water or saline. Apply antimicrobial dressing \
               such as silver sulfadiazine or silver-impregnated dressing. Cover with bulky \
               dressing to absorb exudate and protect. Change dressing daily or as \
               recommended. Elevate burned extremity. Manage pain. Monitor for signs of \
               infection. Consider burn specialist referral for burns >10% BSA.",
    },
    AdviceEntry {
        wound_type: WoundType::Burn,
        stage_key: "full",
        text: "Immediate emergency department evaluation required. Until transport: Cover \
               with clean, dry sheet or dressing. Do not apply creams or ointments. Keep \
               patient warm. Elevate burned extremities. Monitor for signs of shock. Do not \
               remove clothing stuck to burn. Do not break blisters.",
    },
];
