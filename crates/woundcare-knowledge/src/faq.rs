//! Frequently-asked-question table.
//!
//! The resolver matches queries against `question` by exact equality,
//! then all-words containment, then substring containment. Each pass runs
//! in table order and the first hit wins, so keep the order stable.

/// One FAQ entry: canonical question phrase and its answer.
#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// All FAQ entries, in definition order.
pub fn faq_entries() -> &'static [FaqEntry] {
    &ENTRIES
}

static ENTRIES: [FaqEntry; 18] = [
    FaqEntry {
        question: "how often should dressings be changed",
        answer: "Dressing change frequency depends on the wound type and exudate amount. \
                 Generally:\n- Hydrocolloid: Every 3-7 days\n- Foam: Every 2-4 days\n\
                 - Alginate: When saturated or every 1-3 days\n- Hydrogel: Daily or every \
                 other day\n- Transparent film: Up to 7 days\nAlways change dressings if they \
                 become loose, saturated, or if there are signs of infection. Follow specific \
                 product instructions and adjust based on wound assessment.",
    },
    FaqEntry {
        question: "signs of infection",
        answer: "Signs of wound infection include: increased pain, increased redness or \
                 warmth around the wound, swelling, purulent drainage (pus), foul odor, \
                 fever, and increased wound size. Delayed healing can also indicate \
                 infection. If infection is suspected, contact the healthcare provider \
                 immediately for evaluation and possible treatment with topical \
                 antimicrobials or systemic antibiotics.",
    },
    FaqEntry {
        question: "pressure ulcer prevention",
        answer: "Pressure ulcer prevention strategies include: frequent repositioning (every \
                 2 hours if mobility limited), use of pressure redistribution surfaces \
                 (specialty mattresses, cushions), daily skin assessment with particular \
                 attention to bony prominences, keeping skin clean and dry, proper nutrition \
                 and hydration, minimizing friction and shear forces during transfers, and \
                 early mobility when possible. For high-risk patients, implement a \
                 comprehensive preventive protocol and document interventions.",
    },
    FaqEntry {
        question: "debridement methods",
        answer: "Common debridement methods include:\n- Autolytic: Using the body's enzymes \
                 with moisture-retentive dressings\n- Enzymatic: Applying topical enzymes to \
                 break down necrotic tissue\n- Mechanical: Wet-to-dry dressings, irrigation, \
                 or ultrasonic debridement\n- Sharp/Surgical: Using scalpel, scissors, or \
                 forceps (requires trained professional)\n- Biological: Maggot therapy using \
                 medical-grade larvae\nThe method chosen depends on wound characteristics, \
                 patient factors, available resources, and provider expertise.",
    },
    FaqEntry {
        question: "wound healing stages",
        answer: "The four stages of wound healing are:\n1. Hemostasis: Blood clotting forms \
                 a scab (minutes to hours)\n2. Inflammation: Increased blood flow and white \
                 blood cells clean the wound (1-4 days)\n3. Proliferation: New tissue \
                 formation with granulation, contraction, and epithelialization (4-21 \
                 days)\n4. Maturation/Remodeling: Collagen reorganization and scar formation \
                 (21 days to 2 years)\nHealing time varies based on wound size, depth, \
                 location, patient factors, and wound care practices.",
    },
    FaqEntry {
        question: "how to measure wounds",
        answer: "Measure wounds consistently using the clock face method (head is 12 \
                 o'clock). Record length (head to toe, 12 to 6 o'clock), width (side to \
                 side, 3 to 9 o'clock), and depth (deepest point using a cotton-tipped \
                 applicator). Measure and document undermining or tunneling with a probe, \
                 noting location using clock positions. Use centimeters for all \
                 measurements. Consider wound tracing or photography to document progress \
                 over time. Measure at regular intervals to track healing.",
    },
    FaqEntry {
        question: "wound bed preparation",
        answer: "Wound bed preparation follows the TIME framework:\nT - Tissue management \
                 (removal of non-viable tissue)\nI - Infection and inflammation control\n\
                 M - Moisture balance (maintain moist wound environment without \
                 maceration)\nE - Edge advancement (ensure epithelial advancement from wound \
                 edges)\nProper preparation creates an optimal healing environment. Clean \
                 the wound, debride non-viable tissue, manage bacterial balance, and \
                 maintain appropriate moisture level.",
    },
    FaqEntry {
        question: "wound assessment",
        answer: "Comprehensive wound assessment includes:\n- Location and wound type\n- Size \
                 (length, width, depth)\n- Wound bed appearance (tissue types: granulation, \
                 slough, eschar)\n- Exudate amount and characteristics\n- Wound edges and \
                 periwound skin condition\n- Pain level\n- Odor\n- Duration of wound\n\
                 - Previous treatments and response\nUse a consistent documentation method \
                 and reassess regularly to track healing progress.",
    },
    FaqEntry {
        question: "nutrition for wound healing",
        answer: "Optimal nutrition for wound healing includes:\n- Protein: 1.2-1.5 g/kg body \
                 weight daily (essential for tissue repair)\n- Calories: 30-35 calories/kg \
                 body weight daily\n- Hydration: 30-35 mL/kg body weight daily\n- Vitamin C: \
                 Supports collagen formation\n- Zinc: Supports protein synthesis and cell \
                 proliferation\n- Vitamin A: Supports epithelialization and immune \
                 function\n- Vitamin D: Supports immune function\nConsider nutritional \
                 supplements for patients with poor intake or increased needs. Consult with \
                 dietitian for comprehensive nutritional assessment.",
    },
    FaqEntry {
        question: "wound documentation",
        answer: "Effective wound documentation should include:\n- Date and time of \
                 assessment\n- Wound location (using anatomical terms)\n- Wound measurements \
                 (length, width, depth)\n- Wound bed characteristics (tissue types and \
                 percentages)\n- Exudate amount, color, consistency, and odor\n- Periwound \
                 skin condition\n- Pain assessment\n- Interventions performed\n- Dressings \
                 applied\n- Patient tolerance of procedure\n- Patient education provided\n\
                 Use consistent terminology and consider photographic documentation when \
                 appropriate.",
    },
    FaqEntry {
        question: "negative pressure wound therapy",
        answer: "Negative Pressure Wound Therapy (NPWT) applies controlled suction to a \
                 wound through a sealed dressing. Indications include: diabetic ulcers, \
                 pressure injuries stages 3-4, surgical wounds, traumatic wounds, and \
                 certain burns. Contraindications include: untreated osteomyelitis, \
                 malignancy in the wound, exposed vessels/organs, untreated coagulopathy, \
                 and necrotic tissue with eschar. Typical settings range from -75 to -125 \
                 mmHg, continuously or intermittently. Change dressing every 48-72 hours or \
                 per manufacturer guidelines.",
    },
    FaqEntry {
        question: "wound pain management",
        answer: "Wound pain management strategies include:\n- Procedural pain: Apply topical \
                 lidocaine (4%) 15-30 minutes before dressing changes\n- Systemic \
                 analgesics: Schedule before anticipated painful procedures\n\
                 - Non-pharmacological: Relaxation techniques, distraction, music therapy\n\
                 - Dressing selection: Choose non-adherent dressings that minimize trauma \
                 during removal\n- Technique: Soak adherent dressings before removal, use \
                 gentle technique\n- Environment: Ensure comfortable temperature and \
                 privacy\nAssess pain using standardized scale and document effectiveness of \
                 interventions.",
    },
    FaqEntry {
        question: "when to refer to wound specialist",
        answer: "Consider referral to wound specialist when:\n- Wound fails to show \
                 improvement after 2-4 weeks of standard care\n- Wound deteriorates or \
                 increases in size\n- Recurrent wounds in same location\n- Suspected deep \
                 tissue infection or osteomyelitis\n- Wounds with exposed tendon, bone, or \
                 joint\n- Complex wounds requiring advanced therapies\n- Arterial \
                 insufficiency requiring revascularization\n- Multiple co-morbidities \
                 complicating healing\nEarly referral can improve outcomes and reduce \
                 healing time for complex wounds.",
    },
    FaqEntry {
        question: "compression therapy",
        answer: "Compression therapy is primary treatment for venous ulcers and venous \
                 insufficiency. Options include:\n- Elastic bandages: Provide sustained \
                 compression but require skilled application\n- Inelastic/short-stretch \
                 bandages: Provide high working pressure during activity\n- Multi-layer \
                 systems: Combine padding, compression, and cohesive layers\n- Compression \
                 stockings: Available in various pressure gradients (15-20, 20-30, 30-40, \
                 40-50 mmHg)\nContraindicated in arterial disease (ABPI <0.8), acute DVT, \
                 severe heart failure, or severe peripheral neuropathy. Assess arterial \
                 circulation before applying compression.",
    },
    FaqEntry {
        question: "wound cleansing",
        answer: "Wound cleansing best practices:\n- Use normal saline or commercial wound \
                 cleanser for most wounds\n- Water (tap, distilled, or boiled) may be \
                 appropriate for some wounds\n- Cleanse at each dressing change\n\
                 - Irrigation pressure: 4-15 PSI (syringe with 19G needle or commercial \
                 irrigator)\n- Cleanse from clean to dirty areas\n- Avoid antiseptics \
                 (povidone-iodine, hydrogen peroxide, chlorhexidine) on clean granulating \
                 wounds\n- Pat dry periwound skin gently\n- Warmed solutions improve patient \
                 comfort\nGoal is to remove debris and excess exudate without damaging \
                 healthy tissue.",
    },
    FaqEntry {
        question: "offloading for diabetic foot ulcers",
        answer: "Offloading methods for diabetic foot ulcers include:\n- Total contact \
                 casting: Gold standard, forces compliance\n- Removable cast walkers: \
                 Effective when made irremovable\n- Half shoes/healing sandals: Offload \
                 forefoot or hindfoot\n- Felt/foam padding: Redistributes pressure away from \
                 ulcer\n- Custom therapeutic footwear: For healed ulcers to prevent \
                 recurrence\nConsistent offloading is essential for healing. Select method \
                 based on ulcer location, patient mobility, compliance, and resources. \
                 Continue offloading until complete wound closure.",
    },
    FaqEntry {
        question: "hyperbaric oxygen therapy",
        answer: "Hyperbaric Oxygen Therapy (HBOT) involves breathing 100% oxygen in a \
                 pressurized chamber, typically at 2.0-2.5 atmospheres for 90-120 minutes \
                 per session. Indications for wound care include: diabetic foot ulcers not \
                 responding to standard care, compromised skin grafts/flaps, necrotizing \
                 soft tissue infections, osteomyelitis, and delayed radiation injury. \
                 Typical treatment course is 20-40 sessions. Contraindications include \
                 untreated pneumothorax, certain chemotherapy agents, and claustrophobia. \
                 HBOT should be used as adjunctive therapy alongside standard wound care.",
    },
    FaqEntry {
        question: "wound dressing selection",
        answer: "Wound dressing selection principles:\n- Match dressing to wound \
                 characteristics and healing goals\n- For dry wounds: Hydrogel, hydrocolloid \
                 to add moisture\n- For minimal exudate: Thin foam, hydrocolloid, \
                 transparent film\n- For moderate exudate: Foam, hydrofiber, alginate\n\
                 - For heavy exudate: Alginate, hydrofiber, super absorbent polymers\n- For \
                 infected wounds: Silver or other antimicrobial dressings\n- For necrotic \
                 wounds: Hydrogel for autolytic debridement\n- For malodorous wounds: \
                 Charcoal dressings\nConsider dressing change frequency, ease of \
                 application, cost, and patient comfort. Reassess and adjust as wound \
                 characteristics change.",
    },
];
