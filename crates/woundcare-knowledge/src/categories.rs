//! Topic categories with keyword triggers and canned responses.
//!
//! The resolver scans [`Category::ALL`] in order and returns the first
//! category with any keyword contained in the query, so both the category
//! order and each keyword list's order are part of the matching contract.

/// A wound-care topic the chatbot can answer about by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Dressing,
    Infection,
    Prevention,
    Stages,
    Healing,
    Assessment,
    Cleaning,
}

impl Category {
    /// All categories in matching order.
    pub const ALL: [Category; 7] = [
        Category::Dressing,
        Category::Infection,
        Category::Prevention,
        Category::Stages,
        Category::Healing,
        Category::Assessment,
        Category::Cleaning,
    ];

    /// Keywords whose presence in a query selects this category.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Dressing => &["dressing", "bandage", "gauze", "wrap", "cover"],
            Category::Infection => &[
                "infection", "infected", "pus", "odor", "redness", "swelling", "fever",
            ],
            Category::Prevention => &["prevent", "prevention", "avoid", "risk"],
            Category::Stages => &["stage", "grade", "level", "severity"],
            Category::Healing => &["heal", "healing", "recovery", "improve"],
            Category::Assessment => &["assess", "evaluation", "measure", "observe", "check"],
            Category::Cleaning => &["clean", "cleanse", "wash", "irrigate", "rinse"],
        }
    }

    /// The canned response for this category.
    pub fn response(&self) -> &'static str {
        match self {
            Category::Dressing => {
                "Dressing selection depends on wound type, exudate amount, and location. \
                 Common dressings include:\n\
                 - Hydrocolloid: For minimal to moderate exudate\n\
                 - Foam: For moderate to heavy exudate\n\
                 - Alginate: For heavily exudating wounds\n\
                 - Hydrogel: For dry wounds needing moisture\n\
                 - Transparent film: For protection or securing other dressings\n\
                 Change frequency depends on the dressing type and wound condition. Always \
                 follow specific product instructions."
            }
            Category::Infection => {
                "Signs of wound infection include increased pain, redness, swelling, warmth, \
                 purulent drainage (pus), foul odor, fever, and increased wound size. If \
                 infection is suspected, contact a healthcare provider immediately. \
                 Treatment may include antimicrobial dressings, topical antiseptics, or \
                 systemic antibiotics depending on severity."
            }
            Category::Prevention => {
                "Wound prevention strategies include:\n\
                 - Regular skin inspection, especially over bony prominences\n\
                 - Keeping skin clean and dry\n\
                 - Moisturizing dry skin\n\
                 - Proper nutrition and hydration\n\
                 - Pressure redistribution surfaces for at-risk patients\n\
                 - Regular repositioning (every 2 hours for immobile patients)\n\
                 - Protecting skin from moisture, friction, and shear\n\
                 - Managing underlying conditions like diabetes"
            }
            Category::Stages => {
                "Pressure ulcer staging:\n\
                 - Stage I: Non-blanchable erythema (redness) of intact skin\n\
                 - Stage II: Partial-thickness skin loss with exposed dermis\n\
                 - Stage III: Full-thickness skin loss (fat visible)\n\
                 - Stage IV: Full-thickness skin and tissue loss with exposed muscle, \
                 tendon, or bone\n\
                 - Unstageable: Obscured full-thickness skin and tissue loss\n\
                 - Deep Tissue Injury: Persistent non-blanchable deep red, maroon, or purple \
                 discoloration"
            }
            Category::Healing => {
                "Wound healing occurs in four overlapping phases:\n\
                 1. Hemostasis: Blood clotting (minutes to hours)\n\
                 2. Inflammation: Immune response and cleaning (1-4 days)\n\
                 3. Proliferation: New tissue formation (4-21 days)\n\
                 4. Maturation: Scar formation and remodeling (21 days to 2 years)\n\n\
                 Factors that impair healing include poor nutrition, infection, advanced \
                 age, chronic diseases (diabetes, vascular disease), medications (steroids, \
                 chemotherapy), and poor wound care practices."
            }
            Category::Assessment => {
                "Wound assessment should include:\n\
                 - Location and wound type\n\
                 - Size (length, width, depth)\n\
                 - Wound bed appearance and tissue type\n\
                 - Exudate amount and characteristics\n\
                 - Wound edges and surrounding skin\n\
                 - Signs of infection\n\
                 - Pain level\n\
                 - Previous treatments and response\n\
                 Document findings at each dressing change to track healing progress."
            }
            Category::Cleaning => {
                "Wound cleaning recommendations:\n\
                 - Use normal saline or wound cleansers (avoid antiseptics on clean \
                 granulating wounds)\n\
                 - Clean from clean to dirty areas\n\
                 - Use gentle irrigation with 4-15 PSI pressure (syringe with 19G needle)\n\
                 - Pat dry surrounding skin gently\n\
                 - Avoid scrubbing the wound bed\n\
                 - Warm solutions to body temperature for patient comfort\n\
                 - Clean at each dressing change"
            }
        }
    }
}
