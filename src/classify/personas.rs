use log::trace;

use super::types::CompanyRecord;

/// Persona keyword triggers mapped to GTM role titles, checked in order
const PERSONA_TRIGGERS: &[(&[&str], &str)] = &[
    (&["head of growth", "growth market"], "Head of Growth"),
    (&["head of marketing", "cmo"], "VP of Marketing"),
    (&["revenue", "revops"], "VP Revenue Operations"),
    (&["demand gen"], "Head of Demand Generation"),
    (&["head of sales", "vp sales"], "VP of Sales"),
    (&["customer success"], "VP of Customer Success"),
    (&["product manager", "head of product"], "VP of Product"),
    (&["partnerships"], "Head of Partnerships"),
];

/// Roles used to fill the list when too few personas are recognized
pub const DEFAULT_ROLES: [&str; 3] = ["Head of Growth", "VP of Marketing", "Head of Demand Generation"];

/// Role titles whose keywords appear in the personas field, in trigger order
pub fn recognize_personas(record: &CompanyRecord) -> Vec<&'static str> {
    let personas = record.personas.to_lowercase();

    let mut roles: Vec<&'static str> = Vec::with_capacity(PERSONA_TRIGGERS.len());
    for &(keywords, role) in PERSONA_TRIGGERS {
        if keywords.iter().any(|keyword| personas.contains(keyword)) && !roles.contains(&role) {
            roles.push(role);
        }
    }

    trace!("{}: recognized personas {:?}", record.company_name, roles);
    roles
}

/// Extract exactly three GTM personas for a company
pub fn extract_personas(record: &CompanyRecord) -> [String; 3] {
    extract_personas_counted(record).0
}

/// Extract three personas along with how many were recognized before padding
pub fn extract_personas_counted(record: &CompanyRecord) -> ([String; 3], usize) {
    let mut roles = recognize_personas(record);
    let recognized = roles.len();

    for role in DEFAULT_ROLES {
        if roles.len() >= 3 {
            break;
        }
        if !roles.contains(&role) {
            roles.push(role);
        }
    }
    roles.truncate(3);

    ([roles[0].to_string(), roles[1].to_string(), roles[2].to_string()], recognized)
}
