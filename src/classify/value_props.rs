use log::trace;

use super::types::CompanyRecord;

/// Keyword triggers over the value proposition, checked in order
const VALUE_PROP_TRIGGERS: &[(&[&str], &str)] = &[
    (&["automate"], "The Manual Process Tax - Spending 20+ hrs/week on work that should be automated"),
    (&["scale", "scaling"], "The Scaling Wall - What worked at 10X breaks at 100X"),
    (&["attribution", "visibility"], "The Attribution Black Hole - Can't connect activity to revenue"),
    (&["data", "analytics"], "The Data Silo Problem - Critical data trapped in disconnected tools"),
    (&["cost", "expensive"], "The Cost Creep Crisis - Spend growing 3x faster than efficiency"),
    (&["fraud", "security"], "The Security-UX Tradeoff - Lock down systems OR keep users happy"),
];

/// Placeholder value prop used when too few triggers fire
pub fn placeholder_value_prop(company_name: &str) -> String {
    format!("The {} Challenge - Specific pain point TBD", company_name)
}

/// Generate exactly three named value propositions for a company.
///
/// Every matching trigger is collected before truncating, so when more than
/// three fire only the first three in check order are kept.
pub fn generate_value_props(record: &CompanyRecord) -> [String; 3] {
    let value_prop = record.value_proposition.to_lowercase();

    let mut props: Vec<String> = VALUE_PROP_TRIGGERS
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|keyword| value_prop.contains(keyword)))
        .map(|(_, prop)| prop.to_string())
        .collect();

    trace!("{}: {} value prop triggers matched", record.company_name, props.len());

    while props.len() < 3 {
        props.push(placeholder_value_prop(&record.company_name));
    }
    props.truncate(3);

    let mut props = props.into_iter();
    [
        props.next().unwrap_or_default(),
        props.next().unwrap_or_default(),
        props.next().unwrap_or_default(),
    ]
}
