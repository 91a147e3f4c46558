use log::trace;

use super::types::{CompanyRecord, PlaybookType};

/// Which free-text field a playbook rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Icp,
    Personas,
}

/// Playbook rules in priority order. The first rule with any matching keyword wins.
const PLAYBOOK_RULES: &[(PlaybookType, Field, &[&str])] = &[
    // Milestone (stage-based)
    (PlaybookType::LateStageScaling, Field::Icp, &["series e", "series d", "unicorn", "$1b"]),
    (PlaybookType::SeriesBcScaling, Field::Icp, &["series b", "series c", "5-20m arr"]),
    (PlaybookType::SeriesAGrowth, Field::Icp, &["series a", "early-stage", "seed"]),
    // Practitioner (role-based)
    (PlaybookType::HeadOfGrowth, Field::Personas, &["head of growth", "growth market"]),
    (PlaybookType::VpRevenueOps, Field::Personas, &["vp revenue", "revops"]),
    (PlaybookType::VpCustomerSuccess, Field::Personas, &["customer success"]),
    (PlaybookType::VpProduct, Field::Personas, &["product manager", "head of product"]),
    // Sector (industry-specific)
    (PlaybookType::HealthTech, Field::Icp, &["healthcare", "medical", "hospital"]),
    (PlaybookType::FinTech, Field::Icp, &["fintech", "financial services", "banking"]),
    (PlaybookType::Web3Crypto, Field::Icp, &["crypto", "web3", "blockchain"]),
    (PlaybookType::DevOpsInfrastructure, Field::Icp, &["devops", "platform engineering", "sre"]),
];

/// Pick the playbook for a company
pub fn select_playbook(record: &CompanyRecord) -> PlaybookType {
    let icp = record.icp.to_lowercase();
    let personas = record.personas.to_lowercase();

    for (playbook, field, keywords) in PLAYBOOK_RULES {
        let text = match field {
            Field::Icp => &icp,
            Field::Personas => &personas,
        };

        if let Some(keyword) = keywords.iter().find(|keyword| text.contains(*keyword)) {
            trace!("{}: matched '{}' -> {}", record.company_name, keyword, playbook);
            return *playbook;
        }
    }

    trace!("{}: no playbook keyword matched, using default", record.company_name);
    PlaybookType::GeneralB2bSaas
}

/// Pick the playbook for a company and return its `(label, description)` pair
pub fn determine_playbook(record: &CompanyRecord) -> (&'static str, &'static str) {
    let playbook = select_playbook(record);
    (playbook.label(), playbook.description())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn record(icp: &str, personas: &str) -> CompanyRecord {
        CompanyRecord::new("Acme", icp, "", personas)
    }

    #[test_case("Series E enterprise", PlaybookType::LateStageScaling ; "series e")]
    #[test_case("Series D growth equity", PlaybookType::LateStageScaling ; "series d")]
    #[test_case("Recently crowned unicorn", PlaybookType::LateStageScaling ; "unicorn")]
    #[test_case("Valued above $1B", PlaybookType::LateStageScaling ; "billion valuation")]
    #[test_case("Series B SaaS company", PlaybookType::SeriesBcScaling ; "series b")]
    #[test_case("Companies at 5-20M ARR", PlaybookType::SeriesBcScaling ; "arr band")]
    #[test_case("Series C marketplaces", PlaybookType::SeriesBcScaling ; "series c")]
    #[test_case("Series A startups", PlaybookType::SeriesAGrowth ; "series a")]
    #[test_case("Seed funded startups", PlaybookType::SeriesAGrowth ; "seed")]
    #[test_case("Early-stage founders", PlaybookType::SeriesAGrowth ; "early stage")]
    #[test_case("Healthcare providers", PlaybookType::HealthTech ; "healthcare")]
    #[test_case("Medical device makers", PlaybookType::HealthTech ; "medical")]
    #[test_case("Hospital networks", PlaybookType::HealthTech ; "hospital")]
    #[test_case("Fintech lenders", PlaybookType::FinTech ; "fintech")]
    #[test_case("Financial services firms", PlaybookType::FinTech ; "financial services")]
    #[test_case("Regional banking institutions", PlaybookType::FinTech ; "banking")]
    #[test_case("Crypto exchanges", PlaybookType::Web3Crypto ; "crypto")]
    #[test_case("Web3 protocols", PlaybookType::Web3Crypto ; "web3")]
    #[test_case("Blockchain analytics vendors", PlaybookType::Web3Crypto ; "blockchain")]
    #[test_case("DevOps teams", PlaybookType::DevOpsInfrastructure ; "devops")]
    #[test_case("SRE orgs", PlaybookType::DevOpsInfrastructure ; "sre")]
    #[test_case("Platform engineering teams", PlaybookType::DevOpsInfrastructure ; "platform engineering")]
    #[test_case("Mid-market retailers", PlaybookType::GeneralB2bSaas ; "no match")]
    fn test_icp_keywords(icp: &str, expected: PlaybookType) {
        assert_eq!(select_playbook(&record(icp, "")), expected);
    }

    #[test_case("Head of Growth, CMO", PlaybookType::HeadOfGrowth ; "head of growth")]
    #[test_case("Growth Marketing Manager", PlaybookType::HeadOfGrowth ; "growth marketing")]
    #[test_case("VP Revenue", PlaybookType::VpRevenueOps ; "vp revenue")]
    #[test_case("RevOps Lead", PlaybookType::VpRevenueOps ; "revops")]
    #[test_case("Director of Customer Success", PlaybookType::VpCustomerSuccess ; "customer success")]
    #[test_case("Senior Product Manager", PlaybookType::VpProduct ; "product manager")]
    #[test_case("Head of Product", PlaybookType::VpProduct ; "head of product")]
    fn test_persona_keywords(personas: &str, expected: PlaybookType) {
        assert_eq!(select_playbook(&record("", personas)), expected);
    }

    #[test]
    fn test_stage_beats_role_and_industry() {
        let rec = record("Series C fintech serving hospitals", "Head of Growth");
        assert_eq!(select_playbook(&rec), PlaybookType::SeriesBcScaling);
    }

    #[test]
    fn test_role_beats_industry() {
        let rec = record("Healthcare providers", "RevOps team");
        assert_eq!(select_playbook(&rec), PlaybookType::VpRevenueOps);
    }

    #[test]
    fn test_late_stage_checked_before_mid_stage() {
        let rec = record("Series B to Series D companies", "");
        assert_eq!(select_playbook(&rec), PlaybookType::LateStageScaling);
    }

    #[test]
    fn test_role_keywords_ignored_in_icp() {
        // Role groups only look at the personas field
        let rec = record("Sold to the head of growth", "");
        assert_eq!(select_playbook(&rec), PlaybookType::GeneralB2bSaas);
    }

    #[test]
    fn test_determine_playbook_pair() {
        let rec = record("Series B SaaS company", "Head of Growth");
        assert_eq!(
            determine_playbook(&rec),
            ("Milestone - Series B/C Scaling", "Mid-stage scaling through RevOps chaos")
        );
    }

    #[test]
    fn test_result_is_always_a_known_pair() {
        let known: Vec<(&str, &str)> = PlaybookType::ALL
            .iter()
            .map(|playbook| (playbook.label(), playbook.description()))
            .collect();

        let records = [
            record("Series E unicorn", "RevOps"),
            record("Seed healthcare", ""),
            record("Crypto custody", "VP Sales"),
            record("", "Customer Success"),
            record("Retail", "Partnerships"),
            CompanyRecord::default(),
        ];
        for rec in &records {
            assert!(known.contains(&determine_playbook(rec)), "unexpected pair for {:?}", rec);
        }
    }

    #[test]
    fn test_empty_record_defaults() {
        assert_eq!(
            determine_playbook(&CompanyRecord::default()),
            ("Practitioner - General B2B SaaS", "B2B SaaS growth and operations")
        );
    }
}
