//! Sector classification rules.

use super::CompanyProfile;
use crate::model::Sector;

/// Ordered (keyword, sector) rules, evaluated top to bottom against a
/// lowercased profile string. First match wins.
const KEYWORD_RULES: &[(&str, Sector)] = &[
    ("software", Sector::Technology),
    ("semiconductor", Sector::Technology),
    ("technology", Sector::Technology),
    ("bank", Sector::Financials),
    ("financial", Sector::Financials),
    ("finance", Sector::Financials),
    ("insurance", Sector::Financials),
    ("energy", Sector::Energy),
    ("oil", Sector::Energy),
    ("gas", Sector::Energy),
    ("health", Sector::Healthcare),
    ("biotech", Sector::Healthcare),
    ("pharma", Sector::Healthcare),
    ("industrial", Sector::Industrials),
    ("manufacturing", Sector::Industrials),
    ("consumer", Sector::Consumer),
];

/// Map a raw sector or industry string into the closed sector set.
pub fn classify(text: &str) -> Option<Sector> {
    let lowered = text.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, sector)| *sector)
}

/// Resolve a company profile into a sector.
///
/// The explicit sector string wins over the industry string. A sector
/// string outside the rule set still names a real sector and maps to
/// `Other`; a profile with no usable string maps to `Unknown`.
pub fn resolve_sector(profile: &CompanyProfile) -> Sector {
    if let Some(sector) = non_empty(profile.sector.as_deref()) {
        return classify(sector).unwrap_or(Sector::Other);
    }
    if let Some(industry) = non_empty(profile.industry.as_deref()) {
        return classify(industry).unwrap_or(Sector::Unknown);
    }
    Sector::Unknown
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn profile(sector: Option<&str>, industry: Option<&str>) -> CompanyProfile {
        CompanyProfile {
            sector: sector.map(str::to_string),
            industry: industry.map(str::to_string),
        }
    }

    #[test]
    fn test_keyword_classification() {
        assert_eq!(classify("Semiconductors"), Some(Sector::Technology));
        assert_eq!(classify("Regional Banks"), Some(Sector::Financials));
        assert_eq!(classify("Oil & Gas E&P"), Some(Sector::Energy));
        assert_eq!(classify("Drug Manufacturers - Pharma"), Some(Sector::Healthcare));
        assert_eq!(classify("Specialty Industrial Machinery"), Some(Sector::Industrials));
        assert_eq!(classify("Consumer Electronics"), Some(Sector::Consumer));
        assert_eq!(classify("Real Estate Services"), None);
    }

    #[test]
    fn test_rules_apply_in_priority_order() {
        // Matches both "software" and "consumer"; the earlier rule wins.
        assert_eq!(classify("Consumer Software"), Some(Sector::Technology));
    }

    #[test]
    fn test_sector_string_wins_over_industry() {
        let p = profile(Some("Energy"), Some("Software - Infrastructure"));
        assert_eq!(resolve_sector(&p), Sector::Energy);
    }

    #[test]
    fn test_unmatched_sector_string_maps_to_other() {
        let p = profile(Some("Utilities"), None);
        assert_eq!(resolve_sector(&p), Sector::Other);
    }

    #[test]
    fn test_industry_fallback() {
        let p = profile(None, Some("Biotechnology"));
        assert_eq!(resolve_sector(&p), Sector::Healthcare);
    }

    #[test]
    fn test_empty_profile_is_unknown() {
        assert_eq!(resolve_sector(&profile(None, None)), Sector::Unknown);
        assert_eq!(resolve_sector(&profile(Some("  "), Some(""))), Sector::Unknown);
    }

    #[test]
    fn test_unmatched_industry_is_unknown() {
        let p = profile(None, Some("Publishing"));
        assert_eq!(resolve_sector(&p), Sector::Unknown);
    }
}
