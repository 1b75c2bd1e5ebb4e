use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Company information retrieved from the ANAF registry.
///
/// When [`found_in_registry`](Self::found_in_registry) is `false`, only
/// `cui` and `reference_date` are populated; every other attribute is
/// `None`/`false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// The CUI number (without RO prefix).
    pub cui: u64,
    /// The reference date for which data was retrieved.
    pub reference_date: Option<NaiveDate>,
    /// The registered company name.
    pub company_name: Option<String>,
    /// The date when the company was registered.
    pub registration_date: Option<NaiveDate>,
    /// The registered company address.
    pub address: Option<String>,
    /// The registered phone number.
    pub phone_number: Option<String>,
    /// The postal code.
    pub postal_code: Option<String>,
    /// Whether the company is registered for VAT.
    pub is_vat_payer: bool,
    /// The date when VAT registration started.
    pub vat_registration_date: Option<NaiveDate>,
    /// Whether the company uses the split VAT regime.
    pub is_split_vat: bool,
    /// Whether the company is fiscally inactive.
    pub is_inactive: bool,
    /// Whether the CUI was found in the ANAF registry.
    pub found_in_registry: bool,
}

impl CompanyInfo {
    /// Creates a company info for a CUI not found in the registry.
    #[must_use]
    pub fn not_found(cui: u64, reference_date: NaiveDate) -> Self {
        Self {
            cui,
            reference_date: Some(reference_date),
            company_name: None,
            registration_date: None,
            address: None,
            phone_number: None,
            postal_code: None,
            is_vat_payer: false,
            vat_registration_date: None,
            is_split_vat: false,
            is_inactive: false,
            found_in_registry: false,
        }
    }
}

/// Re-key lookup results by CUI.
///
/// [`AnafClient::lookup_batch`](crate::anaf::AnafClient::lookup_batch) does
/// not guarantee input order, so callers matching results back to their
/// inputs should go through this map. If the registry returned duplicate
/// entries for a CUI, the last one wins.
#[must_use]
pub fn index_by_cui(results: &[CompanyInfo]) -> BTreeMap<u64, &CompanyInfo> {
    results.iter().map(|info| (info.cui, info)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn not_found_has_only_cui_and_date() {
        let info = CompanyInfo::not_found(10000008, date(2026, 1, 19));
        assert!(!info.found_in_registry);
        assert_eq!(info.cui, 10000008);
        assert_eq!(info.reference_date, Some(date(2026, 1, 19)));
        assert!(info.company_name.is_none());
        assert!(!info.is_vat_payer);
        assert!(!info.is_split_vat);
        assert!(!info.is_inactive);
    }

    #[test]
    fn index_keys_by_cui() {
        let results = vec![
            CompanyInfo::not_found(27, date(2026, 1, 19)),
            CompanyInfo::not_found(108, date(2026, 1, 19)),
        ];
        let by_cui = index_by_cui(&results);
        assert_eq!(by_cui.len(), 2);
        assert_eq!(by_cui[&27].cui, 27);
        assert_eq!(by_cui[&108].cui, 108);
    }
}
