//! Wire-level DTOs for the ANAF VAT-payer endpoint.
//!
//! The request is a JSON array of `{"cui": <int>, "data": "YYYY-MM-DD"}`.
//! Responses carry a `found` list of wrapped `date_generale` records and a
//! `notfound` list of `{cui, data}` pairs. The endpoint returns many more
//! fields than mapped here; unknown fields are ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One line of the batched lookup request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CuiQuery {
    pub cui: u64,
    /// Reference date, serialized as `YYYY-MM-DD`.
    pub data: NaiveDate,
}

/// Top-level ANAF response.
#[derive(Debug, Deserialize)]
pub(crate) struct AnafResponse {
    #[serde(default)]
    #[allow(dead_code)]
    pub cod: Option<i32>,
    #[serde(default)]
    #[allow(dead_code)]
    pub message: Option<String>,
    #[serde(default)]
    pub found: Vec<FoundEntry>,
    #[serde(default)]
    pub notfound: Vec<NotFoundEntry>,
}

/// A `found` entry; the payload sits in the nested `date_generale` record.
#[derive(Debug, Deserialize)]
pub(crate) struct FoundEntry {
    #[serde(default)]
    pub date_generale: Option<GeneralData>,
}

/// The general-data record of a found company. Date fields stay textual
/// here; parsing happens during mapping so a bad date degrades to `None`
/// instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub(crate) struct GeneralData {
    #[serde(default)]
    pub cui: Option<u64>,
    #[serde(default, rename = "data")]
    pub reference_date: Option<String>,
    #[serde(default, rename = "denumire")]
    pub company_name: Option<String>,
    #[serde(default, rename = "adresa")]
    pub address: Option<String>,
    #[serde(default, rename = "telefon")]
    pub phone_number: Option<String>,
    #[serde(default, rename = "codPostal")]
    pub postal_code: Option<String>,
    #[serde(default, rename = "data_inregistrare")]
    pub registration_date: Option<String>,
    #[serde(default, rename = "scpTVA")]
    pub is_vat_payer: Option<bool>,
    #[serde(default, rename = "data_inceput_ScpTVA")]
    pub vat_registration_date: Option<String>,
    #[serde(default, rename = "dataInceputTvaInc")]
    pub split_vat_start_date: Option<String>,
    #[serde(default, rename = "statusInactivi")]
    pub is_inactive: Option<bool>,
}

/// A `notfound` entry.
#[derive(Debug, Deserialize)]
pub(crate) struct NotFoundEntry {
    #[serde(default)]
    pub cui: Option<u64>,
    #[serde(default, rename = "data")]
    #[allow(dead_code)]
    pub data: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_line_serializes_to_wire_shape() {
        let query = CuiQuery {
            cui: 18547290,
            data: NaiveDate::from_ymd_opt(2026, 1, 19).unwrap(),
        };
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"cui":18547290,"data":"2026-01-19"}"#);
    }

    #[test]
    fn response_with_unknown_fields_is_accepted() {
        let json = r#"{
            "cod": 200,
            "message": "SUCCESS",
            "found": [{
                "date_generale": {
                    "cui": 18547290,
                    "denumire": "TEST COMPANY SRL",
                    "nrRegCom": "J40/1234/2020",
                    "iban": "RO49AAAA1B31007593840000",
                    "scpTVA": true
                },
                "inregistrare_scop_Tva": {}
            }],
            "notfound": []
        }"#;
        let resp: AnafResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.found.len(), 1);
        let general = resp.found[0].date_generale.as_ref().unwrap();
        assert_eq!(general.cui, Some(18547290));
        assert_eq!(general.company_name.as_deref(), Some("TEST COMPANY SRL"));
        assert_eq!(general.is_vat_payer, Some(true));
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let resp: AnafResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.found.is_empty());
        assert!(resp.notfound.is_empty());
    }
}
