//! Quotation request validation and the classify -> compute -> merge ->
//! prune pipeline.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::document::{merge, prune_for_family, Document, PlaceholderMap};
use crate::errors::DomainError;
use crate::pricing::{
    format_money, parse_volume, DocumentFamily, FeeBreakdown, StorageCategory,
};

/// A validated quotation request. Constructed once at the boundary and
/// treated as immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuotationRequest {
    pub storage_type: String,
    pub volume: Decimal,
    pub days: u32,
    pub include_wms: bool,
    pub email: Option<String>,
}

/// Everything derived from classification: the rate-bearing category, the
/// document family the request is quoted on, and the fee set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuotationProfile {
    pub category: StorageCategory,
    pub family: DocumentFamily,
    pub fees: FeeBreakdown,
}

impl QuotationRequest {
    /// Validates raw form fields. Missing or unparseable required fields
    /// reject the request; no partial document is ever produced.
    pub fn from_form(
        storage_type: Option<&str>,
        volume: Option<&str>,
        days: Option<&str>,
        wms: Option<&str>,
        email: Option<&str>,
    ) -> Result<Self, DomainError> {
        let storage_type = storage_type
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(DomainError::MissingField { field: "storage_type" })?
            .to_owned();

        let volume_raw = volume
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(DomainError::MissingField { field: "volume" })?;
        let volume = parse_volume(volume_raw, "volume")?;

        let days_raw = days
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(DomainError::MissingField { field: "days" })?;
        let days: u32 = days_raw.parse().map_err(|_| DomainError::InvalidField {
            field: "days",
            value: days_raw.to_owned(),
        })?;

        let include_wms = wms.map(str::trim).is_some_and(|value| value.eq_ignore_ascii_case("yes"));
        let email = email.map(str::trim).filter(|value| !value.is_empty()).map(str::to_owned);

        Ok(Self { storage_type, volume, days, include_wms, email })
    }

    pub fn profile(&self) -> QuotationProfile {
        let category = StorageCategory::classify(&self.storage_type);
        let family = DocumentFamily::resolve(&self.storage_type, category);
        let fees = FeeBreakdown::compute(category, family, self.volume, self.days, self.include_wms);
        QuotationProfile { category, family, fees }
    }

    /// The full token set for the pre-authored documents. Tokens are
    /// mutually non-substring by construction.
    pub fn placeholder_map(&self, profile: &QuotationProfile, today: NaiveDate) -> PlaceholderMap {
        let fees = &profile.fees;
        let wms_status = if profile.family.is_open_yard() {
            ""
        } else if self.include_wms {
            "INCLUDED"
        } else {
            "NOT INCLUDED"
        };

        let mut map = PlaceholderMap::new();
        map.insert("{{STORAGE_TYPE}}", self.storage_type.clone());
        map.insert("{{DAYS}}", self.days.to_string());
        map.insert("{{VOLUME}}", self.volume.to_string());
        map.insert("{{UNIT}}", fees.unit.as_str());
        map.insert("{{WMS_STATUS}}", wms_status);
        map.insert("{{UNIT_RATE}}", fees.unit_rate_label());
        map.insert("{{STORAGE_FEE}}", format!("{} AED", format_money(fees.storage_fee)));
        map.insert("{{WMS_FEE}}", format!("{} AED", format_money(fees.wms_fee)));
        map.insert("{{TOTAL_FEE}}", format!("{} AED", format_money(fees.total_fee)));
        map.insert("{{TODAY_DATE}}", today.format("%d %b %Y").to_string());
        map
    }

    /// Merges computed values into the loaded template and prunes the two
    /// foreign service sections, producing the final document tree.
    pub fn assemble_document(
        &self,
        template: &Document,
        profile: &QuotationProfile,
        today: NaiveDate,
    ) -> Result<Document, DomainError> {
        let merged = merge(template, &self.placeholder_map(profile, today));
        prune_for_family(&merged, profile.family)
    }

    /// Download name for the served attachment, derived from the email
    /// local-part or a default literal.
    pub fn download_file_name(&self) -> String {
        let local_part = self
            .email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .map(str::trim)
            .filter(|part| !part.is_empty());

        match local_part {
            Some(part) => {
                let safe: String = part
                    .chars()
                    .map(|ch| if ch.is_ascii_alphanumeric() || "._-".contains(ch) { ch } else { '_' })
                    .collect();
                format!("Quotation_{safe}.docx")
            }
            None => "Quotation.docx".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::document::{Block, Document, TableCell, TableRow};
    use crate::errors::DomainError;
    use crate::pricing::StorageCategory;

    use super::QuotationRequest;

    fn template() -> Document {
        Document {
            blocks: vec![
                Document::paragraph("Quotation issued {{TODAY_DATE}}"),
                Document::paragraph("Storage: {{STORAGE_TYPE}} for {{DAYS}} days"),
                Block::Table {
                    rows: vec![
                        TableRow {
                            cells: vec![
                                TableCell { paragraphs: vec!["Volume".into()] },
                                TableCell { paragraphs: vec!["{{VOLUME}} {{UNIT}}".into()] },
                            ],
                        },
                        TableRow {
                            cells: vec![
                                TableCell { paragraphs: vec!["Rate".into()] },
                                TableCell { paragraphs: vec!["{{UNIT_RATE}}".into()] },
                            ],
                        },
                        TableRow {
                            cells: vec![
                                TableCell { paragraphs: vec!["Storage Fee".into()] },
                                TableCell { paragraphs: vec!["{{STORAGE_FEE}}".into()] },
                            ],
                        },
                        TableRow {
                            cells: vec![
                                TableCell { paragraphs: vec!["WMS ({{WMS_STATUS}})".into()] },
                                TableCell { paragraphs: vec!["{{WMS_FEE}}".into()] },
                            ],
                        },
                        TableRow {
                            cells: vec![
                                TableCell { paragraphs: vec!["Total".into()] },
                                TableCell { paragraphs: vec!["{{TOTAL_FEE}}".into()] },
                            ],
                        },
                    ],
                },
                Document::paragraph("[VAS_STANDARD]"),
                Document::paragraph("Standard services table"),
                Document::paragraph("[/VAS_STANDARD]"),
                Document::paragraph("[VAS_CHEMICAL]"),
                Document::paragraph("Chemical services table"),
                Document::paragraph("[/VAS_CHEMICAL]"),
                Document::paragraph("[VAS_OPENYARD]"),
                Document::paragraph("Open yard services table"),
                Document::paragraph("[/VAS_OPENYARD]"),
            ],
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
    }

    #[test]
    fn rejects_missing_required_fields() {
        let missing_type = QuotationRequest::from_form(None, Some("10"), Some("40"), None, None);
        assert_eq!(missing_type, Err(DomainError::MissingField { field: "storage_type" }));

        let missing_volume =
            QuotationRequest::from_form(Some("AC"), None, Some("40"), Some("Yes"), None);
        assert_eq!(missing_volume, Err(DomainError::MissingField { field: "volume" }));

        let blank_days =
            QuotationRequest::from_form(Some("AC"), Some("10"), Some("  "), None, None);
        assert_eq!(blank_days, Err(DomainError::MissingField { field: "days" }));
    }

    #[test]
    fn rejects_unparseable_numbers() {
        let bad_volume =
            QuotationRequest::from_form(Some("AC"), Some("many"), Some("40"), None, None);
        assert!(matches!(bad_volume, Err(DomainError::InvalidField { field: "volume", .. })));

        let bad_days =
            QuotationRequest::from_form(Some("AC"), Some("10"), Some("-4"), None, None);
        assert!(matches!(bad_days, Err(DomainError::InvalidField { field: "days", .. })));
    }

    #[test]
    fn wms_flag_parses_the_yes_literal_only() {
        let yes = QuotationRequest::from_form(Some("AC"), Some("1"), Some("1"), Some("Yes"), None)
            .expect("valid");
        assert!(yes.include_wms);

        let no = QuotationRequest::from_form(Some("AC"), Some("1"), Some("1"), Some("No"), None)
            .expect("valid");
        assert!(!no.include_wms);

        let absent =
            QuotationRequest::from_form(Some("AC"), Some("1"), Some("1"), None, None)
                .expect("valid");
        assert!(!absent.include_wms);
    }

    #[test]
    fn ac_request_assembles_the_reference_document() {
        let request = QuotationRequest::from_form(
            Some("AC"),
            Some("10"),
            Some("40"),
            Some("Yes"),
            Some("ops@example.com"),
        )
        .expect("valid request");
        let profile = request.profile();

        assert_eq!(profile.category, StorageCategory::StandardAc);
        assert_eq!(profile.fees.total_fee, Decimal::from(2500).round_dp(2));

        let document = request
            .assemble_document(&template(), &profile, today())
            .expect("well-formed template");

        assert!(document.contains_text("Quotation issued 14 Mar 2025"));
        assert!(document.contains_text("Storage: AC for 40 days"));
        assert!(document.contains_text("10 CBM"));
        assert!(document.contains_text("2.50 AED / CBM / DAY"));
        assert!(document.contains_text("1,000.00 AED"));
        assert!(document.contains_text("WMS (INCLUDED)"));
        assert!(document.contains_text("1,500.00 AED"));
        assert!(document.contains_text("2,500.00 AED"));
        assert!(!document.contains_text("{{"), "no token literal may survive");

        assert!(document.contains_text("Standard services table"));
        assert!(!document.contains_text("Chemical services table"));
        assert!(!document.contains_text("Open yard services table"));
        for marker in ["[VAS_CHEMICAL]", "[/VAS_CHEMICAL]", "[VAS_OPENYARD]", "[/VAS_OPENYARD]"] {
            assert!(!document.contains_text(marker));
        }
    }

    #[test]
    fn kizad_request_waives_wms_and_keeps_the_yard_section() {
        let request = QuotationRequest::from_form(
            Some("KIZAD Open Yard"),
            Some("1000"),
            Some("365"),
            Some("Yes"),
            None,
        )
        .expect("valid request");
        let profile = request.profile();

        assert_eq!(profile.category, StorageCategory::OpenYardKizad);
        assert_eq!(profile.fees.storage_fee, Decimal::from(125_000).round_dp(2));
        assert_eq!(profile.fees.wms_fee, Decimal::ZERO);

        let document = request
            .assemble_document(&template(), &profile, today())
            .expect("well-formed template");

        assert!(document.contains_text("125,000.00 AED"));
        // Open-yard quotations leave the WMS status blank.
        assert!(document.contains_text("WMS ()"));
        assert!(document.contains_text("Open yard services table"));
        assert!(!document.contains_text("Standard services table"));
    }

    #[test]
    fn unknown_category_renders_a_degraded_document() {
        let request =
            QuotationRequest::from_form(Some("floating pontoon"), Some("5"), Some("10"), None, None)
                .expect("valid request");
        let profile = request.profile();

        assert_eq!(profile.category, StorageCategory::Unknown);
        let document = request
            .assemble_document(&template(), &profile, today())
            .expect("degraded mode still renders");
        assert!(document.contains_text("0.00 AED"));
    }

    #[test]
    fn unterminated_template_fails_the_request() {
        let request =
            QuotationRequest::from_form(Some("AC"), Some("1"), Some("1"), None, None)
                .expect("valid request");
        let profile = request.profile();

        let broken = Document {
            blocks: vec![
                Document::paragraph("[VAS_CHEMICAL]"),
                Document::paragraph("never closed"),
            ],
        };

        let error = request
            .assemble_document(&broken, &profile, today())
            .expect_err("must not truncate");
        assert_eq!(error, DomainError::UnterminatedSection { tag: "VAS_CHEMICAL".into() });
    }

    #[test]
    fn download_name_derives_from_the_email_local_part() {
        let with_email = QuotationRequest::from_form(
            Some("AC"),
            Some("1"),
            Some("1"),
            None,
            Some("jane.doe@example.com"),
        )
        .expect("valid");
        assert_eq!(with_email.download_file_name(), "Quotation_jane.doe.docx");

        let without_email =
            QuotationRequest::from_form(Some("AC"), Some("1"), Some("1"), None, None)
                .expect("valid");
        assert_eq!(without_email.download_file_name(), "Quotation.docx");

        let odd_email = QuotationRequest::from_form(
            Some("AC"),
            Some("1"),
            Some("1"),
            None,
            Some("a b/c@example.com"),
        )
        .expect("valid");
        assert_eq!(odd_email.download_file_name(), "Quotation_a_b_c.docx");
    }
}
