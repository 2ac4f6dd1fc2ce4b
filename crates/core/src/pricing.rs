//! Storage category classification and fee computation.
//!
//! The rate card is fixed and process-wide: indoor storage bills per CBM per
//! day, open-yard zones bill per SQM per year prorated to days. All monetary
//! values are `Decimal`, rounded to two places at the boundary of each fee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Monthly surcharge for warehouse-management-system tracking, indoor only.
const WMS_MONTHLY_FEE: u64 = 1500;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageCategory {
    StandardAc,
    StandardNonAc,
    OpenShed,
    ChemicalAc,
    ChemicalNonAc,
    OpenYardKizad,
    OpenYardMussafah,
    Unknown,
}

/// Which pre-authored document a request is quoted on. Exactly one family is
/// retained by section pruning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFamily {
    Standard,
    Chemical,
    OpenYard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BillingUnit {
    Cbm,
    Sqm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatePeriod {
    PerDay,
    PerYear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateCard {
    pub rate: Decimal,
    pub unit: BillingUnit,
    pub period: RatePeriod,
}

/// Derived fee set for one quotation request. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub rate: Decimal,
    pub unit: BillingUnit,
    pub rate_period: RatePeriod,
    pub months: u32,
    pub storage_fee: Decimal,
    pub wms_fee: Decimal,
    pub total_fee: Decimal,
}

impl StorageCategory {
    /// Classifies a free-form storage type string.
    ///
    /// Precedence is fixed: exact enumerated labels are checked before
    /// keyword scans, so "Chemicals AC" never falls into a generic keyword
    /// branch, and the zone keywords outrank the looser "open yard" wording.
    /// Unmatched input is `Unknown`, a degraded mode rather than an error.
    pub fn classify(storage_type: &str) -> Self {
        let lowered = storage_type.trim().to_lowercase();

        match lowered.as_str() {
            "ac" => return Self::StandardAc,
            "non-ac" => return Self::StandardNonAc,
            "open shed" => return Self::OpenShed,
            "chemicals ac" => return Self::ChemicalAc,
            "chemicals non-ac" => return Self::ChemicalNonAc,
            _ => {}
        }

        if lowered.contains("kizad") {
            Self::OpenYardKizad
        } else if lowered.contains("mussafah") {
            Self::OpenYardMussafah
        } else {
            Self::Unknown
        }
    }

    pub fn rate_card(&self) -> RateCard {
        use BillingUnit::{Cbm, Sqm};
        use RatePeriod::{PerDay, PerYear};

        let (rate, unit, period) = match self {
            Self::StandardAc => (Decimal::new(25, 1), Cbm, PerDay),
            Self::StandardNonAc => (Decimal::new(20, 1), Cbm, PerDay),
            Self::OpenShed => (Decimal::new(18, 1), Cbm, PerDay),
            Self::ChemicalAc => (Decimal::new(35, 1), Cbm, PerDay),
            Self::ChemicalNonAc => (Decimal::new(27, 1), Cbm, PerDay),
            Self::OpenYardKizad => (Decimal::from(125), Sqm, PerYear),
            Self::OpenYardMussafah => (Decimal::from(160), Sqm, PerYear),
            Self::Unknown => (Decimal::ZERO, Cbm, PerDay),
        };
        RateCard { rate, unit, period }
    }

    pub fn family(&self) -> Option<DocumentFamily> {
        match self {
            Self::StandardAc | Self::StandardNonAc | Self::OpenShed => {
                Some(DocumentFamily::Standard)
            }
            Self::ChemicalAc | Self::ChemicalNonAc => Some(DocumentFamily::Chemical),
            Self::OpenYardKizad | Self::OpenYardMussafah => Some(DocumentFamily::OpenYard),
            Self::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StandardAc => "AC",
            Self::StandardNonAc => "Non-AC",
            Self::OpenShed => "Open Shed",
            Self::ChemicalAc => "Chemicals AC",
            Self::ChemicalNonAc => "Chemicals Non-AC",
            Self::OpenYardKizad => "KIZAD Open Yard",
            Self::OpenYardMussafah => "Mussafah Open Yard",
            Self::Unknown => "Unknown",
        }
    }
}

impl DocumentFamily {
    /// Resolves the document family for a request. Known categories carry
    /// their own family; `Unknown` requests fall back to a keyword scan of
    /// the raw storage type so a degraded "chemical storage please" request
    /// is still quoted on the chemical document.
    pub fn resolve(storage_type: &str, category: StorageCategory) -> Self {
        if let Some(family) = category.family() {
            return family;
        }

        let lowered = storage_type.to_lowercase();
        if lowered.contains("chemical") {
            Self::Chemical
        } else if lowered.contains("open yard") {
            Self::OpenYard
        } else {
            Self::Standard
        }
    }

    pub fn is_open_yard(&self) -> bool {
        matches!(self, Self::OpenYard)
    }
}

impl BillingUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cbm => "CBM",
            Self::Sqm => "SQM",
        }
    }
}

impl RatePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerDay => "DAY",
            Self::PerYear => "YEAR",
        }
    }
}

impl FeeBreakdown {
    /// Computes the fee set for a classified request.
    ///
    /// CBM categories: storage = volume x days x rate. Area categories:
    /// storage = volume x days x (annual rate / 365). The WMS surcharge is
    /// waived for open-yard quotations regardless of the request flag.
    pub fn compute(
        category: StorageCategory,
        family: DocumentFamily,
        volume: Decimal,
        days: u32,
        include_wms: bool,
    ) -> Self {
        let card = category.rate_card();
        let day_count = Decimal::from(days);

        let mut storage_fee = match card.period {
            RatePeriod::PerDay => volume * day_count * card.rate,
            RatePeriod::PerYear => volume * day_count * card.rate / Decimal::from(365),
        }
        .round_dp(2);
        storage_fee.rescale(2);

        let months = (days / 30).max(1);
        let mut wms_fee = if family.is_open_yard() || !include_wms {
            Decimal::ZERO
        } else {
            Decimal::from(WMS_MONTHLY_FEE * u64::from(months))
        };
        wms_fee.rescale(2);

        let mut total_fee = (storage_fee + wms_fee).round_dp(2);
        total_fee.rescale(2);

        Self {
            rate: card.rate,
            unit: card.unit,
            rate_period: card.period,
            months,
            storage_fee,
            wms_fee,
            total_fee,
        }
    }

    /// The unit-rate line on the quotation, e.g. "2.50 AED / CBM / DAY".
    pub fn unit_rate_label(&self) -> String {
        format!("{:.2} AED / {} / {}", self.rate, self.unit.as_str(), self.rate_period.as_str())
    }
}

/// Formats a monetary amount with thousands separators and two decimals,
/// e.g. `125000` -> "125,000.00".
pub fn format_money(amount: Decimal) -> String {
    let rendered = format!("{:.2}", amount);
    let (integer, fraction) =
        rendered.split_once('.').expect("two-decimal rendering always contains a point");

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(rendered.len() + digits.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    format!("{grouped}.{fraction}")
}

/// Parses a non-negative decimal form field.
pub fn parse_volume(raw: &str, field: &'static str) -> Result<Decimal, DomainError> {
    let value: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidField { field, value: raw.to_owned() })?;
    if value.is_sign_negative() {
        return Err(DomainError::InvalidField { field, value: raw.to_owned() });
    }
    Ok(value)
}
