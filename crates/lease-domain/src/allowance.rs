use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
/// Contractual yearly mileage limit tiers offered by the lessor.
pub enum MileageAllowance {
    TenThousand,
    #[default]
    TwelveThousand,
    FifteenThousand,
}

impl MileageAllowance {
    pub const ALL: [MileageAllowance; 3] = [
        MileageAllowance::TenThousand,
        MileageAllowance::TwelveThousand,
        MileageAllowance::FifteenThousand,
    ];

    /// Miles permitted per year under this tier.
    pub fn annual_miles(self) -> f64 {
        match self {
            MileageAllowance::TenThousand => 10_000.0,
            MileageAllowance::TwelveThousand => 12_000.0,
            MileageAllowance::FifteenThousand => 15_000.0,
        }
    }

    /// Short label such as `12k`.
    pub fn label(self) -> String {
        format!("{}k", self.annual_miles() as u32 / 1000)
    }

    pub fn from_annual_miles(miles: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.annual_miles() == miles)
    }
}

impl fmt::Display for MileageAllowance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAllowance(pub String);

impl fmt::Display for UnknownAllowance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown mileage allowance `{}` (choose 10k, 12k or 15k)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAllowance {}

impl FromStr for MileageAllowance {
    type Err = UnknownAllowance;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace([',', '_'], "");
        let miles = match normalized.strip_suffix('k') {
            Some(thousands) => thousands.parse::<f64>().ok().map(|k| k * 1000.0),
            None => normalized.parse::<f64>().ok(),
        };
        miles
            .and_then(Self::from_annual_miles)
            .ok_or_else(|| UnknownAllowance(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tier_is_twelve_thousand() {
        assert_eq!(MileageAllowance::default().annual_miles(), 12_000.0);
    }

    #[test]
    fn parses_labels_and_raw_miles() {
        assert_eq!(
            "10k".parse::<MileageAllowance>().unwrap(),
            MileageAllowance::TenThousand
        );
        assert_eq!(
            "15,000".parse::<MileageAllowance>().unwrap(),
            MileageAllowance::FifteenThousand
        );
        assert_eq!(
            " 12000 ".parse::<MileageAllowance>().unwrap(),
            MileageAllowance::TwelveThousand
        );
        assert!("11k".parse::<MileageAllowance>().is_err());
        assert!("lots".parse::<MileageAllowance>().is_err());
    }

    #[test]
    fn labels_use_thousands() {
        let labels: Vec<String> = MileageAllowance::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["10k", "12k", "15k"]);
    }
}
