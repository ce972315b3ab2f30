//! Tunable parameters of the ROI model.
//!
//! Every number the estimator multiplies by lives here:
//! - response-speed recovery tiers
//! - after-hours boost factor
//! - recovered-deal clamp bounds
//! - risk multiplier and reference monthly cost
//! - time-savings tuning (lead blocks and per-salesperson hour bounds)

use serde::{Deserialize, Serialize};

pub const DEFAULT_FALLBACK_RATE: f64 = 0.08;
pub const DEFAULT_AFTER_HOURS_BOOST: f64 = 0.35;
pub const DEFAULT_DEAL_FLOOR: f64 = 0.3;
pub const DEFAULT_DEAL_CAP_MINIMUM: f64 = 1.2;
pub const DEFAULT_DEAL_CAP_PER_UNIT: f64 = 0.12;
pub const DEFAULT_RISK_MULTIPLIER: f64 = 1.15;
pub const DEFAULT_REFERENCE_MONTHLY_COST: f64 = 6500.0;
pub const DEFAULT_LEADS_PER_BLOCK: f64 = 250.0;
pub const DEFAULT_HOURS_PER_BLOCK: f64 = 3.0;
pub const DEFAULT_MIN_HOURS_PER_SALESPERSON: f64 = 6.0;
pub const DEFAULT_MAX_HOURS_PER_SALESPERSON: f64 = 14.0;

/// (max response minutes, recovery rate), ascending by bound
pub const DEFAULT_SPEED_TIERS: [(f64, f64); 4] =
    [(5.0, 0.01), (15.0, 0.02), (60.0, 0.035), (180.0, 0.06)];

/// One step of the response-speed lookup.
///
/// A response time at or below `max_minutes` earns `rate`, unless an
/// earlier (faster) tier already matched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedTier {
    pub max_minutes: f64,
    pub rate: f64,
}

impl SpeedTier {
    pub const fn new(max_minutes: f64, rate: f64) -> Self {
        Self { max_minutes, rate }
    }
}

/// Business-tunable constants of the estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Recovery rate for response times slower than every tier
    #[serde(default = "default_fallback_rate")]
    pub fallback_rate: f64,

    /// Extra recovery per unit of after-hours lead share
    #[serde(default = "default_after_hours_boost")]
    pub after_hours_boost: f64,

    /// Lower bound on recovered deals, applied even at zero volume
    #[serde(default = "default_deal_floor")]
    pub deal_floor: f64,

    /// The recovered-deal cap never drops below this
    #[serde(default = "default_deal_cap_minimum")]
    pub deal_cap_minimum: f64,

    /// Recovered-deal cap per unit sold
    #[serde(default = "default_deal_cap_per_unit")]
    pub deal_cap_per_unit: f64,

    /// Multiplier from recovered money to risk-adjusted value
    #[serde(default = "default_risk_multiplier")]
    pub risk_multiplier: f64,

    /// Monthly service cost the ROI multiple is measured against
    #[serde(default = "default_reference_monthly_cost")]
    pub reference_monthly_cost: f64,

    /// Monthly leads that make up one block of saved time
    #[serde(default = "default_leads_per_block")]
    pub leads_per_block: f64,

    /// Hours saved per salesperson for each block of leads
    #[serde(default = "default_hours_per_block")]
    pub hours_per_block: f64,

    #[serde(default = "default_min_hours_per_salesperson")]
    pub min_hours_per_salesperson: f64,

    #[serde(default = "default_max_hours_per_salesperson")]
    pub max_hours_per_salesperson: f64,

    /// Recovery rate tiers keyed by response time (minutes)
    #[serde(default = "default_speed_tiers")]
    pub speed_tiers: Vec<SpeedTier>,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            speed_tiers: default_speed_tiers(),
            fallback_rate: default_fallback_rate(),
            after_hours_boost: default_after_hours_boost(),
            deal_floor: default_deal_floor(),
            deal_cap_minimum: default_deal_cap_minimum(),
            deal_cap_per_unit: default_deal_cap_per_unit(),
            risk_multiplier: default_risk_multiplier(),
            reference_monthly_cost: default_reference_monthly_cost(),
            leads_per_block: default_leads_per_block(),
            hours_per_block: default_hours_per_block(),
            min_hours_per_salesperson: default_min_hours_per_salesperson(),
            max_hours_per_salesperson: default_max_hours_per_salesperson(),
        }
    }
}

impl ModelParameters {
    // Pure function: a rate or factor must be a finite, non-negative number
    fn validate_non_negative(value: f64, name: &str) -> Result<(), String> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(format!("{} must be a finite, non-negative number (got {})", name, value))
        }
    }

    fn validate_positive(value: f64, name: &str) -> Result<(), String> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(format!("{} must be greater than zero (got {})", name, value))
        }
    }

    // Pure function: tiers must be non-empty with strictly ascending bounds
    pub fn validate_speed_tiers(tiers: &[SpeedTier]) -> Result<(), String> {
        if tiers.is_empty() {
            return Err("speed_tiers must contain at least one tier".to_string());
        }

        for tier in tiers {
            if tier.max_minutes.is_nan() {
                return Err("speed tier max_minutes must be a number".to_string());
            }
            Self::validate_non_negative(tier.rate, "speed tier rate")?;
        }

        match tiers
            .windows(2)
            .find(|pair| pair[1].max_minutes <= pair[0].max_minutes)
        {
            Some(pair) => Err(format!(
                "speed_tiers must be strictly ascending by max_minutes ({} follows {})",
                pair[1].max_minutes, pair[0].max_minutes
            )),
            None => Ok(()),
        }
    }

    // Pure function: collect every individual check
    pub fn collect_validations(&self) -> Vec<Result<(), String>> {
        vec![
            Self::validate_speed_tiers(&self.speed_tiers),
            Self::validate_non_negative(self.fallback_rate, "fallback_rate"),
            Self::validate_non_negative(self.after_hours_boost, "after_hours_boost"),
            Self::validate_non_negative(self.deal_floor, "deal_floor"),
            Self::validate_non_negative(self.deal_cap_minimum, "deal_cap_minimum"),
            Self::validate_non_negative(self.deal_cap_per_unit, "deal_cap_per_unit"),
            Self::validate_non_negative(self.risk_multiplier, "risk_multiplier"),
            Self::validate_positive(self.reference_monthly_cost, "reference_monthly_cost"),
            Self::validate_positive(self.leads_per_block, "leads_per_block"),
            Self::validate_non_negative(self.hours_per_block, "hours_per_block"),
            Self::validate_non_negative(
                self.min_hours_per_salesperson,
                "min_hours_per_salesperson",
            ),
            Self::validate_non_negative(
                self.max_hours_per_salesperson,
                "max_hours_per_salesperson",
            ),
        ]
    }

    /// Validate the parameter set, returning every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors: Vec<String> = self
            .collect_validations()
            .into_iter()
            .filter_map(Result::err)
            .collect();

        if self.deal_floor > self.deal_cap_minimum {
            errors.push(format!(
                "deal_floor ({}) must not exceed deal_cap_minimum ({})",
                self.deal_floor, self.deal_cap_minimum
            ));
        }

        if self.min_hours_per_salesperson > self.max_hours_per_salesperson {
            errors.push(format!(
                "min_hours_per_salesperson ({}) must not exceed max_hours_per_salesperson ({})",
                self.min_hours_per_salesperson, self.max_hours_per_salesperson
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

pub fn default_speed_tiers() -> Vec<SpeedTier> {
    DEFAULT_SPEED_TIERS
        .iter()
        .map(|&(max_minutes, rate)| SpeedTier::new(max_minutes, rate))
        .collect()
}
pub fn default_fallback_rate() -> f64 {
    DEFAULT_FALLBACK_RATE
}
pub fn default_after_hours_boost() -> f64 {
    DEFAULT_AFTER_HOURS_BOOST // 20% after-hours => +7%, 50% => +17.5%
}
pub fn default_deal_floor() -> f64 {
    DEFAULT_DEAL_FLOOR
}
pub fn default_deal_cap_minimum() -> f64 {
    DEFAULT_DEAL_CAP_MINIMUM
}
pub fn default_deal_cap_per_unit() -> f64 {
    DEFAULT_DEAL_CAP_PER_UNIT
}
pub fn default_risk_multiplier() -> f64 {
    DEFAULT_RISK_MULTIPLIER
}
pub fn default_reference_monthly_cost() -> f64 {
    DEFAULT_REFERENCE_MONTHLY_COST
}
pub fn default_leads_per_block() -> f64 {
    DEFAULT_LEADS_PER_BLOCK
}
pub fn default_hours_per_block() -> f64 {
    DEFAULT_HOURS_PER_BLOCK
}
pub fn default_min_hours_per_salesperson() -> f64 {
    DEFAULT_MIN_HOURS_PER_SALESPERSON
}
pub fn default_max_hours_per_salesperson() -> f64 {
    DEFAULT_MAX_HOURS_PER_SALESPERSON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_are_valid() {
        assert!(ModelParameters::default().validate().is_ok());
    }

    #[test]
    fn test_default_tiers_match_constants() {
        let tiers = default_speed_tiers();
        assert_eq!(tiers.len(), 4);
        assert_eq!(tiers[0], SpeedTier::new(5.0, 0.01));
        assert_eq!(tiers[3], SpeedTier::new(180.0, 0.06));
    }

    #[test]
    fn test_rejects_empty_tiers() {
        assert!(ModelParameters::validate_speed_tiers(&[]).is_err());
    }

    #[test]
    fn test_rejects_unsorted_tiers() {
        let tiers = [SpeedTier::new(15.0, 0.02), SpeedTier::new(5.0, 0.01)];
        let err = ModelParameters::validate_speed_tiers(&tiers).unwrap_err();
        assert!(err.contains("strictly ascending"));
    }

    #[test]
    fn test_rejects_duplicate_tier_bounds() {
        let tiers = [SpeedTier::new(5.0, 0.01), SpeedTier::new(5.0, 0.02)];
        assert!(ModelParameters::validate_speed_tiers(&tiers).is_err());
    }

    #[test]
    fn test_collects_all_errors() {
        let params = ModelParameters {
            reference_monthly_cost: 0.0,
            leads_per_block: -1.0,
            min_hours_per_salesperson: 20.0,
            ..ModelParameters::default()
        };

        let errors = params.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("reference_monthly_cost")));
        assert!(errors.iter().any(|e| e.contains("leads_per_block")));
        assert!(errors.iter().any(|e| e.contains("min_hours_per_salesperson")));
    }

    #[test]
    fn test_rejects_floor_above_cap_minimum() {
        let params = ModelParameters {
            deal_floor: 2.0,
            ..ModelParameters::default()
        };
        let errors = params.validate().unwrap_err();
        assert!(errors[0].contains("deal_floor"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let params: ModelParameters = toml::from_str("risk_multiplier = 1.25").unwrap();
        assert_eq!(params.risk_multiplier, 1.25);
        assert_eq!(params.reference_monthly_cost, DEFAULT_REFERENCE_MONTHLY_COST);
        assert_eq!(params.speed_tiers, default_speed_tiers());
    }
}
