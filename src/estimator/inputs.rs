//! Raw field text to typed inputs.
//!
//! The host page hands over whatever its fields contain. Coercion to a
//! number is an explicit step here: absent, blank, unparsable and
//! non-finite text all become `0.0`. Nothing in this module fails.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::EstimatorInputs;

/// Parse one field's text, defaulting to zero.
///
/// Surrounding whitespace is ignored. Negative values pass through
/// unchanged; the model does not validate ranges.
pub fn parse_numeric(raw: Option<&str>) -> f64 {
    let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return 0.0;
    };

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        Ok(value) => {
            debug!("Coercing non-finite input {:?} ({}) to 0", text, value);
            0.0
        }
        Err(e) => {
            debug!("Coercing non-numeric input {:?} to 0: {}", text, e);
            0.0
        }
    }
}

/// Field text as read from the host, before coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    pub leads: Option<String>,
    pub cars: Option<String>,
    pub gross: Option<String>,
    pub salespeople: Option<String>,
    pub after_hours_share: Option<String>,
    pub response_minutes: Option<String>,
}

impl RawInputs {
    pub fn parse(&self) -> EstimatorInputs {
        EstimatorInputs {
            leads: parse_numeric(self.leads.as_deref()),
            cars: parse_numeric(self.cars.as_deref()),
            gross: parse_numeric(self.gross.as_deref()),
            salespeople: parse_numeric(self.salespeople.as_deref()),
            after_hours_share: parse_numeric(self.after_hours_share.as_deref()),
            response_minutes: parse_numeric(self.response_minutes.as_deref()),
        }
    }

    /// The text a field shows for a typed value.
    pub fn from_inputs(inputs: &EstimatorInputs) -> Self {
        Self {
            leads: Some(field_text(inputs.leads)),
            cars: Some(field_text(inputs.cars)),
            gross: Some(field_text(inputs.gross)),
            salespeople: Some(field_text(inputs.salespeople)),
            after_hours_share: Some(share_text(inputs.after_hours_share)),
            response_minutes: Some(field_text(inputs.response_minutes)),
        }
    }
}

fn field_text(value: f64) -> String {
    value.to_string()
}

/// Two decimals (`0.30`) when that reads back as the same value, the
/// shortest exact form otherwise.
fn share_text(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    if fixed.parse::<f64>() == Ok(value) {
        fixed
    } else {
        field_text(value)
    }
}
