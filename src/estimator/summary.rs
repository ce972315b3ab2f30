//! The summary sentence shown under the results.

use serde::Serialize;

use crate::config::DisplayConfig;
use crate::formatting::{format_currency, format_one_decimal, format_whole};

/// Figures the summary sentence embeds, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryFigures {
    pub recovered_deals: f64,
    pub recovered_money: f64,
    pub time_saved_hours: f64,
    pub roi_multiple: f64,
    pub reference_monthly_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Summary {
    /// Placeholder before the first calculation and after a reset
    Prompt,
    Estimate(SummaryFigures),
}

/// How emphasised fragments of the sentence are marked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStyle {
    Plain,
    Html,
    Markdown,
}

impl SummaryStyle {
    fn emphasize(self, text: &str) -> String {
        match self {
            Self::Plain => text.to_string(),
            Self::Html => format!("<strong>{}</strong>", html_escape::encode_text(text)),
            Self::Markdown => format!("**{}**", text),
        }
    }

    fn text(self, text: &str) -> String {
        match self {
            Self::Html => html_escape::encode_text(text).into_owned(),
            _ => text.to_string(),
        }
    }
}

impl Summary {
    pub fn is_prompt(&self) -> bool {
        matches!(self, Self::Prompt)
    }

    /// Whether the rendered text carries markup.
    pub fn is_rich(&self) -> bool {
        !self.is_prompt()
    }

    pub fn render(&self, style: SummaryStyle, display: &DisplayConfig) -> String {
        match self {
            Self::Prompt => display.prompt.clone(),
            Self::Estimate(figures) => render_estimate(figures, style, display),
        }
    }

    /// Render with a caller-supplied emphasis, e.g. terminal bold.
    pub fn render_with(&self, display: &DisplayConfig, emphasize: impl Fn(&str) -> String) -> String {
        match self {
            Self::Prompt => display.prompt.clone(),
            Self::Estimate(figures) => {
                let parts = SentenceParts::new(figures, display);
                parts.assemble(&emphasize, &|t: &str| t.to_string())
            }
        }
    }
}

struct SentenceParts {
    product: String,
    deals: String,
    money: String,
    hours: String,
    roi: String,
    multiple_suffix: String,
    reference_cost: String,
}

impl SentenceParts {
    fn new(figures: &SummaryFigures, display: &DisplayConfig) -> Self {
        Self {
            product: display.product_name.clone(),
            deals: format_one_decimal(figures.recovered_deals),
            money: format_currency(figures.recovered_money, display),
            hours: format_whole(figures.time_saved_hours),
            roi: format_one_decimal(figures.roi_multiple),
            multiple_suffix: display.multiple_suffix.clone(),
            reference_cost: format_currency(figures.reference_monthly_cost, display),
        }
    }

    fn assemble(&self, em: &dyn Fn(&str) -> String, text: &dyn Fn(&str) -> String) -> String {
        format!(
            "{}{}{}{}{}{}{}{}{}",
            text(&format!(
                "Based on your inputs, {} could conservatively recover about ",
                self.product
            )),
            em(&format!("{} extra deals/month", self.deals)),
            text(" — roughly "),
            em(&format!("{} in gross profit", self.money)),
            text(" — while saving your team around "),
            em(&format!("{} hours/month", self.hours)),
            text(". That's a directional ROI of "),
            em(&format!("{}{}", self.roi, self.multiple_suffix)),
            text(&format!(" vs {}/month.", self.reference_cost)),
        )
    }
}

fn render_estimate(figures: &SummaryFigures, style: SummaryStyle, display: &DisplayConfig) -> String {
    SentenceParts::new(figures, display)
        .assemble(&|t: &str| style.emphasize(t), &|t: &str| style.text(t))
}
