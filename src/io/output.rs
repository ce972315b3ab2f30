use std::fmt;
use std::io::Write;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use crate::config::DisplayConfig;
use crate::estimator::{
    Breakdown, DisplayOutputs, EstimatorInputs, EstimatorOutputs, SummaryStyle,
};
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::host::{InputField, OutputField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
    Html,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Terminal => "terminal",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Html => "html",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Calculation,
    Reset,
}

/// Everything one trigger produced, ready to be written out.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    pub kind: ReportKind,
    pub inputs: EstimatorInputs,
    pub outputs: EstimatorOutputs,
    pub display: DisplayOutputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Breakdown>,
}

impl EstimateReport {
    /// Input values in page order, as the fields show them.
    fn input_rows(&self) -> [(InputField, f64); 6] {
        [
            (InputField::Leads, self.inputs.leads),
            (InputField::Cars, self.inputs.cars),
            (InputField::Gross, self.inputs.gross),
            (InputField::Salespeople, self.inputs.salespeople),
            (InputField::AfterHours, self.inputs.after_hours_share),
            (InputField::ResponseTime, self.inputs.response_minutes),
        ]
    }

    /// Output text in page order, without the summary.
    fn result_rows(&self) -> [(OutputField, &str); 5] {
        [
            (OutputField::Money, self.display.recovered_money.as_str()),
            (OutputField::Deals, self.display.recovered_deals.as_str()),
            (OutputField::Time, self.display.time_saved_hours.as_str()),
            (OutputField::Risk, self.display.risk_adjusted_value.as_str()),
            (OutputField::Roi, self.display.roi_multiple.as_str()),
        ]
    }
}

fn breakdown_rows(breakdown: &Breakdown) -> [(&'static str, String); 6] {
    [
        ("Speed factor", format!("{:.3}", breakdown.speed_factor)),
        ("After-hours boost", format!("{:.4}", breakdown.after_boost)),
        ("Deals before clamp", format!("{:.3}", breakdown.unclamped_deals)),
        ("Deal floor", format!("{:.2}", breakdown.deal_floor)),
        ("Deal cap", format!("{:.2}", breakdown.deal_cap)),
        (
            "Hours per salesperson",
            format!("{:.1}", breakdown.time_per_salesperson_hours),
        ),
    ]
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &EstimateReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &EstimateReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    display: DisplayConfig,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, display: DisplayConfig) -> Self {
        Self { writer, display }
    }

    fn write_inputs(&mut self, report: &EstimateReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Inputs")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Field | Value |")?;
        writeln!(self.writer, "|-------|-------|")?;
        for (field, value) in report.input_rows() {
            writeln!(self.writer, "| {} | {} |", field.label(), value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_results(&mut self, report: &EstimateReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Results")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        for (field, text) in report.result_rows() {
            writeln!(self.writer, "| {} | {} |", field.label(), text)?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{}",
            report
                .outputs
                .summary
                .render(SummaryStyle::Markdown, &self.display)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, breakdown: &Breakdown) -> anyhow::Result<()> {
        writeln!(self.writer, "## Breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Step | Value |")?;
        writeln!(self.writer, "|------|-------|")?;
        for (name, value) in breakdown_rows(breakdown) {
            writeln!(self.writer, "| {} | {} |", name, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &EstimateReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# {} ROI Estimate", self.display.product_name)?;
        writeln!(self.writer)?;
        self.write_inputs(report)?;
        self.write_results(report)?;
        if let Some(ref breakdown) = report.breakdown {
            self.write_breakdown(breakdown)?;
        }
        Ok(())
    }
}

/// Writes the results panel as an HTML fragment using the page's ids.
pub struct HtmlWriter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for HtmlWriter<W> {
    fn write_report(&mut self, report: &EstimateReport) -> anyhow::Result<()> {
        // A reset leaves the panel's visibility alone
        match report.kind {
            ReportKind::Calculation => writeln!(
                self.writer,
                "<section id=\"results-section\" class=\"animate-fade-in\">"
            )?,
            ReportKind::Reset => writeln!(self.writer, "<section id=\"results-section\">")?,
        }
        for (field, text) in report.result_rows() {
            writeln!(
                self.writer,
                "  <span id=\"{}\">{}</span>",
                field.id(),
                html_escape::encode_text(text)
            )?;
        }
        // Already escaped markup after a calculation, literal text after a reset
        let summary = match report.kind {
            ReportKind::Calculation => report.display.summary.clone(),
            ReportKind::Reset => html_escape::encode_text(&report.display.summary).into_owned(),
        };
        writeln!(
            self.writer,
            "  <p id=\"{}\">{}</p>",
            OutputField::Summary.id(),
            summary
        )?;
        writeln!(self.writer, "</section>")?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    display: DisplayConfig,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, display: DisplayConfig, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            display,
            formatter: formatter_for(formatting),
        }
    }

    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header(title))?;
        writeln!(
            self.writer,
            "{}",
            self.formatter.header(&"=".repeat(title.chars().count()))
        )?;
        Ok(())
    }

    fn write_row(&mut self, label: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "  {:<32} {}", format!("{}:", label), value)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &EstimateReport) -> anyhow::Result<()> {
        let title = match report.kind {
            ReportKind::Calculation => format!("{} ROI Estimate", self.display.product_name),
            ReportKind::Reset => "Calculator reset".to_string(),
        };
        self.write_header(&title)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", self.formatter.bold("Inputs"))?;
        for (field, value) in report.input_rows() {
            let value = self.formatter.dim(&value.to_string());
            self.write_row(field.label(), &value)?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", self.formatter.bold("Results"))?;
        for (field, text) in report.result_rows() {
            let text = self.formatter.highlight(text);
            self.write_row(field.label(), &text)?;
        }
        writeln!(self.writer)?;

        if let Some(ref breakdown) = report.breakdown {
            writeln!(self.writer, "{}", self.formatter.bold("Breakdown"))?;
            for (name, value) in breakdown_rows(breakdown) {
                self.write_row(name, &value)?;
            }
            writeln!(self.writer)?;
        }

        let formatter = &self.formatter;
        let summary = report
            .outputs
            .summary
            .render_with(&self.display, |text| formatter.bold(text));
        writeln!(self.writer, "{}", summary)?;
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    display: DisplayConfig,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, display)),
        OutputFormat::Html => Box::new(HtmlWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, display, formatting)),
    }
}
