use crate::config::ReportConfig;
use crate::display::scale;
use crate::error::{Error, Result};
use crate::parameter::Parameter;
use crate::store::Model;
use rayon::prelude::*;
use std::fmt::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// `label,value` per line.
    Dense,
    /// Label left-justified to a fixed column, value directly after.
    Padded,
}

impl FromStr for OutputMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dense" => Ok(OutputMode::Dense),
            "padded" => Ok(OutputMode::Padded),
            _ => Err(Error::UnsupportedOutputMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportFormatter {
    mode: OutputMode,
    label_width: usize,
    precision: usize,
    sentinel: String,
}

impl ReportFormatter {
    /// Formatter with default settings for `mode`.
    pub fn new(mode: &str) -> Result<Self> {
        Self::from_config(&ReportConfig { mode: mode.to_string(), ..ReportConfig::default() })
    }

    pub fn from_config(config: &ReportConfig) -> Result<Self> {
        Ok(Self {
            mode: config.mode.parse()?,
            label_width: config.label_width,
            precision: config.precision,
            sentinel: config.sentinel.clone(),
        })
    }

    pub fn mode(&self) -> OutputMode { self.mode }

    /// The display string for one parameter. Invalid parameters are a normal,
    /// displayable state here and render as the sentinel.
    pub fn format_value(&self, param: &Parameter) -> String {
        match param.quantity() {
            Ok(q) => {
                let shown = scale::for_display(q);
                format!("{}{}", trim_number(shown.magnitude(), self.precision), shown.rung().symbol())
            }
            Err(_) => self.sentinel.clone(),
        }
    }

    pub fn render(&self, rows: &[(&str, &Parameter)]) -> String {
        let mut output = String::new();
        for (label, param) in rows {
            let value = self.format_value(param);
            let _ = match self.mode {
                OutputMode::Dense => writeln!(output, "{},{}", label, value),
                OutputMode::Padded => writeln!(output, "{:<width$}{}", label, value, width = self.label_width),
            };
        }
        output
    }

    pub fn render_model(&self, model: &Model) -> String {
        self.render(&model.rows())
    }
}

/// Renders `rows` in the named output mode with default settings.
pub fn render(rows: &[(&str, &Parameter)], mode: &str) -> Result<String> {
    Ok(ReportFormatter::new(mode)?.render(rows))
}

/// Renders independent models in parallel; output order follows `models`.
pub fn render_models(models: &[Model], config: &ReportConfig) -> Result<Vec<String>> {
    let formatter = ReportFormatter::from_config(config)?;
    Ok(models.par_iter().map(|m| formatter.render_model(m)).collect())
}

/// Fixed decimals, then trailing zeros and a dangling point removed.
///
/// A nonzero magnitude below 1 (only possible on the smallest rung) keeps
/// `precision` significant digits so it never collapses to "0".
fn trim_number(value: f64, precision: usize) -> String {
    let decimals = match value.abs() {
        m if m > 0.0 && m < 1.0 => {
            let leading = (-m.log10()).ceil() as usize;
            precision.max(leading + precision.max(1) - 1)
        }
        _ => precision,
    };
    let s = format!("{:.*}", decimals, value);
    let s = if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s.as_str() };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
