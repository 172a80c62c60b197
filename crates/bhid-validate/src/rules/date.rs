//! Calendar interval rules: `date_diff` compares a date with a fixed reference,
//! `date_field_diff` compares it with another field of the same row.
//!
//! Both assert `from + min <= to <= from + max`, where either bound may be
//! omitted. Intervals are applied in calendar units, so `1m` from January 31st
//! lands on the last day of February.

use std::fmt;
use std::str::FromStr;

use bhid_model::Value;
use chrono::format::{Item, StrftimeItems};
use chrono::{Days, Local, Months, NaiveDate};

use super::failure;
use crate::error::Result;
use crate::registry::Validator;
use crate::result::require_context;
use crate::{ValidationContext, ValidationResult, ValidatorKind, ValidatorOptions};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A signed calendar interval such as `18y`, `1y6m` or `-30d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interval {
    negative: bool,
    years: u32,
    months: u32,
    days: u32,
}

impl Interval {
    pub fn years(years: u32) -> Self {
        Self {
            years,
            ..Self::default()
        }
    }

    pub fn months(months: u32) -> Self {
        Self {
            months,
            ..Self::default()
        }
    }

    pub fn days(days: u32) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn negated(mut self) -> Self {
        self.negative = !self.negative;
        self
    }

    /// Shifts `date` by this interval; `None` when the result is out of range.
    pub fn add_to(&self, date: NaiveDate) -> Option<NaiveDate> {
        let months = Months::new(self.years.checked_mul(12)?.checked_add(self.months)?);
        let days = Days::new(u64::from(self.days));
        if self.negative {
            date.checked_sub_months(months)?.checked_sub_days(days)
        } else {
            date.checked_add_months(months)?.checked_add_days(days)
        }
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, body) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if body.is_empty() {
            return Err(format!("'{s}' is not an interval"));
        }

        let mut interval = Self {
            negative,
            ..Self::default()
        };
        let mut digits = String::new();
        for c in body.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }
            if digits.is_empty() {
                return Err(format!("'{s}': expected a number before '{c}'"));
            }
            let amount: u32 = digits
                .parse()
                .map_err(|_| format!("'{s}': amount {digits} is too large"))?;
            let slot = match c.to_ascii_lowercase() {
                'y' => &mut interval.years,
                'm' => &mut interval.months,
                'd' => &mut interval.days,
                _ => return Err(format!("'{s}': unknown unit '{c}', expected y, m or d")),
            };
            *slot = slot
                .checked_add(amount)
                .ok_or_else(|| format!("'{s}' is too large"))?;
            digits.clear();
        }
        if !digits.is_empty() {
            return Err(format!("'{s}': missing unit after {digits}"));
        }
        Ok(interval)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let mut written = false;
        for (amount, unit) in [(self.years, 'y'), (self.months, 'm'), (self.days, 'd')] {
            if amount > 0 {
                write!(f, "{amount}{unit}")?;
                written = true;
            }
        }
        if !written {
            f.write_str("0d")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Violation {
    Min,
    Max,
}

/// Date format plus interval bounds shared by both date rules.
#[derive(Debug, Clone)]
struct DateWindow {
    format: String,
    min: Option<Interval>,
    max: Option<Interval>,
}

impl DateWindow {
    fn from_options(options: &ValidatorOptions) -> Result<Self> {
        let format = options
            .format
            .clone()
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(options.invalid("format", format!("'{format}' is not a valid date format")));
        }

        let min = parse_interval(options, "min", options.min.as_deref())?;
        let max = parse_interval(options, "max", options.max.as_deref())?;
        if min.is_none() && max.is_none() {
            return Err(options.missing("min"));
        }
        Ok(Self { format, min, max })
    }

    /// Parses text with the configured format. Numbers are spreadsheet serial dates.
    fn parse(&self, value: &Value) -> Option<NaiveDate> {
        match value {
            Value::Text(text) => NaiveDate::parse_from_str(text.trim(), &self.format).ok(),
            Value::Number(serial) => from_serial(*serial),
        }
    }

    /// A bound that falls off the calendar lies beyond every date in its direction.
    fn check(&self, from: NaiveDate, to: NaiveDate) -> Option<Violation> {
        if let Some(min) = &self.min {
            let admitted = match min.add_to(from) {
                Some(earliest) => earliest <= to,
                None => min.negative,
            };
            if !admitted {
                return Some(Violation::Min);
            }
        }
        if let Some(max) = &self.max {
            let admitted = match max.add_to(from) {
                Some(latest) => to <= latest,
                None => !max.negative,
            };
            if !admitted {
                return Some(Violation::Max);
            }
        }
        None
    }

    fn bound(&self, violation: Violation) -> String {
        let interval = match violation {
            Violation::Min => self.min,
            Violation::Max => self.max,
        };
        interval.map(|i| i.to_string()).unwrap_or_default()
    }
}

fn parse_interval(
    options: &ValidatorOptions,
    option: &'static str,
    literal: Option<&str>,
) -> Result<Option<Interval>> {
    literal
        .map(|literal| literal.parse().map_err(|reason| options.invalid(option, reason)))
        .transpose()
}

fn from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 || serial > f64::from(u32::MAX) {
        return None;
    }
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_days(Days::new(serial.trunc() as u64))
}

/// Elapsed interval between the value and a fixed reference date.
#[derive(Debug, Clone)]
pub struct DateDiff {
    window: DateWindow,
    reference: NaiveDate,
    message: Option<String>,
}

impl DateDiff {
    const KIND: ValidatorKind = ValidatorKind::DateDiff;

    /// Builds the rule; without `reference` the current local date is used.
    pub fn new(options: &ValidatorOptions) -> Result<Self> {
        Self::with_today(options, Local::now().date_naive())
    }

    /// Like [`DateDiff::new`], with `today` standing in for the current date.
    pub fn with_today(options: &ValidatorOptions, today: NaiveDate) -> Result<Self> {
        let window = DateWindow::from_options(options)?;
        let reference = match options.reference.as_deref() {
            Some(text) => NaiveDate::parse_from_str(text.trim(), &window.format).map_err(|e| {
                options.invalid("reference", format!("'{text}' does not match {}: {e}", window.format))
            })?,
            None => today,
        };
        Ok(Self {
            window,
            reference,
            message: options.message.clone(),
        })
    }

    pub(crate) fn boxed(options: &ValidatorOptions) -> Result<Box<dyn Validator>> {
        Ok(Box::new(Self::new(options)?))
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }
}

impl Validator for DateDiff {
    fn kind(&self) -> ValidatorKind {
        Self::KIND
    }

    fn validate(
        &self,
        value: Option<&Value>,
        _context: Option<&ValidationContext<'_>>,
    ) -> Result<ValidationResult> {
        let custom = self.message.as_deref();
        let Some(date) = value.and_then(|v| self.window.parse(v)) else {
            return Ok(failure(Self::KIND, custom, || {
                format!("must be a valid date in format {}", self.window.format)
            }));
        };
        let Some(violation) = self.window.check(date, self.reference) else {
            return Ok(ValidationResult::pass(Self::KIND));
        };
        Ok(failure(Self::KIND, custom, || {
            let reference = self.reference.format(&self.window.format);
            let bound = self.window.bound(violation);
            match violation {
                Violation::Min => format!("must be at least {bound} before {reference}"),
                Violation::Max => format!("must be at most {bound} before {reference}"),
            }
        }))
    }
}

/// Elapsed interval from the `target` field's date to the value's date.
#[derive(Debug, Clone)]
pub struct DateFieldDiff {
    window: DateWindow,
    target: String,
    message: Option<String>,
}

impl DateFieldDiff {
    const KIND: ValidatorKind = ValidatorKind::DateFieldDiff;

    pub fn new(options: &ValidatorOptions) -> Result<Self> {
        Ok(Self {
            window: DateWindow::from_options(options)?,
            target: options.target_field()?.to_string(),
            message: options.message.clone(),
        })
    }

    pub(crate) fn boxed(options: &ValidatorOptions) -> Result<Box<dyn Validator>> {
        Ok(Box::new(Self::new(options)?))
    }
}

impl Validator for DateFieldDiff {
    fn kind(&self) -> ValidatorKind {
        Self::KIND
    }

    fn validate(
        &self,
        value: Option<&Value>,
        context: Option<&ValidationContext<'_>>,
    ) -> Result<ValidationResult> {
        let context = require_context(Self::KIND, context)?;
        let custom = self.message.as_deref();
        let Some(to) = value.and_then(|v| self.window.parse(v)) else {
            return Ok(failure(Self::KIND, custom, || {
                format!("must be a valid date in format {}", self.window.format)
            }));
        };
        let Some(from) = context.row.get(&self.target).and_then(|v| self.window.parse(v)) else {
            return Ok(failure(Self::KIND, custom, || {
                format!(
                    "is compared with field '{}' which must contain a valid date",
                    self.target
                )
            }));
        };
        let Some(violation) = self.window.check(from, to) else {
            return Ok(ValidationResult::pass(Self::KIND));
        };
        Ok(failure(Self::KIND, custom, || {
            let bound = self.window.bound(violation);
            match violation {
                Violation::Min => format!("must be at least {bound} after field '{}'", self.target),
                Violation::Max => format!("must be at most {bound} after field '{}'", self.target),
            }
        }))
    }
}
