//! # Output Formatting
//!
//! Renders conversion results either as readable lines or as always-quoted
//! CSV rows. The first batch of a run is preceded by a banner (`Rate on ...`)
//! or by the CSV header; later batches are not.

use crate::classify::display_code;
use crate::client::Transport;
use crate::converter::Converter;
use crate::error::{ConvertError, Result};
use crate::models::CurrencyList;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

const CSV_HEADER: [&str; 4] = ["FROM AMOUNT", "FROM CURRENCY", "TO AMOUNT", "TO CURRENCY"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Csv,
}

/// Writes results for one run
pub struct Printer<W: Write> {
    out: W,
    format: OutputFormat,
    header_printed: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            header_printed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Convert `amount` of `from` into every target and print the results
    ///
    /// Per-pair failures are printed and skipped. Fetch failures abort.
    pub fn print_conversions<T: Transport>(
        &mut self,
        converter: &mut Converter<T>,
        amount: f64,
        from: &str,
        targets: &[String],
    ) -> Result<()> {
        let from = display_code(from);
        if !self.header_printed {
            self.header_printed = true;
            self.print_header(converter, &from)?;
        }

        for target in targets {
            let to = display_code(target);
            let result = converter.convert(amount, &from, &to);
            self.flush_notices(converter)?;
            match result {
                Ok(converted) => self.print_row(amount, &from, converted, &to)?,
                Err(e) if e.is_recoverable() => writeln!(self.out, "{e}")?,
                Err(e) => return Err(e),
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// One `code : description` line per currency
    pub fn print_currency_list(&mut self, list: &CurrencyList) -> Result<()> {
        for (code, desc) in list.iter() {
            writeln!(self.out, "{code} : {desc}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Print a message line, used for errors reported by the driver
    pub fn print_message(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }

    fn print_header<T: Transport>(&mut self, converter: &mut Converter<T>, from: &str) -> Result<()> {
        match self.format {
            OutputFormat::Csv => self.write_csv(&CSV_HEADER),
            OutputFormat::Plain => {
                let date = converter.rate_date(from);
                self.flush_notices(converter)?;
                match date {
                    Ok(Some(date)) => writeln!(self.out, "Rate on {date}")?,
                    Ok(None) => tracing::warn!("Rate table for {} has no date", from),
                    // the "not a currency" notice above already covers it
                    Err(ConvertError::InvalidCurrency(_)) => {}
                    Err(e) if e.is_recoverable() => writeln!(self.out, "{e}")?,
                    Err(e) => return Err(e),
                }
                Ok(())
            }
        }
    }

    fn print_row(&mut self, amount: f64, from: &str, converted: f64, to: &str) -> Result<()> {
        let amount = commaf(amount);
        let converted = commaf(converted);
        match self.format {
            OutputFormat::Plain => {
                writeln!(self.out, "{amount} {from} = {converted} {to}")?;
                Ok(())
            }
            OutputFormat::Csv => self.write_csv(&[amount.as_str(), from, converted.as_str(), to]),
        }
    }

    fn write_csv(&mut self, record: &[&str]) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut self.out);
        writer.write_record(record)?;
        writer.flush()?;
        Ok(())
    }

    fn flush_notices<T: Transport>(&mut self, converter: &mut Converter<T>) -> Result<()> {
        for notice in converter.take_notices() {
            writeln!(self.out, "{notice}")?;
        }
        Ok(())
    }
}

/// Format a number with thousands separators, keeping every significant digit
///
/// `1234567.5` becomes `1,234,567.5` and `1.0` becomes `1`.
pub fn commaf(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = value.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut formatted = String::with_capacity(digits.len() + int_part.len() / 3 + 1);
    if value < 0.0 {
        formatted.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    if let Some(frac_part) = frac_part {
        formatted.push('.');
        formatted.push_str(frac_part);
    }
    formatted
}
