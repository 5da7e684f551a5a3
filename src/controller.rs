//! # Application Controller
//!
//! Drives one invocation: validates the arguments, picks the amount source
//! and hands every amount to the [`Printer`]. I/O and the network are
//! injected so the whole flow runs in tests without a terminal or a server.
//!
//! Checks run in a fixed order: version flag, date, currency list flag,
//! argument count, then the mode-specific checks. Nothing touches the
//! network before the date has been validated.

use crate::classify::parse_amount;
use crate::client::{HttpTransport, RateClient, Transport};
use crate::cmd_args::CommandLineArgs;
use crate::config::{self, Endpoints};
use crate::converter::Converter;
use crate::date_selector::DateSelector;
use crate::error::ConvertError;
use crate::input::{AmountSource, InputMode};
use crate::output::{OutputFormat, Printer};
use anyhow::Result;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

const NOT_ENOUGH_ARGUMENTS: &str = "Not enough arguments passed";
const NUMBER_IN_PIPE_MODE: &str =
    "Please set FROM currency name instead of the number when you use the pipe";

/// The resolved conversion job
struct Job<R: BufRead> {
    amounts: AmountSource<R>,
    from: String,
    targets: Vec<String>,
}

pub struct AppController<T: Transport, R: BufRead, W: Write> {
    args: CommandLineArgs,
    transport: T,
    endpoints: Endpoints,
    mode: InputMode,
    input: R,
    printer: Printer<W>,
}

impl AppController<HttpTransport, StdinLock<'static>, Stdout> {
    /// Controller wired to the real network, stdin and stdout
    pub fn new(args: CommandLineArgs) -> Result<Self> {
        let transport = HttpTransport::new(config::get_timeout())?;
        let mode = InputMode::detect();
        tracing::debug!("Input mode: {:?}", mode);
        Ok(Self::with_io(
            args,
            transport,
            Endpoints::from_env(),
            mode,
            io::stdin().lock(),
            io::stdout(),
        ))
    }
}

impl<T: Transport, R: BufRead, W: Write> AppController<T, R, W> {
    /// Create a controller with injected transport and streams
    pub fn with_io(
        args: CommandLineArgs,
        transport: T,
        endpoints: Endpoints,
        mode: InputMode,
        input: R,
        output: W,
    ) -> Self {
        let format = if args.outcsv() {
            OutputFormat::Csv
        } else {
            OutputFormat::Plain
        };
        Self {
            args,
            transport,
            endpoints,
            mode,
            input,
            printer: Printer::new(output, format),
        }
    }

    /// Run to completion and return the process exit code
    pub fn run(self) -> Result<i32> {
        let (code, _) = self.run_with_output()?;
        Ok(code)
    }

    /// Like [`run`](Self::run) but also hands back the output stream
    pub fn run_with_output(self) -> Result<(i32, W)> {
        let Self {
            args,
            transport,
            endpoints,
            mode,
            input,
            mut printer,
        } = self;

        let code = execute(&args, transport, endpoints, mode, input, &mut printer)?;
        Ok((code, printer.into_inner()))
    }
}

fn execute<T: Transport, R: BufRead, W: Write>(
    args: &CommandLineArgs,
    transport: T,
    endpoints: Endpoints,
    mode: InputMode,
    input: R,
    printer: &mut Printer<W>,
) -> Result<i32> {
    if args.version() {
        printer.print_message(format!("Version: {}", env!("CARGO_PKG_VERSION")))?;
        return Ok(EXIT_SUCCESS);
    }

    let date: DateSelector = match args.date().parse() {
        Ok(date) => date,
        Err(e) => {
            printer.print_message(e)?;
            return Ok(EXIT_FAILURE);
        }
    };

    let mut converter = Converter::new(RateClient::new(transport, endpoints), date);

    if args.list() {
        return match converter.currency_list() {
            Ok(list) => {
                printer.print_currency_list(list)?;
                Ok(EXIT_SUCCESS)
            }
            Err(e) => report_failure(printer, e),
        };
    }

    let job = match resolve_job(args.positionals(), mode, input) {
        Ok(job) => job,
        Err(message) => {
            printer.print_message(message)?;
            if message == NOT_ENOUGH_ARGUMENTS {
                printer.print_message(CommandLineArgs::usage())?;
            }
            return Ok(EXIT_FAILURE);
        }
    };

    tracing::debug!(
        "Converting from {} to {:?} on {}",
        job.from,
        job.targets,
        converter.date()
    );

    for amount in job.amounts {
        let amount = amount?;
        if let Err(e) = printer.print_conversions(&mut converter, amount, &job.from, &job.targets) {
            return report_failure(printer, e);
        }
    }

    Ok(EXIT_SUCCESS)
}

/// Work out the amount source, FROM and TO from the positionals
fn resolve_job<R: BufRead>(
    positionals: &[String],
    mode: InputMode,
    input: R,
) -> std::result::Result<Job<R>, &'static str> {
    if positionals.len() < 2 {
        return Err(NOT_ENOUGH_ARGUMENTS);
    }

    let leading_amount = parse_amount(&positionals[0]);
    match (mode, leading_amount) {
        (InputMode::Piped, Some(_)) => Err(NUMBER_IN_PIPE_MODE),
        (InputMode::Piped, None) => Ok(Job {
            amounts: AmountSource::stream(input),
            from: positionals[0].clone(),
            targets: positionals[1..].to_vec(),
        }),
        (InputMode::Arguments, Some(amount)) => {
            if positionals.len() < 3 {
                return Err(NOT_ENOUGH_ARGUMENTS);
            }
            Ok(Job {
                amounts: AmountSource::argument(amount),
                from: positionals[1].clone(),
                targets: positionals[2..].to_vec(),
            })
        }
        (InputMode::Arguments, None) => Ok(Job {
            amounts: AmountSource::argument(1.0),
            from: positionals[0].clone(),
            targets: positionals[1..].to_vec(),
        }),
    }
}

fn report_failure<W: Write>(printer: &mut Printer<W>, error: ConvertError) -> Result<i32> {
    tracing::error!("Aborting: {}", error);
    match error {
        ConvertError::Io(e) => Err(e.into()),
        other => {
            printer.print_message(other)?;
            Ok(EXIT_FAILURE)
        }
    }
}
