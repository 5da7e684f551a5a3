use std::ffi::OsString;

pub use clap::{CommandFactory, Parser};

/// Long flags that may also be written with a single dash (`-outcsv`, `-date=...`)
const SINGLE_DASH_LONG_FLAGS: [&str; 3] = ["outcsv", "date", "list"];

#[derive(Parser, Debug)]
#[command(
    name = "fxconv",
    about = "Convert an amount between currencies using current or historical rates",
    disable_version_flag = true,
    after_help = "<AMOUNT> defaults to 1. Feeding AMOUNTs via pipe, one per line, is allowed."
)]
struct ClapArgs {
    /// Show version
    #[clap(short = 'v', long = "version", help = "Show version")]
    version: bool,

    /// Show currency list
    #[clap(short = 'l', long = "list", help = "Show currency list")]
    list: bool,

    /// Print CSV format
    #[clap(long = "outcsv", help = "Print CSV format")]
    outcsv: bool,

    /// Rate date
    /// Either 'latest' or a calendar date in YYYY-MM-DD format.
    #[clap(
        long = "date",
        default_value = "latest",
        value_name = "YYYY-MM-DD",
        help = "Set rate date in YYYY-MM-DD format"
    )]
    date: String,

    /// Optional amount, then FROM currency, then one or more TO currencies
    #[clap(value_name = "[AMOUNT] FROM TO [TO...]", allow_negative_numbers = true)]
    positionals: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    version: bool,
    list: bool,
    outcsv: bool,
    date: String,
    positionals: Vec<String>,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            version: args.version,
            list: args.list,
            outcsv: args.outcsv,
            date: args.date,
            positionals: args.positionals,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::parse_from(std::env::args_os())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(normalize_flags(itr)).into()
    }

    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(normalize_flags(itr)).map(Into::into)
    }

    /// Rendered usage text
    pub fn usage() -> String {
        ClapArgs::command().render_help().to_string()
    }

    pub fn version(&self) -> bool {
        self.version
    }

    pub fn list(&self) -> bool {
        self.list
    }

    pub fn outcsv(&self) -> bool {
        self.outcsv
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }
}

/// Rewrite `-outcsv` and `-date=...` style flags into their `--` form
fn normalize_flags<I, T>(itr: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut past_separator = false;
    itr.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || past_separator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                past_separator = true;
                return arg;
            }
            let Some(flag) = text.strip_prefix('-') else {
                return arg;
            };
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if !flag.starts_with('-') && SINGLE_DASH_LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert!(!args.version());
        assert!(!args.list());
        assert!(!args.outcsv());
        assert_eq!(args.date(), "latest");
        assert!(args.positionals().is_empty());
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-v", "-l"]);
        assert!(args.version());
        assert!(args.list());
    }

    #[test]
    fn test_parse_single_dash_long_flags() {
        let args = CommandLineArgs::parse_from([
            "program",
            "-outcsv",
            "-date=2024-04-30",
            "10",
            "usd",
            "jpy",
        ]);
        assert!(args.outcsv());
        assert_eq!(args.date(), "2024-04-30");
        assert_eq!(args.positionals(), ["10", "usd", "jpy"]);
    }

    #[test]
    fn test_parse_date_as_separate_value() {
        let args = CommandLineArgs::parse_from(["program", "-date", "2024-01-02", "usd", "eur"]);
        assert_eq!(args.date(), "2024-01-02");
        assert_eq!(args.positionals(), ["usd", "eur"]);
    }

    #[test]
    fn test_parse_double_dash_long_flags() {
        let args = CommandLineArgs::parse_from(["program", "--outcsv", "--date", "latest", "usd", "jpy"]);
        assert!(args.outcsv());
        assert_eq!(args.date(), "latest");
    }

    #[test]
    fn test_negative_amount_is_positional() {
        let args = CommandLineArgs::parse_from(["program", "-5", "usd", "jpy"]);
        assert_eq!(args.positionals(), ["-5", "usd", "jpy"]);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(CommandLineArgs::try_parse_from(["program", "-x", "usd", "jpy"]).is_err());
    }

    #[test]
    fn test_usage_mentions_flags() {
        let usage = CommandLineArgs::usage();
        assert!(usage.contains("--outcsv"));
        assert!(usage.contains("--date"));
    }
}
