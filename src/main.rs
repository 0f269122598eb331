use std::{fs, num::NonZeroUsize, process::ExitCode};

use calculable::service::{Calculation, CalculationService, MemoryRepository, ServiceConfig};
use clap::Parser;
use log::{LevelFilter, error};

/// calculable evaluates arithmetic expressions strictly from left to right,
/// so `2+3*4` is 20.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as a file holding one expression per line.
    #[arg(short, long)]
    file: bool,

    /// Print each calculation as a JSON record.
    #[arg(short, long)]
    json: bool,

    /// After evaluating, list this many of the most recent calculations.
    #[arg(long, value_name = "N")]
    history: Option<NonZeroUsize>,

    /// Log the scan and the fold at debug level.
    #[arg(short, long)]
    verbose: bool,

    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new().filter_level(default_level)
                              .parse_default_env()
                              .init();

    let expressions: Vec<String> = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script.lines()
                                .map(str::trim)
                                .filter(|line| !line.is_empty())
                                .map(str::to_string)
                                .collect(),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        vec![args.contents.clone()]
    };

    let config = args.history
                     .map_or_else(ServiceConfig::default,
                                  |limit| ServiceConfig { history_limit: limit.get() });
    let mut service = CalculationService::with_config(MemoryRepository::new(), config);

    let mut failed = false;
    for (index, expression) in expressions.iter().enumerate() {
        match service.create(expression) {
            Ok(calc) => print_calculation(&calc, &args),
            Err(e) => {
                failed = true;
                if args.file {
                    eprintln!("line {}: {expression}: {e}", index + 1);
                } else {
                    eprintln!("{e}");
                }
            },
        }
    }

    if args.history.is_some() {
        match service.last_calculations() {
            Ok(calcs) => {
                println!("-- last {} --", calcs.len());
                for calc in &calcs {
                    print_calculation(calc, &args);
                }
            },
            Err(e) => error!("{e}"),
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn print_calculation(calc: &Calculation, args: &Args) {
    if args.json {
        match serde_json::to_string(calc) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("failed to serialize calculation {}: {e}", calc.id),
        }
    } else if args.file || args.history.is_some() {
        println!("{calc}");
    } else {
        println!("{}", calc.result);
    }
}

#[cfg(test)]
mod tests {
    use calculable::util::num::format_result;

    use super::*;

    #[test]
    fn result_text_matches_formatting() {
        let mut service = CalculationService::new(MemoryRepository::new());
        let calc = service.create("6/3").unwrap();
        assert_eq!(calc.result, format_result(2.0));
    }

    #[test]
    fn args_parse_flags() {
        let args = Args::try_parse_from(["calculable", "--json", "--history", "3", "2+2"]).unwrap();
        assert!(args.json);
        assert!(!args.file);
        assert_eq!(args.history.map(NonZeroUsize::get), Some(3));
        assert_eq!(args.contents, "2+2");
    }

    #[test]
    fn leading_minus_is_an_expression_not_a_flag() {
        let args = Args::try_parse_from(["calculable", "-2+3"]).unwrap();
        assert_eq!(args.contents, "-2+3");

        let args = Args::try_parse_from(["calculable", "--json", "-2+3"]).unwrap();
        assert!(args.json);
        assert_eq!(args.contents, "-2+3");
    }

    #[test]
    fn history_of_zero_is_rejected() {
        assert!(Args::try_parse_from(["calculable", "--history", "0", "2+2"]).is_err());
        assert!(Args::try_parse_from(["calculable", "--history", "1", "2+2"]).is_ok());
    }
}
