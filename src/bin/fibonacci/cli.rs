use std::io::Write;

use anyhow::Context;
use anstyle::{AnsiColor, Style};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::debug;

use fibonacci::constants::{DEFAULT_INDEX, ENV_FIBONACCI_LOG, HEADER};
use fibonacci::fibonacci::{checked_compute, compute, Fibonacci};

const HEADER_STYLE: Style = AnsiColor::Green.on_default().bold();
const LITERAL_STYLE: Style = AnsiColor::Cyan.on_default().bold();
const PLACEHOLDER_STYLE: Style = AnsiColor::Cyan.on_default();
const ERROR_STYLE: Style = AnsiColor::Red.on_default().bold();

pub fn main(args: &ArgMatches, out: &mut impl Write) -> anyhow::Result<()> {
    let n = args
        .get_one::<i64>("index")
        .copied()
        .unwrap_or(DEFAULT_INDEX);
    let checked = args.get_flag("checked");
    let sequence = args.get_flag("sequence");
    debug!(index = n, checked, sequence, "computing");

    let values: Vec<(i64, i64)> = match (checked, sequence) {
        (false, false) => vec![(n, compute(n))],
        (true, false) => {
            let value =
                checked_compute(n).with_context(|| format!("failed to compute fib({})", n))?;
            vec![(n, value)]
        }
        (false, true) => (0..=n).map(|i| (i, compute(i))).collect(),
        (true, true) => {
            checked_compute(n)
                .with_context(|| format!("failed to compute the sequence up to fib({})", n))?;
            (0..).zip(Fibonacci::new()).take(n as usize + 1).collect()
        }
    };

    writeln!(out, "{}", HEADER).context("failed to write to stdout")?;
    for (i, value) in values {
        writeln!(out, "Iterative fib({}): {}", i, value).context("failed to write to stdout")?;
    }

    Ok(())
}

pub fn cli() -> Command {
    let styles = {
        clap::builder::styling::Styles::styled()
            .header(HEADER_STYLE)
            .usage(HEADER_STYLE)
            .literal(LITERAL_STYLE)
            .placeholder(PLACEHOLDER_STYLE)
            .error(ERROR_STYLE)
    };

    Command::new("fibonacci")
        .about("Print Fibonacci numbers, computed iteratively")
        .after_help(format!(
            "Set {} to a tracing filter (e.g. \"debug\") to enable logging on stderr.",
            ENV_FIBONACCI_LOG
        ))
        .styles(styles)
        .arg(
            Arg::new("index")
                .help("Index of the Fibonacci number [default: 10]")
                .short('n')
                .long("index")
                .value_name("N")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("checked")
                .help("Fail on negative indices and on overflow instead of wrapping")
                .long("checked")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("sequence")
                .help("Print every Fibonacci number up to the index")
                .long("sequence")
                .action(ArgAction::SetTrue),
        )
}

#[test]
fn verify_cli() {
    cli().debug_assert();
}
