use clap::Parser;
use cronrule::{Cadence, CronExpression};
use jiff::civil::DateTime;
use std::process;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "cronrule",
    about = "Five-field cron expressions and their occurrences",
    version
)]
struct Cli {
    /// Cron expression (e.g., "30 10 * * mon")
    expression: Option<String>,

    /// Number of occurrences to show
    #[arg(short, long, default_value = "1")]
    n: u32,

    /// Start of the listing (civil datetime, e.g. 2024-01-01T00:00). Shows up to 100 occurrences unless --to is specified.
    #[arg(long, conflicts_with = "n")]
    from: Option<String>,

    /// Inclusive end of the --from listing. When specified, shows all occurrences in [from, to].
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Validate expression without computing
    #[arg(long)]
    check: bool,

    /// Show parsed fields as JSON
    #[arg(long)]
    parse: bool,

    /// Print the normalized cron text
    #[arg(long)]
    encode: bool,

    /// Build the expression from a cadence (daily, weekly, monthly, yearly) instead of text
    #[arg(long, requires = "anchor", conflicts_with = "expression")]
    rule: Option<Cadence>,

    /// First occurrence of a --rule (civil datetime)
    #[arg(long, requires = "rule")]
    anchor: Option<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn parse_datetime(flag: &str, value: &str) -> DateTime {
    match value.parse() {
        Ok(dt) => dt,
        Err(e) => {
            eprintln!("error: invalid --{flag} datetime: {e}");
            process::exit(1);
        }
    }
}

fn print_occurrences(results: &[DateTime], json: bool) {
    if json {
        let iso_strings: Vec<String> = results.iter().map(|dt| dt.to_string()).collect();
        println!("{}", serde_json::json!(iso_strings));
    } else {
        for dt in results {
            println!("{dt}");
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let expr = if let Some(cadence) = cli.rule {
        let anchor = match cli.anchor {
            Some(ref anchor) => parse_datetime("anchor", anchor),
            None => {
                eprintln!("error: --rule requires --anchor");
                process::exit(2);
            }
        };
        CronExpression::from_cadence(cadence, anchor)
    } else {
        let expression = match cli.expression {
            Some(ref expr) => expr.as_str(),
            None => {
                eprintln!("error: no expression provided");
                process::exit(2);
            }
        };
        match CronExpression::parse(expression) {
            Ok(expr) => expr,
            Err(e) => {
                eprintln!("{}", e.display_rich());
                process::exit(1);
            }
        }
    };
    debug!(expression = %expr, "cron: expression ready");

    if cli.check {
        println!("\u{2713} valid");
        process::exit(0);
    }

    if cli.parse {
        match serde_json::to_string_pretty(&cronrule::to_json(&expr)) {
            Ok(json) => {
                println!("{json}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
    }

    if cli.encode {
        println!("{expr}");
        process::exit(0);
    }

    // Handle --from/--to range query
    if let Some(ref from_str) = cli.from {
        let from = parse_datetime("from", from_str);

        let results: Vec<DateTime> = if let Some(ref to_str) = cli.to {
            let to = parse_datetime("to", to_str);
            expr.between(from, to).collect()
        } else {
            // occurrences() with default limit
            let limit = 100;
            expr.occurrences(from).take(limit).collect()
        };
        debug!(count = results.len(), %from, "cron: listed occurrences");

        if results.is_empty() {
            eprintln!("no occurrences in range");
            process::exit(0);
        }
        print_occurrences(&results, cli.json);
        process::exit(0);
    }

    // Default: compute next N occurrences
    let mut n = cli.n;
    if n > 1000 {
        eprintln!("warning: capped at 1000 occurrences");
        n = 1000;
    }

    let now = jiff::Zoned::now().datetime();
    let results = expr.next_n_after(now, n as usize);

    if results.is_empty() {
        eprintln!("no upcoming occurrences");
        process::exit(0);
    }
    print_occurrences(&results, cli.json);
}
