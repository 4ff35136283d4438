//! Operator CLI for the donation endpoint.
//!
//! Examples:
//!   venuefy-cli validate 0712345678
//!   venuefy-cli payload +254712345678 600
//!   venuefy-cli classify '{"success":false,"error":"Insufficient balance"}'
//!   venuefy-cli config site-config.json
//!
//! Set `RUST_LOG=debug` for verbose output.

use std::process;

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use venuefy::amount::{parse_leading_int, positive_amount};
use venuefy::prelude::*;

fn usage() -> ! {
    eprintln!("venuefy-cli (checks phone numbers, payloads and replies for the STK endpoint)");
    eprintln!("Usage: venuefy-cli <command> [args]\n");
    eprintln!("Commands:");
    eprintln!("  validate <phone>            Print the normalized number");
    eprintln!("  payload <phone> <amount>    Print the JSON body the site would POST");
    eprintln!("  classify <response-json>    Show how the site would treat a server reply");
    eprintln!("  config [path]               Validate a site config (defaults if no path)");
    process::exit(1);
}

fn fail(msg: impl std::fmt::Display) -> ! {
    error!("{}", msg);
    eprintln!("{}", msg);
    process::exit(1);
}

fn parse_args() -> Vec<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || matches!(args[0].as_str(), "-h" | "--help" | "help") {
        usage();
    }
    args
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    let cmd = args[0].as_str();
    debug!(command = cmd, "venuefy-cli");

    match cmd {
        "validate" => {
            if args.len() < 2 {
                usage();
            }
            match SafaricomNumber::parse(&args[1]) {
                Ok(n) => println!("{n}"),
                Err(e) => fail(e),
            }
        }
        "payload" => {
            if args.len() < 3 {
                usage();
            }
            let phone_number = SafaricomNumber::parse(&args[1]).unwrap_or_else(|e| fail(e));
            let amount = positive_amount(parse_leading_int(&args[2]))
                .unwrap_or_else(|| fail(FlowError::InvalidAmount));
            let req = StkPushRequest {
                phone_number,
                amount,
            };
            println!("{}", req.to_json());
        }
        "classify" => {
            if args.len() < 2 {
                usage();
            }
            let outcome = StkOutcome::from_body(&args[1]);
            let kind = match &outcome {
                StkOutcome::Accepted => "accepted",
                StkOutcome::Rejected { .. } => "rejected",
                StkOutcome::Transport { .. } => "transport",
            };
            println!("{kind}: {}", outcome.user_message());
            if let StkOutcome::Transport { detail } = &outcome {
                debug!(%detail, "body did not parse");
            }
        }
        "config" => {
            let cfg = match args.get(1) {
                Some(path) => {
                    let raw = std::fs::read_to_string(path)
                        .unwrap_or_else(|e| fail(format!("Failed to read {path}: {e}")));
                    SiteConfig::from_json(&raw).unwrap_or_else(|e| fail(e))
                }
                None => SiteConfig::default(),
            };
            match serde_json::to_string_pretty(&cfg) {
                Ok(s) => println!("{s}"),
                Err(e) => fail(e),
            }
        }
        _ => usage(),
    }
}
