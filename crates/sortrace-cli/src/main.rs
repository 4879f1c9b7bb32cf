#![forbid(unsafe_code)]

use clap::Parser;

fn main() {
    let cli = sortrace_cli::Cli::parse();
    let json = cli.json;
    sortrace_cli::init_tracing();
    if let Err(error) = sortrace_cli::run(cli) {
        if json {
            eprintln!(
                "{}",
                serde_json::json!({
                    "status": "error",
                    "error": error.to_string(),
                    "exit_code": error.exit_code(),
                })
            );
        } else {
            eprintln!("error: {error}");
        }
        std::process::exit(error.exit_code());
    }
}
