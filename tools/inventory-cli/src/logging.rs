//! Diagnostic logging.

use tracing_subscriber::EnvFilter;

const CRATES: [&str; 4] = [
    "inventory",
    "inventory_console",
    "inventory_data",
    "inventory_model",
];

/// Install the global subscriber. Logs go to stderr so they never mix with
/// command output. `RUST_LOG` overrides the level chosen here.
pub fn init(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(verbose);

    // A subscriber may already be set when running under a test harness.
    if json {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.try_init();
    }
}

fn default_directives(verbose: bool) -> String {
    if !verbose {
        return "warn".to_string();
    }
    let mut directives = vec!["warn".to_string()];
    directives.extend(CRATES.iter().map(|c| format!("{}=debug", c)));
    directives.join(",")
}
