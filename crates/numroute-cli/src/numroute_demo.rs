//! numroute demo CLI
//!
//! Usage: numroute_demo
//!
//! Prints a banner followed by three results computed over a fixed
//! sequence. Log verbosity is controlled with `RUST_LOG` (default: warn).

use numroute::constants::{AI_DOMAIN, ANALYTICS_DOMAIN, BANNER, DEMO_VALUES};
use numroute::{Router, RouterError, performance_score};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(router: &Router) -> Result<(), RouterError> {
    for line in BANNER {
        println!("{}", line);
    }
    println!();
    println!("Input: {:?}", DEMO_VALUES);

    let doubled = router.execute(ANALYTICS_DOMAIN, &DEMO_VALUES)?;
    println!("[{}] {:?}", ANALYTICS_DOMAIN, doubled);

    let squared = router.execute_timed(AI_DOMAIN, &DEMO_VALUES)?;
    println!(
        "[{}] {:?} ({:.3} ms)",
        AI_DOMAIN, squared.result, squared.elapsed_ms
    );

    println!("Performance score: {}", performance_score(&DEMO_VALUES));

    Ok(())
}

fn main() {
    init_logging();

    let router = Router::new();
    tracing::debug!(domains = ?router.domains().collect::<Vec<_>>(), "router ready");

    if let Err(e) = run(&router) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
