//! Headless mode for smoke testing without a terminal UI.
//!
//! Runs a number of discover cycles against the live collection API and
//! prints each accepted record as text.

use artscout_core::{CandidatePool, Session};
use met_client::MetClient;
use rand::{rngs::StdRng, SeedableRng};

/// Pull `--count N` out of the raw argument list, defaulting to 3.
pub fn parse_count_from_args(args: &[String]) -> usize {
    args.iter()
        .position(|a| a == "--count")
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
        .unwrap_or(3)
}

/// Run `count` discover cycles and print the results.
pub async fn run_headless(count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(CandidatePool::default());
    let source = MetClient::new();
    let mut rng = StdRng::from_entropy();

    println!("=== artscout headless mode ===");
    println!("Pool size: {}", session.pool().len());
    println!();

    for cycle in 1..=count {
        println!("[{cycle}/{count}] discovering...");

        if session.discover(&source, &mut rng).await {
            let record = session.current().expect("accepted cycle sets current");
            println!("  Title:      {}", record.display_title());
            println!("  Artist:     {}", or_unknown(&record.artist_display_name));
            println!("  Date:       {}", or_unknown(&record.object_date));
            println!("  Culture:    {}", or_unknown(&record.culture));
            println!("  Department: {}", or_unknown(&record.department));
            println!("  Medium:     {}", or_unknown(&record.medium));
            println!("  Image:      {}", record.primary_image);
            println!();
        } else {
            let message = session.error().unwrap_or("unknown error");
            return Err(message.to_string().into());
        }
    }

    println!("History entries: {}", session.history().len());
    Ok(())
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "Unknown"
    } else {
        value
    }
}
