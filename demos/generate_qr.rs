//! Generate QR files for a single URL into ./qr_demo
//!
//! Usage: cargo run --example generate_qr -- https://example.com/page

use qrbatch::{Emitter, OutcomeStatus, RenderOptions};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com/demo".to_string());

    std::fs::create_dir_all("qr_demo")?;
    let emitter = Emitter::new(RenderOptions::default(), "qr_demo");
    let report = emitter.emit(&url);

    println!("{url} -> code {} (scale {:?})", report.code, report.scale);
    for outcome in &report.outcomes {
        match &outcome.status {
            OutcomeStatus::Written { bytes } => {
                println!("  ✓ {} ({bytes} bytes)", outcome.path.display())
            }
            OutcomeStatus::Failed { reason } => {
                println!("  ✗ {}: {reason}", outcome.path.display())
            }
        }
    }

    Ok(())
}
