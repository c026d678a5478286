//! Walks a four-box slice through fill, search, refill and open, printing the
//! closed/opened counts along the way.
//!
//! With the `tracing` feature, library events go to stderr; filter them with
//! `RUST_LOG` (for example `RUST_LOG=boxslice=trace`).

use anyhow::{Context, Result};
use boxslice::predicate::is_negative;
use boxslice::{BoxCell, BoxSlice, GhostToken, ValueBox};

const VALUES: [f64; 4] = [0.0, 2.0, -2.0, 1.0];

fn main() -> Result<()> {
    #[cfg(feature = "tracing")]
    init_tracing();

    println!("size_of(ValueBox): {}", std::mem::size_of::<ValueBox>());
    println!("size_of(BoxCell): {}", std::mem::size_of::<BoxCell<'static>>());
    println!("size_of(BoxSlice): {}", std::mem::size_of::<BoxSlice<'static>>());

    GhostToken::new(|mut token| -> Result<()> {
        let mut boxes = BoxSlice::with_length(VALUES.len());

        for (index, &value) in VALUES.iter().enumerate() {
            boxes
                .get(index)
                .with_context(|| format!("no box at index {index}"))?
                .fill(&mut token, value);
        }

        print_counts("after fill", &boxes, &token);

        let mut matches = Vec::with_capacity(boxes.len());
        let found = boxes.find_all_into(&mut token, is_negative, &mut matches);
        for slot in &matches {
            slot.fill(&mut token, 0.0);
        }
        println!("negative_boxes: {found}");

        print_counts("after refill", &boxes, &token);

        for (index, value) in boxes.open_all(&mut token).into_iter().enumerate() {
            println!("boxes[{index}] = {value:.6}");
        }

        let counts = boxes.counts(&token);
        println!("{counts}");
        println!(
            "summary: {}",
            serde_json::to_string(&counts).context("serializing box counts")?
        );

        boxes.destroy();
        Ok(())
    })
}

fn print_counts<'brand>(label: &str, boxes: &BoxSlice<'brand>, token: &GhostToken<'brand>) {
    println!("[{label}]");
    println!("closed_boxes: {}", boxes.count_closed(token));
    println!("opened_boxes: {}", boxes.count_opened(token));
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    // Logging is optional; a failed init must not stop the demo.
    if let Err(e) = tracing_subscriber::fmt()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init()
    {
        eprintln!("failed to initialize tracing: {e}");
    }
}
