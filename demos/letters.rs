//! Letter Recognition: ART1 learning the alphabet `A` through `T`.
//!
//! Feeds twenty 8×8 letters, one at a time, to a network with 64 inputs,
//! 64 categories and vigilance 0.95. For every letter it prints the class
//! the network assigned (as a letter) and the prototype that class learned.
//!
//! Pass `noisy` to use letters with about a quarter of their strokes
//! missing, and optionally a vigilance value:
//!
//! Run: cargo run --example letters -- noisy 0.9
//!
//! Set `RUST_LOG=resonance=debug` to watch the search decisions.

use resonance::{letters, ArtNetwork, Glyph, NetworkConfig};
use tracing_subscriber::EnvFilter;

fn main() -> resonance::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let noisy = matches!(args.next().as_deref(), Some("noisy"));
    let vigilance = args
        .next()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0.95);

    let config = NetworkConfig::new(64, 64, vigilance).with_seed(1);
    let mut net = ArtNetwork::from_config(&config)?;

    let set = if noisy { &letters::NOISY } else { &letters::CLEAN };

    println!("rho value is --> {}", vigilance);
    if noisy {
        println!("Noise rate = 25%");
    }

    for (i, glyph) in letters::glyphs(set)?.iter().enumerate() {
        match net.learn(&glyph.to_input())? {
            Some(r) => {
                println!(
                    "Input character {} -> class recognized {}",
                    letters::label(i),
                    letters::label(r.category)
                );
                print!(
                    "{}",
                    Glyph::from_prototype(letters::SIZE, letters::SIZE, &r.prototype)?
                );
            }
            None => println!(
                "Input character {} -> class recognized None",
                letters::label(i)
            ),
        }
    }

    println!("\n{} of {} categories committed", net.active(), net.capacity());
    Ok(())
}
