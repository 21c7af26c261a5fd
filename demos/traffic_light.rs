//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic machine with undo/redo.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Stepping back and forward through visited states
//! - Rejected events and jumps leave the machine untouched
//!
//! Run with: cargo run --example traffic_light

use backtrack::builder::cycle;
use backtrack::Fsm;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let config = cycle(["green", "yellow", "red"], "next")?;
    let mut fsm = Fsm::new(config);

    println!("States: {:?}", fsm.states(None));
    println!("Initial state: {}\n", fsm.state());

    fsm.trigger("next")?;
    println!("next  -> {}", fsm.state());
    fsm.trigger("next")?;
    println!("next  -> {}", fsm.state());

    for _ in 0..3 {
        let moved = fsm.undo();
        println!("undo  -> {} (moved: {})", fsm.state(), moved);
    }
    let moved = fsm.redo();
    println!("redo  -> {} (moved: {})", fsm.state(), moved);

    if let Err(e) = fsm.trigger("bogus") {
        println!("\ntrigger(\"bogus\") rejected: {e}");
    }
    if let Err(e) = fsm.change_state("unknown") {
        println!("change_state(\"unknown\") rejected: {e}");
    }
    println!("Still in: {}", fsm.state());

    println!("\n=== Example Complete ===");
    Ok(())
}
