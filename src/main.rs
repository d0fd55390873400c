use anyhow::Result;
use std::env;

use swift_gpi_sim::{MessageStore, PaymentInstruction, SynthesizedMessage};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "demo" {
        // Non-interactive mode
        run_demo()?;
    } else {
        // UI mode (default)
        run_ui_mode()?;
    }

    Ok(())
}

/// Synthesize one message from the documented sample instruction and print
/// it, standing in for the creation flow without a terminal UI.
fn run_demo() -> Result<()> {
    println!("✉️  SWIFT GPI Simulator - Demo Message");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let instruction = PaymentInstruction::sample();
    let message = SynthesizedMessage::generate(&instruction);

    let mut store = MessageStore::new();
    let stored = store.store(instruction, message);

    println!("\n{}\n", stored.message.formatted);

    // The original logged this line in place of a database write
    println!("💾 Stored in database (simulated): {}", stored.id);
    println!("✓ Session store now holds {} message(s)", store.count());

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    use swift_gpi_sim::ui;

    println!("🖥️  Loading SWIFT GPI Simulator UI...\n");
    println!("Starting UI... (Press Esc to quit)\n");

    let mut app = ui::App::new();
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    if app.store.count() > 0 {
        // Same database stand-in, reported once the alternate screen is gone
        for stored in app.store.all() {
            println!("💾 Stored in database (simulated): {}", stored.id);
        }
        println!("✓ {} message(s) created this session", app.store.count());
    }

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use web UI: cargo run --bin gpi-server --features server");
    std::process::exit(1);
}
