//! Blinking LED with a self-feeding output function
//!
//! This demo drives an LED from a simulated millisecond clock.
//!
//! Key concepts:
//! - Elapsed time turned into `Tick` inputs by the caller, never read by δ
//! - Output function performing the pin write and feeding `Finish` back
//! - Observers seeing the follow-up transition within the same step
//!
//! Run with: cargo run --example blink

use moore::core::{Input, State};
use moore::engine::Machine;
use tracing::info;

const BLINK_INTERVAL_MS: u64 = 250;
const BLINKS: u8 = 5;
const LED_PIN: u8 = 13;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
struct Blinker {
    led: bool,
    blinks: u8,
    done: bool,
}

impl State for Blinker {
    fn name(&self) -> &str {
        match (self.done, self.led) {
            (true, _) => "Done",
            (false, true) => "LedOn",
            (false, false) => "LedOff",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Signal {
    Nothing,
    Tick,
    Finish,
}

impl Input for Signal {
    const NONE: Self = Signal::Nothing;
}

fn blink(state: &Blinker, signal: &Signal) -> Blinker {
    match signal {
        Signal::Nothing => *state,
        Signal::Tick if state.done => *state,
        Signal::Tick => Blinker {
            led: !state.led,
            blinks: state.blinks + u8::from(!state.led),
            done: false,
        },
        Signal::Finish => Blinker {
            led: false,
            done: true,
            ..*state
        },
    }
}

// Stand-in for a digital pin write.
fn write_pin(pin: u8, high: bool) {
    println!("  pin {pin} <- {}", if high { "HIGH" } else { "LOW" });
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Blink Demo ===\n");

    let mut machine: Machine<Blinker, Signal> = Machine::new(blink, Blinker::default())
        .with_feedback(|previous: &Blinker, next: &Blinker| {
            if previous.led != next.led {
                write_pin(LED_PIN, next.led);
            }
            if next.blinks >= BLINKS && !next.led && !next.done {
                Signal::Finish
            } else {
                Signal::Nothing
            }
        });

    if let Err(err) = machine.add_observer(|previous: &Blinker, next: &Blinker| {
        if previous != next {
            info!(from = previous.name(), to = next.name(), blinks = next.blinks, "led changed");
        }
    }) {
        eprintln!("could not register observer: {err}");
    }

    let mut last_tick = 0;
    for now_ms in (0..=4_000).step_by(50) {
        let signal = if now_ms - last_tick >= BLINK_INTERVAL_MS {
            last_tick = now_ms;
            Signal::Tick
        } else {
            Signal::Nothing
        };

        let state = *machine.step(signal);
        if state.done {
            println!("\nFinished after {} blinks at t={now_ms}ms", state.blinks);
            break;
        }
    }

    let diagnostics = machine.diagnostics();
    println!(
        "steps: {}, transitions: {}, follow-ups: {}",
        diagnostics.steps,
        diagnostics.transitions,
        diagnostics.follow_ups()
    );

    println!("\n=== Demo Complete ===");
}
