//! Thermostat with a pulled output function
//!
//! This demo runs the classic read / step / act control loop.
//!
//! Key concepts:
//! - Builder construction with an observer registered up front
//! - Hysteresis kept entirely inside the pure transition function
//! - Output computed from state alone and applied by the caller's I/O code
//!
//! Run with: cargo run --example thermostat

use moore::builder::MachineBuilder;
use moore::core::{Input, State};
use tracing::{info, Level};

const HYSTERESIS: i16 = 5;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Mode {
    Idle,
    Heating,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Thermostat {
    mode: Mode,
    /// Target temperature in tenths of a degree
    target: i16,
    reading: i16,
}

impl State for Thermostat {
    fn name(&self) -> &str {
        match self.mode {
            Mode::Idle => "Idle",
            Mode::Heating => "Heating",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Event {
    Nothing,
    Reading(i16),
    SetTarget(i16),
}

impl Input for Event {
    const NONE: Self = Event::Nothing;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Actuators {
    heater: bool,
    status_led: bool,
}

fn regulate(state: &Thermostat, event: &Event) -> Thermostat {
    let next = match event {
        Event::Nothing => return *state,
        Event::Reading(reading) => Thermostat {
            reading: *reading,
            ..*state
        },
        Event::SetTarget(target) => Thermostat {
            target: *target,
            ..*state
        },
    };

    let mode = match next.mode {
        Mode::Idle if next.reading < next.target.saturating_sub(HYSTERESIS) => Mode::Heating,
        Mode::Heating if next.reading > next.target.saturating_add(HYSTERESIS) => Mode::Idle,
        mode => mode,
    };
    Thermostat { mode, ..next }
}

fn actuators(state: &Thermostat) -> Actuators {
    Actuators {
        heater: state.mode == Mode::Heating,
        status_led: state.reading < state.target,
    }
}

// Stand-in for the sensor; a crude room that warms while the heater runs.
struct Room {
    temperature: i16,
}

impl Room {
    fn read(&self) -> i16 {
        self.temperature
    }

    fn apply(&mut self, actuators: Actuators) {
        self.temperature += if actuators.heater { 4 } else { -2 };
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    println!("=== Thermostat Demo ===\n");

    let mut machine = MachineBuilder::<Thermostat, Event, Actuators>::new()
        .initial(Thermostat {
            mode: Mode::Idle,
            target: 200,
            reading: 200,
        })
        .transition(regulate)
        .pulled_output(actuators)
        .observer(|previous, next| {
            if previous.mode != next.mode {
                info!(
                    from = previous.name(),
                    to = next.name(),
                    reading = next.reading,
                    target = next.target,
                    "mode changed"
                );
            }
        })
        .build()?;

    let mut room = Room { temperature: 180 };

    for cycle in 0..40 {
        if cycle == 20 {
            machine.step(Event::SetTarget(190));
        }

        machine.step(Event::Reading(room.read()));

        if let Some(output) = machine.current_output() {
            room.apply(output);
            println!(
                "cycle {cycle:>2}: {:>5.1}C heater={} led={}",
                f32::from(room.read()) / 10.0,
                output.heater,
                output.status_led
            );
        }
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle_at(target: i16, reading: i16) -> Thermostat {
        Thermostat {
            mode: Mode::Idle,
            target,
            reading,
        }
    }

    #[test]
    fn hysteresis_band_switches_modes() {
        let cold = regulate(&idle_at(200, 200), &Event::Reading(190));
        assert_eq!(cold.mode, Mode::Heating);

        let warm = regulate(&cold, &Event::Reading(203));
        assert_eq!(warm.mode, Mode::Heating);

        let hot = regulate(&warm, &Event::Reading(210));
        assert_eq!(hot.mode, Mode::Idle);
    }

    #[test]
    fn extreme_targets_do_not_overflow() {
        let low = regulate(&idle_at(0, 0), &Event::SetTarget(i16::MIN));
        assert_eq!(low.mode, Mode::Idle);

        let heating = Thermostat {
            mode: Mode::Heating,
            ..idle_at(0, i16::MAX)
        };
        let high = regulate(&heating, &Event::SetTarget(i16::MAX));
        assert_eq!(high.mode, Mode::Heating);
    }

    #[test]
    fn no_input_keeps_state() {
        let state = idle_at(200, 150);
        assert_eq!(regulate(&state, &Event::NONE), state);
    }
}
