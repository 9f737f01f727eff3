//! Riverhop entry point
//!
//! Runs a headless demo session: the fixed-period clock and a seeded scripted
//! player are merged into one ordered event stream and folded through the
//! game core, with every produced state going to the configured sink.
//!
//! Usage: `riverhop [settings.json]`

use anyhow::{Context, Result};

use riverhop::Session;
use riverhop::platform::{
    Clock, JsonLinesSink, LogSink, RenderSink, ScriptedInput, merge_by_arrival,
};
use riverhop::settings::{OutputMode, Settings};
use riverhop::sim::GameState;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => {
            Settings::load(&path).with_context(|| format!("could not load settings from {path}"))?
        }
        None => Settings::default(),
    };
    log::info!(
        "Riverhop: {} ticks every {} units, output={}",
        settings.session_ticks,
        settings.tick_period,
        settings.output.as_str()
    );

    let final_state = match settings.output {
        OutputMode::Log => play(&settings, LogSink::new()),
        OutputMode::Json => play(&settings, JsonLinesSink::new(std::io::stdout().lock())),
    };

    log::info!(
        "Session over at t={}: score {}, best {}, {}",
        final_state.time,
        final_state.score,
        final_state.best_score(),
        if final_state.is_over { "lost" } else { "still alive" }
    );
    Ok(())
}

/// Fold one demo session into `sink` and return the last state
fn play<S: RenderSink>(settings: &Settings, sink: S) -> GameState {
    let ticks = Clock::new(settings.tick_period).take(settings.session_ticks);
    let presses = ScriptedInput::new(settings.input_seed).presses_until(settings.session_length());
    let bindings = settings.key_bindings.clone();
    let inputs = presses
        .into_iter()
        .filter_map(move |press| bindings.timed_event(press));

    let mut session = Session::new(sink);
    session
        .run(merge_by_arrival(ticks, inputs).map(|timed| timed.value))
        .clone()
}
