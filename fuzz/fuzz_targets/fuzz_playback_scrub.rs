#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sortrace_core::{Algorithm, generate_trace};
use sortrace_runtime::{PlaybackController, PlaybackState};
use web_time::Duration;

#[derive(Debug, Arbitrary)]
enum Command {
    Play,
    Pause,
    Resume,
    Reset,
    StepForward,
    StepBackward,
    Seek(u16),
    SetSpeed(f64),
    Advance(u16),
}

#[derive(Debug, Arbitrary)]
struct Session {
    algorithm: u8,
    input: Vec<i16>,
    commands: Vec<Command>,
}

fuzz_target!(|session: Session| {
    let algorithm = Algorithm::ALL[usize::from(session.algorithm) % Algorithm::ALL.len()];
    let input: Vec<i32> = session.input.iter().take(128).map(|&v| i32::from(v)).collect();
    let trace = generate_trace(algorithm, &input);
    let mut player = PlaybackController::new(trace.clone());

    for command in session.commands.into_iter().take(256) {
        match command {
            Command::Play => player.play(),
            Command::Pause => player.pause(),
            Command::Resume => player.resume(),
            Command::Reset => player.reset(),
            Command::StepForward => {
                player.step_forward();
            }
            Command::StepBackward => {
                player.step_backward();
            }
            Command::Seek(target) => player.seek(usize::from(target)),
            Command::SetSpeed(speed) => player.set_speed(speed),
            Command::Advance(ms) => {
                player.advance(Duration::from_millis(u64::from(ms)));
            }
        }

        let position = player.position();
        assert!(position <= trace.len(), "position out of range");
        assert_eq!(
            player.current_array(),
            trace.state_at(position).as_slice(),
            "derived array diverged at {position}"
        );
        assert!(player.speed().is_finite(), "speed not finite");
        if player.state() == PlaybackState::Completed {
            assert_eq!(position, trace.len(), "completed early");
        }
    }
});
