use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use notes_core::input::{ButtonState, Input};
use notes_core::notes;
use notes_core::trainer::{Poll, Trainer};

use crate::keymap::Command;
use crate::sim::{SimBoard, SimDelay, SimLoop, SimPin};
use crate::speaker::Speaker;

mod keymap;
mod log_capture;
mod sim;
mod speaker;
mod wave;

type SimTrainer = Trainer<SimPin, SimLoop, SimDelay>;

enum Flow {
    Continue,
    Exit,
}

struct RawMode;

impl RawMode {
    fn enable() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn main() -> anyhow::Result<()> {
    log_capture::init()?;

    let board = SimBoard::new();
    let mut trainer = Trainer::new(board.pin(), board.spin_loop(), board.delay());
    let speaker = Speaker::new()?;

    // Keys given on the command line run as a script, e.g. `notes-desktop 245p`
    let script: String = std::env::args().skip(1).collect();
    if !script.is_empty() {
        for key in script.chars() {
            let Some(command) = keymap::command_for(key) else {
                log::warn!("ignoring unknown key {:?}", key);
                continue;
            };
            if let Flow::Exit = run(command, &mut trainer, &board, &speaker)? {
                break;
            }
        }
        return Ok(());
    }

    log::info!("keys 1-5 press SW1-SW5, p plays the arpeggio, q quits");
    let _raw = RawMode::enable()?;

    'running: loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let command = match key.code {
            KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char(c) => keymap::command_for(c),
            _ => None,
        };
        if let Some(command) = command {
            if let Flow::Exit = run(command, &mut trainer, &board, &speaker)? {
                break 'running;
            }
        }
    }

    Ok(())
}

fn run(
    command: Command,
    trainer: &mut SimTrainer,
    board: &SimBoard,
    speaker: &Speaker,
) -> anyhow::Result<Flow> {
    let mut flow = Flow::Continue;

    match command {
        Command::Quit => return Ok(Flow::Exit),
        Command::Arpeggio => {
            if let Err(e) = trainer.play_phrase(&notes::ARPEGGIO) {
                log::warn!("arpeggio: {}", e);
            }
        }
        Command::Press(switch) => {
            let mut input = Input::new();
            input.set_switch(switch, ButtonState::JustPressed);
            match trainer.poll(&input) {
                Ok(Poll::Reset) => {
                    log::info!("bootloader reset requested, leaving simulator");
                    flow = Flow::Exit;
                }
                Ok(_) => {}
                Err(e) => log::warn!("{:?}: {}", switch, e),
            }
        }
    }

    let recording = board.take_recording();
    if recording.is_silent() {
        log::debug!("{:?}: silent", command);
    } else {
        log::info!(
            "{:?}: {} toggles over {:.1} ms, ~{:.1} Hz",
            command,
            recording.toggles(),
            recording.duration().as_secs_f64() * 1000.0,
            recording.estimated_frequency().unwrap_or_default()
        );
    }
    speaker.play(recording)?;

    Ok(flow)
}
