use notes_core::input::Switch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Press(Switch),
    Arpeggio,
    Quit,
}

/// `1`..`5` press SW1..SW5 for one poll, `p` plays the arpeggio, `q` quits.
pub fn command_for(key: char) -> Option<Command> {
    let command = match key.to_ascii_lowercase() {
        '1' => Command::Press(Switch::Sw1),
        '2' => Command::Press(Switch::Sw2),
        '3' => Command::Press(Switch::Sw3),
        '4' => Command::Press(Switch::Sw4),
        '5' => Command::Press(Switch::Sw5),
        'p' => Command::Arpeggio,
        'q' => Command::Quit,
        _ => return None,
    };
    Some(command)
}
