//! Input sampling
//!
//! Turns the raw key state seen during one tick into the intents the game
//! understands. Sampling is total: any key state, including an empty one,
//! maps to a defined [`TickInput`].

use std::collections::HashSet;

/// Keys the game distinguishes. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    P,
    L,
    Enter,
    Escape,
    Other,
}

/// Raw key state for one tick
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    /// Keys currently held down
    pub held: HashSet<Key>,
    /// Key presses since the previous tick, in arrival order
    pub pressed: Vec<Key>,
    /// Window close / interrupt
    pub quit: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    pub fn press(mut self, key: Key) -> Self {
        self.pressed.push(key);
        self
    }

    pub fn quitting(mut self) -> Self {
        self.quit = true;
        self
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

/// Discrete edge-triggered intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pause,
    /// Escape
    Back,
    Quit,
    MenuUp,
    MenuDown,
    Confirm,
    ToggleLanguage,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left paddle: -1 = up, 0 = none, 1 = down
    pub left_dir: i8,
    /// Right paddle: -1 = up, 0 = none, 1 = down
    pub right_dir: i8,
    /// Commands in arrival order; `Quit` always comes first
    pub commands: Vec<Command>,
    /// At least one key was pressed this tick
    pub any_key: bool,
}

impl TickInput {
    /// Input carrying only the given commands
    pub fn commands(commands: &[Command]) -> Self {
        Self {
            commands: commands.to_vec(),
            any_key: commands.iter().any(|c| *c != Command::Quit),
            ..Default::default()
        }
    }

    pub fn has(&self, command: Command) -> bool {
        self.commands.contains(&command)
    }
}

/// Map raw key state to this tick's intents
pub fn sample(keys: &KeyState) -> TickInput {
    let mut commands = Vec::with_capacity(keys.pressed.len() + 1);
    if keys.quit {
        commands.push(Command::Quit);
    }
    commands.extend(keys.pressed.iter().filter_map(|key| key_command(*key)));

    TickInput {
        left_dir: direction(keys.is_held(Key::W), keys.is_held(Key::S)),
        right_dir: direction(keys.is_held(Key::Up), keys.is_held(Key::Down)),
        commands,
        any_key: !keys.pressed.is_empty(),
    }
}

/// Directional intent; up wins when both are held
#[inline]
pub fn direction(up: bool, down: bool) -> i8 {
    if up {
        -1
    } else if down {
        1
    } else {
        0
    }
}

fn key_command(key: Key) -> Option<Command> {
    match key {
        Key::Up => Some(Command::MenuUp),
        Key::Down => Some(Command::MenuDown),
        Key::Enter => Some(Command::Confirm),
        Key::P => Some(Command::Pause),
        Key::Escape => Some(Command::Back),
        Key::L => Some(Command::ToggleLanguage),
        Key::W | Key::S | Key::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_is_neutral() {
        let input = sample(&KeyState::new());
        assert_eq!(input, TickInput::default());
    }

    #[test]
    fn test_held_keys_map_to_directions() {
        let keys = KeyState::new().holding(Key::S).holding(Key::Up);
        let input = sample(&keys);
        assert_eq!(input.left_dir, 1);
        assert_eq!(input.right_dir, -1);
    }

    #[test]
    fn test_up_wins_tie() {
        let keys = KeyState::new()
            .holding(Key::W)
            .holding(Key::S)
            .holding(Key::Up)
            .holding(Key::Down);
        let input = sample(&keys);
        assert_eq!(input.left_dir, -1);
        assert_eq!(input.right_dir, -1);
    }

    #[test]
    fn test_presses_map_to_commands_in_order() {
        let keys = KeyState::new()
            .press(Key::Down)
            .press(Key::W)
            .press(Key::Enter)
            .press(Key::L);
        let input = sample(&keys);
        assert_eq!(
            input.commands,
            vec![Command::MenuDown, Command::Confirm, Command::ToggleLanguage]
        );
        assert!(input.any_key);
    }

    #[test]
    fn test_unmapped_press_still_counts_as_any_key() {
        let input = sample(&KeyState::new().press(Key::Other));
        assert!(input.commands.is_empty());
        assert!(input.any_key);
    }

    #[test]
    fn test_quit_comes_first() {
        let keys = KeyState::new().press(Key::P).quitting();
        let input = sample(&keys);
        assert_eq!(input.commands, vec![Command::Quit, Command::Pause]);
    }
}
