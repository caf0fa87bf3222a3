//! Key chords and the chord → action table.

use actions::Action;
use collections::IndexMap;
use settings::KeybindingEntry;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    #[error("empty key chord")]
    Empty,
    #[error("key chord {0:?} has no key")]
    MissingKey(String),
    #[error("unknown modifier {modifier:?} in {chord:?}")]
    UnknownModifier { chord: String, modifier: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Modifier {
    Ctrl,
    Cmd,
    Alt,
    Shift,
}

impl Modifier {
    fn parse(token: &str) -> Option<Modifier> {
        match token {
            "ctrl" | "control" | "ctl" => Some(Modifier::Ctrl),
            "cmd" | "command" | "super" | "meta" | "win" => Some(Modifier::Cmd),
            "alt" | "option" | "opt" => Some(Modifier::Alt),
            "shift" => Some(Modifier::Shift),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Modifier::Ctrl => "ctrl",
            Modifier::Cmd => "cmd",
            Modifier::Alt => "alt",
            Modifier::Shift => "shift",
        }
    }
}

/// A normalized key chord: lowercase, modifiers deduplicated and in
/// canonical order (`ctrl`, `cmd`, `alt`, `shift`), then the key.
///
/// `Cmd+Shift+D`, `shift-command-d` and `cmd-shift-d` are the same chord.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    modifiers: Vec<Modifier>,
    key: String,
}

impl KeyChord {
    pub fn parse(text: &str) -> Result<KeyChord, ChordError> {
        let lowered = text.trim().to_lowercase();
        if lowered.is_empty() {
            return Err(ChordError::Empty);
        }

        // '-' and '+' separate tokens. A separator that stands alone or
        // follows another separator is the key itself.
        let (body, key) = match lowered.char_indices().last() {
            Some((index, last)) if is_separator(last) => {
                let body = &lowered[..index];
                if body.is_empty() || body.ends_with(is_separator) {
                    (body, last.to_string())
                } else {
                    (body, String::new())
                }
            }
            _ => match lowered.rfind(is_separator) {
                Some(index) => (&lowered[..index], lowered[index + 1..].to_string()),
                None => ("", lowered.clone()),
            },
        };
        if key.is_empty() {
            return Err(ChordError::MissingKey(text.to_string()));
        }

        let mut modifiers = Vec::new();
        for token in body.split(is_separator).filter(|token| !token.is_empty()) {
            let modifier = Modifier::parse(token).ok_or_else(|| ChordError::UnknownModifier {
                chord: text.to_string(),
                modifier: token.to_string(),
            })?;
            modifiers.push(modifier);
        }
        modifiers.sort();
        modifiers.dedup();

        Ok(KeyChord {
            modifiers,
            key: normalize_key(&key),
        })
    }

    /// Label for menus: `Cmd+Shift+D`.
    pub fn display_label(&self) -> String {
        self.modifiers
            .iter()
            .map(|modifier| capitalize(modifier.name()))
            .chain(std::iter::once(capitalize(&self.key)))
            .collect::<Vec<_>>()
            .join("+")
    }
}

fn is_separator(c: char) -> bool {
    c == '-' || c == '+'
}

fn normalize_key(key: &str) -> String {
    match key {
        "return" => "enter".to_string(),
        "esc" => "escape".to_string(),
        "arrowleft" => "left".to_string(),
        "arrowright" => "right".to_string(),
        "arrowup" => "up".to_string(),
        "arrowdown" => "down".to_string(),
        other => other.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}-", modifier.name())?;
        }
        f.write_str(&self.key)
    }
}

impl std::str::FromStr for KeyChord {
    type Err = ChordError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        KeyChord::parse(text)
    }
}

/// Chord → action bindings, in the order they were bound.
#[derive(Clone, Debug, Default)]
pub struct Keymap {
    bindings: IndexMap<KeyChord, Action>,
}

impl Keymap {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in bindings for every action.
    pub fn defaults() -> Self {
        let mut keymap = Self::empty();
        for action in Action::ALL {
            for keys in action.default_keys() {
                match KeyChord::parse(keys) {
                    Ok(chord) => {
                        keymap.bind(chord, action);
                    }
                    Err(e) => util::debug_panic!("bad default chord {:?}: {}", keys, e),
                }
            }
        }
        keymap
    }

    /// Defaults plus user bindings; a user chord replaces whatever the chord
    /// was bound to. Unknown actions and unparsable chords are skipped.
    pub fn with_overrides(entries: &[KeybindingEntry]) -> Self {
        let mut keymap = Self::defaults();
        for entry in entries {
            let Some(action) = Action::from_name(&entry.action) else {
                tracing::warn!("Unknown keybinding action: {}", entry.action);
                continue;
            };
            match KeyChord::parse(&entry.keys) {
                Ok(chord) => {
                    if let Some(previous) = keymap.bind(chord.clone(), action) {
                        tracing::debug!("Keybinding {} rebound from {} to {}", chord, previous, action);
                    }
                }
                Err(e) => tracing::warn!("Invalid keybinding {:?}: {}", entry.keys, e),
            }
        }
        keymap
    }

    /// Bind a chord, returning the action it was bound to before.
    pub fn bind(&mut self, chord: KeyChord, action: Action) -> Option<Action> {
        self.bindings.insert(chord, action)
    }

    /// Look up a chord as typed. Unparsable chords match nothing.
    pub fn action_for(&self, chord: &str) -> Option<Action> {
        let chord = KeyChord::parse(chord).ok()?;
        self.bindings.get(&chord).copied()
    }

    /// Chords bound to `action`, earliest bound first.
    pub fn chords_for(&self, action: Action) -> Vec<&KeyChord> {
        self.bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(chord, _)| chord)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
