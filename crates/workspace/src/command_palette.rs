//! Command palette model with fuzzy search over paneterm actions.

use crate::keymap::Keymap;
use actions::Action;

/// A single entry in the command palette.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandEntry {
    pub action: Action,
    pub label: &'static str,
    /// Primary chord in menu style ("Cmd+Shift+D"), empty when unbound.
    pub shortcut: String,
}

pub struct CommandPalette {
    entries: Vec<CommandEntry>,
}

impl CommandPalette {
    /// One entry per action, showing the first chord `keymap` binds to it.
    pub fn new(keymap: &Keymap) -> Self {
        let entries = Action::ALL
            .into_iter()
            .map(|action| CommandEntry {
                action,
                label: action.label(),
                shortcut: keymap
                    .chords_for(action)
                    .first()
                    .map(|chord| chord.display_label())
                    .unwrap_or_default(),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Entries whose label fuzzily matches `query`, best match first.
    /// Ties keep palette order; an empty query returns everything.
    pub fn filter(&self, query: &str) -> Vec<&CommandEntry> {
        let mut scored: Vec<(&CommandEntry, u32)> = self
            .entries
            .iter()
            .filter_map(|entry| fuzzy_score(query, entry.label).map(|score| (entry, score)))
            .collect();

        scored.sort_by_key(|&(_, score)| score);
        scored.into_iter().map(|(entry, _)| entry).collect()
    }
}

/// Score a fuzzy match -- lower is better. Returns None if no match.
/// Prefers matches at word boundaries and consecutive characters.
fn fuzzy_score(query: &str, target: &str) -> Option<u32> {
    let query: Vec<char> = query
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect();
    if query.is_empty() {
        return Some(0);
    }

    let mut query_idx = 0;
    let mut score: u32 = 0;
    let mut last_match_pos: Option<usize> = None;
    let mut previous: Option<char> = None;

    for (target_idx, target_char) in target.chars().enumerate() {
        let at_word_start = previous.map_or(true, |c| c == ' ');
        previous = Some(target_char);
        if query_idx == query.len() {
            break;
        }
        if !target_char.to_lowercase().eq(std::iter::once(query[query_idx])) {
            continue;
        }

        if !at_word_start {
            score += 1;
        }
        if let Some(last) = last_match_pos {
            score += (target_idx - last - 1) as u32;
        }
        last_match_pos = Some(target_idx);
        query_idx += 1;
    }

    (query_idx == query.len()).then_some(score)
}
