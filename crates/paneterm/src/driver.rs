//! Line-oriented front end over one workspace session.

use actions::Action;
use anyhow::{bail, Context, Result};
use pane_layout::{dividers, pane_rects, LayoutState, PaneId, Rect, SessionId};
use paneterm_workspace::{CommandPalette, TerminalTransport, Workspace};
use settings::constants::driver;
use settings::Config;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Action(Action),
    Key(String),
    /// Pane numbers are 1-based, in traversal order.
    Resize { pane: usize, delta: f32 },
    Focus(usize),
    Tab(usize),
    Show,
    Json,
    Panes,
    Help(String),
    Save(PathBuf),
    Load(PathBuf),
    Quit,
}

const USAGE: &[(&str, &str)] = &[
    ("<action>", "run an action on the focused pane"),
    ("key <chord>", "press a key chord"),
    ("resize <n> <delta>", "grow pane n by delta percent"),
    ("focus <n>", "focus pane n"),
    ("tab <n>", "activate tab n of the focused pane"),
    ("show", "print the layout"),
    ("json", "print the layout snapshot"),
    ("panes", "print pane and divider geometry"),
    ("help [query]", "list actions matching query"),
    ("save <path>", "write the snapshot to a file"),
    ("load <path>", "replace the layout with a saved snapshot"),
    ("quit", "exit"),
];

impl Command {
    /// Blank lines and `#` comments parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "key" => Command::Key(required(rest, "key <chord>")?.to_string()),
            "resize" => {
                let mut args = rest.split_whitespace();
                let (Some(pane), Some(delta), None) = (args.next(), args.next(), args.next())
                else {
                    bail!("usage: resize <n> <delta>");
                };
                Command::Resize {
                    pane: parse_index(pane)?,
                    delta: delta
                        .parse()
                        .with_context(|| format!("invalid delta {delta:?}"))?,
                }
            }
            "focus" => Command::Focus(parse_index(required(rest, "focus <n>")?)?),
            "tab" => Command::Tab(parse_index(required(rest, "tab <n>")?)?),
            "show" => Command::Show,
            "json" => Command::Json,
            "panes" => Command::Panes,
            "help" => Command::Help(rest.to_string()),
            "save" => Command::Save(PathBuf::from(required(rest, "save <path>")?)),
            "load" => Command::Load(PathBuf::from(required(rest, "load <path>")?)),
            "quit" | "exit" => Command::Quit,
            other => match Action::from_name(other) {
                Some(action) if rest.is_empty() => Command::Action(action),
                Some(action) => bail!("{action} takes no arguments"),
                None => bail!("unknown command {other:?}, try `help`"),
            },
        };
        Ok(Some(command))
    }
}

fn required<'a>(rest: &'a str, usage: &str) -> Result<&'a str> {
    if rest.is_empty() {
        bail!("usage: {usage}");
    }
    Ok(rest)
}

fn parse_index(text: &str) -> Result<usize> {
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => bail!("expected a number from 1 up, got {text:?}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

pub struct Driver {
    workspace: Workspace,
    session: SessionId,
    palette: CommandPalette,
}

impl Driver {
    pub fn new(config: &Config, transport: Box<dyn TerminalTransport>) -> Self {
        let mut workspace = Workspace::from_config(config, transport);
        let session = workspace.open_session();
        let palette = CommandPalette::new(workspace.keymap());
        Self {
            workspace,
            session,
            palette,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn run_line(&mut self, line: &str, out: &mut impl Write) -> Result<Outcome> {
        match Command::parse(line)? {
            Some(command) => self.execute(command, out),
            None => Ok(Outcome::Continue),
        }
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Outcome> {
        let id = self.session;
        match command {
            Command::Action(action) => {
                self.workspace.dispatch(id, action)?;
                self.show(out)?;
            }
            Command::Key(chord) => match self.workspace.handle_key(id, &chord)? {
                Some(action) => {
                    writeln!(out, "{} ({})", action.label(), chord)?;
                    self.show(out)?;
                }
                None => writeln!(out, "{chord:?} is not bound")?,
            },
            Command::Resize { pane, delta } => {
                let pane = self.pane(pane)?;
                let applied = self.workspace.resize_siblings(id, pane.into(), delta)?;
                writeln!(out, "resized by {applied:.1}%")?;
                self.show(out)?;
            }
            Command::Focus(pane) => {
                let pane = self.pane(pane)?;
                self.workspace.focus_pane(id, pane)?;
                self.show(out)?;
            }
            Command::Tab(n) => {
                let pane = self.workspace.active_pane(id)?;
                let tab = self
                    .workspace
                    .tree(id)?
                    .find_pane(pane)
                    .and_then(|pane| pane.tabs.get(n.checked_sub(1)?))
                    .map(|tab| tab.id);
                let Some(tab) = tab else {
                    bail!("focused pane has no tab {n}");
                };
                self.workspace.set_active_tab(id, pane, tab)?;
                self.show(out)?;
            }
            Command::Show => self.show(out)?,
            Command::Json => {
                let json = serde_json::to_string_pretty(self.workspace.state(id)?)?;
                writeln!(out, "{json}")?;
            }
            Command::Panes => self.panes(out)?,
            Command::Help(query) => self.help(&query, out)?,
            Command::Save(path) => {
                self.save(&path)?;
                writeln!(out, "saved to {}", path.display())?;
            }
            Command::Load(path) => {
                self.load(&path)?;
                self.show(out)?;
            }
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Continue)
    }

    /// Focused pane, then the outline.
    pub fn show(&self, out: &mut impl Write) -> Result<()> {
        let state = self.workspace.state(self.session)?;
        writeln!(out, "focus: pane {}", state.active_pane.short())?;
        write!(out, "{}", state.tree)?;
        Ok(())
    }

    fn pane(&self, n: usize) -> Result<PaneId> {
        let panes = self.workspace.tree(self.session)?.pane_ids();
        match n.checked_sub(1).and_then(|index| panes.get(index)) {
            Some(pane) => Ok(*pane),
            None => bail!("no pane {n}, layout has {}", panes.len()),
        }
    }

    fn panes(&self, out: &mut impl Write) -> Result<()> {
        let state = self.workspace.state(self.session)?;
        let screen = Rect::new(0.0, 0.0, driver::SCREEN_COLUMNS, driver::SCREEN_ROWS);

        for (index, (pane, rect)) in pane_rects(&state.tree, screen).into_iter().enumerate() {
            let marker = if pane == state.active_pane { " *" } else { "" };
            writeln!(
                out,
                "{}. pane {} {:.0}x{:.0} at ({:.0}, {:.0}){}",
                index + 1,
                pane.short(),
                rect.width,
                rect.height,
                rect.x,
                rect.y,
                marker
            )?;
        }
        for divider in dividers(&state.tree, screen, driver::DIVIDER_THICKNESS) {
            writeln!(
                out,
                "divider after {} ({}) at ({:.1}, {:.1})",
                divider.node,
                divider.direction.label(),
                divider.rect.x,
                divider.rect.y
            )?;
        }
        Ok(())
    }

    fn help(&self, query: &str, out: &mut impl Write) -> Result<()> {
        if query.is_empty() {
            for (usage, summary) in USAGE {
                writeln!(out, "{usage:<20} {summary}")?;
            }
            writeln!(out)?;
        }
        let matches = self.palette.filter(query);
        if matches.is_empty() {
            writeln!(out, "no action matches {query:?}")?;
        }
        for entry in matches {
            writeln!(
                out,
                "{:<20} {:<20} {}",
                entry.action.name(),
                entry.label,
                entry.shortcut
            )?;
        }
        Ok(())
    }

    fn save(&self, path: &Path) -> Result<()> {
        let snapshot = self.workspace.snapshot(self.session)?;
        let json = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write layout to {}", path.display()))?;
        tracing::info!("Saved layout to {:?}", path);
        Ok(())
    }

    /// Swap the session for one restored from `path`. The current layout is
    /// only dropped once the file is known to hold a valid layout.
    fn load(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout from {}", path.display()))?;
        let snapshot: LayoutState = serde_json::from_str(&text)
            .with_context(|| format!("Invalid layout file {}", path.display()))?;
        let snapshot = LayoutState::from_parts(snapshot.tree, snapshot.active_pane)
            .with_context(|| format!("Invalid layout file {}", path.display()))?;

        self.workspace.end_session(self.session)?;
        match self.workspace.restore_session(snapshot) {
            Ok(id) => {
                self.session = id;
                tracing::info!("Loaded layout from {:?}", path);
                Ok(())
            }
            Err(e) => {
                self.session = self.workspace.open_session();
                Err(e.into())
            }
        }
    }
}
