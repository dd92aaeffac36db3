//! Module selection prompt.
//!
//! A checkbox list rendered with ratatui in an inline viewport under the
//! welcome banner. Submitting with nothing checked keeps the prompt open.

use async_trait::async_trait;
use log::info;
use ratatui::{
    Frame, Terminal, TerminalOptions, Viewport,
    backend::{Backend, CrosstermBackend},
    layout::Position,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io::stdout;

use crate::error::{LauncherError, Result};
use crate::modules::{Module, ModuleSelection};
use crate::terminal::{KeyEvent, KeySource};

pub const PROMPT_MESSAGE: &str = "SYSTEM OFFLINE. Select modules to initialize:";
const HELP: &str = "(Press <space> to select, <a> to toggle all, <i> to invert selection, and <enter> to proceed)";
const EMPTY_ERROR: &str = "You must select at least one module.";

/// Lines the prompt occupies: message, one per module, error line.
pub const PROMPT_HEIGHT: u16 = Module::ALL.len() as u16 + 2;

/// Result of feeding one key to the checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecklistAction {
    Continue,
    Submit(ModuleSelection),
    Abort,
}

/// Checkbox list state.
#[derive(Debug, Clone)]
pub struct Checklist {
    items: Vec<Module>,
    checked: Vec<bool>,
    cursor: usize,
    error: Option<String>,
}

impl Checklist {
    pub fn new(items: Vec<Module>) -> Self {
        let checked = vec![false; items.len()];
        Self {
            items,
            checked,
            cursor: 0,
            error: None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    pub fn move_up(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = self.cursor.checked_sub(1).unwrap_or(self.items.len() - 1);
    }

    pub fn move_down(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.items.len();
    }

    pub fn toggle(&mut self) {
        if let Some(c) = self.checked.get_mut(self.cursor) {
            *c = !*c;
            self.error = None;
        }
    }

    /// Check everything, or clear everything if all are already checked.
    pub fn toggle_all(&mut self) {
        let all = self.checked.iter().all(|&c| c);
        self.checked.iter_mut().for_each(|c| *c = !all);
        self.error = None;
    }

    pub fn invert(&mut self) {
        self.checked.iter_mut().for_each(|c| *c = !*c);
        self.error = None;
    }

    /// Checked modules in list order.
    pub fn selection(&self) -> Result<ModuleSelection> {
        let modules = self
            .items
            .iter()
            .zip(&self.checked)
            .filter(|&(_, &checked)| checked)
            .map(|(&m, _)| m)
            .collect();
        ModuleSelection::new(modules)
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> ChecklistAction {
        if key.is_quit() {
            return ChecklistAction::Abort;
        }
        if key.is_enter() {
            return match self.selection() {
                Ok(selection) => ChecklistAction::Submit(selection),
                Err(_) => {
                    self.error = Some(EMPTY_ERROR.to_string());
                    ChecklistAction::Continue
                }
            };
        }
        if key.is_up() {
            self.move_up();
        } else if key.is_down() {
            self.move_down();
        } else {
            match key.as_char() {
                Some(' ') => self.toggle(),
                Some('a') => self.toggle_all(),
                Some('i') => self.invert(),
                _ => {}
            }
        }
        ChecklistAction::Continue
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new(Module::ALL.to_vec())
    }
}

/// Draw the open prompt.
pub fn render_checklist(frame: &mut Frame, checklist: &Checklist) {
    let mut lines = vec![Line::from(vec![
        Span::styled("? ", Style::default().fg(Color::Green)),
        Span::styled(PROMPT_MESSAGE, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(HELP, Style::default().fg(Color::DarkGray)),
    ])];

    for (i, module) in checklist.items.iter().enumerate() {
        let pointer = if i == checklist.cursor { "❯" } else { " " };
        let (mark, style) = if checklist.is_checked(i) {
            ("◉", Style::default().fg(Color::Green))
        } else {
            ("◯", Style::default())
        };
        let style = if i == checklist.cursor {
            style.fg(Color::Cyan)
        } else {
            style
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{} ", pointer, mark), style),
            Span::styled(module.prompt_label(), style),
        ]));
    }

    if let Some(error) = &checklist.error {
        lines.push(Line::from(Span::styled(
            format!(">> {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(lines), frame.area());
}

/// Draw the answered prompt and park the cursor under it.
pub fn render_answer(frame: &mut Frame, selection: &ModuleSelection) {
    let answer = selection
        .iter()
        .map(|m| m.prompt_label())
        .collect::<Vec<_>>()
        .join(", ");
    let line = Line::from(vec![
        Span::styled("? ", Style::default().fg(Color::Green)),
        Span::styled(PROMPT_MESSAGE, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(answer, Style::default().fg(Color::Cyan)),
    ]);
    let area = frame.area();
    frame.render_widget(Paragraph::new(line), area);
    frame.set_cursor_position(Position::new(0, area.y + 1));
}

/// Asks the user which modules to initialize.
#[async_trait]
pub trait ModuleSelector: Send {
    /// The chosen modules, or `None` if the user quit.
    async fn select(&mut self, keys: &mut dyn KeySource) -> Result<Option<ModuleSelection>>;
}

/// Interactive checklist drawn through a ratatui terminal.
pub struct ChecklistPrompt<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend + Send> ChecklistPrompt<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal
            .draw(render)
            .map_err(|e| LauncherError::Terminal(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl<B: Backend + Send> ModuleSelector for ChecklistPrompt<B> {
    async fn select(&mut self, keys: &mut dyn KeySource) -> Result<Option<ModuleSelection>> {
        let mut checklist = Checklist::default();

        loop {
            self.draw(|f| render_checklist(f, &checklist))?;

            let Some(key) = keys.next_key().await? else {
                return Ok(None);
            };
            match checklist.handle_key(&key) {
                ChecklistAction::Continue => {}
                ChecklistAction::Abort => return Ok(None),
                ChecklistAction::Submit(selection) => {
                    self.terminal
                        .clear()
                        .map_err(|e| LauncherError::Terminal(e.to_string()))?;
                    self.draw(|f| render_answer(f, &selection))?;
                    info!("Modules selected: {}", selection.fragment());
                    return Ok(Some(selection));
                }
            }
        }
    }
}

/// Checklist in an inline viewport opened below the cursor when asked.
///
/// The viewport is reserved at `select` time so it lands under whatever was
/// printed before it.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlinePrompt;

#[async_trait]
impl ModuleSelector for InlinePrompt {
    async fn select(&mut self, keys: &mut dyn KeySource) -> Result<Option<ModuleSelection>> {
        let terminal = Terminal::with_options(
            CrosstermBackend::new(stdout()),
            TerminalOptions {
                viewport: Viewport::Inline(PROMPT_HEIGHT),
            },
        )
        .map_err(|e| LauncherError::Terminal(e.to_string()))?;
        let mut prompt = ChecklistPrompt::new(terminal);
        let selection = prompt.select(keys).await?;
        prompt
            .terminal
            .show_cursor()
            .map_err(|e| LauncherError::Terminal(e.to_string()))?;
        Ok(selection)
    }
}

/// Fixed answer, for non-interactive runs and tests.
pub struct PresetSelector {
    selection: Option<ModuleSelection>,
}

impl PresetSelector {
    pub fn new(selection: Option<ModuleSelection>) -> Self {
        Self { selection }
    }
}

#[async_trait]
impl ModuleSelector for PresetSelector {
    async fn select(&mut self, _keys: &mut dyn KeySource) -> Result<Option<ModuleSelection>> {
        Ok(self.selection.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::ScriptedKeys;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn enter() -> KeyEvent {
        KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
    }

    fn down() -> KeyEvent {
        KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
    }

    fn script(keys: &[KeyEvent]) -> ScriptedKeys {
        ScriptedKeys::new(keys.iter().map(|&k| (Duration::ZERO, k)))
    }

    fn screen(prompt: &ChecklistPrompt<TestBackend>) -> String {
        prompt
            .terminal()
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_empty_submit_is_rejected() {
        let mut list = Checklist::default();
        assert_eq!(list.handle_key(&enter()), ChecklistAction::Continue);
        assert_eq!(list.error(), Some(EMPTY_ERROR));

        list.handle_key(&KeyEvent::space());
        assert_eq!(list.error(), None);
        assert!(matches!(list.handle_key(&enter()), ChecklistAction::Submit(_)));
    }

    #[test]
    fn test_selection_in_list_order() {
        let mut list = Checklist::default();
        // check vhull (index 4) then ai (index 1)
        for _ in 0..4 {
            list.move_down();
        }
        list.toggle();
        list.move_up();
        list.move_up();
        list.move_up();
        list.toggle();

        let selection = list.selection().unwrap();
        assert_eq!(selection.modules(), &[Module::Ai, Module::VHull]);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut list = Checklist::default();
        list.move_up();
        assert_eq!(list.cursor(), Module::ALL.len() - 1);
        list.move_down();
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn test_toggle_all_and_invert() {
        let mut list = Checklist::default();
        list.toggle_all();
        assert_eq!(list.selection().unwrap().len(), Module::ALL.len());
        list.toggle_all();
        assert!(list.selection().is_err());

        list.toggle();
        list.invert();
        let selection = list.selection().unwrap();
        assert_eq!(selection.len(), Module::ALL.len() - 1);
        assert!(!selection.modules().contains(&Module::Import));
    }

    #[test]
    fn test_quit_aborts() {
        let mut list = Checklist::default();
        assert_eq!(list.handle_key(&KeyEvent::interrupt()), ChecklistAction::Abort);
        assert_eq!(list.handle_key(&KeyEvent::char('q')), ChecklistAction::Abort);
    }

    #[tokio::test]
    async fn test_prompt_returns_checked_modules() {
        let terminal = Terminal::new(TestBackend::new(140, PROMPT_HEIGHT)).unwrap();
        let mut prompt = ChecklistPrompt::new(terminal);
        let mut keys = script(&[down(), KeyEvent::space(), down(), down(), KeyEvent::space(), enter()]);

        let selection = prompt.select(&mut keys).await.unwrap().unwrap();

        assert_eq!(selection.modules(), &[Module::Ai, Module::Baffle]);
        let text = screen(&prompt);
        assert!(text.contains(PROMPT_MESSAGE));
        assert!(text.contains("activate AI Predicted Price, activate Baffle Calculator"));
    }

    #[tokio::test]
    async fn test_prompt_shows_error_on_empty_submit() {
        let terminal = Terminal::new(TestBackend::new(140, PROMPT_HEIGHT)).unwrap();
        let mut prompt = ChecklistPrompt::new(terminal);
        let mut keys = script(&[enter()]);

        let selection = prompt.select(&mut keys).await.unwrap();

        // input closed after the rejected submit
        assert_eq!(selection, None);
        assert!(screen(&prompt).contains(EMPTY_ERROR));
    }

    #[tokio::test]
    async fn test_prompt_abort() {
        let terminal = Terminal::new(TestBackend::new(140, PROMPT_HEIGHT)).unwrap();
        let mut prompt = ChecklistPrompt::new(terminal);
        let mut keys = script(&[KeyEvent::space(), KeyEvent::interrupt(), enter()]);

        assert_eq!(prompt.select(&mut keys).await.unwrap(), None);
        assert_eq!(keys.remaining(), 1);
    }

    #[tokio::test]
    async fn test_preset_selector() {
        let selection = ModuleSelection::new(vec![Module::Layout]).unwrap();
        let mut selector = PresetSelector::new(Some(selection.clone()));
        let mut keys = script(&[]);
        assert_eq!(selector.select(&mut keys).await.unwrap(), Some(selection));
    }
}
