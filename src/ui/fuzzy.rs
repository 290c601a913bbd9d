use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{List, ListItem, ListState, Paragraph},
};
use std::io;

use super::{PickError, Picker};

/// Full-screen list with filter-as-you-type narrowing. Typing keeps only
/// the options whose characters contain the typed ones in order; Enter
/// accepts the highlighted option, Esc or Ctrl+C cancels.
pub struct FuzzyPicker;

impl Picker for FuzzyPicker {
    fn pick(&self, label: &str, options: &[String]) -> Result<usize, PickError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = Self::run(&mut terminal, label, options);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }
}

impl FuzzyPicker {
    fn run<B: Backend>(
        terminal: &mut Terminal<B>,
        label: &str,
        options: &[String],
    ) -> Result<usize, PickError> {
        let mut filter = String::new();
        let mut filtered = refilter(options, &filter);
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        loop {
            terminal.draw(|f| Self::ui(f, label, &filter, options, &filtered, &mut list_state))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Err(PickError::Cancelled);
                    }
                    KeyCode::Esc => return Err(PickError::Cancelled),
                    KeyCode::Enter => {
                        if let Some(selected) = list_state.selected() {
                            if let Some(&index) = filtered.get(selected) {
                                return Ok(index);
                            }
                        }
                    }
                    KeyCode::Up => {
                        let selected = list_state.selected().unwrap_or(0);
                        list_state.select(Some(selected.saturating_sub(1)));
                    }
                    KeyCode::Down => {
                        let selected = list_state.selected().unwrap_or(0);
                        if selected + 1 < filtered.len() {
                            list_state.select(Some(selected + 1));
                        }
                    }
                    KeyCode::Backspace => {
                        filter.pop();
                        filtered = refilter(options, &filter);
                        list_state.select(Some(0));
                    }
                    KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        filter.push(ch);
                        filtered = refilter(options, &filter);
                        list_state.select(Some(0));
                    }
                    _ => {}
                }
            }
        }
    }

    fn ui(
        f: &mut Frame,
        label: &str,
        filter: &str,
        options: &[String],
        filtered: &[usize],
        list_state: &mut ListState,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Label and filter input
                Constraint::Min(1),    // Option list
                Constraint::Length(1), // Key hints
            ])
            .split(f.area());

        let prompt = Paragraph::new(format!("{}: {}", label, filter))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        f.render_widget(prompt, chunks[0]);

        let items: Vec<ListItem> = filtered
            .iter()
            .map(|&i| ListItem::new(options[i].as_str()))
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[1], list_state);

        let hints = Paragraph::new("type to filter | ↑/↓ move | Enter select | Esc cancel")
            .style(Style::default().fg(Color::Gray));
        f.render_widget(hints, chunks[2]);
    }
}

/// Indices of the options matching the filter, in their original order.
fn refilter(options: &[String], filter: &str) -> Vec<usize> {
    (0..options.len())
        .filter(|&i| fuzzy_match(filter, &options[i]))
        .collect()
}

/// Case-insensitive subsequence match: every pattern character must appear
/// in the text, in order, with anything in between.
fn fuzzy_match(pattern: &str, text: &str) -> bool {
    let mut text_chars = text.chars().flat_map(char::to_lowercase);
    pattern
        .chars()
        .flat_map(char::to_lowercase)
        .all(|p| text_chars.any(|t| t == p))
}
