//! Single-line city search input
//!
//! Every keystroke emits `SearchQueryChange` (which the reducer turns into
//! a debounced lookup); Enter emits `SearchQuerySubmit` (immediate lookup).
//! Cursor movement is UTF-8 aware.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::event::EventKind;
use crate::theme::Palette;

pub const PLACEHOLDER: &str = "Enter city name";

pub struct SearchBarProps<'a> {
    /// Current input value (owned by `AppState::query`).
    pub value: &'a str,
    pub is_focused: bool,
    pub palette: Palette,
}

/// A single-line text input with cursor.
///
/// The cursor is a char index, not a byte index, so it doubles as the
/// screen column and can never land inside a multi-byte character.
#[derive(Default)]
pub struct SearchBar {
    cursor: usize,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.chars().count());
    }

    /// Byte offset of the cursor's char position.
    fn byte_index(&self, value: &str) -> usize {
        value
            .char_indices()
            .nth(self.cursor)
            .map_or(value.len(), |(i, _)| i)
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = value.to_string();
        new_value.insert(self.byte_index(value), c);
        self.cursor += 1;
        new_value
    }

    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        let mut new_value = value.to_string();
        new_value.remove(self.byte_index(value));
        Some(new_value)
    }

    fn delete_char_at(&self, value: &str) -> Option<String> {
        if self.cursor >= value.chars().count() {
            return None;
        }
        let mut new_value = value.to_string();
        new_value.remove(self.byte_index(value));
        Some(new_value)
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        self.clamp_cursor(props.value);

        let EventKind::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = props.value.chars().count();
                    None
                }
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some(Action::SearchQueryChange(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let new_value = self.insert_char(props.value, c);
                Some(Action::SearchQueryChange(new_value))
            }
            KeyCode::Backspace => self
                .delete_char_before(props.value)
                .map(Action::SearchQueryChange),
            KeyCode::Delete => self
                .delete_char_at(props.value)
                .map(Action::SearchQueryChange),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(props.value.chars().count());
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.chars().count();
                None
            }
            KeyCode::Enter => Some(Action::SearchQuerySubmit(props.value.to_string())),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);
        let palette = props.palette;

        let display_text = if props.value.is_empty() {
            PLACEHOLDER
        } else {
            props.value
        };

        let text_style = if props.value.is_empty() {
            Style::default().fg(palette.muted)
        } else {
            Style::default().fg(palette.fg)
        };

        let border_style = if props.is_focused {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.muted)
        };

        let paragraph = Paragraph::new(display_text)
            .style(text_style.bg(palette.panel_bg))
            .block(Block::default().borders(Borders::ALL).border_style(border_style));

        frame.render_widget(paragraph, area);

        if props.is_focused {
            let cursor_x = area.x + 1 + self.cursor as u16;
            let cursor_y = area.y + 1;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position((cursor_x, cursor_y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RenderHarness, char_key, key};
    use crate::theme::Theme;

    fn props(value: &str) -> SearchBarProps<'_> {
        SearchBarProps {
            value,
            is_focused: true,
            palette: Theme::Light.palette(),
        }
    }

    fn actions(bar: &mut SearchBar, event: &EventKind, value: &str) -> Vec<Action> {
        bar.handle_event(event, props(value)).into_iter().collect()
    }

    #[test]
    fn typing_emits_query_change() {
        let mut bar = SearchBar::new();
        let emitted = actions(&mut bar, &EventKind::Key(char_key('K')), "");
        assert_eq!(emitted, vec![Action::SearchQueryChange("K".into())]);
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut bar = SearchBar::new();
        bar.cursor = 2;
        let emitted = actions(&mut bar, &EventKind::Key(char_key('t')), "Ka");
        assert_eq!(emitted, vec![Action::SearchQueryChange("Kat".into())]);
    }

    #[test]
    fn backspace_removes_char_before_cursor() {
        let mut bar = SearchBar::new();
        bar.cursor = 4;
        let emitted = actions(&mut bar, &EventKind::Key(key("backspace")), "Kath");
        assert_eq!(emitted, vec![Action::SearchQueryChange("Kat".into())]);
        assert_eq!(bar.cursor, 3);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut bar = SearchBar::new();
        bar.cursor = 0;
        let emitted = actions(&mut bar, &EventKind::Key(key("backspace")), "Kath");
        assert!(emitted.is_empty());
    }

    #[test]
    fn enter_submits_current_value() {
        let mut bar = SearchBar::new();
        let emitted = actions(&mut bar, &EventKind::Key(key("enter")), "Kathmandu");
        assert_eq!(
            emitted,
            vec![Action::SearchQuerySubmit("Kathmandu".into())]
        );
    }

    #[test]
    fn unfocused_input_ignores_events() {
        let mut bar = SearchBar::new();
        let emitted: Vec<Action> = bar
            .handle_event(
                &EventKind::Key(char_key('a')),
                SearchBarProps {
                    value: "",
                    is_focused: false,
                    palette: Theme::Light.palette(),
                },
            )
            .into_iter()
            .collect();
        assert!(emitted.is_empty());
    }

    #[test]
    fn devanagari_backspace_stays_on_char_boundary() {
        let mut bar = SearchBar::new();
        let value = "काठ";
        bar.cursor = value.chars().count();
        let emitted = actions(&mut bar, &EventKind::Key(key("backspace")), value);
        assert_eq!(emitted, vec![Action::SearchQueryChange("का".into())]);
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let mut render = RenderHarness::new(30, 3);
        let mut bar = SearchBar::new();

        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props(""));
        });
        assert!(output.contains(PLACEHOLDER));
    }

    #[test]
    fn renders_value() {
        let mut render = RenderHarness::new(30, 3);
        let mut bar = SearchBar::new();

        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props("Pokhara"));
        });
        assert!(output.contains("Pokhara"));
    }
}
