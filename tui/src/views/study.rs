//! Flashcard study view.

use crate::{App, AppView};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

impl App {
    pub fn draw_study(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let theme = self.state.theme;
        let card = self
            .state
            .study
            .card(&self.state.vocabulary, self.state.english_front);

        // Content dimensions
        let content_width: u16 = 44;
        // category (1) + blank (1) + face (1) + note (1) + blank (1)
        // + counter (1) + front-language line (1) + blank (1) + footer (2)
        let content_height: u16 = 10;

        // Center the content
        let [centered_area] = Layout::horizontal([Constraint::Length(content_width + 4)])
            .flex(Flex::Center)
            .areas(area);

        let [centered_area] = Layout::vertical([Constraint::Length(content_height + 4)])
            .flex(Flex::Center)
            .areas(centered_area);

        // Draw the card border
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.card_border))
            .title(Span::styled(" Study ", Style::default().fg(theme.secondary)));
        let inner_area = block.inner(centered_area);
        frame.render_widget(block, centered_area);

        let mut lines: Vec<Line> = Vec::new();

        // Category badge
        lines.push(Line::from(Span::styled(
            card.category,
            Style::default().fg(theme.secondary),
        )));
        lines.push(Line::from(""));

        // Visible face
        if self.state.study.flipped {
            lines.push(Line::from(Span::styled(
                card.back,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
        } else {
            lines.push(Line::from(Span::styled(
                card.front,
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )));
            // plural annotation only exists on the German front
            lines.push(Line::from(Span::styled(
                card.plural_note,
                Style::default().fg(theme.dimmed),
            )));
        }
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
            card.counter,
            Style::default().fg(theme.dimmed),
        )));

        let front_language = if self.state.english_front {
            "English"
        } else {
            "German"
        };
        lines.push(Line::from(vec![
            Span::styled("Front: ", Style::default().fg(theme.dimmed)),
            Span::styled(front_language, Style::default().fg(theme.text)),
        ]));
        lines.push(Line::from(""));

        // Footer
        lines.push(Line::from(vec![
            Span::styled("←→", Style::default().fg(theme.primary)),
            Span::styled(" cards · ", Style::default().fg(theme.dimmed)),
            Span::styled("Space", Style::default().fg(theme.primary)),
            Span::styled(" flip · ", Style::default().fg(theme.dimmed)),
            Span::styled("e", Style::default().fg(theme.primary)),
            Span::styled(" language", Style::default().fg(theme.dimmed)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("TAB", Style::default().fg(theme.primary)),
            Span::styled(" quiz · ", Style::default().fg(theme.dimmed)),
            Span::styled("t", Style::default().fg(theme.primary)),
            Span::styled(" theme · ", Style::default().fg(theme.dimmed)),
            Span::styled("^H", Style::default().fg(theme.primary)),
            Span::styled(" help · ", Style::default().fg(theme.dimmed)),
            Span::styled("ESC", Style::default().fg(theme.primary)),
            Span::styled(" quit", Style::default().fg(theme.dimmed)),
        ]));

        frame.render_widget(Paragraph::new(lines).centered(), inner_area);
    }

    pub fn handle_study_input(&mut self, key: KeyEvent) {
        use crossterm::event::KeyModifiers;

        if key.modifiers == KeyModifiers::CONTROL && matches!(key.code, KeyCode::Char('h')) {
            self.open_overlay(AppView::Help);
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Tab => self.switch_mode(AppView::Quiz),
            KeyCode::Left | KeyCode::Char('h') => {
                let len = self.state.vocabulary.len();
                self.state.study.prev(len);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let len = self.state.vocabulary.len();
                self.state.study.next(len);
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.state.study.flip(),
            KeyCode::Char('e') => self.toggle_front_language(),
            KeyCode::Char('t') => self.open_theme_select(),
            _ => {}
        }
    }

    /// Swap which language appears on the card front and persist the choice.
    ///
    /// The card returns to its front face so the newly chosen language is
    /// the one facing up.
    fn toggle_front_language(&mut self) {
        self.state.english_front = !self.state.english_front;
        self.state.study.flipped = false;
        self.persist();
    }
}
