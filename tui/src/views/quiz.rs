//! Multiple-choice quiz view.

use crate::{App, AppView};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use wortschatz_core::OPTION_COUNT;

/// State for the quiz screen.
#[derive(Debug, Default)]
pub struct QuizViewState {
    /// Currently hovered option slot.
    pub sel: usize,
}

impl App {
    pub fn draw_quiz(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let theme = self.state.theme;

        // Content dimensions
        let content_width: u16 = 48;
        // score line (1) + blank (1) + prompt (2) + blank (1) + options (4)
        // + blank (1) + feedback (1) + blank (1) + footer (1)
        let content_height: u16 = 13;

        // Center the content
        let [centered_area] = Layout::horizontal([Constraint::Length(content_width + 4)])
            .flex(Flex::Center)
            .areas(area);

        let [centered_area] = Layout::vertical([Constraint::Length(content_height + 4)])
            .flex(Flex::Center)
            .areas(centered_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.card_border))
            .title(Span::styled(" Quiz ", Style::default().fg(theme.secondary)));
        let inner_area = block.inner(centered_area);
        frame.render_widget(block, centered_area);

        let mut lines: Vec<Line> = Vec::new();

        // Score board
        lines.push(Line::from(vec![
            Span::styled("Score ", Style::default().fg(theme.dimmed)),
            Span::styled(
                self.state.score.score.to_string(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Streak ", Style::default().fg(theme.dimmed)),
            Span::styled(
                self.state.score.streak.to_string(),
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));

        let Some(question) = self.state.quiz.question.clone() else {
            // no question drawn yet; the first key will advance
            lines.push(Line::from(Span::styled(
                "Press Enter to start",
                Style::default().fg(theme.dimmed),
            )));
            frame.render_widget(Paragraph::new(lines).centered(), inner_area);
            return;
        };

        // Prompt
        lines.push(Line::from(Span::styled(
            "Which is the German word for",
            Style::default().fg(theme.dimmed),
        )));
        lines.push(Line::from(Span::styled(
            format!("\u{201e}{}\u{201c}?", question.prompt(&self.state.vocabulary)),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        // Options
        let answered = self.state.quiz.answered;
        for slot in 0..question.options.len() {
            let label = question.option_label(&self.state.vocabulary, slot);
            let is_hovered = slot == self.state.quiz_view.sel;

            let (marker, style) = match answered {
                // while the question is open, show the selection cursor
                None => {
                    let style = if is_hovered {
                        Style::default()
                            .fg(theme.primary)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(theme.text)
                    };
                    (if is_hovered { "▸ " } else { "  " }, style)
                }
                // after answering, mark the correct option and the wrong pick
                Some(answer) => {
                    if question.is_correct(slot) {
                        ("✓ ", Style::default().fg(theme.success))
                    } else if slot == answer.selected {
                        ("✗ ", Style::default().fg(theme.error))
                    } else {
                        ("  ", Style::default().fg(theme.dimmed))
                    }
                }
            };

            lines.push(Line::from(Span::styled(
                format!("{}{}. {}", marker, slot + 1, label),
                style,
            )));
        }
        lines.push(Line::from(""));

        // Feedback
        match answered {
            Some(answer) if answer.correct => {
                lines.push(Line::from(Span::styled(
                    "Richtig! (Correct!)",
                    Style::default()
                        .fg(theme.success)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            Some(_) => {
                let correct_german =
                    question.option_label(&self.state.vocabulary, question.correct_slot());
                lines.push(Line::from(Span::styled(
                    format!("Falsch. The correct answer was: {}", correct_german),
                    Style::default().fg(theme.error),
                )));
            }
            None => lines.push(Line::from("")),
        }
        lines.push(Line::from(""));

        // Footer
        if answered.is_some() {
            lines.push(Line::from(vec![
                Span::styled("n", Style::default().fg(theme.primary)),
                Span::styled(" next question · ", Style::default().fg(theme.dimmed)),
                Span::styled("TAB", Style::default().fg(theme.primary)),
                Span::styled(" study · ", Style::default().fg(theme.dimmed)),
                Span::styled("ESC", Style::default().fg(theme.primary)),
                Span::styled(" quit", Style::default().fg(theme.dimmed)),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::styled("↑↓", Style::default().fg(theme.primary)),
                Span::styled(" or ", Style::default().fg(theme.dimmed)),
                Span::styled("1-4", Style::default().fg(theme.primary)),
                Span::styled(" pick · ", Style::default().fg(theme.dimmed)),
                Span::styled("Enter", Style::default().fg(theme.primary)),
                Span::styled(" answer · ", Style::default().fg(theme.dimmed)),
                Span::styled("TAB", Style::default().fg(theme.primary)),
                Span::styled(" study", Style::default().fg(theme.dimmed)),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).centered(), inner_area);
    }

    pub fn handle_quiz_input(&mut self, key: KeyEvent) {
        use crossterm::event::KeyModifiers;

        if key.modifiers == KeyModifiers::CONTROL && matches!(key.code, KeyCode::Char('h')) {
            self.open_overlay(AppView::Help);
            return;
        }

        let answered = self.state.quiz.answered.is_some();
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Tab => self.switch_mode(AppView::Study),
            KeyCode::Char('t') => self.open_theme_select(),
            KeyCode::Up | KeyCode::Char('k') if !answered => {
                if self.state.quiz_view.sel > 0 {
                    self.state.quiz_view.sel -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') if !answered => {
                if self.state.quiz_view.sel < OPTION_COUNT - 1 {
                    self.state.quiz_view.sel += 1;
                }
            }
            KeyCode::Char(c @ '1'..='4') if !answered => {
                let slot = c as usize - '1' as usize;
                self.state.quiz_view.sel = slot;
                self.submit_answer(slot);
            }
            KeyCode::Enter if !answered => {
                if self.state.quiz.question.is_some() {
                    self.submit_answer(self.state.quiz_view.sel);
                } else {
                    self.advance_question();
                }
            }
            KeyCode::Enter | KeyCode::Char('n') if answered => self.advance_question(),
            _ => {}
        }
    }

    /// Evaluate the picked option and persist the new score immediately.
    ///
    /// Re-submissions after the question is locked are dropped by the
    /// engine, so nothing is persisted twice.
    fn submit_answer(&mut self, slot: usize) {
        if self
            .state
            .quiz
            .answer(slot, &mut self.state.score)
            .is_some()
        {
            self.persist();
        }
    }

    fn advance_question(&mut self) {
        self.state.quiz.next_question(&self.state.vocabulary);
        self.state.quiz_view.sel = 0;
    }
}
