use crate::{
    profile::{self, Profile},
    theme::Theme,
    views::{quiz::QuizViewState, theme_select::ThemeSelectState},
};
use color_eyre::eyre::Result;
use crossterm::event::EventStream;
use std::time::Duration;
use wortschatz_core::{QuizState, ScoreState, StudyState, Vocabulary, builtin_entries};

#[derive(Default, Clone, Debug, PartialEq)]
pub enum AppView {
    #[default]
    Study,
    Quiz,
    Help,
    ThemeSelect,
}

#[derive(Debug)]
pub struct AppState {
    /// The word list, fixed for the lifetime of the app.
    pub vocabulary: Vocabulary,
    /// Study-mode card cursor.
    pub study: StudyState,
    /// Quiz-mode question/answer state.
    pub quiz: QuizState,
    /// Quiz-mode option cursor.
    pub quiz_view: QuizViewState,
    /// Persistent score and streak.
    pub score: ScoreState,
    /// Which language appears on the flashcard front. The quiz always asks
    /// English-to-German, independent of this flag.
    pub english_front: bool,
    /// Active color theme.
    pub theme: &'static Theme,
    pub theme_select: ThemeSelectState,
}

/// 35 FPS = 1000ms / 35
const FPS_RATE: Duration = Duration::from_millis(1000 / 35);

pub struct App {
    /// Active application view.
    pub view: AppView,
    /// View to return to when leaving an overlay (help, theme select).
    pub previous_view: Option<AppView>,
    /// Application state.
    ///
    /// This is shared among all views.
    pub state: AppState,
    /// Is the application running?
    pub is_running: bool,
    /// Event stream.
    pub event_stream: EventStream,
}

impl App {
    /// Construct a new instance of [`App`] from the stored profile and the
    /// compiled-in word list.
    ///
    /// Fails only when the vocabulary violates its startup invariants.
    pub fn new() -> Result<Self> {
        let stored = profile::load_profile();
        let vocabulary = Vocabulary::new(builtin_entries())?;

        Ok(Self {
            view: AppView::default(),
            previous_view: None,
            is_running: false,
            event_stream: EventStream::new(),
            state: AppState {
                vocabulary,
                study: StudyState::default(),
                quiz: QuizState::default(),
                quiz_view: QuizViewState::default(),
                score: ScoreState::new(stored.score, stored.streak),
                english_front: stored.english_front,
                theme: Theme::by_id(&stored.theme_id),
                theme_select: ThemeSelectState::default(),
            },
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: ratatui::DefaultTerminal) -> Result<()> {
        self.is_running = true;

        // create a ticker for redraws between input events
        let mut interval = tokio::time::interval(FPS_RATE);

        while self.is_running {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                _ = interval.tick() => {
                    // trigger a redraw by looping
                    continue;
                }
                result = self.handle_crossterm_events() => {
                    result?;
                }
            }
        }

        Ok(())
    }

    /// Renders the user interface.
    fn draw(&mut self, frame: &mut ratatui::Frame) {
        match self.view.clone() {
            AppView::Study => self.draw_study(frame),
            AppView::Quiz => self.draw_quiz(frame),
            AppView::Help => self.draw_help(frame),
            AppView::ThemeSelect => self.draw_theme_select(frame),
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    async fn handle_crossterm_events(&mut self) -> Result<()> {
        use crossterm::event::{Event, KeyEventKind, KeyModifiers};
        use futures::{FutureExt, StreamExt};

        let event = self.event_stream.next().fuse().await;
        match event {
            Some(Ok(evt)) => match evt {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    use crossterm::event::KeyCode;

                    // application-wide CTRL+C handler
                    if matches!(
                        (key.modifiers, key.code),
                        (
                            KeyModifiers::CONTROL,
                            KeyCode::Char('c') | KeyCode::Char('C')
                        )
                    ) {
                        self.quit();
                        return Ok(());
                    };

                    match self.view.clone() {
                        AppView::Study => self.handle_study_input(key),
                        AppView::Quiz => self.handle_quiz_input(key),
                        AppView::Help => self.handle_help_input(key),
                        AppView::ThemeSelect => self.handle_theme_select_input(key),
                    }
                }
                Event::Mouse(_) => {} // no mouse events
                Event::Resize(_, _) => {}
                _ => {}
            },
            _ => {}
        }
        Ok(())
    }

    /// Switch between the study and quiz modes.
    ///
    /// Re-selecting the active mode is a no-op. Entering study mode resets
    /// the card cursor to the first card; entering quiz mode draws a fresh
    /// question. Score and preferences are never touched by a switch.
    pub fn switch_mode(&mut self, view: AppView) {
        if self.view == view {
            return;
        }
        match view {
            AppView::Study => self.state.study.reset(),
            AppView::Quiz => {
                self.state.quiz.next_question(&self.state.vocabulary);
                self.state.quiz_view.sel = 0;
            }
            _ => {}
        }
        self.view = view;
    }

    /// Show an overlay view, remembering where to return to.
    pub fn open_overlay(&mut self, view: AppView) {
        self.previous_view = Some(self.view.clone());
        self.view = view;
    }

    /// Write score, streak, and preferences out, best-effort.
    ///
    /// A failed write never blocks in-memory operation.
    pub fn persist(&self) {
        let profile = Profile {
            score: self.state.score.score,
            streak: self.state.score.streak,
            english_front: self.state.english_front,
            theme_id: self.state.theme.id.to_string(),
        };
        let _ = profile::save_profile(&profile);
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.is_running = false;
    }
}
