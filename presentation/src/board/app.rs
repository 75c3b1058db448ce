//! Board application — main loop
//!
//! Architecture:
//! ```text
//! BoardApp (select! loop)                effect task (tokio::spawn, one per effect)
//!   ├─ crossterm EventStream               └─ EffectRunner::run(effect)
//!   ├─ effect_rx (RoundEvent results) <────────┘
//!   └─ tick_interval
//! ```
//!
//! Every input becomes a [`RoundEvent`] applied to the [`BoardState`]; the
//! effect it yields runs on its own task so the board keeps drawing while the
//! services answer. The in-flight guard in the round rejects further drops
//! until the validation result comes back.

use super::keys::{KeyHandler, Overlay};
use super::state::{BoardState, HitRegion};
use super::widgets::{
    BoardLayout, game_over::GameOverWidget, header::HeaderWidget, help::HelpWidget,
    message::MessageWidget, number_line::NumberLineLayout, number_line::NumberLineWidget,
    pending_card::PendingCardWidget, status_bar::StatusBarWidget,
};
use crate::config::BoardConfig;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use numline_application::{
    EffectRunner, NoRoundLogger, PlacementOracle, QuestionSource, RoundLogger, records_for,
};
use numline_domain::{DragId, RoundEvent};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, widgets::Clear};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Full-screen board
pub struct BoardApp<S: QuestionSource + 'static, O: PlacementOracle + 'static> {
    runner: EffectRunner<S, O>,
    logger: Arc<dyn RoundLogger>,
    config: BoardConfig,
    effect_tx: mpsc::UnboundedSender<RoundEvent>,
    effect_rx: mpsc::UnboundedReceiver<RoundEvent>,
}

impl<S: QuestionSource + 'static, O: PlacementOracle + 'static> BoardApp<S, O> {
    pub fn new(runner: EffectRunner<S, O>) -> Self {
        let (effect_tx, effect_rx) = mpsc::unbounded_channel();
        Self {
            runner,
            logger: Arc::new(NoRoundLogger),
            config: BoardConfig::default(),
            effect_tx,
            effect_rx,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn RoundLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the board until the player quits
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if self.config.mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Restore the terminal if anything panics while it is in raw mode
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut state = BoardState::new();
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.config.tick);

        info!("Board started");
        self.dispatch(&mut state, RoundEvent::Start);

        loop {
            terminal.draw(|frame| {
                let regions = render(frame, &state);
                state.regions = regions;
            })?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                Some(term_event) = event_stream.next() => match term_event {
                    Ok(term_event) => self.handle_terminal_event(&mut state, term_event),
                    Err(e) => warn!("Terminal event error: {}", e),
                },

                Some(result) = self.effect_rx.recv() => {
                    self.dispatch(&mut state, result);
                }

                // Redraw (resizes, spinner) even when nothing happens
                _ = tick.tick() => {}
            }
        }

        info!(
            "Board closed with score {} (best {})",
            state.round.score(),
            state.round.best_score()
        );
        Ok(())
    }

    /// Apply `event`, log it, and start the effect it produces
    pub fn dispatch(&self, state: &mut BoardState, event: RoundEvent) {
        let effect = state.apply(event.clone());
        for record in records_for(&event, &state.round) {
            self.logger.log(record);
        }

        if let Some(effect) = effect {
            debug!("Spawning effect {}", effect.kind());
            let runner = self.runner.clone();
            let tx = self.effect_tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(runner.run(effect).await);
            });
        }
    }

    /// Translate a terminal event into round events
    pub fn handle_terminal_event(&self, state: &mut BoardState, event: Event) {
        let round_event = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = KeyHandler::handle(state.overlay(), key);
                state.on_action(action)
            }
            Event::Mouse(mouse) if self.config.mouse => state.on_mouse(mouse),
            // Regions are recomputed on the next draw
            Event::Resize(_, _) => None,
            _ => None,
        };

        if let Some(round_event) = round_event {
            self.dispatch(state, round_event);
        }
    }

    /// Wait for the next effect result (used by tests)
    #[cfg(test)]
    async fn next_result(&mut self) -> Option<RoundEvent> {
        self.effect_rx.recv().await
    }
}

/// Draw the board and return the hit regions of this frame
pub fn render(frame: &mut Frame, state: &BoardState) -> Vec<HitRegion> {
    let area = frame.area();
    let layout = BoardLayout::compute(area);
    let focus = state.hover_slot().unwrap_or(state.selected);
    let line_layout = NumberLineLayout::compute(state.round.line(), layout.line, focus);

    frame.render_widget(HeaderWidget::new(state), layout.header);
    frame.render_widget(PendingCardWidget::new(state), layout.pending);
    frame.render_widget(NumberLineWidget::new(state, &line_layout), layout.line);
    frame.render_widget(MessageWidget::new(state), layout.message);
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

    match state.overlay() {
        Overlay::Help => {
            let help_area = BoardLayout::centered_overlay(70, 70, area);
            frame.render_widget(Clear, help_area);
            frame.render_widget(HelpWidget::new(), help_area);
        }
        Overlay::GameOver => {
            if let Some(summary) = state.round.game_over() {
                let modal_area = BoardLayout::centered_overlay(60, 50, area);
                frame.render_widget(Clear, modal_area);
                frame.render_widget(
                    GameOverWidget::new(summary, state.round.best_score()),
                    modal_area,
                );
            }
        }
        Overlay::Board => {}
    }

    let mut regions = Vec::new();
    if let Some(id) = state.round.pending().map(|q| q.id) {
        regions.push(HitRegion::new(layout.pending, DragId::Pending(id)));
    }
    regions.extend(line_layout.hit_regions(state.round.line()));
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CountingQuestions, QueuedOracle, runner};
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use numline_application::ServiceError;
    use numline_domain::{PlacementVerdict, QuestionId};
    use ratatui::backend::TestBackend;

    fn app(oracle: QueuedOracle) -> BoardApp<CountingQuestions, QueuedOracle> {
        BoardApp::new(runner(oracle))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Feed effect results back until the round is idle
    async fn settle(
        app: &mut BoardApp<CountingQuestions, QueuedOracle>,
        state: &mut BoardState,
    ) {
        while state.round.is_loading() || state.round.is_validating() {
            let result = app.next_result().await.unwrap();
            app.dispatch(state, result);
        }
    }

    fn draw(state: &mut BoardState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let regions = render(frame, state);
                state.regions = regions;
            })
            .unwrap();
        terminal
    }

    #[tokio::test]
    async fn test_start_loads_question_through_effect_task() {
        let mut app = app(QueuedOracle::default());
        let mut state = BoardState::new();

        app.dispatch(&mut state, RoundEvent::Start);
        assert!(state.round.is_loading());

        settle(&mut app, &mut state).await;
        assert_eq!(state.round.pending().map(|q| q.id), Some(QuestionId::new(1)));
    }

    #[tokio::test]
    async fn test_enter_places_card_and_fetches_next() {
        let mut app = app(QueuedOracle::default());
        let mut state = BoardState::new();
        app.dispatch(&mut state, RoundEvent::Start);
        settle(&mut app, &mut state).await;

        app.handle_terminal_event(&mut state, key(KeyCode::Enter));
        assert!(state.round.is_validating());

        // A second drop while validating is ignored
        app.handle_terminal_event(&mut state, key(KeyCode::Enter));

        settle(&mut app, &mut state).await;
        assert_eq!(state.round.score(), 1);
        assert_eq!(state.round.line().len(), 1);
        assert_eq!(state.round.pending().map(|q| q.id), Some(QuestionId::new(2)));
    }

    #[tokio::test]
    async fn test_wrong_placement_shows_game_over_until_new_game() {
        let mut app = app(QueuedOracle::new(vec![Ok(PlacementVerdict::incorrect())]));
        let mut state = BoardState::new();
        app.dispatch(&mut state, RoundEvent::Start);
        settle(&mut app, &mut state).await;

        app.handle_terminal_event(&mut state, key(KeyCode::Enter));
        settle(&mut app, &mut state).await;
        assert_eq!(state.overlay(), Overlay::GameOver);

        let terminal = draw(&mut state);
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Wrong placement!"));

        app.handle_terminal_event(&mut state, key(KeyCode::Char('n')));
        assert_eq!(state.overlay(), Overlay::Board);
        assert!(state.round.message().is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_card_on_board() {
        let mut app = app(QueuedOracle::new(vec![Err(ServiceError::Timeout)]));
        let mut state = BoardState::new();
        app.dispatch(&mut state, RoundEvent::Start);
        settle(&mut app, &mut state).await;

        app.handle_terminal_event(&mut state, key(KeyCode::Enter));
        settle(&mut app, &mut state).await;

        assert_eq!(state.round.pending().map(|q| q.id), Some(QuestionId::new(1)));
        assert!(state.round.line().is_empty());
        assert_eq!(
            state.round.message(),
            Some("Could not validate placement: Request timed out")
        );
    }

    #[tokio::test]
    async fn test_render_records_card_and_slot_regions() {
        let mut app = app(QueuedOracle::default());
        let mut state = BoardState::new();
        app.dispatch(&mut state, RoundEvent::Start);
        settle(&mut app, &mut state).await;

        draw(&mut state);
        let targets: Vec<DragId> = state.regions.iter().map(|r| r.target).collect();
        assert_eq!(
            targets,
            vec![DragId::Pending(QuestionId::new(1)), DragId::Slot(0)]
        );
        // Pending card sits below the 3-row header
        assert_eq!(state.regions[0].area.y, 3);
    }

    #[tokio::test]
    async fn test_mouse_drag_from_card_to_slot_validates() {
        let mut app = app(QueuedOracle::default());
        let mut state = BoardState::new();
        app.dispatch(&mut state, RoundEvent::Start);
        settle(&mut app, &mut state).await;
        draw(&mut state);

        let card = state.regions[0].area;
        let slot = state.regions[1].area;
        app.handle_terminal_event(
            &mut state,
            mouse(MouseEventKind::Down(MouseButton::Left), card.x + 2, card.y + 1),
        );
        app.handle_terminal_event(
            &mut state,
            mouse(MouseEventKind::Drag(MouseButton::Left), slot.x + 2, slot.y),
        );
        assert_eq!(state.hover_slot(), Some(0));

        app.handle_terminal_event(
            &mut state,
            mouse(MouseEventKind::Up(MouseButton::Left), slot.x + 2, slot.y),
        );
        assert!(state.round.is_validating());

        settle(&mut app, &mut state).await;
        assert_eq!(state.round.line().len(), 1);
    }

    #[tokio::test]
    async fn test_mouse_ignored_when_disabled() {
        let mut app = app(QueuedOracle::default()).with_config(BoardConfig {
            mouse: false,
            ..BoardConfig::default()
        });
        let mut state = BoardState::new();
        app.dispatch(&mut state, RoundEvent::Start);
        settle(&mut app, &mut state).await;
        draw(&mut state);

        let card = state.regions[0].area;
        app.handle_terminal_event(
            &mut state,
            mouse(MouseEventKind::Down(MouseButton::Left), card.x + 2, card.y + 1),
        );
        assert!(!state.is_dragging());
    }
}
