//! Main Application
//!
//! The App owns the console state and composes the core components into
//! one cooperative loop:
//!
//! 1. Wait for a terminal event or the loop tick
//! 2. Feed every available key to the input line
//! 3. Dispatch at most one queued command
//! 4. Advance the animation timers
//! 5. Recompute dirty regions and draw if anything changed
//!
//! Rendering is generic over the ratatui backend so tests can drive the
//! whole loop against a `TestBackend`.

use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::{FutureExt, StreamExt};
use ratatui::backend::Backend;
use ratatui::layout::{Position, Rect};
use ratatui::Terminal;

use marquee_core::{
    command_queue, marquee, AnimationScheduler, CommandInterpreter, CommandQueue, CommandSender,
    Dispatched, FrameStore, GlyphStore, InputKey, InputLine, InputOutcome, MarqueeConfig,
    MarqueeExtent, SharedState,
};

use crate::compositor::{Compositor, DirtyRegions, RegionId, ScreenLayout};
use crate::events;
use crate::screens;
use crate::widgets::{self, console_log::LogKind, ConsoleLog};

/// Main application state
pub struct App {
    // === Core State ===
    state: SharedState,
    interpreter: CommandInterpreter,

    // === Input ===
    input: InputLine,
    sender: CommandSender,
    queue: CommandQueue,

    // === Animation ===
    scheduler: AnimationScheduler,
    glyphs: GlyphStore,
    frames: FrameStore,

    // === Rendering ===
    log: ConsoleLog,
    compositor: Compositor,
    dirty: DirtyRegions,
    /// Banner mode the current layout was computed for
    layout_ascii: bool,

    // === Settings ===
    prompt: String,
    loop_tick: Duration,
    farewell_timeout: Duration,
}

impl App {
    /// Build the console for a screen of `area`, loading glyphs and frames
    pub fn new(config: &MarqueeConfig, area: Rect) -> Self {
        let glyphs = GlyphStore::load(config.glyph_dir.clone());
        let frames = FrameStore::load(config.frame_dir.clone(), config.max_frames);
        Self::with_stores(config, area, glyphs, frames)
    }

    /// Build the console around already loaded stores
    pub fn with_stores(
        config: &MarqueeConfig,
        area: Rect,
        glyphs: GlyphStore,
        frames: FrameStore,
    ) -> Self {
        let state = config.initial_state();
        let interpreter = CommandInterpreter::new(config.status_command);
        let input = InputLine::new(config.history_limit, &interpreter.command_names());
        let (sender, queue) = command_queue();

        let layout = ScreenLayout::compute(area, state.ascii_art);
        let mut log = ConsoleLog::new(usize::from(layout.log.height));
        log.push_all(screens::WELCOME_LINES.iter().copied(), LogKind::Notice);

        tracing::info!(
            width = area.width,
            height = area.height,
            frames = frames.len(),
            "Console ready"
        );

        Self {
            layout_ascii: state.ascii_art,
            state,
            interpreter,
            input,
            sender,
            queue,
            scheduler: AnimationScheduler::new(config.frame_interval, Instant::now()),
            glyphs,
            frames,
            log,
            compositor: Compositor::new(layout),
            dirty: DirtyRegions::new(),
            prompt: config.prompt.clone(),
            loop_tick: config.loop_tick,
            farewell_timeout: config.farewell_timeout,
        }
    }

    /// Main event loop; returns after `exit` and the farewell screen
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();
        let frame_tick = self.loop_tick;

        self.render(terminal)?;

        while self.state.running {
            tokio::select! {
                biased;

                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        tracing::warn!("Terminal event stream closed");
                        self.state.running = false;
                    }
                },

                // Frame limiting: the loop never idles longer than one tick
                _ = tokio::time::sleep(frame_tick) => {}
            }

            // Drain everything that is already buffered without waiting
            while let Some(Some(Ok(event))) = event_stream.next().now_or_never() {
                self.handle_event(event);
            }

            self.step(Instant::now());
            self.render(terminal)?;
        }

        self.farewell(terminal, &mut event_stream).await
    }

    /// Route a terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if let Some(key) = events::map_key(key) {
                    self.handle_key(key);
                }
            }
            Event::Resize(width, height) => self.handle_resize(Rect::new(0, 0, width, height)),
            _ => {}
        }
    }

    /// Apply one editing key to the input line
    pub fn handle_key(&mut self, key: InputKey) {
        match self.input.handle_key(key) {
            InputOutcome::Unchanged => {}
            InputOutcome::Edited => self.dirty.mark(RegionId::Input),
            InputOutcome::Submitted(line) => {
                if !self.sender.submit(line) {
                    tracing::warn!("Command queue closed, dropping input");
                }
                self.dirty.mark(RegionId::Input);
            }
            InputOutcome::Cancelled => {
                self.log.push("Input cancelled", LogKind::Notice);
                self.dirty.mark(RegionId::Log);
                self.dirty.mark(RegionId::Input);
            }
            InputOutcome::Completions(names) => {
                self.log
                    .push(format!("Possible commands: {}", names.join("  ")), LogKind::Notice);
                self.dirty.mark(RegionId::Log);
            }
        }
    }

    /// Recompute the layout for a new screen size
    pub fn handle_resize(&mut self, area: Rect) {
        tracing::debug!(width = area.width, height = area.height, "Resize");
        self.relayout(area);
    }

    /// Run one cycle of command dispatch and animation timing
    pub fn step(&mut self, now: Instant) {
        if let Some(dispatched) = self.queue.dispatch_next(&self.interpreter, &mut self.state) {
            self.record(dispatched);
        }

        if self.state.ascii_art != self.layout_ascii {
            self.relayout(self.compositor.layout().area);
        }

        let extent = MarqueeExtent::new(
            marquee::content_len(&self.state, &self.glyphs),
            self.compositor.layout().banner_inner_width(),
        );
        let outcome = self
            .scheduler
            .tick_at(now, &self.state, extent, self.frames.len());

        if outcome.marquee {
            self.dirty.mark(RegionId::Banner);
        }
        if outcome.frame {
            self.dirty.mark(RegionId::Side);
        }
    }

    /// Recompute dirty regions and draw if the screen changed.
    ///
    /// Returns whether a draw happened.
    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<bool> {
        self.compose();
        if !self.compositor.needs_draw() {
            return Ok(false);
        }

        // Cursor stays hidden until draw parks it at the input line
        terminal.hide_cursor()?;
        let compositor = &self.compositor;
        terminal.draw(|frame| {
            compositor.blit(frame.buffer_mut());
            if let Some(cursor) = compositor.cursor() {
                frame.set_cursor_position(cursor);
            }
        })?;

        self.compositor.mark_drawn();
        Ok(true)
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    pub fn log(&self) -> &ConsoleLog {
        &self.log
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    fn record(&mut self, dispatched: Dispatched) {
        let Dispatched { line, response } = dispatched;
        self.log.push(format!("{}{line}", self.prompt), LogKind::Echo);
        if response.clear_log {
            self.log.clear();
        }
        self.log.push_all(response.lines, LogKind::Response);

        self.dirty.mark(RegionId::Log);
        self.dirty.mark(RegionId::Banner);
    }

    fn relayout(&mut self, area: Rect) {
        let layout = ScreenLayout::compute(area, self.state.ascii_art);
        self.layout_ascii = self.state.ascii_art;
        self.compositor.apply_layout(layout);
        self.log.set_capacity(usize::from(layout.log.height));
        self.dirty.mark_all();
    }

    /// Rebuild the rows of every dirty region
    fn compose(&mut self) {
        let layout = *self.compositor.layout();
        for id in self.dirty.take() {
            let rect = layout.rect(id);
            let rows = match id {
                RegionId::Banner => widgets::banner_rows(
                    &self.state,
                    &self.glyphs,
                    self.scheduler.marquee_position(),
                    rect.width,
                ),
                RegionId::Log => self.log.rows(usize::from(rect.width)),
                RegionId::Side => {
                    let frame = self.frames.frame(self.scheduler.frame_index());
                    widgets::animation_rows(frame, rect.width, rect.height)
                }
                RegionId::Input => {
                    let view = widgets::input_row(
                        &self.prompt,
                        self.input.buffer(),
                        self.input.cursor(),
                        rect.width,
                    );
                    let cursor = (rect.height > 0)
                        .then(|| Position::new(rect.x + view.cursor_x, rect.y));
                    self.compositor.set_cursor(cursor);
                    vec![view.row]
                }
            };
            self.compositor.update(id, rows);
        }
    }

    async fn farewell<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        event_stream: &mut EventStream,
    ) -> anyhow::Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            screens::render_farewell(frame.buffer_mut(), area);
        })?;

        let any_key = async {
            while let Some(Ok(event)) = event_stream.next().await {
                if matches!(event, Event::Key(key) if key.kind == KeyEventKind::Press) {
                    break;
                }
            }
        };
        if tokio::time::timeout(self.farewell_timeout, any_key)
            .await
            .is_err()
        {
            tracing::debug!("Farewell timed out");
        }

        Ok(())
    }
}
