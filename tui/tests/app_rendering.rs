//! Integration tests for the console loop against a `TestBackend`
//!
//! These drive `App` the way the run loop does (keys, `step`, `render`)
//! without a real terminal.

use std::io;
use std::time::{Duration, Instant};

use marquee_core::{FrameStore, GlyphStore, InputKey, MarqueeConfig};
use marquee_tui::App;
use pretty_assertions::assert_eq;
use ratatui::backend::{Backend, ClearType, TestBackend, WindowSize};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Rect, Size};
use ratatui::Terminal;
use tempfile::TempDir;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

struct Harness {
    app: App,
    terminal: Terminal<TestBackend>,
    _data: TempDir,
}

/// App over a temporary data directory holding `frames`
fn build_app(frames: &[&str], width: u16, height: u16) -> (App, TempDir) {
    let data = TempDir::new().unwrap();
    let frame_dir = data.path().join("frames");
    std::fs::create_dir_all(&frame_dir).unwrap();
    for (i, frame) in frames.iter().enumerate() {
        std::fs::write(FrameStore::frame_path(&frame_dir, i + 1), frame).unwrap();
    }

    let mut config = MarqueeConfig::new();
    config.set_data_dir(data.path());
    config.status_command = false;

    let glyphs = GlyphStore::load(config.glyph_dir.clone());
    let frames = FrameStore::load(config.frame_dir.clone(), config.max_frames);
    let app = App::with_stores(&config, Rect::new(0, 0, width, height), glyphs, frames);
    (app, data)
}

impl Harness {
    fn new() -> Self {
        Self::with_frames(&[])
    }

    fn with_frames(frames: &[&str]) -> Self {
        let (app, data) = build_app(frames, WIDTH, HEIGHT);
        let terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();

        Self {
            app,
            terminal,
            _data: data,
        }
    }

    fn type_line(&mut self, line: &str) {
        for c in line.chars() {
            self.app.handle_key(InputKey::Char(c));
        }
        self.app.handle_key(InputKey::Enter);
    }

    fn render(&mut self) -> bool {
        self.app.render(&mut self.terminal).unwrap()
    }

    fn row(&self, y: u16) -> String {
        let buf = self.terminal.backend().buffer();
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn screen(&self) -> String {
        (0..HEIGHT).map(|y| self.row(y)).collect::<Vec<_>>().join("\n")
    }

    fn log_texts(&self) -> Vec<String> {
        self.app.log().texts().map(str::to_string).collect()
    }
}

#[test]
fn test_first_render_shows_welcome_and_prompt() {
    let mut h = Harness::new();
    assert!(h.render());

    let screen = h.screen();
    assert!(screen.contains("Welcome to the Marquee Console"));
    assert!(screen.contains("Type 'help' for available commands"));
    assert!(h.row(HEIGHT - 1).starts_with("marquee> "));
    assert!(h.row(0).starts_with("+===="));
    assert!(screen.contains("No animation loaded"));
}

#[test]
fn test_unchanged_screen_is_not_redrawn() {
    let mut h = Harness::new();
    assert!(h.render());
    assert!(!h.render());

    h.app.step(Instant::now());
    assert!(!h.render());
}

#[test]
fn test_typing_redraws_input_only() {
    let mut h = Harness::new();
    h.render();

    h.app.handle_key(InputKey::Char('h'));
    assert!(h.render());
    assert_eq!(h.row(HEIGHT - 1).trim_end(), "marquee> h");

    let cursor = h.terminal.get_cursor_position().unwrap();
    assert_eq!((cursor.x, cursor.y), (10, HEIGHT - 1));
}

#[test]
fn test_submitted_command_is_echoed_with_response() {
    let mut h = Harness::new();
    h.type_line("set_text hello");
    h.app.step(Instant::now());

    assert_eq!(h.app.state().marquee_text, "hello");
    let log = h.log_texts();
    assert!(log.contains(&"marquee> set_text hello".to_string()));
    assert!(log.contains(&"Marquee text set to \"hello\".".to_string()));

    h.render();
    assert!(h.row(1).contains("hello"));
    assert_eq!(h.app.input().buffer(), "");
}

#[test]
fn test_one_command_per_step() {
    let mut h = Harness::new();
    h.type_line("set_speed 50");
    h.type_line("set_text second");

    h.app.step(Instant::now());
    assert_eq!(h.app.state().speed_ms(), 50);
    assert_ne!(h.app.state().marquee_text, "second");

    h.app.step(Instant::now());
    assert_eq!(h.app.state().marquee_text, "second");
}

#[test]
fn test_clear_empties_the_log() {
    let mut h = Harness::new();
    h.type_line("help");
    h.app.step(Instant::now());
    assert!(h.log_texts().len() > 2);

    h.type_line("clear");
    h.app.step(Instant::now());
    assert!(h.app.log().is_empty());

    h.render();
    assert!(!h.screen().contains("Type 'help'"));
}

#[test]
fn test_unknown_command_reports_error() {
    let mut h = Harness::new();
    h.type_line("dance");
    h.app.step(Instant::now());
    assert_eq!(
        h.log_texts().last().map(String::as_str),
        Some("Error: Unknown command 'dance'.")
    );
}

#[test]
fn test_exit_stops_and_drops_pending_commands() {
    let mut h = Harness::new();
    h.type_line("exit");
    h.type_line("set_text never");

    h.app.step(Instant::now());
    assert!(!h.app.is_running());
    assert_eq!(h.log_texts().last().map(String::as_str), Some("Exiting program."));

    h.app.step(Instant::now());
    assert_ne!(h.app.state().marquee_text, "never");
}

#[test]
fn test_cancel_and_completion_notices() {
    let mut h = Harness::new();
    h.app.handle_key(InputKey::Char('x'));
    h.app.handle_key(InputKey::Cancel);
    assert_eq!(h.app.input().buffer(), "");
    assert_eq!(h.log_texts().last().map(String::as_str), Some("Input cancelled"));

    h.app.handle_key(InputKey::Char('s'));
    h.app.handle_key(InputKey::Char('e'));
    h.app.handle_key(InputKey::Char('t'));
    h.app.handle_key(InputKey::Char('_'));
    h.app.handle_key(InputKey::Tab);
    let last = h.log_texts().last().cloned().unwrap_or_default();
    assert!(last.starts_with("Possible commands:"));
    assert!(last.contains("set_text"));
    assert!(last.contains("set_speed"));
}

#[test]
fn test_scrolling_advances_after_speed_elapses() {
    let mut h = Harness::new();
    let start = Instant::now();
    h.type_line("start_marquee");
    h.app.step(start);
    h.render();
    let before = h.app.scheduler().marquee_position();

    h.app.step(start + Duration::from_secs(1));
    assert_eq!(h.app.scheduler().marquee_position(), before + 1);
    assert!(h.render());
}

#[test]
fn test_ascii_art_grows_the_banner() {
    let mut h = Harness::new();
    h.render();
    assert!(h.row(2).starts_with("+===="));

    h.type_line("set_art on");
    h.app.step(Instant::now());
    assert!(h.render());

    assert!(h.row(7).starts_with("+===="));
    assert!(h.row(2).starts_with('|'));
}

#[test]
fn test_frames_cycle_in_side_panel() {
    let mut h = Harness::with_frames(&["FIRST-FRAME", "SECOND-FRAME"]);
    let start = Instant::now();
    h.render();
    assert!(h.screen().contains("FIRST-FRAME"));

    h.app.step(start + Duration::from_secs(1));
    h.render();
    assert!(h.screen().contains("SECOND-FRAME"));
}

#[test]
fn test_resize_redraws_everything() {
    let mut h = Harness::new();
    h.render();

    h.terminal.backend_mut().resize(100, 30);
    h.app.handle_resize(Rect::new(0, 0, 100, 30));
    assert!(h.render());
    assert!(h.row(29).starts_with("marquee> "));
    assert!(h.screen().contains("Type 'help' for available commands"));
}

/// Backend call as seen by the terminal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Call {
    Hide,
    Show,
    Draw,
    SetCursor,
}

/// `TestBackend` that records the order of cursor and draw calls
struct RecordingBackend {
    inner: TestBackend,
    calls: Vec<Call>,
}

impl RecordingBackend {
    fn new(width: u16, height: u16) -> Self {
        Self {
            inner: TestBackend::new(width, height),
            calls: Vec::new(),
        }
    }
}

impl Backend for RecordingBackend {
    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        let cells: Vec<_> = content.collect();
        if !cells.is_empty() {
            self.calls.push(Call::Draw);
        }
        self.inner.draw(cells.into_iter())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.calls.push(Call::Hide);
        self.inner.hide_cursor()
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        self.calls.push(Call::Show);
        self.inner.show_cursor()
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        self.inner.get_cursor_position()
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        self.calls.push(Call::SetCursor);
        self.inner.set_cursor_position(position)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.inner.clear()
    }

    fn clear_region(&mut self, clear_type: ClearType) -> io::Result<()> {
        self.inner.clear_region(clear_type)
    }

    fn size(&self) -> io::Result<Size> {
        self.inner.size()
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        self.inner.window_size()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[test]
fn test_cursor_hidden_while_painting() {
    let (mut app, _data) = build_app(&["FRAME-ONE", "FRAME-TWO"], WIDTH, HEIGHT);
    let mut terminal = Terminal::new(RecordingBackend::new(WIDTH, HEIGHT)).unwrap();
    assert!(app.render(&mut terminal).unwrap());

    // Every later repaint must start from a hidden cursor
    app.step(Instant::now() + Duration::from_secs(1));
    terminal.backend_mut().calls.clear();
    assert!(app.render(&mut terminal).unwrap());

    let calls = terminal.backend().calls.clone();
    let hide = calls.iter().position(|c| *c == Call::Hide);
    let draw = calls.iter().position(|c| *c == Call::Draw);
    let show = calls.iter().rposition(|c| *c == Call::Show);
    assert!(hide.is_some() && draw.is_some() && show.is_some(), "{calls:?}");
    assert!(hide < draw, "cursor visible during paint: {calls:?}");
    assert!(draw < show, "cursor not restored after paint: {calls:?}");
    assert_eq!(calls.last(), Some(&Call::SetCursor));
}

#[test]
fn test_welcome_survives_a_terminal_with_no_log_rows() {
    let (mut app, _data) = build_app(&[], WIDTH, 3);
    assert_eq!(app.log().capacity(), 0);

    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    app.handle_resize(Rect::new(0, 0, WIDTH, HEIGHT));
    assert!(app.render(&mut terminal).unwrap());

    let buf = terminal.backend().buffer();
    let screen: String = (0..HEIGHT)
        .map(|y| (0..WIDTH).map(|x| buf[(x, y)].symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");
    assert!(screen.contains("Type 'help' for available commands"));
}
