//! Mount API - page lifecycle and the render effect.
//!
//! `mount()` builds the whole runtime: the typewriter and the two reveal
//! trackers, the deadline scheduler that drives them, the viewport, the
//! page derived, and the one render effect that repaints whenever any page
//! signal changes. The returned [`App`] is ticked from the caller's loop:
//!
//! ```ignore
//! let mut app = folio_tui::mount()?;
//! app.run()?; // Blocks until q / Esc / Ctrl+C
//! app.unmount()?;
//! ```
//!
//! Everything runs on the calling thread: timers are polled, not slept on,
//! and input polling uses the time until the next deadline as its timeout
//! so animation ticks never wait behind a full input poll.

use std::cell::RefCell;
use std::io::{self, stdout};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use spark_signals::{derived, effect, signal, Derived, Signal};

use crate::content;
use crate::renderer::Painter;
use crate::state::timer::{Scheduler, TickToken};
use crate::state::{blink, hover, RevealTracker, Stagger, Typewriter, TypewriterConfig, RANDOM_MAX};
use crate::types::{Line, SectionKind};
use crate::view::{self, Page, PageSignals};

use super::viewport::Viewport;

/// Max input-poll wait when no timer is due sooner (~60fps).
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Page rows scrolled by PageUp/PageDown, as a fraction of the window.
const PAGE_SCROLL_FACTOR: f32 = 0.9;

/// Rows scrolled per mouse wheel notch.
const WHEEL_SCROLL: i64 = 3;

/// Widest content column; narrower terminals clamp to their own width.
const MAX_CONTENT_WIDTH: u16 = 88;

// =============================================================================
// Timer routing
// =============================================================================

/// Destination of a fired timer.
enum Fired {
    Typewriter(TickToken),
    Timeline(TickToken),
    Skills(TickToken),
    Blink,
}

// =============================================================================
// App
// =============================================================================

/// The mounted page: state machines, scheduler, viewport, and the render
/// effect. Dropping without [`unmount`](Self::unmount) still stops the
/// effect, but unmount also restores the terminal.
pub struct App {
    scheduler: Scheduler<Fired>,
    typewriter: Typewriter,
    timeline: RevealTracker,
    skills: RevealTracker,
    viewport: Viewport,
    signals: PageSignals,
    page: Derived<Page>,
    offset_sig: Signal<usize>,
    height_sig: Signal<usize>,
    painter: Rc<RefCell<Painter>>,
    running: Arc<AtomicBool>,
    stop_effect: Option<Box<dyn FnOnce()>>,
    blink_unsub: Option<Box<dyn FnOnce()>>,
}

/// Mount the portfolio page.
///
/// Sets up raw mode, mouse capture, and the alternate screen; builds the
/// state machines from [`content`]; schedules the first typewriter and
/// blink ticks; and delivers initial visibility so blocks already inside
/// the first window start revealing immediately.
pub fn mount() -> io::Result<App> {
    let (term_w, term_h) = crossterm::terminal::size()?;
    let width = term_w.min(MAX_CONTENT_WIDTH);
    let height = term_h as usize;

    // State machines.
    let roles = content::ROLES.iter().map(|r| r.to_string()).collect();
    let typewriter = Typewriter::new(roles, TypewriterConfig::default())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let timeline = RevealTracker::new(&view::timeline_blocks(), Stagger::ordinal())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let skills = RevealTracker::new(&view::skills_blocks(), Stagger::random(RANDOM_MAX))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Reactive pipeline: signals -> page derived -> render effect.
    let signals = PageSignals::new(width);
    let page = {
        let signals = signals.clone();
        derived(move || view::build_page(&signals))
    };
    let offset_sig = signal(0usize);
    let height_sig = signal(height);

    let mut viewport = Viewport::new(height);
    {
        let built = page.get();
        viewport.set_extents(built.extents.clone(), built.rows());
    }

    // Terminal setup before the first paint.
    enable_raw_mode()?;
    execute!(stdout(), EnableMouseCapture)?;
    let painter = Rc::new(RefCell::new(Painter::new()));
    painter.borrow_mut().enter()?;

    let running = Arc::new(AtomicBool::new(true));

    // The ONE render effect: reruns when the page or the window moves.
    let stop_effect: Box<dyn FnOnce()> = {
        let page = page.clone();
        let offset_sig = offset_sig.clone();
        let height_sig = height_sig.clone();
        let painter = painter.clone();
        let running = running.clone();
        let stop = effect(move || {
            if !running.load(Ordering::SeqCst) {
                return;
            }
            let built = page.get();
            let offset = offset_sig.get();
            let height = height_sig.get();

            let end = (offset + height).min(built.lines.len());
            let mut rows: Vec<Line> = built.lines[offset.min(end)..end].to_vec();
            rows.resize(height, Line::blank());
            let _ = painter.borrow_mut().paint(&rows);
        });
        Box::new(stop)
    };

    let blink_unsub: Box<dyn FnOnce()> = Box::new(blink::subscribe_to_blink());

    let mut app = App {
        scheduler: Scheduler::new(),
        typewriter,
        timeline,
        skills,
        viewport,
        signals,
        page,
        offset_sig,
        height_sig,
        painter,
        running,
        stop_effect: Some(stop_effect),
        blink_unsub: Some(blink_unsub),
    };

    // First ticks: typewriter, caret blink, and whatever is already visible.
    let now = Instant::now();
    let first = app.typewriter.start();
    app.scheduler
        .schedule(now, first.delay, Fired::Typewriter(first.token));
    app.scheduler
        .schedule(now, blink::BLINK_HALF_PERIOD, Fired::Blink);
    app.push_visibility(now);

    Ok(app)
}

impl App {
    /// Process due timers and at most one input event. Returns `Ok(false)`
    /// once the page should stop.
    pub fn tick(&mut self) -> io::Result<bool> {
        if !self.is_running() {
            return Ok(false);
        }

        let now = Instant::now();
        for fired in self.scheduler.poll_due(now) {
            self.dispatch(fired, now);
        }

        // Wait for input, but never past the next timer deadline.
        let timeout = match self.scheduler.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(POLL_INTERVAL),
            None => POLL_INTERVAL,
        };
        if crossterm::event::poll(timeout)? {
            let event = crossterm::event::read()?;
            self.route_event(event);
        }

        Ok(self.is_running())
    }

    /// Block until the page stops (quit key or [`stop`](Self::stop)).
    pub fn run(&mut self) -> io::Result<()> {
        while self.tick()? {}
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request a graceful stop from anywhere holding the app.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Tear everything down and restore the terminal.
    ///
    /// Order matters: stop the render effect before leaving the alternate
    /// screen so no late repaint lands on the normal buffer.
    pub fn unmount(mut self) -> io::Result<()> {
        self.running.store(false, Ordering::SeqCst);

        self.typewriter.stop();
        self.timeline.teardown();
        self.skills.teardown();
        self.scheduler.clear();
        hover::set_hovered(None);

        if let Some(unsub) = self.blink_unsub.take() {
            unsub();
        }
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }

        self.painter.borrow_mut().exit()?;
        execute!(stdout(), DisableMouseCapture)?;
        disable_raw_mode()
    }

    // =========================================================================
    // Timer dispatch
    // =========================================================================

    fn dispatch(&mut self, fired: Fired, now: Instant) {
        match fired {
            Fired::Typewriter(token) => {
                if let Some(next) = self.typewriter.step(token) {
                    self.scheduler
                        .schedule(now, next.delay, Fired::Typewriter(next.token));
                }
                let text = self.typewriter.displayed().to_string();
                if self.signals.typed.get() != text {
                    self.signals.typed.set(text);
                }
            }
            Fired::Timeline(token) => {
                if self.timeline.fire(token) {
                    self.signals
                        .timeline_revealed
                        .set(self.timeline.revealed().to_vec());
                }
            }
            Fired::Skills(token) => {
                if self.skills.fire(token) {
                    self.signals
                        .skills_revealed
                        .set(self.skills.revealed().to_vec());
                }
            }
            Fired::Blink => {
                blink::advance();
                if blink::has_subscribers() {
                    self.scheduler
                        .schedule(now, blink::BLINK_HALF_PERIOD, Fired::Blink);
                }
            }
        }
    }

    /// Feed the current intersection state of every block to its tracker.
    ///
    /// Trackers are idempotent, so this runs after every scroll/resize
    /// without bookkeeping about what was already delivered.
    fn push_visibility(&mut self, now: Instant) {
        for (id, is_intersecting) in self.viewport.intersections() {
            let schedule = match id.section {
                SectionKind::Timeline => self.timeline.on_visibility(id, is_intersecting),
                SectionKind::Skills => self.skills.on_visibility(id, is_intersecting),
                _ => None,
            };
            if let Some(s) = schedule {
                let fired = match id.section {
                    SectionKind::Timeline => Fired::Timeline(s.token),
                    _ => Fired::Skills(s.token),
                };
                self.scheduler.schedule(now, s.delay, fired);
            }
        }
    }

    // =========================================================================
    // Input routing
    // =========================================================================

    fn route_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(w, h) => self.handle_resize(w, h),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        let page_step = (self.viewport.height() as f32 * PAGE_SCROLL_FACTOR) as i64;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.stop(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.stop(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll(1),
            KeyCode::PageUp => self.scroll(-page_step),
            KeyCode::PageDown => self.scroll(page_step),
            KeyCode::Home => {
                self.viewport.scroll_to_top();
                self.after_scroll();
            }
            KeyCode::End => {
                self.viewport.scroll_to_bottom();
                self.after_scroll();
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll(-WHEEL_SCROLL),
            MouseEventKind::ScrollDown => self.scroll(WHEEL_SCROLL),
            MouseEventKind::Moved => {
                // Hover only applies to skill category cards.
                let hit = self
                    .viewport
                    .hit(mouse.row)
                    .filter(|id| id.section == SectionKind::Skills);
                hover::set_hovered(hit);
            }
            _ => {}
        }
    }

    fn handle_resize(&mut self, w: u16, h: u16) {
        // A reflow scrambles the screen; the diff base is no longer valid.
        self.painter.borrow_mut().invalidate();
        self.signals.width.set(w.min(MAX_CONTENT_WIDTH));
        self.height_sig.set(h as usize);
        self.viewport.set_height(h as usize);
        self.refresh_extents();
        self.after_scroll();
        // A width change past the clamp moves no signal, so the effect may
        // not have run; paint the window explicitly.
        self.repaint_window();
    }

    fn scroll(&mut self, delta: i64) {
        if self.viewport.scroll_by(delta) {
            self.after_scroll();
        }
    }

    fn after_scroll(&mut self) {
        self.offset_sig.set(self.viewport.offset());
        self.push_visibility(Instant::now());
    }

    /// Re-read block geometry from the page derived after a width change.
    fn refresh_extents(&mut self) {
        let built = self.page.get();
        self.viewport.set_extents(built.extents.clone(), built.rows());
    }

    /// Paint the current window outside the render effect. After an
    /// invalidation the diff repaints every row; otherwise it writes
    /// nothing the effect has not already drawn.
    fn repaint_window(&mut self) {
        let built = self.page.get();
        let offset = self.viewport.offset();
        let height = self.viewport.height();
        let end = (offset + height).min(built.lines.len());
        let mut rows: Vec<Line> = built.lines[offset.min(end)..end].to_vec();
        rows.resize(height, Line::blank());
        let _ = self.painter.borrow_mut().paint(&rows);
    }
}
