//! Application state and event loop

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tokio::sync::oneshot;

use researchit_core::constants::ui::TICK_INTERVAL;
use researchit_core::{
    Carousel, CarouselConfig, Config, SearchClient, SearchError, SearchResponse,
};

use super::slides::landing_deck;
use super::theme::Theme;
use super::views;

/// Spinner frames
const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Spinner frame duration
const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Rows each browse-list marker occupies (title + padding)
pub const MARKER_ROWS: f32 = 5.0;

/// Rows one scroll notch moves the browse list
const BROWSE_SCROLL_STEP: f32 = 2.0;

/// Which main view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Fullscreen wheel-throttled carousel
    Home,
    /// Scroll-synced title list with side panels
    Browse,
    /// Query input and result cards
    Search,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Browse => "Browse",
            View::Search => "Search",
        }
    }

    fn next(self) -> Self {
        match self {
            View::Home => View::Browse,
            View::Browse => View::Search,
            View::Search => View::Home,
        }
    }
}

/// State of the search view
pub struct SearchState {
    /// Current query text
    pub input: String,
    /// A request is in flight
    pub is_searching: bool,
    /// Last successful response
    pub results: Option<SearchResponse>,
    /// Last failure, shown as an error banner
    pub error: Option<String>,
    /// Scroll offset into the rendered result lines
    pub scroll: usize,
    /// Upper bound for `scroll`, set during render
    pub max_scroll: usize,
    /// Spinner frame
    pub spinner_idx: usize,
    /// Last spinner update
    pub last_spinner: Instant,
}

impl SearchState {
    fn new() -> Self {
        Self {
            input: String::new(),
            is_searching: false,
            results: None,
            error: None,
            scroll: 0,
            max_scroll: 0,
            spinner_idx: 0,
            last_spinner: Instant::now(),
        }
    }

    pub fn spinner_frame(&self) -> char {
        SPINNER[self.spinner_idx % SPINNER.len()]
    }
}

/// Areas cached at render time for mouse routing
#[derive(Debug, Default, Clone, Copy)]
pub struct LayoutCache {
    pub home_area: Option<Rect>,
    pub browse_list_area: Option<Rect>,
    pub search_results_area: Option<Rect>,
}

/// The application
pub struct App {
    pub theme: Theme,
    pub view: View,
    /// Wheel-throttled fullscreen carousel
    pub home: Carousel,
    /// Scroll-synced list carousel
    pub browse: Carousel,
    /// Scroll offset of the browse list, in rows
    pub browse_scroll: f32,
    pub search: SearchState,
    pub layout: LayoutCache,
    pub config: Config,
    pub should_quit: bool,
    pub needs_redraw: bool,
    client: SearchClient,
    search_rx: Option<oneshot::Receiver<Result<SearchResponse, SearchError>>>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let deck = landing_deck();
        let home = Carousel::new(deck.clone(), CarouselConfig::default())?;
        let browse = Carousel::new(deck, CarouselConfig::scroll_sync())?;
        let client = SearchClient::new(&config.server_url)?;

        Ok(Self {
            theme: Theme::default(),
            view: View::Home,
            home,
            browse,
            browse_scroll: 0.0,
            search: SearchState::new(),
            layout: LayoutCache::default(),
            config,
            should_quit: false,
            needs_redraw: true,
            client,
            search_rx: None,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        // Async event stream so the runtime keeps making progress while the
        // terminal is idle.
        let mut event_stream = EventStream::new();

        loop {
            // Pick up a completed search, if any
            self.poll_search();

            // Tick animations (before render, not during)
            if self.tick() {
                self.needs_redraw = true;
            }

            // Only render if something changed
            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased; // Prefer events over timeout when both are ready

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) if key.kind != KeyEventKind::Release => {
                                self.handle_key(key.code, key.modifiers);
                                self.needs_redraw = true;
                            }
                            Event::Mouse(mouse) => {
                                self.handle_mouse_event(mouse);
                                self.needs_redraw = true;
                            }
                            Event::Resize(_, _) => {
                                self.needs_redraw = true;
                            }
                            _ => {}
                        }
                    }
                }
                _ = tokio::time::sleep(TICK_INTERVAL) => {
                    // Timeout - continue loop for animations and polling
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Advance animation clocks. Returns true if a redraw is needed.
    fn tick(&mut self) -> bool {
        let now = Instant::now();
        let mut animating = self.home.tick(now);

        if self.search.is_searching && now.duration_since(self.search.last_spinner) >= SPINNER_INTERVAL
        {
            self.search.spinner_idx = self.search.spinner_idx.wrapping_add(1);
            self.search.last_spinner = now;
            animating = true;
        }

        animating
    }

    fn ui(&mut self, f: &mut Frame) {
        match self.view {
            View::Home => views::home::render(self, f),
            View::Browse => views::browse::render(self, f),
            View::Search => views::search::render(self, f),
        }
    }

    /// Switch to the next view in the cycle
    pub fn cycle_view(&mut self) {
        self.view = self.view.next();
    }

    /// Scroll the browse list and re-derive the current index from marker
    /// positions (the scroll-sync variant has no throttling).
    pub fn scroll_browse(&mut self, delta_rows: f32) {
        let max = (self.browse.state().len() - 1) as f32 * MARKER_ROWS;
        self.browse_scroll = (self.browse_scroll + delta_rows * BROWSE_SCROLL_STEP).clamp(0.0, max);
        self.resync_browse();
    }

    /// Recompute the browse index from current marker offsets
    pub fn resync_browse(&mut self) {
        let tops: Vec<f32> = (0..self.browse.state().len())
            .map(|i| i as f32 * MARKER_ROWS - self.browse_scroll)
            .collect();
        self.browse.sync_to_markers(&tops, 0.0);
    }

    /// Kick off a search for the current input in the background
    pub fn submit_search(&mut self) {
        let query = self.search.input.trim().to_string();
        if query.is_empty() || self.search.is_searching {
            return;
        }

        tracing::info!(query = %query, "Submitting search");
        self.search.is_searching = true;
        self.search.error = None;
        self.search.results = None;
        self.search.scroll = 0;

        let (tx, rx) = oneshot::channel();
        self.search_rx = Some(rx);

        let client = self.client.clone();
        let top_k = self.config.top_k;
        tokio::spawn(async move {
            let result = client.smart_search(&query, top_k).await;
            let _ = tx.send(result);
        });
    }

    /// Non-blocking check for a finished search task
    fn poll_search(&mut self) {
        let Some(rx) = &mut self.search_rx else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(response)) => {
                self.search_rx = None;
                self.search.is_searching = false;
                self.search.results = Some(response);
                self.needs_redraw = true;
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Search failed");
                self.search_rx = None;
                self.search.is_searching = false;
                self.search.error = Some(e.to_string());
                self.needs_redraw = true;
            }
            Err(oneshot::error::TryRecvError::Empty) => {
                // Still searching
            }
            Err(oneshot::error::TryRecvError::Closed) => {
                // Task dropped without sending (panic or shutdown)
                self.search_rx = None;
                self.search.is_searching = false;
                self.search.error = Some("search task failed".to_string());
                self.needs_redraw = true;
            }
        }
    }
}
