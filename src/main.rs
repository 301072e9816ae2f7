pub mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use folio::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    content::Content,
    logging,
    nav::Menu,
    page::{PageKind, PageTimings, PageView},
    runtime::{CrosstermEventSource, FixedTicker, FolioEvent, Runner},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{info, warn};
use webbrowser::Browser;

/// terminal portfolio with typewriter headlines
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A small personal portfolio for the terminal: home, about and contact pages with typewriter headlines, staged fade-ins and a menu overlay."
)]
pub struct Cli {
    /// page to open on
    #[clap(short = 'p', long, value_enum)]
    page: Option<PageKind>,

    /// JSON file with the portfolio content (defaults to the built-in sample)
    #[clap(short = 'c', long)]
    content: Option<PathBuf>,

    /// milliseconds per typed headline character
    #[clap(long)]
    typing_ms: Option<u64>,

    /// milliseconds per ellipsis step once a headline is typed
    #[clap(long)]
    ellipsis_ms: Option<u64>,

    /// milliseconds per step of the now-playing highlight
    #[clap(long)]
    highlight_ms: Option<u64>,

    /// write the effective settings back to the config file
    #[clap(long)]
    save_config: bool,

    /// log file (default: ~/.local/state/folio/folio.log, filter via FOLIO_LOG)
    #[clap(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Layer command line overrides on top of the persisted config
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(page) = self.page {
            config.start_page = page.to_string();
        }
        if let Some(path) = &self.content {
            config.content_path = Some(path.clone());
        }
        if let Some(ms) = self.typing_ms {
            config.typing_interval_ms = ms;
        }
        if let Some(ms) = self.ellipsis_ms {
            config.ellipsis_interval_ms = ms;
        }
        if let Some(ms) = self.highlight_ms {
            config.highlight_interval_ms = ms;
        }
        config
    }
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    Continue,
    Open(String),
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub content: Content,
    pub timings: PageTimings,
    pub page: PageView,
    pub menu: Menu,
}

impl App {
    pub fn new(content: Content, start: PageKind, timings: PageTimings) -> Self {
        let page = PageView::mount(start, &content, timings);
        Self {
            content,
            timings,
            page,
            menu: Menu::default(),
        }
    }

    /// Route to `kind`. The current page is always remounted, even when it
    /// is the one already shown.
    pub fn navigate(&mut self, kind: PageKind) {
        self.menu.close();
        info!(from = %self.page.kind(), to = %kind, "navigate");
        self.page = PageView::mount(kind, &self.content, self.timings);
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.page.advance(elapsed);
    }

    pub fn on_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyOutcome::Quit;
        }

        if self.menu.is_open() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('m') => self.menu.close(),
                KeyCode::Left | KeyCode::Char('h') => self.menu.select_prev(),
                KeyCode::Right | KeyCode::Char('l') => self.menu.select_next(),
                KeyCode::Enter => {
                    let kind = self.menu.confirm();
                    self.navigate(kind);
                }
                _ => {}
            }
            return KeyOutcome::Continue;
        }

        let mut screen = ui::screen::current_screen(self.page.kind());
        if screen.on_key(key, self) {
            return KeyOutcome::Continue;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Char('m') => self.menu.toggle(),
            KeyCode::Char('h') => self.navigate(PageKind::Home),
            KeyCode::Char('a') => self.navigate(PageKind::About),
            KeyCode::Char('c') => self.navigate(PageKind::Contact),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(url) = self.link_url(c) {
                    return KeyOutcome::Open(url);
                }
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    /// Url behind the numbered link, once the page has revealed its links
    fn link_url(&self, digit: char) -> Option<String> {
        if !self.page.links_visible() {
            return None;
        }
        let idx = digit.to_digit(10)? as usize;
        self.page
            .kind()
            .links(&self.content)
            .get(idx.checked_sub(1)?)
            .map(|link| link.url.clone())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(msg) = init_logging(cli.log_file.as_deref()) {
        eprintln!("{msg}");
    }

    let store = FileConfigStore::new();
    let config = cli.apply_to(store.load());
    if cli.save_config {
        if let Err(e) = store.save(&config) {
            warn!(path = %store.path().display(), error = %e, "failed to save config");
        }
    }

    let content = match &config.content_path {
        Some(path) => Content::load(path).unwrap_or_else(|e| {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::Io, e).exit()
        }),
        None => Content::default(),
    };
    let start = PageKind::from_str(&config.start_page, true).unwrap_or(PageKind::Home);
    info!(?config, %start, "starting folio");

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(content, start, config.page_timings());
    start_tui(&mut terminal, &mut app)?;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Start file logging. A log file asked for on the command line reports
/// why it could not be opened; the default location fails silently.
fn init_logging(requested: Option<&Path>) -> Option<String> {
    match requested {
        Some(path) => logging::init(path)
            .err()
            .map(|e| format!("folio: logging disabled, cannot open {}: {e}", path.display())),
        None => {
            if let Some(path) = AppDirs::log_path() {
                let _ = logging::init(&path);
            }
            None
        }
    }
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let mut runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());

    terminal.draw(|f| ui(app, f))?;

    loop {
        let (event, elapsed) = runner.next_frame();
        app.advance(elapsed);

        match event {
            FolioEvent::Tick | FolioEvent::Resize => {}
            FolioEvent::Key(key) => match app.on_key(key) {
                KeyOutcome::Quit => break,
                KeyOutcome::Open(url) => open_link(&url),
                KeyOutcome::Continue => {}
            },
        }

        terminal.draw(|f| ui(app, f))?;
    }

    info!("quit");
    Ok(())
}

fn open_link(url: &str) {
    if !Browser::is_available() {
        return;
    }
    info!(url, "opening link");
    if let Err(e) = webbrowser::open(url) {
        warn!(url, error = %e, "failed to open link");
    }
}

fn ui(app: &mut App, f: &mut Frame) {
    ui::screen::current_screen(app.page.kind()).render(app, f);

    if app.menu.is_open() {
        let area = f.area();
        ui::render_menu(&app.menu, area, f.buffer_mut());
    }
}
