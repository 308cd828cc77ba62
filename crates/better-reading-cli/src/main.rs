use anyhow::{Context, Result};
use better_reading_config::Settings;
use better_reading_engine::{
    LiveView, Rope, Span, ViewState,
    highlight::runs,
    parsing::rope::{lines_with_spans, slice_to_string},
    render::Rewriter,
    render_markdown,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span as TextSpan},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    fs::File,
    io::{self, Stdout, Write, stdout},
    path::{Path, PathBuf},
    process,
};

/// The file is never edited here, so its content version never changes.
const DOC_VERSION: u64 = 0;

struct App {
    path: PathBuf,
    doc: Rope,
    /// Line spans without their line endings.
    lines: Vec<Span>,
    scroll: usize,
    page: usize,
    settings: Settings,
    live: LiveView,
    message: Option<String>,
}

impl App {
    fn new(path: PathBuf, settings: Settings) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let doc = Rope::from(content.as_str());
        let lines = lines_with_spans(&doc)
            .map(|lr| {
                let trimmed = lr.text.trim_end_matches(['\n', '\r']).len();
                Span::new(lr.span.start, lr.span.start + trimmed)
            })
            .collect();
        let live = LiveView::new(settings.rule_set()?, settings.live_filter());

        Ok(Self {
            path,
            doc,
            lines,
            scroll: 0,
            page: 1,
            settings,
            live,
            message: None,
        })
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.lines.len().saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    fn toggle_mode(&mut self) {
        let enabled = self.settings.toggle();
        log::info!("better reading mode: {enabled}");
        self.message = match self.settings.save() {
            Ok(()) => None,
            Err(e) => {
                log::warn!("could not save settings: {e:#}");
                Some(format!("Not saved: {e}"))
            }
        };
    }

    /// Visible lines and the live view's ranges for them, for a viewport of
    /// `height` lines.
    fn refresh(&mut self, height: usize) -> &[Span] {
        self.page = height.max(1);
        let end = (self.scroll + self.page).min(self.lines.len());
        let window = &self.lines[self.scroll.min(end)..end];
        let visible: Vec<Span> = match (window.first(), window.last()) {
            (Some(first), Some(last)) => vec![Span::new(first.start, last.end)],
            _ => vec![],
        };
        self.live.update(&ViewState {
            doc: &self.doc,
            version: DOC_VERSION,
            visible: &visible,
            mode: self.settings.better_reading_mode,
        });
        window
    }
}

/// Whether `args` start the terminal view, which owns the screen.
fn runs_tui(args: &[String]) -> bool {
    matches!(args, [_, file] if !file.starts_with('-'))
}

fn init_logging(args: &[String]) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Warn).parse_default_env();
    // Stderr would draw over the alternate screen.
    if runs_tui(args) {
        let log_path = env::temp_dir().join("better-reading.log");
        let target: Box<dyn Write + Send> = match File::create(&log_path) {
            Ok(file) => Box::new(file),
            Err(_) => Box::new(io::sink()),
        };
        builder.target(env_logger::Target::Pipe(target));
    }
    builder.init();
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    init_logging(&args);
    let program = args.first().map_or("better-reading", String::as_str);

    let mut settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match args.as_slice() {
        [_, flag] if flag == "--toggle" => {
            settings.toggle();
            settings.save()?;
            println!("{}", settings.status_label());
            Ok(())
        }
        [_, flag, file] if flag == "--html" => export_html(Path::new(file), &settings),
        [_, file] if runs_tui(&args) => run_tui(PathBuf::from(file), settings),
        _ => {
            eprintln!("Usage: {program} <file.md>");
            eprintln!("       {program} --html <file.md>");
            eprintln!("       {program} --toggle");
            process::exit(1);
        }
    }
}

fn export_html(path: &Path, settings: &Settings) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let rules = settings.rule_set()?;

    let mut tree = render_markdown(&content);
    let root = tree.root();
    let stats = Rewriter::new(&rules, settings.rendered_filter()).rewrite(
        &mut tree,
        root,
        settings.better_reading_mode,
    );
    log::debug!("rewrite: {stats:?}");

    println!("{}", tree.inner_html(root));
    Ok(())
}

fn run_tui(path: PathBuf, settings: Settings) -> Result<()> {
    let mut app = App::new(path, settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let page = app.page as isize;
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_by(page),
                KeyCode::PageUp => app.scroll_by(-page),
                KeyCode::Home | KeyCode::Char('g') => app.scroll = 0,
                KeyCode::End | KeyCode::Char('G') => app.scroll_by(isize::MAX),
                KeyCode::Char('t') => app.toggle_mode(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    // Borders take two rows.
    let height = chunks[0].height.saturating_sub(2) as usize;
    let window = app.refresh(height).to_vec();
    let emphasis = Style::default().add_modifier(Modifier::BOLD);

    let content_text: Vec<Line> = window
        .iter()
        .map(|&line| {
            let pieces: Vec<TextSpan> = runs(line, app.live.ranges())
                .into_iter()
                .map(|run| {
                    let text = slice_to_string(&app.doc, run.span);
                    if run.emphasized {
                        TextSpan::styled(text, emphasis)
                    } else {
                        TextSpan::raw(text)
                    }
                })
                .collect();
            Line::from(pieces)
        })
        .collect();

    let title = app.path.display().to_string();
    let content =
        Paragraph::new(content_text).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(content, chunks[0]);

    let mut status = vec![
        TextSpan::styled(
            format!(" {} ", app.settings.status_label()),
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        TextSpan::raw(" q: Quit | ↑/k ↓/j: Scroll | PgUp/PgDn: Page | t: Toggle"),
    ];
    if let Some(message) = &app.message {
        status.push(TextSpan::styled(
            format!(" | {message}"),
            Style::default().fg(Color::Red),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(status)), chunks[1]);
}
