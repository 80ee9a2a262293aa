use std::io::stdout;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use folio_background::BackgroundState;
use folio_config::{Config, ContactInfo};
use folio_core::{AnimationSpeed, BackgroundStyle, Portfolio, Section};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Clear, Paragraph, Tabs, Wrap},
};

mod contact;
mod content;
mod logging;
mod sections;

use contact::{ContactClient, ContactError, ContactForm, FormState, UreqTransport};

/// Time between frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Section panel background.
const PANEL: Color = Color::Rgb(12, 12, 20);

/// Lines scrolled by PageUp and PageDown.
const PAGE: u16 = 10;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Without a usable data directory the app runs unlogged.
    if let Some(path) = logging::try_init(Config::log_dir().ok().as_deref()) {
        tracing::info!(log = %path.display(), "folio starting");
    }

    let config = Config::load()?;
    tracing::info!(
        endpoint = %config.endpoint,
        background = config.background.name(),
        speed = config.speed.name(),
        "loaded config"
    );
    let portfolio = content::load_portfolio(config.content_path.as_deref())?;
    let client = ContactClient::new(
        config.endpoint.clone(),
        UreqTransport::new(config.request_timeout()),
    );
    let app = App::new(&config, portfolio, client);

    let terminal = ratatui::init();
    let result = with_restore(
        || {
            crossterm::execute!(stdout(), EnableMouseCapture)?;
            app.run(terminal)
        },
        || {
            let _ = crossterm::execute!(stdout(), DisableMouseCapture);
            ratatui::restore();
        },
    );

    tracing::info!("folio exiting");
    result
}

/// Run `body`, then `restore` whatever the outcome.
fn with_restore<T>(
    body: impl FnOnce() -> color_eyre::Result<T>,
    restore: impl FnOnce(),
) -> color_eyre::Result<T> {
    let result = body();
    restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Section shown in the panel.
    section: Section,
    /// Panel scroll offset in lines.
    scroll: u16,
    /// Background layers to draw.
    background_style: BackgroundStyle,
    /// Animation speed.
    speed: AnimationSpeed,
    /// Background animation state.
    background: BackgroundState,
    portfolio: Portfolio,
    /// Details listed beside the contact form.
    contact_info: ContactInfo,
    form: ContactForm,
    client: ContactClient,
    /// Result of the in-flight contact submission.
    pending: Option<Receiver<Result<(), ContactError>>>,
    /// Start time for animation timing.
    start_time: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config, portfolio: Portfolio, client: ContactClient) -> Self {
        Self {
            running: false,
            section: Section::default(),
            scroll: 0,
            background_style: config.background,
            speed: config.speed,
            background: background_state(config),
            portfolio,
            contact_info: config.contact.clone(),
            form: ContactForm::new(),
            client,
            pending: None,
            start_time: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            self.poll_submission();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let elapsed_ms = self.start_time.elapsed().as_millis() as u64;
        self.background
            .render(frame, self.background_style, elapsed_ms, self.speed);

        let color = sections::accent(self.section);
        let chunks = Layout::vertical([
            Constraint::Length(1), // Tabs
            Constraint::Length(1), // Spacing
            Constraint::Fill(1),   // Section panel
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        let tabs = Tabs::new(Section::ALL.iter().map(|s| s.title()))
            .select(self.section.index())
            .style(Style::new().fg(Color::Gray))
            .highlight_style(Style::new().fg(color).bold())
            .divider("·");
        frame.render_widget(tabs, centered(chunks[0], 60));

        let panel = centered(chunks[2], 90);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(color))
            .title(Line::from(format!(" {} ", self.section.title())).bold());
        let lines = sections::section_lines(
            self.section,
            &self.portfolio,
            &self.form,
            &self.contact_info,
        );
        let body = Paragraph::new(lines)
            .block(block)
            .style(Style::new().bg(PANEL))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(Clear, panel);
        frame.render_widget(body, panel);

        frame.render_widget(self.help_line(color), chunks[3]);
    }

    /// Key help for the current section.
    fn help_line(&self, color: Color) -> Line<'static> {
        let mut keys = vec![("←/→", " section  ")];
        if self.section == Section::Contact {
            match self.form.state() {
                FormState::Sent => keys.push(("enter", " new message  ")),
                _ => keys.extend([("↑/↓", " field  "), ("enter", " next/send  ")]),
            }
            keys.push(("ctrl-c", " quit"));
        } else {
            keys.extend([
                ("↑/↓", " scroll  "),
                ("b", " background  "),
                ("s", " speed  "),
                ("q", " quit"),
            ]);
        }

        let mut spans = Vec::new();
        for (key, what) in keys {
            spans.push(key.bold().fg(color));
            spans.push(what.dark_gray());
        }
        spans.push(
            format!(
                "   [{} · {}]",
                self.background_style.name(),
                self.speed.name()
            )
            .dark_gray(),
        );
        Line::from(spans).centered()
    }

    /// Pick up the result of the in-flight submission, if it has arrived.
    fn poll_submission(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(ContactError::Transport(
                "submission worker stopped".to_string(),
            )),
        };
        self.pending = None;

        match &result {
            Ok(()) => tracing::info!("contact message sent"),
            Err(e) => tracing::warn!(error = %e, "contact message failed"),
        }
        self.form.finish(result);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with a short timeout so the background keeps animating.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
            self.background.pointer_moved(mouse.column, mouse.row);
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Right | KeyCode::Tab) => self.select(self.section.next()),
            (_, KeyCode::Left | KeyCode::BackTab) => self.select(self.section.prev()),
            _ if self.section == Section::Contact => self.on_contact_key(key),
            (_, KeyCode::Esc | KeyCode::Char('q')) => self.quit(),
            (_, KeyCode::Char('b')) => self.cycle_background(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            (_, KeyCode::Up) => self.scroll = self.scroll.saturating_sub(1),
            (_, KeyCode::Down) => self.scroll = self.scroll.saturating_add(1),
            (_, KeyCode::PageUp) => self.scroll = self.scroll.saturating_sub(PAGE),
            (_, KeyCode::PageDown) => self.scroll = self.scroll.saturating_add(PAGE),
            (_, KeyCode::Home) => self.scroll = 0,
            _ => {}
        }
    }

    /// Keys while the contact form is shown.
    fn on_contact_key(&mut self, key: KeyEvent) {
        if self.form.state() == FormState::Sent {
            if key.code == KeyCode::Enter {
                self.form.send_another();
            }
            return;
        }

        match key.code {
            KeyCode::Up => self.form.focus_prev(),
            KeyCode::Down => self.form.focus_next(),
            KeyCode::Enter if self.form.focus() == contact::Field::Message => self.submit(),
            KeyCode::Enter => self.form.focus_next(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.input(c)
            }
            _ => {}
        }
    }

    /// Validate the form and post it on a worker thread.
    fn submit(&mut self) {
        if self.pending.is_some() {
            return;
        }
        if let Some(message) = self.form.submit() {
            tracing::info!(endpoint = self.client.endpoint(), "submitting contact message");
            self.pending = Some(self.client.spawn(message));
        }
    }

    fn select(&mut self, section: Section) {
        self.section = section;
        self.scroll = 0;
    }

    fn cycle_background(&mut self) {
        self.background_style = self.background_style.next();
        tracing::debug!(style = self.background_style.name(), "background changed");
    }

    fn cycle_speed(&mut self) {
        self.speed = self.speed.next();
        tracing::debug!(speed = self.speed.name(), "speed changed");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Background state with the configured pointer glow.
fn background_state(config: &Config) -> BackgroundState {
    let state = BackgroundState::new().with_pointer_glow(config.pointer_glow);
    match config.glow_color {
        Some(color) => state.with_glow_color(color),
        None => state,
    }
}

/// Horizontally centred slice of `area`, at most `max_width` wide.
fn centered(area: Rect, max_width: u16) -> Rect {
    let [_, middle, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(max_width),
        Constraint::Fill(1),
    ])
    .areas(area);
    middle
}
