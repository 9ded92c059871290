use std::{io, path::Path, time::Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
};
use log::{info, warn};
use plexus_background::{NetworkState, Scene};
use plexus_config::Config;
use plexus_core::{ColorTheme, Point, SurfaceSize};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Size},
    style::Stylize,
    text::Line,
};

mod logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    logging::init(&config)?;

    let terminal = ratatui::init();
    let result = start(terminal, config);
    ratatui::restore();
    result
}

fn start(terminal: DefaultTerminal, config: Config) -> color_eyre::Result<()> {
    let size = terminal.size()?;
    let _mouse = MouseCapture::enable()?;
    App::new(config, size).run(terminal)
}

/// Keeps pointer-move reporting on for as long as it lives.
struct MouseCapture;

impl MouseCapture {
    fn enable() -> io::Result<Self> {
        execute!(io::stdout(), EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), DisableMouseCapture) {
            warn!("failed to release mouse capture: {err}");
        }
    }
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Presentation settings as loaded at startup.
    config: Config,
    /// Current color theme.
    color_theme: ColorTheme,
    /// Whether the theme was changed since startup.
    theme_changed: bool,
    /// Whether the help line is shown. Not saved.
    show_help: bool,
    /// Nodes, cursor and surface size.
    network: NetworkState,
    /// Shapes drawn by the latest tick.
    scene: Scene,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of `size` cells.
    pub fn new(config: Config, size: Size) -> Self {
        let surface = SurfaceSize::from_cells(
            size.width,
            size.height,
            config.cell_width_px,
            config.cell_height_px,
        );
        let mut network = NetworkState::new(surface);
        network.set_theme(config.color_theme);

        info!(
            "starting with {} nodes on a {}x{} surface, theme {:?}, {}ms frames",
            network.nodes().len(),
            surface.width,
            surface.height,
            config.color_theme,
            config.frame_interval_ms
        );

        Self {
            running: false,
            color_theme: config.color_theme,
            theme_changed: false,
            show_help: config.show_help,
            network,
            scene: Scene::new(surface).with_background(config.background),
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let frame_start = Instant::now();
            self.network.tick(&mut self.scene);
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events(frame_start + self.config.frame_interval())?;
        }
        self.persist_theme();
        Ok(())
    }

    /// Renders the scene and the help line.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(&self.scene, area);

        if !self.show_help {
            return;
        }

        let color = self.color_theme.color();
        let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);
        let help = Line::from(vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "c".bold().fg(color),
            " cycle color  ".dark_gray(),
            "h".bold().fg(color),
            " hide help".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Applies every event arriving before `deadline`, then returns so the
    /// next frame can start. Events already queued are still drained once
    /// the deadline has passed.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                return Ok(());
            }
            self.on_event(event::read()?);
            if !self.running {
                return Ok(());
            }
        }
    }

    /// Dispatch one terminal event.
    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(mouse) => self.on_mouse_event(mouse),
            Event::Resize(cols, rows) => self.on_resize(cols, rows),
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            (_, KeyCode::Char('h')) => self.toggle_help(),
            _ => {}
        }
    }

    /// Track the pointer while it moves, with or without a button held.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Moved | MouseEventKind::Drag(_) = mouse.kind {
            self.network.on_pointer_move(Point::cell_center(
                mouse.column,
                mouse.row,
                self.config.cell_width_px,
                self.config.cell_height_px,
            ));
        }
    }

    fn on_resize(&mut self, cols: u16, rows: u16) {
        let size = SurfaceSize::from_cells(
            cols,
            rows,
            self.config.cell_width_px,
            self.config.cell_height_px,
        );
        self.network.on_resize(size, &mut self.scene);
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.color_theme = self.color_theme.next();
        self.network.set_theme(self.color_theme);
        self.theme_changed = true;
    }

    fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }

    /// Remember a theme picked during the session.
    fn persist_theme(&self) {
        if let Some(path) = Config::config_path() {
            self.persist_theme_to(&path);
        }
    }

    /// Write only the color theme to the config file at `path`.
    fn persist_theme_to(&self, path: &Path) {
        if !self.theme_changed {
            return;
        }
        if let Err(err) = Config::save_theme_to(path, self.color_theme) {
            warn!("failed to save color theme: {err:#}");
        }
    }
}
