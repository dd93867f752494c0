use anyhow::Result;
use crossterm::event::Event;
use folio_core::{terminal::Effects, Content, EventBus, FormRelay};
use ratatui::{backend::Backend, Frame, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::{
    components::{
        CommandPaletteComponent, EditorComponent, ProjectDetailComponent, SidebarComponent,
        StatusComponent, TabBarComponent, TerminalComponent, TitleBarComponent,
    },
    handlers::{EventHandler, InputHandler},
    state::AppState,
    utils::{input, layout, terminal},
};

/// Main application
pub struct App {
    state: AppState,
}

impl App {
    /// Create a new application instance
    pub fn new(
        content: Arc<Content>,
        effects: Arc<dyn Effects>,
        relay: Arc<dyn FormRelay>,
        event_bus: EventBus,
    ) -> Self {
        let sender = event_bus.sender();
        Self {
            state: AppState::new(content, effects, relay, sender, event_bus.into_receiver()),
        }
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        let mut terminal = terminal::setup()?;
        self.state.set_viewport(terminal.size()?.height);

        info!("TUI initialized, starting main loop");

        // Terminal input is read on its own thread so the loop below only wakes when there is work
        let input = input::spawn_reader();

        // Main application loop
        let result = self.run_app(&mut terminal, input).await;

        // Restore terminal
        terminal::restore(&mut terminal)?;

        result
    }

    /// Main application loop
    async fn run_app<B: Backend + std::io::Write>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut input: mpsc::UnboundedReceiver<Event>,
    ) -> Result<()> {
        loop {
            // Update cursor blinking
            self.state.update_cursor_blink();

            // Draw UI
            terminal.draw(|f| self.ui(f))?;

            // Handle events with timeout to ensure UI responsiveness
            tokio::select! {
                // Handle terminal events (keyboard, mouse, resize)
                terminal_event = input.recv() => match terminal_event {
                    Some(event) => InputHandler::handle_event(&mut self.state, event).await,
                    None => {
                        warn!("Terminal input closed");
                        self.state.should_quit = true;
                    }
                },

                // Handle application events (contact results, etc.)
                app_event = self.state.event_receiver.recv() => {
                    if let Some(event) = app_event {
                        EventHandler::handle_event(&mut self.state, event).await;
                    }
                },

                // Timeout to ensure regular UI updates (typing effect, cursor blink)
                _ = tokio::time::sleep(Duration::from_millis(50)) => {},
            }

            if self.state.should_quit {
                break;
            }
        }

        info!("Leaving TUI");
        Ok(())
    }

    /// Draw the user interface
    fn ui(&mut self, f: &mut Frame) {
        render(&mut self.state, f);
    }
}

/// Draw one frame and record the hit areas used by the mouse handler
pub(crate) fn render(state: &mut AppState, f: &mut Frame) {
    let size = f.size();
    state.set_viewport(size.height);

    let terminal_height = state.terminal_open.then(|| state.panel.height());
    let areas = layout::create_main_layout(size, state.workbench.sidebar_visible(), terminal_height);

    state.hit_areas.sidebar = areas.sidebar;
    state.hit_areas.editor = areas.editor;
    state.hit_areas.terminal = areas.terminal;

    TitleBarComponent::render(state, f, areas.title);
    match areas.sidebar {
        Some(sidebar) => SidebarComponent::render(state, f, sidebar),
        None => state.hit_areas.files.clear(),
    }
    TabBarComponent::render(state, f, areas.tab_bar);
    EditorComponent::render(state, f, areas.editor);
    if let Some(panel) = areas.terminal {
        TerminalComponent::render(state, f, panel);
    }
    StatusComponent::render(state, f, areas.status);

    // Overlays (render on top)
    if state.project_detail_open {
        ProjectDetailComponent::render(state, f);
    }
    if state.command_palette_open {
        CommandPaletteComponent::render(state, f);
    }
}
