/// Terminal front-end: shows a loaded model as filled true-color polygons
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, stdout, Write};
use std::time::Duration;

pub mod renderer;
pub mod viewer;

pub use renderer::CellCanvas;
pub use viewer::{LoadError, LoadedModel, Viewer};

/// Interactive session around a [`Viewer`]
pub struct TerminalApp {
    viewer: Viewer,
    canvas: CellCanvas,
    status: String,
    running: bool,
    dirty: bool,
}

impl TerminalApp {
    /// `canvas` must match the viewport the viewer's camera was built for
    pub fn new(viewer: Viewer, canvas: CellCanvas) -> Self {
        let status = describe(&viewer);
        Self {
            viewer,
            canvas,
            status,
            running: true,
            dirty: true,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            if self.dirty {
                self.render()?;
                self.dirty = false;
            }

            if event::poll(Duration::from_millis(250))? {
                self.handle_input()?;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('r') => {
                    self.reload();
                }
                _ => {}
            },
            Event::Resize(..) => self.dirty = true,
            _ => {}
        }
        Ok(())
    }

    fn reload(&mut self) {
        let outcome = self.viewer.reload().map(|model| model.is_some());
        self.status = match outcome {
            Ok(true) => describe(&self.viewer),
            Ok(false) => "Nothing to reload".to_string(),
            Err(err) => format!("Reload failed, keeping previous model: {err}"),
        };
        self.dirty = true;
    }

    fn render(&mut self) -> io::Result<()> {
        self.canvas.clear();
        self.canvas.paint(self.viewer.draw_list());

        let mut stdout = stdout();
        queue!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        self.canvas.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetBackgroundColor(Color::Black),
            SetForegroundColor(Color::Yellow),
            Print(format!("OV3D | {} | R=Reload Q=Quit", self.status)),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// One-line summary of the current model
fn describe(viewer: &Viewer) -> String {
    let Some(model) = viewer.model() else {
        return "No model".to_string();
    };

    let name = model
        .source
        .as_deref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cube".to_string());

    let mut line = format!(
        "{name}: {} vertices, {} faces, {} materials",
        model.scene.vertices.len(),
        model.scene.faces.len(),
        model.scene.materials.len()
    );
    if let Some(warning) = model.warnings.first() {
        line.push_str(&format!(" | warning: {warning}"));
        if model.warnings.len() > 1 {
            line.push_str(&format!(" (+{} more)", model.warnings.len() - 1));
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use ov3d_core::Scene;

    #[test]
    fn test_describe_empty_viewer() {
        assert_eq!(describe(&Viewer::default()), "No model");
    }

    #[test]
    fn test_describe_builtin_cube() {
        let mut viewer = Viewer::default();
        viewer.show(None, Scene::cube(1.0), Vec::new()).unwrap();
        assert_eq!(describe(&viewer), "cube: 8 vertices, 6 faces, 0 materials");
    }
}
