//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a status line.
    fn status(&mut self, text: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
///
/// Warnings go to stderr so stdout stays clean for module lists.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn status(&mut self, text: &str) {
        println!("{}", text);
    }
}
