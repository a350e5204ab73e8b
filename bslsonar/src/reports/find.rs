//! Find command report data structures.

use bslsonar_emit::{EmitError, Emitted, INCLUSIONS_MARKER};

use super::output::{Output, Report};

/// Report data from a find run.
#[derive(Debug)]
pub struct FindReport {
    /// Warning messages, with their location when known.
    pub warnings: Vec<String>,
    /// Number of subsystem descriptors matched.
    pub descriptors: usize,
    /// Number of distinct objects referenced by those subsystems.
    pub objects: usize,
    /// Number of module files emitted.
    pub modules: usize,
    /// What was done with the module list, or why it could not be written.
    pub emitted: Result<Emitted, EmitError>,
}

impl Report for FindReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.emitted {
            // the list itself is the output
            Ok(Emitted::Printed { .. }) => {}
            Ok(Emitted::Substituted { path, replacements }) => {
                if *replacements == 0 {
                    out.warning(&format!(
                        "no {} marker in '{}', file left unchanged",
                        INCLUSIONS_MARKER,
                        path.display()
                    ));
                }
                out.status(&format!("Updated: {} ({} modules)", path.display(), self.modules));
            }
            Ok(Emitted::Generated { path }) => {
                out.status(&format!(
                    "Generated: {} ({} modules)",
                    path.display(),
                    self.modules
                ));
            }
            // propagated by the caller once warnings are out
            Err(_) => {}
        }
    }
}
