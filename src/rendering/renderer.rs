use colored::Colorize;

use crate::filesystem::{Children, Entry};

/// Prefix repeated once per depth level in front of every rendered name.
pub const MARKER: &str = "├──";

/// Formats an [`Entry`] tree as one marker-indented line per node.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer {
    colorize: bool,
}

impl TreeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints directory names when enabled. Markers and file names stay plain.
    pub fn colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Renders the descendants of `root`; the root itself produces no line.
    pub fn render(&self, root: &Entry) -> String {
        match root.children() {
            Some(children) => self.render_children(children, 1),
            None => String::new(),
        }
    }

    /// Renders `children` with their names indented to `depth` markers.
    pub fn render_children(&self, children: &Children, depth: usize) -> String {
        let mut output = String::new();
        self.write_children(&mut output, children, depth);
        output
    }

    fn write_children(&self, output: &mut String, children: &Children, depth: usize) {
        for (name, entry) in children {
            output.push_str(&MARKER.repeat(depth));
            match entry {
                Entry::Directory(grandchildren) => {
                    self.write_directory_name(output, name);
                    output.push('\n');
                    self.write_children(output, grandchildren, depth + 1);
                }
                // Extensions are not shown.
                Entry::File { .. } => {
                    output.push_str(name);
                    output.push('\n');
                }
            }
        }
    }

    fn write_directory_name(&self, output: &mut String, name: &str) {
        if self.colorize {
            output.push_str(&name.blue().bold().to_string());
        } else {
            output.push_str(name);
        }
    }
}
