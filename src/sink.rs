//! style sink stuff
use {
    crate::theme::palette::ColorVariableMap,
    std::path::{Path, PathBuf},
    tracing::warn,
};

/// the live presentation layer the resolved mapping is pushed into
///
/// variables absent from the mapping are left at their prior/baseline value,
/// never cleared; apply failures must not propagate to the resolver
pub trait StyleSink {
    /// apply a resolved color mapping
    fn apply(&mut self, vars: &ColorVariableMap);
}

/// a sink that discards every mapping
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl StyleSink for NullSink {
    fn apply(&mut self, _vars: &ColorVariableMap) {}
}

/// a sink that renders the mapping as a `:root` CSS block into a file
///
/// intended for consumers that link a generated stylesheet; the file only
/// ever declares the variables present in the mapping, so the consumer's own
/// stylesheet keeps governing the rest
#[derive(Debug, Clone)]
pub struct CssFileSink {
    /// where the stylesheet is written
    path: PathBuf,
}

impl CssFileSink {
    /// make a sink writing to the given path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// the path of the generated stylesheet
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StyleSink for CssFileSink {
    fn apply(&mut self, vars: &ColorVariableMap) {
        let css = format!(":root {{\n{}}}\n", vars.to_css_vars());

        if let Err(e) = std::fs::write(&self.path, css) {
            warn!(path = %self.path.display(), error = %e, "failed to write theme stylesheet");
        }
    }
}

/// a sink recording every applied mapping, for tests and diagnostics
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// every mapping applied so far, oldest first
    pub applied: Vec<ColorVariableMap>,
}

impl RecordingSink {
    /// make a new empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// the most recently applied mapping
    pub fn last(&self) -> Option<&ColorVariableMap> {
        self.applied.last()
    }
}

impl StyleSink for RecordingSink {
    fn apply(&mut self, vars: &ColorVariableMap) {
        self.applied.push(vars.clone());
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::color::Color};

    #[test]
    fn test_css_file_sink_writes_root_block() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.css");

        let mut sink = CssFileSink::new(&path);
        sink.apply(&ColorVariableMap::new(
            Color::parse("#121212").unwrap(),
            Color::parse("#ffffff").unwrap(),
            Color::parse("#00ffff").unwrap(),
        ));

        let css = std::fs::read_to_string(&path).unwrap();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--background-color: #121212;"));
        assert!(!css.contains("--primary-color"));
    }

    #[test]
    fn test_recording_sink_records_in_order() {
        let mut sink = RecordingSink::default();
        let first = ColorVariableMap::new(
            Color::parse("#000000").unwrap(),
            Color::parse("#111111").unwrap(),
            Color::parse("#222222").unwrap(),
        );
        let second = ColorVariableMap::new(
            Color::parse("#ffffff").unwrap(),
            Color::parse("#333333").unwrap(),
            Color::parse("#007bff").unwrap(),
        );

        sink.apply(&first);
        sink.apply(&second);

        assert_eq!(sink.applied, vec![first, second]);
    }
}
