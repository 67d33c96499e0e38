use super::Document;
use crate::display::DisplaySink;
use crate::error::{Result, SheetError};
use crate::storage::{parse_grd, write_grd};
use std::path::{Path, PathBuf};

impl Document {
    /// Save to current file path.
    /// Returns the path saved to.
    pub fn save_file(&mut self) -> Result<PathBuf> {
        let Some(path) = &self.file_path else {
            return Err(SheetError::NoFilePath);
        };

        write_grd(path, &self.grid)?;
        self.modified = false;
        tracing::debug!(path = %path.display(), "saved sheet");
        Ok(path.clone())
    }

    /// Save to `path` and make it the current file path.
    pub fn save_file_as(&mut self, path: &Path) -> Result<PathBuf> {
        self.file_path = Some(path.to_path_buf());
        self.save_file()
    }

    /// Load a .grd file by replaying its entries as edits, in file order.
    ///
    /// The file is parsed completely before anything is applied, so a
    /// malformed file leaves the document untouched. Entries outside the grid
    /// are skipped with a warning.
    pub fn load_file(&mut self, path: &Path, sink: &mut impl DisplaySink) -> Result<()> {
        let entries = parse_grd(path)?;

        for (cell_ref, input) in &entries {
            if !cell_ref.in_bounds(self.rows(), self.cols()) {
                tracing::warn!(
                    cell = %cell_ref,
                    path = %path.display(),
                    "skipping cell outside the grid"
                );
                continue;
            }
            self.set_cell_value(*cell_ref, input, sink)?;
        }

        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        tracing::debug!(path = %path.display(), cells = entries.len(), "loaded sheet");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Document;
    use crate::display::RecordingSink;
    use crate::error::SheetError;
    use crate::SheetConfig;
    use sumgrid_engine::engine::CellRef;

    fn at(name: &str) -> CellRef {
        CellRef::from_str(name).unwrap()
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.grd");

        let mut doc = Document::default();
        let mut sink = RecordingSink::new();
        doc.set_cell_value(at("A1"), "5", &mut sink).unwrap();
        doc.set_cell_value(at("B1"), "=A1+1", &mut sink).unwrap();
        doc.set_cell_value(at("C1"), " spaced \"text\" ", &mut sink).unwrap();
        doc.save_file_as(&path).unwrap();
        assert!(!doc.modified);

        let mut loaded = Document::default();
        let mut sink = RecordingSink::new();
        loaded.load_file(&path, &mut sink).unwrap();

        for name in ["A1", "B1", "C1"] {
            assert_eq!(
                loaded.get_display_value(&at(name)).unwrap(),
                doc.get_display_value(&at(name)).unwrap()
            );
        }
        assert_eq!(loaded.file_path.as_deref(), Some(path.as_path()));
        assert!(!loaded.modified);
        assert_eq!(sink.last_for(&at("B1")), Some("6"));
    }

    #[test]
    fn test_load_replays_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order.grd");
        std::fs::write(&path, "A1: =B1+1\nB1: 5\n").unwrap();

        let mut doc = Document::default();
        doc.load_file(&path, &mut RecordingSink::new()).unwrap();
        // B1 arrives after A1, so A1 is refreshed by the sweep B1 triggers.
        assert_eq!(doc.get_display_value(&at("A1")).unwrap(), "6");
    }

    #[test]
    fn test_load_skips_cells_outside_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.grd");
        std::fs::write(&path, "A1: 1\nC3: 2\n").unwrap();

        let mut doc = Document::new(SheetConfig::new(2, 2).unwrap()).unwrap();
        doc.load_file(&path, &mut RecordingSink::new()).unwrap();
        assert_eq!(doc.get_display_value(&at("A1")).unwrap(), "1");
    }

    #[test]
    fn test_malformed_file_leaves_document_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.grd");
        std::fs::write(&path, "A1: 1\nnot a cell line\n").unwrap();

        let mut doc = Document::default();
        let err = doc.load_file(&path, &mut RecordingSink::new()).unwrap_err();
        assert!(matches!(err, SheetError::Parse { line: 2, .. }));
        assert_eq!(doc.get_display_value(&at("A1")).unwrap(), "");
        assert!(doc.file_path.is_none());
    }

    #[test]
    fn test_save_without_path() {
        let mut doc = Document::default();
        assert!(matches!(doc.save_file(), Err(SheetError::NoFilePath)));
    }
}
