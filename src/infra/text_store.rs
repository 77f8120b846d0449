use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::model::catalogue::Catalogue;
use crate::domain::repository::CatalogueRepository;

/// 既定の書き出し先（作業ディレクトリ相対）
pub const DEFAULT_EXPORT_PATH: &str = "src/catalogue.txt";

#[derive(Debug, thiserror::Error)]
pub enum TextStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// プレーンテキストによるCatalogueRepository実装。
/// 1行 = 1エントリの表示文字列。保存のたびに上書きする。
pub struct TextCatalogueRepository {
    path: PathBuf,
}

impl TextCatalogueRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogueRepository for TextCatalogueRepository {
    type Error = TextStoreError;

    fn save(&self, catalogue: &Catalogue) -> Result<(), Self::Error> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        // 一時ファイルは失敗時にdropで削除される
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(catalogue.render().as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::id::MaterialId;
    use crate::domain::model::material::PrintedMaterial;

    fn sample() -> Catalogue {
        let mut c = Catalogue::new();
        c.add(PrintedMaterial::literature(
            MaterialId::new(12345),
            "Il Nome della Rosa",
            500,
            "Umberto Eco",
            "Romanzo storico",
        ));
        c.add(PrintedMaterial::periodical(MaterialId::new(999), "Focus", 100));
        c
    }

    #[test]
    fn save_writes_one_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("catalogue.txt");
        let repo = TextCatalogueRepository::new(&path);

        let catalogue = sample();
        repo.save(&catalogue).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], catalogue.all()[0].to_string());
        assert_eq!(lines[1], catalogue.all()[1].to_string());
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn save_keeps_unrelated_sibling_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogue.txt");
        let sibling = dir.path().join("catalogue.tmp");
        std::fs::write(&sibling, "user notes").unwrap();

        TextCatalogueRepository::new(&path).save(&sample()).unwrap();

        assert_eq!(std::fs::read_to_string(&sibling).unwrap(), "user notes");
        assert_eq!(dir_entries(dir.path()), vec!["catalogue.tmp", "catalogue.txt"]);
    }

    #[test]
    fn failed_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogue.txt");
        std::fs::create_dir(&path).unwrap();

        let result = TextCatalogueRepository::new(&path).save(&sample());

        assert!(matches!(result, Err(TextStoreError::Io(_))));
        assert_eq!(dir_entries(dir.path()), vec!["catalogue.txt"]);
        assert!(path.is_dir());
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogue.txt");
        let repo = TextCatalogueRepository::new(&path);

        repo.save(&sample()).unwrap();
        let mut smaller = Catalogue::new();
        smaller.add(PrintedMaterial::periodical(MaterialId::new(1), "Wired", 80));
        repo.save(&smaller).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[Periodical] ISBN 1 | \"Wired\" | 80 pages");
    }

    #[test]
    fn save_into_unwritable_location_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let repo = TextCatalogueRepository::new(blocker.join("catalogue.txt"));
        let result = repo.save(&sample());
        assert!(matches!(result, Err(TextStoreError::Io(_))));
    }
}
