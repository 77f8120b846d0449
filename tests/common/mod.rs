//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;

use epibooks::application::service::CatalogueService;
use epibooks::domain::model::catalogue::Catalogue;
use epibooks::domain::model::id::MaterialId;
use epibooks::domain::model::material::PrintedMaterial;
use epibooks::domain::repository::CatalogueRepository;

// =============================================================================
// InMemoryRepo — テスト用リポジトリ
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("in-memory store error")]
pub struct InMemoryError;

/// ファイルI/O不要のインメモリリポジトリ。保存のたびに書き出し内容を記録する。
pub struct InMemoryRepo {
    exports: RefCell<Vec<String>>,
    fail: bool,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            exports: RefCell::new(Vec::new()),
            fail: false,
        }
    }

    /// 常に保存に失敗するリポジトリ
    pub fn failing() -> Self {
        Self {
            exports: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub fn last_export(&self) -> Option<String> {
        self.exports.borrow().last().cloned()
    }

    pub fn export_count(&self) -> usize {
        self.exports.borrow().len()
    }
}

impl CatalogueRepository for InMemoryRepo {
    type Error = InMemoryError;

    fn save(&self, catalogue: &Catalogue) -> Result<(), Self::Error> {
        if self.fail {
            return Err(InMemoryError);
        }
        self.exports.borrow_mut().push(catalogue.render());
        Ok(())
    }
}

// =============================================================================
// TestCatalogue — テスト用カタログ作成ヘルパー
// =============================================================================

pub struct TestCatalogue;

impl TestCatalogue {
    /// 標準的なテスト用カタログ:
    /// ```text
    /// 12345 Literature "Il Nome della Rosa"     500  Umberto Eco / Romanzo storico
    /// 999   Periodical "Focus"                  100
    /// 777   Literature "Il barone rampante"     1957 Italo Calvino / Romanzo
    /// 888   Periodical "Internazionale"         1957
    /// 555   Literature "Il pendolo di Foucault" 509  Umberto Eco / Romanzo
    /// ```
    pub fn standard() -> Catalogue {
        let mut c = Catalogue::new();
        c.add(Self::rosa());
        c.add(Self::focus());
        c.add(PrintedMaterial::literature(
            MaterialId::new(777),
            "Il barone rampante",
            1957,
            "Italo Calvino",
            "Romanzo",
        ));
        c.add(PrintedMaterial::periodical(
            MaterialId::new(888),
            "Internazionale",
            1957,
        ));
        c.add(PrintedMaterial::literature(
            MaterialId::new(555),
            "Il pendolo di Foucault",
            509,
            "Umberto Eco",
            "Romanzo",
        ));
        c
    }

    pub fn rosa() -> PrintedMaterial {
        PrintedMaterial::literature(
            MaterialId::new(12345),
            "Il Nome della Rosa",
            500,
            "Umberto Eco",
            "Romanzo storico",
        )
    }

    pub fn focus() -> PrintedMaterial {
        PrintedMaterial::periodical(MaterialId::new(999), "Focus", 100)
    }

    pub fn service_with(catalogue: Catalogue) -> CatalogueService<InMemoryRepo> {
        CatalogueService::with_catalogue(InMemoryRepo::new(), catalogue)
    }
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
