use rand::Rng;

use crate::domain::model::catalogue::Catalogue;
use crate::domain::model::id::MaterialId;
use crate::domain::model::material::PrintedMaterial;
use crate::domain::repository::CatalogueRepository;

use super::error::AppError;
use super::seed::SeedGenerator;

/// カタログに対するユースケース。
/// カタログはメモリ上に保持し、`export` の時だけリポジトリへ書き出す。
pub struct CatalogueService<R: CatalogueRepository> {
    catalogue: Catalogue,
    repo: R,
}

impl<R: CatalogueRepository> CatalogueService<R> {
    /// 空のカタログで開始する。
    pub fn new(repo: R) -> Self {
        Self::with_catalogue(repo, Catalogue::new())
    }

    pub fn with_catalogue(repo: R, catalogue: Catalogue) -> Self {
        Self { catalogue, repo }
    }

    /// 種別ごとに `per_kind` 件のダミーデータを投入する。
    pub fn seed<G: Rng>(&mut self, generator: &mut SeedGenerator<G>, per_kind: usize) {
        generator.seed_catalogue(&mut self.catalogue, per_kind);
        tracing::info!(per_kind, total = self.catalogue.len(), "catalogue seeded");
    }

    pub fn add(&mut self, material: PrintedMaterial) {
        tracing::info!(id = %material.id(), kind = material.material_type().label(), "material added");
        self.catalogue.add(material);
    }

    /// 同じIDのエントリはすべて削除される。
    pub fn remove(&mut self, id: MaterialId) -> bool {
        let before = self.catalogue.len();
        let removed = self.catalogue.remove_by_id(id);
        if removed {
            tracing::info!(%id, count = before - self.catalogue.len(), "material removed");
        } else {
            tracing::debug!(%id, "remove: no match");
        }
        removed
    }

    pub fn find_by_id(&self, id: MaterialId) -> Option<&PrintedMaterial> {
        self.catalogue.find_by_id(id)
    }

    pub fn find_by_year(&self, year: u32) -> Vec<&PrintedMaterial> {
        self.catalogue.find_by_year(year)
    }

    pub fn find_by_author(&self, author: &str) -> Vec<&PrintedMaterial> {
        self.catalogue.find_by_author(author)
    }

    pub fn all(&self) -> &[PrintedMaterial] {
        self.catalogue.all()
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// カタログ全体をリポジトリへ書き出す。
    pub fn export(&self) -> Result<(), AppError> {
        self.repo.save(&self.catalogue).map_err(|e| {
            tracing::warn!(error = %e, "catalogue export failed");
            AppError::Storage(Box::new(e))
        })?;
        tracing::info!(entries = self.catalogue.len(), "catalogue exported");
        Ok(())
    }
}
