use super::model::catalogue::Catalogue;

/// 書き出し専用の永続化抽象。Infra層が実装する。読み戻しは持たない。
pub trait CatalogueRepository {
    type Error: std::error::Error + Send + Sync + 'static;

    fn save(&self, catalogue: &Catalogue) -> Result<(), Self::Error>;
}
