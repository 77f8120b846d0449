use super::id::MaterialId;
use super::material::PrintedMaterial;

/// カタログ — 集約ルート。挿入順を保持し、IDの重複を許す。
/// 検索はすべて線形走査。
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    items: Vec<PrintedMaterial>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 末尾に追加する。
    pub fn add(&mut self, material: PrintedMaterial) {
        self.items.push(material);
    }

    pub fn extend(&mut self, materials: impl IntoIterator<Item = PrintedMaterial>) {
        self.items.extend(materials);
    }

    /// IDが一致するエントリを**すべて**削除する。1件でも削除したら true。
    pub fn remove_by_id(&mut self, id: MaterialId) -> bool {
        let before = self.items.len();
        self.items.retain(|m| m.id() != id);
        self.items.len() != before
    }

    /// 最初に一致したエントリ
    pub fn find_by_id(&self, id: MaterialId) -> Option<&PrintedMaterial> {
        self.items.iter().find(|m| m.id() == id)
    }

    /// 「出版年」検索。独立した年フィールドは無く、`pages` と比較する。
    pub fn find_by_year(&self, year: u32) -> Vec<&PrintedMaterial> {
        self.items.iter().filter(|m| m.pages() == year).collect()
    }

    /// Literatureのみ対象。著者名の完全一致（大文字小文字を無視）。
    pub fn find_by_author(&self, name: &str) -> Vec<&PrintedMaterial> {
        let query = name.to_lowercase();
        self.items
            .iter()
            .filter(|m| m.author().is_some_and(|a| a.to_lowercase() == query))
            .collect()
    }

    pub fn all(&self) -> &[PrintedMaterial] {
        &self.items
    }

    /// 表示文字列を改行で連結する（末尾改行なし）。
    pub fn render(&self) -> String {
        self.items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
