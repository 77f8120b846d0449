use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::id::MaterialId;
use crate::domain::error::DomainError;

/// 印刷物の種別タグ。生成やサブタイプ選択に使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    /// 書籍（著者・ジャンルあり）
    Literature,
    /// 雑誌・定期刊行物
    Periodical,
}

impl MaterialType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Literature => "Literature",
            Self::Periodical => "Periodical",
        }
    }
}

impl FromStr for MaterialType {
    type Err = DomainError;

    /// `L`/`P`、旧名の `B`(book)/`M`(magazine) も受け付ける。大文字小文字は区別しない。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "B" => Ok(Self::Literature),
            "P" | "M" => Ok(Self::Periodical),
            _ => Err(DomainError::InvalidMaterialType(s.to_string())),
        }
    }
}

/// 種別ごとの固有属性。著者とジャンルは Literature にしか存在しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    Literature { author: String, genre: String },
    Periodical,
}

impl MaterialKind {
    pub fn material_type(&self) -> MaterialType {
        match self {
            Self::Literature { .. } => MaterialType::Literature,
            Self::Periodical => MaterialType::Periodical,
        }
    }
}

/// カタログの1エントリ。生成後は不変。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintedMaterial {
    id: MaterialId,
    title: String,
    /// 出版年検索もこの値を対象にする（`Catalogue::find_by_year` 参照）
    pages: u32,
    kind: MaterialKind,
}

impl PrintedMaterial {
    pub fn literature(
        id: MaterialId,
        title: impl Into<String>,
        pages: u32,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            pages,
            kind: MaterialKind::Literature {
                author: author.into(),
                genre: genre.into(),
            },
        }
    }

    pub fn periodical(id: MaterialId, title: impl Into<String>, pages: u32) -> Self {
        Self {
            id,
            title: title.into(),
            pages,
            kind: MaterialKind::Periodical,
        }
    }

    pub fn id(&self) -> MaterialId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn material_type(&self) -> MaterialType {
        self.kind.material_type()
    }

    pub fn author(&self) -> Option<&str> {
        match &self.kind {
            MaterialKind::Literature { author, .. } => Some(author),
            MaterialKind::Periodical => None,
        }
    }

    pub fn genre(&self) -> Option<&str> {
        match &self.kind {
            MaterialKind::Literature { genre, .. } => Some(genre),
            MaterialKind::Periodical => None,
        }
    }
}

impl fmt::Display for PrintedMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ISBN {} | \"{}\" | {} pages",
            self.material_type().label(),
            self.id,
            self.title,
            self.pages
        )?;
        if let MaterialKind::Literature { author, genre } = &self.kind {
            write!(f, " | {author} | {genre}")?;
        }
        Ok(())
    }
}
