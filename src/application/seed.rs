use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::model::catalogue::Catalogue;
use crate::domain::model::id::MaterialId;
use crate::domain::model::material::{MaterialType, PrintedMaterial};

/// 起動時に投入する件数（種別ごと）
pub const DEFAULT_SEED_PER_KIND: usize = 50;

/// ランダムに採番するIDの上限（9桁）
const MAX_RANDOM_ID: u64 = 1_000_000_000;

const BOOK_TITLES: &[&str] = &[
    "Il barone rampante",
    "La coscienza di Zeno",
    "Il Gattopardo",
    "Se questo è un uomo",
    "Il giorno della civetta",
    "La luna e i falò",
    "Cristo si è fermato a Eboli",
    "Il deserto dei Tartari",
    "Le città invisibili",
    "Il fu Mattia Pascal",
    "I Malavoglia",
    "La storia",
    "Il sistema periodico",
    "Lessico famigliare",
    "Il giardino dei Finzi-Contini",
    "Uno, nessuno e centomila",
];

const AUTHORS: &[&str] = &[
    "Frodo Baggins",
    "Samwise Gamgee",
    "Gandalf the Grey",
    "Aragorn",
    "Legolas",
    "Gimli",
    "Boromir",
    "Galadriel",
    "Elrond",
    "Arwen Evenstar",
    "Éowyn",
    "Faramir",
    "Bilbo Baggins",
    "Meriadoc Brandybuck",
    "Peregrin Took",
    "Treebeard",
];

const GENRES: &[&str] = &[
    "Romanzo storico",
    "Fantascienza",
    "Fantasy",
    "Giallo",
    "Poesia",
    "Saggistica",
    "Biografia",
    "Horror",
    "Umoristico",
    "Avventura",
];

const PRODUCT_ADJECTIVES: &[&str] = &[
    "Ergonomic",
    "Rustic",
    "Sleek",
    "Incredible",
    "Gorgeous",
    "Practical",
    "Intelligent",
    "Durable",
];

const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Marble",
];

const PRODUCT_NOUNS: &[&str] = &[
    "Chair", "Car", "Computer", "Gloves", "Pants", "Shirt", "Table", "Shoes", "Hat", "Lamp",
];

/// 起動時のダミーデータ生成器。乱数源を差し替えれば決定的に動く。
pub struct SeedGenerator<R: Rng> {
    rng: R,
}

impl SeedGenerator<StdRng> {
    /// 同じseedなら同じ並びを返す。
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SeedGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// 指定種別のエントリを `count` 件生成する。
    pub fn generate(&mut self, count: usize, material_type: MaterialType) -> Vec<PrintedMaterial> {
        (0..count).map(|_| self.one(material_type)).collect()
    }

    /// Literature → Periodical の順で `per_kind` 件ずつ追加する。
    pub fn seed_catalogue(&mut self, catalogue: &mut Catalogue, per_kind: usize) {
        catalogue.extend(self.generate(per_kind, MaterialType::Literature));
        catalogue.extend(self.generate(per_kind, MaterialType::Periodical));
    }

    /// ランダムなID。一意性は保証しない。
    pub fn next_id(&mut self) -> MaterialId {
        MaterialId::new(self.rng.gen_range(0..MAX_RANDOM_ID))
    }

    fn one(&mut self, material_type: MaterialType) -> PrintedMaterial {
        match material_type {
            MaterialType::Literature => {
                let title = self.pick(BOOK_TITLES);
                let id = self.next_id();
                let author = self.pick(AUTHORS);
                let genre = self.pick(GENRES);
                let pages = self.rng.gen_range(50..=1200);
                PrintedMaterial::literature(id, title, pages, author, genre)
            }
            // 雑誌のページ数は生成しない（0固定）
            MaterialType::Periodical => {
                let title = format!(
                    "{} {} {}",
                    self.pick(PRODUCT_ADJECTIVES),
                    self.pick(PRODUCT_MATERIALS),
                    self.pick(PRODUCT_NOUNS)
                );
                let id = self.next_id();
                PrintedMaterial::periodical(id, title, 0)
            }
        }
    }

    fn pick(&mut self, pool: &'static [&'static str]) -> &'static str {
        pool[self.rng.gen_range(0..pool.len())]
    }
}
