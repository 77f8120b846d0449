//! Interactive shell for epibooks
//!
//! stdin (1行1コマンド) <-> application::CatalogueService
//!
//! Menu: A add, B remove, C find by ISBN, D find by year, E find by author,
//! F save, G list, 0 exit

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use rand::rngs::StdRng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};

use crate::application::error::AppError;
use crate::application::seed::{SeedGenerator, DEFAULT_SEED_PER_KIND};
use crate::application::service::CatalogueService;
use crate::domain::error::DomainError;
use crate::domain::model::id::{parse_number, MaterialId};
use crate::domain::model::material::{MaterialType, PrintedMaterial};
use crate::domain::repository::CatalogueRepository;
use crate::infra::text_store::{TextCatalogueRepository, DEFAULT_EXPORT_PATH};

const BANNER: &str = "--------------- Welcome to EpiBooks! ---------------";
const FAREWELL: &str = "Program terminated. Goodbye!";
const MENU: &[&str] = &[
    "Choose an option:",
    "A - Add an item",
    "B - Remove an item",
    "C - Find by ISBN",
    "D - Find by publication year",
    "E - Find by author",
    "F - Save the catalogue",
    "G - Show the catalogue",
    "0 - Exit",
];

/// 乱数seedを指定する環境変数
pub const SEED_ENV: &str = "EPIBOOKS_SEED";

// =============================================================================
// Public entry point
// =============================================================================

/// 起動設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub export_path: PathBuf,
    /// Noneならエントロピーから初期化する
    pub seed: Option<u64>,
    pub seed_per_kind: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            seed: None,
            seed_per_kind: DEFAULT_SEED_PER_KIND,
        }
    }
}

impl ShellConfig {
    /// 位置引数の書き出し先と `EPIBOOKS_SEED` から組み立てる。
    pub fn from_env(export_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let seed = parse_seed(std::env::var(SEED_ENV).ok())?;
        Ok(Self {
            export_path: export_path.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH)),
            seed,
            ..Self::default()
        })
    }
}

fn parse_seed(raw: Option<String>) -> anyhow::Result<Option<u64>> {
    raw.map(|s| {
        s.trim()
            .parse::<u64>()
            .with_context(|| format!("{SEED_ENV} must be an unsigned integer, got '{s}'"))
    })
    .transpose()
}

/// カタログを初期化してstdin/stdoutで対話ループを回す。
pub async fn run(config: ShellConfig) -> anyhow::Result<()> {
    let repo = TextCatalogueRepository::new(&config.export_path);
    let mut ids = match config.seed {
        Some(seed) => SeedGenerator::from_seed(seed),
        None => SeedGenerator::from_entropy(),
    };

    let mut service = CatalogueService::new(repo);
    service.seed(&mut ids, config.seed_per_kind);
    tracing::info!(export_path = %config.export_path.display(), "shell starting");

    let mut shell = Shell::new(service, ids);
    shell
        .run(
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
            tokio::io::stderr(),
        )
        .await
        .context("terminal I/O failed")
}

// =============================================================================
// Commands
// =============================================================================

/// メニューの1文字コマンド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    FindById,
    FindByYear,
    FindByAuthor,
    Save,
    List,
    Exit,
}

impl Command {
    /// 大文字小文字を区別しない。前後の空白は無視する。
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Self::Add),
            "B" => Some(Self::Remove),
            "C" => Some(Self::FindById),
            "D" => Some(Self::FindByYear),
            "E" => Some(Self::FindByAuthor),
            "F" => Some(Self::Save),
            "G" => Some(Self::List),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// 1フローの失敗。Input/Storageは表示してメニューに戻る。
#[derive(Debug, thiserror::Error)]
enum FlowError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    App(#[from] AppError),

    #[error("input closed")]
    EndOfInput,
}

impl From<DomainError> for FlowError {
    fn from(e: DomainError) -> Self {
        Self::App(AppError::Domain(e))
    }
}

// =============================================================================
// Console — 入出力のまとめ
// =============================================================================

struct Console<I, O, E> {
    lines: Lines<I>,
    out: O,
    err: E,
}

impl<I, O, E> Console<I, O, E>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    fn new(input: I, out: O, err: E) -> Self {
        Self {
            lines: input.lines(),
            out,
            err,
        }
    }

    async fn say(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(line.as_bytes()).await?;
        self.out.write_all(b"\n").await
    }

    async fn warn(&mut self, line: &str) -> io::Result<()> {
        self.err.write_all(line.as_bytes()).await?;
        self.err.write_all(b"\n").await
    }

    /// 出力をflushしてから1行読む。EOFならNone。
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        self.out.flush().await?;
        self.err.flush().await?;
        self.lines.next_line().await
    }

    async fn expect_line(&mut self) -> Result<String, FlowError> {
        self.read_line().await?.ok_or(FlowError::EndOfInput)
    }

    /// テキスト項目（タイトル・著者・ジャンル）は前後の空白を除いて保持する。
    async fn expect_text(&mut self) -> Result<String, FlowError> {
        Ok(self.expect_line().await?.trim().to_string())
    }

    async fn flush(&mut self) -> io::Result<()> {
        self.out.flush().await?;
        self.err.flush().await
    }
}

// =============================================================================
// Shell
// =============================================================================

/// メニュー駆動の対話シェル。カタログは `CatalogueService` 経由で操作する。
pub struct Shell<R: CatalogueRepository> {
    service: CatalogueService<R>,
    ids: SeedGenerator<StdRng>,
}

impl<R: CatalogueRepository> Shell<R> {
    /// `ids` は対話的に追加したエントリの採番に使う。
    pub fn new(service: CatalogueService<R>, ids: SeedGenerator<StdRng>) -> Self {
        Self { service, ids }
    }

    pub fn service(&self) -> &CatalogueService<R> {
        &self.service
    }

    /// `0` かEOFまでコマンドを処理する。端末I/Oの失敗だけがErrになる。
    pub async fn run<I, O, E>(&mut self, input: I, out: O, err: E) -> io::Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        let mut console = Console::new(input, out, err);
        console.say(BANNER).await?;

        loop {
            for line in MENU {
                console.say(line).await?;
            }
            let Some(choice) = console.read_line().await? else {
                break;
            };

            let command = match Command::parse(&choice) {
                Some(Command::Exit) => break,
                Some(command) => command,
                None => {
                    console.warn("Invalid choice, try again.").await?;
                    continue;
                }
            };
            tracing::debug!(?command, "dispatch");

            match self.dispatch(command, &mut console).await {
                Ok(()) => {}
                Err(FlowError::Io(e)) => return Err(e),
                Err(FlowError::EndOfInput) => break,
                Err(FlowError::App(AppError::Storage(e))) => {
                    console
                        .warn(&format!("Error while saving the file: {e}"))
                        .await?;
                }
                Err(FlowError::App(e)) => console.warn(&e.to_string()).await?,
            }
        }

        console.say(FAREWELL).await?;
        console.flush().await
    }

    async fn dispatch<I, O, E>(
        &mut self,
        command: Command,
        console: &mut Console<I, O, E>,
    ) -> Result<(), FlowError>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        match command {
            Command::Add => self.add_flow(console).await,
            Command::Remove => self.remove_flow(console).await,
            Command::FindById => self.find_by_id_flow(console).await,
            Command::FindByYear => self.find_by_year_flow(console).await,
            Command::FindByAuthor => self.find_by_author_flow(console).await,
            Command::Save => {
                self.service.export()?;
                console.say("Catalogue saved to disk.").await?;
                Ok(())
            }
            Command::List => {
                if self.service.all().is_empty() {
                    console.say("The catalogue is empty.").await?;
                }
                for material in self.service.all() {
                    console.say(&material.to_string()).await?;
                }
                Ok(())
            }
            // runループ側で処理済み
            Command::Exit => Ok(()),
        }
    }

    async fn add_flow<I, O, E>(&mut self, console: &mut Console<I, O, E>) -> Result<(), FlowError>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        console
            .say("Add a literary work (L) or a periodical (P)?")
            .await?;
        let material_type: MaterialType = console.expect_line().await?.parse()?;

        let material = match material_type {
            MaterialType::Literature => {
                console
                    .say("Enter title, number of pages, author and genre (one per line):")
                    .await?;
                let title = console.expect_text().await?;
                let pages = parse_number::<u32>("pages", &console.expect_line().await?)?;
                let author = console.expect_text().await?;
                let genre = console.expect_text().await?;
                PrintedMaterial::literature(self.ids.next_id(), title, pages, author, genre)
            }
            MaterialType::Periodical => {
                console
                    .say("Enter title and number of pages (one per line):")
                    .await?;
                let title = console.expect_text().await?;
                let pages = parse_number::<u32>("pages", &console.expect_line().await?)?;
                PrintedMaterial::periodical(self.ids.next_id(), title, pages)
            }
        };

        let message = format!(
            "{} added to the catalogue with ISBN {}.",
            material.material_type().label(),
            material.id()
        );
        self.service.add(material);
        console.say(&message).await?;
        Ok(())
    }

    async fn remove_flow<I, O, E>(
        &mut self,
        console: &mut Console<I, O, E>,
    ) -> Result<(), FlowError>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        console.say("Enter the ISBN of the item to remove:").await?;
        let id: MaterialId = console.expect_line().await?.parse()?;
        if self.service.remove(id) {
            console.say("Item removed.").await?;
        } else {
            console.warn("ISBN not found!").await?;
        }
        Ok(())
    }

    async fn find_by_id_flow<I, O, E>(
        &mut self,
        console: &mut Console<I, O, E>,
    ) -> Result<(), FlowError>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        console.say("Enter the ISBN to search for:").await?;
        let id: MaterialId = console.expect_line().await?.parse()?;
        match self.service.find_by_id(id) {
            Some(material) => console.say(&material.to_string()).await?,
            None => console.say(&format!("No item with ISBN {id}.")).await?,
        }
        Ok(())
    }

    async fn find_by_year_flow<I, O, E>(
        &mut self,
        console: &mut Console<I, O, E>,
    ) -> Result<(), FlowError>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        console
            .say("Enter the publication year to search for:")
            .await?;
        let year = parse_number::<u32>("year", &console.expect_line().await?)?;
        let found: Vec<String> = self
            .service
            .find_by_year(year)
            .iter()
            .map(|m| m.to_string())
            .collect();
        print_results(console, &found).await?;
        Ok(())
    }

    async fn find_by_author_flow<I, O, E>(
        &mut self,
        console: &mut Console<I, O, E>,
    ) -> Result<(), FlowError>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        console.say("Enter the author to search for:").await?;
        let author = console.expect_line().await?;
        let found: Vec<String> = self
            .service
            .find_by_author(author.trim())
            .iter()
            .map(|m| m.to_string())
            .collect();
        print_results(console, &found).await?;
        Ok(())
    }
}

async fn print_results<I, O, E>(console: &mut Console<I, O, E>, lines: &[String]) -> io::Result<()>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    if lines.is_empty() {
        return console.say("No results.").await;
    }
    for line in lines {
        console.say(line).await?;
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
