//! These structs provide the CLI interface for the farelog CLI.

use crate::model::Category;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// farelog: A command-line tool for logging personal travel expenses.
///
/// Each trip you record has a category, a title, a price and a date/time, and
/// optionally a picture. The `list` command shows everything you have spent,
/// grouped by day with a running total. Data is kept in a single JSON file in
/// the farelog home directory; there is no server and nothing leaves your
/// machine.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the data directory, the config file and an empty expense store.
    ///
    /// This is the first command you should run. By default the data lives in
    /// $HOME/farelog; pass --home (or set FARELOG_HOME) to put it somewhere
    /// else.
    Init,
    /// Record a new expense.
    Add(AddArgs),
    /// Show all expenses grouped by day, with the running total.
    List,
    /// Delete expenses by id.
    Delete(DeleteArgs),
    /// Export the full collection as CSV.
    Export(ExportArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate
    /// for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where farelog data and configuration is held. Defaults
    /// to ~/farelog
    #[arg(long, env = "FARELOG_HOME", default_value_t = default_home())]
    home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, home: PathBuf) -> Self {
        Self {
            log_level,
            home: home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn home(&self) -> &DisplayPath {
        &self.home
    }
}

/// Args for the `farelog add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// The kind of trip: songthaew, moto, grab, other, or any free text.
    /// Known categories pre-fill the title and image.
    #[arg(long, default_value_t = Category::Other)]
    category: Category,

    /// What the expense was for. Defaults to the category's title.
    #[arg(long)]
    title: Option<String>,

    /// The price, e.g. "120" or "45.5".
    #[arg(long)]
    amount: Option<String>,

    /// When the trip happened, as an RFC 3339 timestamp like
    /// 2023-10-25T14:30:00+07:00. Defaults to now.
    #[arg(long)]
    date: Option<String>,

    /// A picture for the entry. Defaults to the category's image.
    #[arg(long)]
    image_url: Option<String>,
}

impl AddArgs {
    pub fn new(
        category: Category,
        title: Option<String>,
        amount: Option<String>,
        date: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            category,
            title,
            amount,
            date,
            image_url,
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

/// Args for the `farelog delete` command.
#[derive(Debug, Parser, Clone)]
pub struct DeleteArgs {
    /// One or more expense ids to delete. An id that matches nothing is
    /// skipped.
    #[arg(required = true, num_args = 1..)]
    ids: Vec<String>,
}

impl DeleteArgs {
    pub fn new(ids: Vec<impl Into<String>>) -> Self {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// Args for the `farelog export` command.
#[derive(Debug, Parser, Clone)]
pub struct ExportArgs {
    /// The file to write CSV to.
    #[arg(long)]
    output: PathBuf,
}

impl ExportArgs {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

fn default_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("farelog"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --home or FARELOG_HOME instead of relying on the default \
                farelog home directory. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from("farelog")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
