//! Bookmark Gallery: browse a browser bookmarks export from the terminal.
//!
//! Imports one exported bookmarks HTML file, categorizes every link and prints
//! the filtered gallery (or its category and folder tallies).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use bookmark_gallery::app::App;
use bookmark_gallery::logging;
use bookmark_gallery::managers::gallery_manager::GalleryManagerTrait;
use bookmark_gallery::services::settings_engine::SettingsEngineTrait;
use bookmark_gallery::types::filter::{Selection, SortOrder, Tally};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Document,
    Newest,
    Oldest,
    Title,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Document => SortOrder::Document,
            SortArg::Newest => SortOrder::NewestFirst,
            SortArg::Oldest => SortOrder::OldestFirst,
            SortArg::Title => SortOrder::Title,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "bookmark-gallery", version, about)]
struct Cli {
    /// Exported bookmarks HTML file
    file: PathBuf,

    /// Case-insensitive text to look for in titles and URLs
    #[arg(short, long, default_value = "")]
    search: String,

    /// Only show bookmarks in this category
    #[arg(short, long, conflicts_with = "folder")]
    category: Option<String>,

    /// Narrow a --category selection to one of its sub-categories
    #[arg(long, requires = "category")]
    sub_category: Option<String>,

    /// Only show bookmarks from this folder
    #[arg(short, long)]
    folder: Option<String>,

    /// Ordering of the printed bookmarks (defaults to the configured order)
    #[arg(long, value_enum)]
    sort: Option<SortArg>,

    /// Print category and folder counts instead of bookmarks
    #[arg(short, long)]
    tallies: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log import details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn selection(&self) -> Option<Selection> {
        match (&self.category, &self.sub_category, &self.folder) {
            (Some(category), Some(sub), _) => Some(Selection::sub_category(category, sub)),
            (Some(category), None, _) => Some(Selection::category(category)),
            (None, _, Some(folder)) => Some(Selection::folder(folder)),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.as_ref().map(|p| p.to_string_lossy().to_string());
    let mut app = App::new(config_path)?;

    let default_filter = if cli.verbose {
        "bookmark_gallery=debug".to_string()
    } else {
        app.settings_engine.get_settings().logging.filter.clone()
    };
    logging::init_logging(&default_filter);
    app.report_settings_source();

    app.import_file(Some(&cli.file)).await?;

    if let Some(sort) = cli.sort {
        app.gallery.set_sort_order(sort.into());
    }
    app.gallery.set_search_term(&cli.search);
    if let Some(selection) = cli.selection() {
        app.gallery.toggle_selection(selection);
    }

    if cli.tallies {
        let categories = app.gallery.category_tallies();
        let folders = app.gallery.folder_tallies();
        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "categories": categories,
                    "folders": folders,
                }))?
            );
        } else {
            print_tallies("Categories", &categories);
            print_tallies("Folders", &folders);
        }
        return Ok(());
    }

    let visible = app.gallery.visible();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    for bookmark in &visible {
        let category = match &bookmark.sub_category {
            Some(sub) => format!("{} / {}", bookmark.category, sub),
            None => bookmark.category.clone(),
        };
        println!("{}", bookmark.title);
        println!("    {}", bookmark.url);
        println!(
            "    {} | {} | added {}",
            category,
            bookmark.folder,
            bookmark.date_added.format("%Y-%m-%d")
        );
    }
    println!(
        "{} of {} bookmarks shown",
        visible.len(),
        app.gallery.bookmarks().len()
    );
    Ok(())
}

fn print_tallies(heading: &str, tallies: &[Tally]) {
    println!("{} ({})", heading, tallies.len());
    for tally in tallies {
        println!("  {:<32} {:>5}", tally.label, tally.count);
        for child in &tally.children {
            println!("    {:<30} {:>5}", child.label, child.count);
        }
    }
}
