//! Text-mode storefront and admin console.
//!
//! A thin presentation layer over [`CatalogStore`]: one command per line,
//! executed to completion, result rendered immediately. The session keeps
//! the storefront view state - the selected category tab and the current
//! search text - so browsing narrows by both at once, exactly as the store
//! queries do.
//!
//! Input and output are generic so whole sessions can be scripted in
//! tests; the binary wires up locked stdin and stdout.

use crate::errors::Result;
use crate::filter::{CatalogQuery, CategorySelection};
use crate::images::ImageSource;
use crate::models::{Category, WallpaperDraft, WallpaperRecord};
use crate::store::CatalogStore;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::debug;

const PROMPT: &str = "wallart> ";
const NO_MATCHES: &str = "No wallpapers found matching your search.";

/// One parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Browse,
    Category(String),
    Search(String),
    List,
    Show(i64),
    Categories,
    Add,
    Edit(i64),
    Feature(i64),
    Remove(i64),
    Help,
    Quit,
}

/// Splits a line into a command word and its argument, then maps it to a
/// [`Command`]. Errors are user-facing messages, not crate errors.
fn parse_command(line: &str) -> std::result::Result<Command, String> {
    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "browse" => Ok(Command::Browse),
        "category" => {
            if rest.is_empty() {
                Err("usage: category <id|all>".to_string())
            } else {
                Ok(Command::Category(rest.to_string()))
            }
        }
        "search" => Ok(Command::Search(rest.to_string())),
        "list" => Ok(Command::List),
        "show" => parse_id(rest, "show").map(Command::Show),
        "categories" => Ok(Command::Categories),
        "add" => Ok(Command::Add),
        "edit" => parse_id(rest, "edit").map(Command::Edit),
        "feature" => parse_id(rest, "feature").map(Command::Feature),
        "remove" | "delete" => parse_id(rest, "remove").map(Command::Remove),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}', try 'help'")),
    }
}

fn parse_id(arg: &str, command: &str) -> std::result::Result<i64, String> {
    if arg.is_empty() {
        return Err(format!("usage: {command} <id>"));
    }
    arg.parse()
        .map_err(|_| format!("'{arg}' is not a wallpaper id"))
}

/// Storefront badges for a record, e.g. `[New] [Featured]`.
fn badges(record: &WallpaperRecord) -> String {
    let mut parts = Vec::new();
    if record.is_new {
        parts.push("[New]");
    }
    if record.is_featured {
        parts.push("[Featured]");
    }
    parts.join(" ")
}

/// Price with its optional strikethrough reference, e.g.
/// `$89.99 (was $119.99)`.
fn price_tag(record: &WallpaperRecord) -> String {
    match record.original_price {
        Some(original) => format!("${:.2} (was ${original:.2})", record.price),
        None => format!("${:.2}", record.price),
    }
}

/// One catalog line for the browse and list views.
fn summary_line(record: &WallpaperRecord) -> String {
    let mut line = format!(
        "#{} {} [{}] {} ★ {:.1} ({} reviews)",
        record.id,
        record.name,
        record.category,
        price_tag(record),
        record.rating,
        record.reviews
    );
    let badge_text = badges(record);
    if !badge_text.is_empty() {
        line.push(' ');
        line.push_str(&badge_text);
    }
    line
}

/// The product detail card for `show`.
fn detail_card(record: &WallpaperRecord) -> String {
    let mut card = String::new();
    let badge_text = badges(record);
    if badge_text.is_empty() {
        card.push_str(&format!("{}\n", record.name));
    } else {
        card.push_str(&format!("{} {badge_text}\n", record.name));
    }
    card.push_str(&format!("Category: {}\n", record.category.label()));
    card.push_str(&format!("Price: {}\n", price_tag(record)));
    card.push_str(&format!(
        "Rating: ★ {:.1} ({} reviews)\n",
        record.rating, record.reviews
    ));
    if !record.image.is_empty() {
        card.push_str(&format!("Image: {}\n", record.image));
    }
    card.push_str(&format!("{}\n", record.description));
    card
}

/// `Name [current]` prompt labels for the edit form.
fn labeled(label: &str, current: Option<String>) -> String {
    match current {
        Some(value) if !value.is_empty() => format!("{label} [{value}]"),
        _ => label.to_string(),
    }
}

fn category_ids() -> String {
    Category::ALL
        .iter()
        .map(|category| category.id())
        .collect::<Vec<_>>()
        .join("/")
}

/// An interactive storefront and admin session over a catalog store.
pub struct Console<R, W, S> {
    store: CatalogStore,
    images: S,
    input: R,
    output: W,
    query: CatalogQuery,
}

impl<R: BufRead, W: Write, S: ImageSource> Console<R, W, S> {
    /// Creates a session over `store`, reading commands from `input` and
    /// rendering to `output`.
    pub fn new(store: CatalogStore, images: S, input: R, output: W) -> Self {
        Self {
            store,
            images,
            input,
            output,
            query: CatalogQuery::default(),
        }
    }

    /// The catalog as this session currently sees it.
    #[must_use]
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Consumes the session, handing the catalog back.
    #[must_use]
    pub fn into_store(self) -> CatalogStore {
        self.store
    }

    /// Runs the session until `quit` or end of input.
    ///
    /// Command failures are rendered and the session continues; only I/O
    /// failures end it early.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::Io`] when reading input or writing
    /// output fails.
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "WallArt Studio catalog - type 'help' for commands."
        )?;
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };
            if line.is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(message) => writeln!(self.output, "❌ {message}")?,
            }
        }
        Ok(())
    }

    /// Reads one trimmed line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        debug!("Executing console command: {:?}", command);
        match command {
            Command::Browse => self.render_browse(),
            Command::Category(input) => self.select_category(&input),
            Command::Search(text) => self.set_search(text),
            Command::List => self.render_list(),
            Command::Show(id) => self.render_show(id),
            Command::Categories => self.render_categories(),
            Command::Add => self.add_flow(),
            Command::Edit(id) => self.edit_flow(id),
            Command::Feature(id) => self.feature(id),
            Command::Remove(id) => self.remove(id),
            Command::Help => self.render_help(),
            Command::Quit => Ok(()),
        }
    }

    /// Storefront view: records matching the current category tab and
    /// search text.
    fn render_browse(&mut self) -> Result<()> {
        let heading = match self.query.category {
            CategorySelection::All => "All Wallpapers".to_string(),
            CategorySelection::Only(category) => category.label().to_string(),
        };
        if self.query.text.is_empty() {
            writeln!(self.output, "{heading}")?;
        } else {
            writeln!(self.output, "{heading} - search '{}'", self.query.text)?;
        }
        let matches = self.store.search(&self.query);
        Self::write_records(&mut self.output, &matches)
    }

    fn write_records(output: &mut W, records: &[&WallpaperRecord]) -> Result<()> {
        if records.is_empty() {
            writeln!(output, "{NO_MATCHES}")?;
            return Ok(());
        }
        for record in records {
            writeln!(output, "{}", summary_line(record))?;
        }
        Ok(())
    }

    fn select_category(&mut self, input: &str) -> Result<()> {
        match input.parse::<CategorySelection>() {
            Ok(selection) => {
                self.query.category = selection;
                self.render_browse()
            }
            Err(error) => {
                writeln!(self.output, "❌ {error}")?;
                Ok(())
            }
        }
    }

    /// Sets the sticky search text; an empty argument clears it.
    fn set_search(&mut self, text: String) -> Result<()> {
        self.query.text = text;
        self.render_browse()
    }

    /// Admin view: every record in insertion order, ignoring the filters.
    fn render_list(&mut self) -> Result<()> {
        writeln!(self.output, "Catalog ({} wallpapers)", self.store.len())?;
        let records: Vec<&WallpaperRecord> = self.store.list().iter().collect();
        Self::write_records(&mut self.output, &records)
    }

    fn render_show(&mut self, id: i64) -> Result<()> {
        match self.store.get(id) {
            Some(record) => write!(self.output, "{}", detail_card(record))?,
            None => writeln!(self.output, "❌ no wallpaper with id {id}")?,
        }
        Ok(())
    }

    fn render_categories(&mut self) -> Result<()> {
        writeln!(self.output, "Categories:")?;
        for category in Category::ALL {
            let definition = category.definition();
            writeln!(self.output, "  {:<10} {}", definition.id, definition.label)?;
        }
        Ok(())
    }

    /// Interactive add form: one prompt per field, validated on submit so
    /// every problem is reported at once.
    fn add_flow(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Add a new wallpaper (blank skips optional fields)."
        )?;
        let Some(draft) = self.collect_draft(None)? else {
            return Ok(());
        };
        match self.store.add(draft) {
            Ok(record) => writeln!(
                self.output,
                "✅ Wallpaper '{}' has been added to the collection (id {}).",
                record.name, record.id
            )?,
            Err(error) => writeln!(self.output, "❌ {error}")?,
        }
        Ok(())
    }

    /// Interactive edit form: prefilled with the current record, blank
    /// keeps a value, `-` clears an optional one.
    fn edit_flow(&mut self, id: i64) -> Result<()> {
        let Some(existing) = self.store.get(id).cloned() else {
            writeln!(self.output, "❌ no wallpaper with id {id}")?;
            return Ok(());
        };
        writeln!(
            self.output,
            "Editing '{}' (blank keeps the current value).",
            existing.name
        )?;
        let Some(draft) = self.collect_draft(Some(&existing))? else {
            return Ok(());
        };
        match self.store.update(id, draft) {
            Ok(record) => writeln!(
                self.output,
                "✅ Wallpaper '{}' has been updated.",
                record.name
            )?,
            Err(error) => writeln!(self.output, "❌ {error}")?,
        }
        Ok(())
    }

    fn feature(&mut self, id: i64) -> Result<()> {
        match self.store.toggle_featured(id) {
            Ok(record) => {
                let state = if record.is_featured {
                    "featured"
                } else {
                    "no longer featured"
                };
                writeln!(self.output, "✅ '{}' is {state}.", record.name)?;
            }
            Err(error) => writeln!(self.output, "❌ {error}")?,
        }
        Ok(())
    }

    fn remove(&mut self, id: i64) -> Result<()> {
        match self.store.remove(id) {
            Ok(record) => writeln!(
                self.output,
                "✅ Wallpaper '{}' has been removed from the collection.",
                record.name
            )?,
            Err(error) => writeln!(self.output, "❌ {error}")?,
        }
        Ok(())
    }

    fn render_help(&mut self) -> Result<()> {
        writeln!(self.output, "Commands:")?;
        writeln!(
            self.output,
            "  browse              storefront view with the current filters"
        )?;
        writeln!(self.output, "  category <id|all>   pick a category tab")?;
        writeln!(
            self.output,
            "  search [text]       set or clear the search text"
        )?;
        writeln!(
            self.output,
            "  list                every wallpaper, in insertion order"
        )?;
        writeln!(self.output, "  show <id>           product detail card")?;
        writeln!(self.output, "  categories          available categories")?;
        writeln!(self.output, "  add                 add a wallpaper (form)")?;
        writeln!(self.output, "  edit <id>           edit a wallpaper (form)")?;
        writeln!(
            self.output,
            "  feature <id>        toggle the featured badge"
        )?;
        writeln!(self.output, "  remove <id>         delete a wallpaper")?;
        writeln!(self.output, "  quit                end the session")?;
        Ok(())
    }

    /// Prompts for every form field in order. With `current` set (edit),
    /// blank input keeps the current value and `-` clears an optional
    /// one. Unparseable numbers and unknown categories are warned about
    /// and left unset so validation can flag the field. Returns `None`
    /// only at end of input.
    fn collect_draft(
        &mut self,
        current: Option<&WallpaperRecord>,
    ) -> Result<Option<WallpaperDraft>> {
        let Some(name_input) = self.prompt(&labeled("Name", current.map(|r| r.name.clone())))?
        else {
            return Ok(None);
        };
        let name = if name_input.is_empty() {
            current.map(|r| r.name.clone()).unwrap_or_default()
        } else {
            name_input
        };

        let Some(price_input) =
            self.prompt(&labeled("Price", current.map(|r| format!("{:.2}", r.price))))?
        else {
            return Ok(None);
        };
        let price = if price_input.is_empty() {
            current.map(|r| r.price)
        } else {
            self.parse_amount(&price_input)?
        };

        let Some(original_input) = self.prompt(&labeled(
            "Original price (optional, '-' clears)",
            current
                .and_then(|r| r.original_price)
                .map(|original| format!("{original:.2}")),
        ))?
        else {
            return Ok(None);
        };
        let original_price = match original_input.as_str() {
            "" => current.and_then(|r| r.original_price),
            "-" => None,
            other => self.parse_amount(other)?,
        };

        let Some(category_input) = self.prompt(&labeled(
            &format!("Category ({})", category_ids()),
            current.map(|r| r.category.id().to_string()),
        ))?
        else {
            return Ok(None);
        };
        let category = if category_input.is_empty() {
            current.map(|r| r.category)
        } else {
            match category_input.parse::<Category>() {
                Ok(category) => Some(category),
                Err(error) => {
                    writeln!(self.output, "⚠️ {error}")?;
                    None
                }
            }
        };

        let Some(description_input) =
            self.prompt(&labeled("Description", current.map(|r| r.description.clone())))?
        else {
            return Ok(None);
        };
        let description = if description_input.is_empty() {
            current.map(|r| r.description.clone()).unwrap_or_default()
        } else {
            description_input
        };

        let Some(image_input) = self.prompt(&labeled(
            "Image file (optional path, '-' clears)",
            current.map(|r| r.image.clone()).filter(|uri| !uri.is_empty()),
        ))?
        else {
            return Ok(None);
        };
        let image = match image_input.as_str() {
            "" => current.map(|r| r.image.clone()).unwrap_or_default(),
            "-" => String::new(),
            path => match self.images.acquire(Path::new(path)) {
                Ok(uri) => uri,
                Err(error) => {
                    writeln!(self.output, "⚠️ {error}, continuing without an image.")?;
                    current.map(|r| r.image.clone()).unwrap_or_default()
                }
            },
        };

        let Some(is_new) = self.prompt_flag("Mark as new", current.map(|r| r.is_new))? else {
            return Ok(None);
        };
        let Some(is_featured) =
            self.prompt_flag("Feature in storefront", current.map(|r| r.is_featured))?
        else {
            return Ok(None);
        };

        Ok(Some(WallpaperDraft {
            name,
            price,
            original_price,
            category,
            image,
            description,
            is_new,
            is_featured,
        }))
    }

    /// Writes an indented `label: ` prompt and reads one trimmed line;
    /// `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "  {label}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Parses a submitted amount, warning (and yielding `None`) on
    /// non-numeric input so validation can flag the field.
    fn parse_amount(&mut self, input: &str) -> Result<Option<f64>> {
        match input.parse::<f64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "⚠️ '{input}' is not a number")?;
                Ok(None)
            }
        }
    }

    /// Prompts a yes/no flag; blank keeps `current`, or `false` on add.
    fn prompt_flag(&mut self, label: &str, current: Option<bool>) -> Result<Option<bool>> {
        let default = current.unwrap_or(false);
        let hint = if default { "Y/n" } else { "y/N" };
        let Some(input) = self.prompt(&format!("{label}? [{hint}]"))? else {
            return Ok(None);
        };
        Ok(Some(match input.to_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        }))
    }
}
