//! Command handlers
//!
//! Each handler receives the loaded configuration record explicitly and
//! reports to the console it is given. Handlers that change the record
//! save it through the [`ConfigStore`] before returning.

use crate::cli::InputProvider;
use crate::config::{
    changefreq_warning, priority_warning, to_pretty_json, ConfigStore, PriorityMap, SiteConfig,
    Upsert,
};
use crate::error::{CommandError, Result};
use crate::sitemap::{output_path, Scanner, Sitemap};
use crate::ui::{Console, Verbosity};
use std::io::Write;
use std::path::PathBuf;

/// A parsed command line, ready to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Generate(GenerateOptions),
    ViewConfig,
    SetPriority { path: String, priority: String },
    DeletePriority,
    SetChangefreq(String),
    SetSpecificPriority { path: String, priority: String },
    DeleteSpecificPriority,
    ListSettings,
    Version,
}

/// Flags accepted by `generate`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Replaces the configured directory, and is saved
    pub directory: Option<String>,
    /// Replaces the configured base URL, and is saved
    pub base_url: Option<String>,
    pub verbose: bool,
}

/// Everything a command needs besides the configuration record
pub struct CommandContext<'a, W: Write, I: InputProvider> {
    pub store: ConfigStore,
    pub console: &'a mut Console<W>,
    pub input: &'a mut I,
}

impl<'a, W: Write, I: InputProvider> CommandContext<'a, W, I> {
    pub fn new(store: ConfigStore, console: &'a mut Console<W>, input: &'a mut I) -> Self {
        CommandContext {
            store,
            console,
            input,
        }
    }
}

/// The two path-to-priority tables held in the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTable {
    /// `priorities`
    Paths,
    /// `specific_pages`
    SpecificPages,
}

impl PriorityTable {
    fn of(self, config: &SiteConfig) -> &PriorityMap {
        match self {
            PriorityTable::Paths => &config.priorities,
            PriorityTable::SpecificPages => &config.specific_pages,
        }
    }

    fn of_mut(self, config: &mut SiteConfig) -> &mut PriorityMap {
        match self {
            PriorityTable::Paths => &mut config.priorities,
            PriorityTable::SpecificPages => &mut config.specific_pages,
        }
    }

    fn existing_notice(self, path: &str, priority: &str) -> String {
        match self {
            PriorityTable::Paths => format!(
                "Priority for path '{}' already exists. Updating priority to {}.",
                path, priority
            ),
            PriorityTable::SpecificPages => format!(
                "Specific priority for page '{}' already exists. Updating priority to {}.",
                path, priority
            ),
        }
    }

    fn added_message(self, path: &str, priority: &str) -> String {
        match self {
            PriorityTable::Paths => format!("Added priority {} for path {}.", priority, path),
            PriorityTable::SpecificPages => {
                format!("Added specific priority {} for page {}.", priority, path)
            }
        }
    }

    fn listing_header(self) -> &'static str {
        match self {
            PriorityTable::Paths => "Current priorities:",
            PriorityTable::SpecificPages => "Current specific page priorities:",
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            PriorityTable::Paths => "No priorities to delete.",
            PriorityTable::SpecificPages => "No specific page priorities to delete.",
        }
    }

    fn prompt(self, max_index: usize) -> String {
        let subject = match self {
            PriorityTable::Paths => "path",
            PriorityTable::SpecificPages => "specific page path",
        };
        format!(
            "Enter the number corresponding to the {} to delete (0-{}): ",
            subject, max_index
        )
    }

    fn deleted_message(self, path: &str) -> String {
        match self {
            PriorityTable::Paths => format!("Deleted priority for path '{}'.", path),
            PriorityTable::SpecificPages => {
                format!("Deleted specific page priority for path '{}'.", path)
            }
        }
    }
}

/// Load the configuration and run `action` against it
pub fn execute<W: Write, I: InputProvider>(
    action: &Action,
    ctx: &mut CommandContext<'_, W, I>,
) -> Result<()> {
    if let Action::Version = action {
        ctx.console
            .line(&format!("site-mapper {}", crate::VERSION))?;
        return Ok(());
    }

    let mut config = ctx.store.load()?;

    match action {
        Action::Generate(options) => {
            generate(&mut config, options, ctx)?;
        }
        Action::ViewConfig => view_config(&config, ctx.console)?,
        Action::SetPriority { path, priority } => {
            set_priority(&mut config, PriorityTable::Paths, path, priority, ctx)?;
        }
        Action::DeletePriority => {
            delete_priority(&mut config, PriorityTable::Paths, ctx)?;
        }
        Action::SetChangefreq(value) => set_changefreq(&mut config, value, ctx)?,
        Action::SetSpecificPriority { path, priority } => {
            set_priority(&mut config, PriorityTable::SpecificPages, path, priority, ctx)?;
        }
        Action::DeleteSpecificPriority => {
            delete_priority(&mut config, PriorityTable::SpecificPages, ctx)?;
        }
        Action::ListSettings => list_settings(&config, ctx.console)?,
        Action::Version => {}
    }

    Ok(())
}

/// Apply flag overrides, save them, then scan the directory and write
/// sitemap.xml into it
///
/// The whole document is built in memory first, so a failed scan leaves no
/// sitemap.xml behind.
pub fn generate<W: Write, I: InputProvider>(
    config: &mut SiteConfig,
    options: &GenerateOptions,
    ctx: &mut CommandContext<'_, W, I>,
) -> Result<PathBuf> {
    if let Some(directory) = &options.directory {
        config.directory = directory.clone();
    }
    if let Some(base_url) = &options.base_url {
        config.base_url = base_url.clone();
    }

    if config.directory.is_empty() || config.base_url.is_empty() {
        return Err(CommandError::MissingTarget.into());
    }

    ctx.store.save(config)?;

    if options.verbose {
        ctx.console.set_verbosity(Verbosity::Verbose);
    }

    let mut sitemap = Sitemap::new();
    for entry in Scanner::new(&config.directory, &config.base_url)? {
        let entry = entry?;
        ctx.console.debug(&format!("Added {}", entry.loc))?;
        sitemap.push(entry);
    }

    let path = output_path(&config.directory);
    sitemap.write_to(&path)?;

    ctx.console.success(&format!(
        "Sitemap generated successfully at {}",
        path.display()
    ))?;
    Ok(path)
}

/// Print the whole record as indented JSON
pub fn view_config<W: Write>(config: &SiteConfig, console: &mut Console<W>) -> Result<()> {
    console.line(&to_pretty_json(config)?)?;
    Ok(())
}

/// Insert or replace a priority in `table`, then save
pub fn set_priority<W: Write, I: InputProvider>(
    config: &mut SiteConfig,
    table: PriorityTable,
    path: &str,
    priority: &str,
    ctx: &mut CommandContext<'_, W, I>,
) -> Result<Upsert> {
    if let Some(warning) = priority_warning(priority) {
        ctx.console.warn(&warning)?;
    }

    let outcome = table.of_mut(config).upsert(path, priority);
    if let Upsert::Updated { .. } = outcome {
        ctx.console.warn(&table.existing_notice(path, priority))?;
    }

    ctx.store.save(config)?;
    ctx.console.success(&table.added_message(path, priority))?;
    Ok(outcome)
}

/// List `table` with indices, ask which entry to remove, then save
///
/// Returns the removed `(path, priority)`, or `None` when the table was
/// empty and nothing was asked.
pub fn delete_priority<W: Write, I: InputProvider>(
    config: &mut SiteConfig,
    table: PriorityTable,
    ctx: &mut CommandContext<'_, W, I>,
) -> Result<Option<(String, String)>> {
    let map = table.of(config);

    ctx.console.line(table.listing_header())?;
    for (i, path) in map.keys().enumerate() {
        ctx.console.line(&format!("{}: {}", i, path))?;
    }

    if map.is_empty() {
        ctx.console.line(table.empty_message())?;
        return Ok(None);
    }

    let count = map.len();
    ctx.console.prompt(&table.prompt(count - 1))?;
    let answer = ctx.input.read_line()?;

    let invalid = || CommandError::InvalidPathIndex {
        input: answer.trim().to_string(),
        count,
    };
    let index: usize = answer.trim().parse().map_err(|_| invalid())?;
    let (path, priority) = table.of_mut(config).remove_at(index).ok_or_else(invalid)?;

    ctx.store.save(config)?;
    ctx.console.success(&table.deleted_message(&path))?;
    Ok(Some((path, priority)))
}

/// Replace the change frequency, then save
pub fn set_changefreq<W: Write, I: InputProvider>(
    config: &mut SiteConfig,
    value: &str,
    ctx: &mut CommandContext<'_, W, I>,
) -> Result<()> {
    if let Some(warning) = changefreq_warning(value) {
        ctx.console.warn(&warning)?;
    }

    config.changefreq = value.to_string();
    ctx.store.save(config)?;
    ctx.console.success(&format!("Set changefreq to {}.", value))?;
    Ok(())
}

/// Print both priority tables and the change frequency
pub fn list_settings<W: Write>(config: &SiteConfig, console: &mut Console<W>) -> Result<()> {
    console.line("Current settings:")?;
    console.line(&format!("Priorities: {}", config.priorities))?;
    console.line(&format!("Change Frequency: {}", config.changefreq))?;
    console.line(&format!(
        "Specific Page Priorities: {}",
        config.specific_pages
    ))?;
    Ok(())
}
