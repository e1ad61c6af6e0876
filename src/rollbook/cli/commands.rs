//! # CLI Layer
//!
//! This module is **one possible UI client** for rollbook. It is the only place
//! that parses arguments, writes to stdout and reads or writes user-chosen files
//! (import sources and export targets).
//!
//! - `run()`: parses arguments, sets up logging and dispatches
//! - `handle_*()`: per-command handlers that call the API and render the result
//!
//! Business rules live behind [`RollbookApi`]; handlers only translate flags
//! into API calls and `CmdResult`s into text.

use super::logging::init_logging;
use super::render::{
    print_messages, render_full_students, render_stats, render_student_list, render_text_list,
};
use super::setup::{Cli, Commands};
use chrono::Local;
use clap::Parser;
use rollbook::api::{CmdMessage, ConfigAction, RollbookApi, ThemeAction};
use rollbook::commands::export::default_file_name;
use rollbook::commands::StudentPatch;
use rollbook::error::{Result, RollbookError};
use rollbook::init::{initialize, RollbookContext};
use rollbook::model::{StudentInput, ThemePreference, ViewMode, Year};
use rollbook::query::{SortKey, ViewCriteria};
use rollbook::store::fs_backend::FsBackend;
use std::path::{Path, PathBuf};
use tracing::debug;

type Api = RollbookApi<FsBackend>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize()?;

    match cli.command {
        Some(Commands::Add {
            name,
            roll_no,
            department,
            year,
            email,
            phone,
        }) => handle_add(
            &mut ctx.api,
            StudentInput {
                name,
                roll_no,
                department,
                year,
                email,
                phone,
            },
        ),
        Some(Commands::List {
            search,
            department,
            year,
            sort,
            view,
        }) => {
            let filters = ListFilters {
                search,
                department,
                year,
                sort,
                view,
            };
            handle_list(&ctx, filters)
        }
        Some(Commands::View { selectors }) => handle_view(&ctx.api, &selectors),
        Some(Commands::Edit {
            selector,
            name,
            roll_no,
            department,
            year,
            email,
            phone,
        }) => {
            let patch = StudentPatch {
                name,
                roll_no,
                department,
                year,
                email,
                phone,
            };
            handle_edit(&mut ctx.api, &selector, &patch)
        }
        Some(Commands::Delete { selector }) => handle_delete(&mut ctx.api, &selector),
        Some(Commands::Import { path }) => handle_import(&mut ctx.api, &path),
        Some(Commands::Export { output, stdout }) => handle_export(&ctx, output, stdout),
        Some(Commands::Sample) => handle_sample(&mut ctx.api),
        Some(Commands::Departments) => handle_departments(&ctx.api),
        Some(Commands::Stats) => handle_stats(&ctx.api),
        Some(Commands::Theme { value }) => handle_theme(&ctx.api, value),
        Some(Commands::Config { key, value }) => handle_config(&ctx.api, key, value),
        None => handle_list(&ctx, ListFilters::default()),
    }
}

#[derive(Debug, Default)]
struct ListFilters {
    search: Option<String>,
    department: Option<String>,
    year: Option<Year>,
    sort: Option<String>,
    view: Option<ViewMode>,
}

impl ListFilters {
    /// Flags override the configured defaults; an empty department means "all".
    fn criteria(&self, default_sort: SortKey) -> ViewCriteria {
        ViewCriteria {
            search: self.search.clone().unwrap_or_default(),
            department: self.department.clone().filter(|d| !d.is_empty()),
            year: self.year,
            sort: self
                .sort
                .as_deref()
                .map(SortKey::from)
                .unwrap_or(default_sort),
        }
    }
}

fn handle_add(api: &mut Api, input: StudentInput) -> Result<()> {
    let result = api.create_student(input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &RollbookContext, filters: ListFilters) -> Result<()> {
    let criteria = filters.criteria(ctx.config.sort_key());
    let view = filters.view.unwrap_or(ctx.config.default_view);
    debug!(?criteria, %view, "listing students");

    let result = ctx.api.list_students(&criteria)?;
    let theme = ctx.api.store().theme();
    let has_records = !ctx.api.store().is_empty();

    print!(
        "{}",
        render_student_list(&result.listed_students, view, theme, has_records)
    );
    if let Some(stats) = &result.stats {
        if stats.total > 0 {
            println!();
            print!("{}", render_stats(stats));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &Api, selectors: &[String]) -> Result<()> {
    let result = api.view_students(selectors)?;
    print!(
        "{}",
        render_full_students(&result.listed_students, api.store().theme())
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(api: &mut Api, selector: &str, patch: &StudentPatch) -> Result<()> {
    let result = api.edit_student(selector, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut Api, selector: &str) -> Result<()> {
    let result = api.delete_student(selector)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(api: &mut Api, path: &Path) -> Result<()> {
    let payload = std::fs::read_to_string(path)?;
    let result = api.import_students(&payload)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &RollbookContext, output: Option<PathBuf>, to_stdout: bool) -> Result<()> {
    let result = ctx.api.export_students()?;
    let exported = result
        .exported
        .ok_or_else(|| RollbookError::Api("Export produced no data".to_string()))?;

    if to_stdout {
        println!("{}", exported);
        return Ok(());
    }

    let target = match output {
        Some(path) => path,
        None => {
            let dir = ctx.config.export_dir.clone().unwrap_or_default();
            dir.join(default_file_name(Local::now().date_naive()))
        }
    };
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&target, exported)?;

    let mut messages = result.messages;
    messages.push(CmdMessage::success(format!(
        "Data exported successfully! → {}",
        target.display()
    )));
    print_messages(&messages);
    Ok(())
}

fn handle_sample(api: &mut Api) -> Result<()> {
    let result = api.load_sample_students()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_departments(api: &Api) -> Result<()> {
    let result = api.departments()?;
    print!(
        "{}",
        render_text_list(&result.departments, "No departments.")
    );
    Ok(())
}

fn handle_stats(api: &Api) -> Result<()> {
    let result = api.list_students(&ViewCriteria::default())?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    Ok(())
}

fn handle_theme(api: &Api, value: Option<String>) -> Result<()> {
    let action = match value.as_deref() {
        None => ThemeAction::Show,
        Some("toggle") => ThemeAction::Toggle,
        Some(other) => ThemeAction::Set(
            other
                .parse::<ThemePreference>()
                .map_err(RollbookError::Api)?,
        ),
    };

    let result = api.theme(action)?;
    if result.messages.is_empty() {
        if let Some(theme) = result.theme {
            println!("{}", theme);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &Api, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            let lines: Vec<String> = config
                .list_all()
                .into_iter()
                .map(|(k, v)| format!("{} = {}", k, v))
                .collect();
            print!("{}", render_text_list(&lines, "No configuration values."));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_flags_override_config_sort() {
        let filters = ListFilters {
            sort: Some("year-desc".into()),
            ..Default::default()
        };
        assert_eq!(filters.criteria(SortKey::NameAsc).sort, SortKey::YearDesc);
        assert_eq!(
            ListFilters::default().criteria(SortKey::NameAsc).sort,
            SortKey::NameAsc
        );
    }

    #[test]
    fn empty_department_means_all() {
        let filters = ListFilters {
            department: Some(String::new()),
            ..Default::default()
        };
        let criteria = filters.criteria(SortKey::Unsorted);
        assert_eq!(criteria.department, None);
        assert!(!criteria.has_filters());
    }
}
