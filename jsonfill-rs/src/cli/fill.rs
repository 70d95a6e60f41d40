//! Fill command implementation.

use crate::cli::args::FillArgs;
use crate::cli::output::Output;
use crate::config::{Config, ConfigLayer};
use crate::engine::Substitutor;
use crate::error::Result;
use crate::source;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct FillReport {
    pub manuscript: String,
    pub data: String,
    pub output: String,
    pub found: usize,
    pub replaced: usize,
    pub unresolved: Vec<String>,
}

/// Directory searched for the data file and `jsonfill.toml`.
pub fn project_dir(args: &FillArgs) -> PathBuf {
    if let Some(ref project) = args.project {
        return project.clone();
    }
    parent_dir(&args.manuscript)
}

/// Directory containing `file`, or `.` for a bare file name.
pub fn parent_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Build the effective config: config files first, then command-line flags.
pub fn resolve_config(args: &FillArgs) -> Result<Config> {
    let mut config = Config::load(&project_dir(args))?;
    config.apply(ConfigLayer {
        json_file: args.json_file.clone(),
        start_delim: args.delimiters.start_delim.clone(),
        end_delim: args.delimiters.end_delim.clone(),
        error_on_missing: args.error_on_missing.then_some(true),
        debug_log: args.debug_log.then_some(true),
    });
    Ok(config)
}

pub fn run(args: &FillArgs, config: &Config, output: &Output) -> Result<()> {
    tracing::debug!(?config, "options");

    let substitutor = Substitutor::with_delimiters(&config.start_delimiter, &config.end_delimiter)?;
    let text = fs::read_to_string(&args.manuscript)?;
    tracing::debug!(len = text.len(), "content loaded");

    let (data_path, tree) = match args.data {
        Some(ref path) => (path.clone(), source::load_value_tree(path)?),
        None => source::load_project_source(&project_dir(args), &config.json_file)?,
    };

    let result = substitutor.substitute(&text, &tree, &config.substitute_options())?;

    for path in &result.unresolved_paths {
        output.warn(&format!("no value for placeholder '{}'", path));
    }

    match args.output {
        Some(ref out_path) => {
            write_output(out_path, &result.text)?;
            output.print(&FillReport {
                manuscript: display(&args.manuscript),
                data: display(&data_path),
                output: display(out_path),
                found: result.found_count,
                replaced: result.replaced_count,
                unresolved: result.unresolved_paths,
            })
        }
        None => {
            output.print_raw(&result.text);
            Ok(())
        }
    }
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)?;
    Ok(())
}

fn display(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
