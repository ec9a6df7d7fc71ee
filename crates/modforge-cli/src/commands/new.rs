//! Implementation of `modforge new` and of the bare interactive run.
//!
//! Responsibility: resolve the module name, subfolders and start directory,
//! call the core module service, and display results. No business logic
//! lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use modforge_adapters::LocalFilesystem;
use modforge_core::{
    application::{GenerationReport, ModuleService, PlannedFile},
    domain::{ModuleName, Subfolder, parse_subfolders, registration_hint},
    error::ModforgeError,
};

use crate::{
    cli::{NewArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the `modforge new` command.
///
/// 1. Take the name from the argument or prompt for it
/// 2. Validate the name and the subfolder list
/// 3. Locate the project root from `--dir` or the current directory
/// 4. Early-exit with a preview if `--dry-run`
/// 5. Materialize the module and print the registration hint
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Name
    let raw = match args.name.clone() {
        Some(name) => name,
        None => prompt::ask_module_name()?,
    };

    // 2. Validation
    let module = ModuleName::new(raw).map_err(ModforgeError::from)?;
    let subfolders = select_subfolders(&args, &config)?;
    debug!(module = %module, folders = subfolders.len(), "Input validated");

    // 3. Project root
    let start = resolve_start(args.dir.as_deref())?;
    let service = ModuleService::new(Box::new(LocalFilesystem::new()))
        .with_modules_dir(&config.generator.modules_dir)
        .with_manifest_files(config.generator.manifest_files.clone());
    let root = service.locate_root(&start)?;
    info!(root = %root.display(), "Project root located");

    // 4. Dry run
    if args.dry_run {
        let plan = DryRunPlan {
            module_path: service.module_path(&root, &module),
            files: service.preview(&module, &subfolders, &root)?,
        };
        return show_plan(&module, &plan, &root, &output);
    }

    // 5. Generate
    let report = service.generate(&module, &subfolders, &root)?;
    info!(
        created = report.created.len(),
        skipped = report.skipped.len(),
        "Module generated"
    );
    show_report(&module, &report, &root, &output)
}

/// CLI `--subfolders` wins over the configured list.
fn select_subfolders(args: &NewArgs, config: &AppConfig) -> CliResult<Vec<Subfolder>> {
    let names = args
        .subfolders
        .as_deref()
        .unwrap_or(config.generator.subfolders.as_slice());
    parse_subfolders(names).map_err(|e| CliError::Core(e.into()))
}

/// Absolute directory to start the project-root search from.
fn resolve_start(dir: Option<&Path>) -> CliResult<PathBuf> {
    match dir {
        Some(dir) if dir.is_dir() => Ok(dir.canonicalize()?),
        Some(dir) => Err(CliError::DirectoryNotFound {
            path: dir.to_path_buf(),
        }),
        None => Ok(std::env::current_dir()?),
    }
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

// ── Rendering ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct DryRunPlan {
    module_path: PathBuf,
    files: Vec<PlannedFile>,
}

fn show_plan(
    module: &ModuleName,
    plan: &DryRunPlan,
    root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(plan)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would generate {} in {}",
        module.pascal(),
        display_relative(&plan.module_path, root)
    ))?;
    for file in &plan.files {
        let rel = display_relative(&file.path, root);
        if file.exists {
            output.skipped(&format!("{rel} (exists, kept)"))?;
        } else {
            output.print(&format!("  + {rel}"))?;
        }
    }
    Ok(())
}

fn show_report(
    module: &ModuleName,
    report: &GenerationReport,
    root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(report)?;
        return Ok(());
    }

    output.banner("Module Created")?;
    for path in &report.created {
        output.success(&display_relative(path, root))?;
    }
    for path in &report.skipped {
        output.skipped(&format!("{} (exists, kept)", display_relative(path, root)))?;
    }
    if report.is_noop() {
        output.info("Module already complete, nothing written")?;
    }

    output.print("")?;
    output.print("You can add this module to your main index.ts file as follows:")?;
    output.print(&registration_hint(module))?;
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
