//! `legacy-promote` command: config → options → use case → output

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use legacy_promote::config::Config;
use legacy_promote::{
    InteractiveConfirmation, JsonEventSink, LocalFs, OverwriteMode, PromoteOptions,
    PromoteUseCase,
};

use crate::cli::Cli;
use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::views::promote::{render_config_warning, render_promote_summary};

pub fn cmd_promote(cli: &Cli, cwd: &Path) -> Result<()> {
    let root = match &cli.root {
        Some(root) => cwd.join(root),
        None => cwd.to_path_buf(),
    };

    let (config, warnings) = Config::load_or_default(&root, cli.config.as_deref())?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

    for warning in &warnings {
        eprintln!("{}", render_config_warning(warning, ui.color, ui.unicode));
    }

    let options = resolve_options(cli, &config, &root, cwd);
    let fs = LocalFs::new().with_atomic_copies(config.promote.atomic_copies);

    // stdout carries NDJSON in --json mode, so questions go to stderr
    let questions: Box<dyn Write> = if ui.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut confirm = InteractiveConfirmation::new(io::stdin(), questions)
        .with_affirmative(&config.prompt.affirmative);

    if ui.json {
        let sink = JsonEventSink::stdout();
        PromoteUseCase::new(&fs, config.policy(), &sink).execute(&options, &mut confirm)?;
        return Ok(());
    }

    let sink = ConsoleEventSink::stdout(ui);
    let report =
        PromoteUseCase::new(&fs, config.policy(), &sink).execute(&options, &mut confirm)?;

    print!("{}", render_promote_summary(&report, ui.color, ui.unicode));
    Ok(())
}

/// Layer CLI flags over the configured options.
///
/// Config paths resolve against the project root; `--staging`/`--archive`
/// resolve against the working directory like any other CLI path.
fn resolve_options(cli: &Cli, config: &Config, root: &Path, cwd: &Path) -> PromoteOptions {
    let mut options = config.promote_options(root);

    if let Some(staging) = &cli.staging {
        options.staging_root = cwd.join(staging);
    }
    if let Some(archive) = &cli.archive {
        options.archive_root = cwd.join(archive);
    }
    if let Some(mode) = OverwriteMode::from_flags(cli.overwrite, cli.ask) {
        options.mode = mode;
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn options(args: &[&str], config: &Config) -> PromoteOptions {
        let mut argv = vec!["legacy-promote"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        resolve_options(&cli, config, Path::new("/work/plugin"), Path::new("/work"))
    }

    #[test]
    fn defaults_come_from_config() {
        let resolved = options(&[], &Config::default());
        assert_eq!(resolved.staging_root, PathBuf::from("/work/plugin/dist"));
        assert_eq!(resolved.archive_root, PathBuf::from("/work/plugin/legacy"));
        assert_eq!(resolved.mode, OverwriteMode::Ask);
    }

    #[test]
    fn cli_paths_resolve_against_working_directory() {
        let resolved = options(
            &["--staging", "plugin/build", "--archive", "/srv/legacy"],
            &Config::default(),
        );
        assert_eq!(resolved.staging_root, PathBuf::from("/work/plugin/build"));
        assert_eq!(resolved.archive_root, PathBuf::from("/srv/legacy"));
    }

    #[test]
    fn overwrite_flag_beats_config_mode() {
        let mut config = Config::default();
        config.promote.mode = OverwriteMode::Skip;

        assert_eq!(
            options(&["--overwrite"], &config).mode,
            OverwriteMode::Overwrite
        );
        assert_eq!(
            options(&["--overwrite=false"], &Config::default()).mode,
            OverwriteMode::Skip
        );
    }

    #[test]
    fn ask_flag_restores_prompting() {
        let mut config = Config::default();
        config.promote.mode = OverwriteMode::Overwrite;

        assert_eq!(options(&["--ask"], &config).mode, OverwriteMode::Ask);
        assert_eq!(options(&[], &config).mode, OverwriteMode::Overwrite);
    }
}
