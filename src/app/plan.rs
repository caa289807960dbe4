//! Action planning from CLI arguments plus config.

use std::path::PathBuf;

use vinced_theme::color::OverridePolicy;
use vinced_theme::config::Config;

use crate::cli::Args;

/// Where the theme document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ThemeSource {
    File(PathBuf),
    Defaults,
}

/// One step of a run, executed in plan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Check,
    View,
    Apply { label: &'static str, target: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Plan {
    pub(crate) source: ThemeSource,
    pub(crate) overrides: OverridePolicy,
    pub(crate) actions: Vec<Action>,
    /// No action was requested, so USE was added.
    pub(crate) defaulted_to_use: bool,
}

/// Build the run plan. Actions run as check, view, use, save, prefs; with
/// none requested the plan falls back to USE.
pub(crate) fn plan_from_args(args: &Args, config: &Config) -> Plan {
    let source = match (&args.theme_file, args.reset) {
        (Some(path), false) => ThemeSource::File(path.clone()),
        _ => ThemeSource::Defaults,
    };
    let overrides = OverridePolicy::new(
        args.load_override().or(config.flags.load),
        args.ansi_override().or(config.flags.ansi),
    );

    let any_requested =
        args.use_prefs || args.save || args.check || args.view || args.prefs.is_some();
    let use_prefs = args.use_prefs || !any_requested;

    let mut actions = Vec::new();
    if args.check {
        actions.push(Action::Check);
    }
    if args.view {
        actions.push(Action::View);
    }
    if use_prefs {
        actions.push(Action::Apply {
            label: "use",
            target: config.targets.use_path.clone(),
        });
    }
    if args.save {
        actions.push(Action::Apply {
            label: "save",
            target: config.targets.save_path.clone(),
        });
    }
    if let Some(path) = &args.prefs {
        actions.push(Action::Apply {
            label: "prefs",
            target: path.clone(),
        });
    }

    Plan {
        source,
        overrides,
        actions,
        defaulted_to_use: !any_requested,
    }
}
