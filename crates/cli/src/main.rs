// caisse CLI - headless shift-ledger operations

mod exit_codes;
mod session;
mod settings;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use caisse_engine::num::fmt1;
use caisse_engine::validate::{validate_scalar, Field};
use caisse_engine::FieldError;
use caisse_recon::{apply_outcomes, apply_pending, run, Branch, CalcResult};
use caisse_voice::{normalize, FieldKind, Language};

use exit_codes::{session_exit_code, EXIT_BLOCKED, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};
use session::Session;
use settings::Settings;

#[derive(Parser)]
#[command(name = "caisse")]
#[command(about = "Shift cash-ledger calculator (CLI mode, headless)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the settlement formula and credit reconciliation on a session
    #[command(after_help = "\
Examples:
  caisse calc shift.json
  caisse calc shift.json --json | jq .total
  caisse calc shift.json --write-back shift.json
  caisse calc shift.json --apply-remainders --write-back shift.json")]
    Calc {
        /// Session snapshot (JSON)
        session: PathBuf,

        /// Emit the full result as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Write the result to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Confirm every pending shortfall remainder as a Crédit Payée
        /// row (requires --write-back)
        #[arg(long)]
        apply_remainders: bool,

        /// Write the reconciled session back to a file
        #[arg(long, value_name = "FILE")]
        write_back: Option<PathBuf>,
    },

    /// Check a session's scalar fields without calculating
    Validate {
        /// Session snapshot (JSON)
        session: PathBuf,
    },

    /// Normalize one voice transcript to a canonical value
    #[command(after_help = "\
Examples:
  caisse normalize 'cinq cents virgule cinq'
  caisse normalize 'خمسة و عشرة' --lang ar
  caisse normalize 'Ahmed Ali' --text")]
    Normalize {
        /// The raw transcript
        transcript: String,

        /// Recognition locale the transcript was captured in
        #[arg(long, default_value = "none")]
        lang: Language,

        /// Treat the field as free text (client names, site)
        #[arg(long)]
        text: bool,
    },

    /// Create a fresh session snapshot
    New {
        /// Path for the new session file
        path: PathBuf,

        /// Settings file (TOML) supplying the default multiplier
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Site name recorded in the session
        #[arg(long)]
        site: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => {
            eprintln!("Usage: caisse <command> [options]");
            eprintln!("       caisse --help for more information");
            Ok(())
        }
        Some(Commands::Calc { session, json, output, apply_remainders, write_back }) => {
            cmd_calc(session, json, output, apply_remainders, write_back)
        }
        Some(Commands::Validate { session }) => cmd_validate(session),
        Some(Commands::Normalize { transcript, lang, text }) => {
            cmd_normalize(transcript, lang, text)
        }
        Some(Commands::New { path, config, site, force }) => cmd_new(path, config, site, force),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    /// A blocked calculation: mandatory field missing.
    pub fn blocked(err: &caisse_recon::CalcError) -> Self {
        Self {
            code: EXIT_BLOCKED,
            message: err.to_string(),
            hint: Some("set soldeDeDebut in the session file".to_string()),
        }
    }

    /// Create error from session error with proper exit code.
    pub fn session(err: session::SessionError) -> Self {
        Self {
            code: session_exit_code(&err),
            message: err.to_string(),
            hint: None,
        }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn cmd_calc(
    path: PathBuf,
    json: bool,
    output: Option<PathBuf>,
    apply_remainders: bool,
    write_back: Option<PathBuf>,
) -> Result<(), CliError> {
    if apply_remainders && write_back.is_none() {
        return Err(CliError::usage("--apply-remainders requires --write-back"));
    }

    let mut session = Session::load(&path).map_err(CliError::session)?;
    let result = run(&session.rows).map_err(|e| CliError::blocked(&e))?;

    let rendered = if json {
        serde_json::to_string_pretty(&result)
            .map_err(|e| CliError::io(format!("cannot encode result: {e}")))?
    } else {
        render_summary(&result)
    };

    match output {
        Some(out) => fs::write(&out, rendered + "\n")
            .map_err(|e| CliError::io(format!("cannot write {}: {}", out.display(), e)))?,
        None => println!("{rendered}"),
    }

    if let Some(back) = write_back {
        apply_outcomes(&mut session.rows, &result.credits);
        if apply_remainders {
            for pending in &result.pending {
                apply_pending(&mut session.rows, pending);
            }
        }
        session.save(&back).map_err(CliError::session)?;
    }

    Ok(())
}

/// Human-readable calc output. Consumed detail terms carry a `*`.
fn render_summary(result: &CalcResult) -> String {
    let mut out = String::new();
    out.push_str(&result.display);
    out.push('\n');
    out.push_str(&format!(
        "Retraits: {} (payés: {})\n",
        fmt1(result.total_retrait),
        fmt1(result.total_retrait_payee)
    ));

    if !result.credits.is_empty() {
        out.push_str("\nCrédits:\n");
        for outcome in &result.credits {
            let branch = match outcome.branch {
                Branch::Settled => "settled  ",
                Branch::Shortfall => "shortfall",
                Branch::Split => "split    ",
            };
            let terms = outcome
                .terms
                .iter()
                .map(|t| {
                    if t.consumed {
                        format!("{}*", fmt1(t.value))
                    } else {
                        fmt1(t.value)
                    }
                })
                .collect::<Vec<_>>()
                .join(" + ");
            out.push_str(&format!(
                "  {:<12} {}  {}  ->  {}\n",
                outcome.client,
                branch,
                terms,
                fmt1(outcome.new_total)
            ));
        }
        out.push_str("  (* = covered by the client's withdrawals)\n");
    }

    if !result.pending.is_empty() {
        out.push_str("\nPending Crédit Payée (confirm with --apply-remainders --write-back):\n");
        for pending in &result.pending {
            out.push_str(&format!("  {:<12} {}\n", pending.client, fmt1(pending.amount)));
        }
    }

    // Drop the trailing newline; the caller adds one.
    out.truncate(out.trim_end().len());
    out
}

fn cmd_validate(path: PathBuf) -> Result<(), CliError> {
    let session = Session::load(&path).map_err(CliError::session)?;

    let checks = [
        (session.rows.multiplier.as_str(), Field::Multiplier),
        (session.rows.fond.as_str(), Field::Fond),
        (session.rows.solde_a_linstant.as_str(), Field::SoldeALinstant),
        (session.rows.solde_de_debut.as_str(), Field::SoldeDeDebut),
    ];
    let errors: Vec<FieldError> = checks
        .iter()
        .filter_map(|(value, field)| validate_scalar(value, *field).err())
        .collect();

    if errors.is_empty() {
        println!("ok");
        return Ok(());
    }

    let blocked = errors
        .iter()
        .any(|e| matches!(e, FieldError::Missing { field: Field::SoldeDeDebut }));
    let message = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    Err(CliError {
        code: if blocked { EXIT_BLOCKED } else { EXIT_ERROR },
        message,
        hint: None,
    })
}

fn cmd_normalize(transcript: String, lang: Language, text: bool) -> Result<(), CliError> {
    let kind = if text { FieldKind::Text } else { FieldKind::Numeric };
    println!("{}", normalize(&transcript, kind, lang));
    Ok(())
}

fn cmd_new(
    path: PathBuf,
    config: Option<PathBuf>,
    site: Option<String>,
    force: bool,
) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(
            CliError::usage(format!("{} already exists", path.display()))
                .with_hint("pass --force to overwrite"),
        );
    }

    let settings = match config {
        Some(config_path) => {
            Settings::load(&config_path).map_err(|e| CliError::usage(e.to_string()))?
        }
        None => Settings::default(),
    };

    let mut session = Session::new();
    session.rows.multiplier = settings.multiplier;
    if let Some(site) = site {
        session.rows.site = site;
    }
    session.save(&path).map_err(CliError::session)?;
    println!("created {}", path.display());
    Ok(())
}
