//! Command-line surface for the `selcraft` binary.
//!
//! `selcraft build element=div id=main class=box combinator=">" element=p`
//! applies fragments in the order given, so ordering and duplicate errors
//! surface exactly as they would in code.

use std::error::Error;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use log::{LevelFilter, debug, info};
use thiserror::Error;

use crate::codec;
use crate::css::{Category, Selector, SelectorBuilder, SelectorError};
use crate::shapes;

/// Build CSS selector strings from typed fragments.
#[derive(Parser, Debug)]
#[command(name = "selcraft", version, about, long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging entirely.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Explicit log level (off, error, warn, info, debug, trace).
    #[arg(long, env = "SELCRAFT_LOG", global = true, value_parser = parse_level)]
    pub log_level: Option<LevelFilter>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a selector from `kind=value` tokens.
    Build {
        /// element, id, class, attr, pseudo-class, pseudo-element or combinator
        #[arg(required = true)]
        tokens: Vec<Token>,
    },

    /// Print a rectangle's JSON encoding and its area.
    Rect {
        #[arg(allow_negative_numbers = true)]
        width: f64,
        #[arg(allow_negative_numbers = true)]
        height: f64,
    },
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        if let Some(level) = self.log_level {
            return level;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| format!("unknown log level '{}'", s))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Fragment(Category, String),
    Combinator(String),
}

impl FromStr for Token {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected kind=value, got '{}'", s))?;
        let category = match kind {
            "element" => Category::Type,
            "id" => Category::Id,
            "class" => Category::Class,
            "attr" => Category::Attribute,
            "pseudo-class" => Category::PseudoClass,
            "pseudo-element" => Category::PseudoElement,
            "combinator" => return Ok(Token::Combinator(value.to_string())),
            other => return Err(format!("unknown fragment kind '{}'", other)),
        };
        Ok(Token::Fragment(category, value.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("every combinator needs a selector on both sides")]
    EmptyCompound,
}

/// Applies tokens left to right. A combinator closes the current compound
/// selector and joins everything so far with the next one.
pub fn build_selector(tokens: &[Token]) -> Result<Selector, CliError> {
    let mut pending: Option<(Selector, String)> = None;
    let mut current = SelectorBuilder::new();

    for token in tokens {
        match token {
            Token::Fragment(category, value) => current = current.push(*category, value)?,
            Token::Combinator(combinator) => {
                let finished = std::mem::replace(&mut current, SelectorBuilder::new());
                let left = close(pending.take(), finished)?;
                pending = Some((left, combinator.clone()));
            }
        }
    }

    close(pending, current)
}

fn close(
    pending: Option<(Selector, String)>,
    compound: SelectorBuilder,
) -> Result<Selector, CliError> {
    if compound.is_empty() {
        return Err(CliError::EmptyCompound);
    }
    Ok(match pending {
        Some((left, combinator)) => Selector::combine(left, combinator, compound),
        None => compound.into(),
    })
}

/// Executes a parsed command and returns what should be printed.
pub fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    match &cli.command {
        Commands::Build { tokens } => {
            debug!(target: "cli", "Building selector from {} tokens", tokens.len());
            let selector = build_selector(tokens)?;
            info!(
                target: "cli",
                "Built selector with {} compound parts",
                selector.compound_count()
            );
            Ok(selector.finalize())
        }
        Commands::Rect { width, height } => {
            let rect = shapes::rectangle(*width, *height);
            Ok(format!("{}\narea: {}", codec::to_text(&rect)?, rect.area()))
        }
    }
}
