//! quire command-line interface.
//!
//! # Usage
//!
//! ```bash
//! # Create a document and give it a layout
//! quire new notes.yaml --template trio --variant feature
//!
//! # Switch theme, dropping calendar pins that only echoed the old theme
//! quire theme notes.yaml midnight
//!
//! # Check a color pair
//! quire contrast "#777" "#fff"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use quire::output::{render_calendar, render_decorations, serialize};
use quire::{Catalogs, Document, Format, Settings};
use quire_layout::ContentBlock;
use quire_style::color::Rgb;
use quire_style::contrast::{contrast_ratio, ensure_contrast};
use quire_style::CalendarField;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Document layouts with adaptive decorations and contrast-safe theming
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new document
    New {
        path: PathBuf,
        #[arg(long, default_value = "single")]
        template: String,
        #[arg(long, default_value = "classic")]
        variant: String,
        #[arg(long, default_value = "classic")]
        theme: String,
    },

    /// Append a content block
    Block {
        doc: PathBuf,
        id: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        body: String,
    },

    /// Switch template and variant
    Layout {
        doc: PathBuf,
        template: String,
        /// Variant name (defaults to the template's first variant)
        #[arg(long, default_value = "")]
        variant: String,
        /// Print the result instead of writing it back
        #[arg(long)]
        dry_run: bool,
    },

    /// Switch theme
    Theme {
        doc: PathBuf,
        theme: String,
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the effective calendar style
    Calendar {
        doc: PathBuf,
        #[arg(long, default_value = "text")]
        format: Format,
    },

    /// Pin a calendar field to a value
    Pin {
        doc: PathBuf,
        field: String,
        value: String,
    },

    /// Remove a calendar pin
    Unpin { doc: PathBuf, field: String },

    /// Show the document's decorations
    Decorations {
        doc: PathBuf,
        #[arg(long, default_value = "text")]
        format: Format,
    },

    /// Adjust one decoration by id
    Tweak {
        doc: PathBuf,
        id: String,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        dx: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        dy: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        dwidth: f64,
        #[arg(long)]
        color: Option<String>,
        /// Drop all manual geometry changes first
        #[arg(long)]
        reset: bool,
    },

    /// Report the contrast ratio of two hex colors
    Contrast {
        fg: String,
        bg: String,
        #[arg(long, default_value_t = 4.5)]
        min: f64,
    },

    /// List catalog entries
    Catalog {
        #[arg(value_enum)]
        kind: CatalogKind,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CatalogKind {
    Templates,
    Themes,
    Lines,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let catalogs = settings.catalogs().context("Failed to load catalogs")?;

    run(cli.command, &settings, &catalogs)
}

fn run(command: Command, settings: &Settings, catalogs: &Catalogs) -> anyhow::Result<()> {
    match command {
        Command::New {
            path,
            template,
            variant,
            theme,
        } => {
            if path.exists() {
                bail!("{} already exists", path.display());
            }
            let (doc, _) = Document::new(&template, &variant, &theme)
                .apply_layout(&template, &variant, settings, catalogs)?;
            save(&doc, &path)?;
            info!("Created {}", path.display());
        }

        Command::Block {
            doc,
            id,
            title,
            body,
        } => {
            let document = load(&doc)?.with_block(ContentBlock::new(id, title, body));
            save(&document, &doc)?;
        }

        Command::Layout {
            doc,
            template,
            variant,
            dry_run,
        } => {
            let (document, report) =
                load(&doc)?.apply_layout(&template, &variant, settings, catalogs)?;
            println!(
                "{} {}:{} ({} decorations{})",
                style("layout").bold(),
                report.template,
                report.variant,
                report.decorations,
                if report.reallocated {
                    ", blocks reallocated"
                } else {
                    ""
                }
            );
            finish(&document, &doc, dry_run)?;
        }

        Command::Theme {
            doc,
            theme,
            dry_run,
        } => {
            let (document, report) = load(&doc)?.apply_theme(&theme, settings, catalogs)?;
            println!("{} {}", style("theme").bold(), report.theme);
            for field in &report.cleared {
                println!("  {} {}", style("cleared").yellow(), field);
            }
            finish(&document, &doc, dry_run)?;
        }

        Command::Calendar { doc, format } => {
            let document = load(&doc)?;
            let calendar = document.calendar_style(settings, catalogs);
            if format.is_structured() {
                println!("{}", serialize(&calendar, format)?);
            } else {
                println!("{}", render_calendar(&calendar, &document.calendar_overrides));
            }
        }

        Command::Pin { doc, field, value } => {
            let field = parse_field(&field)?;
            let mut document = load(&doc)?;
            document.calendar_overrides.pin(field, value);
            save(&document, &doc)?;
        }

        Command::Unpin { doc, field } => {
            let field = parse_field(&field)?;
            let mut document = load(&doc)?;
            if document.calendar_overrides.unpin(field).is_none() {
                bail!("{} is not pinned", field);
            }
            save(&document, &doc)?;
        }

        Command::Decorations { doc, format } => {
            let document = load(&doc)?;
            if format.is_structured() {
                println!("{}", serialize(&document.decorations, format)?);
            } else {
                println!("{}", render_decorations(&document.decorations));
            }
        }

        Command::Tweak {
            doc,
            id,
            dx,
            dy,
            dwidth,
            color,
            reset,
        } => {
            let mut document = load(&doc)?;
            let element = document
                .decoration_mut(&id)
                .with_context(|| format!("No decoration with id '{}'", id))?;
            if reset {
                element.reset_adjustment();
            }
            if dx != 0.0 || dy != 0.0 {
                element.nudge(dx, dy);
            }
            if dwidth != 0.0 {
                element.resize(dwidth);
            }
            if let Some(color) = color {
                element.recolor(color);
            }
            save(&document, &doc)?;
        }

        Command::Contrast { fg, bg, min } => {
            let fg_rgb = Rgb::parse_hex(&fg).with_context(|| format!("Invalid color '{}'", fg))?;
            let bg_rgb = Rgb::parse_hex(&bg).with_context(|| format!("Invalid color '{}'", bg))?;
            let ratio = contrast_ratio(fg_rgb, bg_rgb);
            if ratio >= min {
                println!("{:.2}:1 {}", ratio, style("pass").green());
            } else {
                let suggestion = ensure_contrast(fg_rgb, bg_rgb, min);
                println!(
                    "{:.2}:1 {} (try {}, {:.2}:1)",
                    ratio,
                    style("fail").red(),
                    suggestion,
                    contrast_ratio(suggestion, bg_rgb)
                );
            }
        }

        Command::Catalog { kind } => match kind {
            CatalogKind::Templates => {
                for template in catalogs.layouts.iter() {
                    let variants: Vec<&str> =
                        template.variants.iter().map(|v| v.name.as_str()).collect();
                    println!(
                        "{:<10} {} slots  {}",
                        template.id,
                        template.slots,
                        variants.join(", ")
                    );
                }
            }
            CatalogKind::Themes => {
                for theme in catalogs.themes.iter() {
                    println!("{:<12} accent {}", theme.name(), theme.accent());
                }
            }
            CatalogKind::Lines => {
                for line in catalogs.lines.iter() {
                    let tags = if line.themes.is_empty() {
                        String::new()
                    } else {
                        format!("  [{}]", line.themes.join(", "))
                    };
                    println!("{:<16} h={}{}", line.id, line.height(), tags);
                }
            }
        },
    }
    Ok(())
}

fn parse_field(name: &str) -> anyhow::Result<CalendarField> {
    name.parse::<CalendarField>().map_err(anyhow::Error::msg)
}

fn load(path: &Path) -> anyhow::Result<Document> {
    Document::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn save(document: &Document, path: &Path) -> anyhow::Result<()> {
    document
        .save(path)
        .with_context(|| format!("Failed to save {}", path.display()))
}

fn finish(document: &Document, path: &Path, dry_run: bool) -> anyhow::Result<()> {
    if dry_run {
        println!("{}", document.to_string_as(Format::for_path(path))?);
        Ok(())
    } else {
        save(document, path)
    }
}
