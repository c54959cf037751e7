//! Command-line interface for the place standard.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::error::{GazetteerError, Result};
use crate::loader::load_file;
use crate::place::Place;
use crate::standard::PlaceStandard;

/// Gazetteer - query a place standard built from place pages.
#[derive(Parser)]
#[command(name = "gazetteer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Skip building the preferred/variant name indices
    #[arg(long, global = true)]
    pub no_name_index: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report parents and see-also places that do not resolve.
    Check {
        /// Gazetteer YAML file
        file: PathBuf,
    },

    /// Resolve a title (following redirects) and show its place.
    Lookup {
        /// Gazetteer YAML file
        file: PathBuf,

        /// Place title or redirect
        title: String,
    },

    /// Print the names that should match a place in search.
    Closure {
        /// Gazetteer YAML file
        file: PathBuf,

        /// Place title or redirect
        title: String,

        /// Include the variant names of the place itself
        #[arg(long)]
        self_variants: bool,

        /// Include the variant names of its ancestors
        #[arg(long)]
        ancestor_variants: bool,
    },

    /// List all place titles.
    List {
        /// Gazetteer YAML file
        file: PathBuf,

        /// Sort hierarchically (each place directly after its descendants)
        #[arg(short, long)]
        sorted: bool,
    },

    /// Find places by preferred (or variant) name.
    Search {
        /// Gazetteer YAML file
        file: PathBuf,

        /// Name to search for
        name: String,

        /// Search variant names instead of preferred names
        #[arg(long)]
        variants: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

/// Execute an already parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let index_names = !cli.no_name_index;

    match cli.command {
        Commands::Check { file } => check_command(&load(&file, index_names)?),
        Commands::Lookup { file, title } => lookup_command(&load(&file, index_names)?, &title),
        Commands::Closure {
            file,
            title,
            self_variants,
            ancestor_variants,
        } => {
            let standard = load(&file, index_names)?;
            for name in standard.compute_name_closure(&title, self_variants, ancestor_variants) {
                println!("{name}");
            }
            Ok(())
        }
        Commands::List { file, sorted } => {
            let standard = load(&file, index_names)?;
            for place in standard.get_places(sorted) {
                println!("{}", place.title());
            }
            Ok(())
        }
        Commands::Search {
            file,
            name,
            variants,
        } => {
            let standard = load(&file, index_names)?;
            let places = if variants {
                standard.get_places_with_variant_name(&name)?
            } else {
                standard.get_places_with_pref_name(&name)?
            };
            for place in places {
                println!("{}", place.title());
            }
            Ok(())
        }
    }
}

fn load(file: &Path, index_names: bool) -> Result<PlaceStandard> {
    let (standard, summary) = load_file(file, index_names)?;
    if !summary.duplicates.is_empty() {
        eprintln!(
            "{} {} duplicate title(s) skipped",
            style("Warning:").yellow().bold(),
            summary.duplicates.len()
        );
    }
    Ok(standard)
}

fn check_command(standard: &PlaceStandard) -> Result<()> {
    let defects = standard.check_validity();
    for defect in &defects {
        println!("  {} {defect}", style("✗").red());
    }

    if defects.is_empty() {
        println!(
            "{} {} places, {} redirects",
            style("Valid:").green().bold(),
            standard.len(),
            standard.redirect_count()
        );
        Ok(())
    } else {
        Err(GazetteerError::InvalidReferences(defects.len()))
    }
}

fn lookup_command(standard: &PlaceStandard, title: &str) -> Result<()> {
    let place = standard
        .get_place(title)
        .ok_or_else(|| GazetteerError::UnknownPlace(title.to_string()))?;

    println!("{} {}", style("Title:").bold(), style(place.title()).cyan());
    if let Some(full_name) = standard.get_full_name(place.title()) {
        println!("  Full name: {}", style(full_name).green());
    }
    if let Some(level) = standard.get_place_level(place.title()) {
        println!("  Level: {level}");
    }
    print_optional("Type", place.place_type.as_deref());
    print_optional("Located in", place.parent());
    print_coordinates(place);
    for variant in place.variant_names() {
        match &variant.source {
            Some(source) => println!("  Also known as: {} ({source})", variant.name),
            None => println!("  Also known as: {}", variant.name),
        }
    }
    for previous in place.previous_parents() {
        let period = match (&previous.from_year, &previous.to_year) {
            (None, None) => String::new(),
            (from, to) => format!(
                " ({}-{})",
                from.as_deref().unwrap_or_default(),
                to.as_deref().unwrap_or_default()
            ),
        };
        println!("  Formerly in: {}{period}", previous.parent_title);
    }
    for see_also in place.see_also_places() {
        println!("  See also: {}", see_also.place_title);
    }
    Ok(())
}

fn print_optional(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("  {label}: {value}");
    }
}

fn print_coordinates(place: &Place) {
    if let (Some(latitude), Some(longitude)) = (place.latitude, place.longitude) {
        println!("  Coordinates: {latitude}, {longitude}");
    }
}
