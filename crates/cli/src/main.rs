#![deny(unsafe_code)]
//! CLI binary for the colours library.
//!
//! Subcommands:
//! - `convert <colour>`: print every representation of a colour
//! - `components <colour> --model <m>`: print one model's four components
//! - `derive <colour> --lighten/--darken/--complement/--contrast`
//! - `scheme <colour> --scheme <name>`: print a four-colour scheme
//! - `list`: print preset colours and schemes
//!
//! `<colour>` is a hex string ("#c0ffee", "c0ffee") or a preset name.

mod error;

use clap::{Parser, Subcommand};
use colours_core::{preset, preset_names, ColorFormulation, ColorScheme, HueWrap, Rgba};
use error::CliError;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "colours", about = "Colour model conversions and schemes")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a colour as hex, RGBA, HSBA, XYZ, LAB and CMYK.
    Convert {
        /// Hex string or preset name.
        colour: String,
    },
    /// Print the four components of a colour in one model.
    Components {
        /// Hex string or preset name.
        colour: String,

        /// Colour model (rgba, hsba, lab, cmyk).
        #[arg(short, long, default_value = "rgba")]
        model: String,
    },
    /// Derive a related colour. Exactly one operation must be given.
    Derive {
        /// Hex string or preset name.
        colour: String,

        /// Scale brightness up by this fraction (0.2 = 20%).
        #[arg(long)]
        lighten: Option<f64>,

        /// Scale brightness down by this fraction.
        #[arg(long)]
        darken: Option<f64>,

        /// Rotate hue by 180 degrees.
        #[arg(long)]
        complement: bool,

        /// Pick black or white for contrast.
        #[arg(long)]
        contrast: bool,
    },
    /// Print the four colours of a harmonic scheme.
    Scheme {
        /// Hex string or preset name.
        colour: String,

        /// Scheme name (analogous, monochromatic, triad, complementary).
        #[arg(short, long, default_value = "complementary")]
        scheme: String,

        /// Hue wrap mode (reflect, modulo).
        #[arg(long, default_value = "reflect")]
        hue_wrap: String,
    },
    /// List preset colours and schemes.
    List,
}

fn derive_colour(
    color: Rgba,
    lighten: Option<f64>,
    darken: Option<f64>,
    complement: bool,
    contrast: bool,
) -> Result<(&'static str, Rgba), CliError> {
    let chosen = [lighten.is_some(), darken.is_some(), complement, contrast]
        .iter()
        .filter(|&&on| on)
        .count();
    if chosen != 1 {
        return Err(CliError::Input(
            "derive needs exactly one of --lighten, --darken, --complement, --contrast".into(),
        ));
    }
    let derived = match (lighten, darken) {
        (Some(pct), _) => ("lighten", color.lightened(pct)),
        (_, Some(pct)) => ("darken", color.darkened(pct)),
        _ if complement => ("complement", color.complementary()),
        _ => ("contrast", color.contrasting_black_or_white()),
    };
    Ok(derived)
}

fn print_convert(color: Rgba, json: bool) -> Result<(), CliError> {
    let hsba = color.hsba();
    let xyz = color.xyz();
    let lab = color.lab();
    let cmyk = color.cmyk();
    if json {
        let info = serde_json::json!({
            "hex": color.to_hex(),
            "rgba": color,
            "hsba": hsba,
            "xyz": xyz,
            "lab": lab,
            "cmyk": cmyk,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("hex   {}", color.to_hex());
        println!(
            "rgba  {:.4} {:.4} {:.4} {:.4}",
            color.r, color.g, color.b, color.a
        );
        println!("hsba  {:.4} {:.4} {:.4} {:.4}", hsba.h, hsba.s, hsba.b, hsba.a);
        println!("xyz   {:.4} {:.4} {:.4} {:.4}", xyz.x, xyz.y, xyz.z, xyz.alpha);
        println!("lab   {:.4} {:.4} {:.4} {:.4}", lab.l, lab.a, lab.b, lab.alpha);
        println!("cmyk  {:.4} {:.4} {:.4} {:.4}", cmyk.c, cmyk.m, cmyk.y, cmyk.k);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Convert { colour } => {
            let color = Rgba::parse(&colour)?;
            print_convert(color, cli.json)?;
        }
        Command::Components { colour, model } => {
            let color = Rgba::parse(&colour)?;
            let formulation = ColorFormulation::from_name(&model)?;
            let components = color.components(formulation);
            if cli.json {
                let info = serde_json::json!({
                    "model": formulation,
                    "components": components,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                let [a, b, c, d] = components;
                println!("{a:.4} {b:.4} {c:.4} {d:.4}");
            }
        }
        Command::Derive {
            colour,
            lighten,
            darken,
            complement,
            contrast,
        } => {
            let color = Rgba::parse(&colour)?;
            let (operation, derived) = derive_colour(color, lighten, darken, complement, contrast)?;
            tracing::debug!(
                operation,
                from = %color.to_hex(),
                to = %derived.to_hex(),
                "derived colour"
            );
            if cli.json {
                let info = serde_json::json!({
                    "operation": operation,
                    "input": color.to_hex(),
                    "hex": derived.to_hex(),
                    "rgba": derived,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", derived.to_hex());
            }
        }
        Command::Scheme {
            colour,
            scheme,
            hue_wrap,
        } => {
            let color = Rgba::parse(&colour)?;
            let scheme = ColorScheme::from_name(&scheme)?;
            let wrap = HueWrap::from_name(&hue_wrap)?;
            let colors = color.color_scheme_with(scheme, wrap);
            tracing::debug!(scheme = scheme.name(), ?wrap, "generated scheme");
            if cli.json {
                let hexes: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();
                let info = serde_json::json!({
                    "scheme": scheme,
                    "hue_wrap": wrap,
                    "seed": color.to_hex(),
                    "colors": hexes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for c in &colors {
                    println!("{}", c.to_hex());
                }
            }
        }
        Command::List => {
            let presets = preset_names();
            let schemes = ColorScheme::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "presets": presets,
                    "schemes": schemes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Presets:");
                for name in presets {
                    let hex = preset(name)?.to_hex();
                    println!("  {name:<16} {hex}");
                }
                println!("Schemes:");
                println!("  {}", schemes.join(", "));
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colours=warn,colours_core=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
