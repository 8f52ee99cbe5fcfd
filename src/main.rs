// SPDX-FileCopyrightText: 2026 Skillet Contributors
// SPDX-License-Identifier: MIT

use std::error::Error;
use std::fs;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use skillet::community;
use skillet::engine;
use skillet::layout::{self, CanvasSize};
use skillet::model::{Catalog, SelectionState, STYLE_CATEGORY_ID};
use skillet::render;
use skillet::tui::{self, App};

const ONCE_CANVAS: CanvasSize = CanvasSize::new(100, 40);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct CliOptions {
    catalog: Option<String>,
    seed: Option<u64>,
    once: bool,
    no_fetch: bool,
    help: bool,
}

fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "--once" => {
                if options.once {
                    return Err("duplicate flag: --once".to_owned());
                }
                options.once = true;
            }
            "--no-fetch" => {
                if options.no_fetch {
                    return Err("duplicate flag: --no-fetch".to_owned());
                }
                options.no_fetch = true;
            }
            "--catalog" => {
                if options.catalog.is_some() {
                    return Err("duplicate flag: --catalog".to_owned());
                }
                let path = iter.next().ok_or("--catalog expects a file path")?;
                options.catalog = Some(path.clone());
            }
            "--seed" => {
                if options.seed.is_some() {
                    return Err("duplicate flag: --seed".to_owned());
                }
                let raw = iter.next().ok_or("--seed expects an integer")?;
                let seed = raw
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed: {raw}"))?;
                options.seed = Some(seed);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(options)
}

fn print_usage() {
    println!("skillet - recipe idea generator");
    println!();
    println!("Usage: skillet [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --catalog <FILE>  load an ingredient catalog from a JSON file");
    println!("  --seed <N>        seed the randomizer for reproducible picks");
    println!("  --once            print one randomized recipe and exit");
    println!("  --no-fetch        skip the community recipe feed");
    println!("  -h, --help        print this help");
}

fn load_catalog(options: &CliOptions) -> Result<Catalog, Box<dyn Error>> {
    match &options.catalog {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|err| format!("could not read {path}: {err}"))?;
            let catalog = Catalog::from_json(&json)?;
            tracing::info!(%path, categories = catalog.categories().len(), "catalog loaded");
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

fn run_once(catalog: &Catalog, seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = SelectionState::new();
    engine::randomize_all(&mut state, catalog, &mut rng);

    let text = render::recipe_text(&state, catalog);
    println!("{text}");
    println!();
    println!("{}", render::render_diagram(&layout::layout(&state, catalog, ONCE_CANVAS)));

    let name = state
        .single_selected_in(STYLE_CATEGORY_ID)
        .and_then(|style_id| catalog.item(STYLE_CATEGORY_ID, style_id.as_str()))
        .map(|item| item.name().to_owned())
        .unwrap_or_else(|| "Skillet recipe".to_owned());
    println!();
    println!("Share it: {}", community::submission_url(&name, &text));
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let options = parse_options(args)?;
    if options.help {
        print_usage();
        return Ok(());
    }

    let catalog = load_catalog(&options)?;
    if options.once {
        run_once(&catalog, options.seed);
        return Ok(());
    }

    let app = App::new(catalog, options.seed, !options.no_fetch);
    tui::run(app)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("skillet: {err}");
            ExitCode::FAILURE
        }
    }
}
