//! # Beam CLI Application
//!
//! Terminal front end for the beam statics engine.
//!
//! ## Usage
//!
//! ```bash
//! beam_cli                                # prompted simple-beam demo
//! beam_cli girder.beam --json             # analyze a project file
//! beam_cli girder.beam --csv girder.csv   # export sampled diagrams
//! ```
//!
//! Set `RUST_LOG=debug` to trace the solver.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use serde::Serialize;

use beam_core::calculations::BeamResult;
use beam_core::formulas::relevant_formulas;
use beam_core::{
    load_project, save_project, BeamAnalysis, BeamProject, CalcError, CalcResult, Load,
    LoadEntry, ResultSummary, SupportPair, SupportReaction,
};

#[derive(Debug, Default)]
struct Options {
    project: Option<PathBuf>,
    stations: Option<usize>,
    strict: bool,
    json: bool,
    csv: Option<PathBuf>,
    save: Option<PathBuf>,
}

/// One CSV row per station
#[derive(Debug, Serialize)]
struct StationRow {
    position: f64,
    shear_force: f64,
    bending_moment: f64,
    axial_force: f64,
}

fn print_usage() {
    eprintln!("Usage: beam_cli [project.beam] [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --stations N   Number of diagram intervals (default 100)");
    eprintln!("  --strict       Treat advisory conditions as errors");
    eprintln!("  --json         Print the full analysis as JSON");
    eprintln!("  --csv PATH     Write sampled diagrams to a CSV file");
    eprintln!("  --save PATH    Save the project (with overrides) to a .beam file");
    eprintln!();
    eprintln!("Without a project file a simple-beam demo is run interactively.");
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--stations" => {
                let value = iter.next().ok_or("--stations requires a value")?;
                let stations = value
                    .parse()
                    .map_err(|_| format!("Invalid station count: {}", value))?;
                options.stations = Some(stations);
            }
            "--strict" => options.strict = true,
            "--json" => options.json = true,
            "--csv" => {
                let value = iter.next().ok_or("--csv requires a path")?;
                options.csv = Some(PathBuf::from(value));
            }
            "--save" => {
                let value = iter.next().ok_or("--save requires a path")?;
                options.save = Some(PathBuf::from(value));
            }
            other if other.starts_with("--") => {
                return Err(format!("Unknown option: {}", other));
            }
            path => {
                if options.project.is_some() {
                    return Err(format!("Unexpected argument: {}", path));
                }
                options.project = Some(PathBuf::from(path));
            }
        }
    }

    Ok(options)
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn demo_project() -> CalcResult<BeamProject> {
    println!("No project file given. Running simple beam demo...");
    println!();

    let length = prompt_f64("Enter beam length (m) [10.0]: ", 10.0);
    let magnitude = prompt_f64("Enter point load (kN) [50.0]: ", 50.0);
    let position = prompt_f64("Enter load position (m) [4.0]: ", 4.0);

    let mut project = BeamProject::new(env::var("USER").unwrap_or_else(|_| "Unknown".into()));
    project.beam.label = "CLI-Demo".to_string();
    project.set_length(length)?;
    project.set_supports(SupportPair::simply_supported());
    project.add_load(Load::point(magnitude, position))?;
    Ok(project)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            print_usage();
            process::exit(2);
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        process::exit(1);
    }
}

fn run(options: &Options) -> CalcResult<()> {
    println!("Beam CLI - Beam Statics Calculator");
    println!("==================================");
    println!();

    let mut project = match &options.project {
        Some(path) => load_project(path)?,
        None => demo_project()?,
    };

    if let Some(stations) = options.stations {
        log::info!("overriding stations: {} -> {}", project.settings.stations, stations);
        project.settings.stations = stations;
    }
    if options.strict {
        log::info!("strict mode enabled");
        project.settings.strict = true;
    }

    let analysis = project.analyze()?;
    log::info!(
        "analyzed '{}': {} stations, {} diagnostics",
        project.beam.label,
        analysis.result.len(),
        analysis.diagnostics.len()
    );
    print_report(&project, &analysis);

    if options.json {
        println!();
        println!("JSON Output (for LLM/API use):");
        let json = serde_json::to_string_pretty(&analysis)?;
        println!("{}", json);
    }

    if let Some(path) = &options.csv {
        write_csv(&analysis.result, path)?;
        println!();
        println!("Wrote {} stations to {}", analysis.result.len(), path.display());
    }

    if let Some(path) = &options.save {
        project.touch();
        save_project(&project, path)?;
        println!("Saved project to {}", path.display());
    }

    Ok(())
}

fn print_report(project: &BeamProject, analysis: &BeamAnalysis) {
    let beam = &project.beam;
    let summary = ResultSummary::from_result(&analysis.result);

    println!("═══════════════════════════════════════");
    println!("  BEAM ANALYSIS RESULTS: {}", beam.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Length:   {:.2} m", beam.length);
    println!("  Supports: {} ({})", beam.supports, analysis.support_class.display_name());
    println!("  Loads:");
    for entry in &beam.loads {
        println!("    {}", load_row(entry));
    }
    println!();
    println!("Reactions:");
    println!("  {:<6} {:>12} {:>12} {:>12}", "End", "V (kN)", "H (kN)", "M (kNm)");
    print_reaction("Left", &analysis.result.reactions.left);
    print_reaction("Right", &analysis.result.reactions.right);
    println!();
    println!("Maxima:");
    println!(
        "  Shear:   {:>10.2} kN  at {:.2} m",
        summary.max_shear.value, summary.max_shear.position
    );
    println!(
        "  Moment:  {:>10.2} kNm at {:.2} m",
        summary.max_moment.value, summary.max_moment.position
    );
    println!(
        "  Axial:   {:>10.2} kN  at {:.2} m",
        summary.max_axial.value, summary.max_axial.position
    );

    if !analysis.is_conclusive() {
        println!();
        println!("Diagnostics:");
        for diagnostic in &analysis.diagnostics {
            println!("  [WARN] {}", diagnostic);
        }
    }

    println!();
    println!("Relevant formulas:");
    for formula in relevant_formulas(beam.supports, &beam.active_loads()) {
        let meta = formula.metadata();
        println!("  {:<18} {}", meta.name, meta.formula);
    }
    println!("═══════════════════════════════════════");
}

/// One line of the load table: kind, magnitude, location, angle, note, visibility
fn load_row(entry: &LoadEntry) -> String {
    let load = &entry.load;
    let mut row = format!(
        "{:<12} {:>9.2} {:<5} {}",
        load.kind().display_name(),
        load.magnitude(),
        load.kind().magnitude_units(),
        load.location_label()
    );
    if let Load::Point { angle_deg, .. } = *load {
        if load.is_inclined() {
            row.push_str(&format!(" @ {}°", angle_deg));
        }
    }
    if !entry.note.is_empty() {
        row.push_str(&format!("  \"{}\"", entry.note));
    }
    if !entry.visible {
        row.push_str("  (hidden)");
    }
    row
}

fn print_reaction(end: &str, reaction: &SupportReaction) {
    println!(
        "  {:<6} {:>12.3} {:>12.3} {:>12.3}",
        end, reaction.vertical, reaction.horizontal, reaction.moment
    );
}

fn write_csv(result: &BeamResult, path: &Path) -> CalcResult<()> {
    let csv_error =
        |e: csv::Error| CalcError::file_error("write csv", path.display().to_string(), e.to_string());

    log::info!("exporting {} stations to {}", result.len(), path.display());
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    for i in 0..result.len() {
        writer
            .serialize(StationRow {
                position: result.positions[i],
                shear_force: result.shear_force[i],
                bending_moment: result.bending_moment[i],
                axial_force: result.axial_force[i],
            })
            .map_err(csv_error)?;
    }
    writer.flush().map_err(|e| {
        CalcError::file_error("flush csv", path.display().to_string(), e.to_string())
    })?;
    Ok(())
}
