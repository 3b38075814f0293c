//! # Beamline CLI
//!
//! Prints support reactions and a summary of every diagram for a beam
//! document. Without a document it runs a built-in demo beam.
//!
//! ```text
//! beam_cli [document.json] [--json]
//! ```
//!
//! Set `RUST_LOG=debug` to see sampling details.

use std::path::PathBuf;
use std::process::ExitCode;

use beam_core::calculations::DiagramKind;
use beam_core::overlay::load_markers;
use beam_core::{format, AnalysisResults, Beam, BeamDocument, BeamError, Load};

struct Args {
    document: Option<PathBuf>,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        document: None,
        json: false,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => args.json = true,
            "-h" | "--help" => return Err(usage()),
            flag if flag.starts_with('-') => return Err(format!("Unknown option: {}\n{}", flag, usage())),
            path if args.document.is_none() => args.document = Some(PathBuf::from(path)),
            extra => return Err(format!("Unexpected argument: {}\n{}", extra, usage())),
        }
    }
    Ok(args)
}

fn usage() -> String {
    "Usage: beam_cli [document.json] [--json]".to_string()
}

/// Simply supported 100-unit beam with a 10-unit mass at midspan
fn demo_document() -> Result<BeamDocument, BeamError> {
    let mut doc = BeamDocument::new("Demo", Beam::simply_supported(100.0, 2.1e11));
    doc.add_load(Load::point("Load 1", 50.0, 10.0))?;
    Ok(doc)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let document = match &args.document {
        Some(path) => {
            log::info!("loading {}", path.display());
            BeamDocument::load(path)
        }
        None => {
            println!("No document given. Running demo beam...");
            println!();
            demo_document()
        }
    };

    match document.and_then(|doc| doc.analyze().map(|results| (doc, results))) {
        Ok((doc, results)) => {
            print_report(&doc, &results);
            if args.json {
                println!();
                println!("JSON Output:");
                match serde_json::to_string_pretty(&results) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

/// Arrow marker positions under a load, formatted against the beam length
fn marker_positions(load: &Load, beam: &Beam) -> String {
    let fmt = format(beam.length);
    load_markers(load, beam)
        .into_iter()
        .map(|x| fmt(x))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_report(doc: &BeamDocument, results: &AnalysisResults) {
    let beam = &doc.beam;

    println!("═══════════════════════════════════════");
    println!("  {}", doc.meta.title);
    println!("═══════════════════════════════════════");
    println!();
    println!("Beam:");
    println!("  Support:  {}", beam.support);
    println!("  Length:   {}", beam.length);
    println!("  EI:       {}", format(beam.flexural_rigidity())(beam.flexural_rigidity()));
    println!("  Gravity:  {}", beam.gravity);
    println!();
    println!("Loads:");
    if doc.loads.is_empty() {
        println!("  (none)");
    }
    for (_, load) in doc.loads.iter() {
        println!("  {}", load.describe());
        println!("    markers at x = {}", marker_positions(load, beam));
    }
    println!();

    let r1 = results.reactions.r1;
    println!("Reactions:");
    println!("  R1 = {}", format(r1)(r1));
    if let Some(r2) = results.reactions.r2 {
        println!("  R2 = {}", format(r2)(r2));
    }
    println!();

    for kind in DiagramKind::ALL {
        let diagram = results.diagram(kind);
        let fmt = diagram.formatter();
        println!("{}:", kind);
        if let (Some(max), Some(min)) = (diagram.max(), diagram.min()) {
            println!("  max = {} at x = {}", fmt.format(max.y), max.x);
            println!("  min = {} at x = {}", fmt.format(min.y), min.x);
        }
        println!("  scale = ±{}", fmt.format(diagram.scale));
        println!();
    }
    println!("═══════════════════════════════════════");
}
