use std::path::Path;

use clap::value_parser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use plotfit::defaults;
use plotfit::error::DataError;
use plotfit::language::RecordCollection;
use plotfit::output::{self, Summary};
use plotfit::parsing::{self, ParsingError};
use plotfit::project::Project;

/// Arguments describing a dataset, shared by the subcommands.
fn dataset_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("title")
                .short('t')
                .long("title")
                .value_name("TITLE")
                .default_value(defaults::TITLE)
                .help("Title of the plot."),
        )
        .arg(
            Arg::new("x-label")
                .short('x')
                .long("x-label")
                .value_name("X_LABEL")
                .default_value(defaults::X_LABEL)
                .help("Label for the x axis."),
        )
        .arg(
            Arg::new("y-label")
                .short('y')
                .long("y-label")
                .value_name("Y_LABEL")
                .default_value(defaults::Y_LABEL)
                .help("Label for the y axis."),
        )
        .arg(
            Arg::new("dux")
                .short('X')
                .long("default-ux")
                .value_name("DEFAULT_X_UNCERTAINTY")
                .value_parser(value_parser!(f64))
                .help("Uncertainty in x for lines which don't give one [default: 0.01]."),
        )
        .arg(
            Arg::new("duy")
                .short('Y')
                .long("default-uy")
                .value_name("DEFAULT_Y_UNCERTAINTY")
                .value_parser(value_parser!(f64))
                .help("Uncertainty in y for lines which give only x and y [default: 0.01]."),
        )
}

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    // Logging goes to stderr so that reports on stdout can be redirected.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("plotfit=warn")),
        )
        .init();

    let matches = Command::new("plotfit")
        .version(VERSION)
        .propagate_version(true)
        .about("Fit best, maximum, and minimum gradient lines through two-variable measurement data.")
        .disable_help_subcommand(true)
        .subcommand(
            dataset_args(
                Command::new("fit")
                    .about("Parse the given data file and report the fitted lines")
                    .arg(
                        Arg::new("psp")
                            .short('p')
                            .long("psp")
                            .action(ArgAction::SetTrue)
                            .conflicts_with_all(["title", "x-label", "y-label", "dux", "duy"])
                            .help("Read the file as a saved project rather than plain data."),
                    )
                    .arg(
                        Arg::new("json")
                            .long("json")
                            .action(ArgAction::SetTrue)
                            .help("Emit the records and fitted lines as JSON."),
                    )
                    .arg(
                        Arg::new("precision")
                            .long("precision")
                            .value_name("DIGITS")
                            .value_parser(value_parser!(usize))
                            .default_value("6")
                            .help("Decimal places to show for slopes and intercepts."),
                    ),
            )
            .arg(
                Arg::new("filename")
                    .required(true)
                    .help("The file containing the measurements, one per line."),
            ),
        )
        .subcommand(
            dataset_args(
                Command::new("save")
                    .about("Bundle the given data file with its title, labels, and uncertainties into a project file")
                    .arg(
                        Arg::new("output")
                            .short('o')
                            .long("output")
                            .value_name("PATH")
                            .required(true)
                            .help("Where to write the project file."),
                    ),
            )
            .arg(
                Arg::new("filename")
                    .required(true)
                    .help("The file containing the measurements, one per line."),
            ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("fit", submatches)) => {
            if let Some(filename) = submatches.get_one::<String>("filename") {
                fit(Path::new(filename), submatches)
            }
        }
        Some(("save", submatches)) => {
            if let Some(filename) = submatches.get_one::<String>("filename") {
                save(Path::new(filename), submatches)
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: plotfit [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

struct Dataset {
    title: String,
    x_label: String,
    y_label: String,
    dux: f64,
    duy: f64,
    content: String,
}

fn string_arg(submatches: &ArgMatches, id: &str) -> String {
    submatches
        .get_one::<String>(id)
        .cloned()
        .unwrap_or_default()
}

fn number_arg(submatches: &ArgMatches, id: &str, fallback: f64) -> f64 {
    submatches
        .get_one::<f64>(id)
        .copied()
        .unwrap_or(fallback)
}

/// Load a plain data file, taking title, labels, and default uncertainties
/// from the command line.
fn load_plain(filename: &Path, submatches: &ArgMatches) -> (Dataset, RecordCollection) {
    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    };

    let dataset = Dataset {
        title: string_arg(submatches, "title"),
        x_label: string_arg(submatches, "x-label"),
        y_label: string_arg(submatches, "y-label"),
        dux: number_arg(submatches, "dux", defaults::X_UNCERTAINTY),
        duy: number_arg(submatches, "duy", defaults::Y_UNCERTAINTY),
        content,
    };

    let records = check_records(
        filename,
        &dataset.content,
        parsing::parse(&dataset.content, dataset.dux, dataset.duy),
    );

    (dataset, records)
}

fn load_project(filename: &Path) -> (Dataset, RecordCollection) {
    let project = match Project::load(filename) {
        Ok(project) => project,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    };

    let records = check_records(filename, &project.dataset, project.records());

    let dataset = Dataset {
        title: project.title,
        x_label: project.x_label,
        y_label: project.y_label,
        dux: project.default_x_uncertainty,
        duy: project.default_y_uncertainty,
        content: project.dataset,
    };

    (dataset, records)
}

/// Report a malformed line against the text it came from, and give up.
fn check_records(
    filename: &Path,
    content: &str,
    result: Result<RecordCollection, ParsingError>,
) -> RecordCollection {
    match result {
        Ok(records) => records,
        Err(error) => {
            let problem = DataError::from_parsing(&error, filename, content);
            eprintln!("{}", problem.full_details());
            std::process::exit(1);
        }
    }
}

fn fit(filename: &Path, submatches: &ArgMatches) {
    info!("Fitting file: {}", filename.display());

    let (dataset, records) = if submatches.get_flag("psp") {
        load_project(filename)
    } else {
        load_plain(filename, submatches)
    };

    let summary = match Summary::new(
        &dataset.title,
        &dataset.x_label,
        &dataset.y_label,
        &records,
    ) {
        Ok(summary) => summary,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(2);
        }
    };

    let result = if submatches.get_flag("json") {
        output::via_json(&summary)
    } else {
        let precision = submatches
            .get_one::<usize>("precision")
            .copied()
            .unwrap_or(6);
        output::via_text(&summary, precision)
    };

    match result {
        Ok(rendered) => print!("{}", rendered),
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    }
}

fn save(filename: &Path, submatches: &ArgMatches) {
    let target = string_arg(submatches, "output");
    let target = Path::new(&target);

    // Refuse to save data that won't load again
    let (dataset, records) = load_plain(filename, submatches);
    debug!("Saving {} records", records.len());

    let project = Project {
        title: dataset.title,
        x_label: dataset.x_label,
        y_label: dataset.y_label,
        default_x_uncertainty: dataset.dux,
        default_y_uncertainty: dataset.duy,
        dataset: dataset.content,
        ..Project::default()
    };

    if let Err(error) = project.save(target) {
        eprintln!("{}: {}", "error".bright_red(), error);
        std::process::exit(1);
    }
}
