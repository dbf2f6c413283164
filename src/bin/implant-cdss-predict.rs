//! Score one feature row from the terminal with the same model and inference
//! path as the desktop form.

use std::path::PathBuf;

use implant_cdss::features::FeatureVector;
use implant_cdss::headless;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone, Default)]
struct CliOptions {
    model_path: Option<PathBuf>,
    features: FeatureVector,
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    for line in headless::predict_lines(options.model_path, &options.features)? {
        println!("{line}");
    }
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        let flag = args[idx].as_str();
        if matches!(flag, "-h" | "--help") {
            return Err(help_text());
        }
        idx += 1;
        let value = args
            .get(idx)
            .ok_or_else(|| format!("{flag} requires a value"))?;
        let features = &mut options.features;
        match flag {
            "--model" => options.model_path = Some(PathBuf::from(value)),
            "--bbox-count" => {
                features.bbox_count = value
                    .parse()
                    .map_err(|_| format!("--bbox-count must be a non-negative integer, got {value}"))?;
            }
            "--avg-width" => features.avg_width = parse_float(flag, value)?,
            "--avg-height" => features.avg_height = parse_float(flag, value)?,
            "--mean-y-center" => features.mean_y_center = parse_float(flag, value)?,
            "--failure-ratio" => features.failure_ratio = parse_float(flag, value)?,
            unknown => return Err(format!("Unknown argument: {unknown}\n\n{}", help_text())),
        }
        idx += 1;
    }
    Ok(options)
}

fn parse_float(flag: &str, value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("{flag} must be a number, got {value}"))
}

fn help_text() -> String {
    [
        "implant-cdss-predict",
        "",
        "Predict dental implant outcome for one set of radiographic features.",
        "",
        "Usage:",
        "  implant-cdss-predict [--model <path>] --bbox-count <n> --avg-width <f>",
        "                       --avg-height <f> --mean-y-center <f> --failure-ratio <f>",
        "",
        "Omitted features default to 0. Without --model, model_path from config.toml is used.",
    ]
    .join("\n")
}
