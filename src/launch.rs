//! Command-line overrides for a single launch of the desktop form.

use std::path::PathBuf;

use crate::config::{AppSettings, PresentationVariant};

/// Overrides parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchOptions {
    pub model_path: Option<PathBuf>,
    pub variant: Option<PresentationVariant>,
}

impl LaunchOptions {
    /// Replace file settings with whatever was given on the command line.
    pub fn apply(&self, mut settings: AppSettings) -> AppSettings {
        if let Some(path) = &self.model_path {
            settings.model_path = path.clone();
        }
        if let Some(variant) = self.variant {
            settings.variant = variant;
        }
        settings
    }
}

/// Parse launch arguments (without the program name).
///
/// `Err` carries either a usage problem or, for `--help`, the help text.
pub fn parse_args(args: Vec<String>) -> Result<LaunchOptions, String> {
    let mut options = LaunchOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => return Err(help_text()),
            "--model" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--model requires a value".to_string())?;
                options.model_path = Some(PathBuf::from(value));
            }
            "--variant" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--variant requires a value".to_string())?;
                options.variant = Some(value.parse()?);
            }
            unknown => return Err(format!("Unknown argument: {unknown}\n\n{}", help_text())),
        }
        idx += 1;
    }
    Ok(options)
}

fn help_text() -> String {
    [
        "implant-cdss",
        "",
        "Desktop form that predicts dental implant outcome from five radiographic features.",
        "",
        "Usage:",
        "  implant-cdss [--model <path>] [--variant standard|compact]",
        "",
        "Options:",
        "  --model <path>     Model artifact (default: model_path from config.toml)",
        "  --variant <name>   Form variant: standard or compact",
        "  -h, --help         Show this help",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn no_arguments_keep_file_settings() {
        let options = parse_args(Vec::new()).unwrap();
        let settings = AppSettings::default();
        assert_eq!(options.apply(settings.clone()), settings);
    }

    #[test]
    fn overrides_replace_model_and_variant() {
        let options = parse_args(args(&["--model", "alt.json", "--variant", "compact"])).unwrap();
        let settings = options.apply(AppSettings::default());
        assert_eq!(settings.model_path, PathBuf::from("alt.json"));
        assert_eq!(settings.variant, PresentationVariant::Compact);
    }

    #[test]
    fn missing_value_and_unknown_flag_are_rejected() {
        assert_eq!(
            parse_args(args(&["--model"])),
            Err("--model requires a value".to_string())
        );
        let err = parse_args(args(&["--bogus"])).unwrap_err();
        assert!(err.starts_with("Unknown argument: --bogus"));
        assert!(parse_args(args(&["--variant", "neon"])).is_err());
    }
}
