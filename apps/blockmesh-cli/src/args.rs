//! Command-line options.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use blockmesh_decode::grammar::{
    DEFAULT_DELIMITED_MARKER, DEFAULT_PREFIX_MARKER, DEFAULT_SEPARATOR,
};
use blockmesh_decode::Grammar;
use blockmesh_plot::viewport::DEFAULT_BORDER;
use blockmesh_plot::{Palette, PlotConfig, Viewport};

/// How the plan is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One rectangle per line
    #[default]
    Text,
    /// bincode-serialized plan
    Bincode,
}

/// Parsed options.
#[derive(Debug, Clone)]
pub struct Options {
    pub grammar: Grammar,
    pub plot: PlotConfig,
    pub format: OutputFormat,
    /// Input files; empty means stdin. `-` also reads stdin.
    pub inputs: Vec<PathBuf>,
    pub show_help: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum GrammarKind {
    Prefixed,
    Delimited,
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> anyhow::Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    let mut kind = GrammarKind::Prefixed;
    let mut marker: Option<String> = None;
    let mut separator: Option<char> = None;
    let mut plot = PlotConfig::default();
    let mut format = OutputFormat::default();
    let mut inputs = Vec::new();
    let mut show_help = false;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        // border only in the attached form, `--fit=0.3`
        if let Some(text) = arg.strip_prefix("--fit=") {
            let border = text
                .parse()
                .with_context(|| format!("invalid --fit border `{text}`"))?;
            plot.viewport = Viewport::Fit { border };
            i += 1;
            continue;
        }
        match arg {
            "-h" | "--help" => show_help = true,
            "-g" | "--grammar" => {
                kind = match value(&args, &mut i, arg)? {
                    "prefixed" => GrammarKind::Prefixed,
                    "delimited" => GrammarKind::Delimited,
                    other => bail!("unknown grammar `{other}` (expected prefixed or delimited)"),
                };
            }
            "-m" | "--marker" => marker = Some(value(&args, &mut i, arg)?.to_string()),
            "-s" | "--separator" => {
                let text = value(&args, &mut i, arg)?;
                let mut chars = text.chars();
                separator = match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(ch),
                    _ => bail!("separator must be a single character, got `{text}`"),
                };
            }
            "-l" | "--max-level" => {
                let text = value(&args, &mut i, arg)?;
                plot.max_level = text
                    .parse()
                    .with_context(|| format!("invalid --max-level `{text}`"))?;
            }
            "--fit" => plot.viewport = Viewport::Fit { border: DEFAULT_BORDER },
            "-u" | "--unique" => plot.unique = true,
            "-p" | "--palette" => {
                plot.palette = Palette::parse(value(&args, &mut i, arg)?)?;
            }
            "-f" | "--format" => {
                format = match value(&args, &mut i, arg)? {
                    "text" => OutputFormat::Text,
                    "bincode" => OutputFormat::Bincode,
                    other => bail!("unknown format `{other}` (expected text or bincode)"),
                };
            }
            "-" => inputs.push(PathBuf::from(arg)),
            _ if arg.starts_with('-') => bail!("unknown option `{arg}`, see --help"),
            _ => inputs.push(PathBuf::from(arg)),
        }
        i += 1;
    }

    let grammar = match kind {
        GrammarKind::Prefixed => {
            let marker = match marker.as_deref() {
                None => DEFAULT_PREFIX_MARKER,
                Some(text) => {
                    let mut chars = text.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) => ch,
                        _ => bail!("prefixed marker must be a single character, got `{text}`"),
                    }
                }
            };
            if separator.is_some() {
                bail!("--separator only applies to the delimited grammar");
            }
            Grammar::prefixed(marker)
        }
        GrammarKind::Delimited => Grammar::delimited(
            marker.unwrap_or_else(|| DEFAULT_DELIMITED_MARKER.to_string()),
            separator.unwrap_or(DEFAULT_SEPARATOR),
        ),
    };
    grammar.validate()?;
    plot.viewport.validate()?;

    Ok(Options {
        grammar,
        plot,
        format,
        inputs,
        show_help,
    })
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> anyhow::Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{flag} needs a value"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockmesh_plot::Rgb;

    fn parse(args: &[&str]) -> anyhow::Result<Options> {
        parse_args(args.iter().map(ToString::to_string))
    }

    #[test]
    fn defaults() {
        let options = parse(&[]).unwrap();
        assert_eq!(options.grammar, Grammar::prefixed('Z'));
        assert_eq!(options.plot.max_level, 10);
        assert_eq!(options.plot.viewport, Viewport::default());
        assert_eq!(options.format, OutputFormat::Text);
        assert!(options.inputs.is_empty());
        assert!(!options.show_help);
    }

    #[test]
    fn delimited_with_custom_parts() {
        let options = parse(&["--grammar", "delimited", "-m", "blk#", "-s", "_"]).unwrap();
        assert_eq!(options.grammar, Grammar::delimited("blk#", '_'));
    }

    #[test]
    fn prefixed_marker_must_be_one_char() {
        assert!(parse(&["--marker", "BB"]).is_err());
        assert_eq!(
            parse(&["--marker", "B"]).unwrap().grammar,
            Grammar::prefixed('B')
        );
        assert!(parse(&["--separator", ":"]).is_err());
    }

    #[test]
    fn fit_border_is_attached() {
        let options = parse(&["--fit", "mesh.log"]).unwrap();
        assert_eq!(options.plot.viewport, Viewport::fit());
        assert_eq!(options.inputs, vec![PathBuf::from("mesh.log")]);

        let options = parse(&["--fit=0.5"]).unwrap();
        assert_eq!(options.plot.viewport, Viewport::Fit { border: 0.5 });

        assert!(parse(&["--fit=-1"]).is_err());
        assert!(parse(&["--fit=wide"]).is_err());
    }

    #[test]
    fn fit_leaves_numeric_file_names_alone() {
        let options = parse(&["--fit", "2024", "0.5"]).unwrap();
        assert_eq!(options.plot.viewport, Viewport::fit());
        assert_eq!(
            options.inputs,
            vec![PathBuf::from("2024"), PathBuf::from("0.5")]
        );
    }

    #[test]
    fn plot_options() {
        let options = parse(&["-l", "4", "--unique", "--palette", "blue,cyan", "-f", "bincode"])
            .unwrap();
        assert_eq!(options.plot.max_level, 4);
        assert!(options.plot.unique);
        assert_eq!(options.plot.palette.colors(), &[Rgb::BLUE, Rgb::CYAN]);
        assert_eq!(options.format, OutputFormat::Bincode);
    }

    #[test]
    fn inputs_and_stdin() {
        let options = parse(&["a.log", "-", "b.log"]).unwrap();
        assert_eq!(
            options.inputs,
            vec![
                PathBuf::from("a.log"),
                PathBuf::from("-"),
                PathBuf::from("b.log")
            ]
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["--grammar", "octal"]).is_err());
        assert!(parse(&["--max-level"]).is_err());
        assert!(parse(&["--max-level", "ten"]).is_err());
        assert!(parse(&["--format", "png"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
    }
}
