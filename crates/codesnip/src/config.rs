//! Command-line configuration.
//!
//! Arguments are parsed by hand. Value flags accept both `--flag value` and
//! `--flag=value`.

use std::path::PathBuf;

use snip_render::{RenderConfig, Theme};

use crate::{LineRange, SnipError};

/// Output path used when `-o` is not given.
pub const DEFAULT_OUTPUT: &str = "code.png";

/// Font used when neither `--font` nor [`FONT_ENV_VAR`] is given.
pub const DEFAULT_FONT: &str = "./resources/fonts/SourceCodePro-Regular.ttf";

/// Environment variable overriding [`DEFAULT_FONT`].
pub const FONT_ENV_VAR: &str = "CODESNIP_FONT";

pub const DEFAULT_TAB_WIDTH: usize = 4;

pub const USAGE: &str = "\
Usage: codesnip <file> [N-M] [options]

Renders lines N through M of <file> (the whole file if no range is given)
as a syntax-highlighted PNG.

Options:
  -o, --output <path>   Output image (default: code.png)
  --font <path>         TrueType/OpenType font (default: $CODESNIP_FONT or
                        ./resources/fonts/SourceCodePro-Regular.ttf)
  --size <px>           Font size in pixels (default: 24)
  --tab-width <n>       Spaces per tab stop (default: 4)
  --theme <name>        Color theme: dark, light (default: dark)
  --tokens              Print the token stream instead of rendering
  -h, --help            Show this message";

/// Everything one run needs.
#[derive(Clone, Debug, PartialEq)]
pub struct SnipConfig {
    pub path: PathBuf,
    /// Unvalidated; checked against the file once it is loaded.
    pub range: Option<LineRange>,
    pub output: PathBuf,
    pub font: PathBuf,
    pub tab_width: usize,
    pub theme: Theme,
    pub render: RenderConfig,
    pub dump_tokens: bool,
}

impl Default for SnipConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            range: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            font: PathBuf::from(DEFAULT_FONT),
            tab_width: DEFAULT_TAB_WIDTH,
            theme: Theme::default(),
            render: RenderConfig::default(),
            dump_tokens: false,
        }
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Help,
    Snip(SnipConfig),
}

/// Parse arguments (without the program name).
///
/// `font_env` is the value of [`FONT_ENV_VAR`], if set; `--font` wins over it.
pub fn parse_args(args: &[String], font_env: Option<PathBuf>) -> Result<Command, SnipError> {
    let mut config = SnipConfig::default();
    if let Some(font) = font_env {
        config.font = font;
    }

    let mut path = None;
    let mut range = None;
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value)),
            _ => (arg, None),
        };
        i += 1;
        let mut value = || take_value(args, &mut i, flag, inline);

        match flag {
            "-h" | "--help" => return Ok(Command::Help),
            "-o" | "--output" => config.output = PathBuf::from(value()?),
            "--font" => config.font = PathBuf::from(value()?),
            "--size" => config.render.font_size = parse_size(value()?)?,
            "--tab-width" => config.tab_width = parse_tab_width(value()?)?,
            "--theme" => {
                let name = value()?;
                config.theme = Theme::by_name(name)
                    .ok_or_else(|| SnipError::Usage(format!("unknown theme '{name}'")))?;
            }
            "--tokens" => config.dump_tokens = true,
            _ if flag.starts_with('-') && flag.len() > 1 => {
                return Err(SnipError::Usage(format!("unknown option '{arg}'")));
            }
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ if range.is_none() => range = Some(LineRange::parse(arg)?),
            _ => return Err(SnipError::Usage(format!("unexpected argument '{arg}'"))),
        }
    }

    config.path = path.ok_or_else(|| SnipError::Usage("missing file path".to_owned()))?;
    config.range = range;
    Ok(Command::Snip(config))
}

/// The value of `flag`: the inline `=value` if present, else the next argument.
fn take_value<'a>(
    args: &'a [String],
    i: &mut usize,
    flag: &str,
    inline: Option<&'a str>,
) -> Result<&'a str, SnipError> {
    if let Some(value) = inline {
        return Ok(value);
    }
    let next = args
        .get(*i)
        .ok_or_else(|| SnipError::Usage(format!("missing value for '{flag}'")))?;
    *i += 1;
    Ok(next)
}

fn parse_size(text: &str) -> Result<f32, SnipError> {
    match text.parse::<f32>() {
        Ok(size) if size.is_finite() && size > 0.0 => Ok(size),
        _ => Err(SnipError::Usage(format!("invalid font size '{text}'"))),
    }
}

fn parse_tab_width(text: &str) -> Result<usize, SnipError> {
    match text.parse::<usize>() {
        Ok(width) if width > 0 => Ok(width),
        _ => Err(SnipError::Usage(format!("invalid tab width '{text}'"))),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
