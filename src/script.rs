//! Gesture scripts: pointer events and host commands replayed by the CLI.
//!
//! One command per line. Blank lines and lines starting with `#` are ignored.
//!
//! ```text
//! # a short red line, then undo it
//! color red
//! brush large
//! down 10 10
//! move 50 10
//! up
//! undo
//! save
//! ```

use crate::config::BrushPreset;
use crate::input::PointerEvent;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a gesture script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Brush size argument: a preset button or explicit units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrushSize {
    Preset(BrushPreset),
    Units(f64),
}

/// One line of a gesture script.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Pointer(PointerEvent),
    Undo,
    Color(String),
    Palette(usize),
    Brush(BrushSize),
    Resize(i32, i32),
    Background(PathBuf),
    Save,
}

/// Parsed gesture script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    pub commands: Vec<ScriptCommand>,
}

impl Script {
    /// Reads and parses a script file.
    ///
    /// Relative `background` paths are resolved against the script's directory.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut script = Self::parse(&text)?;

        if let Some(base) = path.parent() {
            for command in &mut script.commands {
                if let ScriptCommand::Background(image) = command {
                    if image.is_relative() {
                        *image = base.join(&*image);
                    }
                }
            }
        }

        log::debug!(
            "Loaded {} commands from {}",
            script.commands.len(),
            path.display()
        );
        Ok(script)
    }

    /// Parses script text.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut commands = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let command = parse_line(line).map_err(|message| ScriptError::Parse {
                line: index + 1,
                message,
            })?;
            commands.push(command);
        }
        Ok(Self { commands })
    }
}

fn parse_line(line: &str) -> Result<ScriptCommand, String> {
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match keyword.to_lowercase().as_str() {
        "down" => {
            let (x, y) = coordinates(&args)?;
            ScriptCommand::Pointer(PointerEvent::Down { x, y })
        }
        "move" => {
            let (x, y) = coordinates(&args)?;
            ScriptCommand::Pointer(PointerEvent::Move { x, y })
        }
        "up" => {
            no_args(keyword, &args)?;
            ScriptCommand::Pointer(PointerEvent::Up)
        }
        "cancel" => {
            no_args(keyword, &args)?;
            ScriptCommand::Pointer(PointerEvent::Cancel)
        }
        "undo" => {
            no_args(keyword, &args)?;
            ScriptCommand::Undo
        }
        "save" => {
            no_args(keyword, &args)?;
            ScriptCommand::Save
        }
        // Unknown names pass through; the surface rejects them.
        "color" => match args.as_slice() {
            [spec] => ScriptCommand::Color((*spec).to_string()),
            _ => return Err("expected: color SPEC".to_string()),
        },
        "palette" => match args.as_slice() {
            [index] => ScriptCommand::Palette(
                index
                    .parse()
                    .map_err(|_| format!("invalid palette index '{}'", index))?,
            ),
            _ => return Err("expected: palette INDEX".to_string()),
        },
        "brush" => match args.as_slice() {
            [size] => match BrushPreset::from_name(size) {
                Some(preset) => ScriptCommand::Brush(BrushSize::Preset(preset)),
                None => ScriptCommand::Brush(BrushSize::Units(number(size)?)),
            },
            _ => return Err("expected: brush SIZE|small|medium|large".to_string()),
        },
        "resize" => match args.as_slice() {
            [w, h] => ScriptCommand::Resize(
                w.parse().map_err(|_| format!("invalid width '{}'", w))?,
                h.parse().map_err(|_| format!("invalid height '{}'", h))?,
            ),
            _ => return Err("expected: resize W H".to_string()),
        },
        "background" => {
            if rest.is_empty() {
                return Err("expected: background PATH".to_string());
            }
            ScriptCommand::Background(PathBuf::from(rest))
        }
        other => return Err(format!("unknown command '{}'", other)),
    };

    Ok(command)
}

fn number(text: &str) -> Result<f64, String> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("invalid number '{}'", text)),
    }
}

fn coordinates(args: &[&str]) -> Result<(f64, f64), String> {
    match args {
        [x, y] => Ok((number(x)?, number(y)?)),
        _ => Err("expected two coordinates".to_string()),
    }
}

fn no_args(keyword: &str, args: &[&str]) -> Result<(), String> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(format!("'{}' takes no arguments", keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_every_command() {
        let script = Script::parse(
            "# comment\n\
             down 1 2\n\
             move 3.5 4\n\
             up\n\
             \n\
             cancel\n\
             undo\n\
             color #FF0000\n\
               # indented comment\n\
             palette 3\n\
             brush small\n\
             brush 12.5\n\
             resize 640 480\n\
             background photos/cat.png\n\
             save\n",
        )
        .unwrap();

        assert_eq!(
            script.commands,
            vec![
                ScriptCommand::Pointer(PointerEvent::Down { x: 1.0, y: 2.0 }),
                ScriptCommand::Pointer(PointerEvent::Move { x: 3.5, y: 4.0 }),
                ScriptCommand::Pointer(PointerEvent::Up),
                ScriptCommand::Pointer(PointerEvent::Cancel),
                ScriptCommand::Undo,
                ScriptCommand::Color("#FF0000".to_string()),
                ScriptCommand::Palette(3),
                ScriptCommand::Brush(BrushSize::Preset(BrushPreset::Small)),
                ScriptCommand::Brush(BrushSize::Units(12.5)),
                ScriptCommand::Resize(640, 480),
                ScriptCommand::Background(PathBuf::from("photos/cat.png")),
                ScriptCommand::Save,
            ]
        );
    }

    #[test]
    fn errors_carry_line_numbers() {
        let err = Script::parse("down 1 2\n\nmove 1\n").unwrap_err();
        match err {
            ScriptError::Parse { line, ref message } => {
                assert_eq!(line, 3);
                assert!(message.contains("coordinates"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert_eq!(
            Script::parse("jump").unwrap_err().to_string(),
            "line 1: unknown command 'jump'"
        );
    }

    #[test]
    fn rejects_bad_numbers_and_extra_arguments() {
        assert!(Script::parse("down x 1").is_err());
        assert!(Script::parse("down inf 1").is_err());
        assert!(Script::parse("up 1").is_err());
        assert!(Script::parse("palette -1").is_err());
        assert!(Script::parse("brush").is_err());
    }

    #[test]
    fn load_resolves_background_relative_to_script() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("draw.txt");
        fs::write(&path, "background cat.png\nbackground /abs/dog.png\n").unwrap();

        let script = Script::load(&path).unwrap();
        assert_eq!(
            script.commands,
            vec![
                ScriptCommand::Background(temp.path().join("cat.png")),
                ScriptCommand::Background(PathBuf::from("/abs/dog.png")),
            ]
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Script::load(&temp.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, ScriptError::Io { .. }));
    }
}
