//! Gesture scripts for `mapedit replay`.
//!
//! One step per line:
//!
//! ```text
//! tool goomba
//! down 2 3 secondary
//! enter 2 4
//! up
//! ```
//!
//! `down` defaults to the primary button. Anything after `#` is ignored.

use anyhow::{Context, Result, bail};
use mapedit_paint::{PointerButton, PointerEvent};

/// A single replayable step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// Switch the active tool.
    SelectTool(String),
    /// Feed a pointer event to the paint controller.
    Pointer(PointerEvent),
}

/// Parses a whole script, reporting the first bad line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let step = parse_line(line).with_context(|| format!("line {}: `{}`", index + 1, line))?;
        steps.push(step);
    }
    Ok(steps)
}

fn parse_line(line: &str) -> Result<ScriptStep> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let step = match words.as_slice() {
        ["tool", id] => ScriptStep::SelectTool((*id).to_string()),
        ["down", row, col] => ScriptStep::Pointer(PointerEvent::Down {
            row: parse_index(row)?,
            col: parse_index(col)?,
            button: PointerButton::Primary,
        }),
        ["down", row, col, button] => ScriptStep::Pointer(PointerEvent::Down {
            row: parse_index(row)?,
            col: parse_index(col)?,
            button: parse_button(button)?,
        }),
        ["enter", row, col] => ScriptStep::Pointer(PointerEvent::Enter {
            row: parse_index(row)?,
            col: parse_index(col)?,
        }),
        ["up"] => ScriptStep::Pointer(PointerEvent::Up),
        ["leave"] => ScriptStep::Pointer(PointerEvent::Leave),
        _ => bail!(
            "expected `tool <id>`, `down <row> <col> [button]`, `enter <row> <col>`, `up` or `leave`"
        ),
    };
    Ok(step)
}

fn parse_index(word: &str) -> Result<usize> {
    word.parse()
        .with_context(|| format!("`{word}` is not a cell index"))
}

fn parse_button(word: &str) -> Result<PointerButton> {
    match word {
        "primary" | "left" => Ok(PointerButton::Primary),
        "secondary" | "right" => Ok(PointerButton::Secondary),
        "auxiliary" | "middle" => Ok(PointerButton::Auxiliary),
        other => bail!("unknown button `{other}`"),
    }
}
