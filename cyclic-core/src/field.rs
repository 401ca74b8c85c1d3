//! Text model for the numeric entry box next to the track.

/// Decimal places needed to show multiples of `step` exactly (at most 6).
pub fn step_decimals(step: f64) -> usize {
    let mut decimals = 0;
    let mut scaled = step.abs();
    while decimals < 6 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

/// Format `value` with the precision implied by `step`.
pub fn format_value(value: f64, step: f64) -> String {
    let text = format!("{:.*}", step_decimals(step), value);
    // "-0" and "-0.0" read as a sign glitch in a spin box.
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

/// Editable text buffer that mirrors the slider value when not in use.
///
/// Edits return the parsed number whenever the buffer holds a finite value,
/// which the host feeds to [`crate::CyclicSlider::input`]. Partial entries
/// such as `""`, `"-"` or `"."` parse to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberField {
    buffer: String,
    editing: bool,
}

impl NumberField {
    pub fn new(value: f64, step: f64) -> Self {
        Self {
            buffer: format_value(value, step),
            editing: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Refresh the text from the model; no-op while the user is typing.
    pub fn sync(&mut self, value: f64, step: f64) {
        if !self.editing {
            self.buffer = format_value(value, step);
        }
    }

    /// Type one character. Starting an edit replaces the displayed value.
    ///
    /// Accepts digits, a leading `-` and a single `.`; anything else is
    /// dropped and returns `None`.
    pub fn insert(&mut self, c: char) -> Option<f64> {
        if !self.editing {
            self.buffer.clear();
            self.editing = true;
        }
        let accepted = match c {
            '0'..='9' => true,
            '-' => self.buffer.is_empty(),
            '.' => !self.buffer.contains('.'),
            _ => false,
        };
        if !accepted {
            return None;
        }
        self.buffer.push(c);
        self.parsed()
    }

    pub fn backspace(&mut self) -> Option<f64> {
        self.editing = true;
        self.buffer.pop();
        self.parsed()
    }

    /// Leave editing mode, returning the value to commit.
    pub fn finish(&mut self) -> Option<f64> {
        self.editing = false;
        self.parsed()
    }

    /// Drop the edit and show `value` again.
    pub fn abandon(&mut self, value: f64, step: f64) {
        self.editing = false;
        self.sync(value, step);
    }

    fn parsed(&self) -> Option<f64> {
        self.buffer
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}
