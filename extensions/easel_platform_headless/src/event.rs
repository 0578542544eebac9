//! Recorded native events and trace files
//!
//! A trace is a JSON-lines file: one [`NativeMessage`] per line, blank lines
//! and lines starting with `#` ignored. For example:
//!
//! ```text
//! # press the left button at (10, 20), then type 'a' with shift held
//! {"type":"mouse_down","x":10,"y":20,"button":0,"clicks":1,"pressed":1}
//! {"type":"flags_changed","key_code":56,"flags":131072}
//! {"type":"key_down","key_code":0,"flags":131072}
//! {"type":"draw_rect","x":0,"y":0,"width":64,"height":64}
//! ```

use serde::{Deserialize, Serialize};

use easel_area::NativeEvent;

use crate::error::{HeadlessError, Result};

/// The fields a native event object exposes
///
/// Every field defaults to zero so a trace line only names what matters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadlessEvent {
    pub x: f64,
    pub y: f64,
    pub flags: u64,
    pub button: u32,
    pub clicks: u32,
    pub pressed: u64,
    pub key_code: u16,
}

impl NativeEvent for HeadlessEvent {
    fn location(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn modifier_flags(&self) -> u64 {
        self.flags
    }

    fn button_number(&self) -> u32 {
        self.button
    }

    fn click_count(&self) -> u32 {
        self.clicks
    }

    fn pressed_mouse_buttons(&self) -> u64 {
        self.pressed
    }

    fn key_code(&self) -> u16 {
        self.key_code
    }
}

/// One native callback, or one layout-pass call, in a trace
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NativeMessage {
    DrawRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    MouseMoved(HeadlessEvent),
    MouseDown(HeadlessEvent),
    MouseUp(HeadlessEvent),
    KeyDown(HeadlessEvent),
    KeyUp(HeadlessEvent),
    FlagsChanged(HeadlessEvent),
    /// Invalidate the whole area
    RepaintAll,
    /// Resize the area
    SetSize { width: u32, height: u32 },
    /// Run one layout pass placing the area at this rectangle
    Layout {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// Parse a JSON-lines trace
pub fn parse_trace(text: &str) -> Result<Vec<NativeMessage>> {
    let mut messages = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let message = serde_json::from_str(line).map_err(|source| HeadlessError::Parse {
            line: index + 1,
            source,
        })?;
        messages.push(message);
    }
    Ok(messages)
}
