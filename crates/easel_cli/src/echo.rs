//! Replay handler
//!
//! Paints every requested rectangle with a solid color and prints what the
//! area delivered to it as JSON on stdout.

use serde::Serialize;

use easel_platform::{Handler, KeyEvent, MouseEvent, PixelBuffer, Rect};

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Delivered<'a> {
    Paint { clip: Rect },
    Mouse(&'a MouseEvent),
    Key(&'a KeyEvent),
}

pub struct EchoHandler {
    fill: [u8; 4],
    pretty: bool,
}

impl EchoHandler {
    pub fn new(fill: [u8; 4], pretty: bool) -> Self {
        Self { fill, pretty }
    }

    fn print(&self, delivered: Delivered<'_>) {
        let json = if self.pretty {
            serde_json::to_string_pretty(&delivered)
        } else {
            serde_json::to_string(&delivered)
        };
        match json {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::warn!("Failed to serialize event: {}", e),
        }
    }
}

impl Handler for EchoHandler {
    fn paint(&mut self, clip: Rect) -> PixelBuffer {
        self.print(Delivered::Paint { clip });
        PixelBuffer::filled(clip, self.fill)
    }

    fn mouse(&mut self, event: MouseEvent) {
        self.print(Delivered::Mouse(&event));
    }

    fn key(&mut self, event: KeyEvent) {
        self.print(Delivered::Key(&event));
    }
}
