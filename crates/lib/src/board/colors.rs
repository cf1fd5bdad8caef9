//! Colours and the board-level colour table.

/// A colour with normalised channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Builds a colour from 0-255 channel values
    pub fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }

    /// Converts back to 0-255 channel values.
    ///
    /// Channels are rounded and clamped, so this is the exact inverse of
    /// [`from_channels`](Self::from_channels).
    pub fn to_channels(self) -> [u8; 3] {
        let channel = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }
}

/// Named colours stored in a board's `board_config`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardColors {
    pub background: Rgb,
    pub post: Rgb,
    pub connection: Rgb,
    pub selected_connection: Rgb,
    pub text: Rgb,
}

impl BoardColors {
    /// `board_config` keys in file order
    pub const KEYS: [&'static str; 5] = [
        "bg_color",
        "post_color",
        "connection_color",
        "selected_connection_color",
        "text_color",
    ];

    /// Colour stored under a `board_config` key
    pub fn get(&self, key: &str) -> Option<Rgb> {
        match key {
            "bg_color" => Some(self.background),
            "post_color" => Some(self.post),
            "connection_color" => Some(self.connection),
            "selected_connection_color" => Some(self.selected_connection),
            "text_color" => Some(self.text),
            _ => None,
        }
    }

    /// Mutable colour stored under a `board_config` key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Rgb> {
        match key {
            "bg_color" => Some(&mut self.background),
            "post_color" => Some(&mut self.post),
            "connection_color" => Some(&mut self.connection),
            "selected_connection_color" => Some(&mut self.selected_connection),
            "text_color" => Some(&mut self.text),
            _ => None,
        }
    }
}

impl Default for BoardColors {
    fn default() -> Self {
        Self {
            background: Rgb::from_channels([30, 30, 30]),
            post: Rgb::from_channels([35, 53, 114]),
            connection: Rgb::from_channels([255, 255, 255]),
            selected_connection: Rgb::from_channels([15, 15, 15]),
            text: Rgb::from_channels([255, 255, 255]),
        }
    }
}
