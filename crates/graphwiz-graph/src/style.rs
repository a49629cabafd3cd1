use graphwiz_core::VisualState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_tuple(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }
}

/// Colour scheme mapping visual states to node fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NodePalette {
    /// Saturated primaries: green start, cyan queue, orange active, blue done.
    #[default]
    Classic,
    /// Softer fills: pale green discovery, gold active, sky blue done.
    Pastel,
}

impl NodePalette {
    pub fn fill(&self, state: VisualState) -> Color {
        match self {
            Self::Classic => match state {
                VisualState::Unvisited => Color::WHITE,
                VisualState::Frontier => Color::rgb(0, 255, 0),
                VisualState::Enqueued => Color::rgb(0, 255, 255),
                VisualState::Processing => Color::rgb(255, 200, 0),
                VisualState::Done => Color::rgb(0, 0, 255),
                VisualState::Selected => Color::rgb(255, 255, 0),
            },
            Self::Pastel => match state {
                VisualState::Unvisited => Color::WHITE,
                VisualState::Frontier | VisualState::Enqueued => Color::rgb(0x98, 0xfb, 0x98),
                VisualState::Processing => Color::rgb(0xff, 0xd7, 0x00),
                VisualState::Done => Color::rgb(0x87, 0xce, 0xfa),
                VisualState::Selected => Color::rgb(0x00, 0x7a, 0xcc),
            },
        }
    }

    /// Label colour that stays readable on `fill(state)`.
    pub fn label(&self, state: VisualState) -> Color {
        match (self, state) {
            (Self::Classic, VisualState::Done) => Color::WHITE,
            _ => Color::BLACK,
        }
    }

    pub fn outline(&self) -> Color {
        Color::BLACK
    }

    pub fn edge(&self) -> Color {
        match self {
            Self::Classic => Color::BLACK,
            Self::Pastel => Color::rgb(0x33, 0x33, 0x33),
        }
    }
}
