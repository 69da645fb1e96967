//! Edge and vertex colors

use hyperwire_core::{EdgeKind, Side};

/// Colors for the front half, back half and connecting edges of an n-cube
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScheme {
    pub front: [f32; 4],
    pub back: [f32; 4],
    pub connector: [f32; 4],
    /// When off, everything is drawn in the connector color
    pub color_coding: bool,
}

impl ColorScheme {
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    /// Color of an edge of the given kind
    pub fn edge_color(&self, kind: EdgeKind) -> [f32; 4] {
        if !self.color_coding {
            return self.connector;
        }
        match kind {
            EdgeKind::Front => self.front,
            EdgeKind::Back => self.back,
            EdgeKind::Connector => self.connector,
        }
    }

    /// Color of a vertex on the given side
    pub fn vertex_color(&self, side: Side) -> [f32; 4] {
        if !self.color_coding {
            return self.connector;
        }
        match side {
            Side::Front => self.front,
            Side::Back => self.back,
        }
    }

    /// Same colors with color coding flipped
    pub fn toggled(mut self) -> Self {
        self.color_coding = !self.color_coding;
        self
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            front: Self::RED,
            back: Self::GREEN,
            connector: Self::WHITE,
            color_coding: true,
        }
    }
}
