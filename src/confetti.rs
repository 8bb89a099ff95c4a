//! Confetti for the success screen
//!
//! Purely decorative: each piece is a start position plus CSS animation
//! parameters. Nothing here feeds back into the simulation.

use rand::Rng;

/// Piece colors
pub const PALETTE: [&str; 5] = ["#ff6aa2", "#a78bfa", "#38bdf8", "#fbbf24", "#34d399"];

/// One confetti piece
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    /// Start x (px) across the panel
    pub left: f32,
    /// Start y (px), always above the top edge
    pub top: f32,
    pub color: &'static str,
    /// Horizontal drift over the fall (px)
    pub drift: f32,
    /// Vertical travel (px), proportional to panel height
    pub travel: f32,
    /// Total spin (degrees)
    pub rotation: f32,
    pub delay_ms: f32,
    pub duration_ms: f32,
}

impl ConfettiPiece {
    /// Inline style: placement plus the custom properties the fall animation reads
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}px; top: {:.1}px; background: {}; --dx: {:.1}px; --dy: {:.1}px; --rot: {:.1}deg; animation-delay: {:.0}ms; animation-duration: {:.0}ms",
            self.left,
            self.top,
            self.color,
            self.drift,
            self.travel,
            self.rotation,
            self.delay_ms,
            self.duration_ms
        )
    }
}

/// Generate `count` pieces spread over a `width` x `height` panel
pub fn spawn(rng: &mut impl Rng, width: f32, height: f32, count: usize) -> Vec<ConfettiPiece> {
    let width = width.max(0.0);
    let height = height.max(0.0);
    (0..count)
        .map(|_| ConfettiPiece {
            left: rng.random::<f32>() * width,
            top: -30.0 - rng.random::<f32>() * 140.0,
            color: PALETTE[rng.random_range(0..PALETTE.len())],
            drift: (rng.random::<f32>() - 0.5) * 240.0,
            travel: height * (0.68 + rng.random::<f32>() * 0.45),
            rotation: (rng.random::<f32>() - 0.5) * 520.0,
            delay_ms: rng.random::<f32>() * 240.0,
            duration_ms: 1100.0 + rng.random::<f32>() * 700.0,
        })
        .collect()
}
