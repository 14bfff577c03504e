/// Which corners of a dark section carry decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecorVariant {
    Left,
    Right,
    #[default]
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Accent,
    White,
}

/// A decorative circle in section-relative units.
///
/// `x`/`y` are centre fractions of the section size (they may lie outside
/// 0..1 so rings bleed off the edge); `radius` is in pixels at the base width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub filled: bool,
    pub tint: Tint,
    pub alpha: f32,
}

const LEFT: [Ring; 2] = [
    Ring { x: 0.0, y: 0.0, radius: 144.0, filled: false, tint: Tint::Accent, alpha: 0.10 },
    Ring { x: 0.02, y: 0.42, radius: 80.0, filled: false, tint: Tint::White, alpha: 0.05 },
];

const RIGHT: [Ring; 2] = [
    Ring { x: 1.0, y: 1.0, radius: 128.0, filled: false, tint: Tint::Accent, alpha: 0.10 },
    Ring { x: 0.93, y: 0.25, radius: 48.0, filled: true, tint: Tint::Accent, alpha: 0.05 },
];

pub fn shapes(variant: DecorVariant) -> Vec<Ring> {
    match variant {
        DecorVariant::Left => LEFT.to_vec(),
        DecorVariant::Right => RIGHT.to_vec(),
        DecorVariant::Both => LEFT.iter().chain(RIGHT.iter()).copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_is_left_plus_right() {
        let both = shapes(DecorVariant::Both);
        assert_eq!(both.len(), 4);
        assert_eq!(&both[..2], &shapes(DecorVariant::Left)[..]);
        assert_eq!(&both[2..], &shapes(DecorVariant::Right)[..]);
    }

    #[test]
    fn left_rings_sit_on_left_half() {
        assert!(shapes(DecorVariant::Left).iter().all(|r| r.x < 0.5));
        assert!(shapes(DecorVariant::Right).iter().all(|r| r.x > 0.5));
    }
}
