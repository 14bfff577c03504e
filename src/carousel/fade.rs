/// Opacity crossfade between hero slides.
///
/// Every slide eases linearly towards its target: 1.0 for the focused slide,
/// 0.0 for the rest. Retargeting mid-fade continues from the current opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Crossfade {
    opacity: Vec<f32>,
    focused: usize,
    duration: f32,
}

impl Crossfade {
    pub fn new(len: usize, duration: f32) -> Self {
        let mut opacity = vec![0.0; len];
        if let Some(first) = opacity.first_mut() {
            *first = 1.0;
        }
        Self { opacity, focused: 0, duration }
    }

    pub fn focus(&mut self, index: usize) {
        if index < self.opacity.len() {
            self.focused = index;
        }
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn update(&mut self, dt: f32) {
        // A non-positive duration snaps straight to the target
        let step = if self.duration > 0.0 { dt / self.duration } else { 1.0 };

        for (i, value) in self.opacity.iter_mut().enumerate() {
            let target = if i == self.focused { 1.0 } else { 0.0 };
            *value = if *value < target {
                (*value + step).min(target)
            } else {
                (*value - step).max(target)
            };
        }
    }

    pub fn opacity(&self, index: usize) -> f32 {
        self.opacity.get(index).copied().unwrap_or(0.0)
    }

    pub fn is_settled(&self) -> bool {
        self.opacity
            .iter()
            .enumerate()
            .all(|(i, &v)| if i == self.focused { v >= 1.0 } else { v <= 0.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_slide() {
        let fade = Crossfade::new(3, 1.0);
        assert_eq!(fade.opacity(0), 1.0);
        assert_eq!(fade.opacity(1), 0.0);
        assert!(fade.is_settled());
    }

    #[test]
    fn crossfades_over_duration() {
        let mut fade = Crossfade::new(3, 1.0);
        fade.focus(1);
        assert!(!fade.is_settled());

        fade.update(0.5);
        assert!((fade.opacity(0) - 0.5).abs() < 1e-6);
        assert!((fade.opacity(1) - 0.5).abs() < 1e-6);

        fade.update(0.6);
        assert_eq!(fade.opacity(0), 0.0);
        assert_eq!(fade.opacity(1), 1.0);
        assert!(fade.is_settled());
    }

    #[test]
    fn retarget_mid_fade_keeps_current_opacity() {
        let mut fade = Crossfade::new(3, 1.0);
        fade.focus(1);
        fade.update(0.25);
        fade.focus(2);
        fade.update(0.25);

        assert!((fade.opacity(0) - 0.5).abs() < 1e-6);
        assert_eq!(fade.opacity(1), 0.0);
        assert!((fade.opacity(2) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_focus_is_ignored() {
        let mut fade = Crossfade::new(2, 1.0);
        fade.focus(5);
        assert_eq!(fade.focused(), 0);
        assert_eq!(fade.opacity(5), 0.0);
    }
}
