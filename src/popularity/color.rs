use crate::models::HslColor;

const HEATMAP_HUE: f64 = 350.0;

impl HslColor {
    /// Heatmap color for a rounded popularity value.
    ///
    /// Higher popularity gives a more saturated, darker red-pink.
    pub fn from_popularity(popularity: u32) -> Self {
        let popularity = f64::from(popularity);
        Self {
            hue: HEATMAP_HUE,
            saturation: 70.0 + popularity * 0.2,
            lightness: 50.0 + (100.0 - popularity) * 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_color_scale_endpoints() {
        let cold = HslColor::from_popularity(0);
        assert_relative_eq!(cold.saturation, 70.0);
        assert_relative_eq!(cold.lightness, 70.0);

        let hot = HslColor::from_popularity(100);
        assert_relative_eq!(hot.saturation, 90.0);
        assert_relative_eq!(hot.lightness, 50.0);
        assert_eq!(hot.hue, 350.0);
    }

    #[test]
    fn test_color_is_pure_function_of_popularity() {
        for popularity in 0..=120 {
            assert_eq!(
                HslColor::from_popularity(popularity),
                HslColor::from_popularity(popularity)
            );
        }
        assert_eq!(
            HslColor::from_popularity(64).to_string(),
            "hsl(350, 82.8%, 57.2%)"
        );
    }

    #[test]
    fn test_color_continues_past_one_hundred() {
        // Stacked boosts can push popularity over 100; the scale keeps going
        let over = HslColor::from_popularity(110);
        assert_relative_eq!(over.saturation, 92.0);
        assert_relative_eq!(over.lightness, 48.0);
    }
}
