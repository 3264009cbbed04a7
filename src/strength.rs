//! Password strength oracle seam.
//!
//! The classifier itself lives outside this crate.  The engine only knows
//! the `StrengthOracle` contract and falls back to `UnavailableOracle`
//! when none is wired in.  `StrengthFeatures` is the feature vector the
//! classifier is trained on, exposed so an oracle implementation can
//! compute it the same way.

use serde::Serialize;

/// Label reported when no classifier is loaded.
pub const UNAVAILABLE_LABEL: &str = "unavailable";

/// Raw classifier output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthPrediction {
    /// Probability the password is strong, 0.0 to 1.0.
    pub score: f32,
    pub label: String,
}

impl StrengthPrediction {
    pub fn unavailable() -> Self {
        Self {
            score: 0.0,
            label: UNAVAILABLE_LABEL.to_string(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.label == UNAVAILABLE_LABEL
    }
}

/// An external password-strength classifier.
pub trait StrengthOracle: Send + Sync {
    fn predict(&self, password: &str) -> StrengthPrediction;
}

/// The fallback oracle: always reports "unavailable".
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableOracle;

impl StrengthOracle for UnavailableOracle {
    fn predict(&self, _password: &str) -> StrengthPrediction {
        StrengthPrediction::unavailable()
    }
}

/// Feature vector consumed by the classifier, in training order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthFeatures {
    pub length: usize,
    pub digits: usize,
    pub uppercase: usize,
    pub lowercase: usize,
    pub special: usize,
    pub unique: usize,
}

impl StrengthFeatures {
    pub fn extract(password: &str) -> Self {
        let mut seen: Vec<char> = password.chars().collect();
        seen.sort_unstable();
        seen.dedup();

        Self {
            length: password.chars().count(),
            digits: password.chars().filter(char::is_ascii_digit).count(),
            uppercase: password.chars().filter(|c| c.is_uppercase()).count(),
            lowercase: password.chars().filter(|c| c.is_lowercase()).count(),
            special: password.chars().filter(char::is_ascii_punctuation).count(),
            unique: seen.len(),
        }
    }

    /// The features as a row, for feeding a model.
    pub fn to_row(&self) -> [f32; 6] {
        [
            self.length as f32,
            self.digits as f32,
            self.uppercase as f32,
            self.lowercase as f32,
            self.special as f32,
            self.unique as f32,
        ]
    }
}

/// Coarse reading of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthBand {
    Strong,
    Moderate,
    Weak,
    Unavailable,
}

/// A prediction plus its band and a display message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthVerdict {
    pub prediction: StrengthPrediction,
    pub band: StrengthBand,
    pub message: String,
}

impl StrengthVerdict {
    pub fn from_prediction(prediction: StrengthPrediction) -> Self {
        let band = if prediction.is_unavailable() {
            StrengthBand::Unavailable
        } else if prediction.score > 0.8 {
            StrengthBand::Strong
        } else if prediction.score > 0.5 {
            StrengthBand::Moderate
        } else {
            StrengthBand::Weak
        };

        let pct = (prediction.score.clamp(0.0, 1.0) * 100.0) as u32;
        let message = match band {
            StrengthBand::Strong => format!("Strong! This password is excellent. (confidence {pct}%)"),
            StrengthBand::Moderate => {
                format!("Moderate. It's okay, but could be better. (confidence {pct}%)")
            }
            StrengthBand::Weak => format!("Weak. This password is easy to guess. (confidence {pct}%)"),
            StrengthBand::Unavailable => "Strength model is not loaded.".to_string(),
        };

        Self {
            prediction,
            band,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f32);

    impl StrengthOracle for Fixed {
        fn predict(&self, _password: &str) -> StrengthPrediction {
            StrengthPrediction {
                score: self.0,
                label: if self.0 > 0.5 { "Strong" } else { "Weak" }.to_string(),
            }
        }
    }

    #[test]
    fn fallback_reports_unavailable() {
        let p = UnavailableOracle.predict("anything");
        assert!(p.is_unavailable());
        assert_eq!(p.score, 0.0);
        let v = StrengthVerdict::from_prediction(p);
        assert_eq!(v.band, StrengthBand::Unavailable);
    }

    #[test]
    fn bands_follow_thresholds() {
        let band = |s| StrengthVerdict::from_prediction(Fixed(s).predict("x")).band;
        assert_eq!(band(0.95), StrengthBand::Strong);
        assert_eq!(band(0.8), StrengthBand::Moderate);
        assert_eq!(band(0.51), StrengthBand::Moderate);
        assert_eq!(band(0.5), StrengthBand::Weak);
        assert_eq!(band(0.0), StrengthBand::Weak);
    }

    #[test]
    fn features_count_character_classes() {
        let f = StrengthFeatures::extract("Ab1!Ab1!");
        assert_eq!(
            f,
            StrengthFeatures {
                length: 8,
                digits: 2,
                uppercase: 2,
                lowercase: 2,
                special: 2,
                unique: 4,
            }
        );
        assert_eq!(f.to_row()[0], 8.0);
    }

    #[test]
    fn features_of_empty_password() {
        let f = StrengthFeatures::extract("");
        assert_eq!(f.length, 0);
        assert_eq!(f.unique, 0);
    }
}
