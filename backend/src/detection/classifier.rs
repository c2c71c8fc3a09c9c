use shared::{ClassificationResult, DiseaseCategory};

use super::decoder::HsvImage;
use super::hsv::Hsv;

/// Inclusive HSV range. Hue is in half-degree units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBand {
    pub lower: Hsv,
    pub upper: Hsv,
}

impl ColorBand {
    pub fn contains(&self, px: Hsv) -> bool {
        (self.lower.h..=self.upper.h).contains(&px.h)
            && (self.lower.s..=self.upper.s).contains(&px.s)
            && (self.lower.v..=self.upper.v).contains(&px.v)
    }
}

/// Brown and yellow tones of blight and fungal lesions.
pub const DISEASE_BAND: ColorBand = ColorBand {
    lower: Hsv::new(5, 50, 50),
    upper: Hsv::new(30, 255, 255),
};

#[derive(Debug, Clone, Copy)]
enum Summary {
    /// `Disease detected: <label>. <advice>`
    Detected(&'static str),
    Fixed(&'static str),
}

#[derive(Debug)]
pub struct Threshold {
    /// Exclusive lower bound, in percent.
    pub above: f64,
    pub category: DiseaseCategory,
    pub precautions: &'static [&'static str],
    summary: Summary,
}

impl Threshold {
    pub fn message(&self) -> String {
        match self.summary {
            Summary::Detected(advice) => format!("Disease detected: {}. {}", self.category, advice),
            Summary::Fixed(text) => text.to_string(),
        }
    }
}

/// Checked in order; the first bound the percentage exceeds wins.
pub static THRESHOLDS: [Threshold; 3] = [
    Threshold {
        above: 20.0,
        category: DiseaseCategory::BacterialLeafSpot,
        precautions: &[
            "Remove and destroy infected leaves immediately",
            "Improve air circulation around plants",
            "Avoid overhead watering to prevent spread",
            "Apply copper-based bactericide if available",
            "Ensure plants are not overcrowded",
        ],
        summary: Summary::Detected("Immediate action recommended."),
    },
    Threshold {
        above: 10.0,
        category: DiseaseCategory::FungalInfection,
        precautions: &[
            "Apply appropriate fungicide as per plant type",
            "Ensure proper drainage to prevent waterlogging",
            "Space plants adequately for better airflow",
            "Remove fallen leaves from the ground",
            "Water at the base of plants, not on leaves",
        ],
        summary: Summary::Detected("Treatment advised."),
    },
    Threshold {
        above: 5.0,
        category: DiseaseCategory::EarlyDiseaseSigns,
        precautions: &[
            "Monitor the plant closely for progression",
            "Improve overall plant health with proper nutrition",
            "Ensure adequate sunlight and watering",
            "Quarantine affected plants if possible",
            "Consult local agricultural extension for specific advice",
        ],
        summary: Summary::Fixed("Early signs of disease detected. Preventive measures recommended."),
    },
];

pub static HEALTHY: Threshold = Threshold {
    above: f64::NEG_INFINITY,
    category: DiseaseCategory::Healthy,
    precautions: &[],
    summary: Summary::Fixed("Leaf appears healthy. Continue good care practices."),
};

pub fn threshold_for(percentage: f64) -> &'static Threshold {
    THRESHOLDS
        .iter()
        .find(|t| percentage > t.above)
        .unwrap_or(&HEALTHY)
}

pub fn disease_percentage(image: &HsvImage) -> f64 {
    let matching = image
        .pixels()
        .iter()
        .filter(|px| DISEASE_BAND.contains(**px))
        .count();
    (matching as f64 / image.pixel_count() as f64) * 100.0
}

/// Rounds half away from zero to two decimals.
pub fn round_percentage(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn classify(image: &HsvImage) -> ClassificationResult {
    let percentage = disease_percentage(image);
    let threshold = threshold_for(percentage);

    ClassificationResult {
        is_diseased: threshold.category.is_diseased(),
        disease_percentage: round_percentage(percentage),
        disease_name: threshold.category,
        precautions: threshold.precautions.iter().map(|p| p.to_string()).collect(),
        message: threshold.message(),
    }
}
