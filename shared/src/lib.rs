use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{AsRefStr, Display, EnumIter};
pub use uuid::Uuid;

/// Prefix of every failure message returned by `POST /detect`.
pub const ERROR_MESSAGE_PREFIX: &str = "Error processing image: ";

/// Number of detections the web client keeps in local storage.
pub const HISTORY_LIMIT: usize = 10;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum DiseaseCategory {
    #[serde(rename = "Bacterial Leaf Spot")]
    #[strum(serialize = "Bacterial Leaf Spot")]
    BacterialLeafSpot,
    #[serde(rename = "Fungal Infection")]
    #[strum(serialize = "Fungal Infection")]
    FungalInfection,
    #[serde(rename = "Early Disease Signs")]
    #[strum(serialize = "Early Disease Signs")]
    EarlyDiseaseSigns,
    #[serde(rename = "Healthy")]
    #[strum(serialize = "Healthy")]
    Healthy,
}

impl DiseaseCategory {
    pub fn is_diseased(self) -> bool {
        self != DiseaseCategory::Healthy
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClassificationResult {
    pub is_diseased: bool,
    pub disease_percentage: f64,
    pub disease_name: DiseaseCategory,
    pub precautions: Vec<String>,
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DetectionErrorResponse {
    pub message: String,
    pub is_diseased: bool,
    #[serde(serialize_with = "zero_as_integer")]
    pub disease_percentage: f64,
}

/// Writes `0` rather than `0.0` so failure bodies carry the integer literal.
fn zero_as_integer<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if *value == 0.0 {
        serializer.serialize_u8(0)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl DetectionErrorResponse {
    /// Builds the failure body with the safe defaults (not diseased, 0%).
    pub fn new(description: impl std::fmt::Display) -> Self {
        Self {
            message: format!("{}{}", ERROR_MESSAGE_PREFIX, description),
            is_diseased: false,
            disease_percentage: 0.0,
        }
    }
}

/// Either body `POST /detect` can answer with.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum DetectionOutcome {
    Classified(ClassificationResult),
    Failed(DetectionErrorResponse),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub id: Uuid,
    /// Preview of the analysed image as a `data:` URL.
    pub image: String,
    pub result: ClassificationResult,
    /// ISO-8601 timestamp of the detection.
    pub timestamp: String,
}

impl HistoryEntry {
    pub fn new(image: String, result: ClassificationResult, timestamp: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            image,
            result,
            timestamp,
        }
    }
}

/// Most recent detections, newest first.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct DetectionHistory {
    entries: Vec<HistoryEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Valid(HistoryEntry),
    Unreadable(IgnoredAny),
}

/// Entries that no longer parse (older client builds stored numeric ids) are
/// skipped one by one instead of discarding the whole list.
impl<'de> Deserialize<'de> for DetectionHistory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut entries: Vec<HistoryEntry> = Vec::<StoredEntry>::deserialize(deserializer)?
            .into_iter()
            .filter_map(|stored| match stored {
                StoredEntry::Valid(entry) => Some(entry),
                StoredEntry::Unreadable(_) => None,
            })
            .collect();
        entries.truncate(HISTORY_LIMIT);
        Ok(Self { entries })
    }
}

impl DetectionHistory {
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }
}
