//! Confidence scoring shared by the framework parsers

/// Accumulates penalties, missing fields, and warnings for one parse
///
/// Every parse starts at 100 and each detected gap subtracts a fixed
/// penalty; the final score clamps at zero.
#[derive(Debug, Default)]
pub(crate) struct Score {
    penalties: i32,
    missing_fields: Vec<String>,
    warnings: Vec<String>,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subtract a penalty without marking anything missing
    pub fn penalize(&mut self, points: i32) {
        self.penalties += points;
    }

    /// Mark a field missing and subtract its penalty
    pub fn missing(&mut self, field: &str, points: i32) {
        self.missing_fields.push(field.to_string());
        self.penalties += points;
    }

    /// Record a warning with no score impact
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Record a warning and subtract a penalty
    pub fn warn_penalize(&mut self, message: impl Into<String>, points: i32) {
        self.warnings.push(message.into());
        self.penalties += points;
    }

    /// Final confidence, clamped to `0..=100`
    pub fn confidence(&self) -> u8 {
        (100i32 - self.penalties).clamp(0, 100) as u8
    }

    pub fn into_parts(self) -> (u8, Vec<String>, Vec<String>) {
        let confidence = self.confidence();
        (confidence, self.missing_fields, self.warnings)
    }
}
