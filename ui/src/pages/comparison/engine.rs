//! Side-by-side comparison of user-entered properties.
//!
//! Derived fields (price per sqm, trend) are fixed when an entry is added.

use rand::Rng;
use uuid::Uuid;

use crate::catalog::PropertyType;
use crate::core::draft::{DraftError, FormDraft};

#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub name: String,
    pub property_type: PropertyType,
    pub location: String,
    pub price: f64,
    pub area_sqm: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
}

impl TryFrom<&FormDraft> for NewEntry {
    type Error = DraftError;

    fn try_from(draft: &FormDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            name: draft.required_text("name")?,
            property_type: draft.required_choice("property_type")?,
            location: draft.required_text("location")?,
            price: draft.required_number("price")?,
            area_sqm: draft.required_number("area")?,
            bedrooms: draft.required_number("bedrooms")?.max(0.0) as u32,
            bathrooms: draft.required_number("bathrooms")?.max(0.0) as u32,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry {
    pub id: Uuid,
    pub name: String,
    pub property_type: PropertyType,
    pub location: String,
    pub price: f64,
    pub area_sqm: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub price_per_sqm: f64,
    pub trend: Trend,
    /// Trend magnitude in percent, `[1, 11)`.
    pub trend_percent: f64,
}

impl ComparisonEntry {
    pub fn from_new<R: Rng + ?Sized>(entry: NewEntry, rng: &mut R) -> Self {
        let trend = if rng.gen_bool(0.5) { Trend::Up } else { Trend::Down };
        Self {
            id: Uuid::new_v4(),
            price_per_sqm: entry.price / entry.area_sqm,
            trend,
            trend_percent: rng.gen_range(1.0..11.0),
            name: entry.name,
            property_type: entry.property_type,
            location: entry.location,
            price: entry.price,
            area_sqm: entry.area_sqm,
            bedrooms: entry.bedrooms,
            bathrooms: entry.bathrooms,
        }
    }
}

/// Ids of the entries that win each comparison. Ties go to the earliest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonSummary {
    pub cheapest: Uuid,
    pub most_expensive: Uuid,
    pub best_value: Uuid,
    pub largest: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonBoard {
    entries: Vec<ComparisonEntry>,
}

impl ComparisonBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add<R: Rng + ?Sized>(&mut self, entry: NewEntry, rng: &mut R) -> Uuid {
        let entry = ComparisonEntry::from_new(entry, rng);
        let id = entry.id;
        tracing::debug!(%id, name = %entry.name, "comparison entry added");
        self.entries.push(entry);
        id
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        before != self.entries.len()
    }

    pub fn entry(&self, id: Uuid) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn summary(&self) -> Option<ComparisonSummary> {
        let first = self.entries.first()?;
        let pick = |better: fn(&ComparisonEntry, &ComparisonEntry) -> bool| {
            self.entries
                .iter()
                .fold(first, |best, entry| if better(entry, best) { entry } else { best })
                .id
        };
        Some(ComparisonSummary {
            cheapest: pick(|a, b| a.price < b.price),
            most_expensive: pick(|a, b| a.price > b.price),
            best_value: pick(|a, b| a.price_per_sqm < b.price_per_sqm),
            largest: pick(|a, b| a.area_sqm > b.area_sqm),
        })
    }
}
