//! Per-page form drafts.
//!
//! A [`FormDraft`] holds raw field strings exactly as typed. Pages convert a
//! draft into their typed request with `TryFrom<&FormDraft>`; the only checks
//! applied are the ones a browser form would apply natively (required fields,
//! numeric inputs).

use std::collections::BTreeMap;

use thiserror::Error;

use crate::catalog::SelectOption;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("required field `{0}` is empty")]
    Missing(&'static str),
    #[error("field `{field}` is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("field `{field}` has no option {value:?}")]
    UnknownChoice { field: &'static str, value: String },
}

/// Draft key of `option`'s checkbox inside `group`.
pub fn choice_field<T: SelectOption>(group: &str, option: T) -> String {
    format!("{group}.{}", option.value())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    fields: BTreeMap<String, String>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled with `(field, value)` pairs.
    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut draft = Self::new();
        for (field, value) in values {
            draft.set(field, value);
        }
        draft
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.fields.insert(field.to_string(), value.into());
    }

    /// Raw value of `field`; empty when never touched.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set_checked(&mut self, field: &str, checked: bool) {
        if checked {
            self.set(field, "true");
        } else {
            self.fields.remove(field);
        }
    }

    pub fn is_checked(&self, field: &str) -> bool {
        self.get(field) == "true"
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn required_text(&self, field: &'static str) -> Result<String, DraftError> {
        let value = self.get(field);
        if value.is_empty() {
            return Err(DraftError::Missing(field));
        }
        Ok(value.to_string())
    }

    pub fn required_number(&self, field: &'static str) -> Result<f64, DraftError> {
        self.optional_number(field)?
            .ok_or(DraftError::Missing(field))
    }

    /// Selected option of a required `<select>`.
    pub fn required_choice<T: SelectOption>(&self, field: &'static str) -> Result<T, DraftError> {
        let value = self.required_text(field)?;
        T::from_value(&value).ok_or(DraftError::UnknownChoice { field, value })
    }

    /// Every option of `T` ticked in checkbox group `group`, in declaration order.
    pub fn checked_choices<T: SelectOption>(&self, group: &str) -> Vec<T> {
        T::ALL
            .iter()
            .copied()
            .filter(|option| self.is_checked(&choice_field(group, *option)))
            .collect()
    }

    /// Empty is allowed; anything else must parse as a finite number.
    pub fn optional_number(&self, field: &'static str) -> Result<Option<f64>, DraftError> {
        let value = self.get(field).trim();
        if value.is_empty() {
            return Ok(None);
        }
        match value.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(Some(number)),
            _ => Err(DraftError::NotANumber {
                field,
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_fields_read_as_empty() {
        let draft = FormDraft::new();
        assert_eq!(draft.get("area"), "");
        assert!(!draft.is_checked("terms"));
    }

    #[test]
    fn required_text_rejects_empty() {
        let mut draft = FormDraft::new();
        assert_eq!(
            draft.required_text("location"),
            Err(DraftError::Missing("location"))
        );
        draft.set("location", "Sukhumvit");
        assert_eq!(draft.required_text("location").as_deref(), Ok("Sukhumvit"));
    }

    #[test]
    fn numbers_parse_or_report_the_field() {
        let draft = FormDraft::with_values([("area", " 85.5 "), ("floor", "tenth"), ("age", "")]);
        assert_eq!(draft.required_number("area"), Ok(85.5));
        assert_eq!(draft.optional_number("age"), Ok(None));
        assert_eq!(
            draft.optional_number("floor"),
            Err(DraftError::NotANumber {
                field: "floor",
                value: "tenth".into()
            })
        );
        assert_eq!(
            draft.required_number("bedrooms"),
            Err(DraftError::Missing("bedrooms"))
        );
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let draft = FormDraft::with_values([("price", "inf")]);
        assert!(matches!(
            draft.required_number("price"),
            Err(DraftError::NotANumber { .. })
        ));
    }

    #[test]
    fn choices_parse_into_options() {
        use crate::catalog::{Amenity, Province};

        let mut draft = FormDraft::with_values([("location", "phuket")]);
        assert_eq!(draft.required_choice::<Province>("location"), Ok(Province::Phuket));

        draft.set("location", "atlantis");
        assert_eq!(
            draft.required_choice::<Province>("location"),
            Err(DraftError::UnknownChoice {
                field: "location",
                value: "atlantis".into()
            })
        );

        draft.set("parking", "2");
        draft.set_checked(&choice_field("amenities", Amenity::Gym), true);
        draft.set_checked(&choice_field("amenities", Amenity::Pool), true);
        assert_eq!(
            draft.checked_choices::<Amenity>("amenities"),
            vec![Amenity::Pool, Amenity::Gym]
        );
    }

    #[test]
    fn unchecking_removes_the_flag() {
        let mut draft = FormDraft::new();
        draft.set_checked("pool", true);
        assert!(draft.is_checked("pool"));
        draft.set_checked("pool", false);
        assert!(!draft.is_checked("pool"));
        assert_eq!(draft.get("pool"), "");
    }
}
