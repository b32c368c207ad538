//! Invitation domain models.

use serde::{Deserialize, Deserializer, Serialize};
use validator::ValidationErrors;

use shared::text::fill_count;
use shared::validation::{validate_max_adults, validate_max_kids, MAX_KIDS};

/// Wire shape of `GET /invite/{code}`.
///
/// Missing or null numeric fields default to 0 and a missing
/// `has_responded` defaults to false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InviteResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_adults: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_kids: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_responded: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Adult and kid limits of one invitation.
///
/// Fixed once fetched; every allowed form value is derived from these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Capacity {
    pub max_adults: i32,
    pub max_kids: i32,
}

impl Capacity {
    pub fn new(max_adults: i32, max_kids: i32) -> Self {
        Self {
            max_adults,
            max_kids,
        }
    }

    /// Whether the plus-one control is offered.
    pub fn offers_plus_one(&self) -> bool {
        self.max_adults == 2
    }

    /// Whether the kid-count control is offered.
    pub fn offers_kids(&self) -> bool {
        self.max_kids > 0
    }

    /// Largest kid count a guest may pick. Capacities above `MAX_KIDS` are
    /// capped; negative ones offer no kids.
    pub fn kid_limit(&self) -> i32 {
        self.max_kids.clamp(0, MAX_KIDS)
    }

    /// Selectable kid counts, `0..=kid_limit()`. Empty when kids are not
    /// offered.
    pub fn kid_options(&self) -> Vec<i32> {
        if !self.offers_kids() {
            return Vec::new();
        }
        (0..=self.kid_limit()).collect()
    }

    /// Adult count for a given plus-one choice.
    pub fn adult_count(&self, plus_one: bool) -> i32 {
        if self.offers_plus_one() && plus_one {
            2
        } else {
            1
        }
    }

    /// Total people covered by the invitation.
    ///
    /// Negative capacities count as zero and the sum saturates.
    pub fn total_party_size(&self) -> i32 {
        self.max_adults.max(0).saturating_add(self.max_kids.max(0))
    }

    /// Checks the capacity against the documented ranges.
    ///
    /// The client never rejects an invitation on this basis; callers use it
    /// to flag suspicious records.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(err) = validate_max_adults(self.max_adults) {
            errors.add("max_adults", err);
        }
        if let Err(err) = validate_max_kids(self.max_kids) {
            errors.add("max_kids", err);
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// An invitation resolved from its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Invitation {
    pub code: String,
    pub name: String,
    pub capacity: Capacity,
    pub has_responded: bool,
}

impl Invitation {
    /// Builds an invitation from the API response for `code`.
    pub fn from_response(code: impl Into<String>, response: InviteResponse) -> Self {
        Self {
            code: code.into(),
            name: response.name,
            capacity: Capacity::new(response.max_adults, response.max_kids),
            has_responded: response.has_responded,
        }
    }

    /// Fills `template` (with a `{n}` placeholder) with the party size.
    pub fn size_message(&self, template: &str) -> String {
        fill_count(template, self.capacity.total_party_size())
    }
}
