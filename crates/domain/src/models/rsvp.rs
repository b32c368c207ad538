//! RSVP draft and submission models.

use serde::{Deserialize, Serialize};
use validator::ValidationError;

use shared::text::trim_field;
use shared::validation::validate_kid_count;

use super::invitation::Capacity;
use crate::errors::RsvpError;

/// The guest's in-progress, unsubmitted form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsvpDraft {
    /// Meaningful only when the invitation offers a plus-one.
    pub plus_one: bool,
    /// `None` until the guest picks a value.
    pub kid_count: Option<i32>,
    pub dietary_info: String,
    pub message_for_us: String,
    pub song_request: String,
}

impl RsvpDraft {
    /// Sets the kid count chosen from the select, bounded by `capacity`.
    pub fn select_kid_count(
        &mut self,
        count: i32,
        capacity: &Capacity,
    ) -> Result<(), ValidationError> {
        validate_kid_count(count, capacity.kid_limit())?;
        self.kid_count = Some(count);
        Ok(())
    }
}

/// Parses the kid-count select value.
///
/// An empty selection is unset; anything that is not a number counts as 0.
pub fn parse_kid_count(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.parse().unwrap_or(0))
}

/// Checks a draft before anything is sent.
///
/// The kid count is the only required field, and only when kids are offered;
/// a count set outside `0..=kid_limit()` is rejected too. The plus-one has no
/// required-selection rule; it defaults to "no".
pub fn validate_draft(
    capacity: &Capacity,
    draft: &RsvpDraft,
    missing_kids_message: &str,
) -> Result<(), RsvpError> {
    if !capacity.offers_kids() {
        return Ok(());
    }
    let Some(count) = draft.kid_count else {
        return Err(RsvpError::Validation(missing_kids_message.to_string()));
    };
    validate_kid_count(count, capacity.kid_limit()).map_err(|err| {
        RsvpError::Validation(
            err.message
                .map(|m| m.to_string())
                .unwrap_or_else(|| missing_kids_message.to_string()),
        )
    })
}

/// Body of `POST /invite/{code}/rsvp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RsvpSubmission {
    pub adult_count: i32,
    /// Present iff the invitation offers kids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid_count: Option<i32>,
    pub dietary_info: String,
    pub message_for_us: String,
    pub song_request: String,
}

impl RsvpSubmission {
    /// Derives the request body from a capacity and a draft.
    pub fn build(capacity: &Capacity, draft: &RsvpDraft) -> Self {
        let kid_count = if capacity.offers_kids() {
            Some(draft.kid_count.unwrap_or(0))
        } else {
            None
        };

        Self {
            adult_count: capacity.adult_count(draft.plus_one),
            kid_count,
            dietary_info: trim_field(&draft.dietary_info),
            message_for_us: trim_field(&draft.message_for_us),
            song_request: trim_field(&draft.song_request),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;
    use serde_json::json;

    const MISSING_KIDS: &str = "Please select the number of kids.";

    #[test]
    fn test_parse_kid_count() {
        assert_eq!(parse_kid_count(""), None);
        assert_eq!(parse_kid_count("  "), None);
        assert_eq!(parse_kid_count("0"), Some(0));
        assert_eq!(parse_kid_count("2"), Some(2));
        assert_eq!(parse_kid_count("two"), Some(0));
    }

    #[test]
    fn test_select_kid_count_within_capacity() {
        let capacity = Capacity::new(1, 2);
        let mut draft = RsvpDraft::default();
        assert!(draft.select_kid_count(2, &capacity).is_ok());
        assert_eq!(draft.kid_count, Some(2));
    }

    #[test]
    fn test_select_kid_count_out_of_range_keeps_previous() {
        let capacity = Capacity::new(1, 2);
        let mut draft = RsvpDraft {
            kid_count: Some(1),
            ..Default::default()
        };
        let err = draft.select_kid_count(3, &capacity).unwrap_err();
        assert_eq!(err.code, "kid_count_range");
        assert_eq!(draft.kid_count, Some(1));
    }

    #[test]
    fn test_validate_requires_kid_count_only_when_offered() {
        for max_kids in 0..=3 {
            for kid_count in [None, Some(0), Some(1)] {
                let capacity = Capacity::new(2, max_kids);
                let draft = RsvpDraft {
                    kid_count,
                    ..Default::default()
                };
                let blocked = validate_draft(&capacity, &draft, MISSING_KIDS).is_err();
                assert_eq!(blocked, max_kids > 0 && kid_count.is_none());
            }
        }
    }

    #[test]
    fn test_validate_ignores_other_fields() {
        let capacity = Capacity::new(2, 0);
        let draft = RsvpDraft {
            plus_one: false,
            kid_count: None,
            dietary_info: "   ".to_string(),
            message_for_us: Sentence(3..8).fake(),
            song_request: String::new(),
        };
        assert!(validate_draft(&capacity, &draft, MISSING_KIDS).is_ok());
    }

    #[test]
    fn test_validate_error_message() {
        let capacity = Capacity::new(2, 1);
        let err = validate_draft(&capacity, &RsvpDraft::default(), MISSING_KIDS).unwrap_err();
        assert_eq!(err, RsvpError::Validation(MISSING_KIDS.to_string()));
    }

    #[test]
    fn test_validate_rejects_kid_count_outside_capacity() {
        let capacity = Capacity::new(1, 2);
        for kid_count in [-1, 3, 99] {
            let draft = RsvpDraft {
                kid_count: Some(kid_count),
                ..Default::default()
            };
            assert_eq!(
                validate_draft(&capacity, &draft, MISSING_KIDS),
                Err(RsvpError::Validation(
                    "kid_count must be between 0 and 2".to_string()
                ))
            );
        }
    }

    #[test]
    fn test_select_kid_count_capped_for_huge_capacity() {
        let capacity = Capacity::new(2, i32::MAX);
        let mut draft = RsvpDraft::default();
        assert!(draft.select_kid_count(20, &capacity).is_ok());
        assert!(draft.select_kid_count(21, &capacity).is_err());
        assert_eq!(draft.kid_count, Some(20));
    }

    #[test]
    fn test_build_single_guest_omits_kid_count() {
        let submission = RsvpSubmission::build(&Capacity::new(1, 0), &RsvpDraft::default());
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({
                "adult_count": 1,
                "dietary_info": "",
                "message_for_us": "",
                "song_request": ""
            })
        );
    }

    #[test]
    fn test_build_family_with_plus_one() {
        let draft = RsvpDraft {
            plus_one: true,
            kid_count: Some(1),
            ..Default::default()
        };
        let submission = RsvpSubmission::build(&Capacity::new(2, 2), &draft);
        assert_eq!(submission.adult_count, 2);
        assert_eq!(submission.kid_count, Some(1));

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["adult_count"], 2);
        assert_eq!(value["kid_count"], 1);
    }

    #[test]
    fn test_build_plus_one_ignored_without_capacity() {
        let draft = RsvpDraft {
            plus_one: true,
            ..Default::default()
        };
        let submission = RsvpSubmission::build(&Capacity::new(1, 0), &draft);
        assert_eq!(submission.adult_count, 1);
    }

    #[test]
    fn test_build_adult_and_kid_derivation() {
        for max_adults in 1..=2 {
            for max_kids in 0..=2 {
                for plus_one in [false, true] {
                    let capacity = Capacity::new(max_adults, max_kids);
                    let draft = RsvpDraft {
                        plus_one,
                        kid_count: Some(max_kids),
                        ..Default::default()
                    };
                    let submission = RsvpSubmission::build(&capacity, &draft);
                    assert_eq!(submission.adult_count == 2, max_adults == 2 && plus_one);
                    if max_kids > 0 {
                        assert_eq!(submission.kid_count, Some(max_kids));
                    } else {
                        assert_eq!(submission.kid_count, None);
                    }
                }
            }
        }
    }

    #[test]
    fn test_build_ignores_kid_count_when_not_offered() {
        let draft = RsvpDraft {
            kid_count: Some(3),
            ..Default::default()
        };
        let submission = RsvpSubmission::build(&Capacity::new(2, 0), &draft);
        assert_eq!(submission.kid_count, None);
        assert!(!serde_json::to_string(&submission).unwrap().contains("kid_count"));
    }

    #[test]
    fn test_build_trims_free_text() {
        let draft = RsvpDraft {
            dietary_info: "  no nuts ".to_string(),
            message_for_us: "\ncongrats!\t".to_string(),
            song_request: " Dancing Queen ".to_string(),
            ..Default::default()
        };
        let submission = RsvpSubmission::build(&Capacity::new(1, 0), &draft);
        assert_eq!(submission.dietary_info, "no nuts");
        assert_eq!(submission.message_for_us, "congrats!");
        assert_eq!(submission.song_request, "Dancing Queen");
    }
}
