use serde::{Deserialize, Serialize};

use crate::models::domain::RelationshipGoal;

/// One ranked candidate: the matched profile id and its compatibility
/// percentage (0-100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub id: String,
    pub score: u8,
}

/// Per-subject match document, the shape handed to the persistence
/// collaborator.
///
/// Only the subject's own relationship-goal category can be populated.
/// The other categories stay `null` so that "no qualifying candidates"
/// remains distinguishable from an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDocument {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub romantic: Option<Vec<MatchCandidate>>,
    pub casual: Option<Vec<MatchCandidate>>,
    pub friendship: Option<Vec<MatchCandidate>>,
}

impl MatchDocument {
    /// Document with every category still unpopulated.
    pub fn new(profile_id: String) -> Self {
        Self {
            profile_id,
            romantic: None,
            casual: None,
            friendship: None,
        }
    }

    /// The ranked candidates for one category, if any qualified.
    pub fn category(&self, goal: RelationshipGoal) -> Option<&[MatchCandidate]> {
        match goal {
            RelationshipGoal::Romantic => self.romantic.as_deref(),
            RelationshipGoal::Casual => self.casual.as_deref(),
            RelationshipGoal::Friendship => self.friendship.as_deref(),
        }
    }

    pub fn set_category(&mut self, goal: RelationshipGoal, candidates: Vec<MatchCandidate>) {
        let slot = match goal {
            RelationshipGoal::Romantic => &mut self.romantic,
            RelationshipGoal::Casual => &mut self.casual,
            RelationshipGoal::Friendship => &mut self.friendship,
        };
        *slot = Some(candidates);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpopulated_categories_serialize_as_null() {
        let document = MatchDocument::new("abc".to_string());
        let json = serde_json::to_value(&document).unwrap();
        assert!(json["romantic"].is_null());
        assert!(json["casual"].is_null());
        assert!(json["friendship"].is_null());
        assert_eq!(json["profileId"], "abc");
    }

    #[test]
    fn test_set_category_populates_only_that_slot() {
        let mut document = MatchDocument::new("abc".to_string());
        document.set_category(
            RelationshipGoal::Casual,
            vec![MatchCandidate {
                id: "other".to_string(),
                score: 87,
            }],
        );
        assert_eq!(document.category(RelationshipGoal::Casual).unwrap().len(), 1);
        assert!(document.category(RelationshipGoal::Romantic).is_none());
        assert!(document.category(RelationshipGoal::Friendship).is_none());
    }
}
