use crate::models::Profile;

/// Hard compatibility gate deciding whether a pair may be scored at all.
///
/// Applies three filters in order: age direction, gender preference,
/// relationship goal. Failing any one makes the pair ineligible; the
/// scorer then reports 0 and the ranker drops the pair.
///
/// Symmetric under swapping its arguments and total for well-formed
/// profiles.
#[inline]
pub fn is_eligible(a: &Profile, b: &Profile) -> bool {
    ages_compatible(a, b) && genders_compatible(a, b) && goals_compatible(a, b)
}

/// Age-direction tolerance, checked in both directions: each profile must
/// accept the other being older or younger than itself.
#[inline]
pub fn ages_compatible(a: &Profile, b: &Profile) -> bool {
    if (!a.accepts_older && b.age > a.age) || (!a.accepts_younger && b.age < a.age) {
        return false;
    }
    if (!b.accepts_older && a.age > b.age) || (!b.accepts_younger && a.age < b.age) {
        return false;
    }
    true
}

/// Mutual gender acceptance: each profile's gender must fall inside the
/// other's resolved preference set. One-directional interest is not enough.
#[inline]
pub fn genders_compatible(a: &Profile, b: &Profile) -> bool {
    a.gender_preferences.accepts(b.gender) && b.gender_preferences.accepts(a.gender)
}

/// Both profiles must be looking for exactly the same relationship goal.
#[inline]
pub fn goals_compatible(a: &Profile, b: &Profile) -> bool {
    a.relationship_goal == b.relationship_goal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ConflictStyle, Gender, GenderPreferences, PersonalityTraits, RelationshipGoal,
        ValuesImportance,
    };

    fn create_test_profile(
        id: &str,
        age: u8,
        gender: Gender,
        preferences: GenderPreferences,
        goal: RelationshipGoal,
    ) -> Profile {
        Profile {
            id: id.to_string(),
            age,
            gender,
            gender_preferences: preferences,
            relationship_goal: goal,
            accepts_older: true,
            accepts_younger: true,
            activities: ["reading", "sports", "music"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            social_preference: 4,
            hobby_time_hours: 7.5,
            values_importance: ValuesImportance {
                honesty: 6,
                loyalty: 5,
                kindness: 6,
                respect: 5,
                open_mindedness: 4,
                independence: 3,
                ambition: 4,
                creativity: 3,
                humor: 5,
                authenticity: 6,
                empathy: 5,
            },
            personality_traits: PersonalityTraits {
                closeness_ease: 4,
                attention_to_detail: 5,
                stress_level: 3,
                imagination: 4,
            },
            conflict_style: ConflictStyle::Understanding,
            self_description_embedding: Some(vec![0.2, 0.3, 0.4]),
            attracted_to_embedding: Some(vec![0.3, 0.4, 0.5]),
        }
    }

    #[test]
    fn test_mutually_accepting_pair_is_eligible() {
        let a = create_test_profile(
            "1",
            25,
            Gender::Female,
            GenderPreferences::Of(vec![Gender::Male]),
            RelationshipGoal::Casual,
        );
        let b = create_test_profile(
            "2",
            28,
            Gender::Male,
            GenderPreferences::Of(vec![Gender::Female]),
            RelationshipGoal::Casual,
        );

        assert!(is_eligible(&a, &b));
    }

    #[test]
    fn test_one_directional_interest_is_not_enough() {
        // Both women seeking men: each accepts the other's preferences in
        // no direction, so the pair is rejected.
        let a = create_test_profile(
            "1",
            25,
            Gender::Female,
            GenderPreferences::Of(vec![Gender::Male]),
            RelationshipGoal::Casual,
        );
        let b = create_test_profile(
            "2",
            26,
            Gender::Female,
            GenderPreferences::Of(vec![Gender::Male]),
            RelationshipGoal::Casual,
        );

        assert!(!genders_compatible(&a, &b));
        assert!(!is_eligible(&a, &b));
    }

    #[test]
    fn test_any_preference_accepts_every_gender() {
        let a = create_test_profile(
            "1",
            25,
            Gender::NonBinary,
            GenderPreferences::Any,
            RelationshipGoal::Friendship,
        );
        let b = create_test_profile(
            "2",
            24,
            Gender::Undisclosed,
            GenderPreferences::Any,
            RelationshipGoal::Friendship,
        );

        assert!(is_eligible(&a, &b));
    }

    #[test]
    fn test_age_direction_rejects_older_candidate() {
        let mut a = create_test_profile(
            "1",
            25,
            Gender::Female,
            GenderPreferences::Any,
            RelationshipGoal::Romantic,
        );
        a.accepts_older = false;
        let b = create_test_profile(
            "2",
            30,
            Gender::Male,
            GenderPreferences::Any,
            RelationshipGoal::Romantic,
        );

        assert!(!ages_compatible(&a, &b));
        // Symmetric check: the same rejection applies with arguments swapped.
        assert!(!ages_compatible(&b, &a));
    }

    #[test]
    fn test_age_direction_rejects_younger_candidate() {
        let a = create_test_profile(
            "1",
            25,
            Gender::Female,
            GenderPreferences::Any,
            RelationshipGoal::Romantic,
        );
        let mut b = create_test_profile(
            "2",
            30,
            Gender::Male,
            GenderPreferences::Any,
            RelationshipGoal::Romantic,
        );
        b.accepts_younger = false;

        assert!(!is_eligible(&a, &b));
    }

    #[test]
    fn test_same_age_ignores_direction_flags() {
        let mut a = create_test_profile(
            "1",
            25,
            Gender::Female,
            GenderPreferences::Any,
            RelationshipGoal::Romantic,
        );
        a.accepts_older = false;
        a.accepts_younger = false;
        let mut b = create_test_profile(
            "2",
            25,
            Gender::Male,
            GenderPreferences::Any,
            RelationshipGoal::Romantic,
        );
        b.accepts_older = false;
        b.accepts_younger = false;

        assert!(ages_compatible(&a, &b));
    }

    #[test]
    fn test_differing_goals_are_rejected() {
        let a = create_test_profile(
            "1",
            25,
            Gender::Female,
            GenderPreferences::Any,
            RelationshipGoal::Casual,
        );
        let b = create_test_profile(
            "2",
            26,
            Gender::Male,
            GenderPreferences::Any,
            RelationshipGoal::Friendship,
        );

        assert!(!is_eligible(&a, &b));
    }

    #[test]
    fn test_gate_is_symmetric() {
        let profiles = vec![
            create_test_profile(
                "1",
                25,
                Gender::Female,
                GenderPreferences::Of(vec![Gender::Male]),
                RelationshipGoal::Casual,
            ),
            create_test_profile(
                "2",
                28,
                Gender::Male,
                GenderPreferences::Of(vec![Gender::Female]),
                RelationshipGoal::Casual,
            ),
            create_test_profile(
                "3",
                22,
                Gender::NonBinary,
                GenderPreferences::Any,
                RelationshipGoal::Friendship,
            ),
            create_test_profile(
                "4",
                40,
                Gender::Male,
                GenderPreferences::Of(vec![Gender::Male, Gender::NonBinary]),
                RelationshipGoal::Romantic,
            ),
        ];

        for a in &profiles {
            for b in &profiles {
                assert_eq!(
                    is_eligible(a, b),
                    is_eligible(b, a),
                    "gate not symmetric for {} and {}",
                    a.id,
                    b.id
                );
            }
        }
    }
}
