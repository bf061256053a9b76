//! Action classification: vendor code -> event variant, result and qualifiers.

use super::codes::{self, ActionCategory};
use crate::models::{
    CardType, EventKind, FormationType, PassResult, PassType, Point, Qualifier, ShotResult,
    TakeOnResult,
};

/// Row context some categories need besides the code itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionContext<'a> {
    /// Pass destination, already in the target coordinate system.
    pub receiver_coordinates: Option<Point>,
    pub formation_label: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classified {
    pub kind: EventKind,
    pub qualifiers: Vec<Qualifier>,
}

impl Classified {
    fn bare(kind: EventKind) -> Self {
        Self { kind, qualifiers: Vec::new() }
    }
}

/// Primary variant for a row. `None` for period markers, which are not events.
pub fn classify(code: u32, ctx: ActionContext) -> Option<Classified> {
    let classified = match ActionCategory::from_code(code) {
        ActionCategory::PeriodMarker => return None,
        ActionCategory::Pass => pass(code, ctx.receiver_coordinates),
        ActionCategory::Shot => Classified::bare(EventKind::Shot { result: shot_result(code) }),
        ActionCategory::TakeOn => {
            Classified::bare(EventKind::TakeOn { result: take_on_result(code) })
        }
        ActionCategory::Foul => Classified::bare(EventKind::FoulCommitted),
        ActionCategory::Recovery => Classified::bare(EventKind::Recovery),
        ActionCategory::BallOut => Classified::bare(EventKind::BallOut),
        ActionCategory::FormationChange => Classified::bare(EventKind::FormationChange {
            formation_type: ctx.formation_label.and_then(FormationType::from_label),
        }),
        ActionCategory::Generic => Classified::bare(EventKind::Generic {
            name: codes::action_label(code).to_string(),
        }),
    };
    Some(classified)
}

/// Card severity for a code; `None` when the code is not a card.
pub fn card_type(code: u32) -> Option<CardType> {
    match code {
        codes::FIRST_YELLOW_CARD => Some(CardType::FirstYellow),
        codes::SECOND_YELLOW_CARD => Some(CardType::SecondYellow),
        codes::RED_CARD => Some(CardType::Red),
        _ => None,
    }
}

/// The card a row books, next to (not instead of) its primary variant.
pub fn classify_card(code: u32) -> Option<Classified> {
    let card_type = card_type(code)?;
    Some(Classified {
        kind: EventKind::Card { card_type: Some(card_type) },
        qualifiers: vec![Qualifier::Card(card_type)],
    })
}

fn pass(code: u32, receiver_coordinates: Option<Point>) -> Classified {
    let (result, qualifiers) = if codes::CROSS_COMPLETE.contains(&code) {
        (Some(PassResult::Complete), vec![Qualifier::Pass(PassType::Cross)])
    } else if codes::CROSS_INCOMPLETE.contains(&code) {
        (Some(PassResult::Incomplete), vec![Qualifier::Pass(PassType::Cross)])
    } else {
        match code {
            codes::ASSIST => (Some(PassResult::Complete), vec![Qualifier::Pass(PassType::Assist)]),
            codes::SECOND_ASSIST => {
                (Some(PassResult::Complete), vec![Qualifier::Pass(PassType::Assist2)])
            }
            codes::ATTACKING_PASS_ACCURATE
            | codes::NON_ATTACKING_PASS_ACCURATE
            | codes::KEY_PASS_ACCURATE => (Some(PassResult::Complete), Vec::new()),
            codes::ATTACKING_PASS_INACCURATE
            | codes::NON_ATTACKING_PASS_INACCURATE
            | codes::KEY_PASS_INACCURATE => (Some(PassResult::Incomplete), Vec::new()),
            _ => (None, Vec::new()),
        }
    };

    Classified {
        kind: EventKind::Pass {
            result,
            receiver_coordinates,
            // the log carries no receiver identity or receive time
            receiver_player_id: None,
            receive_timestamp: None,
        },
        qualifiers,
    }
}

fn shot_result(code: u32) -> Option<ShotResult> {
    match code {
        codes::GOAL => Some(ShotResult::Goal),
        codes::OWN_GOAL => Some(ShotResult::OwnGoal),
        codes::SHOT_BLOCKED => Some(ShotResult::Blocked),
        codes::SHOT_POST => Some(ShotResult::Post),
        codes::SHOT_SAVED => Some(ShotResult::Saved),
        _ => None,
    }
}

fn take_on_result(code: u32) -> Option<TakeOnResult> {
    if codes::TAKE_ON_COMPLETE.contains(&code) {
        Some(TakeOnResult::Complete)
    } else if code == codes::DRIBBLE_UNSUCCESSFUL {
        Some(TakeOnResult::Incomplete)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventType;

    fn kind_of(code: u32) -> EventKind {
        classify(code, ActionContext::default()).unwrap().kind
    }

    #[test]
    fn test_card_codes_emit_exactly_one_matching_qualifier() {
        for (code, expected) in [
            (codes::FIRST_YELLOW_CARD, CardType::FirstYellow),
            (codes::SECOND_YELLOW_CARD, CardType::SecondYellow),
            (codes::RED_CARD, CardType::Red),
        ] {
            let card = classify_card(code).unwrap();
            assert_eq!(card.kind, EventKind::Card { card_type: Some(expected) });
            assert_eq!(card.qualifiers, vec![Qualifier::Card(expected)]);
        }
    }

    #[test]
    fn test_non_card_codes_are_not_cards() {
        assert_eq!(card_type(codes::FOUL), None);
        assert!(classify_card(codes::FOUL).is_none());
        assert!(classify_card(codes::GOAL).is_none());
    }

    #[test]
    fn test_card_row_also_classifies_as_foul() {
        assert_eq!(kind_of(codes::RED_CARD).event_type(), EventType::FoulCommitted);
    }

    #[test]
    fn test_crosses_and_assists() {
        let receiver = Point::new(0.9, 0.4);
        let ctx = ActionContext { receiver_coordinates: Some(receiver), formation_label: None };

        let cross = classify(codes::CROSS_ACCURATE, ctx).unwrap();
        assert_eq!(cross.qualifiers, vec![Qualifier::Pass(PassType::Cross)]);
        assert_eq!(
            cross.kind,
            EventKind::Pass {
                result: Some(PassResult::Complete),
                receiver_coordinates: Some(receiver),
                receiver_player_id: None,
                receive_timestamp: None,
            }
        );

        let cross = classify(codes::SET_PIECE_CROSS_INACCURATE, ctx).unwrap();
        assert!(matches!(cross.kind, EventKind::Pass { result: Some(PassResult::Incomplete), .. }));
        assert_eq!(cross.qualifiers, vec![Qualifier::Pass(PassType::Cross)]);

        let assist = classify(codes::SECOND_ASSIST, ctx).unwrap();
        assert!(matches!(assist.kind, EventKind::Pass { result: Some(PassResult::Complete), .. }));
        assert_eq!(assist.qualifiers, vec![Qualifier::Pass(PassType::Assist2)]);

        let plain = classify(codes::ATTACKING_PASS_INACCURATE, ActionContext::default()).unwrap();
        assert!(plain.qualifiers.is_empty());
        assert!(matches!(
            plain.kind,
            EventKind::Pass { result: Some(PassResult::Incomplete), receiver_coordinates: None, .. }
        ));
    }

    #[test]
    fn test_shot_outcomes() {
        assert_eq!(kind_of(codes::GOAL), EventKind::Shot { result: Some(ShotResult::Goal) });
        assert_eq!(kind_of(codes::OWN_GOAL), EventKind::Shot { result: Some(ShotResult::OwnGoal) });
        assert_eq!(kind_of(codes::SHOT_POST), EventKind::Shot { result: Some(ShotResult::Post) });
        assert_eq!(kind_of(codes::SHOT_WIDE), EventKind::Shot { result: None });
    }

    #[test]
    fn test_take_on_outcomes() {
        assert_eq!(
            kind_of(codes::DRIBBLE_INTO_BOX_SUCCESSFUL),
            EventKind::TakeOn { result: Some(TakeOnResult::Complete) }
        );
        assert_eq!(
            kind_of(codes::DRIBBLE_UNSUCCESSFUL),
            EventKind::TakeOn { result: Some(TakeOnResult::Incomplete) }
        );
        assert_eq!(kind_of(codes::DRIBBLE_CONTESTED), EventKind::TakeOn { result: None });
    }

    #[test]
    fn test_simple_variants_and_markers() {
        assert_eq!(kind_of(codes::INTERCEPTION), EventKind::Recovery);
        assert_eq!(kind_of(codes::CORNER_AWARDED), EventKind::BallOut);
        assert!(classify(codes::FIRST_HALF_START, ActionContext::default()).is_none());

        let ctx = ActionContext { receiver_coordinates: None, formation_label: Some("3-5-2") };
        assert_eq!(
            classify(codes::FORMATION_CHANGE, ctx).unwrap().kind,
            EventKind::FormationChange { formation_type: Some(FormationType::F352) }
        );
    }

    #[test]
    fn test_generic_fallback_labels() {
        assert_eq!(kind_of(6010), EventKind::Generic { name: "Offside".to_string() });
        assert_eq!(kind_of(424242), EventKind::Generic { name: "unknown".to_string() });
    }
}
