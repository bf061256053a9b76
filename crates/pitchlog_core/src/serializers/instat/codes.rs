//! InStat action codes.
//!
//! Codes are grouped into categories; each category owns its own
//! result/qualifier derivation in `classify`. Anything not listed in a
//! category falls back to a generic event labelled from [`action_label`].

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

// Period markers
pub const FIRST_HALF_START: u32 = 18010;
pub const SECOND_HALF_START: u32 = 18020;
pub const FIRST_HALF_END: u32 = 18030;
pub const SECOND_HALF_END: u32 = 18040;

// Passes
pub const ATTACKING_PASS_ACCURATE: u32 = 1011;
pub const ATTACKING_PASS_INACCURATE: u32 = 1012;
pub const NON_ATTACKING_PASS_ACCURATE: u32 = 1021;
pub const NON_ATTACKING_PASS_INACCURATE: u32 = 1022;
pub const KEY_PASS_ACCURATE: u32 = 1031;
pub const KEY_PASS_INACCURATE: u32 = 1032;
pub const ASSIST: u32 = 1040;
pub const SECOND_ASSIST: u32 = 1050;
pub const CROSS_ACCURATE: u32 = 26001;
pub const CROSS_INACCURATE: u32 = 26002;
pub const SET_PIECE_CROSS_ACCURATE: u32 = 26003;
pub const SET_PIECE_CROSS_INACCURATE: u32 = 26004;

pub const CROSS_COMPLETE: &[u32] = &[CROSS_ACCURATE, SET_PIECE_CROSS_ACCURATE];
pub const CROSS_INCOMPLETE: &[u32] = &[CROSS_INACCURATE, SET_PIECE_CROSS_INACCURATE];

// Shots
pub const SHOT_WIDE: u32 = 4010;
pub const SHOT_SAVED: u32 = 4020;
pub const SHOT_BLOCKED: u32 = 4030;
pub const SHOT_POST: u32 = 4040;
pub const GOAL: u32 = 8010;
pub const OWN_GOAL: u32 = 8020;

// Take-ons
pub const DRIBBLE_SUCCESSFUL: u32 = 2051;
pub const DRIBBLE_UNSUCCESSFUL: u32 = 2052;
pub const DRIBBLE_INTO_BOX_SUCCESSFUL: u32 = 2053;
pub const DRIBBLE_CONTESTED: u32 = 2054;

pub const TAKE_ON_COMPLETE: &[u32] = &[DRIBBLE_SUCCESSFUL, DRIBBLE_INTO_BOX_SUCCESSFUL];

// Cards
pub const FIRST_YELLOW_CARD: u32 = 3020;
pub const SECOND_YELLOW_CARD: u32 = 3030;
pub const RED_CARD: u32 = 3040;

// Fouls, recoveries, dead ball, formation
pub const FOUL: u32 = 3010;
pub const BALL_RECOVERY: u32 = 2020;
pub const INTERCEPTION: u32 = 2030;
pub const BALL_OUT: u32 = 27000;
pub const CORNER_AWARDED: u32 = 5040;
pub const FORMATION_CHANGE: u32 = 18100;

pub const UNKNOWN_LABEL: &str = "unknown";

/// Closed set of behaviours an action code can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    PeriodMarker,
    Pass,
    Shot,
    TakeOn,
    Foul,
    Recovery,
    BallOut,
    FormationChange,
    Generic,
}

impl ActionCategory {
    pub fn from_code(code: u32) -> Self {
        match code {
            FIRST_HALF_START | SECOND_HALF_START | FIRST_HALF_END | SECOND_HALF_END => {
                ActionCategory::PeriodMarker
            }
            ATTACKING_PASS_ACCURATE
            | ATTACKING_PASS_INACCURATE
            | NON_ATTACKING_PASS_ACCURATE
            | NON_ATTACKING_PASS_INACCURATE
            | KEY_PASS_ACCURATE
            | KEY_PASS_INACCURATE
            | ASSIST
            | SECOND_ASSIST
            | CROSS_ACCURATE
            | CROSS_INACCURATE
            | SET_PIECE_CROSS_ACCURATE
            | SET_PIECE_CROSS_INACCURATE => ActionCategory::Pass,
            SHOT_WIDE | SHOT_SAVED | SHOT_BLOCKED | SHOT_POST | GOAL | OWN_GOAL => {
                ActionCategory::Shot
            }
            DRIBBLE_SUCCESSFUL
            | DRIBBLE_UNSUCCESSFUL
            | DRIBBLE_INTO_BOX_SUCCESSFUL
            | DRIBBLE_CONTESTED => ActionCategory::TakeOn,
            // a card is booked against the foul that drew it
            FOUL | FIRST_YELLOW_CARD | SECOND_YELLOW_CARD | RED_CARD => ActionCategory::Foul,
            BALL_RECOVERY | INTERCEPTION => ActionCategory::Recovery,
            BALL_OUT | CORNER_AWARDED => ActionCategory::BallOut,
            FORMATION_CHANGE => ActionCategory::FormationChange,
            _ => ActionCategory::Generic,
        }
    }
}

pub fn is_card(code: u32) -> bool {
    matches!(code, FIRST_YELLOW_CARD | SECOND_YELLOW_CARD | RED_CARD)
}

/// Actions that stop play.
pub fn is_dead_ball(code: u32) -> bool {
    is_card(code) || matches!(code, BALL_OUT | CORNER_AWARDED)
}

static ACTION_LABELS: Lazy<FxHashMap<u32, &'static str>> = Lazy::new(|| {
    [
        (FIRST_HALF_START, "Start of the 1st half"),
        (SECOND_HALF_START, "Start of the 2nd half"),
        (FIRST_HALF_END, "End of the 1st half"),
        (SECOND_HALF_END, "End of the 2nd half"),
        (ATTACKING_PASS_ACCURATE, "Attacking pass accurate"),
        (ATTACKING_PASS_INACCURATE, "Attacking pass inaccurate"),
        (NON_ATTACKING_PASS_ACCURATE, "Non attacking pass accurate"),
        (NON_ATTACKING_PASS_INACCURATE, "Non attacking pass inaccurate"),
        (KEY_PASS_ACCURATE, "Key pass accurate"),
        (KEY_PASS_INACCURATE, "Key pass inaccurate"),
        (ASSIST, "Assist"),
        (SECOND_ASSIST, "Second assist"),
        (CROSS_ACCURATE, "Accurate crossing"),
        (CROSS_INACCURATE, "Inaccurate crossing"),
        (SET_PIECE_CROSS_ACCURATE, "Accurate crossing from set piece"),
        (SET_PIECE_CROSS_INACCURATE, "Inaccurate crossing from set piece"),
        (SHOT_WIDE, "Wide shot"),
        (SHOT_SAVED, "Shot on target"),
        (SHOT_BLOCKED, "Blocked shot"),
        (SHOT_POST, "Shot into the bar/post"),
        (GOAL, "Goal"),
        (OWN_GOAL, "Own goal"),
        (DRIBBLE_SUCCESSFUL, "Dribbling successful"),
        (DRIBBLE_UNSUCCESSFUL, "Unsuccessful dribbling"),
        (DRIBBLE_INTO_BOX_SUCCESSFUL, "Dribbling into the box successful"),
        (DRIBBLE_CONTESTED, "Dribbling challenge"),
        (FOUL, "Foul"),
        (FIRST_YELLOW_CARD, "Yellow card"),
        (SECOND_YELLOW_CARD, "Second yellow card"),
        (RED_CARD, "Red card"),
        (BALL_RECOVERY, "Ball recovery"),
        (INTERCEPTION, "Interception"),
        (BALL_OUT, "Ball out of the field"),
        (CORNER_AWARDED, "Corner"),
        (FORMATION_CHANGE, "Formation change"),
        (2010, "Challenge"),
        (2011, "Challenge won"),
        (2012, "Challenge lost"),
        (2040, "Clearance"),
        (2060, "Tackle"),
        (5010, "Free kick"),
        (5020, "Throw-in"),
        (5030, "Goal kick"),
        (5050, "Penalty"),
        (6010, "Offside"),
        (7010, "Goalkeeper save"),
        (7020, "Goalkeeper catch"),
        (13040, "Substitution"),
        (21000, "Pass receiving"),
        (28010, "Ball touch"),
    ]
    .into_iter()
    .collect()
});

/// Human-readable label for a code, `"unknown"` when the code is not listed.
pub fn action_label(code: u32) -> &'static str {
    ACTION_LABELS.get(&code).copied().unwrap_or(UNKNOWN_LABEL)
}
