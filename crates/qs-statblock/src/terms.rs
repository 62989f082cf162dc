//! The condition tooltip vocabulary.
//!
//! A fixed set of status conditions that get tooltip spans when they
//! appear in statblock text.

/// A status condition and its tooltip description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTerm {
    /// Canonical spelling of the condition.
    pub name: &'static str,
    /// Tooltip text shown for the condition.
    pub description: &'static str,
}

/// Every condition the tooltip pass recognizes.
pub const GAME_TERMS: &[GameTerm] = &[
    GameTerm {
        name: "Dominated",
        description: "TBD",
    },
    GameTerm {
        name: "Grappled",
        description: "The target's speed is reduced to 0 and cannot benefit from any bonus to \
                      speed. The condition ends if the grappler is incapacitated.",
    },
    GameTerm {
        name: "Paralyzed",
        description: "The target is incapacitated and cannot move or speak. Attack rolls against \
                      the target have advantage, and any attack that hits is a critical hit if \
                      the attacker is within 5 feet.",
    },
    GameTerm {
        name: "Incapacitated",
        description: "The target cannot take actions or reactions.",
    },
    GameTerm {
        name: "Blinded",
        description: "The target cannot see and automatically fails ability checks that require \
                      sight. Attack rolls against the target have advantage, and the target's \
                      attack rolls have disadvantage.",
    },
    GameTerm {
        name: "Charmed",
        description: "The target cannot attack the charmer or target the charmer with harmful \
                      abilities or magical effects. The charmer has advantage on social \
                      interaction checks with the target.",
    },
    GameTerm {
        name: "Frightened",
        description: "The target has disadvantage on ability checks and attack rolls while the \
                      source of fear is within line of sight. The target cannot willingly move \
                      closer to the source of fear.",
    },
    GameTerm {
        name: "Poisoned",
        description: "The target has disadvantage on attack rolls and ability checks.",
    },
    GameTerm {
        name: "Prone",
        description: "The target's only movement option is to crawl. Attack rolls against the \
                      target have advantage if the attacker is within 5 feet, otherwise \
                      disadvantage.",
    },
    GameTerm {
        name: "Restrained",
        description: "The target's speed becomes 0. Attack rolls against the target have \
                      advantage, and the target's attack rolls have disadvantage.",
    },
    GameTerm {
        name: "Stunned",
        description: "The target is incapacitated, cannot move, and can speak only falteringly. \
                      Attack rolls against the target have advantage.",
    },
    GameTerm {
        name: "Unconscious",
        description: "The target is incapacitated, cannot move or speak, and is unaware of \
                      surroundings. Attack rolls against the target have advantage, and any \
                      attack that hits is a critical hit if within 5 feet.",
    },
];

/// Description for a condition, matched case-insensitively.
pub fn term_description(name: &str) -> Option<&'static str> {
    GAME_TERMS
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .map(|t| t.description)
}
