//! Compiled-in rules knowledge base.
//!
//! Eight square bundles keyed by [`BundleKey`], plus the bus-ticket bundle
//! shown alongside a bus choice. The keyed map is built once on first use.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::bundle::{BundleKey, RuleBundle, Scenario};

const GO: RuleBundle = RuleBundle {
    icon: "🚀",
    title: "GO - Start Space",
    main_rules: &[
        "Collect $200 when you land directly on GO",
        "Collect $200 when you pass GO during your turn",
        "You can collect GO money multiple times in one turn if using special dice",
    ],
    scenarios: &[
        Scenario {
            title: "Landing on GO",
            description: "You collect $200, same as passing it",
        },
        Scenario {
            title: "Passing GO",
            description: "Each time you pass GO, collect $200 from the Bank",
        },
        Scenario {
            title: "Mr. Monopoly or Bus Ticket",
            description: "If you pass GO using special movement, you still collect $200",
        },
        Scenario {
            title: "🎲 If You Rolled Doubles",
            description: "Collect your $200, then roll again! You get to keep moving and might pass GO again for another $200.",
        },
    ],
    tips: &[
        "GO is your best friend - you'll always get paid!",
        "In Mega Monopoly, some cards may give you double GO money",
        "You can never lose money on GO space",
    ],
};

const JAIL: RuleBundle = RuleBundle {
    icon: "🏛️",
    title: "Jail / Just Visiting",
    main_rules: &[
        "If you land here by normal dice roll, you are \"Just Visiting\"",
        "Just Visiting has no penalty - you're safe here",
        "If sent to Jail by \"Go To Jail\" space or card, you are IN Jail",
    ],
    scenarios: &[
        Scenario {
            title: "Just Visiting (Safe)",
            description: "You landed here naturally. No penalties, continue playing normally next turn",
        },
        Scenario {
            title: "Sent to Jail",
            description: "You must go directly to Jail if: (1) You land on \"Go To Jail\" space, (2) Chance/Community Chest card sends you, (3) You roll doubles three times in a row",
        },
        Scenario {
            title: "Getting Out of Jail",
            description: "Three ways: (1) Pay $50 fine before rolling, (2) Use \"Get Out of Jail Free\" card, (3) Roll doubles on your turn (max 3 attempts)",
        },
        Scenario {
            title: "🎲 If You Rolled Doubles (Just Visiting)",
            description: "You're safe! Take your turn normally and roll again. Doubles only matter if you're SENT to Jail (then you forfeit the extra roll).",
        },
    ],
    tips: &[
        "Being in Jail late in the game can be strategic - you avoid landing on expensive properties!",
        "You can still collect rent while in Jail",
        "If you don't roll doubles after 3 turns, you MUST pay $50 and move with your last roll",
    ],
};

const GO_TO_JAIL: RuleBundle = RuleBundle {
    icon: "👮",
    title: "Go To Jail",
    main_rules: &[
        "Go directly to Jail - do not pass GO",
        "Do not collect $200",
        "Move your token directly to the Jail space",
        "Your turn ends immediately",
    ],
    scenarios: &[
        Scenario {
            title: "What Happens",
            description: "Move directly to Jail (position 10). Your turn ends. You do NOT collect $200 for passing GO",
        },
        Scenario {
            title: "Next Turn Options",
            description: "On your next turn, choose: (1) Pay $50 before rolling, (2) Use \"Get Out of Jail Free\" card, or (3) Try to roll doubles (3 attempts maximum)",
        },
        Scenario {
            title: "Rolling Doubles in Jail",
            description: "If you roll doubles, you get out immediately and move that number of spaces. You don't get another turn even though you rolled doubles",
        },
        Scenario {
            title: "🎲 CRITICAL: If You Rolled Doubles",
            description: "⚠️ EXCEPTION TO DOUBLES RULE! Even if you rolled doubles, you do NOT get to roll again. Your turn ends immediately. This also applies if you had Mr. Monopoly, Bus, or Chance on the Speed Die - you forfeit all special actions.",
        },
    ],
    tips: &[
        "This is the only space where you don't collect GO money when passing it",
        "Early game: Get out quickly to buy properties. Late game: Sometimes staying in Jail is safer!",
        "Save your \"Get Out of Jail Free\" cards for strategic moments",
        "Go To Jail is the ONLY square that cancels your doubles roll - remember this!",
    ],
};

const CHANCE: RuleBundle = RuleBundle {
    icon: "❓",
    title: "Chance",
    main_rules: &[
        "Draw the top card from the Chance deck",
        "Follow the instructions on the card immediately",
        "Return the card to the bottom of the deck (unless it's \"Get Out of Jail Free\")",
        "Some cards may move you to different spaces",
    ],
    scenarios: &[
        Scenario {
            title: "Movement Cards",
            description: "Cards like \"Advance to GO\" or \"Go to Illinois Avenue\" move you immediately. If you pass GO, collect $200",
        },
        Scenario {
            title: "Money Cards",
            description: "Some cards give you money (like \"Bank pays dividend\") or make you pay (like \"Repairs on properties\")",
        },
        Scenario {
            title: "Get Out of Jail Free",
            description: "Keep this card until needed. You can also sell it to another player for an agreed price",
        },
        Scenario {
            title: "Property Repairs",
            description: "Some cards charge per house/hotel you own (e.g., $25 per house, $100 per hotel)",
        },
        Scenario {
            title: "🎲 If You Rolled Doubles",
            description: "Draw and follow your Chance card first, then roll again! Exception: If the Chance card sends you to Jail, your turn ends (no extra roll).",
        },
    ],
    tips: &[
        "Chance cards can drastically change the game - be prepared for anything!",
        "Keep track of which Chance cards have been drawn to anticipate what's coming",
        "Some cards move you backwards - you don't collect GO if moving backwards",
        "Trading a \"Get Out of Jail Free\" card can be very valuable in negotiations",
    ],
};

const COMMUNITY_CHEST: RuleBundle = RuleBundle {
    icon: "📦",
    title: "Community Chest",
    main_rules: &[
        "Draw the top card from the Community Chest deck",
        "Follow the instructions on the card immediately",
        "Return the card to the bottom of the deck (unless it's \"Get Out of Jail Free\")",
        "Most Community Chest cards involve receiving or paying money",
    ],
    scenarios: &[
        Scenario {
            title: "Money Received",
            description: "Cards like \"Bank error in your favor\", \"Income tax refund\", \"Inherit $100\" - collect from the Bank",
        },
        Scenario {
            title: "Money Paid",
            description: "Cards like \"Doctor's fees\", \"Hospital fees\", \"School fees\" - pay to the Bank",
        },
        Scenario {
            title: "Birthday/Collect from Players",
            description: "Some cards make every other player pay you (e.g., \"It's your birthday - collect $10 from each player\")",
        },
        Scenario {
            title: "Get Out of Jail Free",
            description: "Keep this card. You can use it when needed or sell it to another player",
        },
        Scenario {
            title: "🎲 If You Rolled Doubles",
            description: "Draw and follow your Community Chest card first, then roll again! Exception: If the card sends you to Jail, your turn ends (no extra roll).",
        },
    ],
    tips: &[
        "Community Chest cards are generally less risky than Chance cards",
        "The \"Collect from every player\" cards are great when playing with many players",
        "If you have to pay but don't have enough money, you can mortgage properties or sell houses",
        "Birthday cards can be worth a lot in a 4+ player game!",
    ],
};

const FREE_PARKING: RuleBundle = RuleBundle {
    icon: "🅿️",
    title: "Free Parking",
    main_rules: &[
        "This is a free resting space - no action required",
        "Nothing happens when you land here",
        "You are safe from rent or penalties",
        "House Rule: Some families put tax money here as a jackpot (not official rules)",
    ],
    scenarios: &[
        Scenario {
            title: "Standard Rules",
            description: "Landing here does nothing. It's just a safe space to rest",
        },
        Scenario {
            title: "Popular House Rule",
            description: "Many families collect all tax money, fines, and fees in the center. Landing on Free Parking wins this jackpot. This is NOT in official rules but very common!",
        },
        Scenario {
            title: "Strategic Use",
            description: "If using house rules with jackpot, you can't control landing here, but it can provide a big cash boost",
        },
        Scenario {
            title: "🎲 If You Rolled Doubles",
            description: "Take your rest (or collect the jackpot if using house rules), then roll again! This is a safe spot with a bonus roll.",
        },
    ],
    tips: &[
        "This is the safest space on the board - enjoy the break!",
        "Official Monopoly rules say nothing happens here, but most families use the jackpot house rule",
        "If playing with jackpot rules, this can be a game-changer when you're low on cash",
        "Remember: House rules should be agreed upon before the game starts",
    ],
};

const INCOME_TAX: RuleBundle = RuleBundle {
    icon: "💸",
    title: "Income Tax",
    main_rules: &[
        "Pay $200 to the Bank",
        "This is mandatory - you must pay when you land here",
        "If you don't have enough cash, mortgage properties or sell houses",
        "You cannot negotiate this payment",
    ],
    scenarios: &[
        Scenario {
            title: "Have Enough Cash",
            description: "Simply pay $200 to the Bank and continue",
        },
        Scenario {
            title: "Don't Have $200",
            description: "You must raise money by: (1) Mortgaging properties, (2) Selling houses/hotels back to Bank at half price, (3) Trading with other players",
        },
        Scenario {
            title: "Still Can't Pay",
            description: "If you cannot raise $200 even after selling everything, you are bankrupt and out of the game",
        },
        Scenario {
            title: "🎲 If You Rolled Doubles",
            description: "Pay your $200 tax first, then roll again! The doubles rule still applies - taxes don't cancel your extra roll.",
        },
    ],
    tips: &[
        "Always keep some cash reserves for taxes and rent!",
        "This space appears early in the game when you may have less cash",
        "Mortgage undeveloped properties before selling houses to avoid losing money",
        "Try to maintain at least $200-300 in cash to avoid emergencies",
    ],
};

const LUXURY_TAX: RuleBundle = RuleBundle {
    icon: "💎",
    title: "Luxury Tax",
    main_rules: &[
        "Pay $100 to the Bank",
        "This is mandatory when you land here",
        "If you don't have enough cash, mortgage properties or sell houses",
        "You cannot negotiate this payment",
    ],
    scenarios: &[
        Scenario {
            title: "Have Enough Cash",
            description: "Pay $100 to the Bank and continue playing",
        },
        Scenario {
            title: "Don't Have $100",
            description: "Raise money by mortgaging properties, selling houses/hotels, or trading with players",
        },
        Scenario {
            title: "Bankruptcy",
            description: "If you cannot pay even after liquidating everything, you're out of the game",
        },
        Scenario {
            title: "🎲 If You Rolled Doubles",
            description: "Pay your $100 tax first, then roll again! The doubles rule still applies - taxes don't cancel your extra roll.",
        },
    ],
    tips: &[
        "Luxury Tax is half the cost of Income Tax - less painful!",
        "This appears late in the game near Boardwalk when properties are expensive",
        "Keep cash reserves, especially in the late game",
        "Better to land here than on a property with hotels!",
    ],
};

/// Guidance shown next to a bus choice. Not reachable through classification.
pub static BUS_TICKET: RuleBundle = RuleBundle {
    icon: "🚌",
    title: "Bus Ticket - Railroad Space",
    main_rules: &[
        "You landed on a Railroad with a Bus Ticket",
        "You can choose to move normally OR take the bus to the next Bus Ticket space",
        "All four Railroads have Bus Tickets (Reading, Pennsylvania, B&O, Short Line)",
        "The bus always goes clockwise to the next Railroad",
    ],
    scenarios: &[
        Scenario {
            title: "Normal Movement",
            description: "Continue with your dice roll as usual. This is safer if the bus destination has hotels or high rent",
        },
        Scenario {
            title: "Take the Bus",
            description: "Jump directly to the next Railroad (Bus Ticket space). This can help you pass GO or avoid dangerous properties",
        },
        Scenario {
            title: "Strategic Choice",
            description: "Consider: Will you pass GO? Are there expensive properties ahead? Is the bus destination owned by an opponent?",
        },
    ],
    tips: &[
        "Taking the bus can help you pass GO faster for that $200!",
        "Use the bus to skip over dangerous property groups with hotels",
        "If you own the next Railroad, taking the bus is always safe",
        "The bus can be a strategic escape from expensive neighborhoods",
    ],
};

static KNOWLEDGE_BASE: LazyLock<FxHashMap<BundleKey, RuleBundle>> = LazyLock::new(|| {
    [
        (BundleKey::Go, GO),
        (BundleKey::Jail, JAIL),
        (BundleKey::GoToJail, GO_TO_JAIL),
        (BundleKey::Chance, CHANCE),
        (BundleKey::CommunityChest, COMMUNITY_CHEST),
        (BundleKey::FreeParking, FREE_PARKING),
        (BundleKey::IncomeTax, INCOME_TAX),
        (BundleKey::LuxuryTax, LUXURY_TAX),
    ]
    .into_iter()
    .collect()
});

/// Bundle stored under `key`.
#[must_use]
pub fn bundle(key: BundleKey) -> Option<&'static RuleBundle> {
    KNOWLEDGE_BASE.get(&key)
}

/// Iterate over every square bundle in classification priority order.
pub fn knowledge_base() -> impl Iterator<Item = (BundleKey, &'static RuleBundle)> {
    BundleKey::ALL
        .into_iter()
        .filter_map(|key| bundle(key).map(|b| (key, b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_a_bundle() {
        for key in BundleKey::ALL {
            assert!(bundle(key).is_some(), "missing bundle for {}", key);
        }
        assert_eq!(knowledge_base().count(), 8);
    }

    #[test]
    fn test_bundles_end_with_doubles() {
        for (key, rules) in knowledge_base() {
            assert!(!rules.scenarios.is_empty(), "{} has no scenarios", key);
            assert!(rules.doubles_scenario().is_some(), "{} does not end with doubles", key);
            assert!(!rules.main_rules.is_empty());
            assert!(!rules.tips.is_empty());
        }
    }

    #[test]
    fn test_go_to_jail_forfeits_extra_roll() {
        let rules = bundle(BundleKey::GoToJail).unwrap();
        let doubles = rules.doubles_scenario().unwrap();
        assert!(doubles.description.contains("do NOT get to roll again"));

        let income = bundle(BundleKey::IncomeTax).unwrap();
        assert!(income.doubles_scenario().unwrap().description.contains("roll again!"));
    }

    #[test]
    fn test_tax_amounts() {
        assert_eq!(bundle(BundleKey::IncomeTax).unwrap().main_rules[0], "Pay $200 to the Bank");
        assert_eq!(bundle(BundleKey::LuxuryTax).unwrap().main_rules[0], "Pay $100 to the Bank");
    }

    #[test]
    fn test_bus_ticket_bundle() {
        assert_eq!(BUS_TICKET.icon, "🚌");
        assert_eq!(BUS_TICKET.main_rules.len(), 4);
        assert_eq!(BUS_TICKET.scenarios.len(), 3);
        assert_eq!(BUS_TICKET.tips.len(), 4);
    }
}
