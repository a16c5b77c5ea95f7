use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::cards::Card;
use crate::error::{AdvisorError, AdvisorResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    /// Fixed heuristic weight for the category. Not an equity estimate.
    pub fn strength(self) -> f64 {
        match self {
            HandCategory::RoyalFlush => 1.0,
            HandCategory::StraightFlush => 0.95,
            HandCategory::FourOfAKind => 0.9,
            HandCategory::FullHouse => 0.85,
            HandCategory::Flush => 0.8,
            HandCategory::Straight => 0.75,
            HandCategory::ThreeOfAKind => 0.7,
            HandCategory::TwoPair => 0.6,
            HandCategory::OnePair => 0.5,
            HandCategory::HighCard => 0.3,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::HighCard => write!(f, "High Card"),
            HandCategory::OnePair => write!(f, "One Pair"),
            HandCategory::TwoPair => write!(f, "Two Pair"),
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind"),
            HandCategory::Straight => write!(f, "Straight"),
            HandCategory::Flush => write!(f, "Flush"),
            HandCategory::FullHouse => write!(f, "Full House"),
            HandCategory::FourOfAKind => write!(f, "Four of a Kind"),
            HandCategory::StraightFlush => write!(f, "Straight Flush"),
            HandCategory::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandEvaluation {
    pub category: HandCategory,
    pub strength: f64,
}

impl HandEvaluation {
    pub fn new(category: HandCategory) -> Self {
        HandEvaluation {
            category,
            strength: category.strength(),
        }
    }
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.category, self.strength)
    }
}

fn is_flush(cards: &[Card]) -> bool {
    cards.iter().map(|c| c.suit).counts().values().any(|&n| n >= 5)
}

/// Highest card of any five-value run among the distinct values.
/// With `ace_low` the ace also counts as 1, so the wheel tops out at 5.
fn straight_high(cards: &[Card], ace_low: bool) -> Option<u8> {
    let mut unique: Vec<u8> = cards.iter().map(|c| c.value()).unique().sorted_unstable().collect();
    if ace_low && unique.contains(&14) {
        unique.insert(0, 1);
    }
    unique
        .windows(5)
        .filter(|w| w[4] - w[0] == 4)
        .map(|w| w[4])
        .max()
}

/// Classifies any set of cards. Flush and straight are tested independently
/// over the whole set, matching the precedence table below.
pub fn classify(cards: &[Card], ace_low: bool) -> HandEvaluation {
    let flush = is_flush(cards);
    let straight = straight_high(cards, ace_low);
    let has_ace = cards.iter().any(|c| c.value() == 14);

    // Count frequencies, highest first
    let freq: Vec<usize> = cards
        .iter()
        .map(|c| c.value())
        .counts()
        .into_values()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .collect();
    let first = freq.first().copied().unwrap_or(0);
    let second = freq.get(1).copied().unwrap_or(0);

    let category = match straight {
        Some(high) if flush && has_ace && high != 5 => HandCategory::RoyalFlush,
        Some(_) if flush => HandCategory::StraightFlush,
        _ if first == 4 => HandCategory::FourOfAKind,
        _ if first == 3 && second == 2 => HandCategory::FullHouse,
        _ if flush => HandCategory::Flush,
        Some(_) => HandCategory::Straight,
        None if first == 3 => HandCategory::ThreeOfAKind,
        None if first == 2 && second == 2 => HandCategory::TwoPair,
        None if first == 2 => HandCategory::OnePair,
        None => HandCategory::HighCard,
    };
    HandEvaluation::new(category)
}

pub fn check_hand_shape(hole_cards: &[Card], community: &[Card]) -> AdvisorResult<()> {
    if hole_cards.len() != 2 {
        return Err(AdvisorError::InvalidHandSize {
            got: hole_cards.len(),
        });
    }
    if community.len() > 5 {
        return Err(AdvisorError::TooManyCommunityCards {
            got: community.len(),
        });
    }
    Ok(())
}

/// Evaluates two hole cards plus up to five community cards.
pub fn evaluate_hand(hole_cards: &[Card], community: &[Card]) -> AdvisorResult<HandEvaluation> {
    evaluate_hand_with(hole_cards, community, false)
}

pub fn evaluate_hand_with(
    hole_cards: &[Card],
    community: &[Card],
    ace_low: bool,
) -> AdvisorResult<HandEvaluation> {
    check_hand_shape(hole_cards, community)?;

    let mut all_cards: Vec<Card> = Vec::with_capacity(hole_cards.len() + community.len());
    all_cards.extend_from_slice(hole_cards);
    all_cards.extend_from_slice(community);

    Ok(classify(&all_cards, ace_low))
}
