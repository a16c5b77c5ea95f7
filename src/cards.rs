use std::fmt;

use crate::error::{AdvisorError, AdvisorResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// Parses the rank part of a token. `10` and `T` both name the ten.
    pub fn from_symbol(s: &str) -> AdvisorResult<Rank> {
        match s.to_ascii_uppercase().as_str() {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" | "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(AdvisorError::InvalidRank(s.to_string())),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub fn from_char(c: char) -> AdvisorResult<Suit> {
        match c.to_ascii_lowercase() {
            '\u{2660}' | 's' => Ok(Suit::Spades),
            '\u{2665}' | 'h' => Ok(Suit::Hearts),
            '\u{2666}' | 'd' => Ok(Suit::Diamonds),
            '\u{2663}' | 'c' => Ok(Suit::Clubs),
            _ => Err(AdvisorError::InvalidSuit(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "\u{2660}",
            Suit::Hearts => "\u{2665}",
            Suit::Diamonds => "\u{2666}",
            Suit::Clubs => "\u{2663}",
        }
    }

    fn is_suit_char(c: char) -> bool {
        Suit::from_char(c).is_ok()
    }
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    /// ASCII form, e.g. `10h` or `As`.
    pub fn short(&self) -> String {
        format!("{}{}", self.rank.symbol(), self.suit.to_char())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Parses a single card token such as `A♠`, `10♥` or `Td`.
///
/// An empty token means "no card selected" and yields `Ok(None)`.
pub fn parse_card(token: &str) -> AdvisorResult<Option<Card>> {
    let token = token.trim().trim_end_matches('\u{fe0f}');
    if token.is_empty() {
        return Ok(None);
    }
    let chars: Vec<char> = token.chars().collect();
    if chars.len() < 2 {
        return Err(AdvisorError::InvalidCardNotation(token.to_string()));
    }
    let (rank_chars, suit_char) = chars.split_at(chars.len() - 1);
    let rank_str: String = rank_chars.iter().collect();
    let rank = Rank::from_symbol(&rank_str)?;
    let suit = Suit::from_char(suit_char[0])?;
    Ok(Some(Card::new(rank, suit)))
}

/// Parses a list of tokens, dropping the empty ones.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> AdvisorResult<Vec<Card>> {
    let mut cards = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Some(card) = parse_card(token.as_ref())? {
            cards.push(card);
        }
    }
    Ok(cards)
}

/// Parses free-form card text: `"A♠ K♥"`, `"As,Kh"` and `"AsKh10d"` are all accepted.
pub fn parse_board(notation: &str) -> AdvisorResult<Vec<Card>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in notation.chars() {
        if ch.is_whitespace() || ch == ',' || ch == '\u{fe0f}' {
            if !current.is_empty() {
                return Err(AdvisorError::InvalidCardNotation(current));
            }
            continue;
        }
        current.push(ch);
        // A suit character always closes a token; no rank symbol doubles as a suit.
        if current.chars().count() >= 2 && Suit::is_suit_char(ch) {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        return Err(AdvisorError::InvalidCardNotation(current));
    }
    parse_cards(&tokens)
}

/// The 52 valid tokens in rank-major order, as offered to a user picking cards.
pub fn all_tokens() -> Vec<String> {
    ALL_RANKS
        .iter()
        .flat_map(|&r| ALL_SUITS.iter().map(move |&s| Card::new(r, s).to_string()))
        .collect()
}

pub fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
