//! Walkthrough of the deck and vector types.
//!
//! Run with `cargo run --example tour [seed]`.

use std::time::{SystemTime, UNIX_EPOCH};

use datamodel::{Card, FrenchDeck, Rank, Sequence, Slice, Suit, Vector, spades_high};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });

    deck_tour(seed);
    println!();
    vector_tour();
}

fn deck_tour(seed: u64) {
    let beer_card = Card::new(Rank::Seven, Suit::Diamonds);
    println!("{beer_card}");

    let deck = FrenchDeck::new(seed);
    println!("len: {}", deck.len());
    print_lookup("deck[0]", deck.get(0));
    print_lookup("deck[-1]", deck.get(-1));
    print_lookup("deck[52]", deck.get(52));

    println!("random: {}", deck.random_card());
    println!("random: {}", deck.random_card());

    match deck.slice(..3) {
        Ok(cards) => print_cards("deck[:3]", &cards),
        Err(err) => println!("slice error: {err}"),
    }
    match deck.slice(Slice::new().start(12).step(13)) {
        Ok(cards) => print_cards("deck[12::13]", &cards),
        Err(err) => println!("slice error: {err}"),
    }

    println!("forward:");
    for card in &deck {
        println!("  {card}");
    }
    println!("reversed:");
    for card in deck.iter_rev() {
        println!("  {card}");
    }

    let queen = Card::new(Rank::Queen, Suit::Hearts);
    println!("{queen} in deck: {}", deck.contains(&queen));
    match Card::parse("Z", "hearts") {
        Ok(card) => println!("{card} in deck: {}", deck.contains(&card)),
        Err(err) => println!("Card('Z', 'hearts'): {err}"),
    }

    print_cards("sorted by spades_high", &deck.sorted_by_key(spades_high));
    print_cards("shuffled copy", &deck.shuffled_copy());
}

fn vector_tour() {
    let v1 = Vector::new(2.0, 4.0);
    let v2 = Vector::new(2.0, 1.0);
    println!("{v1} + {v2} = {}", v1 + v2);

    let v = Vector::new(3.0, 4.0);
    println!("abs({v}) = {}", v.magnitude());
    println!("{v} * 3 = {}", v * 3.0);
    println!("abs({v} * 3) = {}", (v * 3.0).magnitude());
    println!("bool({}) = {}", Vector::default(), Vector::default().is_truthy());
    println!("bool({}) = {}", Vector::new(0.0, 1.0), Vector::new(0.0, 1.0).is_truthy());
}

fn print_lookup(label: &str, lookup: Result<&Card, datamodel::SequenceError>) {
    match lookup {
        Ok(card) => println!("{label}: {card}"),
        Err(err) => println!("{label}: {err}"),
    }
}

fn print_cards(label: &str, cards: &impl Sequence) {
    println!("{label}:");
    for card in cards.iter() {
        println!("  {card}");
    }
}
