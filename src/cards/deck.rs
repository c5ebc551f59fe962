//! Deck construction.
//!
//! ```
//! use memo_cards::cards::{build_deck, ImageItem};
//! use memo_cards::core::{GameRng, PairId};
//!
//! let images = vec![ImageItem::glyph(0, "🐶", "animals"), ImageItem::glyph(1, "🐱", "animals")];
//! let mut rng = GameRng::new(42);
//!
//! let deck = build_deck(&images, 4, &mut rng).unwrap();
//! assert_eq!(deck.len(), 4);
//! assert_eq!(deck.iter().filter(|c| c.pair_id == PairId::new(0)).count(), 2);
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use super::card::Card;
use super::image::ImageItem;
use crate::core::{CardId, GameRng, MemoError, PairId, Result};

/// Build a shuffled, paired deck.
///
/// Takes the first `total_cards / 2` images in the order given, makes two
/// cards per image, then shuffles the whole deck. `images` is not touched.
///
/// Fails with `InvalidConfiguration` when `total_cards` is zero or odd, or
/// when there are not enough images.
pub fn build_deck(images: &[ImageItem], total_cards: usize, rng: &mut GameRng) -> Result<Vec<Card>> {
    if total_cards == 0 || total_cards % 2 != 0 {
        warn!(total_cards, "rejected deck: card count must be even and non-zero");
        return Err(MemoError::invalid(format!(
            "card count must be even and non-zero, got {total_cards}"
        )));
    }

    let pairs = total_cards / 2;
    if images.len() < pairs {
        warn!(pairs, available = images.len(), "rejected deck: not enough images");
        return Err(MemoError::invalid(format!(
            "need {pairs} images for {total_cards} cards, got {}",
            images.len()
        )));
    }

    let mut deck = Vec::with_capacity(total_cards);
    for (index, image) in images.iter().take(pairs).enumerate() {
        let pair = PairId::new(index as u32);
        let (first, second) = pair.card_ids();
        deck.push(Card::new(first, pair, image.clone()));
        deck.push(Card::new(second, pair, image.clone()));
    }

    rng.shuffle(&mut deck);
    debug!(cards = deck.len(), pairs, "built deck");

    Ok(deck)
}

/// Check the deck invariants: even length, every pair id exactly twice,
/// unique card ids, matched cards face-up.
pub fn validate_deck(deck: &[Card]) -> Result<()> {
    if deck.len() % 2 != 0 {
        return Err(MemoError::invalid(format!("odd deck length {}", deck.len())));
    }

    let mut pair_counts: FxHashMap<PairId, usize> = FxHashMap::default();
    let mut seen_ids: FxHashSet<CardId> = FxHashSet::default();
    for card in deck {
        if !seen_ids.insert(card.id) {
            return Err(MemoError::invalid(format!("duplicate {}", card.id)));
        }
        if card.is_matched() && !card.is_face_up() {
            return Err(MemoError::invalid(format!("{} matched but face-down", card.id)));
        }
        *pair_counts.entry(card.pair_id).or_insert(0) += 1;
    }

    match pair_counts.iter().find(|(_, &count)| count != 2) {
        Some((pair, count)) => Err(MemoError::invalid(format!("{pair} appears {count} times"))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: u32) -> Vec<ImageItem> {
        (0..n).map(|i| ImageItem::glyph(i, format!("g{i}"), "test")).collect()
    }

    #[test]
    fn test_two_images_four_cards() {
        let imgs = images(2);
        let mut rng = GameRng::new(1);
        let deck = build_deck(&imgs, 4, &mut rng).unwrap();

        assert_eq!(deck.len(), 4);
        let pair0: Vec<_> = deck.iter().filter(|c| c.pair_id == PairId::new(0)).collect();
        let pair1: Vec<_> = deck.iter().filter(|c| c.pair_id == PairId::new(1)).collect();
        assert_eq!(pair0.len(), 2);
        assert_eq!(pair1.len(), 2);
        assert!(pair0.iter().all(|c| c.image == imgs[0]));
        assert!(pair1.iter().all(|c| c.image == imgs[1]));
        assert!(deck.iter().all(Card::is_flippable));
    }

    #[test]
    fn test_uses_first_images_only() {
        let imgs = images(10);
        let mut rng = GameRng::new(1);
        let deck = build_deck(&imgs, 6, &mut rng).unwrap();

        assert!(deck.iter().all(|c| c.image.id.raw() < 3));
        validate_deck(&deck).unwrap();
    }

    #[test]
    fn test_card_ids_distinct() {
        let mut rng = GameRng::new(3);
        let deck = build_deck(&images(8), 16, &mut rng).unwrap();

        let mut ids: Vec<CardId> = deck.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn test_rejects_bad_configuration() {
        let mut rng = GameRng::new(1);
        assert!(build_deck(&images(2), 5, &mut rng).unwrap_err().is_configuration());
        assert!(build_deck(&images(2), 0, &mut rng).is_err());
        assert!(build_deck(&images(2), 6, &mut rng).is_err());
        assert!(build_deck(&[], 2, &mut rng).is_err());
    }

    #[test]
    fn test_same_seed_same_deck() {
        let imgs = images(8);
        let a = build_deck(&imgs, 16, &mut GameRng::new(9)).unwrap();
        let b = build_deck(&imgs, 16, &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_validate_deck_catches_broken_pairs() {
        let imgs = images(2);
        let mut deck = build_deck(&imgs, 4, &mut GameRng::new(5)).unwrap();
        deck.pop();
        assert!(validate_deck(&deck).is_err());

        let lone = Card::new(CardId::new(0), PairId::new(0), imgs[0].clone());
        let stray = Card::new(CardId::new(1), PairId::new(1), imgs[1].clone());
        assert!(validate_deck(&[lone, stray]).is_err());
    }
}
