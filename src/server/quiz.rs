use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::Question;

/// Draws one question at random from a non-empty candidate pool.
///
/// A draw that collides with an already-shown question triggers exactly one
/// re-draw, whose result is returned even if it was shown before. When every
/// candidate has been shown the quiz is exhausted and `None` is returned.
pub fn draw_question<R: Rng>(
    rng: &mut R,
    candidates: &[Question],
    previous: &[i64],
) -> Option<Question> {
    let first = candidates.choose(rng)?;
    if !previous.contains(&first.id) {
        return Some(first.clone());
    }
    if previous.len() >= candidates.len() {
        return None;
    }
    candidates.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::draw_question;
    use crate::db::Question;

    fn question(id: i64) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: "answer".to_owned(),
            category: Some("1".to_owned()),
            difficulty: Some(1),
        }
    }

    #[test]
    fn unseen_first_draw_is_returned() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates = vec![question(1)];

        let drawn = draw_question(&mut rng, &candidates, &[99]);
        assert_eq!(drawn.unwrap().id, 1);
    }

    #[test]
    fn fully_seen_pool_is_exhausted() {
        let candidates = vec![question(1), question(2)];
        // the first draw always collides here, so the outcome does not depend
        // on the rng state
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(draw_question(&mut rng, &candidates, &[1, 2]).is_none());
        }
    }

    #[test]
    fn retry_stays_within_the_pool() {
        let candidates = vec![question(1), question(2)];
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let drawn = draw_question(&mut rng, &candidates, &[1]).unwrap();
            assert!(candidates.iter().any(|c| c.id == drawn.id));
        }
    }

    #[test]
    fn empty_pool_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(draw_question(&mut rng, &[], &[]).is_none());
    }
}
