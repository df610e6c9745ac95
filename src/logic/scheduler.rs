//! Fixture generation: round-robin schedule via the circle (Berger) method.

use crate::models::{Fixture, Round, Team};

/// Generate the full schedule for `teams`.
///
/// 1. Pad to an even slot count with an empty slot (bye) when the team count is odd.
/// 2. Each round pairs slot `i` with slot `len - 1 - i`; pairs touching the bye are skipped.
/// 3. The slot-0 pair swaps home/away on odd rounds; other pairs keep the lower slot at home.
/// 4. Rotate: slot 0 stays, the last slot moves to position 1.
/// 5. With `double_round`, append the mirrored second turn (sides swapped, numbering continues).
///
/// Fewer than 2 teams yields an empty schedule.
pub fn generate_schedule(teams: &[Team], double_round: bool) -> Vec<Round> {
    if teams.len() < 2 {
        return Vec::new();
    }

    let mut slots: Vec<Option<&Team>> = teams.iter().map(Some).collect();
    if slots.len() % 2 != 0 {
        slots.push(None);
    }

    let slot_count = slots.len();
    let rounds_per_turn = slot_count - 1;
    let half = slot_count / 2;
    let mut rounds = Vec::with_capacity(rounds_per_turn * if double_round { 2 } else { 1 });

    for round_idx in 0..rounds_per_turn {
        let matches: Vec<Fixture> = (0..half)
            .filter_map(|i| {
                let first = slots[i]?;
                let second = slots[slot_count - 1 - i]?;
                if i == 0 && round_idx % 2 == 1 {
                    Some(Fixture::new(second.id, first.id))
                } else {
                    Some(Fixture::new(first.id, second.id))
                }
            })
            .collect();

        rounds.push(Round {
            number: round_idx as u32 + 1,
            matches,
        });

        slots[1..].rotate_right(1);
    }

    if double_round {
        let return_rounds: Vec<Round> = rounds
            .iter()
            .map(|round| Round {
                number: round.number + rounds_per_turn as u32,
                matches: round.matches.iter().map(Fixture::reversed).collect(),
            })
            .collect();
        rounds.extend(return_rounds);
    }

    log::debug!(
        "Generated {} round(s) for {} team(s) (double round: {})",
        rounds.len(),
        teams.len(),
        double_round
    );
    rounds
}

