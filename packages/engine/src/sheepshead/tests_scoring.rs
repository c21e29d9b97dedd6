use crate::game::PlayerScore;
use crate::player::Player;

use super::bury::BuriedCards;
use super::fixtures;
use super::options::PartnerStyle;
use super::scoring::{LeasterTieBreak, Points, Scoring};
use super::teams::Teams;
use super::tricks::TrickTracker;

/// One completed trick decides the whole hand (cards_per_hand = 1), which is
/// enough to exercise every branch of the payout table.
fn one_trick_tracker(plays: [&str; 5]) -> TrickTracker {
    let players = fixtures::players();
    let mut tracker = TrickTracker::new((0..5).collect(), 1);
    tracker.begin_play().unwrap();
    for (seat, token) in plays.iter().enumerate() {
        let mut hand = fixtures::hand_of(&[token]);
        tracker
            .play_card(seat, &players[seat], &mut hand, 0)
            .unwrap();
    }
    assert!(tracker.play_is_complete());
    tracker
}

fn empty_bury() -> BuriedCards {
    BuriedCards::new(5).unwrap()
}

fn score_of(scores: &[PlayerScore], name: &str) -> i32 {
    scores
        .iter()
        .find(|s| s.player == Player::new(name))
        .map(|s| s.score)
        .unwrap()
}

fn assert_zero_sum(scores: &[PlayerScore]) {
    assert_eq!(scores.iter().map(|s| s.score).sum::<i32>(), 0);
}

#[test]
fn lone_picker_win_pays_four() {
    // seat 0 picked, went alone, and took the trick
    let tracker = one_trick_tracker(["QC", "7D", "8D", "9D", "7H"]);
    let buried = empty_bury();
    let teams = Teams::with_picker(PartnerStyle::GoAlone, 0);
    let seating = fixtures::players();
    let points = Points::new(
        Scoring::Normal,
        LeasterTieBreak::SeatOrder,
        &tracker,
        &buried,
        &teams,
        &seating,
    );

    let outcome = points.determine_points().unwrap();
    assert_eq!(outcome.winners.team.name, "pickers");
    assert_eq!(outcome.winners.points, 3); // the queen itself
    assert_eq!(points.determine_winner().unwrap().name, "pickers");

    let scores = points.determine_score().unwrap();
    assert_eq!(score_of(&scores, "Andy"), 4);
    assert_eq!(score_of(&scores, "Brad"), -1);
    assert_zero_sum(&scores);
}

#[test]
fn set_lone_picker_pays_four_to_the_table() {
    // seat 0 picked alone but seat 1 took the trick
    let tracker = one_trick_tracker(["7D", "QC", "8D", "9D", "7H"]);
    let buried = empty_bury();
    let teams = Teams::with_picker(PartnerStyle::GoAlone, 0);
    let seating = fixtures::players();
    let points = Points::new(
        Scoring::Normal,
        LeasterTieBreak::SeatOrder,
        &tracker,
        &buried,
        &teams,
        &seating,
    );

    let outcome = points.determine_points().unwrap();
    assert_eq!(outcome.winners.team.name, "setters");

    let scores = points.determine_score().unwrap();
    assert_eq!(score_of(&scores, "Andy"), -4);
    assert_eq!(score_of(&scores, "Brad"), 1);
    assert_eq!(score_of(&scores, "Earl"), 1);
    assert_zero_sum(&scores);
}

fn partnered_teams(picker: usize, partner_token_holder: usize) -> Teams {
    // resolve the partner through the jack of diamonds marker
    let mut hands: Vec<_> = (0..5).map(|_| fixtures::hand_of(&["7H"])).collect();
    hands[partner_token_holder] = fixtures::hand_of(&["JD"]);
    let mut teams = Teams::with_picker(PartnerStyle::JackOfDiamonds, picker);
    teams.call_partner(&hands, None).unwrap();
    teams
}

#[test]
fn picker_and_partner_split_the_win() {
    // seat 0 picked, seat 1 is the partner, seat 0 took the trick
    let tracker = one_trick_tracker(["QC", "7D", "8D", "9D", "7H"]);
    let buried = empty_bury();
    let teams = partnered_teams(0, 1);
    let seating = fixtures::players();
    let points = Points::new(
        Scoring::Normal,
        LeasterTieBreak::SeatOrder,
        &tracker,
        &buried,
        &teams,
        &seating,
    );

    let scores = points.determine_score().unwrap();
    assert_eq!(score_of(&scores, "Andy"), 2);
    assert_eq!(score_of(&scores, "Brad"), 1);
    assert_eq!(score_of(&scores, "Carl"), -1);
    assert_zero_sum(&scores);
}

#[test]
fn set_picker_and_partner_pay_unevenly() {
    // seat 0 picked, seat 1 is the partner, seat 2 took the trick
    let tracker = one_trick_tracker(["7D", "8D", "QC", "9D", "7H"]);
    let buried = empty_bury();
    let teams = partnered_teams(0, 1);
    let seating = fixtures::players();
    let points = Points::new(
        Scoring::Normal,
        LeasterTieBreak::SeatOrder,
        &tracker,
        &buried,
        &teams,
        &seating,
    );

    let scores = points.determine_score().unwrap();
    assert_eq!(score_of(&scores, "Andy"), -2);
    assert_eq!(score_of(&scores, "Brad"), -1);
    assert_eq!(score_of(&scores, "Carl"), 1);
    assert_eq!(score_of(&scores, "Deryl"), 1);
    assert_eq!(score_of(&scores, "Earl"), 1);
    assert_zero_sum(&scores);
}

#[test]
fn doubler_doubles_every_delta() {
    let tracker = one_trick_tracker(["QC", "7D", "8D", "9D", "7H"]);
    let buried = empty_bury();
    let teams = partnered_teams(0, 1);
    let seating = fixtures::players();
    let points = Points::new(
        Scoring::Doubler,
        LeasterTieBreak::SeatOrder,
        &tracker,
        &buried,
        &teams,
        &seating,
    );

    let scores = points.determine_score().unwrap();
    assert_eq!(score_of(&scores, "Andy"), 4);
    assert_eq!(score_of(&scores, "Brad"), 2);
    assert_eq!(score_of(&scores, "Carl"), -2);
    assert_zero_sum(&scores);
}

#[test]
fn buried_points_count_for_the_picking_team() {
    let tracker = one_trick_tracker(["7D", "QC", "8D", "9D", "7H"]);
    let mut buried = BuriedCards::new(5).unwrap();
    let mut hand = fixtures::hand_of(&["AH", "TC", "7S"]);
    buried
        .bury(&Player::new("Andy"), &mut hand, &[0, 1])
        .unwrap();

    let teams = Teams::with_picker(PartnerStyle::GoAlone, 0);
    let seating = fixtures::players();
    let points = Points::new(
        Scoring::Normal,
        LeasterTieBreak::SeatOrder,
        &tracker,
        &buried,
        &teams,
        &seating,
    );

    // setters took the only trick (3 points); the bury still carries 21
    let outcome = points.determine_points().unwrap();
    assert_eq!(outcome.winners.team.name, "pickers");
    assert_eq!(outcome.winners.points, 21);
    assert_eq!(outcome.losers.points, 3);
}

/// Two tricks with equal point totals, taken by seats 0 and 2.
fn tied_leaster_tracker() -> TrickTracker {
    let players = fixtures::players();
    let mut tracker = TrickTracker::new((0..5).collect(), 2);
    tracker.begin_play().unwrap();

    let mut hands = vec![
        fixtures::hand_of(&["QC", "7H"]),
        fixtures::hand_of(&["7D", "8H"]),
        fixtures::hand_of(&["8D", "QS"]),
        fixtures::hand_of(&["9D", "9H"]),
        fixtures::hand_of(&["7S", "8S"]),
    ];
    // trick 1: seat 0 takes 3 points with the club queen
    for seat in 0..5 {
        let player = players[seat].clone();
        tracker.play_card(seat, &player, &mut hands[seat], 0).unwrap();
    }
    // trick 2: seat 0 leads a heart, seat 2 trumps in for 3 points
    for seat in 0..5 {
        let player = players[seat].clone();
        tracker.play_card(seat, &player, &mut hands[seat], 0).unwrap();
    }
    assert!(tracker.play_is_complete());
    tracker
}

#[test]
fn leaster_goes_to_the_fewest_points() {
    // seat 0 takes a 5-point trick, seat 2 a 0-point trick
    let players = fixtures::players();
    let mut tracker = TrickTracker::new((0..5).collect(), 2);
    tracker.begin_play().unwrap();
    let mut hands = vec![
        fixtures::hand_of(&["QC", "7H"]),
        fixtures::hand_of(&["7D", "8H"]),
        fixtures::hand_of(&["8D", "9H"]),
        fixtures::hand_of(&["JD", "9S"]),
        fixtures::hand_of(&["7S", "8S"]),
    ];
    for seat in 0..5 {
        let player = players[seat].clone();
        tracker.play_card(seat, &player, &mut hands[seat], 0).unwrap();
    }
    // seat 0 leads the seven of hearts; no trump remains, so seat 2's
    // nine of hearts takes a zero-point trick
    for _ in 0..5 {
        let waiting = tracker.waiting_on().unwrap();
        let player = players[waiting].clone();
        tracker
            .play_card(waiting, &player, &mut hands[waiting], 0)
            .unwrap();
    }
    assert!(tracker.play_is_complete());

    let buried = empty_bury();
    let teams = Teams::without_picker();
    let seating = fixtures::players();
    let points = Points::new(
        Scoring::Leaster,
        LeasterTieBreak::SeatOrder,
        &tracker,
        &buried,
        &teams,
        &seating,
    );

    // seat 2 took 0 points, seat 0 took 5
    let winner = points.determine_winner().unwrap();
    assert_eq!(winner.members, vec![Player::new("Carl")]);

    let scores = points.determine_score().unwrap();
    assert_eq!(score_of(&scores, "Carl"), 4);
    assert_eq!(score_of(&scores, "Andy"), -1);
    assert_zero_sum(&scores);
}

#[test]
fn leaster_tie_breaks_by_seat_order() {
    let tracker = tied_leaster_tracker();
    let buried = empty_bury();
    let teams = Teams::without_picker();
    let seating = fixtures::players();
    let points = Points::new(
        Scoring::Leaster,
        LeasterTieBreak::SeatOrder,
        &tracker,
        &buried,
        &teams,
        &seating,
    );
    let winner = points.determine_winner().unwrap();
    assert_eq!(winner.members, vec![Player::new("Andy")]);
}

#[test]
fn leaster_tie_breaks_by_last_trick_taken() {
    let tracker = tied_leaster_tracker();
    let buried = empty_bury();
    let teams = Teams::without_picker();
    let seating = fixtures::players();
    let points = Points::new(
        Scoring::Leaster,
        LeasterTieBreak::LastTrickTaken,
        &tracker,
        &buried,
        &teams,
        &seating,
    );
    let winner = points.determine_winner().unwrap();
    assert_eq!(winner.members, vec![Player::new("Carl")]);
    let scores = points.determine_score().unwrap();
    assert_eq!(score_of(&scores, "Carl"), 4);
    assert_zero_sum(&scores);
}
