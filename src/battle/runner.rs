use crate::battle::engine::{
    initialize_battle, is_team_defeated, remaining_hp, resolve_turn,
};
use crate::battle::state::{BattleOutcome, TurnRng};
use crate::battler::Battler;
use crate::errors::BattleResult;
use schema::Creature;
use std::cmp::Ordering;

/// High-level driver that runs a whole match on top of the single-turn
/// engine: initialize both rosters once, then resolve turns with fresh
/// entropy until the battle ends, accumulating the full transcript.
#[derive(Debug, Clone)]
pub struct BattleRunner {
    user: Vec<Battler>,
    opponent: Vec<Battler>,
    turn_number: u32,
    transcript: Vec<String>,
    ended: bool,
}

impl BattleRunner {
    /// Initialize a new battle from two catalog rosters.
    pub fn new(user_roster: &[Creature], opponent_roster: &[Creature]) -> BattleResult<Self> {
        // Three rolls per creature during initialization.
        let draw_budget = (user_roster.len() + opponent_roster.len()) * 3;
        let snapshot = initialize_battle(
            user_roster,
            opponent_roster,
            TurnRng::new_random(draw_budget),
        )?;

        Ok(Self {
            user: snapshot.user_battlers,
            opponent: snapshot.opponent_battlers,
            turn_number: 0,
            transcript: Vec::new(),
            ended: false,
        })
    }

    /// Resolve the next turn with fresh entropy and return the lines it
    /// appended to the transcript. Advancing a finished battle does
    /// nothing.
    pub fn advance_turn(&mut self) -> Vec<String> {
        if self.ended {
            return Vec::new();
        }

        self.turn_number += 1;
        // Six draws cover the costliest action one battler can take.
        let draw_budget = (self.user.len() + self.opponent.len()) * 6;
        let snapshot = resolve_turn(
            &self.user,
            &self.opponent,
            self.turn_number,
            TurnRng::new_random(draw_budget),
        );

        self.user = snapshot.user_battlers;
        self.opponent = snapshot.opponent_battlers;
        self.ended = snapshot.ended;
        self.transcript.extend(snapshot.turn_log.iter().cloned());

        snapshot.turn_log
    }

    /// Advance turns until the battle ends, then report the verdict. The
    /// turn cap guarantees termination.
    pub fn run_to_completion(&mut self) -> BattleOutcome {
        while !self.ended {
            self.advance_turn();
        }
        self.verdict()
    }

    /// The verdict of a finished battle, None while it is still running.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.ended.then(|| self.verdict())
    }

    // Same precedence as the engine's end conditions: opponent wiped,
    // user wiped, then remaining HP.
    fn verdict(&self) -> BattleOutcome {
        if is_team_defeated(&self.opponent) {
            BattleOutcome::UserVictory
        } else if is_team_defeated(&self.user) {
            BattleOutcome::OpponentVictory
        } else {
            match remaining_hp(&self.user).cmp(&remaining_hp(&self.opponent)) {
                Ordering::Greater => BattleOutcome::UserVictory,
                Ordering::Less => BattleOutcome::OpponentVictory,
                Ordering::Equal => BattleOutcome::Draw,
            }
        }
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every transcript line of the battle so far.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn user_battlers(&self) -> &[Battler] {
        &self.user
    }

    pub fn opponent_battlers(&self) -> &[Battler] {
        &self.opponent
    }
}
