//! Core data models for Puzzle Mania.
//! The board is a permutation of tile values; everything the UI shows is derived from it.

use std::rc::Rc;
use yew::{AttrValue, Reducible};

pub const GRID_SIDE: usize = 3;
pub const TILE_COUNT: usize = GRID_SIDE * GRID_SIDE;
/// Last tile of the picture, drawn dimmed.
pub const BLANK_TILE: u8 = (TILE_COUNT - 1) as u8;

/// Delay from the winning swap until the banner starts fading.
pub const FADE_AFTER_MS: u32 = 1600;
/// Delay from the winning swap until the banner hides and a new board is dealt.
pub const RESET_AFTER_MS: u32 = 2200;

pub const DEFAULT_BACKGROUND: &str = "/assets/background.png";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    /// `tiles[position] = tile value`.
    tiles: [u8; TILE_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}

fn random_index(n: usize) -> usize {
    (js_sys::Math::random() * n as f64).floor() as usize
}

impl Board {
    pub fn solved() -> Self {
        let mut tiles = [0u8; TILE_COUNT];
        for (i, t) in tiles.iter_mut().enumerate() {
            *t = i as u8;
        }
        Self { tiles }
    }

    /// Accepts `tiles` only if it is a permutation of `0..TILE_COUNT`.
    #[cfg(test)]
    pub fn from_tiles(tiles: [u8; TILE_COUNT]) -> Option<Self> {
        let mut seen = [false; TILE_COUNT];
        for &t in &tiles {
            let slot = seen.get_mut(t as usize)?;
            if *slot {
                return None;
            }
            *slot = true;
        }
        Some(Self { tiles })
    }

    /// Fisher–Yates shuffle. `pick(n)` must return a uniform value in `0..n`;
    /// out-of-range picks are clamped.
    pub fn shuffled_with(mut pick: impl FnMut(usize) -> usize) -> Self {
        let mut board = Self::solved();
        for i in (1..TILE_COUNT).rev() {
            let j = pick(i + 1).min(i);
            board.tiles.swap(i, j);
        }
        board
    }

    /// Shuffles until the result is not already solved.
    pub fn scrambled_with(mut pick: impl FnMut(usize) -> usize) -> Self {
        loop {
            let board = Self::shuffled_with(&mut pick);
            if !board.is_solved() {
                return board;
            }
        }
    }

    pub fn scrambled() -> Self {
        Self::scrambled_with(random_index)
    }

    /// Exchanges two positions. Returns false (and leaves the board alone) when
    /// `i == j` or either index is off the board.
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        if i == j || i >= TILE_COUNT || j >= TILE_COUNT {
            return false;
        }
        self.tiles.swap(i, j);
        true
    }

    pub fn is_solved(&self) -> bool {
        self.tiles.iter().enumerate().all(|(i, &t)| t as usize == i)
    }

    pub fn tiles(&self) -> &[u8; TILE_COUNT] {
        &self.tiles
    }
}

/// Picture cell a tile value shows, as `(row, col)`.
pub fn tile_cell(value: u8) -> (usize, usize) {
    let v = value as usize;
    (v / GRID_SIDE, v % GRID_SIDE)
}

/// CSS `background-position` percentages `(x, y)` for a tile value.
pub fn background_position(value: u8) -> (f64, f64) {
    let (row, col) = tile_cell(value);
    let span = (GRID_SIDE - 1) as f64;
    (col as f64 / span * 100.0, row as f64 / span * 100.0)
}

/// Top-left corner `(left, top)` in percent for a board position.
pub fn cell_origin(index: usize) -> (f64, f64) {
    let step = 100.0 / GRID_SIDE as f64;
    (
        (index % GRID_SIDE) as f64 * step,
        (index / GRID_SIDE) as f64 * step,
    )
}

/// Request to exchange the tiles at two board positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapCommand {
    pub from: usize,
    pub to: usize,
}

/// Image every tile is cut from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Backdrop {
    src: AttrValue,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            src: AttrValue::from(DEFAULT_BACKGROUND),
        }
    }
}

impl Backdrop {
    pub fn new(src: impl Into<AttrValue>) -> Self {
        Self { src: src.into() }
    }

    pub fn is_custom(&self) -> bool {
        self.src.as_str() != DEFAULT_BACKGROUND
    }

    pub fn css_url(&self) -> String {
        format!("url('{}')", self.src)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WinBanner {
    #[default]
    Hidden,
    Showing,
    /// Still visible, transitioning out.
    Fading,
}

impl WinBanner {
    pub fn is_visible(self) -> bool {
        !matches!(self, WinBanner::Hidden)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleState {
    pub board: Board,
    pub banner: WinBanner,
    /// Bumped on every solve; keys the win timers.
    pub wins: u32,
}

impl PuzzleState {
    pub fn new() -> Self {
        Self::with_board(Board::scrambled())
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            banner: WinBanner::Hidden,
            wins: 0,
        }
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum PuzzleAction {
    Swap(SwapCommand),
    /// Shuffle button: new board, banner dismissed.
    Reshuffle { board: Board },
    BeginFade,
    FinishCelebration { board: Board },
}

/// Timed follow-ups to a winning swap, as `(delay_ms, action)` in firing order.
/// `next` is the board dealt once the banner is gone.
pub fn celebration_schedule(next: Board) -> [(u32, PuzzleAction); 2] {
    [
        (FADE_AFTER_MS, PuzzleAction::BeginFade),
        (RESET_AFTER_MS, PuzzleAction::FinishCelebration { board: next }),
    ]
}

impl Reducible for PuzzleState {
    type Action = PuzzleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PuzzleAction::*;
        let mut new = (*self).clone();
        match action {
            Swap(SwapCommand { from, to }) => {
                if !new.board.swap(from, to) {
                    return self;
                }
                if new.board.is_solved() {
                    new.banner = WinBanner::Showing;
                    new.wins = new.wins.saturating_add(1);
                }
            }
            Reshuffle { board } => {
                new.board = board;
                new.banner = WinBanner::Hidden;
            }
            BeginFade => {
                if new.banner != WinBanner::Showing {
                    return self;
                }
                new.banner = WinBanner::Fading;
            }
            FinishCelebration { board } => {
                if !new.banner.is_visible() {
                    return self;
                }
                new.banner = WinBanner::Hidden;
                new.board = board;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn board(tiles: [u8; TILE_COUNT]) -> Board {
        Board::from_tiles(tiles).expect("valid permutation")
    }

    #[test]
    fn shuffles_are_always_permutations() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let b = Board::shuffled_with(|n| rng.random_range(0..n));
            let mut sorted = *b.tiles();
            sorted.sort_unstable();
            assert_eq!(sorted, *Board::solved().tiles());
        }
    }

    #[test]
    fn shuffle_spreads_values_evenly() {
        let mut rng = StdRng::seed_from_u64(42);
        let rounds = 90_000;
        let mut first = [0u32; TILE_COUNT];
        let mut last = [0u32; TILE_COUNT];
        for _ in 0..rounds {
            let b = Board::shuffled_with(|n| rng.random_range(0..n));
            first[b.tiles()[0] as usize] += 1;
            last[b.tiles()[TILE_COUNT - 1] as usize] += 1;
        }
        let expected = rounds / TILE_COUNT as u32;
        for count in first.iter().chain(last.iter()) {
            assert!(
                count.abs_diff(expected) < 600,
                "count {count} too far from {expected}"
            );
        }
    }

    #[test]
    fn scrambled_never_deals_a_solved_board() {
        // First pass picks every index in place (identity), second pass does not.
        let mut calls = 0;
        let b = Board::scrambled_with(|n| {
            calls += 1;
            if calls < TILE_COUNT { n - 1 } else { 0 }
        });
        assert!(!b.is_solved());
        assert!(calls > TILE_COUNT - 1);
    }

    #[test]
    fn out_of_range_picks_are_clamped() {
        let b = Board::shuffled_with(|n| n + 10);
        assert!(b.is_solved());
    }

    #[test]
    fn from_tiles_rejects_non_permutations() {
        assert!(Board::from_tiles([0, 1, 2, 3, 4, 5, 6, 7, 7]).is_none());
        assert!(Board::from_tiles([0, 1, 2, 3, 4, 5, 6, 7, 9]).is_none());
        assert!(Board::from_tiles([8, 7, 6, 5, 4, 3, 2, 1, 0]).is_some());
    }

    #[test]
    fn solved_only_for_identity() {
        assert!(Board::solved().is_solved());
        assert!(!board([1, 0, 2, 3, 4, 5, 6, 7, 8]).is_solved());
        assert!(!board([0, 1, 2, 3, 4, 5, 6, 8, 7]).is_solved());
    }

    #[test]
    fn swap_with_itself_is_rejected() {
        let mut b = board([3, 1, 2, 0, 4, 5, 6, 7, 8]);
        let before = b;
        for i in 0..TILE_COUNT {
            assert!(!b.swap(i, i));
        }
        assert_eq!(b, before);
    }

    #[test]
    fn swap_out_of_range_is_rejected() {
        let mut b = Board::solved();
        assert!(!b.swap(0, TILE_COUNT));
        assert!(!b.swap(TILE_COUNT + 3, 2));
        assert!(b.is_solved());
    }

    #[test]
    fn swap_is_self_inverse() {
        let mut rng = StdRng::seed_from_u64(3);
        let original = Board::shuffled_with(|n| rng.random_range(0..n));
        for i in 0..TILE_COUNT {
            for j in 0..TILE_COUNT {
                let mut b = original;
                b.swap(i, j);
                b.swap(i, j);
                assert_eq!(b, original);
            }
        }
    }

    #[test]
    fn swapping_two_and_five_on_solved_board() {
        let mut b = Board::solved();
        assert!(b.swap(2, 5));
        assert_eq!(*b.tiles(), [0, 1, 5, 3, 4, 2, 6, 7, 8]);
        assert!(!b.is_solved());
    }

    #[test]
    fn winning_swap_runs_the_celebration() {
        let state = Rc::new(PuzzleState::with_board(board([0, 1, 2, 3, 4, 8, 6, 7, 5])));
        let state = state.reduce(PuzzleAction::Swap(SwapCommand { from: 5, to: 8 }));
        assert!(state.board.is_solved());
        assert_eq!(state.banner, WinBanner::Showing);
        assert_eq!(state.wins, 1);

        let state = state.reduce(PuzzleAction::BeginFade);
        assert_eq!(state.banner, WinBanner::Fading);
        assert!(state.banner.is_visible());

        let next = Board::scrambled_with({
            let mut rng = StdRng::seed_from_u64(9);
            move |n| rng.random_range(0..n)
        });
        let state = state.reduce(PuzzleAction::FinishCelebration { board: next });
        assert_eq!(state.banner, WinBanner::Hidden);
        assert_eq!(state.board, next);
        assert!(!state.board.is_solved());
        assert_eq!(state.wins, 1);
    }

    #[test]
    fn celebration_fades_before_dealing_the_next_board() {
        let next = board([3, 1, 2, 0, 4, 5, 6, 7, 8]);
        let [(fade_at, fade), (reset_at, reset)] = celebration_schedule(next);
        assert_eq!((fade_at, reset_at), (1600, 2200));
        assert!(matches!(fade, PuzzleAction::BeginFade));
        assert!(matches!(reset, PuzzleAction::FinishCelebration { board } if board == next));
    }

    #[test]
    fn scheduled_actions_walk_the_banner_back_to_hidden() {
        let state = Rc::new(PuzzleState::with_board(board([1, 0, 2, 3, 4, 5, 6, 7, 8])));
        let mut state = state.reduce(PuzzleAction::Swap(SwapCommand { from: 0, to: 1 }));
        let next = board([0, 2, 1, 3, 4, 5, 6, 7, 8]);
        let mut seen = vec![state.banner];
        let mut last_delay = 0;
        for (delay, action) in celebration_schedule(next) {
            assert!(delay > last_delay);
            last_delay = delay;
            state = state.reduce(action);
            seen.push(state.banner);
        }
        assert_eq!(
            seen,
            vec![WinBanner::Showing, WinBanner::Fading, WinBanner::Hidden]
        );
        assert_eq!(state.board, next);
        assert_eq!(state.wins, 1);
    }

    #[test]
    fn rejected_swap_keeps_the_same_state() {
        let state = Rc::new(PuzzleState::with_board(board([1, 0, 2, 3, 4, 5, 6, 7, 8])));
        let after = state.clone().reduce(PuzzleAction::Swap(SwapCommand { from: 4, to: 4 }));
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn non_winning_swap_leaves_banner_hidden() {
        let state = Rc::new(PuzzleState::with_board(Board::solved()));
        let state = state.reduce(PuzzleAction::Swap(SwapCommand { from: 0, to: 1 }));
        assert_eq!(state.banner, WinBanner::Hidden);
        assert_eq!(state.wins, 0);
    }

    #[test]
    fn late_timers_after_reshuffle_are_ignored() {
        let state = Rc::new(PuzzleState::with_board(board([1, 0, 2, 3, 4, 5, 6, 7, 8])));
        let state = state.reduce(PuzzleAction::Swap(SwapCommand { from: 0, to: 1 }));
        assert_eq!(state.banner, WinBanner::Showing);

        let dealt = board([2, 0, 1, 3, 4, 5, 6, 7, 8]);
        let state = state.reduce(PuzzleAction::Reshuffle { board: dealt });
        assert_eq!(state.banner, WinBanner::Hidden);

        let state = state.reduce(PuzzleAction::BeginFade);
        assert_eq!(state.banner, WinBanner::Hidden);
        let state = state.reduce(PuzzleAction::FinishCelebration {
            board: Board::solved(),
        });
        assert_eq!(state.board, dealt);
    }

    #[test]
    fn tile_offsets_follow_value_not_position() {
        assert_eq!(tile_cell(0), (0, 0));
        assert_eq!(tile_cell(5), (1, 2));
        assert_eq!(tile_cell(BLANK_TILE), (2, 2));
        assert_eq!(background_position(5), (100.0, 50.0));
        assert_eq!(background_position(6), (0.0, 100.0));
        let (left, top) = cell_origin(7);
        assert!((left - 33.333).abs() < 0.01);
        assert!((top - 66.666).abs() < 0.01);
    }

    #[test]
    fn backdrop_defaults_to_bundled_image() {
        let b = Backdrop::default();
        assert!(!b.is_custom());
        assert_eq!(b.css_url(), "url('/assets/background.png')");
        let custom = Backdrop::new("data:image/png;base64,AAAA");
        assert!(custom.is_custom());
        assert_eq!(custom.css_url(), "url('data:image/png;base64,AAAA')");
    }
}
