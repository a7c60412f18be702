//! Spiral word packing.
//!
//! Words are placed in the order given (heaviest first). Each one starts at a
//! random point in the central half of the canvas and walks outwards along an
//! Archimedean spiral until its padded box fits inside the canvas without
//! touching any word placed before it. A word that finds no spot before the
//! spiral leaves the canvas entirely is dropped. Rotation is always 0.

use std::cell::Cell;

use api::WordStat;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use super::{metrics, CANVAS_SIZE, WORD_PADDING};
use crate::core::timing;

/// Words packed between two yields to the event loop.
const YIELD_EVERY: usize = 8;

/// Spiral parameter advance per step (radius and angle both grow by this).
const SPIRAL_STEP: f64 = 0.1;

/// A word with its font size, ready for layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedWord {
    pub word: WordStat,
    pub size: f64,
}

/// A word with its final position.
///
/// `x`/`y` locate the baseline center relative to the canvas center.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: WordStat,
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRequest {
    pub words: Vec<SizedWord>,
    pub canvas: f64,
    pub padding: f64,
    pub seed: u64,
}

impl LayoutRequest {
    pub fn new(words: Vec<SizedWord>, seed: u64) -> Self {
        Self {
            words,
            canvas: CANVAS_SIZE,
            padding: WORD_PADDING,
            seed,
        }
    }
}

/// Pack every word without yielding.
pub fn place_words(request: LayoutRequest) -> Vec<PlacedWord> {
    let mut packer = Packer::new(&request);
    request
        .words
        .into_iter()
        .filter_map(|word| packer.place(word))
        .collect()
}

/// Pack every word, yielding to the event loop every few words so a large set
/// never stalls input handling or painting.
pub async fn run_layout(request: LayoutRequest) -> Vec<PlacedWord> {
    let requested = request.words.len();
    let mut packer = Packer::new(&request);
    let mut placed = Vec::with_capacity(requested);

    for (index, word) in request.words.into_iter().enumerate() {
        if index > 0 && index % YIELD_EVERY == 0 {
            timing::yield_now().await;
        }
        placed.extend(packer.place(word));
    }

    debug!(requested, placed = placed.len(), "layout finished");
    placed
}

/// Identifies one layout run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutTicket(u64);

impl LayoutTicket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Hands out layout tickets; only the most recently issued one may draw.
#[derive(Debug, Default)]
pub struct LayoutGate {
    latest: Cell<u64>,
}

impl LayoutGate {
    /// Start a new run, superseding every earlier ticket.
    pub fn issue(&self) -> LayoutTicket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        LayoutTicket(next)
    }

    pub fn is_current(&self, ticket: LayoutTicket) -> bool {
        self.latest.get() == ticket.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rect {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Rect {
    fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    fn offset(&self, x: f64, y: f64) -> Self {
        Self {
            x0: self.x0 + x,
            y0: self.y0 + y,
            x1: self.x1 + x,
            y1: self.y1 + y,
        }
    }

    fn intersects(&self, other: &Self) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }

    fn union(&self, other: &Self) -> Self {
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    fn within(&self, size: f64) -> bool {
        self.x0 >= 0.0 && self.y0 >= 0.0 && self.x1 <= size && self.y1 <= size
    }
}

struct Packer {
    canvas: f64,
    padding: f64,
    rng: StdRng,
    boxes: Vec<Rect>,
    bounds: Option<Rect>,
}

impl Packer {
    fn new(request: &LayoutRequest) -> Self {
        Self {
            canvas: request.canvas,
            padding: request.padding,
            rng: StdRng::seed_from_u64(request.seed),
            boxes: Vec::with_capacity(request.words.len()),
            bounds: None,
        }
    }

    /// Padded box of `word` relative to its baseline-center anchor.
    fn local_box(&self, word: &SizedWord) -> Rect {
        let text = metrics::measure(&word.word.text, word.size);
        let half = text.width / 2.0 + self.padding;
        Rect {
            x0: -half,
            y0: -(text.ascent + self.padding),
            x1: half,
            y1: text.descent + self.padding,
        }
    }

    fn place(&mut self, word: SizedWord) -> Option<PlacedWord> {
        let local = self.local_box(&word);
        if local.width() > self.canvas || local.height() > self.canvas {
            return None;
        }

        let start_x = (self.canvas * (self.rng.gen::<f64>() + 0.5) / 2.0).floor();
        let start_y = (self.canvas * (self.rng.gen::<f64>() + 0.5) / 2.0).floor();
        let dt = if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let max_delta = (2.0 * self.canvas * self.canvas).sqrt();

        let mut t = 0.0;
        loop {
            t += dt;
            let (dx, dy) = archimedean(t);
            let (dx, dy) = (dx.trunc(), dy.trunc());
            if dx.abs().min(dy.abs()) >= max_delta {
                return None;
            }

            let x = start_x + dx;
            let y = start_y + dy;
            let candidate = local.offset(x, y);
            if !candidate.within(self.canvas) || self.collides(&candidate) {
                continue;
            }

            self.bounds = Some(match self.bounds {
                Some(bounds) => bounds.union(&candidate),
                None => candidate,
            });
            self.boxes.push(candidate);

            let half = self.canvas / 2.0;
            return Some(PlacedWord {
                word: word.word,
                size: word.size,
                x: x - half,
                y: y - half,
                rotate: 0.0,
            });
        }
    }

    fn collides(&self, candidate: &Rect) -> bool {
        match self.bounds {
            None => false,
            Some(bounds) if !bounds.intersects(candidate) => false,
            Some(_) => self.boxes.iter().any(|placed| placed.intersects(candidate)),
        }
    }
}

fn archimedean(t: f64) -> (f64, f64) {
    let t = t * SPIRAL_STEP;
    (t * t.cos(), t * t.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::{CloudPlan, MAX_WORDS};

    fn sized(text: &str, size: f64) -> SizedWord {
        SizedWord {
            word: WordStat::new(text, size),
            size,
        }
    }

    fn many_words(n: usize) -> Vec<WordStat> {
        (0..n)
            .map(|i| WordStat::new(format!("word{i}"), (n - i) as f64))
            .collect()
    }

    fn canvas_box(word: &PlacedWord) -> Rect {
        let text = metrics::measure(&word.word.text, word.size);
        let half_w = text.width / 2.0 + WORD_PADDING;
        let local = Rect {
            x0: -half_w,
            y0: -(text.ascent + WORD_PADDING),
            x1: half_w,
            y1: text.descent + WORD_PADDING,
        };
        let half = CANVAS_SIZE / 2.0;
        local.offset(word.x + half, word.y + half)
    }

    #[test]
    fn same_seed_same_layout() {
        let plan = CloudPlan::new(&many_words(40), MAX_WORDS).unwrap();
        let a = place_words(plan.request(11));
        let b = place_words(plan.request(11));
        assert_eq!(a, b);
    }

    #[test]
    fn placed_words_never_overlap() {
        let plan = CloudPlan::new(&many_words(120), MAX_WORDS).unwrap();
        let placed = place_words(plan.request(3));
        assert!(!placed.is_empty());

        let boxes: Vec<Rect> = placed.iter().map(canvas_box).collect();
        for (i, a) in boxes.iter().enumerate() {
            for b in boxes.iter().skip(i + 1) {
                assert!(!a.intersects(b), "overlap between {a:?} and {b:?}");
            }
        }
    }

    #[test]
    fn placed_words_stay_on_canvas() {
        let plan = CloudPlan::new(&many_words(120), MAX_WORDS).unwrap();
        for word in place_words(plan.request(5)) {
            assert!(canvas_box(&word).within(CANVAS_SIZE), "{word:?} leaves canvas");
            assert_eq!(word.rotate, 0.0);
        }
    }

    #[test]
    fn placement_keeps_input_order() {
        let request = LayoutRequest::new(vec![sized("alpha", 40.0), sized("beta", 20.0)], 1);
        let placed = place_words(request);
        let texts: Vec<_> = placed.iter().map(|p| p.word.text.as_str()).collect();
        assert_eq!(texts, vec!["alpha", "beta"]);
    }

    #[test]
    fn oversized_word_is_dropped() {
        let long = "x".repeat(200);
        let request = LayoutRequest::new(vec![sized(&long, 72.0), sized("fits", 20.0)], 1);
        let placed = place_words(request);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].word.text, "fits");
    }

    #[test]
    fn async_layout_matches_blocking_layout() {
        let plan = CloudPlan::new(&many_words(30), MAX_WORDS).unwrap();
        let blocking = place_words(plan.request(9));
        let async_placed = futures::executor::block_on(run_layout(plan.request(9)));
        assert_eq!(blocking, async_placed);
    }

    #[test]
    fn gate_only_honours_latest_ticket() {
        let gate = LayoutGate::default();
        let first = gate.issue();
        assert!(gate.is_current(first));

        let second = gate.issue();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
        assert!(second.get() > first.get());
    }
}
