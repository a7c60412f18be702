//! Word cloud pipeline: select the heaviest words, size them on a square-root
//! scale, pack them along a spiral and draw the result as an SVG scene inside a
//! circular glass frame.

mod color;
mod layout;
mod metrics;
mod scale;
mod scene;
mod select;
mod view;

pub use color::{turbo, ColorScale};
pub use layout::{
    place_words, run_layout, LayoutGate, LayoutRequest, LayoutTicket, PlacedWord, SizedWord,
};
pub use metrics::{measure, TextBox};
pub use scale::{SizeScale, ValueExtent, MAX_FONT_SIZE, MIN_FONT_SIZE};
pub use scene::{RenderedCloud, Scene, SceneWord, SvgSize};
pub use select::select_top;
pub use view::WordCloud;

use api::WordStat;

/// Upper bound on the number of words that enter the layout.
pub const MAX_WORDS: usize = 120;

/// Side of the square virtual canvas the layout runs on.
pub const CANVAS_SIZE: f64 = 500.0;

/// Gap kept around every word.
pub const WORD_PADDING: f64 = 3.0;

/// Font stack used both for measuring and for drawing.
pub const FONT_FAMILY: &str = "ui-sans-serif, system-ui, sans-serif";

/// Everything derived from one word list before layout runs.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudPlan {
    pub selected: Vec<WordStat>,
    pub sizes: SizeScale,
    pub colors: ColorScale,
}

impl CloudPlan {
    /// `None` when there is nothing to draw.
    pub fn new(words: &[WordStat], max_words: usize) -> Option<Self> {
        let selected = select_top(words, max_words);
        let extent = ValueExtent::of(&selected)?;
        Some(Self {
            sizes: SizeScale::new(extent),
            colors: ColorScale::new(extent),
            selected,
        })
    }

    pub fn sized_words(&self) -> Vec<SizedWord> {
        self.selected
            .iter()
            .map(|word| SizedWord {
                size: self.sizes.size(word.value),
                word: word.clone(),
            })
            .collect()
    }

    pub fn request(&self, seed: u64) -> LayoutRequest {
        LayoutRequest::new(self.sized_words(), seed)
    }

    /// Lay the words out (yielding to the event loop while packing) and build the scene.
    pub async fn render(&self, seed: u64) -> Scene {
        let placed = run_layout(self.request(seed)).await;
        Scene::build(&placed, &self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<WordStat> {
        vec![
            WordStat::new("A", 10.0),
            WordStat::new("B", 5.0),
            WordStat::new("C", 5.0),
        ]
    }

    #[test]
    fn empty_input_has_no_plan() {
        assert!(CloudPlan::new(&[], MAX_WORDS).is_none());
    }

    #[test]
    fn three_word_scenario_sizes() {
        let plan = CloudPlan::new(&sample(), MAX_WORDS).unwrap();
        let sized = plan.sized_words();
        assert_eq!(sized.len(), 3);
        assert!(sized[0].size > sized[1].size);
        assert_eq!(sized[1].size, sized[2].size);
    }

    #[test]
    fn three_word_scenario_renders_every_word() {
        let plan = CloudPlan::new(&sample(), MAX_WORDS).unwrap();
        let scene = futures::executor::block_on(plan.render(7));
        assert_eq!(scene.words.len(), 3);

        let a = scene.word("A").unwrap();
        let b = scene.word("B").unwrap();
        let c = scene.word("C").unwrap();
        assert!(a.size > b.size);
        assert_eq!(b.size, c.size);
        assert_eq!(a.title, "A: 10");
    }
}
