//! Vector scene for one completed layout.
//!
//! The scene is plain data; [`Scene::to_svg`] turns it into standalone SVG
//! markup that the view injects into its container (replacing whatever was
//! drawn before) and the exporters reuse as-is.

use std::fmt::Write as _;

use api::WordStat;

use super::{ColorScale, PlacedWord, CANVAS_SIZE, FONT_FAMILY};
use crate::core::format;

const CLIP_ID: &str = "wc-clip";
const GRADIENT_ID: &str = "glassGrad";
const SHADOW_ID: &str = "shadow";

/// Glass disc radius relative to the canvas side.
const FRAME_RATIO: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneWord {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
    pub size: f64,
    pub fill: String,
    /// Hover tooltip, `"text: value"`.
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub canvas: f64,
    pub radius: f64,
    pub words: Vec<SceneWord>,
}

/// How the root `<svg>` is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgSize {
    /// Fill the container (on-screen rendering).
    Fill,
    /// Fixed square pixel size (exports).
    Pixels(u32),
}

impl Scene {
    pub fn build(placed: &[PlacedWord], colors: &ColorScale) -> Self {
        let words = placed
            .iter()
            .map(|p| SceneWord {
                text: p.word.text.clone(),
                x: p.x,
                y: p.y,
                rotate: p.rotate,
                size: p.size,
                fill: colors.color(p.word.value),
                title: format::word_tooltip(&p.word.text, p.word.value),
            })
            .collect();

        Self {
            canvas: CANVAS_SIZE,
            radius: CANVAS_SIZE * FRAME_RATIO,
            words,
        }
    }

    pub fn word(&self, text: &str) -> Option<&SceneWord> {
        self.words.iter().find(|w| w.text == text)
    }

    pub fn to_svg(&self) -> String {
        self.to_svg_sized(SvgSize::Fill)
    }

    pub fn to_svg_sized(&self, size: SvgSize) -> String {
        let half = self.canvas / 2.0;
        let r = self.radius;
        let (width, height) = match size {
            SvgSize::Fill => ("100%".to_string(), "100%".to_string()),
            SvgSize::Pixels(px) => (px.to_string(), px.to_string()),
        };

        let mut svg = String::with_capacity(512 + self.words.len() * 256);
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\" width=\"{width}\" height=\"{height}\">",
            num(-half),
            num(-half),
            num(self.canvas),
            num(self.canvas),
        );

        svg.push_str("<defs>");
        let _ = write!(
            svg,
            "<filter id=\"{SHADOW_ID}\"><feDropShadow dx=\"0\" dy=\"2\" stdDeviation=\"4\" flood-color=\"#000\" flood-opacity=\"0.25\"/></filter>"
        );
        let _ = write!(
            svg,
            "<radialGradient id=\"{GRADIENT_ID}\" cx=\"45%\" cy=\"35%\" r=\"65%\">\
             <stop offset=\"0%\" stop-color=\"rgba(255,255,255,0.38)\"/>\
             <stop offset=\"60%\" stop-color=\"rgba(255,255,255,0.20)\"/>\
             <stop offset=\"100%\" stop-color=\"rgba(255,255,255,0.10)\"/>\
             </radialGradient>"
        );
        let _ = write!(
            svg,
            "<clipPath id=\"{CLIP_ID}\"><circle cx=\"0\" cy=\"0\" r=\"{}\"/></clipPath>",
            num(r)
        );
        svg.push_str("</defs>");

        let _ = write!(
            svg,
            "<circle cx=\"0\" cy=\"0\" r=\"{}\" fill=\"url(#{GRADIENT_ID})\" stroke=\"rgba(255,255,255,0.45)\" stroke-width=\"1\" filter=\"url(#{SHADOW_ID})\"/>",
            num(r)
        );
        let _ = write!(
            svg,
            "<g clip-path=\"url(#{CLIP_ID})\"><ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" fill=\"rgba(255,255,255,0.18)\" opacity=\"0.35\"/></g>",
            num(-r * 0.25),
            num(-r * 0.25),
            num(r * 0.5),
            num(r * 0.38),
        );

        let _ = write!(svg, "<g clip-path=\"url(#{CLIP_ID})\">");
        for word in &self.words {
            let _ = write!(
                svg,
                "<text text-anchor=\"middle\" transform=\"translate({}, {}) rotate({})\" \
                 style=\"font-family: {FONT_FAMILY}; font-weight: 700; font-size: {}px; fill: {}\">\
                 {}<title>{}</title></text>",
                num(word.x),
                num(word.y),
                num(word.rotate),
                num(word.size),
                word.fill,
                escape_xml(&word.text),
                escape_xml(&word.title),
            );
        }
        svg.push_str("</g></svg>");
        svg
    }
}

/// A drawn cloud together with the words that went into it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCloud {
    pub scene: Scene,
    pub markup: String,
    pub selected: Vec<WordStat>,
}

impl RenderedCloud {
    pub fn new(scene: Scene, selected: Vec<WordStat>) -> Self {
        Self {
            markup: scene.to_svg(),
            scene,
            selected,
        }
    }
}

/// Compact number formatting: at most two decimals, no trailing zeros.
fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
