use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::cloud::{RenderedCloud, Scene, SvgSize};
#[cfg(target_arch = "wasm32")]
use crate::core::platform;
use crate::i18n;
use crate::t;

/// Side of exported raster and vector images, in pixels.
const EXPORT_SIZE: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExportKind {
    Svg,
    Png,
    Json,
}

impl ExportKind {
    fn extension(self) -> &'static str {
        match self {
            ExportKind::Svg => "svg",
            ExportKind::Png => "png",
            ExportKind::Json => "json",
        }
    }

    fn mime(self) -> &'static str {
        match self {
            ExportKind::Svg => "image/svg+xml",
            ExportKind::Png => "image/png",
            ExportKind::Json => "application/json",
        }
    }

    fn working_label(self) -> String {
        match self {
            ExportKind::Svg => t!("export-working-svg"),
            ExportKind::Png => t!("export-working-png"),
            ExportKind::Json => t!("export-working-json"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(String),
    Done(String),
    Error(String),
}

/// Save the cloud currently on screen as SVG, PNG or JSON.
#[component]
pub fn ExportBar(cloud: Rc<RenderedCloud>) -> Element {
    i18n::use_language();
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => Some(("export-bar__meta".to_string(), format!("{label}…"))),
        ExportStatus::Done(message) => Some((
            "export-bar__meta export-bar__meta--success".to_string(),
            message.clone(),
        )),
        ExportStatus::Error(err) => Some((
            "export-bar__meta export-bar__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let svg_cloud = cloud.clone();
    let png_cloud = cloud.clone();
    let json_cloud = cloud;

    rsx! {
        div { class: "export-bar",
            span { class: "export-bar__label", {t!("export-label")} }
            div { class: "export-bar__actions",
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: busy(),
                    onclick: move |_| launch_export(ExportKind::Svg, svg_cloud.clone(), status, busy),
                    "SVG"
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: busy(),
                    onclick: move |_| launch_export(ExportKind::Png, png_cloud.clone(), status, busy),
                    "PNG"
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: busy(),
                    onclick: move |_| launch_export(ExportKind::Json, json_cloud.clone(), status, busy),
                    "JSON"
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn launch_export(
    kind: ExportKind,
    cloud: Rc<RenderedCloud>,
    mut status_signal: Signal<ExportStatus>,
    mut busy_signal: Signal<bool>,
) {
    if busy_signal() {
        return;
    }
    busy_signal.set(true);
    status_signal.set(ExportStatus::Working(kind.working_label()));

    #[cfg(target_arch = "wasm32")]
    {
        platform::spawn_future(async move {
            let outcome = perform_export(kind, &cloud).await;
            finish_export(kind, outcome, status_signal, busy_signal);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let outcome = futures::executor::block_on(perform_export(kind, &cloud));
        finish_export(kind, outcome, status_signal, busy_signal);
    }
}

fn finish_export(
    kind: ExportKind,
    outcome: Result<String, String>,
    mut status_signal: Signal<ExportStatus>,
    mut busy_signal: Signal<bool>,
) {
    match outcome {
        Ok(message) => {
            info!(kind = kind.extension(), "export finished");
            status_signal.set(ExportStatus::Done(message));
        }
        Err(err) => {
            warn!(kind = kind.extension(), error = %err, "export failed");
            status_signal.set(ExportStatus::Error(err));
        }
    }
    busy_signal.set(false);
}

async fn perform_export(kind: ExportKind, cloud: &RenderedCloud) -> Result<String, String> {
    let filename = export_file_name(kind, &timestamp_slug());
    let bytes = match kind {
        ExportKind::Svg => cloud
            .scene
            .to_svg_sized(SvgSize::Pixels(EXPORT_SIZE))
            .into_bytes(),
        ExportKind::Png => build_png_snapshot(&cloud.scene).await?,
        ExportKind::Json => {
            let json = words_json(cloud)?;
            #[cfg(not(target_arch = "wasm32"))]
            copy_to_clipboard(json.clone())?;
            json.into_bytes()
        }
    };

    let delivery = download_bytes(&filename, kind.mime(), bytes).await?;
    Ok(delivery_message(kind, delivery))
}

/// Desktop JSON exports also land on the clipboard; browser exports are plain downloads.
fn delivery_message(kind: ExportKind, delivery: Option<String>) -> String {
    match (kind, delivery) {
        (ExportKind::Json, Some(path)) => t!("export-json-copied-saved", path = path),
        (_, Some(path)) => t!("export-saved", path = path),
        (_, None) => t!("export-download-started"),
    }
}

fn words_json(cloud: &RenderedCloud) -> Result<String, String> {
    serde_json::to_string_pretty(&cloud.selected).map_err(|err| err.to_string())
}

fn export_file_name(kind: ExportKind, slug: &str) -> String {
    format!("wordglass-{slug}.{}", kind.extension())
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

#[cfg(not(target_arch = "wasm32"))]
fn copy_to_clipboard(payload: String) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|err| err.to_string())?;
    clipboard.set_text(payload).map_err(|err| err.to_string())
}

/// Hand `bytes` to the user: a browser download on the web (`None`), a file
/// under the app data directory on desktop (`Some(path)`).
async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
        let url = web::blob_url(&parts, mime)?;
        let anchor: web_sys::HtmlAnchorElement = web::create("a")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
        web_sys::Url::revoke_object_url(&url).ok();
        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = desktop_export_dir()?;
        std::fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        std::fs::write(&path, bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "Wordglass", "Wordglass")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}

async fn build_png_snapshot(scene: &Scene) -> Result<Vec<u8>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        web::rasterize(scene).await
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        build_png_desktop(scene)
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use base64::Engine as _;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, Url};

    use super::{Scene, SvgSize, EXPORT_SIZE};

    pub(super) fn create<T: JsCast>(tag: &str) -> Result<T, String> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?
            .create_element(tag)
            .map_err(|_| format!("Unable to create <{tag}>"))?
            .dyn_into()
            .map_err(|_| format!("<{tag}> cast failed"))
    }

    pub(super) fn blob_url(parts: &js_sys::Array, mime: &str) -> Result<String, String> {
        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_buffer_source_sequence_and_options(parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        Url::create_object_url_with_blob(&blob).map_err(|_| "Unable to create object URL".into())
    }

    /// Draw the scene onto an offscreen canvas and read it back as PNG bytes.
    pub(super) async fn rasterize(scene: &Scene) -> Result<Vec<u8>, String> {
        let svg_markup = scene.to_svg_sized(SvgSize::Pixels(EXPORT_SIZE));
        let parts = js_sys::Array::of1(&JsValue::from_str(&svg_markup));
        let url = blob_url(&parts, "image/svg+xml")?;

        let image = web_sys::HtmlImageElement::new().map_err(|_| "Unable to create image")?;
        image.set_src(&url);
        let decoded = JsFuture::from(image.decode()).await;
        Url::revoke_object_url(&url).ok();
        decoded.map_err(|_| "Image decode failed")?;

        let canvas: HtmlCanvasElement = create("canvas")?;
        canvas.set_width(EXPORT_SIZE);
        canvas.set_height(EXPORT_SIZE);
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or("Canvas context unavailable")?
            .dyn_into()
            .map_err(|_| "Context cast failed")?;
        context
            .draw_image_with_html_image_element(&image, 0.0, 0.0)
            .map_err(|_| "Unable to draw image")?;

        let data_url = canvas
            .to_data_url_with_type("image/png")
            .map_err(|_| "Unable to serialise canvas")?;
        let encoded = data_url.split(',').nth(1).ok_or("Malformed data URL")?;
        base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|_| "PNG decode failed".to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_png_desktop(scene: &Scene) -> Result<Vec<u8>, String> {
    let markup = scene.to_svg_sized(SvgSize::Pixels(EXPORT_SIZE));

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(&markup, &options).map_err(|err| err.to_string())?;

    let mut pixmap = tiny_skia::Pixmap::new(EXPORT_SIZE, EXPORT_SIZE)
        .ok_or("Unable to allocate export canvas")?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; PNG wants straight alpha.
    let mut rgba = Vec::with_capacity((EXPORT_SIZE * EXPORT_SIZE * 4) as usize);
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, EXPORT_SIZE, EXPORT_SIZE);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder
            .write_header()
            .map_err(|err| err.to_string())?
            .write_image_data(&rgba)
            .map_err(|err| err.to_string())?;
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::{CloudPlan, MAX_WORDS};
    use api::WordStat;

    fn rendered() -> RenderedCloud {
        let words = vec![WordStat::new("Rust", 4.0), WordStat::new("wasm", 2.0)];
        let plan = CloudPlan::new(&words, MAX_WORDS).unwrap();
        let scene = futures::executor::block_on(plan.render(1));
        RenderedCloud::new(scene, plan.selected)
    }

    #[test]
    fn file_names_carry_slug_and_extension() {
        assert_eq!(
            export_file_name(ExportKind::Png, "20240102_030405"),
            "wordglass-20240102_030405.png"
        );
        assert_eq!(export_file_name(ExportKind::Svg, "x"), "wordglass-x.svg");
        assert_eq!(ExportKind::Json.mime(), "application/json");
    }

    #[test]
    fn timestamp_slug_is_compact() {
        let slug = timestamp_slug();
        assert_eq!(slug.len(), 15, "{slug}");
        assert_eq!(slug.as_bytes()[8], b'_');
        assert!(slug.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn json_export_lists_selected_words() {
        let json = words_json(&rendered()).unwrap();
        let decoded: Vec<WordStat> = serde_json::from_str(&json).unwrap();
        assert_eq!(
            decoded,
            vec![WordStat::new("Rust", 4.0), WordStat::new("wasm", 2.0)]
        );
    }

    #[test]
    fn desktop_saves_mention_the_path() {
        crate::i18n::init();
        let saved = delivery_message(ExportKind::Png, Some("/tmp/cloud.png".into()));
        assert!(saved.contains("/tmp/cloud.png"), "{saved}");
        let json = delivery_message(ExportKind::Json, Some("/tmp/words.json".into()));
        assert!(json.contains("/tmp/words.json"), "{json}");
        assert_ne!(saved, json);
    }

    #[test]
    fn browser_downloads_share_one_message() {
        crate::i18n::init();
        assert_eq!(
            delivery_message(ExportKind::Json, None),
            delivery_message(ExportKind::Svg, None)
        );
    }

    #[test]
    fn desktop_png_is_a_png() {
        let png = build_png_desktop(&rendered().scene).unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]));
    }
}
