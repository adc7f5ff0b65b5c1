//! Output backends
//!
//! Scenes are projected through the [`Camera`] and drawn with `plotters`
//! onto a bitmap or SVG surface. Geometry is drawn back to front by depth;
//! labels and the title are drawn last, on top of everything.
//!
//! Bitmap text uses DejaVu Serif, bundled with the crate and registered the
//! first time a scene is drawn under the `serif`, `sans-serif` and
//! `monospace` families. [`register_font`] adds or replaces families; a
//! configured family with no font behind it falls back to `serif`.
//!
//! GIF animations are assembled frame by frame from RGB buffers and encoded
//! with the `gif` crate so the loop count can be controlled.

use crate::camera::{Camera, Projected};
use crate::color::Color;
use crate::error::{RenderError, Result};
use crate::scene::{Primitive, Scene, Stroke};
use plotters::coord::Shift;
use plotters::prelude::{
    BitMapBackend, DrawingArea, DrawingAreaErrorKind, DrawingBackend, IntoDrawingArea,
    IntoFont, PathElement, Polygon, RGBColor, SVGBackend, ShapeStyle, Text,
};
use plotters::style::{Color as _, FontStyle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Once;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Pixels per point of line width
const PX_PER_POINT: f64 = 1.5;

/// Angle between the arrow shaft and each barb of the head
const HEAD_ANGLE: f64 = std::f64::consts::PI / 7.0;

/// DejaVu Serif, see `assets/LICENSE-DejaVu`
static BUNDLED_FONT: &[u8] = include_bytes!("../assets/DejaVuSerif.ttf");

/// Families answered by the bundled font
const BUNDLED_FAMILIES: [&str; 3] = ["serif", "sans-serif", "monospace"];

/// Family tried when the configured one has no font
const FALLBACK_FAMILY: &str = "serif";

static BUNDLED_FONTS: Once = Once::new();

fn ensure_bundled_fonts() {
    BUNDLED_FONTS.call_once(|| {
        for family in BUNDLED_FAMILIES {
            if plotters::style::register_font(family, FontStyle::Normal, BUNDLED_FONT).is_err() {
                warn!(family, "bundled font could not be loaded");
            }
        }
        debug!(families = ?BUNDLED_FAMILIES, "registered bundled font");
    });
}

/// Register TrueType/OpenType font data under `family` for bitmap text
///
/// Use the family named in [`SceneConfig::font_family`](crate::SceneConfig)
/// ("serif" by default). Registering one of the bundled families replaces
/// the bundled font for it.
pub fn register_font(family: &str, bytes: &'static [u8]) -> Result<()> {
    ensure_bundled_fonts();
    plotters::style::register_font(family, FontStyle::Normal, bytes)
        .map_err(|_| RenderError::invalid_config(format!("font data for '{}' is not a valid font", family)))?;
    debug!(family, "registered label font");
    Ok(())
}

/// Item ready to draw, in pixel space
enum DrawItem {
    Segment {
        from: (i32, i32),
        to: (i32, i32),
        stroke: Stroke,
    },
    Fill {
        points: Vec<(i32, i32)>,
        color: Color,
        alpha: f64,
    },
}

struct Layered {
    depth: f64,
    item: DrawItem,
}

fn rgb(color: Color) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn line_style(stroke: &Stroke) -> ShapeStyle {
    ShapeStyle {
        color: rgb(stroke.color).mix(stroke.alpha),
        filled: false,
        stroke_width: ((stroke.width * PX_PER_POINT).round() as u32).max(1),
    }
}

fn backend_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Backend(err.to_string())
}

fn segment(a: Projected, b: Projected, stroke: Stroke) -> Layered {
    Layered {
        depth: (a.depth + b.depth) / 2.0,
        item: DrawItem::Segment {
            from: a.pixel(),
            to: b.pixel(),
            stroke,
        },
    }
}

/// Flatten the scene's geometry into depth-tagged pixel items
fn layer_geometry(scene: &Scene, camera: &Camera) -> Vec<Layered> {
    let mut items = Vec::new();

    for primitive in scene.primitives() {
        match primitive {
            Primitive::Polyline { points, stroke } => {
                let projected: Vec<Projected> = points.iter().map(|&p| camera.project(p)).collect();
                for pair in projected.windows(2) {
                    items.push(segment(pair[0], pair[1], *stroke));
                }
            }
            Primitive::Polygon {
                points,
                color,
                alpha,
            } => {
                let projected: Vec<Projected> = points.iter().map(|&p| camera.project(p)).collect();
                let depth = if projected.is_empty() {
                    0.0
                } else {
                    projected.iter().map(|p| p.depth).sum::<f64>() / projected.len() as f64
                };
                items.push(Layered {
                    depth,
                    item: DrawItem::Fill {
                        points: projected.iter().map(Projected::pixel).collect(),
                        color: *color,
                        alpha: *alpha,
                    },
                });
            }
            Primitive::Arrow {
                tip,
                stroke,
                head_ratio,
            } => items.extend(arrow_segments(camera, *tip, *stroke, *head_ratio)),
            Primitive::Label { .. } => {}
        }
    }

    items
}

/// Shaft plus two barbs, matching a quiver arrow with a line head
fn arrow_segments(camera: &Camera, tip: [f64; 3], stroke: Stroke, head_ratio: f64) -> Vec<Layered> {
    let tail = camera.project([0.0, 0.0, 0.0]);
    let head = camera.project(tip);
    let mut segments = vec![segment(tail, head, stroke)];

    let (dx, dy) = (tail.x - head.x, tail.y - head.y);
    let length = (dx * dx + dy * dy).sqrt();
    if length < 1.0 {
        return segments;
    }

    let barb = length * head_ratio;
    let base_angle = dy.atan2(dx);
    for sign in [-1.0, 1.0] {
        let angle = base_angle + sign * HEAD_ANGLE;
        let end = Projected {
            x: head.x + barb * angle.cos(),
            y: head.y + barb * angle.sin(),
            depth: head.depth,
        };
        segments.push(segment(head, end, stroke));
    }
    segments
}

fn draw_text_in<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    text: &str,
    anchor: (i32, i32),
    family: &str,
    size: f64,
) -> std::result::Result<(), String> {
    let style = (family, size).into_font().color(&rgb(Color::BLACK));
    area.draw(&Text::new(text, anchor, style))
        .map_err(|err| err.to_string())
}

/// Draw text in `family`, retrying in the fallback family
fn draw_text<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    text: &str,
    anchor: (i32, i32),
    family: &str,
    size: f64,
) -> std::result::Result<(), String> {
    draw_text_in(area, text, anchor, family, size).or_else(|err| {
        if family == FALLBACK_FAMILY {
            Err(err)
        } else {
            debug!(family, error = %err, "falling back to {}", FALLBACK_FAMILY);
            draw_text_in(area, text, anchor, FALLBACK_FAMILY, size)
        }
    })
}

/// Draw `scene` onto a plotters drawing area
///
/// Text that cannot be drawn even in the fallback family is logged and
/// skipped; any other backend failure is returned.
pub fn draw_scene<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, scene: &Scene) -> Result<()> {
    ensure_bundled_fonts();
    let config = scene.config();
    let (width, height) = area.dim_in_pixel();
    let camera = Camera::new(config.view, width, height);

    area.fill(&rgb(config.background)).map_err(backend_error)?;

    let mut items = layer_geometry(scene, &camera);
    items.sort_by(|a, b| a.depth.total_cmp(&b.depth));

    for Layered { item, .. } in &items {
        match item {
            DrawItem::Segment { from, to, stroke } => area
                .draw(&PathElement::new(vec![*from, *to], line_style(stroke)))
                .map_err(backend_error)?,
            DrawItem::Fill {
                points,
                color,
                alpha,
            } => area
                .draw(&Polygon::new(points.clone(), rgb(*color).mix(*alpha).filled()))
                .map_err(backend_error)?,
        }
    }

    let family = config.font_family.as_str();
    let mut failed_labels = 0usize;
    for primitive in scene.primitives() {
        if let Primitive::Label {
            position,
            text,
            size,
        } = primitive
        {
            let (x, y) = camera.project(*position).pixel();
            let anchor = (x, y - *size as i32);
            if let Err(err) = draw_text(area, text, anchor, family, f64::from(*size)) {
                debug!(label = %text, error = %err, "label not drawn");
                failed_labels += 1;
            }
        }
    }

    if let Some(title) = scene.title() {
        let size = config.font_size + 4;
        let approx_width = (title.chars().count() as u32 * size) / 2;
        let x = (width.saturating_sub(approx_width) / 2) as i32;
        if let Err(err) = draw_text(area, title, (x, 8), family, f64::from(size)) {
            debug!(error = %err, "title not drawn");
            failed_labels += 1;
        }
    }

    if failed_labels > 0 {
        warn!(failed_labels, family, "text could not be rendered");
    }

    Ok(())
}

/// Rasterize the scene into a packed RGB buffer of `width * height * 3` bytes
pub fn render_rgb(scene: &Scene) -> Result<Vec<u8>> {
    let config = scene.config();
    config.validate()?;
    let (width, height) = (config.width, config.height);

    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_scene(&root, scene)?;
        root.present().map_err(backend_error)?;
    }
    Ok(buffer)
}

impl Scene {
    /// Write the scene as a raster image; the format follows the extension
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let config = self.config();
        config.validate()?;
        let path = path.as_ref();

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        draw_scene(&root, self)?;
        root.present().map_err(backend_error)?;

        info!(path = %path.display(), "wrote image");
        Ok(())
    }

    /// Write the scene as an SVG document
    pub fn save_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let config = self.config();
        config.validate()?;
        let path = path.as_ref();

        let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
        draw_scene(&root, self)?;
        root.present().map_err(backend_error)?;

        info!(path = %path.display(), "wrote svg");
        Ok(())
    }

    /// Render the scene to an in-memory SVG document
    pub fn to_svg_string(&self) -> Result<String> {
        let config = self.config();
        config.validate()?;

        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (config.width, config.height)).into_drawing_area();
            draw_scene(&root, self)?;
            root.present().map_err(backend_error)?;
        }
        Ok(svg)
    }
}

/// Streams scenes into an animated GIF
pub struct GifWriter<W: Write> {
    encoder: gif::Encoder<W>,
    width: u16,
    height: u16,
    delay: u16,
    frames: usize,
}

impl GifWriter<BufWriter<File>> {
    /// Create a GIF file at `path`
    pub fn create(
        path: impl AsRef<Path>,
        width: u32,
        height: u32,
        interval: Duration,
        repeat: bool,
    ) -> Result<Self> {
        let file = BufWriter::new(File::create(path)?);
        Self::new(file, width, height, interval, repeat)
    }
}

impl<W: Write> GifWriter<W> {
    /// Wrap a writer; `repeat` selects an endless loop or a single play
    pub fn new(writer: W, width: u32, height: u32, interval: Duration, repeat: bool) -> Result<Self> {
        let (width, height) = match (u16::try_from(width), u16::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
            _ => {
                return Err(RenderError::invalid_config(format!(
                    "GIF frames must be between 1 and 65535 pixels, got {}x{}",
                    width, height
                )))
            }
        };

        let mut encoder = gif::Encoder::new(writer, width, height, &[])?;
        encoder.set_repeat(if repeat {
            gif::Repeat::Infinite
        } else {
            gif::Repeat::Finite(0)
        })?;

        // GIF delays are in hundredths of a second
        let delay = ((interval.as_millis() + 5) / 10).clamp(1, u128::from(u16::MAX)) as u16;

        Ok(Self {
            encoder,
            width,
            height,
            delay,
            frames: 0,
        })
    }

    /// Rasterize `scene` and append it as the next frame
    pub fn write_scene(&mut self, scene: &Scene) -> Result<()> {
        let config = scene.config();
        if config.width != u32::from(self.width) || config.height != u32::from(self.height) {
            return Err(RenderError::invalid_config(format!(
                "frame is {}x{} but the GIF is {}x{}",
                config.width, config.height, self.width, self.height
            )));
        }

        let buffer = render_rgb(scene)?;
        let mut frame = gif::Frame::from_rgb_speed(self.width, self.height, &buffer, 10);
        frame.delay = self.delay;
        self.encoder.write_frame(&frame)?;
        self.frames += 1;
        Ok(())
    }

    /// Frames written so far
    pub fn frames_written(&self) -> usize {
        self.frames
    }

    /// Write the trailer and return the underlying writer
    pub fn finish(self) -> Result<W> {
        let mut writer = self.encoder.into_inner()?;
        writer.flush()?;
        Ok(writer)
    }
}
