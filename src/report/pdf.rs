use std::path::Path;

use anyhow::{Context, Result};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon, Rgb,
};

use crate::models::{BatchReport, QuestionGroup, SkillCount, StudentReport};
use crate::wordcloud::WordCloud;

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 18.0;
const COVER_HDR_H: f32 = 72.0;
const CONTENT_W: f32 = PAGE_W - 2.0 * MARGIN;
const FOOTER_Y: f32 = 22.0;
/// Lowest y a flowing text line may use before a page break.
const FLOW_BOTTOM: f32 = 30.0;
const PT_PER_MM: f32 = 2.835;

const BG:           (f32, f32, f32) = (1.00, 1.00, 1.00);
const PANEL:        (f32, f32, f32) = (1.00, 1.00, 1.00);
const PANEL_ALT:    (f32, f32, f32) = (0.95, 0.96, 0.99);
const PANEL_BORDER: (f32, f32, f32) = (0.85, 0.87, 0.92);
const ACCENT_BLU:   (f32, f32, f32) = (0.20, 0.46, 0.95);
const ACCENT_PUR:   (f32, f32, f32) = (0.52, 0.30, 0.95);
const BAR_DARK:     (f32, f32, f32) = (0.12, 0.23, 0.45);
const BAR_LIGHT:    (f32, f32, f32) = (0.42, 0.68, 0.84);
const TEXT_PRI:     (f32, f32, f32) = (0.07, 0.08, 0.14);
const TEXT_SEC:     (f32, f32, f32) = (0.36, 0.40, 0.52);
const TEXT_MUT:     (f32, f32, f32) = (0.58, 0.63, 0.72);
const WHITE:        (f32, f32, f32) = (1.00, 1.00, 1.00);
const WHITE_DIM:    (f32, f32, f32) = (0.82, 0.89, 1.00);
const OK_FG:        (f32, f32, f32) = (0.07, 0.52, 0.22);

const R_PANEL: f32 = 2.5;
const R_BADGE: f32 = 1.5;

// ── Bar chart layout ──────────────────────────────────────────────────────────
const LABEL_COL_W: f32 = 46.0;
const BAR_ROW_H: f32 = 7.0;
const BAR_H: f32 = 4.6;
const CHART_TOP: f32 = 258.0;

// ── Public entry points ───────────────────────────────────────────────────────

/// Cover → skill chart → skills cloud and projects cloud.
pub fn render_batch(report: &BatchReport, output_path: &Path) -> Result<()> {
    let doc = PdfDocument::empty(format!("Batch {} Report", report.batch));

    let distinct = {
        let mut s: Vec<&str> = report.skills.iter().map(String::as_str).collect();
        s.sort_unstable();
        s.dedup();
        s.len()
    };
    add_cover_page(
        &doc,
        &format!("Batch {}", report.batch),
        "BATCH",
        &[
            ("STUDENTS", report.student_count.to_string(), ACCENT_BLU),
            ("SKILL ENTRIES", report.skills.len().to_string(), ACCENT_PUR),
            ("DISTINCT", distinct.to_string(), TEXT_SEC),
            ("CHARTED", report.skill_counts.len().to_string(), OK_FG),
        ],
        &[
            ("Skill Popularity", "Normalized skills appearing more than once"),
            ("Word Clouds", "Batch skills and project / research areas"),
        ],
    )?;
    add_bar_chart_pages(
        &doc,
        &format!("Skill Popularity in Batch {}", report.batch),
        &report.skill_counts,
    )?;
    add_word_cloud_page(
        &doc,
        &[
            (format!("Skills Word Cloud for Batch {}", report.batch), &report.skills_cloud),
            (
                format!("Projects and Research Word Cloud for Batch {}", report.batch),
                &report.projects_cloud,
            ),
        ],
    )?;

    save(doc, output_path)
}

/// Cover → profile and questions → skill chart → skills cloud.
pub fn render_student(report: &StudentReport, output_path: &Path) -> Result<()> {
    let p = &report.profile;
    let doc = PdfDocument::empty(format!("{} Report", p.full_name));

    let question_count: usize = report.questions.iter().map(|g| g.questions.len()).sum();
    add_cover_page(
        &doc,
        &p.full_name,
        "STUDENT",
        &[
            ("BATCH", p.batch.clone(), ACCENT_BLU),
            ("SKILLS", report.skills.len().to_string(), ACCENT_PUR),
            ("DISTINCT", report.skill_counts.len().to_string(), TEXT_SEC),
            ("QUESTIONS", question_count.to_string(), OK_FG),
        ],
        &[
            ("Profile", "Contact details, projects and achievements"),
            ("Interview Questions", "Questions mapped to each listed skill"),
            ("Skill Charts", "Skill distribution and word cloud"),
        ],
    )?;
    add_profile_pages(&doc, report)?;
    add_bar_chart_pages(&doc, "Skill Popularity", &report.skill_counts)?;
    add_word_cloud_page(&doc, &[("Skills Word Cloud".to_string(), &report.skills_cloud)])?;

    save(doc, output_path)
}

fn save(doc: PdfDocumentReference, output_path: &Path) -> Result<()> {
    let bytes = doc.save_to_bytes()?;
    std::fs::write(output_path, &bytes)
        .with_context(|| format!("Failed to write PDF to {}", output_path.display()))?;

    println!("PDF report written to: {}", output_path.display());
    Ok(())
}

// ── Cover page ────────────────────────────────────────────────────────────────

type Card = (&'static str, String, (f32, f32, f32));

fn add_cover_page(
    doc: &PdfDocumentReference,
    subject: &str,
    subject_label: &str,
    cards: &[Card],
    contents: &[(&str, &str)],
) -> Result<()> {
    let (page_idx, layer_idx) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Cover");
    let layer = doc.get_page(page_idx).get_layer(layer_idx);

    let font_b = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let font_r = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    fill_rect(&layer, 0.0, 0.0, PAGE_W, PAGE_H, BG);

    let hdr_bot = PAGE_H - COVER_HDR_H;
    fill_gradient_h(&layer, 0.0, hdr_bot, PAGE_W, COVER_HDR_H, ACCENT_BLU, ACCENT_PUR, 28);

    set_color(&layer, WHITE_DIM);
    layer.use_text(
        format!("interview-dash v{}", env!("CARGO_PKG_VERSION")),
        7.5, Mm(PAGE_W - MARGIN - 44.0), Mm(PAGE_H - 10.5), &font_r,
    );

    set_color(&layer, WHITE);
    layer.use_text("Student Interview", 28.0, Mm(MARGIN), Mm(PAGE_H - 26.0), &font_b);
    set_color(&layer, WHITE_DIM);
    layer.use_text("Dashboard", 28.0, Mm(MARGIN), Mm(PAGE_H - 41.0), &font_b);

    // Subject chip
    let chip_y = hdr_bot - 18.0;
    let chip_h = 12.0f32;
    let chip_w = 106.0f32;
    fill_rounded_rect(&layer, MARGIN, chip_y, chip_w, chip_h, R_BADGE, PANEL);
    stroke_rounded_rect(&layer, MARGIN, chip_y, chip_w, chip_h, R_BADGE, PANEL_BORDER);
    fill_rect(&layer, MARGIN, chip_y, 2.5, chip_h, ACCENT_BLU);

    set_color(&layer, TEXT_MUT);
    layer.use_text(subject_label, 6.0, Mm(MARGIN + 5.0), Mm(chip_y + chip_h - 3.8), &font_b);
    set_color(&layer, TEXT_PRI);
    layer.use_text(truncate(subject, 34), 9.5, Mm(MARGIN + 5.0), Mm(chip_y + 2.8), &font_b);

    let rule_y = chip_y - 10.0;
    draw_hline(&layer, MARGIN, PAGE_W - MARGIN, rule_y, PANEL_BORDER);
    set_color(&layer, TEXT_MUT);
    layer.use_text("OVERVIEW", 6.5, Mm(MARGIN), Mm(rule_y - 7.0), &font_b);

    let card_y = rule_y - 42.0;
    let card_h = 26.0f32;
    let gap = 4.0f32;
    let n = cards.len().max(1) as f32;
    let card_w = (CONTENT_W - gap * (n - 1.0)) / n;
    for (i, (label, value, accent)) in cards.iter().enumerate() {
        let cx = MARGIN + (card_w + gap) * i as f32;
        draw_stat_card(&layer, cx, card_y, card_w, card_h, label, value, *accent, &font_r, &font_b);
    }

    let section_y = card_y - 13.0;
    draw_hline(&layer, MARGIN, PAGE_W - MARGIN, section_y, PANEL_BORDER);
    set_color(&layer, TEXT_MUT);
    layer.use_text("WHAT'S IN THIS REPORT", 6.5, Mm(MARGIN), Mm(section_y - 7.5), &font_b);

    for (j, (title, desc)) in contents.iter().enumerate() {
        let iy = section_y - 15.0 - j as f32 * 10.0;
        fill_rounded_rect(&layer, MARGIN, iy + 2.0, 2.0, 2.0, 1.0, ACCENT_BLU);
        set_color(&layer, TEXT_PRI);
        layer.use_text(*title, 8.5, Mm(MARGIN + 5.0), Mm(iy + 2.0), &font_b);
        set_color(&layer, TEXT_SEC);
        layer.use_text(*desc, 8.0, Mm(MARGIN + 5.0), Mm(iy - 3.5), &font_r);
    }

    draw_footer(&layer, &font_r);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_stat_card(
    layer: &PdfLayerReference,
    x: f32, y: f32, w: f32, h: f32,
    label: &str,
    value: &str,
    accent: (f32, f32, f32),
    font_r: &IndirectFontRef,
    font_b: &IndirectFontRef,
) {
    fill_rounded_rect(layer, x, y, w, h, R_BADGE, PANEL);
    stroke_rounded_rect(layer, x, y, w, h, R_BADGE, PANEL_BORDER);
    fill_rect(layer, x, y + h - 2.0, w, 2.0, accent);

    set_color(layer, accent);
    layer.use_text(truncate(value, 10), 20.0, Mm(x + 5.0), Mm(y + h * 0.38), font_b);

    set_color(layer, TEXT_MUT);
    layer.use_text(label, 6.5, Mm(x + 5.0), Mm(y + 3.5), font_r);
}

// ── Bar chart pages ───────────────────────────────────────────────────────────

fn add_bar_chart_pages(doc: &PdfDocumentReference, title: &str, counts: &[SkillCount]) -> Result<()> {
    let font_b = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let font_r = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let max = counts.iter().map(|c| c.count).max().unwrap_or(1).max(1);
    let bar_x = MARGIN + LABEL_COL_W;
    let bar_max_w = CONTENT_W - LABEL_COL_W - 12.0;
    let rows_per_page = ((CHART_TOP - FLOW_BOTTOM) / BAR_ROW_H).floor() as usize;

    let chunks: Vec<&[SkillCount]> = if counts.is_empty() {
        vec![counts]
    } else {
        counts.chunks(rows_per_page.max(1)).collect()
    };

    for (page_num, chunk) in chunks.iter().enumerate() {
        let (pi, li) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Skills");
        let layer = doc.get_page(pi).get_layer(li);
        page_header(&layer, title, "Frequency of each skill", page_num + 1, &font_b, &font_r);

        if chunk.is_empty() {
            set_color(&layer, TEXT_SEC);
            layer.use_text("No skill appears often enough to chart.", 10.0, Mm(MARGIN), Mm(CHART_TOP - 6.0), &font_r);
        }

        let n = counts.len();
        for (i, entry) in chunk.iter().enumerate() {
            let rank = page_num * rows_per_page + i;
            let y = CHART_TOP - (i as f32 + 1.0) * BAR_ROW_H;
            if rank % 2 == 0 {
                fill_rect(&layer, MARGIN, y - 1.2, CONTENT_W, BAR_ROW_H, PANEL_ALT);
            }

            set_color(&layer, TEXT_PRI);
            let label = if entry.skill.is_empty() { "(blank)" } else { entry.skill.as_str() };
            layer.use_text(truncate(label, 26), 8.0, Mm(MARGIN + 2.0), Mm(y + 1.0), &font_r);

            let t = if n > 1 { rank as f32 / (n - 1) as f32 } else { 0.0 };
            let w = (entry.count as f32 / max as f32 * bar_max_w).max(0.8);
            fill_rounded_rect(&layer, bar_x, y, w, BAR_H, 0.8, lerp(BAR_DARK, BAR_LIGHT, t));

            set_color(&layer, TEXT_SEC);
            layer.use_text(entry.count.to_string(), 7.5, Mm(bar_x + w + 2.0), Mm(y + 1.0), &font_b);
        }

        draw_footer(&layer, &font_r);
    }

    Ok(())
}

// ── Word cloud page ───────────────────────────────────────────────────────────

fn add_word_cloud_page(doc: &PdfDocumentReference, clouds: &[(String, &WordCloud)]) -> Result<()> {
    let font_b = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let font_r = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let (pi, li) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Word Clouds");
    let layer = doc.get_page(pi).get_layer(li);
    page_header(&layer, "Word Clouds", "Larger words appear more often", 1, &font_b, &font_r);

    let mut top = 262.0f32;
    for (title, cloud) in clouds {
        let scale = CONTENT_W / cloud.width.max(1) as f32;
        let panel_h = cloud.height as f32 * scale;

        set_color(&layer, TEXT_PRI);
        layer.use_text(truncate(title, 60), 11.0, Mm(MARGIN), Mm(top), &font_b);
        let panel_top = top - 4.0;

        fill_rounded_rect(&layer, MARGIN, panel_top - panel_h, CONTENT_W, panel_h, R_PANEL, cloud.background.to_unit());
        stroke_rounded_rect(&layer, MARGIN, panel_top - panel_h, CONTENT_W, panel_h, R_PANEL, PANEL_BORDER);

        if cloud.words.is_empty() {
            set_color(&layer, placeholder_color(cloud));
            layer.use_text("No words to show.", 9.0, Mm(MARGIN + 4.0), Mm(panel_top - 8.0), &font_r);
        }

        for word in &cloud.words {
            let size_mm = word.font_size as f32 * scale;
            // baseline sits roughly 80% down the glyph box
            let baseline_px = word.y as f32 + (word.height as f32 + word.font_size as f32 * 0.8) / 2.0;
            set_color(&layer, word.color.to_unit());
            layer.use_text(
                word.text.as_str(),
                size_mm * PT_PER_MM,
                Mm(MARGIN + word.x as f32 * scale + 0.4),
                Mm(panel_top - baseline_px * scale),
                &font_r,
            );
        }

        top = panel_top - panel_h - 14.0;
    }

    draw_footer(&layer, &font_r);
    Ok(())
}

/// Muted text that stays readable on the cloud's own background.
fn placeholder_color(cloud: &WordCloud) -> (f32, f32, f32) {
    if cloud.background.is_dark() {
        WHITE_DIM
    } else {
        TEXT_MUT
    }
}

// ── Profile and question pages ────────────────────────────────────────────────

/// A sequence of text lines that starts a new page when it runs out of room.
struct TextFlow<'a> {
    doc: &'a PdfDocumentReference,
    title: &'a str,
    font_b: IndirectFontRef,
    font_r: IndirectFontRef,
    layer: Option<PdfLayerReference>,
    y: f32,
    page_num: usize,
}

impl<'a> TextFlow<'a> {
    fn new(doc: &'a PdfDocumentReference, title: &'a str) -> Result<Self> {
        Ok(Self {
            doc,
            title,
            font_b: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
            font_r: doc.add_builtin_font(BuiltinFont::Helvetica)?,
            layer: None,
            y: 0.0,
            page_num: 0,
        })
    }

    fn layer_with_room(&mut self, needed: f32) -> PdfLayerReference {
        if let Some(layer) = &self.layer {
            if self.y - needed >= FLOW_BOTTOM {
                return layer.clone();
            }
        }

        self.page_num += 1;
        let (pi, li) = self.doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Profile");
        let layer = self.doc.get_page(pi).get_layer(li);
        page_header(&layer, self.title, "Profile and interview questions", self.page_num, &self.font_b, &self.font_r);
        draw_footer(&layer, &self.font_r);
        self.y = 262.0;
        self.layer = Some(layer.clone());
        layer
    }

    fn section(&mut self, heading: &str) {
        let layer = self.layer_with_room(14.0);
        self.y -= 4.0;
        set_color(&layer, TEXT_MUT);
        layer.use_text(heading.to_uppercase(), 7.0, Mm(MARGIN), Mm(self.y), &self.font_b);
        draw_hline(&layer, MARGIN, PAGE_W - MARGIN, self.y - 2.0, PANEL_BORDER);
        self.y -= 7.0;
    }

    fn field(&mut self, label: &str, value: &str) {
        let value = if value.is_empty() { "-" } else { value };
        let lines: Vec<String> = value.lines().flat_map(|l| wrap_text(l.trim(), 80)).collect();
        let mut first = true;
        for line in lines {
            let layer = self.layer_with_room(5.0);
            if first {
                set_color(&layer, TEXT_PRI);
                layer.use_text(label, 8.5, Mm(MARGIN), Mm(self.y), &self.font_b);
                first = false;
            }
            set_color(&layer, TEXT_SEC);
            layer.use_text(line, 8.5, Mm(MARGIN + 40.0), Mm(self.y), &self.font_r);
            self.y -= 4.6;
        }
        self.y -= 1.4;
    }

    fn line(&mut self, text: &str, indent: f32, bold: bool, color: (f32, f32, f32)) {
        for piece in wrap_text(text, 95) {
            let layer = self.layer_with_room(5.0);
            set_color(&layer, color);
            let font = if bold { &self.font_b } else { &self.font_r };
            layer.use_text(piece, 8.5, Mm(MARGIN + indent), Mm(self.y), font);
            self.y -= 4.6;
        }
    }
}

fn add_profile_pages(doc: &PdfDocumentReference, report: &StudentReport) -> Result<()> {
    let p = &report.profile;
    let title = format!("Analysis for {}", p.full_name);
    let mut flow = TextFlow::new(doc, &title)?;

    flow.section("Profile");
    flow.field("Email", &p.email);
    flow.field("Contact Number", &p.contact_number);
    flow.field("UG Degree", &p.degree);
    flow.field("Skills", &p.skills);
    flow.field("Projects and Research", &p.research);
    flow.field("Achievements", &p.achievements);
    flow.field("LinkedIn", &p.linkedin);
    flow.field("GitHub", &p.github);

    flow.section("Relevant Interview Questions");
    write_questions(&mut flow, &report.questions);
    Ok(())
}

fn write_questions(flow: &mut TextFlow<'_>, groups: &[QuestionGroup]) {
    if groups.is_empty() {
        flow.line("No skills listed.", 0.0, false, TEXT_MUT);
    }
    for group in groups {
        if group.questions.is_empty() {
            flow.line(&format!("No questions found for skill '{}'", group.skill), 0.0, false, TEXT_MUT);
            continue;
        }
        flow.line(&format!("For skill '{}':", group.skill), 0.0, true, TEXT_PRI);
        for q in &group.questions {
            flow.line(&format!("- {}", q), 4.0, false, TEXT_SEC);
        }
    }
}

// ── Page chrome ───────────────────────────────────────────────────────────────

fn page_header(
    layer: &PdfLayerReference,
    title: &str,
    subtitle: &str,
    page_num: usize,
    font_b: &IndirectFontRef,
    font_r: &IndirectFontRef,
) {
    fill_rect(layer, 0.0, 0.0, PAGE_W, PAGE_H, BG);
    fill_gradient_h(layer, 0.0, PAGE_H - 2.5, PAGE_W, 2.5, ACCENT_BLU, ACCENT_PUR, 21);

    set_color(layer, TEXT_PRI);
    layer.use_text(truncate(title, 44), 18.0, Mm(MARGIN), Mm(279.0), font_b);
    set_color(layer, TEXT_SEC);
    layer.use_text(subtitle, 9.0, Mm(MARGIN), Mm(272.0), font_r);
    if page_num > 1 {
        set_color(layer, TEXT_MUT);
        layer.use_text(format!("Page {}", page_num), 8.0, Mm(PAGE_W - MARGIN - 14.0), Mm(279.5), font_r);
    }
    draw_hline(layer, MARGIN, PAGE_W - MARGIN, 268.0, PANEL_BORDER);
}

fn draw_footer(layer: &PdfLayerReference, font_r: &IndirectFontRef) {
    draw_hline(layer, MARGIN, PAGE_W - MARGIN, FOOTER_Y, PANEL_BORDER);
    set_color(layer, TEXT_MUT);
    layer.use_text(
        format!("Generated by interview-dash v{}", env!("CARGO_PKG_VERSION")),
        7.5, Mm(MARGIN), Mm(15.0), font_r,
    );
}

// ── Drawing helpers ───────────────────────────────────────────────────────────

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb { r, g, b, icc_profile: None })
}

fn set_color(layer: &PdfLayerReference, color: (f32, f32, f32)) {
    layer.set_fill_color(rgb(color));
}

fn fill_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32, color: (f32, f32, f32)) {
    layer.set_fill_color(rgb(color));
    layer.add_polygon(Polygon {
        rings: vec![vec![
            (Point::new(Mm(x),     Mm(y)),     false),
            (Point::new(Mm(x + w), Mm(y)),     false),
            (Point::new(Mm(x + w), Mm(y + h)), false),
            (Point::new(Mm(x),     Mm(y + h)), false),
        ]],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
    layer.set_fill_color(rgb((0.0, 0.0, 0.0)));
}

/// Clockwise ring approximating a rounded rectangle, 8 segments per corner.
fn rounded_rect_ring(x: f32, y: f32, w: f32, h: f32, r: f32) -> Vec<(Point, bool)> {
    let r = r.min(w / 2.0).min(h / 2.0);
    const SEGS: usize = 8;
    let mut pts = Vec::with_capacity(4 * (SEGS + 1));

    let corners = [
        (x + w - r, y + r,     270.0f32, 360.0f32),
        (x + w - r, y + h - r, 0.0f32,   90.0f32),
        (x + r,     y + h - r, 90.0f32,  180.0f32),
        (x + r,     y + r,     180.0f32, 270.0f32),
    ];

    for (cx, cy, start, end) in &corners {
        for i in 0..=SEGS {
            let t = i as f32 / SEGS as f32;
            let angle = (start + (end - start) * t).to_radians();
            pts.push((
                Point::new(Mm(cx + r * angle.cos()), Mm(cy + r * angle.sin())),
                false,
            ));
        }
    }
    pts
}

fn fill_rounded_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32,
                     r: f32, color: (f32, f32, f32)) {
    layer.set_fill_color(rgb(color));
    layer.add_polygon(Polygon {
        rings: vec![rounded_rect_ring(x, y, w, h, r)],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
    layer.set_fill_color(rgb((0.0, 0.0, 0.0)));
}

fn stroke_rounded_rect(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32,
                       r: f32, color: (f32, f32, f32)) {
    layer.set_outline_color(rgb(color));
    layer.set_outline_thickness(0.4);
    layer.add_polygon(Polygon {
        rings: vec![rounded_rect_ring(x, y, w, h, r)],
        mode: PaintMode::Stroke,
        winding_order: WindingOrder::NonZero,
    });
    layer.set_outline_color(rgb((0.0, 0.0, 0.0)));
    layer.set_outline_thickness(1.0);
}

fn draw_hline(layer: &PdfLayerReference, x1: f32, x2: f32, y: f32, color: (f32, f32, f32)) {
    layer.set_outline_color(rgb(color));
    layer.set_outline_thickness(0.3);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y)), false),
            (Point::new(Mm(x2), Mm(y)), false),
        ],
        is_closed: false,
    });
    layer.set_outline_color(rgb((0.0, 0.0, 0.0)));
    layer.set_outline_thickness(1.0);
}

/// Left-to-right gradient built from `steps` vertical strips.
#[allow(clippy::too_many_arguments)]
fn fill_gradient_h(
    layer: &PdfLayerReference,
    x: f32, y: f32, w: f32, h: f32,
    from: (f32, f32, f32),
    to: (f32, f32, f32),
    steps: usize,
) {
    let step_w = w / steps as f32;
    for i in 0..steps {
        let t = i as f32 / (steps - 1).max(1) as f32;
        // strips overlap slightly to avoid hairline gaps
        fill_rect(layer, x + i as f32 * step_w, y, step_w + 0.6, h, lerp(from, to, t));
    }
}

fn lerp(from: (f32, f32, f32), to: (f32, f32, f32), t: f32) -> (f32, f32, f32) {
    (
        from.0 + (to.0 - from.0) * t,
        from.1 + (to.1 - from.1) * t,
        from.2 + (to.2 - from.2) * t,
    )
}

// ── Text helpers ──────────────────────────────────────────────────────────────

fn truncate(s: &str, max: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > max {
        format!("{}…", chars[..max - 1].iter().collect::<String>())
    } else {
        s.to_string()
    }
}

fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{batch_analysis, student_analysis};
    use crate::config::ViewOptions;
    use crate::loader::Dataset;
    use crate::models::{SkillQuestion, StudentRecord};

    fn dataset() -> Dataset {
        Dataset {
            students: vec![
                StudentRecord {
                    batch: "2023".to_string(),
                    full_name: "Asha Rao".to_string(),
                    skills: "Python, SQL, Tableau".to_string(),
                    research: "Forecasting retail demand with gradient boosting".to_string(),
                    achievements: "- Winner, inter-college hackathon\n- NSS volunteer".to_string(),
                    ..Default::default()
                },
                StudentRecord {
                    batch: "2023".to_string(),
                    full_name: "Ravi".to_string(),
                    skills: "python, sql".to_string(),
                    ..Default::default()
                },
            ],
            questions: vec![SkillQuestion {
                skill: "SQL".to_string(),
                question: "Explain the difference between WHERE and HAVING.".to_string(),
            }],
        }
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("alpha beta gamma delta", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
        assert_eq!(wrap_text("short", 80), vec!["short"]);
    }

    #[test]
    fn test_placeholder_color_on_dark_background() {
        let mut options = crate::wordcloud::WordCloudOptions::from_view(&ViewOptions::default());
        assert_eq!(placeholder_color(&crate::wordcloud::generate("", &options)), TEXT_MUT);
        options.background = crate::models::HexColor::new(0, 0, 0);
        assert_eq!(placeholder_color(&crate::wordcloud::generate("", &options)), WHITE_DIM);
    }

    #[test]
    fn test_render_batch_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.pdf");
        let report = batch_analysis(&dataset(), "2023", &ViewOptions::default()).unwrap();
        render_batch(&report, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_student_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("student.pdf");
        let report = student_analysis(&dataset(), "Asha Rao", &ViewOptions::default()).unwrap();
        render_student(&report, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
