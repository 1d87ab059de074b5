//! PDF 报表构建器
//!
//! 基于 printpdf 的轻量封装：标题、正文行、简单表格和条形图，
//! 各导出接口共用。页面为 A4 纵向，字体用内置 Helvetica，
//! 写满后自动换页。

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point, Polygon, Rgb,
};

use crate::errors::{EduSysError, Result};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 18.0;
const LINE_HEIGHT_MM: f32 = 7.0;

pub struct PdfReport {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    cursor_y: f32,
}

impl PdfReport {
    pub fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| EduSysError::report_render(format!("加载 PDF 字体失败: {e}")))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| EduSysError::report_render(format!("加载 PDF 字体失败: {e}")))?;
        let layer = doc.get_page(page).get_layer(layer);

        let mut report = Self {
            doc,
            layer,
            font,
            font_bold,
            cursor_y: PAGE_HEIGHT_MM - MARGIN_MM,
        };
        report.layer.use_text(
            title,
            18.0,
            Mm(MARGIN_MM),
            Mm(report.cursor_y),
            &report.font_bold,
        );
        report.cursor_y -= LINE_HEIGHT_MM * 2.0;
        Ok(report)
    }

    /// 剩余空间不足时换页
    fn ensure_space(&mut self, needed_mm: f32) {
        if self.cursor_y - needed_mm < MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.cursor_y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }

    pub fn heading(&mut self, text: &str) {
        self.ensure_space(LINE_HEIGHT_MM * 2.0);
        self.cursor_y -= LINE_HEIGHT_MM * 0.5;
        self.layer
            .use_text(text, 13.0, Mm(MARGIN_MM), Mm(self.cursor_y), &self.font_bold);
        self.cursor_y -= LINE_HEIGHT_MM;
    }

    pub fn text_line(&mut self, text: &str) {
        self.ensure_space(LINE_HEIGHT_MM);
        self.layer
            .use_text(text, 10.0, Mm(MARGIN_MM), Mm(self.cursor_y), &self.font);
        self.cursor_y -= LINE_HEIGHT_MM;
    }

    pub fn key_value(&mut self, key: &str, value: &str) {
        self.ensure_space(LINE_HEIGHT_MM);
        self.layer
            .use_text(key, 10.0, Mm(MARGIN_MM), Mm(self.cursor_y), &self.font_bold);
        self.layer
            .use_text(value, 10.0, Mm(MARGIN_MM + 60.0), Mm(self.cursor_y), &self.font);
        self.cursor_y -= LINE_HEIGHT_MM;
    }

    /// 等宽分栏的简单表格
    pub fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let usable = PAGE_WIDTH_MM - MARGIN_MM * 2.0;
        let col_width = usable / headers.len().max(1) as f32;

        self.ensure_space(LINE_HEIGHT_MM * 2.0);
        for (i, header) in headers.iter().enumerate() {
            self.layer.use_text(
                *header,
                10.0,
                Mm(MARGIN_MM + col_width * i as f32),
                Mm(self.cursor_y),
                &self.font_bold,
            );
        }
        self.cursor_y -= LINE_HEIGHT_MM;

        for row in rows {
            self.ensure_space(LINE_HEIGHT_MM);
            for (i, cell) in row.iter().enumerate() {
                self.layer.use_text(
                    cell,
                    9.0,
                    Mm(MARGIN_MM + col_width * i as f32),
                    Mm(self.cursor_y),
                    &self.font,
                );
            }
            self.cursor_y -= LINE_HEIGHT_MM;
        }
    }

    /// 水平条形图，value 取 0-100 的百分比
    pub fn bar_chart(&mut self, entries: &[(String, f64)]) {
        const BAR_HEIGHT_MM: f32 = 5.0;
        const LABEL_WIDTH_MM: f32 = 55.0;
        let max_bar = PAGE_WIDTH_MM - MARGIN_MM * 2.0 - LABEL_WIDTH_MM - 14.0;

        for (label, value) in entries {
            self.ensure_space(LINE_HEIGHT_MM);
            self.layer.use_text(
                label,
                9.0,
                Mm(MARGIN_MM),
                Mm(self.cursor_y),
                &self.font,
            );

            let ratio = (value.clamp(0.0, 100.0) / 100.0) as f32;
            let bar_len = max_bar * ratio;
            if bar_len > 0.0 {
                let x0 = MARGIN_MM + LABEL_WIDTH_MM;
                let y0 = self.cursor_y - 1.0;
                self.layer
                    .set_fill_color(Color::Rgb(Rgb::new(0.30, 0.49, 0.76, None)));
                self.layer.add_polygon(Polygon {
                    rings: vec![vec![
                        (Point::new(Mm(x0), Mm(y0)), false),
                        (Point::new(Mm(x0 + bar_len), Mm(y0)), false),
                        (Point::new(Mm(x0 + bar_len), Mm(y0 + BAR_HEIGHT_MM)), false),
                        (Point::new(Mm(x0), Mm(y0 + BAR_HEIGHT_MM)), false),
                    ]],
                    mode: PaintMode::Fill,
                    winding_order: WindingOrder::NonZero,
                });
                self.layer
                    .set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
            }
            self.layer.use_text(
                format!("{value:.1}%"),
                9.0,
                Mm(MARGIN_MM + LABEL_WIDTH_MM + max_bar + 2.0),
                Mm(self.cursor_y),
                &self.font,
            );
            self.cursor_y -= LINE_HEIGHT_MM;
        }
    }

    pub fn finish(self) -> Result<Vec<u8>> {
        self.doc
            .save_to_bytes()
            .map_err(|e| EduSysError::report_render(format!("生成 PDF 失败: {e}")))
    }
}
