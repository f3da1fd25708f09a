use crate::export::layout::{FONT_SIZE, PAGE_HEIGHT, PAGE_WIDTH, PageLayout};
use crate::utils::text::to_win_ansi;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str, TextStr};

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    next_id: i32,
    font_id: Ref,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // ids handed out by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let info_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        pdf.document_info(info_id)
            .title(TextStr("Grade report"))
            .producer(TextStr(concat!(
                "canvas-grade-report ",
                env!("CARGO_PKG_VERSION")
            )));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,
            next_id,
            font_id,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Start a page. The font must be selected again on every page.
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        let mut content = Content::new();
        content.begin_text();
        content.set_font(Name(b"F1"), FONT_SIZE);
        content
    }

    fn finalize_page(&mut self, mut content: Content) {
        content.end_text();
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, text: &str) {
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&to_win_ansi(text)));
    }

    /// Emit one PDF page per layout page.
    pub fn write_pages(&mut self, pages: &[PageLayout]) {
        for layout in pages {
            let mut content = self.new_page();
            for line in &layout.lines {
                self.draw_text(&mut content, line.x, line.y, &line.text);
            }
            self.finalize_page(content);
        }
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.iter().copied());
        drop(pages);
        self.pdf.finish()
    }
}
