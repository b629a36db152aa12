//! Integration tests for pagination and the writer hand-off.

use repage::{
    classify_text, paginate, paginate_fragments, structure_text, BlockClass, CollectingWriter,
    Document, Error, FigureImage, Page, PageGeometry, PageWriter, RenderOptions, Repage, Result,
};

fn long_body(sentences: usize) -> String {
    "the packet travels across several intermediate routers before arriving. ".repeat(sentences)
}

#[test]
fn raw_text_to_pages_end_to_end() {
    let raw = format!(
        "Network Basics\n\n{}\n\nFigure 1 Example topology.\n\nChapter 2 begins the protocol stack discussion in earnest.",
        long_body(80)
    );

    let doc = structure_text(&raw, "Networking Primer").unwrap();
    let pages = paginate(&doc, &RenderOptions::new().with_author("Ada"));

    // Cover carries title and author but no footer.
    assert_eq!(pages[0].blocks[0].text(), "Networking Primer");
    assert!(pages[0].footer.is_none());

    // Content pages are numbered physically and counted in the footer.
    let content = &pages[1..];
    assert!(content.len() >= 2);
    for (i, page) in content.iter().enumerate() {
        assert_eq!(page.number as usize, i + 2);
        assert_eq!(
            page.footer.as_deref(),
            Some(format!("{} / {}", i + 1, content.len()).as_str())
        );
    }
}

#[test]
fn page_split_is_stable_across_runs() {
    let raw = format!("Heading Words\n\n{}", long_body(150));
    let doc = structure_text(&raw, "T").unwrap();

    let first = paginate(&doc, &RenderOptions::new());
    let second = paginate(&doc, &RenderOptions::new());

    assert_eq!(first, second);
}

#[test]
fn geometry_changes_page_count() {
    let raw = format!("Heading Words\n\n{}", long_body(120));
    let doc = structure_text(&raw, "T").unwrap();

    let a4 = paginate(&doc, &RenderOptions::new());
    let half = PageGeometry {
        height: 421.0,
        ..PageGeometry::a4()
    };
    let small = paginate(&doc, &RenderOptions::new().with_geometry(half));

    assert!(small.len() > a4.len());
}

#[test]
fn no_content_is_lost_or_duplicated() {
    let raw = format!(
        "Network Basics\n\n{}\n\nFigure 1 Example topology.",
        long_body(60)
    );
    let fragments = classify_text(&raw);
    let expected: String = fragments
        .iter()
        .map(|f| f.text.clone())
        .collect::<Vec<_>>()
        .join(" ");

    let pages = paginate_fragments(&fragments, "T", &RenderOptions::new());
    let rendered: String = pages[1..]
        .iter()
        .map(|p| p.plain_text().replace('\n', " "))
        .collect::<Vec<_>>()
        .join(" ");

    assert_eq!(rendered, expected);
}

#[test]
fn defective_nodes_render_with_placeholders() {
    let json = r#"{
        "title": "T",
        "content": [
            {"type": "section", "content": [
                {"type": "paragraph", "text": ""},
                {"type": "figure", "caption": ""},
                {"type": "term"}
            ]},
            {"type": "section", "heading": "Empty", "content": []}
        ]
    }"#;

    let doc = Document::from_json(json).unwrap();
    let pages = paginate(&doc, &RenderOptions::new());
    let text = pages[1].plain_text();

    assert!(text.contains("Untitled Section"));
    assert!(text.contains("No text content"));
    assert!(text.contains("Figure"));
    assert!(text.contains("Term"));
    assert!(text.contains("No definition"));
    assert!(text.contains("No content available"));
}

#[test]
fn bound_image_reserves_a_box() {
    let mut result = Repage::new()
        .structure("Basics\n\nFigure 1 A small diagram.", "T")
        .unwrap();
    result.bind(&[repage::FigureReference::new(
        "Figure 1",
        FigureImage::png(vec![7; 32]),
    )]);

    let pages = result.paginate();
    let classes: Vec<BlockClass> = pages[1].blocks.iter().map(|b| b.class).collect();
    let image_at = classes
        .iter()
        .position(|c| *c == BlockClass::FigureImage)
        .expect("image box present");
    assert_eq!(classes[image_at + 1], BlockClass::FigureCaption);
}

#[test]
fn emphasis_markup_becomes_styled_runs() {
    let doc = structure_text("Basics\n\nthis stays **critical** for operators.", "T").unwrap();
    let pages = paginate(&doc, &RenderOptions::new());

    let body = pages[1]
        .blocks
        .iter()
        .find(|b| b.class == BlockClass::Body)
        .unwrap();
    let bold_run = body.lines[0]
        .runs
        .iter()
        .find(|r| r.style == repage::RunStyle::Bold)
        .expect("bold run present");
    assert_eq!(bold_run.text.trim(), "critical");
}

#[test]
fn writer_receives_pages_in_order() {
    let doc = structure_text(&format!("Heading Words\n\n{}", long_body(100)), "T").unwrap();
    let mut writer = CollectingWriter::new();

    Repage::new()
        .from_document(doc)
        .render_to(&mut writer)
        .unwrap();

    let numbers: Vec<u32> = writer.pages.iter().map(|p| p.number).collect();
    let expected: Vec<u32> = (1..=writer.pages.len() as u32).collect();
    assert_eq!(numbers, expected);
}

#[test]
fn writer_failure_aborts_hand_off() {
    struct LimitedWriter {
        capacity: usize,
        written: usize,
    }

    impl PageWriter for LimitedWriter {
        fn write_page(&mut self, _page: &Page) -> Result<()> {
            if self.written == self.capacity {
                return Err(Error::Writer("page limit exceeded".to_string()));
            }
            self.written += 1;
            Ok(())
        }
    }

    let doc = structure_text(&format!("Heading Words\n\n{}", long_body(200)), "T").unwrap();
    let mut writer = LimitedWriter {
        capacity: 2,
        written: 0,
    };

    let err = Repage::new()
        .from_document(doc)
        .render_to(&mut writer)
        .unwrap_err();
    assert!(matches!(err, Error::Writer(_)));
    assert_eq!(writer.written, 2);
}
