//! Helpers for synthesizing small PDFs in tests.
//!
//! Every page gets its own MediaBox whose width is `TAG_BASE + n`, where `n`
//! is the page's 1-based position in the file it was created in. Reading the
//! widths back tells which source pages ended up in an output and in what
//! order.

use lopdf::{dictionary, Document, Object};
use std::path::{Path, PathBuf};

const TAG_BASE: i64 = 500;

pub fn sample_document(page_count: u32) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = (1..=page_count)
        .map(|n| {
            let media_box = vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(TAG_BASE + i64::from(n)),
                Object::Integer(792),
            ];
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => media_box,
            });
            Object::Reference(page_id)
        })
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(i64::from(page_count)),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

pub fn write_sample_pdf(dir: &Path, name: &str, page_count: u32) -> PathBuf {
    let path = dir.join(name);
    sample_document(page_count).save(&path).unwrap();
    path
}

/// Original page numbers of the pages in the PDF at `path`, in page order
pub fn page_tags(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .values()
        .map(|page_id| {
            let page = doc.get_dictionary(*page_id).unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            media_box[2].as_i64().unwrap() - TAG_BASE
        })
        .collect()
}
