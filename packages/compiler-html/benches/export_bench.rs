use criterion::{black_box, criterion_group, criterion_main, Criterion};
use openbuild_compiler_html::{export_html, ExportOptions};
use openbuild_document::{ElementType, ItemType, PageSettings};
use openbuild_editor::Document;

fn build_page(cards: usize) -> Document {
    let mut doc = Document::new();
    let row = doc.add_element(ItemType::SectionColumns, None).unwrap().id;
    let columns = doc.child_ids(row.as_str()).unwrap();

    for i in 0..cards {
        let column = &columns[i % columns.len()];
        doc.add_element(ItemType::Card, Some(column.as_str())).unwrap();
    }
    doc.add_element(ElementType::Ul.into(), None).unwrap();
    doc
}

fn export_small_page(c: &mut Criterion) {
    let elements = build_page(2).to_elements();
    let settings = PageSettings::default();
    let options = ExportOptions::default();

    c.bench_function("export_small_page", |b| {
        b.iter(|| export_html(black_box(&elements), black_box(&settings), &options))
    });
}

fn export_large_page(c: &mut Criterion) {
    let elements = build_page(200).to_elements();
    let settings = PageSettings {
        page_title: "Catalog".to_string(),
        google_tag_manager_id: "GTM-BENCH".to_string(),
        facebook_pixel_id: "123456".to_string(),
        ..Default::default()
    };
    let options = ExportOptions::default();

    c.bench_function("export_large_page", |b| {
        b.iter(|| export_html(black_box(&elements), black_box(&settings), &options))
    });
}

criterion_group!(benches, export_small_page, export_large_page);
criterion_main!(benches);
