//! End-to-end join scenarios against real files on disk.

use std::path::{Path, PathBuf};

use lopdf::{Document, Object, dictionary};
use rstest::rstest;
use tempfile::TempDir;

use pdfjoiner::error::JoinError;
use pdfjoiner::list::FileList;
use pdfjoiner::merge::join_files;

/// Write a small valid PDF with `pages` pages, all sharing the given
/// MediaBox width. Distinct widths let tests verify page order.
fn make_pdf(dir: &Path, name: &str, pages: usize, width: f32) -> PathBuf {
    let mut doc = Document::with_version("1.4");

    let pages_id = doc.new_object_id();

    let mut page_ids = Vec::new();
    for _ in 0..pages {
        let page_id = doc.new_object_id();
        let page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), 792.into()],
        };
        doc.objects.insert(page_id, page.into());
        page_ids.push(page_id);
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.iter().map(|&id| id.into()).collect::<Vec<Object>>(),
        "Count" => pages as i64,
    };
    doc.objects.insert(pages_id, pages_dict.into());

    let catalog_id = doc.new_object_id();
    let catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };
    doc.objects.insert(catalog_id, catalog.into());
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).expect("failed to save test PDF");
    path
}

/// MediaBox widths of the document's pages, in page order.
fn page_widths(path: &Path) -> Vec<f32> {
    let doc = Document::load(path).expect("failed to load joined PDF");
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let Object::Dictionary(dict) = doc.get_object(page_id).unwrap() else {
                panic!("page is not a dictionary");
            };
            let Object::Array(mediabox) = dict.get(b"MediaBox").unwrap() else {
                panic!("MediaBox is not an array");
            };
            mediabox[2].as_float().unwrap()
        })
        .collect()
}

#[tokio::test]
async fn join_two_files_appends_pages_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let a = make_pdf(temp_dir.path(), "a.pdf", 2, 100.0);
    let b = make_pdf(temp_dir.path(), "b.pdf", 3, 200.0);
    let output = temp_dir.path().join("joined.pdf");

    let summary = join_files(&[a, b], &output).await.unwrap();

    assert_eq!(summary.files_joined, 2);
    assert_eq!(summary.total_pages, 5);
    assert_eq!(
        page_widths(&output),
        vec![100.0, 100.0, 200.0, 200.0, 200.0]
    );
}

#[tokio::test]
async fn reordering_the_list_reorders_the_output() {
    let temp_dir = TempDir::new().unwrap();
    let a = make_pdf(temp_dir.path(), "a.pdf", 1, 100.0);
    let b = make_pdf(temp_dir.path(), "b.pdf", 1, 200.0);
    let c = make_pdf(temp_dir.path(), "c.pdf", 1, 300.0);
    let output = temp_dir.path().join("joined.pdf");

    let mut list = FileList::new();
    list.add_all([a, b, c]);
    // Move the last entry up one position: merge order a, c, b.
    list.move_entry(2, -1);

    join_files(&list.paths(), &output).await.unwrap();

    assert_eq!(page_widths(&output), vec![100.0, 300.0, 200.0]);
}

#[rstest]
#[case(&[1], 1)]
#[case(&[1, 1], 2)]
#[case(&[3, 2, 4], 9)]
#[tokio::test]
async fn join_reports_total_page_count(#[case] page_counts: &[usize], #[case] expected: usize) {
    let temp_dir = TempDir::new().unwrap();
    let inputs: Vec<PathBuf> = page_counts
        .iter()
        .enumerate()
        .map(|(i, &pages)| make_pdf(temp_dir.path(), &format!("in{i}.pdf"), pages, 100.0))
        .collect();
    let output = temp_dir.path().join("joined.pdf");

    let summary = join_files(&inputs, &output).await.unwrap();

    assert_eq!(summary.total_pages, expected);
    assert_eq!(page_widths(&output).len(), expected);
}

#[tokio::test]
async fn join_same_file_twice_duplicates_its_pages() {
    let temp_dir = TempDir::new().unwrap();
    let a = make_pdf(temp_dir.path(), "a.pdf", 2, 100.0);
    let output = temp_dir.path().join("joined.pdf");

    let summary = join_files(&[a.clone(), a], &output).await.unwrap();

    assert_eq!(summary.total_pages, 4);
}

#[tokio::test]
async fn join_with_missing_input_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let a = make_pdf(temp_dir.path(), "a.pdf", 1, 100.0);
    let missing = temp_dir.path().join("missing.pdf");
    let output = temp_dir.path().join("joined.pdf");

    let result = join_files(&[a, missing], &output).await;

    assert!(matches!(result, Err(JoinError::FileNotFound { .. })));
    assert!(!output.exists());
}

#[tokio::test]
async fn join_with_garbage_input_reports_load_failure() {
    let temp_dir = TempDir::new().unwrap();
    let a = make_pdf(temp_dir.path(), "a.pdf", 1, 100.0);
    let garbage = temp_dir.path().join("garbage.pdf");
    std::fs::write(&garbage, b"this is not a pdf").unwrap();
    let output = temp_dir.path().join("joined.pdf");

    let result = join_files(&[a, garbage], &output).await;

    match result {
        Err(err) => assert!(err.is_input_error(), "unexpected error: {err}"),
        Ok(_) => panic!("joining garbage input should fail"),
    }
}

#[tokio::test]
async fn join_with_no_inputs_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("joined.pdf");

    let result = join_files(&[], &output).await;

    assert!(matches!(result, Err(JoinError::NoFilesToJoin)));
    assert!(!output.exists());
}

#[tokio::test]
async fn output_overwrites_previous_join() {
    let temp_dir = TempDir::new().unwrap();
    let a = make_pdf(temp_dir.path(), "a.pdf", 1, 100.0);
    let b = make_pdf(temp_dir.path(), "b.pdf", 1, 200.0);
    let output = temp_dir.path().join("joined.pdf");

    join_files(&[a.clone()], &output).await.unwrap();
    assert_eq!(page_widths(&output), vec![100.0]);

    join_files(&[a, b], &output).await.unwrap();
    assert_eq!(page_widths(&output), vec![100.0, 200.0]);
}
