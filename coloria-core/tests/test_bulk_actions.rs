mod support;
use crate::support::{record, reload, tracing_init, MemoryFetcher, MemoryGateway};
use coloria_core::bulk::{bulk_download, bulk_soft_delete, DOWNLOAD_FAILED};
use coloria_core::controller::{LibraryController, NOTHING_DOWNLOADED};
use coloria_core::error::LibraryError;
use std::io::{Cursor, Read};
use zip::ZipArchive;

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn library() -> MemoryGateway {
    MemoryGateway::with_records(vec![
        record("a", "user-1", "Red Fox", 0),
        record("b", "user-1", "", 1),
        record("c", "user-1", "Red Fox", 2),
        record("d", "user-1", "Blue Sky", 3),
    ])
}

#[tokio::test]
async fn test_bulk_download_skips_failed_fetches() {
    tracing_init();
    let gateway = library();
    let mut fetcher = MemoryFetcher::serving(&[
        "https://cdn.test/a.png",
        "https://cdn.test/b.png",
        "https://cdn.test/c.png",
    ]);
    fetcher.failing.insert("https://cdn.test/b.png".to_string());

    let download = bulk_download(&gateway, &fetcher, &ids(&["a", "b", "c", "d"]))
        .await
        .unwrap();

    assert_eq!(download.file_name, "selected_images.zip");
    assert_eq!(download.included, 2);
    assert_eq!(download.skipped, 2);
    assert_eq!(fetcher.requested.lock().unwrap().len(), 4);

    let mut archive = ZipArchive::new(Cursor::new(download.bytes)).unwrap();
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    assert_eq!(names, vec!["Red Fox.png", "Red Fox (2).png"]);

    let mut body = Vec::new();
    archive
        .by_name("Red Fox (2).png")
        .unwrap()
        .read_to_end(&mut body)
        .unwrap();
    assert_eq!(body, b"https://cdn.test/c.png");
}

#[tokio::test]
async fn test_bulk_download_names_untitled_by_position() {
    tracing_init();
    let gateway = library();
    let fetcher = MemoryFetcher::serving(&["https://cdn.test/a.png", "https://cdn.test/b.png"]);

    let download = bulk_download(&gateway, &fetcher, &ids(&["a", "b"]))
        .await
        .unwrap();
    let mut archive = ZipArchive::new(Cursor::new(download.bytes)).unwrap();
    assert!(archive.by_name("image_1.png").is_ok());
}

#[tokio::test]
async fn test_bulk_download_all_failed_still_completes() {
    tracing_init();
    let gateway = library();
    let fetcher = MemoryFetcher::default();
    let download = bulk_download(&gateway, &fetcher, &ids(&["a"]))
        .await
        .unwrap();
    assert_eq!(download.included, 0);
    assert_eq!(download.skipped, 1);
    let archive = ZipArchive::new(Cursor::new(download.bytes)).unwrap();
    assert_eq!(archive.len(), 0);
}

#[tokio::test]
async fn test_bulk_download_resolve_failure() {
    tracing_init();
    let gateway = library();
    *gateway.fail_resolve.lock().unwrap() = Some("timeout".to_string());
    let fetcher = MemoryFetcher::serving(&["https://cdn.test/a.png"]);
    let err = bulk_download(&gateway, &fetcher, &ids(&["a"]))
        .await
        .unwrap_err();
    assert_eq!(err, LibraryError::Transport(DOWNLOAD_FAILED.to_string()));
    assert!(fetcher.requested.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_download_flow_reports_empty_archive() {
    tracing_init();
    let gateway = library();
    let fetcher = MemoryFetcher::default();
    let mut controller = LibraryController::new(2);
    reload(&mut controller, &gateway, "user-1").await;

    controller.toggle_select("a");
    let selected = controller.begin_download().unwrap();
    assert!(controller.begin_download().is_none());
    let result = bulk_download(&gateway, &fetcher, &selected).await;
    let download = controller.finish_download(result).unwrap();

    assert_eq!(download.included, 0);
    assert_eq!(controller.error(), Some(NOTHING_DOWNLOADED));
    assert!(!controller.is_processing());
}

#[tokio::test]
async fn test_bulk_actions_need_selection() {
    tracing_init();
    let gateway = library();
    let fetcher = MemoryFetcher::default();
    assert!(matches!(
        bulk_download(&gateway, &fetcher, &[]).await,
        Err(LibraryError::Validation(_))
    ));
    assert!(matches!(
        bulk_soft_delete(&gateway, &[]).await,
        Err(LibraryError::Validation(_))
    ));
    assert!(fetcher.requested.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_removes_exactly_selection() {
    tracing_init();
    let gateway = library();
    let mut controller = LibraryController::new(2);
    reload(&mut controller, &gateway, "user-1").await;

    controller.toggle_select("a");
    controller.toggle_select("c");
    assert!(controller.request_delete());
    let selected = controller.begin_delete().unwrap();
    let result = bulk_soft_delete(&gateway, &selected).await;
    assert!(controller.finish_delete(&selected, result));

    let mut local: Vec<String> = controller.snapshot().iter().map(|r| r.id.clone()).collect();
    local.sort();
    assert_eq!(local, ids(&["b", "d"]));
    assert!(controller.selection().is_empty());
    assert!(!controller.is_processing());

    let mut remote = gateway.active_ids();
    remote.sort();
    assert_eq!(remote, ids(&["b", "d"]));
}

#[tokio::test]
async fn test_delete_without_confirmation_touches_nothing() {
    tracing_init();
    let gateway = library();
    let mut controller = LibraryController::new(2);
    reload(&mut controller, &gateway, "user-1").await;

    controller.toggle_select("a");
    assert!(!controller.is_confirming_delete());
    assert!(controller.begin_delete().is_none());

    assert_eq!(controller.snapshot().len(), 4);
    assert_eq!(controller.selected_ids(), ids(&["a"]));
    assert_eq!(gateway.active_ids().len(), 4);
}

#[tokio::test]
async fn test_delete_failure_leaves_state_untouched() {
    tracing_init();
    let gateway = library();
    let mut controller = LibraryController::new(2);
    reload(&mut controller, &gateway, "user-1").await;
    *gateway.fail_soft_delete.lock().unwrap() = Some("permission denied".to_string());

    controller.toggle_select("a");
    let before = controller.snapshot().to_vec();
    assert!(controller.request_delete());
    let selected = controller.begin_delete().unwrap();
    let result = bulk_soft_delete(&gateway, &selected).await;
    assert!(!controller.finish_delete(&selected, result));

    assert_eq!(controller.snapshot(), before.as_slice());
    assert_eq!(controller.selected_ids(), ids(&["a"]));
    assert_eq!(controller.error(), Some("permission denied"));
    assert_eq!(gateway.active_ids().len(), 4);
}
