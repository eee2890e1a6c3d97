//! Library page: wires the controller to the library view

use crate::download::{save_bytes, save_remote, ZIP};
use crate::services::use_services;
use crate::session::use_session;
use coloria_common::{items_per_page, SortOption, ViewerCommand};
use coloria_core::bulk::{bulk_download, bulk_soft_delete, DELETE_CONFIRMATION, DOWNLOAD_FAILED};
use coloria_core::controller::fetch_snapshot;
use coloria_core::filename::image_file_name;
use coloria_core::{LibraryController, SavedImageRecord};
use coloria_ui::hooks::{use_debounced, use_viewport_width};
use coloria_ui::{ConfirmDialogView, ImageViewer, LibraryImage, LibraryPageState, LibraryView};
use dioxus::prelude::*;
use tracing::{info, warn};

fn to_library_image(record: &SavedImageRecord) -> LibraryImage {
    LibraryImage {
        id: record.id.clone(),
        image_url: record.image_url.clone(),
        prompt: record.prompt.clone(),
        caption: record.display_name(),
        created_at: record.created_at,
    }
}

#[component]
pub fn Library() -> Element {
    let services = use_services();
    let session = use_session();
    let mut controller = use_signal(LibraryController::default);
    let mut search_input = use_signal(String::new);
    let debounced = use_debounced(search_input, services.config.search_debounce_ms);
    let width = use_viewport_width();
    let mut viewer_downloading = use_signal(|| false);

    use_effect(move || {
        let size = items_per_page(width());
        if controller.peek().page_size() != size {
            controller.write().set_page_size(size);
        }
    });

    use_effect(move || {
        let query = debounced();
        if controller.peek().query() != query {
            controller.write().set_query(&query);
        }
    });

    // Reload whenever the sort order or the signed-in user changes.
    let sort = use_memo(move || controller.read().sort());
    let load_services = services.clone();
    use_effect(move || {
        let sort = sort();
        let Some(current) = session.session() else {
            return;
        };
        let generation = controller.write().begin_load();
        let gateway = load_services.gateway(&current);
        spawn(async move {
            let result = fetch_snapshot(&gateway, &current.user.id, sort).await;
            if let Ok(records) = &result {
                info!("Loaded {} library images", records.len());
            }
            controller.write().finish_load(generation, result);
        });
    });

    let viewer_open = use_memo(move || controller.read().viewer().is_open());
    let confirming_delete = use_memo(move || controller.read().is_confirming_delete());

    let (state, viewer_images, cursor) = {
        let c = controller.read();
        let filtered = c.filtered();
        let state = LibraryPageState {
            loading: c.is_loading(),
            error: c.error().map(str::to_string),
            search: search_input(),
            sort: c.sort(),
            total_count: c.snapshot().len(),
            filtered_count: filtered.len(),
            images: c.page_items().into_iter().map(to_library_image).collect(),
            page: c.page(),
            total_pages: c.total_pages(),
            selected_ids: c.selected_ids(),
            processing: c.is_processing(),
        };
        let images: Vec<LibraryImage> = filtered.into_iter().map(to_library_image).collect();
        (state, images, c.viewer().cursor())
    };
    let processing = state.processing;

    let download_services = services.clone();
    let on_download = move |_| {
        let Some(current) = session.session() else {
            return;
        };
        let Some(ids) = controller.write().begin_download() else {
            return;
        };
        let services = download_services.clone();
        spawn(async move {
            let gateway = services.gateway(&current);
            let result = bulk_download(&gateway, &services.fetcher, &ids).await;
            let finished = controller.write().finish_download(result);
            if let Some(archive) = finished {
                if archive.skipped > 0 {
                    warn!("{} images were left out of the archive", archive.skipped);
                }
                if let Err(e) = save_bytes(&archive.bytes, &archive.file_name, ZIP) {
                    warn!("Saving archive failed: {}", e);
                    controller.write().set_error(DOWNLOAD_FAILED);
                }
            }
        });
    };

    let delete_services = services.clone();
    let on_confirm_delete = move |_| {
        let Some(current) = session.session() else {
            return;
        };
        let Some(ids) = controller.write().begin_delete() else {
            return;
        };
        let services = delete_services.clone();
        spawn(async move {
            let gateway = services.gateway(&current);
            let result = bulk_soft_delete(&gateway, &ids).await;
            if controller.write().finish_delete(&ids, result) {
                info!("Deleted {} images", ids.len());
            }
        });
    };

    let fetcher = services.fetcher.clone();
    let on_viewer_download = move |image: LibraryImage| {
        if viewer_downloading() {
            return;
        }
        viewer_downloading.set(true);
        let fetcher = fetcher.clone();
        spawn(async move {
            let name = image_file_name(&image.prompt);
            if let Err(e) = save_remote(&fetcher, &image.image_url, &name).await {
                warn!("Download failed: {}", e);
                controller.write().set_error("Failed to download image");
            }
            viewer_downloading.set(false);
        });
    };

    rsx! {
        LibraryView {
            state,
            on_search: move |text| search_input.set(text),
            on_sort: move |sort: SortOption| {
                controller.write().set_sort(sort);
            },
            on_prev_page: move |_| controller.write().prev_page(),
            on_next_page: move |_| controller.write().next_page(),
            on_toggle: move |id: String| {
                controller.write().toggle_select(&id);
            },
            on_view: move |index: usize| {
                controller.write().open_viewer(index);
            },
            on_select_all: move |_| controller.write().select_all(),
            on_deselect_all: move |_| controller.write().deselect_all(),
            on_download,
            on_delete: move |_| {
                controller.write().request_delete();
            },
        }
        ImageViewer {
            is_open: ReadSignal::<bool>::from(viewer_open),
            images: viewer_images,
            cursor,
            on_command: move |command: ViewerCommand| {
                controller.write().apply_viewer_command(command);
            },
            on_download: on_viewer_download,
            downloading: viewer_downloading(),
        }
        ConfirmDialogView {
            is_open: ReadSignal::<bool>::from(confirming_delete),
            title: "Delete selected images".to_string(),
            message: DELETE_CONFIRMATION.to_string(),
            confirm_label: "Delete".to_string(),
            busy: processing,
            on_confirm: on_confirm_delete,
            on_cancel: move |_| controller.write().cancel_delete(),
        }
    }
}
