//! Saving bytes to the user's disk through a temporary blob URL

use coloria_core::fetch::AssetFetcher;
use wasm_bindgen::JsCast;

pub const PNG: &str = "image/png";
pub const ZIP: &str = "application/zip";

fn create_blob_url(data: &[u8], mime_type: &str) -> Result<String, String> {
    let uint8_array = js_sys::Uint8Array::from(data);
    let array = js_sys::Array::new();
    array.push(&uint8_array);

    let opts = web_sys::BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &opts)
        .map_err(|e| format!("Failed to create blob: {e:?}"))?;

    web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create blob URL: {e:?}"))
}

fn revoke_blob_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

fn trigger_download(blob_url: &str, filename: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let body = document.body().ok_or("No document body")?;
    let elem = document
        .create_element("a")
        .map_err(|e| format!("Failed to create link: {e:?}"))?;
    let _ = elem.set_attribute("href", blob_url);
    let _ = elem.set_attribute("download", filename);
    let _ = elem.set_attribute("style", "display:none");
    let _ = body.append_child(&elem);
    if let Some(html_elem) = elem.dyn_ref::<web_sys::HtmlElement>() {
        html_elem.click();
    }
    let _ = body.remove_child(&elem);
    Ok(())
}

/// Hand `data` to the browser as a download named `filename`.
pub fn save_bytes(data: &[u8], filename: &str, mime_type: &str) -> Result<(), String> {
    let url = create_blob_url(data, mime_type)?;
    let result = trigger_download(&url, filename);
    revoke_blob_url(&url);
    result
}

/// Fetch `url` and save it as `filename`.
pub async fn save_remote<F>(fetcher: &F, url: &str, filename: &str) -> Result<(), String>
where
    F: AssetFetcher + ?Sized,
{
    let data = fetcher.fetch(url).await.map_err(|e| e.to_string())?;
    save_bytes(&data, filename, PNG)
}
