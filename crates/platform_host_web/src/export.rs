//! File-export host-service adapter for browser contexts.

use platform_host::{FileExportFuture, FileExportService, TextFileExport};

#[derive(Debug, Clone, Copy, Default)]
/// Browser export adapter: wraps the payload in a `Blob`, points a temporary anchor at an object
/// URL, clicks it, and revokes the URL.
pub struct WebFileExportService;

impl FileExportService for WebFileExportService {
    fn export_text<'a>(
        &'a self,
        file: &'a TextFileExport,
    ) -> FileExportFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                return download_blob(file);
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = file;
                Err("file export requires a browser host".to_string())
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn download_blob(file: &TextFileExport) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&file.contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|err| format!("blob creation failed: {err:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|err| format!("object url creation failed: {err:?}"))?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "document unavailable".to_string())?;
    let anchor = document
        .create_element("a")
        .map_err(|err| format!("anchor creation failed: {err:?}"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor element cast failed".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&file.file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(|err| format!("revoke failed: {err:?}"))
}
