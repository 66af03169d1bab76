//! Notepad window content: a plain-text buffer with clear and download.

use desktop_app_contract::{window_primary_input_dom_id, AppModule, AppMountContext, WindowHandle};
use leptos::*;
use platform_host::{FileExportService, TextFileExport};

/// Registry id matching `app.manifest.toml`.
pub const APP_ID: &str = "system.notepad";
/// File name suggested to the host when the buffer is downloaded.
pub const EXPORT_FILE_NAME: &str = "notepad.txt";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotepadBuffer {
    text: String,
}

impl NotepadBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn export_payload(&self) -> TextFileExport {
        TextFileExport::plain_text(EXPORT_FILE_NAME, self.text.clone())
    }
}

/// Hands the buffer to `service` as `notepad.txt`.
///
/// # Errors
///
/// Returns the host's error message when the export is refused.
pub async fn export_buffer(
    service: &dyn FileExportService,
    buffer: &NotepadBuffer,
) -> Result<(), String> {
    service.export_text(&buffer.export_payload()).await
}

pub fn app_module() -> AppModule {
    AppModule::new(mount)
}

fn mount(context: AppMountContext) -> View {
    view! { <NotepadApp window=context.window /> }.into_view()
}

#[component]
/// Notepad app window contents.
pub fn NotepadApp(window: WindowHandle) -> impl IntoView {
    let buffer = create_rw_signal(NotepadBuffer::default());
    let notice = create_rw_signal::<Option<String>>(None);

    let download = move |_| {
        let snapshot = buffer.get_untracked();
        notice.set(None);
        spawn_local(async move {
            let service = platform_host_web::file_export_service();
            if let Err(err) = export_buffer(&service, &snapshot).await {
                logging::warn!("notepad export failed: {err}");
                notice.set(Some(format!("Download failed: {err}")));
            }
        });
    };

    view! {
        <div class="notepad-content">
            <div class="notepad-toolbar">
                <button
                    type="button"
                    class="notepad-clear"
                    on:click=move |_| {
                        buffer.update(NotepadBuffer::clear);
                        notice.set(None);
                    }
                >
                    "Clear"
                </button>
                <button type="button" class="notepad-save" on:click=download>
                    "Download"
                </button>
                <Show when=move || notice.get().is_some() fallback=|| ()>
                    <span class="notepad-notice" role="status">
                        {move || notice.get().unwrap_or_default()}
                    </span>
                </Show>
            </div>
            <textarea
                class="notepad-textarea"
                id=window_primary_input_dom_id(window.window_id)
                placeholder="Start typing..."
                spellcheck="false"
                prop:value=move || buffer.with(|b| b.text().to_string())
                on:input=move |ev| buffer.update(|b| b.set_text(event_target_value(&ev)))
            ></textarea>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use platform_host::{MemoryFileExportService, NoopFileExportService};
    use pretty_assertions::assert_eq;

    #[test]
    fn clear_empties_the_buffer() {
        let mut buffer = NotepadBuffer::default();
        buffer.set_text("draft");
        buffer.clear();
        assert_eq!(buffer.text(), "");
    }

    #[test]
    fn download_exports_plain_text_file() {
        let service = MemoryFileExportService::default();
        let mut buffer = NotepadBuffer::default();
        buffer.set_text("line one\nline two");

        block_on(export_buffer(&service, &buffer)).expect("export");

        assert_eq!(
            service.exported(),
            vec![TextFileExport {
                file_name: "notepad.txt".to_string(),
                mime_type: "text/plain".to_string(),
                contents: "line one\nline two".to_string(),
            }]
        );
    }

    #[test]
    fn empty_buffer_still_exports() {
        let service = MemoryFileExportService::default();
        block_on(export_buffer(&service, &NotepadBuffer::default())).expect("export");
        assert_eq!(service.exported()[0].contents, "");
    }

    #[test]
    fn host_refusal_is_returned() {
        let err = block_on(export_buffer(&NoopFileExportService, &NotepadBuffer::default()))
            .expect_err("noop host refuses");
        assert!(err.contains("not supported"));
    }
}
